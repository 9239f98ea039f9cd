//! Contact form submission
//!
//! [`ContactFormState`] owns the draft and the submission phase:
//!
//! ```text
//! Empty -> Editing -> Submitting -> Delivered (-> Empty)
//!                                -> Failed    (-> Editing, draft kept)
//! ```
//!
//! [`ContactSubmitter`] performs the network call for a payload and reports
//! the outcome through analytics and a toast.

use serde::{Deserialize, Serialize};

use crate::analytics::{Analytics, FormStatus};
use crate::notify::{Notifier, Toast};
use crate::relay::FormRelay;
use crate::{ContactDraft, ContactField, SiteConfig, SiteError, SiteResult, SubmissionPayload};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    #[default]
    Empty,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }
}

/// Draft plus submission phase for one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    draft: ContactDraft,
    phase: FormPhase,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Apply a keystroke to one field
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft = self.draft.with_field(field, value);

        // Input stays live while a request is in flight.
        if self.phase != FormPhase::Submitting {
            self.phase = self.idle_phase();
        }
    }

    /// Gate a submit attempt.
    ///
    /// Returns the payload to send and moves to `Submitting`. Blank fields or
    /// a request already in flight leave the state unchanged, so no request
    /// is made.
    pub fn begin_submission(&mut self, subject: &str) -> SiteResult<SubmissionPayload> {
        if self.phase == FormPhase::Submitting {
            return Err(SiteError::SubmissionInFlight);
        }

        if let Some(field) = self.draft.missing_fields().into_iter().next() {
            return Err(SiteError::MissingField(field));
        }

        self.phase = FormPhase::Submitting;
        Ok(self.draft.to_payload(subject))
    }

    /// Resolve the in-flight submission
    pub fn complete_submission(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Delivered => {
                self.draft = ContactDraft::new();
                self.phase = FormPhase::Empty;
            }
            SubmitOutcome::Failed => {
                self.phase = self.idle_phase();
            }
        }
    }

    fn idle_phase(&self) -> FormPhase {
        if self.draft.is_empty() {
            FormPhase::Empty
        } else {
            FormPhase::Editing
        }
    }
}

/// Sends a payload and reports the result to the visitor
pub struct ContactSubmitter<R, A, N> {
    relay: R,
    analytics: A,
    notifier: N,
    form_id: String,
    form_source: String,
}

impl<R, A, N> ContactSubmitter<R, A, N>
where
    R: FormRelay,
    A: Analytics,
    N: Notifier,
{
    pub fn new(relay: R, analytics: A, notifier: N, config: &SiteConfig) -> Self {
        Self {
            relay,
            analytics,
            notifier,
            form_id: config.contact_form_id.clone(),
            form_source: config.form_source.clone(),
        }
    }

    /// Make one delivery attempt. Non-2xx responses and transport errors are
    /// reported identically.
    pub async fn submit(&self, payload: &SubmissionPayload) -> SubmitOutcome {
        match self.relay.deliver(payload).await {
            Ok(()) => {
                tracing::info!("Contact submission delivered");
                self.analytics.track_quote_request(&self.form_source, Vec::new());
                self.analytics
                    .track_form_interaction(&self.form_id, FormStatus::SubmitSuccess);
                self.notifier.notify(Toast::submission_sent());
                SubmitOutcome::Delivered
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                self.analytics
                    .track_form_interaction(&self.form_id, FormStatus::SubmitError);
                self.notifier.notify(Toast::submission_failed());
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnalyticsEvent;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct ScriptedRelay {
        status: Option<u16>,
        sent: RefCell<Vec<SubmissionPayload>>,
    }

    impl ScriptedRelay {
        fn accepting() -> Self {
            Self { status: None, sent: RefCell::new(Vec::new()) }
        }

        fn rejecting(status: u16) -> Self {
            Self { status: Some(status), sent: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for ScriptedRelay {
        async fn deliver(&self, payload: &SubmissionPayload) -> SiteResult<()> {
            self.sent.borrow_mut().push(payload.clone());
            match self.status {
                None => Ok(()),
                Some(status) => Err(SiteError::RelayStatus(status)),
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<AnalyticsEvent>>,
        toasts: RefCell<Vec<Toast>>,
    }

    impl Analytics for Recorder {
        fn track(&self, event: AnalyticsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.update(ContactField::Name, "Alex");
        state.update(ContactField::Phone, "07927 726622");
        state.update(ContactField::Message, "Block paving quote");
        state
    }

    fn interactions(recorder: &Recorder) -> Vec<FormStatus> {
        recorder
            .events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AnalyticsEvent::FormInteraction { status, .. } => Some(*status),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_phase_follows_edits() {
        let mut state = ContactFormState::new();
        assert_eq!(state.phase(), FormPhase::Empty);

        state.update(ContactField::Name, "A");
        assert_eq!(state.phase(), FormPhase::Editing);

        state.update(ContactField::Name, "");
        assert_eq!(state.phase(), FormPhase::Empty);
    }

    #[test]
    fn test_blank_field_blocks_submission() {
        for field in ContactField::ALL {
            let mut state = filled();
            state.update(field, "");

            let result = state.begin_submission("subject");
            assert!(
                matches!(result, Err(SiteError::MissingField(missing)) if missing == field),
                "blank {} was not rejected",
                field
            );
            assert_eq!(state.phase(), FormPhase::Editing);
        }
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut state = filled();
        assert!(state.begin_submission("subject").is_ok());
        assert!(matches!(
            state.begin_submission("subject"),
            Err(SiteError::SubmissionInFlight)
        ));
    }

    #[test]
    fn test_typing_while_submitting_keeps_phase() {
        let mut state = filled();
        state.begin_submission("subject").unwrap();
        state.update(ContactField::Message, "changed my mind");
        assert!(state.is_submitting());
    }

    #[test]
    fn test_payload_carries_subject() {
        let mut state = filled();
        let payload = state
            .begin_submission("Contact Form Submission from Website")
            .unwrap();
        assert_eq!(payload.name, "Alex");
        assert_eq!(payload.subject, "Contact Form Submission from Website");
    }

    #[tokio::test]
    async fn test_successful_submission_resets_draft() {
        let config = SiteConfig::default();
        let relay = ScriptedRelay::accepting();
        let recorder = Recorder::default();
        let submitter = ContactSubmitter::new(&relay, &recorder, &recorder, &config);

        let mut state = filled();
        let payload = state.begin_submission(&config.submission_subject).unwrap();
        let outcome = submitter.submit(&payload).await;
        state.complete_submission(outcome);

        assert_eq!(outcome, SubmitOutcome::Delivered);
        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(*state.draft(), ContactDraft::new());
        assert_eq!(state.phase(), FormPhase::Empty);
        assert_eq!(
            *recorder.events.borrow(),
            vec![
                AnalyticsEvent::quote_requested("contact_page_form", Vec::new()),
                AnalyticsEvent::form_interaction("contact_form", FormStatus::SubmitSuccess),
            ]
        );
        assert_eq!(*recorder.toasts.borrow(), vec![Toast::submission_sent()]);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft() {
        let config = SiteConfig::default();
        let relay = ScriptedRelay::rejecting(500);
        let recorder = Recorder::default();
        let submitter = ContactSubmitter::new(&relay, &recorder, &recorder, &config);

        let mut state = filled();
        let before = state.draft().clone();
        let payload = state.begin_submission(&config.submission_subject).unwrap();
        let outcome = submitter.submit(&payload).await;
        state.complete_submission(outcome);

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(*state.draft(), before);
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(
            *recorder.events.borrow(),
            vec![AnalyticsEvent::form_interaction("contact_form", FormStatus::SubmitError)]
        );
        assert_eq!(*recorder.toasts.borrow(), vec![Toast::submission_failed()]);
    }

    #[tokio::test]
    async fn test_each_attempt_emits_one_interaction() {
        let config = SiteConfig::default();
        let failing = ScriptedRelay::rejecting(503);
        let accepting = ScriptedRelay::accepting();
        let recorder = Recorder::default();

        let mut state = filled();

        let payload = state.begin_submission(&config.submission_subject).unwrap();
        let outcome = ContactSubmitter::new(&failing, &recorder, &recorder, &config)
            .submit(&payload)
            .await;
        state.complete_submission(outcome);

        let payload = state.begin_submission(&config.submission_subject).unwrap();
        let outcome = ContactSubmitter::new(&accepting, &recorder, &recorder, &config)
            .submit(&payload)
            .await;
        state.complete_submission(outcome);

        assert_eq!(
            interactions(&recorder),
            vec![FormStatus::SubmitError, FormStatus::SubmitSuccess]
        );
        assert_eq!(recorder.toasts.borrow().len(), 2);
        assert!(state.draft().is_empty());
    }
}
