//! Analytics events
//!
//! Fire-and-forget signals sent to an external tracking service. Sinks
//! implement [`Analytics`]; the browser app forwards events to gtag.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Outcome reported with a form interaction event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    SubmitSuccess,
    SubmitError,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::SubmitSuccess => "submit_success",
            FormStatus::SubmitError => "submit_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsEvent {
    /// A visitor asked for a quote
    QuoteRequested { source: String, details: Vec<String> },
    /// A form was submitted, successfully or not
    FormInteraction { form_id: String, status: FormStatus },
}

impl AnalyticsEvent {
    pub fn quote_requested(source: impl Into<String>, details: Vec<String>) -> Self {
        AnalyticsEvent::QuoteRequested {
            source: source.into(),
            details,
        }
    }

    pub fn form_interaction(form_id: impl Into<String>, status: FormStatus) -> Self {
        AnalyticsEvent::FormInteraction {
            form_id: form_id.into(),
            status,
        }
    }

    /// Event name as reported to gtag
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::QuoteRequested { .. } => "quote_request",
            AnalyticsEvent::FormInteraction { .. } => "form_interaction",
        }
    }

    /// Event parameters as reported to gtag
    pub fn params(&self) -> Value {
        match self {
            AnalyticsEvent::QuoteRequested { source, details } => json!({
                "source": source,
                "details": details,
            }),
            AnalyticsEvent::FormInteraction { form_id, status } => json!({
                "form_id": form_id,
                "status": status.as_str(),
            }),
        }
    }
}

/// Sink for analytics events
pub trait Analytics {
    fn track(&self, event: AnalyticsEvent);

    fn track_quote_request(&self, source: &str, details: Vec<String>) {
        self.track(AnalyticsEvent::quote_requested(source, details));
    }

    fn track_form_interaction(&self, form_id: &str, status: FormStatus) {
        self.track(AnalyticsEvent::form_interaction(form_id, status));
    }
}

impl<A: Analytics + ?Sized> Analytics for &A {
    fn track(&self, event: AnalyticsEvent) {
        (**self).track(event);
    }
}

/// Writes events to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        tracing::info!(event = event.name(), params = %event.params(), "analytics event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<AnalyticsEvent>>);

    impl Analytics for Recorder {
        fn track(&self, event: AnalyticsEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    #[test]
    fn test_quote_request_params() {
        let event = AnalyticsEvent::quote_requested("contact_section_button", Vec::new());
        assert_eq!(event.name(), "quote_request");
        assert_eq!(
            event.params(),
            json!({ "source": "contact_section_button", "details": [] })
        );
    }

    #[test]
    fn test_form_interaction_params() {
        let event = AnalyticsEvent::form_interaction("contact_form", FormStatus::SubmitError);
        assert_eq!(event.name(), "form_interaction");
        assert_eq!(
            event.params(),
            json!({ "form_id": "contact_form", "status": "submit_error" })
        );
    }

    #[test]
    fn test_helpers_route_through_track() {
        let recorder = Recorder::default();
        recorder.track_quote_request("contact_page_form", Vec::new());
        recorder.track_form_interaction("contact_form", FormStatus::SubmitSuccess);

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                AnalyticsEvent::quote_requested("contact_page_form", Vec::new()),
                AnalyticsEvent::form_interaction("contact_form", FormStatus::SubmitSuccess),
            ]
        );
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let value = serde_json::to_value(FormStatus::SubmitSuccess).unwrap();
        assert_eq!(value, json!("submit_success"));
    }
}
