//! Marketing Site Core
//!
//! Framework-free logic behind the site's contact form and quote launcher:
//! the form draft and its submission state machine, the form-relay client,
//! analytics events and toast notifications. Compiles natively and for
//! `wasm32` so the same code runs in the hydrated browser app and in tests.

pub mod analytics;
pub mod config;
pub mod draft;
pub mod form;
pub mod launcher;
pub mod notify;
pub mod relay;

use thiserror::Error;

pub use analytics::{Analytics, AnalyticsEvent, FormStatus, TracingAnalytics};
pub use config::SiteConfig;
pub use draft::{ContactDraft, ContactField, SubmissionPayload};
pub use form::{ContactFormState, ContactSubmitter, FormPhase, SubmitOutcome};
pub use launcher::{Navigator, QuoteLauncher};
pub use notify::{Notifier, Toast, ToastVariant};
pub use relay::{FormRelay, HttpFormRelay};

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Form relay rejected submission with status {0}")]
    RelayStatus(u16),

    #[error("Required field missing: {0}")]
    MissingField(ContactField),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SiteError::MissingField(ContactField::Phone).to_string(),
            "Required field missing: phone"
        );
        assert_eq!(
            SiteError::RelayStatus(422).to_string(),
            "Form relay rejected submission with status 422"
        );
    }
}
