//! Toast notifications

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Transient, non-blocking message shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn submission_sent() -> Self {
        Self::new(
            "Message sent!",
            "Thank you for contacting us. We'll respond within 24 hours.",
        )
    }

    pub fn submission_failed() -> Self {
        Self::destructive(
            "Error sending message",
            "Please try again or contact us directly.",
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Displays toasts to the visitor
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_toasts() {
        let sent = Toast::submission_sent();
        assert_eq!(sent.title, "Message sent!");
        assert!(!sent.is_destructive());

        let failed = Toast::submission_failed();
        assert_eq!(failed.description, "Please try again or contact us directly.");
        assert!(failed.is_destructive());
    }
}
