//! Site configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{SiteError, SiteResult};

/// Formspree endpoint that relays contact submissions to the owner's inbox.
pub const FORM_RELAY_ENDPOINT: &str = "https://formspree.io/f/xanpaopz";

pub const SUBMISSION_SUBJECT: &str = "Contact Form Submission from Website";

pub const CONTACT_FORM_ID: &str = "contact_form";

/// Analytics source for quotes requested through the contact page form.
pub const CONTACT_PAGE_FORM_SOURCE: &str = "contact_page_form";

/// Analytics source for quotes requested through the contact section button.
pub const CONTACT_SECTION_SOURCE: &str = "contact_section_button";

pub const CONTACT_PATH: &str = "/contact";

/// Configuration shared by the contact form and the quote launcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Third-party endpoint receiving the JSON submission
    pub relay_endpoint: String,
    /// Value sent as `_subject` with every submission
    pub submission_subject: String,
    /// Form id reported with form interaction events
    pub contact_form_id: String,
    /// Quote source reported after a successful form submission
    pub form_source: String,
    /// Quote source reported by the contact section launcher
    pub launcher_source: String,
    /// Page the launcher navigates to
    pub contact_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: FORM_RELAY_ENDPOINT.to_string(),
            submission_subject: SUBMISSION_SUBJECT.to_string(),
            contact_form_id: CONTACT_FORM_ID.to_string(),
            form_source: CONTACT_PAGE_FORM_SOURCE.to_string(),
            launcher_source: CONTACT_SECTION_SOURCE.to_string(),
            contact_path: CONTACT_PATH.to_string(),
        }
    }
}

impl SiteConfig {
    /// Check the endpoint and paths before the site starts serving
    pub fn validate(&self) -> SiteResult<()> {
        let endpoint = Url::parse(&self.relay_endpoint)
            .map_err(|e| SiteError::Config(format!("relay endpoint {}: {}", self.relay_endpoint, e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SiteError::Config(format!(
                "relay endpoint must be http(s), got {}",
                endpoint.scheme()
            )));
        }

        if !self.contact_path.starts_with('/') {
            return Err(SiteError::Config(format!(
                "contact path must be absolute: {}",
                self.contact_path
            )));
        }

        if self.submission_subject.is_empty() {
            return Err(SiteError::Config("submission subject is empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.relay_endpoint, "https://formspree.io/f/xanpaopz");
        assert_eq!(config.contact_path, "/contact");
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let config = SiteConfig {
            relay_endpoint: "/f/xanpaopz".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = SiteConfig {
            relay_endpoint: "ftp://formspree.io/f/xanpaopz".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_rejects_relative_contact_path() {
        let config = SiteConfig {
            contact_path: "contact".to_string(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
