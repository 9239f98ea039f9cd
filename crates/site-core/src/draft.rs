//! Contact form draft

use serde::{Deserialize, Serialize};

/// Required fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Phone, ContactField::Message];

    /// DOM id of the input, also the JSON key it is submitted under
    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name *",
            ContactField::Phone => "Phone Number *",
            ContactField::Message => "Message *",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Phone => "07927 726622",
            ContactField::Message => "Tell us about your project...",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// In-memory, not yet submitted form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// Replace a single field in place
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Copy of the draft with one field replaced
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// Required fields that are still blank.
    ///
    /// Mirrors the browser `required` constraint: only the empty string is
    /// blank, whitespace counts as a value.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn to_payload(&self, subject: &str) -> SubmissionPayload {
        SubmissionPayload {
            name: self.name.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            subject: subject.to_string(),
        }
    }
}

/// JSON body posted to the form relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = ContactDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.missing_fields(), ContactField::ALL.to_vec());
    }

    #[test]
    fn test_with_field_leaves_others_untouched() {
        let draft = ContactDraft::new()
            .with_field(ContactField::Name, "Jo")
            .with_field(ContactField::Phone, "0123");
        let edited = draft.with_field(ContactField::Name, "Joanna");

        assert_eq!(edited.name, "Joanna");
        assert_eq!(edited.phone, "0123");
        assert_eq!(edited.message, "");
        assert_eq!(draft.name, "Jo");
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let draft = ContactDraft::new().with_field(ContactField::Phone, "0123");
        assert_eq!(
            draft.missing_fields(),
            vec![ContactField::Name, ContactField::Message]
        );
        assert!(!draft.is_complete());
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_whitespace_satisfies_required() {
        let draft = ContactDraft {
            name: " ".to_string(),
            phone: "0123".to_string(),
            message: "hi".to_string(),
        };
        assert!(draft.is_complete());
    }

    #[test]
    fn test_payload_wire_format() {
        let draft = ContactDraft {
            name: "Sam".to_string(),
            phone: "07000 000000".to_string(),
            message: "New driveway please".to_string(),
        };
        let payload = draft.to_payload("Contact Form Submission from Website");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Sam",
                "phone": "07000 000000",
                "message": "New driveway please",
                "_subject": "Contact Form Submission from Website",
            })
        );
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(ContactField::Phone.id(), "phone");
        assert_eq!(ContactField::Phone.label(), "Phone Number *");
        assert_eq!(ContactField::Message.placeholder(), "Tell us about your project...");
    }
}
