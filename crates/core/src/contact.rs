//! Contact form validation.
//!
//! The contact form is validated locally and never delivered anywhere. A
//! submission either fails with a user-facing message or produces a
//! [`ContactMessage`] carrying a parsed [`Email`].

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Email, EmailError};

/// Names of the contact form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in the order they are checked.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The form input name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a contact form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// A required field was left blank.
    #[error("missing required field: {0}")]
    MissingField(ContactField),
    /// The email field does not look like an email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

impl ContactError {
    /// Message shown to the visitor.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill out all fields.",
            Self::InvalidEmail(_) => "Please enter a valid email address.",
        }
    }
}

/// Raw contact form input as submitted.
///
/// Missing inputs deserialize as empty strings so that they fail validation
/// instead of the request extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// The submitted value of a field.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Validate the submission.
    ///
    /// Empty fields are reported before the email format is checked, so an
    /// empty email is a [`ContactError::MissingField`]. Values are taken as
    /// submitted: whitespace counts as content, and whitespace around the
    /// email makes it invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first empty field, or
    /// [`ContactError::InvalidEmail`] if the email is malformed.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
        {
            return Err(ContactError::MissingField(field));
        }

        let email = Email::parse(&self.email)?;

        Ok(ContactMessage {
            name: self.name.clone(),
            email,
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.in".to_string(),
            subject: "Order question".to_string(),
            message: "Do you ship to Pune?".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let message = filled().validate().unwrap();
        assert_eq!(message.email.as_str(), "asha@example.in");
        assert_eq!(message.subject, "Order question");
    }

    #[test]
    fn test_empty_subject_is_missing_field() {
        let form = ContactForm {
            subject: String::new(),
            ..filled()
        };

        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactError::MissingField(ContactField::Subject));
        assert_eq!(err.user_message(), "Please fill out all fields.");
    }

    #[test]
    fn test_whitespace_only_counts_as_filled() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..filled()
        };
        let message = form.validate().unwrap();
        assert_eq!(message.name, "   ");
    }

    #[test]
    fn test_padded_email_is_invalid_email() {
        for email in [" a@b.co", "a@b.co ", "\ta@b.co"] {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(
                form.validate(),
                Err(ContactError::InvalidEmail(EmailError::ContainsWhitespace)),
                "{email:?}"
            );
        }
    }

    #[test]
    fn test_missing_field_checked_before_email() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Message))
        );
    }

    #[test]
    fn test_bad_email_is_invalid_email() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..filled()
        };

        let err = form.validate().unwrap_err();
        assert!(matches!(err, ContactError::InvalidEmail(_)));
        assert_eq!(err.user_message(), "Please enter a valid email address.");
    }

    #[test]
    fn test_missing_inputs_deserialize_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name": "Asha"}"#).unwrap();
        assert_eq!(form.email, "");
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Email))
        );
    }
}
