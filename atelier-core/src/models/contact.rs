// Atelier - A server-rendered portfolio and news site built with Rust
// Copyright (C) 2025 Atelier Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use serde::{Deserialize, Serialize};

/// Raw contact form fields as submitted. `website` is the honeypot: it is
/// hidden in the form, so any non-empty value marks a bot submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub website: Option<String>,
}

/// A validated contact message, ready to hand to the notification sender.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was turned away before reaching the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRejection {
    /// The honeypot field was filled in.
    Honeypot,
    /// One of name, email, message is missing or empty.
    MissingField,
}

impl ContactRejection {
    /// Stable error code reported to the client.
    pub fn as_code(&self) -> &'static str {
        match self {
            ContactRejection::Honeypot => "invalid",
            ContactRejection::MissingField => "missing",
        }
    }
}

impl ContactSubmission {
    /// Validate the submission. The honeypot is checked first so that bot
    /// traffic is rejected before any other rule runs.
    pub fn validate(self) -> Result<ContactMessage, ContactRejection> {
        if let Some(website) = &self.website {
            if !website.is_empty() {
                return Err(ContactRejection::Honeypot);
            }
        }

        let name = self.name.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let message = self.message.unwrap_or_default();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactRejection::MissingField);
        }

        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

impl ContactMessage {
    /// Subject line for the outbound notification.
    pub fn subject(&self) -> String {
        format!("[Portfolio] Contact from {}", self.name)
    }

    /// Plain-text body for the outbound notification.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_submission() -> ContactSubmission {
        ContactSubmission {
            name: Some("Aki".to_string()),
            email: Some("aki@example.com".to_string()),
            message: Some("Hello there".to_string()),
            website: None,
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let message = complete_submission().validate().unwrap();

        assert_eq!(message.name, "Aki");
        assert_eq!(message.email, "aki@example.com");
        assert_eq!(message.message, "Hello there");
    }

    #[test]
    fn test_empty_honeypot_is_ignored() {
        let submission = ContactSubmission {
            website: Some(String::new()),
            ..complete_submission()
        };

        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_filled_honeypot_rejects() {
        let submission = ContactSubmission {
            website: Some("https://spam.example".to_string()),
            ..complete_submission()
        };

        assert_eq!(submission.validate(), Err(ContactRejection::Honeypot));
    }

    #[test]
    fn test_honeypot_checked_before_missing_fields() {
        // A bot that fills the honeypot but skips required fields must be
        // classified as a bot, not as an incomplete submission
        let submission = ContactSubmission {
            name: None,
            email: None,
            message: None,
            website: Some("x".to_string()),
        };

        assert_eq!(submission.validate(), Err(ContactRejection::Honeypot));
    }

    #[test]
    fn test_missing_name_rejects() {
        let submission = ContactSubmission {
            name: None,
            ..complete_submission()
        };

        assert_eq!(submission.validate(), Err(ContactRejection::MissingField));
    }

    #[test]
    fn test_empty_email_rejects() {
        let submission = ContactSubmission {
            email: Some(String::new()),
            ..complete_submission()
        };

        assert_eq!(submission.validate(), Err(ContactRejection::MissingField));
    }

    #[test]
    fn test_missing_message_rejects() {
        let submission = ContactSubmission {
            message: None,
            ..complete_submission()
        };

        assert_eq!(submission.validate(), Err(ContactRejection::MissingField));
    }

    #[test]
    fn test_rejection_codes() {
        assert_eq!(ContactRejection::Honeypot.as_code(), "invalid");
        assert_eq!(ContactRejection::MissingField.as_code(), "missing");
    }

    #[test]
    fn test_subject_includes_sender_name() {
        let message = complete_submission().validate().unwrap();

        assert_eq!(message.subject(), "[Portfolio] Contact from Aki");
    }

    #[test]
    fn test_body_layout() {
        let message = complete_submission().validate().unwrap();

        assert_eq!(
            message.body(),
            "Name: Aki\nEmail: aki@example.com\nMessage:\nHello there"
        );
    }
}
