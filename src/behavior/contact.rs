use thiserror::Error;

use super::notify::Notification;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing field: {}", .0.name())]
    MissingField(ContactField),
}

/// The contact form's fields. Submission is validated locally and never sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        match ContactField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    /// Validates the form, clears it on success, and returns the notification to show.
    pub fn submit(&mut self) -> Notification {
        match self.validate() {
            Ok(()) => {
                log::info!("contact form accepted");
                *self = Self::default();
                Notification::success(SENT_MESSAGE)
            }
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                Notification::error(MISSING_FIELDS_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::notify::NotificationKind;
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_clears_form() {
        let mut form = filled();
        let note = form.submit();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, SENT_MESSAGE);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_empty_message_keeps_fields() {
        let mut form = ContactForm {
            message: String::new(),
            ..filled()
        };
        let before = form.clone();
        let note = form.submit();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, MISSING_FIELDS_MESSAGE);
        assert_eq!(form, before);
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut form = filled();
        form.set(ContactField::Name, "   ".to_string());
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_first_missing_field_reported() {
        let form = ContactForm::default();
        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactError::MissingField(ContactField::Name));
        assert_eq!(err.to_string(), "missing field: name");
    }
}
