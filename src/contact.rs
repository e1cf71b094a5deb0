use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email regex is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("The message is empty")]
    MissingMessage,
    #[error("That doesn't look like an email address")]
    InvalidEmail,
    #[error("The {field} field is limited to {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("Email delivery is not configured")]
    NotConfigured,
    #[error("Couldn't deliver message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Matches the `name` attribute of the form inputs.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    fn max_len(&self) -> usize {
        match self {
            Self::Name => MAX_NAME_LEN,
            Self::Email => MAX_EMAIL_LEN,
            Self::Message => MAX_MESSAGE_LEN,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of the contact form. Doubles as the server function argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            let max = field.max_len();
            if self.get(field).chars().count() > max {
                return Err(ContactError::TooLong { field, max });
            }
        }
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn banner(&self) -> Option<(BannerKind, &'static str)> {
        match self {
            Self::Sent => Some((
                BannerKind::Success,
                "Message has been sent successfully! I will get back to you as soon as possible.",
            )),
            Self::Failed(_) => Some((
                BannerKind::Error,
                "Failed to send the message. Please try again later or contact me directly.",
            )),
            Self::Idle | Self::Sending => None,
        }
    }

    /// Detail for a failed submission, shown under the banner.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) if !reason.is_empty() => Some(reason),
            _ => None,
        }
    }
}

/// Client-side state of the contact section: the controlled form plus its
/// submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Start a submission. Hands back the form to send, or `None` when the
    /// form is invalid or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.status.is_sending() {
            return None;
        }
        if let Err(e) = self.form.validate() {
            self.status = SubmitStatus::Failed(e.to_string());
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(self.form.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Sent;
                self.form.clear();
            }
            Err(reason) => self.status = SubmitStatus::Failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ferris".to_string(),
            email: "ferris@rust-lang.org".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_field_from_name() {
        assert_eq!(Field::from_name("name"), Some(Field::Name));
        assert_eq!(Field::from_name("email"), Some(Field::Email));
        assert_eq!(Field::from_name("message"), Some(Field::Message));
        assert_eq!(Field::from_name("phone"), None);
        for field in [Field::Name, Field::Email, Field::Message] {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_set_writes_single_field() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "a@b.co".to_string());
        assert_eq!(form.email, "a@b.co");
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_validate_required_fields() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingName));

        let mut form = filled();
        form.message = "\n\t".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingMessage));

        // email is optional
        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_validate_email_shape() {
        for bad in ["ferris", "ferris@", "@rust-lang.org", "fer ris@x.org", "a@b", "a@b."] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        let mut form = filled();
        form.email = "  first.last+tag@sub.example.com ".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_validate_length_caps() {
        let mut form = filled();
        form.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            form.validate(),
            Err(ContactError::TooLong {
                field: Field::Message,
                max: MAX_MESSAGE_LEN
            })
        );
        // counted in characters, not bytes
        form.message = "é".repeat(MAX_MESSAGE_LEN);
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_status_labels_and_banner() {
        assert_eq!(SubmitStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmitStatus::Sending.button_label(), "Sending...");
        assert_eq!(SubmitStatus::Idle.banner(), None);
        assert_eq!(SubmitStatus::Sending.banner(), None);
        assert!(matches!(
            SubmitStatus::Sent.banner(),
            Some((BannerKind::Success, _))
        ));
        let failed = SubmitStatus::Failed("timeout".to_string());
        assert!(matches!(failed.banner(), Some((BannerKind::Error, _))));
        assert_eq!(failed.reason(), Some("timeout"));
        assert_eq!(SubmitStatus::Failed(String::new()).reason(), None);
    }

    #[test]
    fn test_submit_success_clears_form() {
        let mut state = ContactState {
            form: filled(),
            status: SubmitStatus::Failed("earlier".to_string()),
        };
        let sent = state.begin_submit().expect("valid form should submit");
        assert_eq!(sent, filled());
        assert_eq!(state.status, SubmitStatus::Sending);
        // no double submit while in flight
        assert!(state.begin_submit().is_none());

        state.finish_submit(Ok(()));
        assert_eq!(state.status, SubmitStatus::Sent);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn test_submit_failure_keeps_form() {
        let mut state = ContactState {
            form: filled(),
            status: SubmitStatus::Idle,
        };
        state.begin_submit();
        state.finish_submit(Err("502".to_string()));
        assert_eq!(state.status, SubmitStatus::Failed("502".to_string()));
        assert_eq!(state.form, filled());
    }

    #[test]
    fn test_invalid_form_never_sends() {
        let mut state = ContactState::default();
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.status,
            SubmitStatus::Failed(ContactError::MissingName.to_string())
        );
    }
}
