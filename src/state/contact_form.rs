use std::rc::Rc;
use std::sync::OnceLock;

use log::{info, warn};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

use crate::api::SubmitError;

/// The only user-authored entity on the site. Discarded after a successful send.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Inline validation error; `Display` is the message shown under the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("נא להזין שם")]
    MissingName,
    #[error("נא להזין אימייל")]
    MissingEmail,
    #[error("נא להזין כתובת אימייל תקינה")]
    InvalidEmail,
    #[error("נא להזין הודעה")]
    MissingMessage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// `local@domain.tld` shape check, nothing stricter.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

pub fn validate(data: &ContactFormData) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if data.name.trim().is_empty() {
        errors.name = Some(FieldError::MissingName);
    }

    if data.email.trim().is_empty() {
        errors.email = Some(FieldError::MissingEmail);
    } else if !is_valid_email(&data.email) {
        errors.email = Some(FieldError::InvalidEmail);
    }

    if data.message.trim().is_empty() {
        errors.message = Some(FieldError::MissingMessage);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Form values, inline errors and the submission status machine:
///
/// `Idle -> Submitting -> Success | Error -> Idle` (the last edge after a timeout).
///
/// Every accepted submission bumps `epoch`; results and timeouts carry the epoch
/// they were issued for and are dropped if it no longer matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    errors: FieldErrors,
    status: SubmitStatus,
    epoch: u32,
}

impl ContactForm {
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.data.name,
            Field::Email => &self.data.email,
            Field::Message => &self.data.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.data.name = value,
            Field::Email => self.data.email = value,
            Field::Message => self.data.message = value,
        }
    }

    /// Validates and, if everything passes, moves to `Submitting`.
    /// Returns whether a submission was started.
    pub fn submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        match validate(&self.data) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.status = SubmitStatus::Submitting;
                self.epoch = self.epoch.wrapping_add(1);
                true
            }
            Err(errors) => {
                warn!("Contact form rejected: {:?}", errors);
                self.errors = errors;
                false
            }
        }
    }

    /// The payload to send while a submission is in flight.
    pub fn pending(&self) -> Option<(u32, ContactFormData)> {
        self.is_submitting().then(|| (self.epoch, self.data.clone()))
    }

    pub fn finish(&mut self, epoch: u32, result: Result<(), SubmitError>) {
        if epoch != self.epoch || !self.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                info!("Contact message sent");
                self.status = SubmitStatus::Success;
                self.data = ContactFormData::default();
            }
            Err(e) => {
                warn!("Contact message failed: {}", e);
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// Reverts a shown success/error banner to `Idle`.
    pub fn expire(&mut self, epoch: u32) {
        if epoch == self.epoch && matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Finished { epoch: u32, result: Result<(), SubmitError> },
    Expire(u32),
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.set_field(field, value),
            ContactAction::Submit => {
                if next.submit() {
                    info!("Submitting contact message (epoch {})", next.epoch);
                }
            }
            ContactAction::Finished { epoch, result } => next.finish(epoch, result),
            ContactAction::Expire(epoch) => next.expire(epoch),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, name.to_string());
        form.set_field(Field::Email, email.to_string());
        form.set_field(Field::Message, message.to_string());
        form
    }

    #[test]
    fn email_shape() {
        for bad in ["foo", "foo@", "foo@bar", "@bar.com", "a b@c.de", "a@b@c.de", "a@b."] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
        for good in ["a@b.co", "first.last@mail.example.com"] {
            assert!(is_valid_email(good), "{good} should pass");
        }
    }

    #[test]
    fn each_field_fails_independently() {
        let errors = validate(&filled("", "a@b.co", "hi").data).unwrap_err();
        assert_eq!(errors, FieldErrors { name: Some(FieldError::MissingName), ..Default::default() });

        let errors = validate(&filled("A", "", "hi").data).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::MissingEmail));
        assert_eq!(errors.name, None);

        let errors = validate(&filled("A", "foo@bar", "hi").data).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));

        let errors = validate(&filled("A", "a@b.co", "   ").data).unwrap_err();
        assert_eq!(errors.get(Field::Message), Some(FieldError::MissingMessage));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let errors = validate(&filled("  \t", "a@b.co", "hi").data).unwrap_err();
        assert_eq!(errors.name, Some(FieldError::MissingName));
    }

    #[test]
    fn valid_form_submits() {
        let mut form = filled("A", "a@b.co", "hi");
        assert!(form.submit());
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert!(form.errors().is_empty());
        let (epoch, data) = form.pending().unwrap();
        assert_eq!(epoch, 1);
        assert_eq!(data.name, "A");
    }

    #[test]
    fn invalid_submit_shows_errors_and_stays_idle() {
        let mut form = filled("", "foo", "");
        assert!(!form.submit());
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.errors().name, Some(FieldError::MissingName));
        assert_eq!(form.errors().email, Some(FieldError::InvalidEmail));
        assert_eq!(form.errors().message, Some(FieldError::MissingMessage));
        assert!(form.pending().is_none());
    }

    #[test]
    fn success_clears_fields_then_returns_to_idle() {
        let mut form = filled("A", "a@b.co", "hi");
        form.submit();
        let epoch = form.epoch();
        form.finish(epoch, Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
        for field in [Field::Name, Field::Email, Field::Message] {
            assert_eq!(form.value(field), "");
        }
        form.expire(epoch);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let mut form = filled("A", "a@b.co", "hi");
        form.submit();
        let epoch = form.epoch();
        form.finish(epoch, Err(SubmitError::Rejected { status: 500 }));
        assert_eq!(form.status(), SubmitStatus::Error);
        assert_eq!(form.value(Field::Message), "hi");
        assert!(form.submit());
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn in_flight_submission_blocks_another() {
        let mut form = filled("A", "a@b.co", "hi");
        assert!(form.submit());
        assert!(!form.submit());
        assert_eq!(form.epoch(), 1);
    }

    #[test]
    fn stale_timeout_does_not_reset_newer_status() {
        let mut form = filled("A", "a@b.co", "hi");
        form.submit();
        let first = form.epoch();
        form.finish(first, Err(SubmitError::Network("offline".into())));

        form.submit();
        let second = form.epoch();
        form.finish(second, Ok(()));

        form.expire(first);
        assert_eq!(form.status(), SubmitStatus::Success);
        form.expire(second);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn late_result_for_old_epoch_is_ignored() {
        let mut form = filled("A", "a@b.co", "hi");
        form.submit();
        let epoch = form.epoch();
        form.finish(epoch.wrapping_sub(1), Ok(()));
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn reducer_runs_full_cycle() {
        let form = Rc::new(filled("A", "a@b.co", "hi"));
        let form = form.reduce(ContactAction::Submit);
        let epoch = form.epoch();
        let form = form.reduce(ContactAction::Finished { epoch, result: Ok(()) });
        assert_eq!(form.status(), SubmitStatus::Success);
        let form = form.reduce(ContactAction::Expire(epoch));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.value(Field::Name), "");
    }
}
