//! Contact form model: field values, floating-label flags, validation and the
//! simulated submission lifecycle.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::notify::{NoticeSink, Severity};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// DOM id of the input (also its `name`).
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    fn slot(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Message => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingFields,
    #[error("email address is malformed")]
    InvalidEmail,
}

/// Validated form contents, ready to hand to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    values: [String; 4],
    focused: [bool; 4],
    phase: SubmitPhase,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with pre-filled values; filled fields start with the focused flag.
    pub fn prefilled(values: [(Field, &str); 4]) -> Self {
        let mut form = Self::new();
        for (field, value) in values {
            form.values[field.slot()] = value.to_string();
            form.focused[field.slot()] = !value.is_empty();
        }
        form
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.slot()]
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.slot()] = value.into();
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused[field.slot()]
    }

    pub fn focus(&mut self, field: Field) {
        self.focused[field.slot()] = true;
    }

    /// Floating labels stay up while the field holds a value.
    pub fn blur(&mut self, field: Field) {
        if self.value(field).is_empty() {
            self.focused[field.slot()] = false;
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        if Field::ALL.iter().any(|field| self.value(*field).is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(self.value(Field::Email)) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            phone: self.value(Field::Phone).to_string(),
            message: self.value(Field::Message).to_string(),
        })
    }

    /// Validate and, on success, lock the submit control. Submitting while a
    /// send is already pending is a no-op.
    pub fn begin_submit(&mut self) -> Result<Option<ContactSubmission>, ValidationError> {
        if self.is_sending() {
            return Ok(None);
        }
        let submission = self.validate()?;
        self.phase = SubmitPhase::Sending;
        Ok(Some(submission))
    }

    /// Simulated response arrived: clear everything and unlock the button.
    pub fn finish_submit(&mut self) {
        self.values = Default::default();
        self.focused = [false; 4];
        self.phase = SubmitPhase::Idle;
    }
}

/// Handle a submit click: a rejected form yields exactly one error notice worded
/// by `message`; an accepted one locks the form and is returned for sending.
pub fn submit_form(
    form: &mut ContactForm,
    notices: &mut impl NoticeSink,
    message: impl FnOnce(&ValidationError) -> String,
) -> Option<ContactSubmission> {
    match form.begin_submit() {
        Ok(submission) => submission,
        Err(err) => {
            tracing::debug!("contact form rejected: {err}");
            notices.notify(message(&err), Severity::Error);
            None
        }
    }
}

/// The simulated send finished: confirm with a success notice and reset the form.
pub fn complete_submit(form: &mut ContactForm, notices: &mut impl NoticeSink, sent: String) {
    notices.notify(sent, Severity::Success);
    form.finish_submit();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notify::Notifier;

    fn filled() -> ContactForm {
        ContactForm::prefilled([
            (Field::Name, "Arben"),
            (Field::Email, "arben@example.mk"),
            (Field::Phone, "+389 70 123 456"),
            (Field::Message, "Need a quote for a two-storey house."),
        ])
    }

    #[test]
    fn any_empty_field_is_missing() {
        for field in Field::ALL {
            let mut form = filled();
            form.set_value(field, "");
            assert_eq!(form.validate(), Err(ValidationError::MissingFields), "{field:?}");
            assert_eq!(form.begin_submit(), Err(ValidationError::MissingFields));
            assert_eq!(form.phase(), SubmitPhase::Idle);
        }
    }

    #[test]
    fn missing_fields_reported_before_bad_email() {
        let mut form = filled();
        form.set_value(Field::Email, "foo");
        form.set_value(Field::Phone, "");
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn email_pattern() {
        assert!(!is_valid_email("foo"));
        assert!(is_valid_email("foo@bar.com"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("fo o@bar.com"));
        assert!(!is_valid_email("foo@@bar.com"));
        assert!(is_valid_email("a.b@c.d.e"));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled();
        form.set_value(Field::Email, "foo");
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn submit_lifecycle_resets_form() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap().unwrap();
        assert_eq!(submission.email, "arben@example.mk");
        assert!(form.is_sending());
        // Double submit while pending does nothing.
        assert_eq!(form.begin_submit(), Ok(None));

        form.finish_submit();
        assert_eq!(form.phase(), SubmitPhase::Idle);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_focused(field));
        }
    }

    #[test]
    fn focus_flags_follow_floating_label_rules() {
        let mut form = ContactForm::new();
        assert!(!form.is_focused(Field::Name));
        form.focus(Field::Name);
        form.blur(Field::Name);
        assert!(!form.is_focused(Field::Name));

        form.focus(Field::Name);
        form.set_value(Field::Name, "Ana");
        form.blur(Field::Name);
        assert!(form.is_focused(Field::Name));

        assert!(filled().is_focused(Field::Message));
    }

    fn wording(err: &ValidationError) -> String {
        err.to_string()
    }

    #[test]
    fn rejected_submit_shows_one_error_and_never_sends() {
        let mut notifier = Notifier::new();
        let mut form = filled();
        form.set_value(Field::Phone, "");

        assert_eq!(submit_form(&mut form, &mut notifier, wording), None);
        let notice = notifier.current().expect("error notice shown");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "all fields are required");
        assert!(!form.is_sending());

        // A second bad click replaces the notice instead of stacking one.
        form.set_value(Field::Phone, "070 123 456");
        form.set_value(Field::Email, "foo");
        assert_eq!(submit_form(&mut form, &mut notifier, wording), None);
        let notice = notifier.current().expect("error notice shown");
        assert_eq!(notice.id, 2);
        assert_eq!(notice.message, "email address is malformed");
        assert!(!form.is_sending());
    }

    #[test]
    fn accepted_submit_sends_then_confirms() {
        let mut notifier = Notifier::new();
        let mut form = filled();

        let submission = submit_form(&mut form, &mut notifier, wording).expect("accepted");
        assert_eq!(submission.name, "Arben");
        assert!(notifier.current().is_none());
        assert!(form.is_sending());
        // Clicking again while pending is ignored silently.
        assert_eq!(submit_form(&mut form, &mut notifier, wording), None);
        assert!(notifier.current().is_none());

        complete_submit(&mut form, &mut notifier, "Sent".into());
        let notice = notifier.current().expect("success notice shown");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(form, ContactForm::new());
    }
}
