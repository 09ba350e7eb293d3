use std::{collections::BTreeMap, fmt, future::Future, sync::LazyLock, time::Duration};

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Invalid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.0.values().map(ToString::to_string).collect::<Vec<_>>();
        f.write_str(&messages.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, FieldError::Required(field));
            }
        }
        if errors.get(Field::Email).is_none() && !is_valid_email(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    /// The success banner is showing.
    Sent,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form has errors: {0}")]
    Invalid(FieldErrors),
    #[error("a message is already being sent")]
    InFlight,
}

/// Identifies one success banner so a stale timer can't hide a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AckToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    status: SubmitStatus,
    ack: AckToken,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Editing a field clears any message shown for it.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.status == SubmitStatus::Sending {
            return Err(SubmitError::InFlight);
        }
        match self.fields.validate() {
            Ok(message) => {
                self.errors = FieldErrors::default();
                self.status = SubmitStatus::Sending;
                Ok(message)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Clears the form and shows the success banner. Pass the returned token
    /// to [`ContactForm::dismiss_ack`] to hide this banner.
    pub fn complete_submit(&mut self) -> AckToken {
        self.fields = ContactFields::default();
        self.status = SubmitStatus::Sent;
        self.ack = AckToken(self.ack.0.wrapping_add(1));
        self.ack
    }

    /// Hides the banner shown for `ack`. Tokens from earlier submissions do nothing.
    pub fn dismiss_ack(&mut self, ack: AckToken) {
        if self.status == SubmitStatus::Sent && self.ack == ack {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// Where validated messages go.
pub trait Delivery {
    fn deliver(&self, message: ContactMessage) -> impl Future<Output = ()>;
}

/// Pretends to send a message by waiting a fixed delay. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDelivery {
    pub delay: Duration,
}

impl Delivery for SimulatedDelivery {
    async fn deliver(&self, message: ContactMessage) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(self.delay).await;
        // submissions only happen in the browser
        #[cfg(not(feature = "hydrate"))]
        let _ = self.delay;
        log::info!("Form submitted: {message:?}");
    }
}

/// Validate, deliver, then reset the form.
pub async fn submit<D: Delivery>(
    form: &mut ContactForm,
    delivery: &D,
) -> Result<AckToken, SubmitError> {
    let message = form.begin_submit()?;
    delivery.deliver(message).await;
    Ok(form.complete_submit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelivery {
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl Delivery for RecordingDelivery {
        async fn deliver(&self, message: ContactMessage) {
            self.sent.borrow_mut().push(message);
        }
    }

    fn fill(form: &mut ContactForm, email: &str) {
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Email, email.to_string());
        form.set(Field::Subject, "Hello".to_string());
        form.set(Field::Message, "Let's build something".to_string());
    }

    fn filled_form(email: &str) -> ContactForm {
        let mut form = ContactForm::default();
        fill(&mut form, email);
        form
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("your.email@example.com"));
        assert!(is_valid_email("A.B+tag@Sub.Example.ORG"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain.c"));
        assert!(!is_valid_email("two words@example.com"));
    }

    #[test]
    fn test_required_messages() {
        let errors = ContactFields::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(Field::Name).map(|e| e.to_string()).as_deref(),
            Some("Name is required")
        );
        assert_eq!(
            errors.get(Field::Email),
            Some(FieldError::Required(Field::Email))
        );

        let fields = ContactFields {
            name: "  ".to_string(),
            email: "bad".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        };
        let errors = fields.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required(Field::Name)));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::Subject), None);
    }

    #[test]
    fn test_invalid_email_never_sends() {
        let delivery = RecordingDelivery::default();
        let mut form = filled_form("not-an-email");

        let res = block_on(submit(&mut form, &delivery));
        assert!(matches!(res, Err(SubmitError::Invalid(_))));
        assert!(delivery.sent.borrow().is_empty());
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.errors().get(Field::Email), Some(FieldError::InvalidEmail));
        // the user's input is kept so they can fix it
        assert_eq!(form.fields().email, "not-an-email");
    }

    #[test]
    fn test_valid_submit_acknowledges_once_and_clears() {
        let delivery = RecordingDelivery::default();
        let mut form = filled_form("ada@example.com");

        let ack = block_on(submit(&mut form, &delivery)).expect("valid form should submit");
        assert_eq!(delivery.sent.borrow().len(), 1);
        assert_eq!(delivery.sent.borrow()[0].email, "ada@example.com");
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert!(form.fields().is_empty());
        assert!(form.errors().is_empty());

        form.dismiss_ack(ack);
        assert_eq!(form.status(), SubmitStatus::Idle);
        // dismissing again does nothing
        form.dismiss_ack(ack);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_earlier_timer_keeps_later_banner() {
        let delivery = RecordingDelivery::default();
        let mut form = filled_form("ada@example.com");
        let first = block_on(submit(&mut form, &delivery)).unwrap();

        // a second message goes out while the first banner is still up
        fill(&mut form, "grace@example.com");
        let second = block_on(submit(&mut form, &delivery)).unwrap();
        assert_ne!(first, second);

        form.dismiss_ack(first);
        assert_eq!(form.status(), SubmitStatus::Sent);
        form.dismiss_ack(second);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_no_double_submit_while_sending() {
        let mut form = filled_form("ada@example.com");
        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmitStatus::Sending);
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_err());
        assert_eq!(form.errors().len(), 4);

        form.set(Field::Subject, "Hi".to_string());
        assert_eq!(form.errors().get(Field::Subject), None);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_simulated_delivery_completes() {
        let delivery = SimulatedDelivery {
            delay: Duration::from_millis(1),
        };
        let mut form = filled_form("ada@example.com");
        block_on(submit(&mut form, &delivery)).unwrap();
        assert_eq!(form.status(), SubmitStatus::Sent);
    }
}
