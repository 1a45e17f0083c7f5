//! Contact form values and the validation rules shared with the server.
//!
//! Lengths are counted in characters on trimmed input. The email check
//! accepts `local@domain.tld` where the local part uses letters, digits and
//! `_ ' + - .` (no leading dot, no trailing dot or apostrophe), labels start
//! alphanumeric, the TLD is two or more letters, and `..` appears nowhere.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::{ContactField, ContactRequest, FieldError};

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 5;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const SUBJECT_MAX_CHARS: usize = 200;
pub const MESSAGE_MAX_CHARS: usize = 5000;

const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
const EMAIL_INVALID: &str = "Please enter a valid email address.";
const SUBJECT_TOO_SHORT: &str = "Subject must be at least 5 characters.";
const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

/// Per-field validation messages, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }

    fn push(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

/// Raw form input, bound to the four inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self) -> Result<ContactRequest, FieldErrors> {
        validate_request(&ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// Validate a request and return a trimmed copy.
///
/// # Errors
///
/// Returns one message per failing field.
pub fn validate_request(req: &ContactRequest) -> Result<ContactRequest, FieldErrors> {
    let trimmed = ContactRequest {
        name: req.name.trim().to_owned(),
        email: req.email.trim().to_owned(),
        subject: req.subject.trim().to_owned(),
        message: req.message.trim().to_owned(),
    };

    let mut errors = FieldErrors::default();
    if let Some(msg) = check_length("Name", &trimmed.name, NAME_MIN_CHARS, NAME_MAX_CHARS, NAME_TOO_SHORT) {
        errors.push(ContactField::Name, msg);
    }
    if trimmed.email.chars().count() > EMAIL_MAX_CHARS || !is_valid_email(&trimmed.email) {
        errors.push(ContactField::Email, EMAIL_INVALID);
    }
    if let Some(msg) = check_length(
        "Subject",
        &trimmed.subject,
        SUBJECT_MIN_CHARS,
        SUBJECT_MAX_CHARS,
        SUBJECT_TOO_SHORT,
    ) {
        errors.push(ContactField::Subject, msg);
    }
    if let Some(msg) = check_length(
        "Message",
        &trimmed.message,
        MESSAGE_MIN_CHARS,
        MESSAGE_MAX_CHARS,
        MESSAGE_TOO_SHORT,
    ) {
        errors.push(ContactField::Message, msg);
    }

    if errors.is_empty() { Ok(trimmed) } else { Err(errors) }
}

fn check_length(label: &str, value: &str, min: usize, max: usize, too_short: &str) -> Option<String> {
    let count = value.chars().count();
    if count < min {
        Some(too_short.to_owned())
    } else if count > max {
        Some(format!("{label} must be at most {max} characters."))
    } else {
        None
    }
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.contains("..") {
        return false;
    }
    let Some((local, domain)) = raw.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let Some(last) = local.chars().last() else {
        return false;
    };
    !local.starts_with('.')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
        && (last.is_ascii_alphanumeric() || matches!(last, '_' | '+' | '-'))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    rest.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
