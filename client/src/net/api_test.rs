use super::*;
use crate::net::types::{ContactField, FieldError};

#[test]
fn contact_failed_message_joins_field_errors() {
    let body = ErrorBody {
        error: "validation failed".into(),
        fields: vec![
            FieldError { field: ContactField::Name, message: "Name must be at least 2 characters.".into() },
            FieldError { field: ContactField::Email, message: "Please enter a valid email address.".into() },
        ],
    };
    assert_eq!(
        contact_failed_message(422, Some(&body)),
        "Name must be at least 2 characters. Please enter a valid email address."
    );
}

#[test]
fn contact_failed_message_rate_limited() {
    assert_eq!(contact_failed_message(429, None), "Too many messages. Please try again later.");
}

#[test]
fn contact_failed_message_uses_server_error_text() {
    let body = ErrorBody { error: "email delivery failed".into(), fields: Vec::new() };
    assert_eq!(contact_failed_message(502, Some(&body)), "email delivery failed (502)");
}

#[test]
fn contact_failed_message_without_body_formats_status() {
    assert_eq!(contact_failed_message(500, None), "contact request failed: 500");
}

#[test]
fn contact_endpoint_path() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

