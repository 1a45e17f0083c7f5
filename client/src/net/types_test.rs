use super::*;

#[test]
fn contact_request_uses_plain_field_names() {
    let req = ContactRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello there".into(),
        message: "A longer message body".into(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["name"], "Ada");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["subject"], "Hello there");
    assert_eq!(value["message"], "A longer message body");
}

#[test]
fn contact_field_serializes_lowercase() {
    let err = FieldError { field: ContactField::Subject, message: "too short".into() };
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"field":"subject","message":"too short"}"#);
}

#[test]
fn contact_field_as_str_matches_serde_name() {
    for field in ContactField::ALL {
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, format!("\"{}\"", field.as_str()));
    }
}

#[test]
fn error_body_omits_empty_fields() {
    let body = ErrorBody { error: "rate limited".into(), fields: Vec::new() };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"rate limited"}"#);
}

#[test]
fn error_body_defaults_missing_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"email delivery failed"}"#).unwrap();
    assert!(body.fields.is_empty());
}
