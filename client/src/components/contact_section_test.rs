use super::*;

#[test]
fn submit_label_reflects_in_flight_state() {
    assert_eq!(submit_label(false), "Send Message");
    assert_eq!(submit_label(true), "Sending...");
}

#[test]
fn input_ids_are_namespaced_by_field() {
    assert_eq!(input_id(ContactField::Email), "contact-email");
    assert_eq!(input_id(ContactField::Message), "contact-message");
}

#[test]
fn success_copy_matches_toast_text() {
    assert_eq!(SUCCESS_TITLE, "Message Sent!");
    assert!(SUCCESS_DESCRIPTION.starts_with("Thank you for your message."));
}

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Enjoyed the portfolio, let's talk.".into(),
    }
}

#[test]
fn successful_send_clears_form_and_raises_success_toast() {
    let mut form = filled_form();
    let mut ui = UiState::default();

    let id = apply_submit_result(&mut form, &mut ui, Ok(()));

    assert_eq!(form, ContactForm::default());
    let toast = ui.toast.expect("toast shown");
    assert_eq!(toast.id, id);
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, SUCCESS_TITLE);
    assert_eq!(toast.description, SUCCESS_DESCRIPTION);
}

#[test]
fn failed_send_keeps_input_and_reports_reason() {
    let mut form = filled_form();
    let mut ui = UiState::default();

    apply_submit_result(&mut form, &mut ui, Err("Too many requests, try again later.".into()));

    assert_eq!(form, filled_form());
    let toast = ui.toast.expect("toast shown");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, FAILURE_TITLE);
    assert_eq!(toast.description, "Too many requests, try again later.");
}

#[test]
fn retry_after_failure_replaces_error_toast() {
    let mut form = filled_form();
    let mut ui = UiState::default();

    let first = apply_submit_result(&mut form, &mut ui, Err("offline".into()));
    let second = apply_submit_result(&mut form, &mut ui, Ok(()));

    assert_ne!(first, second);
    assert_eq!(ui.toast.map(|t| t.kind), Some(ToastKind::Success));
}
