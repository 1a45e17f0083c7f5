//! Contact form plus direct email and social cards.
//!
//! Submission rules live in `state::contact`. This component only wires
//! them to inputs: errors appear after the first submit attempt and then
//! track the input live, and one request may be in flight at a time.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use super::toast::schedule_dismiss;
use crate::content::{PROFILE, Profile};
use crate::net::types::ContactField;
use crate::state::contact::{ContactForm, FieldErrors};
use crate::state::ui::{ToastKind, UiState};

const SUCCESS_TITLE: &str = "Message Sent!";
const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I will get back to you soon.";
const FAILURE_TITLE: &str = "Message not sent";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Sending..." } else { "Send Message" }
}

fn input_id(field: ContactField) -> String {
    format!("contact-{}", field.as_str())
}

/// Apply a finished submission. Success clears the form and thanks the
/// visitor; failure keeps the input for a retry and shows the reason.
/// Returns the id of the toast raised.
fn apply_submit_result(form: &mut ContactForm, ui: &mut UiState, result: Result<(), String>) -> u64 {
    match result {
        Ok(()) => {
            form.clear();
            ui.show_toast(ToastKind::Success, SUCCESS_TITLE, SUCCESS_DESCRIPTION)
        }
        Err(reason) => ui.show_toast(ToastKind::Error, FAILURE_TITLE, reason),
    }
}

#[component]
pub fn ContactSection(#[prop(default = PROFILE)] profile: Profile) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let attempted = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let on_edit = Callback::new(move |()| {
        if attempted.get_untracked() {
            let next = form.with_untracked(ContactForm::validate).err().unwrap_or_default();
            errors.set(next);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        attempted.set(true);
        let request = match form.with_untracked(ContactForm::validate) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        submitting.set(true);

        let finish = move |result: Result<(), String>| {
            let succeeded = result.is_ok();
            let mut toast_id = 0;
            form.update(|f| ui.update(|u| toast_id = apply_submit_result(f, u, result)));
            if succeeded {
                attempted.set(false);
            }
            schedule_dismiss(ui, toast_id);
            submitting.set(false);
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&request).await;
            if let Err(e) = &result {
                log::warn!("contact submission failed: {e}");
            }
            finish(result);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            finish(Err("Sending is only available in the browser.".to_owned()));
        }
    };

    view! {
        <section id="contact" class="section section--muted contact">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">"Get In Touch"</h2>
                    <p class="section__subtitle">
                        "Have a project in mind or want to discuss potential opportunities? Feel free to reach out \
                         using the form below or through my social media channels."
                    </p>
                </header>

                <div class="contact__grid">
                    <div class="card">
                        <form class="contact-form card__body" on:submit=on_submit novalidate=true>
                            <FormField
                                field=ContactField::Name
                                label="Name"
                                placeholder="Your name"
                                form=form
                                errors=errors
                                on_edit=on_edit
                            />
                            <FormField
                                field=ContactField::Email
                                label="Email"
                                placeholder="your.email@example.com"
                                input_type="email"
                                form=form
                                errors=errors
                                on_edit=on_edit
                            />
                            <FormField
                                field=ContactField::Subject
                                label="Subject"
                                placeholder="What is this regarding?"
                                form=form
                                errors=errors
                                on_edit=on_edit
                            />
                            <FormField
                                field=ContactField::Message
                                label="Message"
                                placeholder="Your message here..."
                                multiline=true
                                form=form
                                errors=errors
                                on_edit=on_edit
                            />
                            <button
                                class="button button--primary button--block"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || submit_label(submitting.get())}
                            </button>
                        </form>
                    </div>

                    <div class="contact__aside">
                        <div class="card card__body">
                            <h3 class="contact__card-title">
                                <Icon kind=IconKind::Mail size=20/>
                                "Email Me"
                            </h3>
                            <p class="muted">"For inquiries and opportunities:"</p>
                            <a class="link" href=profile.mailto()>{profile.email}</a>
                        </div>
                        <div class="card card__body">
                            <h3 class="contact__card-title">
                                <Icon kind=IconKind::MessageSquare size=20/>
                                "Connect With Me"
                            </h3>
                            <p class="muted">"Follow me on social media:"</p>
                            <div class="contact__social">
                                {profile
                                    .social
                                    .github
                                    .map(|href| {
                                        view! {
                                            <a href=href target="_blank" rel="noopener noreferrer">
                                                <Icon kind=IconKind::Github size=20/>
                                                <span>"GitHub"</span>
                                            </a>
                                        }
                                    })}
                                {profile
                                    .social
                                    .linkedin
                                    .map(|href| {
                                        view! {
                                            <a href=href target="_blank" rel="noopener noreferrer">
                                                <Icon kind=IconKind::Linkedin size=20/>
                                                <span>"LinkedIn"</span>
                                            </a>
                                        }
                                    })}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Labelled input (or textarea) bound to one form field, with its inline
/// validation message.
#[component]
fn FormField(
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    form: RwSignal<ContactForm>,
    errors: RwSignal<FieldErrors>,
    on_edit: Callback<()>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = input_id(field);
    let error_id = format!("{id}-error");
    let value = move || form.with(|f| f.get(field).to_owned());
    let invalid = move || errors.with(|e| e.get(field).is_some()).to_string();
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.set(field, next));
        on_edit.run(());
    };

    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                class="input input--multiline"
                name=field.as_str()
                placeholder=placeholder
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                class="input"
                type=input_type
                name=field.as_str()
                placeholder=placeholder
                aria-invalid=invalid
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>{label}</label>
            {control}
            <p id=error_id class="form-field__error" role="alert">
                {move || errors.with(|e| e.get(field).map(str::to_owned))}
            </p>
        </div>
    }
}

#[cfg(test)]
#[path = "contact_section_test.rs"]
mod contact_section_test;
