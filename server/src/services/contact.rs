//! Contact submission service.
//!
//! Re-validates a submission with the rules the form already applied in the
//! browser, enforces rate limits, then hands the trimmed message to the
//! configured mailer. Nothing is stored.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::net::IpAddr;

use axum::http::StatusCode;
use client::net::types::ContactRequest;
use client::state::contact::{FieldErrors, validate_request};

use crate::mail::MailError;
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("validation failed")]
    Invalid(FieldErrors),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error("contact delivery not configured")]
    Unavailable,
    #[error("email delivery failed")]
    Delivery(#[source] MailError),
}

/// HTTP status for each failure class.
#[must_use]
pub fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        ContactError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Validate, rate-limit and deliver one contact message.
///
/// Invalid input is rejected before it counts against any limit, and a
/// missing mailer is reported before a slot is consumed.
///
/// # Errors
///
/// See [`ContactError`] for the failure classes.
pub async fn submit(state: &AppState, client: IpAddr, request: &ContactRequest) -> Result<(), ContactError> {
    let request = validate_request(request).map_err(ContactError::Invalid)?;
    let Some(mailer) = state.mailer.as_ref() else {
        return Err(ContactError::Unavailable);
    };
    state.rate_limiter.check_and_record(client)?;

    mailer.send(&request).await.map_err(|e| {
        tracing::error!(error = %e, client_ip = %client, "contact delivery failed");
        if let MailError::ApiResponse { body, .. } = &e {
            tracing::debug!(%body, "email service response");
        }
        ContactError::Delivery(e)
    })?;

    tracing::info!(client_ip = %client, "contact message delivered");
    Ok(())
}
