//! REST helper for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the form only submits
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings for the error toast instead of
//! panics, so a bad network never breaks hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Turn a non-OK contact response into the message shown to the visitor.
#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, body: Option<&ErrorBody>) -> String {
    match (status, body) {
        (422, Some(body)) if !body.fields.is_empty() => body
            .fields
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        (429, _) => "Too many messages. Please try again later.".to_owned(),
        (_, Some(body)) if !body.error.is_empty() => format!("{} ({status})", body.error),
        _ => format!("contact request failed: {status}"),
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns a displayable error if the request fails or the server responds
/// with a non-OK status.
pub async fn submit_contact(req: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ErrorBody>().await.ok();
            return Err(contact_failed_message(status, body.as_ref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}
