//! Mail: forwards contact messages to the email delivery service.
//!
//! DESIGN
//! ======
//! Handlers only see the [`ContactMailer`] trait so they can be exercised
//! with a mock. The production implementation is [`emailjs::EmailJsClient`],
//! configured from environment variables by [`config::EmailJsConfig`].

pub mod config;
pub mod emailjs;

use client::net::types::ContactRequest;

pub use config::{ConfigError, EmailJsConfig};
pub use emailjs::EmailJsClient;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors produced while delivering a contact message.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The HTTP request to the email service failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The email service returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MAILER TRAIT
// =============================================================================

/// Delivery seam for contact messages. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// Deliver one validated contact message.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the request cannot be sent or the service
    /// rejects it.
    async fn send(&self, request: &ContactRequest) -> Result<(), MailError>;
}
