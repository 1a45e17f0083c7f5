//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional contact mailer and the contact rate limiter. The
//! site itself is static, so there is nothing else to share.

use std::sync::Arc;

use crate::mail::ContactMailer;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is `Arc`-backed or `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Contact mailer. `None` if delivery is disabled or misconfigured.
    pub mailer: Option<Arc<dyn ContactMailer>>,
    /// In-memory rate limiter for contact submissions.
    pub rate_limiter: RateLimiter,
    /// Take the client address from `X-Forwarded-For` (behind a reverse proxy).
    pub trust_forwarded_for: bool,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn ContactMailer>>, rate_limiter: RateLimiter) -> Self {
        Self { mailer, rate_limiter, trust_forwarded_for: false }
    }

    #[must_use]
    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::time::Duration;

    use client::net::types::ContactRequest;

    use super::*;
    use crate::mail::MailError;
    use crate::rate_limit::RateLimitConfig;

    /// Records every delivered message; optionally fails with a fixed status.
    #[derive(Default)]
    pub struct MockMailer {
        pub sent: Mutex<Vec<ContactRequest>>,
        pub fail_status: Option<u16>,
    }

    impl MockMailer {
        #[must_use]
        pub fn failing(status: u16) -> Self {
            Self { sent: Mutex::new(Vec::new()), fail_status: Some(status) }
        }

        pub fn sent(&self) -> Vec<ContactRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ContactMailer for MockMailer {
        async fn send(&self, request: &ContactRequest) -> Result<(), MailError> {
            if let Some(status) = self.fail_status {
                return Err(MailError::ApiResponse { status, body: "mock failure".into() });
            }
            self.sent.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    /// Limiter with small fixed limits, independent of the process env.
    #[must_use]
    pub fn test_rate_limiter() -> RateLimiter {
        RateLimiter::with_config(RateLimitConfig {
            per_client_limit: 2,
            per_client_window: Duration::from_secs(60),
            global_limit: 10,
            global_window: Duration::from_secs(60),
        })
    }

    /// Create a test `AppState` with no mailer configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, test_rate_limiter())
    }

    /// Create a test `AppState` with a mock mailer.
    #[must_use]
    pub fn test_app_state_with_mailer(mailer: Arc<MockMailer>) -> AppState {
        AppState::new(Some(mailer), test_rate_limiter())
    }

    /// A submission that passes validation.
    #[must_use]
    pub fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Project inquiry".into(),
            message: "I would like to talk about a project.".into(),
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
