//! Contact relay endpoint: `POST /api/contact`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use client::net::types::{ContactRequest, ContactResponse, ErrorBody};

use crate::services::contact::{self, ContactError, contact_error_to_status};
use crate::state::AppState;

/// `POST /api/contact`: validate, rate-limit and forward one message.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let body = ErrorBody { error: rejection.body_text(), fields: Vec::new() };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    let ip = client_ip(&headers, peer, state.trust_forwarded_for);
    match contact::submit(&state, ip, &request).await {
        Ok(()) => (StatusCode::OK, Json(ContactResponse { ok: true })).into_response(),
        Err(e) => {
            if let ContactError::RateLimited(limit) = &e {
                tracing::warn!(client_ip = %ip, error = %limit, "contact submission rate limited");
            }
            (contact_error_to_status(&e), Json(error_body(e))).into_response()
        }
    }
}

fn error_body(err: ContactError) -> ErrorBody {
    let error = err.to_string();
    let fields = match err {
        ContactError::Invalid(fields) => fields.into_vec(),
        _ => Vec::new(),
    };
    ErrorBody { error, fields }
}

/// Client address for rate limiting: the first `X-Forwarded-For` hop when the
/// proxy is trusted and the header parses, otherwise the socket peer.
pub(crate) fn client_ip(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> IpAddr {
    if trust_forwarded_for {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());
        if let Some(ip) = forwarded {
            return ip;
        }
    }
    peer.ip()
}
