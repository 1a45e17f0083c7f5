//! EmailJS REST client.
//!
//! Sends one templated email per contact message via
//! `POST {base_url}/api/v1.0/email/send`. A 200 response is success; the
//! service answers errors with a plain-text body, kept verbatim for logs.

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use std::time::Duration;

use serde::Serialize;

use client::net::types::ContactRequest;

use super::config::EmailJsConfig;
use super::{ContactMailer, MailError};

const SEND_PATH: &str = "/api/v1.0/email/send";

pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: EmailJsConfig) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| MailError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.config.service_id
    }

    async fn send_json(&self, body: &SendRequest<'_>) -> Result<(), MailError> {
        let url = format!("{}{}", self.config.base_url, SEND_PATH);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| MailError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 200 {
            return Ok(());
        }
        let text = response
            .text()
            .await
            .map_err(|e| MailError::ApiRequest(e.to_string()))?;
        Err(MailError::ApiResponse { status, body: text })
    }
}

#[async_trait::async_trait]
impl ContactMailer for EmailJsClient {
    async fn send(&self, request: &ContactRequest) -> Result<(), MailError> {
        let body = build_send_request(&self.config, request);
        self.send_json(&body).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

fn build_send_request<'a>(config: &'a EmailJsConfig, request: &'a ContactRequest) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: TemplateParams {
            name: &request.name,
            email: &request.email,
            subject: &request.subject,
            message: &request.message,
        },
    }
}
