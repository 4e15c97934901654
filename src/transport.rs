//! Backend transport module
//!
//! This module talks to the site backend:
//! - `POST /api/contact` with a JSON body
//! - `POST /api/apply-job` with a multipart body (or JSON when replaying an
//!   application that has no resume)
//! - Response decoding into [`ApiResponse`]
//!
//! The [`Backend`] trait is the seam between the submission handlers and the
//! network; [`HttpBackend`] is the `reqwest` implementation.

use crate::config::{ApiConfig, Endpoint};
use crate::forms::{ContactSubmission, JobApplication, ResumeFile};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Response body shared by both endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the backend accepted the submission
    #[serde(default)]
    pub success: bool,
    /// Error text when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Informational text on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Id assigned to a stored job application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<i64>,
}

impl ApiResponse {
    /// Successful response
    pub fn accepted() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Refusal with an error text
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Failure to get a usable answer from the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout, or request construction failure
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result of a backend call
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Sends submissions to the site backend
pub trait Backend: Send + Sync {
    /// `POST /api/contact` with a JSON body
    fn post_contact(
        &self,
        config: &ApiConfig,
        submission: &ContactSubmission,
    ) -> impl Future<Output = TransportResult<ApiResponse>> + Send;

    /// `POST /api/apply-job` with a multipart body and optional `resume` part
    fn post_application(
        &self,
        config: &ApiConfig,
        application: &JobApplication,
        resume: Option<&ResumeFile>,
    ) -> impl Future<Output = TransportResult<ApiResponse>> + Send;

    /// `POST /api/apply-job` with a JSON body
    fn post_application_json(
        &self,
        config: &ApiConfig,
        application: &JobApplication,
    ) -> impl Future<Output = TransportResult<ApiResponse>> + Send;
}

/// HTTP backend over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend with the given request timeout
    pub fn new(timeout: Duration) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a backend around an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn read_response(url: &str, response: reqwest::Response) -> TransportResult<ApiResponse> {
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {}", url, status);
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn send(&self, url: String, request: reqwest::RequestBuilder) -> TransportResult<ApiResponse> {
        debug!("POST {}", url);
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Self::read_response(&url, response).await
    }
}

impl Backend for HttpBackend {
    async fn post_contact(
        &self,
        config: &ApiConfig,
        submission: &ContactSubmission,
    ) -> TransportResult<ApiResponse> {
        let url = config.endpoint_url(Endpoint::Contact);
        let request = self.client.post(&url).json(submission);
        self.send(url, request).await
    }

    async fn post_application(
        &self,
        config: &ApiConfig,
        application: &JobApplication,
        resume: Option<&ResumeFile>,
    ) -> TransportResult<ApiResponse> {
        let url = config.endpoint_url(Endpoint::ApplyJob);

        let mut form = Form::new();
        for (name, value) in application.form_fields() {
            form = form.text(name, value.to_string());
        }
        if let Some(resume) = resume {
            let part = Part::bytes(resume.data.clone())
                .file_name(resume.name.clone())
                .mime_str(&resume.mime)
                .map_err(|e| TransportError::Request(format!("Invalid resume MIME type: {}", e)))?;
            form = form.part("resume", part);
        }

        let request = self.client.post(&url).multipart(form);
        self.send(url, request).await
    }

    async fn post_application_json(
        &self,
        config: &ApiConfig,
        application: &JobApplication,
    ) -> TransportResult<ApiResponse> {
        let url = config.endpoint_url(Endpoint::ApplyJob);
        let request = self.client.post(&url).json(application);
        self.send(url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decoding_tolerates_extra_fields() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"success": true, "message": "Job application submitted successfully", "application_id": 7}"#,
        )
        .expect("decode");
        assert!(response.success);
        assert_eq!(response.application_id, Some(7));
    }

    #[test]
    fn test_response_missing_success_is_false() {
        let response: ApiResponse = serde_json::from_str(r#"{"error": "boom"}"#).expect("decode");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(TransportError::Status(503).to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_request_error() {
        let backend = HttpBackend::new(Duration::from_secs(2)).expect("client");
        // Port 9 (discard) is not expected to run an HTTP server
        let config = ApiConfig::new("http://127.0.0.1:9");
        let result = backend.post_contact(&config, &ContactSubmission::default()).await;
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
