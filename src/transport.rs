//! HTTP transport for processor requests
//!
//! The gateway hands a finished form body to a [`Transport`] and gets the
//! raw response body back. [`HttpTransport`] is the `reqwest` implementation;
//! tests and callers with their own HTTP stack can supply another.

use crate::types::FORM_CONTENT_TYPE;
use crate::{GatewayError, Result};
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// One request/response exchange with a processor endpoint
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a form-encoded body and return the response body as text
    async fn post_form(&self, url: &str, body: String) -> Result<String>;
}

/// Settings for [`HttpTransport`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportConfig {
    /// Request timeout, none by default
    pub timeout: Option<Duration>,
    /// Accept invalid TLS certificates on this transport only
    pub skip_certificate_validation: bool,
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skip TLS certificate validation for test endpoints with self-signed certificates
    pub fn with_skip_certificate_validation(mut self, skip: bool) -> Self {
        self.skip_certificate_validation = skip;
        self
    }
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport from explicit settings
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if config.skip_certificate_validation {
            tracing::warn!("TLS certificate validation disabled for this transport");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<String> {
        tracing::debug!("Sending request to: {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let response_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            tracing::warn!(
                "Gateway request failed with status: {}. Response body: {}",
                status,
                response_body
            );
            return Err(GatewayError::transport(format!(
                "Request failed with status: {}. Response: {}",
                status, response_body
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_transport_config_builder() {
        let config = TransportConfig::new()
            .with_timeout(Duration::from_secs(30))
            .with_skip_certificate_validation(true);

        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.skip_certificate_validation);
        assert!(!TransportConfig::default().skip_certificate_validation);
    }

    #[tokio::test]
    async fn test_post_form_sends_body_and_content_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/transact.php")
            .match_header("content-type", FORM_CONTENT_TYPE)
            .match_body(Matcher::Exact("username=demo&type=auth".to_string()))
            .with_status(200)
            .with_body("response=1&transactionid=TXN001")
            .create_async()
            .await;

        let transport = HttpTransport::new().unwrap();
        let body = transport
            .post_form(
                &format!("{}/transact.php", server.url()),
                "username=demo&type=auth".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(body, "response=1&transactionid=TXN001");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/transact.dll")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let transport = HttpTransport::with_config(
            TransportConfig::new().with_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        let error = transport
            .post_form(&format!("{}/transact.dll", server.url()), String::new())
            .await
            .unwrap_err();

        assert!(error.is_transport());
        assert!(error.to_string().contains("503"));
        assert!(error.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let transport = HttpTransport::new().unwrap();
        let error = transport
            .post_form("http://127.0.0.1:1/transact.php", String::new())
            .await
            .unwrap_err();

        assert!(matches!(error, GatewayError::Http(_)));
        assert!(error.is_transport());
    }
}
