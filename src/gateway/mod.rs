//! Gateway dispatcher
//!
//! A [`Gateway`] is built from one [`GatewayInfo`]. It hands out request
//! adapters for the configured processor and sends them: validate,
//! serialize, post, then decode with the decoder matching the request.
//!
//! # Examples
//!
//! ```no_run
//! use qs_gateway::request::RequestBuilder;
//! use qs_gateway::response::ResponseDecoder;
//! use qs_gateway::types::{Customer, GatewayInfo, Processor};
//! use qs_gateway::Gateway;
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> qs_gateway::Result<()> {
//! let gateway = Gateway::new(GatewayInfo::new(Processor::AuthorizeNet, "login", "transaction-key"))?;
//!
//! let mut request = gateway.request();
//! request
//!     .add_customer(&Customer::new("00001", "John", "Smith", "1000 Main St.", "Miami", "FL", "33021"))?
//!     .sale("4111111111111111", "102030", "111", Decimal::new(2500, 2))?;
//!
//! let response = gateway.send(request).await?;
//! if response.is_approved() {
//!     println!("approved: {}", response.transaction_id());
//! } else {
//!     println!("{}: {}", response.status(), response.message());
//! }
//! # Ok(())
//! # }
//! ```

use crate::request::{GatewayRequest, RequestBuilder};
use crate::response::{GatewayResponse, ResponseDecoder};
use crate::transport::{HttpTransport, Transport, TransportConfig};
use crate::types::GatewayInfo;
use crate::Result;


/// Client for one configured payment gateway
#[derive(Debug, Clone)]
pub struct Gateway<T = HttpTransport> {
    info: GatewayInfo,
    transport: T,
    post_url: Option<String>,
}

impl Gateway<HttpTransport> {
    /// Create a gateway with the default HTTP transport
    pub fn new(info: GatewayInfo) -> Result<Self> {
        Self::with_transport_config(info, TransportConfig::default())
    }

    /// Create a gateway with a configured HTTP transport
    pub fn with_transport_config(info: GatewayInfo, config: TransportConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(config)?;
        Self::with_transport(info, transport)
    }
}

impl<T: Transport> Gateway<T> {
    /// Create a gateway over a custom transport
    pub fn with_transport(info: GatewayInfo, transport: T) -> Result<Self> {
        info.validate()?;

        Ok(Self {
            info,
            transport,
            post_url: None,
        })
    }

    /// Post to `url` instead of the processor's endpoint
    pub fn with_post_url(mut self, url: impl Into<String>) -> Self {
        self.post_url = Some(url.into());
        self
    }

    /// Configuration this gateway was built from
    pub fn info(&self) -> &GatewayInfo {
        &self.info
    }

    /// Endpoint a request is posted to
    pub fn post_url<'a>(&'a self, request: &'a GatewayRequest) -> &'a str {
        self.post_url.as_deref().unwrap_or_else(|| request.post_url())
    }

    /// Start a request for the configured processor with its credentials queued
    pub fn request(&self) -> GatewayRequest {
        GatewayRequest::new(
            self.info.processor,
            self.info.username.as_str(),
            self.info.password.as_str(),
            self.info.is_test,
        )
    }

    /// Validate, post and decode a request
    ///
    /// Nothing is sent when validation fails. Each call performs exactly
    /// one exchange with the processor.
    pub async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse> {
        request.validate()?;

        let url = self.post_url(&request);
        let body = request.to_post_string();
        tracing::debug!(
            processor = %request.processor(),
            transaction_type = ?request.transaction_type(),
            fields = ?request.fields().keys().collect::<Vec<_>>(),
            "Sending request to: {}",
            url
        );

        let raw = self.transport.post_form(url, body).await?;

        let response = GatewayResponse::decode(&request, &raw).map_err(|e| {
            tracing::warn!(processor = %request.processor(), "Failed to decode response: {}", e);
            e
        })?;
        tracing::debug!(
            processor = %response.processor(),
            status = %response.status(),
            response_code = response.response_code(),
            "Gateway response decoded"
        );

        Ok(response)
    }
}
