//! # qs-gateway
//!
//! A unified client over several incompatible credit-card processor APIs.
//! Callers describe an authorize, sale, settle, void or refund once; each
//! processor adapter maps it onto its own wire fields, required-field rules,
//! encoding and response grammar.
//!
//! ## Supported processors
//!
//! - **Authorize.Net** (AIM): `x_*` form fields, positional delimited responses
//! - **Durango** and **Charge1**: shared form vocabulary, query-string responses
//! - **PayPal**: recognized, every operation reports [`GatewayError::Unsupported`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qs_gateway::{Gateway, GatewayInfo, Processor, RequestBuilder, ResponseDecoder};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let info = GatewayInfo::from_env("GATEWAY")?;
//!     let gateway = Gateway::new(info)?;
//!
//!     let mut request = gateway.request();
//!     request
//!         .add_invoice("1234")?
//!         .authorize("4111111111111111", "102030", "111", Decimal::from_str("100.00")?)?;
//!
//!     let response = gateway.send(request).await?;
//!     println!("{}", response);
//!
//!     if response.is_approved() {
//!         let mut settle = gateway.request();
//!         settle.settle_full(response.transaction_id())?;
//!         gateway.send(settle).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building a request without sending it
//!
//! ```
//! use qs_gateway::{GatewayRequest, Processor, RequestBuilder};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> qs_gateway::Result<()> {
//! let mut request = GatewayRequest::new(Processor::AuthorizeNet, "login", "key", true);
//! request.void("2149186848")?;
//! request.validate()?;
//!
//! let body = request.to_post_string();
//! assert!(body.contains("x_type=VOID"));
//! assert!(body.contains("x_trans_id=2149186848"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fields;
pub mod gateway;
pub mod processors;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use error::{GatewayError, Result};
pub use fields::FieldTable;
pub use gateway::Gateway;
pub use request::{GatewayRequest, RequestBuilder};
pub use response::{GatewayResponse, ResponseDecoder, ResponseStatus, ResponseSummary};
pub use transport::{HttpTransport, Transport, TransportConfig};
pub use types::*;

/// Current version of the qs-gateway library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_every_processor_builds_a_request() {
        for processor in Processor::all() {
            let request = GatewayRequest::new(processor, "user", "pass", true);
            assert_eq!(request.processor(), processor);
            assert_eq!(request.transaction_type(), None);
            assert_eq!(request.post_url(), urls::post_url(processor, true));
        }
    }

    #[test]
    fn test_supported_processors() {
        assert!(Processor::AuthorizeNet.is_supported());
        assert!(Processor::Durango.is_supported());
        assert!(Processor::Charge1.is_supported());
        assert!(!Processor::PayPal.is_supported());
    }
}
