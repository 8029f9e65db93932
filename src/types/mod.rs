//! Core types shared by every processor adapter
//!
//! This module defines the processor-agnostic vocabulary of the crate: which
//! processor a gateway talks to, which kind of transaction a request performs,
//! the customer and shipping details callers attach, and the gateway
//! configuration.
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`processor`] - Processor identity and transaction type enums
//! - [`gateway_info`] - Gateway configuration (credentials, test mode)
//! - [`customer`] - Billing customer and shipping address
//! - [`constants`] - Endpoint URLs and wire constants
//!
//! # Examples
//!
//! ## Configuring a Gateway
//!
//! ```
//! use qs_gateway::types::{GatewayInfo, Processor};
//!
//! # fn example() -> qs_gateway::Result<()> {
//! let info = GatewayInfo::new(Processor::Durango, "demo", "password")
//!     .with_gateway_id(1)
//!     .with_test_mode(true);
//!
//! info.validate()?;
//! assert_eq!(info.post_url(), "https://secure.charge1.com/api/transact.php");
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing a Processor Name
//!
//! ```
//! use qs_gateway::types::Processor;
//!
//! let processor: Processor = "authorize_net".parse().unwrap();
//! assert_eq!(processor, Processor::AuthorizeNet);
//! assert_eq!(processor.to_string(), "AuthorizeNet");
//! ```

pub mod constants;
pub mod customer;
pub mod gateway_info;
pub mod processor;

// Re-export commonly used types
pub use constants::{urls, DEFAULT_COUNTRY, FORM_CONTENT_TYPE};
pub use customer::{expiry_mmyyyy, Customer, Shipping};
pub use gateway_info::GatewayInfo;
pub use processor::{Processor, TransactionType};
