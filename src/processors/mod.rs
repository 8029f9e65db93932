//! Per-processor request and response adapters
//!
//! # Architecture
//!
//! - [`authorize_net`] - Authorize.Net AIM: `x_*` request fields, positional
//!   delimited responses
//! - [`query_string`] - Durango and Charge1: shared request vocabulary,
//!   URL-query-string responses
//! - [`paypal`] - placeholder adapter; every capability is unsupported
//!
//! Adapters are normally reached through [`crate::request::GatewayRequest`]
//! and [`crate::response::GatewayResponse`] rather than used directly.

pub mod authorize_net;
pub mod paypal;
pub mod query_string;

/// Parse an integer field, defaulting to zero on anything malformed
pub(crate) fn parse_int(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Parse a decimal field, defaulting to zero on anything malformed
pub(crate) fn parse_decimal(value: &str) -> rust_decimal::Decimal {
    value.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_numeric_parsing_never_fails() {
        assert_eq!(parse_int(" 1 "), 1);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_decimal("100.50"), Decimal::from_str("100.50").unwrap());
        assert_eq!(parse_decimal("1,000.00"), Decimal::ZERO);
        assert_eq!(parse_decimal(""), Decimal::ZERO);
    }
}
