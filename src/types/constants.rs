//! Processor endpoints and wire constants

/// Processor endpoint URLs
pub mod urls {
    use crate::types::Processor;

    /// Authorize.Net sandbox endpoint
    pub const AUTHORIZE_NET_TEST: &str = "https://test.authorize.net/gateway/transact.dll";
    /// Authorize.Net production endpoint
    pub const AUTHORIZE_NET_LIVE: &str = "https://secure.authorize.net/gateway/transact.dll";
    /// Durango endpoint (test and live share it)
    pub const DURANGO: &str = "https://secure.charge1.com/api/transact.php";
    /// Charge1 endpoint (test and live share it)
    pub const CHARGE1: &str = "https://secure.charge1.com/api/transact.php";
    /// PayPal placeholder test endpoint
    pub const PAYPAL_TEST: &str = "test";
    /// PayPal placeholder live endpoint
    pub const PAYPAL_LIVE: &str = "live";

    /// Get the endpoint a processor posts to in the given mode
    pub fn post_url(processor: Processor, test_mode: bool) -> &'static str {
        match (processor, test_mode) {
            (Processor::AuthorizeNet, true) => AUTHORIZE_NET_TEST,
            (Processor::AuthorizeNet, false) => AUTHORIZE_NET_LIVE,
            (Processor::Durango, _) => DURANGO,
            (Processor::Charge1, _) => CHARGE1,
            (Processor::PayPal, true) => PAYPAL_TEST,
            (Processor::PayPal, false) => PAYPAL_LIVE,
        }
    }
}

/// HTTP content type every processor expects for request bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Country code queued with customer and shipping addresses
pub const DEFAULT_COUNTRY: &str = "US";
