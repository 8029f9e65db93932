//! Durango and Charge1 adapter
//!
//! Both processors accept the same plain form fields (`username`, `ccnumber`,
//! `type`, ...) on the same `transact.php` endpoint and answer with a URL
//! query string such as
//! `response=1&responsetext=SUCCESS&authcode=123456&transactionid=281719471&avsresponse=Y&cvvresponse=M&orderid=&response_code=100`.
//!
//! # Examples
//!
//! ```
//! use qs_gateway::processors::query_string::QueryStringResponse;
//! use qs_gateway::response::ResponseDecoder;
//! use qs_gateway::types::Processor;
//!
//! # fn example() -> qs_gateway::Result<()> {
//! let response = QueryStringResponse::decode(
//!     Processor::Durango,
//!     "response=1&transactionid=TXN001&avsresponse=Y&response_code=100",
//! )?;
//! assert!(response.is_approved());
//! assert_eq!(response.transaction_id(), "TXN001");
//! assert_eq!(response.message(), "Transaction was Approved.");
//! # Ok(())
//! # }
//! ```

pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

pub use request::QueryStringRequest;
pub use response::QueryStringResponse;

/// Request field names
pub mod api {
    /// Merchant API username
    pub const API_LOGIN: &str = "username";
    /// Merchant password
    pub const PASSWORD: &str = "password";
    /// auth, sale, capture, void or refund
    pub const TRANSACTION_TYPE: &str = "type";
    /// creditcard or check
    pub const METHOD: &str = "payment";
    pub const AMOUNT: &str = "amount";
    /// Card number without spaces
    pub const CREDIT_CARD_NUMBER: &str = "ccnumber";
    /// MMYY, MM/YY, MM-YY, MMYYYY, MM/YYYY or MM-YYYY
    pub const CREDIT_CARD_EXPIRATION: &str = "ccexp";
    /// Three or four digit card code
    pub const CREDIT_CARD_CODE: &str = "cvv";
    /// Gateway transaction id of the original transaction
    pub const TRANSACTION_ID: &str = "transactionid";
    pub const AUTHORIZATION_CODE: &str = "authcode";
    /// Merchant invoice number
    pub const INVOICE_NUMBER: &str = "orderid";
    pub const DESCRIPTION: &str = "orderdescription";
    pub const FIRST_NAME: &str = "firstname";
    pub const LAST_NAME: &str = "lastname";
    pub const COMPANY: &str = "company";
    pub const ADDRESS: &str = "address1";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP: &str = "zip";
    pub const COUNTRY: &str = "country";
    pub const PHONE: &str = "phone";
    pub const FAX: &str = "fax";
    pub const EMAIL: &str = "email";
    pub const CUSTOMER_IP_ADDRESS: &str = "ipaddress";
    pub const SHIP_FIRST_NAME: &str = "shipping_firstname";
    pub const SHIP_LAST_NAME: &str = "shipping_lastname";
    pub const SHIP_COMPANY: &str = "shipping_company";
    pub const SHIP_ADDRESS: &str = "shipping_address1";
    pub const SHIP_CITY: &str = "shipping_city";
    pub const SHIP_STATE: &str = "shipping_state";
    pub const SHIP_ZIP: &str = "shipping_zip";
    pub const SHIP_COUNTRY: &str = "shipping_country";
    pub const TAX: &str = "tax";
    /// Shipping (freight) amount
    pub const FREIGHT: &str = "shipping";
    pub const PO_NUMBER: &str = "ponumber";

    /// Every request field name the gateway accepts
    pub const API_KEYS: &[&str] = &[
        API_LOGIN,
        PASSWORD,
        TRANSACTION_TYPE,
        METHOD,
        AMOUNT,
        CREDIT_CARD_NUMBER,
        CREDIT_CARD_EXPIRATION,
        CREDIT_CARD_CODE,
        TRANSACTION_ID,
        AUTHORIZATION_CODE,
        INVOICE_NUMBER,
        DESCRIPTION,
        FIRST_NAME,
        LAST_NAME,
        COMPANY,
        ADDRESS,
        CITY,
        STATE,
        ZIP,
        COUNTRY,
        PHONE,
        FAX,
        EMAIL,
        CUSTOMER_IP_ADDRESS,
        SHIP_FIRST_NAME,
        SHIP_LAST_NAME,
        SHIP_COMPANY,
        SHIP_ADDRESS,
        SHIP_CITY,
        SHIP_STATE,
        SHIP_ZIP,
        SHIP_COUNTRY,
        TAX,
        FREIGHT,
        PO_NUMBER,
    ];

    /// Check if the gateway accepts a request field
    pub fn contains_key(key: &str) -> bool {
        API_KEYS.contains(&key)
    }
}

/// Response keys
pub mod keys {
    /// 1 approved, 2 declined, 3 error
    pub const RESPONSE: &str = "response";
    pub const RESPONSE_TEXT: &str = "responsetext";
    pub const AUTHORIZATION_CODE: &str = "authcode";
    pub const TRANSACTION_ID: &str = "transactionid";
    pub const AVS_RESPONSE: &str = "avsresponse";
    pub const CVV_RESPONSE: &str = "cvvresponse";
    pub const INVOICE_NUMBER: &str = "orderid";
    /// Detailed result code, 100 through 461
    pub const RESPONSE_CODE: &str = "response_code";

    /// Labelled keys, in display order
    pub const LABELS: [(&str, &str); 8] = [
        (RESPONSE, "Response"),
        (RESPONSE_TEXT, "Response Reason Text"),
        (AUTHORIZATION_CODE, "Authorization Code"),
        (TRANSACTION_ID, "Transaction ID"),
        (AVS_RESPONSE, "AVS Response"),
        (
            CVV_RESPONSE,
            "Cardholder Authentication Verification Response",
        ),
        (INVOICE_NUMBER, "Invoice Number"),
        (RESPONSE_CODE, "Response Code"),
    ];
}
