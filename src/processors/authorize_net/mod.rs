//! Authorize.Net AIM adapter
//!
//! Requests are `x_*` form fields; responses are a single line of fields
//! separated by the delimiter character the request asked for
//! (`x_delim_char`, `|` by default). Fields carry no names on the wire; the
//! offsets in [`offsets`] are the contract.
//!
//! # Examples
//!
//! ```
//! use qs_gateway::processors::authorize_net::AuthorizeNetResponse;
//! use qs_gateway::response::ResponseDecoder;
//!
//! # fn example() -> qs_gateway::Result<()> {
//! let response = AuthorizeNetResponse::decode("1|2|3|Approved|AUTH123|Y|TXN001", '|')?;
//! assert!(response.is_approved());
//! assert_eq!(response.authorization_code(), "AUTH123");
//! assert_eq!(response.avs_response(), "Address (Street) and five digit ZIP match");
//! # Ok(())
//! # }
//! ```

pub mod request;
pub mod response;

#[cfg(test)]
mod tests;

pub use request::AuthorizeNetRequest;
pub use response::AuthorizeNetResponse;

/// Request field names
pub mod api {
    /// Merchant API login id
    pub const API_LOGIN: &str = "x_login";
    /// Merchant transaction key
    pub const TRANSACTION_KEY: &str = "x_tran_key";
    /// AUTH_CAPTURE, AUTH_ONLY, CAPTURE_ONLY, CREDIT, PRIOR_AUTH_CAPTURE or VOID
    pub const TRANSACTION_TYPE: &str = "x_type";
    /// CC or ECHECK
    pub const METHOD: &str = "x_method";
    pub const AMOUNT: &str = "x_amount";
    /// 13 to 16 digits without spaces; only the last four are needed for CREDIT
    pub const CREDIT_CARD_NUMBER: &str = "x_card_num";
    /// MMYY, MM/YY, MM-YY, MMYYYY, MM/YYYY or MM-YYYY
    pub const CREDIT_CARD_EXPIRATION: &str = "x_exp_date";
    /// Three or four digit card code
    pub const CREDIT_CARD_CODE: &str = "x_card_code";
    /// Gateway transaction id of the original transaction
    pub const TRANSACTION_ID: &str = "x_trans_id";
    pub const AUTHORIZATION_CODE: &str = "x_auth_code";
    pub const INVOICE_NUMBER: &str = "x_invoice_num";
    pub const DESCRIPTION: &str = "x_description";
    pub const CUSTOMER_ID: &str = "x_cust_id";
    pub const FIRST_NAME: &str = "x_first_name";
    pub const LAST_NAME: &str = "x_last_name";
    pub const COMPANY: &str = "x_company";
    pub const ADDRESS: &str = "x_address";
    pub const CITY: &str = "x_city";
    pub const STATE: &str = "x_state";
    pub const ZIP: &str = "x_zip";
    pub const COUNTRY: &str = "x_country";
    pub const PHONE: &str = "x_phone";
    pub const FAX: &str = "x_fax";
    pub const EMAIL: &str = "x_email";
    pub const CUSTOMER_IP_ADDRESS: &str = "x_customer_ip";
    pub const SHIP_FIRST_NAME: &str = "x_ship_to_first_name";
    pub const SHIP_LAST_NAME: &str = "x_ship_to_last_name";
    pub const SHIP_COMPANY: &str = "x_ship_to_company";
    pub const SHIP_ADDRESS: &str = "x_ship_to_address";
    pub const SHIP_CITY: &str = "x_ship_to_city";
    pub const SHIP_STATE: &str = "x_ship_to_state";
    pub const SHIP_ZIP: &str = "x_ship_to_zip";
    pub const SHIP_COUNTRY: &str = "x_ship_to_country";
    pub const TAX: &str = "x_tax";
    pub const FREIGHT: &str = "x_freight";
    pub const DUTY: &str = "x_duty";
    pub const TAX_EXEMPT: &str = "x_tax_exempt";
    pub const PO_NUMBER: &str = "x_po_num";
    /// Ask for a delimited response
    pub const DELIMIT_DATA: &str = "x_delim_data";
    /// Character separating response fields
    pub const DELIMIT_CHARACTER: &str = "x_delim_char";
    pub const RELAY_RESPONSE: &str = "x_relay_response";
    pub const EMAIL_CUSTOMER: &str = "x_email_customer";
    /// Seconds within which an identical transaction is rejected as a duplicate
    pub const DUPLICATE_WINDOW_TIME: &str = "x_duplicate_window";

    /// Every request field name the gateway accepts
    pub const API_KEYS: &[&str] = &[
        API_LOGIN,
        TRANSACTION_KEY,
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
        CUSTOMER_ID,
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
        DUTY,
        TAX_EXEMPT,
        PO_NUMBER,
        DELIMIT_DATA,
        DELIMIT_CHARACTER,
        RELAY_RESPONSE,
        EMAIL_CUSTOMER,
        DUPLICATE_WINDOW_TIME,
    ];

    /// Check if the gateway accepts a request field
    pub fn contains_key(key: &str) -> bool {
        API_KEYS.contains(&key)
    }
}

/// Zero-based response field offsets
pub mod offsets {
    pub const RESPONSE_CODE: usize = 0;
    pub const RESPONSE_SUBCODE: usize = 1;
    pub const RESPONSE_REASON_CODE: usize = 2;
    pub const RESPONSE_REASON_TEXT: usize = 3;
    pub const AUTHORIZATION_CODE: usize = 4;
    pub const AVS_RESPONSE: usize = 5;
    pub const TRANSACTION_ID: usize = 6;
    pub const INVOICE_NUMBER: usize = 7;
    pub const DESCRIPTION: usize = 8;
    pub const AMOUNT: usize = 9;
    pub const METHOD: usize = 10;
    pub const TRANSACTION_TYPE: usize = 11;
    pub const CUSTOMER_ID: usize = 12;
    pub const FIRST_NAME: usize = 13;
    pub const LAST_NAME: usize = 14;
    pub const COMPANY: usize = 15;
    pub const ADDRESS: usize = 16;
    pub const CITY: usize = 17;
    pub const STATE: usize = 18;
    pub const ZIP: usize = 19;
    pub const COUNTRY: usize = 20;
    pub const PHONE: usize = 21;
    pub const FAX: usize = 22;
    pub const EMAIL: usize = 23;
    pub const SHIP_FIRST_NAME: usize = 24;
    pub const SHIP_LAST_NAME: usize = 25;
    pub const SHIP_COMPANY: usize = 26;
    pub const SHIP_ADDRESS: usize = 27;
    pub const SHIP_CITY: usize = 28;
    pub const SHIP_STATE: usize = 29;
    pub const SHIP_ZIP: usize = 30;
    pub const SHIP_COUNTRY: usize = 31;
    pub const TAX: usize = 32;
    pub const DUTY: usize = 33;
    pub const FREIGHT: usize = 34;
    pub const TAX_EXEMPT: usize = 35;
    pub const PO_NUMBER: usize = 36;
    pub const MD5_HASH: usize = 37;
    pub const CARD_CODE_RESPONSE: usize = 38;
    pub const CAVV_RESPONSE: usize = 39;
    pub const ACCOUNT_NUMBER: usize = 40;
    /// Label slot for the card type; the value itself is read from [`CARD_TYPE_FIELD`]
    pub const CARD_TYPE: usize = 41;
    pub const SPLIT_TENDER_ID: usize = 42;
    pub const REQUESTED_AMOUNT: usize = 43;
    pub const BALANCE_ON_CARD: usize = 44;
    /// Card type value, sent after the reserved fields 45 through 50
    pub const CARD_TYPE_FIELD: usize = 51;

    /// Human-readable label of every offset, in offset order
    pub const LABELS: [&str; 45] = [
        "Response Code",
        "Response Subcode",
        "Response Reason Code",
        "Response Reason Text",
        "Authorization Code",
        "AVS Response",
        "Transaction ID",
        "Invoice Number",
        "Description",
        "Amount",
        "Method",
        "Transaction Type",
        "Customer ID",
        "First Name",
        "Last Name",
        "Company",
        "Address",
        "City",
        "State",
        "ZIP Code",
        "Country",
        "Phone",
        "Fax",
        "Email Address",
        "Ship To First Name",
        "Ship To Last Name",
        "Ship To Company",
        "Ship To Address",
        "Ship To City",
        "Ship To State",
        "Ship To ZIP Code",
        "Ship To Country",
        "Tax",
        "Duty",
        "Freight",
        "Tax Exempt",
        "Purchase Order Number",
        "MD5 Hash",
        "Card Code Response",
        "Cardholder Authentication Verification Response",
        "Account Number",
        "Card Type",
        "Split Tender ID",
        "Requested Amount",
        "Balance On Card",
    ];
}
