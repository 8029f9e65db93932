//! Authorize.Net positional response decoder

use super::offsets;
use crate::processors::{parse_decimal, parse_int};
use crate::response::{ResponseDecoder, ResponseStatus};
use crate::types::Processor;
use crate::{GatewayError, Result};
use rust_decimal::Decimal;
use std::fmt;

/// Decoded Authorize.Net AIM response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeNetResponse {
    raw: String,
    fields: Vec<String>,
}

impl AuthorizeNetResponse {
    /// Split a raw response on the delimiter the request asked for
    ///
    /// A body without a single delimiter is the gateway rejecting the
    /// request with a bare error string.
    pub fn decode(raw: &str, delimiter: char) -> Result<Self> {
        let fields: Vec<String> = raw.split(delimiter).map(str::to_string).collect();
        if fields.len() == 1 {
            return Err(GatewayError::decode(
                Processor::AuthorizeNet,
                format!(
                    "{}; this usually means your data sent along was incorrect. \
                     Please recheck that all dates and amounts are formatted correctly",
                    raw
                ),
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            fields,
        })
    }

    /// Field at an offset, empty when the response is shorter
    pub fn field(&self, offset: usize) -> &str {
        self.fields.get(offset).map(String::as_str).unwrap_or("")
    }

    /// All fields in wire order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Offset of the first field equal to `value`
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.fields.iter().position(|field| field == value)
    }

    pub fn sub_code(&self) -> i32 {
        parse_int(self.field(offsets::RESPONSE_SUBCODE))
    }

    pub fn reason_code(&self) -> i32 {
        parse_int(self.field(offsets::RESPONSE_REASON_CODE))
    }

    pub fn description(&self) -> &str {
        self.field(offsets::DESCRIPTION)
    }

    /// Payment method, CC or ECHECK
    pub fn method(&self) -> &str {
        self.field(offsets::METHOD)
    }

    /// Wire transaction type echoed back, e.g. AUTH_ONLY
    pub fn transaction_type(&self) -> &str {
        self.field(offsets::TRANSACTION_TYPE)
    }

    pub fn customer_id(&self) -> &str {
        self.field(offsets::CUSTOMER_ID)
    }

    pub fn tax(&self) -> Decimal {
        parse_decimal(self.field(offsets::TAX))
    }

    pub fn md5_hash(&self) -> &str {
        self.field(offsets::MD5_HASH)
    }

    /// Masked account number, e.g. XXXX1111
    pub fn card_number(&self) -> &str {
        self.field(offsets::ACCOUNT_NUMBER)
    }

    /// Card type, e.g. Visa
    pub fn card_type(&self) -> &str {
        self.field(offsets::CARD_TYPE_FIELD)
    }

    pub fn first_name(&self) -> &str {
        self.field(offsets::FIRST_NAME)
    }

    pub fn last_name(&self) -> &str {
        self.field(offsets::LAST_NAME)
    }

    pub fn company(&self) -> &str {
        self.field(offsets::COMPANY)
    }

    pub fn address(&self) -> &str {
        self.field(offsets::ADDRESS)
    }

    pub fn city(&self) -> &str {
        self.field(offsets::CITY)
    }

    pub fn state(&self) -> &str {
        self.field(offsets::STATE)
    }

    pub fn zip_code(&self) -> &str {
        self.field(offsets::ZIP)
    }

    pub fn country(&self) -> &str {
        self.field(offsets::COUNTRY)
    }

    pub fn email(&self) -> &str {
        self.field(offsets::EMAIL)
    }

    pub fn ship_first_name(&self) -> &str {
        self.field(offsets::SHIP_FIRST_NAME)
    }

    pub fn ship_last_name(&self) -> &str {
        self.field(offsets::SHIP_LAST_NAME)
    }

    pub fn ship_company(&self) -> &str {
        self.field(offsets::SHIP_COMPANY)
    }

    pub fn ship_address(&self) -> &str {
        self.field(offsets::SHIP_ADDRESS)
    }

    pub fn ship_city(&self) -> &str {
        self.field(offsets::SHIP_CITY)
    }

    pub fn ship_state(&self) -> &str {
        self.field(offsets::SHIP_STATE)
    }

    pub fn ship_zip_code(&self) -> &str {
        self.field(offsets::SHIP_ZIP)
    }

    pub fn ship_country(&self) -> &str {
        self.field(offsets::SHIP_COUNTRY)
    }
}

impl ResponseDecoder for AuthorizeNetResponse {
    fn processor(&self) -> Processor {
        Processor::AuthorizeNet
    }

    fn code(&self) -> i32 {
        parse_int(self.field(offsets::RESPONSE_CODE))
    }

    fn status(&self) -> ResponseStatus {
        match self.code() {
            4 => ResponseStatus::HeldForReview,
            code => ResponseStatus::from_code(code),
        }
    }

    fn amount(&self) -> Decimal {
        parse_decimal(self.field(offsets::AMOUNT))
    }

    fn transaction_id(&self) -> &str {
        self.field(offsets::TRANSACTION_ID)
    }

    fn authorization_code(&self) -> &str {
        self.field(offsets::AUTHORIZATION_CODE)
    }

    fn response_code(&self) -> &str {
        self.field(offsets::RESPONSE_CODE)
    }

    fn message(&self) -> &str {
        self.field(offsets::RESPONSE_REASON_TEXT)
    }

    fn invoice_number(&self) -> &str {
        self.field(offsets::INVOICE_NUMBER)
    }

    fn full_response(&self) -> &str {
        &self.raw
    }

    fn avs_code(&self) -> &str {
        self.field(offsets::AVS_RESPONSE)
    }

    fn avs_response(&self) -> &'static str {
        avs_message(self.avs_code())
    }

    fn ccv_code(&self) -> &str {
        self.field(offsets::CARD_CODE_RESPONSE)
    }

    fn ccv_response(&self) -> &'static str {
        ccv_message(self.ccv_code())
    }
}

impl fmt::Display for AuthorizeNetResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (offset, label) in offsets::LABELS.iter().enumerate() {
            writeln!(f, "{} = {}", label, self.field(offset))?;
        }
        Ok(())
    }
}

/// Explanation of an Authorize.Net AVS code
pub fn avs_message(code: &str) -> &'static str {
    match code {
        "A" => "Address (Street) matches, ZIP does not",
        "B" => "Address information not provided for AVS check",
        "E" => "AVS error",
        "G" => "Non-U.S. Card Issuing Bank",
        "N" => "No Match on Address (Street) or ZIP",
        "P" => "AVS not applicable for this transaction",
        "R" => "Retry — System unavailable or timed out",
        "S" => "Service not supported by issuer",
        "U" => "Address information is unavailable",
        "W" => "Nine digit ZIP matches, Address (Street) does not",
        "X" => "Address (Street) and nine digit ZIP match",
        "Y" => "Address (Street) and five digit ZIP match",
        "Z" => "Five digit ZIP matches, Address (Street) does not",
        _ => "",
    }
}

/// Explanation of an Authorize.Net card code (CCV) result
pub fn ccv_message(code: &str) -> &'static str {
    match code {
        "M" => "Successful Match",
        "N" => "The Card Code does not match",
        "P" => "The Card Code was not processed",
        "S" => "The Card Code should be on card, but is not indicated",
        "U" => "Card Code is not supported by the card issuer",
        _ => "",
    }
}
