//! Durango / Charge1 query-string response decoder

use super::keys;
use crate::processors::parse_int;
use crate::response::ResponseDecoder;
use crate::types::Processor;
use crate::{GatewayError, Result};
use rust_decimal::Decimal;
use std::fmt;
use url::form_urlencoded;

/// Decoded query-string response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStringResponse {
    processor: Processor,
    raw: String,
    pairs: Vec<(String, String)>,
}

impl QueryStringResponse {
    /// Parse a raw `key=value&...` body
    ///
    /// A body with no pairs at all is the gateway rejecting the request
    /// below the structured response. Repeated keys are merged into one
    /// pair at the first key's position, their values joined with `,`.
    pub fn decode(processor: Processor, raw: &str) -> Result<Self> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match pairs.iter_mut().find(|(name, _)| name.as_str() == key.as_ref()) {
                Some((_, joined)) => {
                    joined.push(',');
                    joined.push_str(&value);
                }
                None => pairs.push((key.into_owned(), value.into_owned())),
            }
        }
        if pairs.is_empty() {
            return Err(GatewayError::decode(
                processor,
                "This usually means your data sent along was incorrect. \
                 Please recheck that all dates and amounts are formatted correctly",
            ));
        }

        Ok(Self {
            processor,
            raw: raw.to_string(),
            pairs,
        })
    }

    /// Value of the pair named `key`, empty when absent
    pub fn get(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Decoded pairs in wire order, one per distinct key
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Index of the first pair whose value equals `value`
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.pairs.iter().position(|(_, v)| v == value)
    }

    /// Free-text reason sent by the gateway, e.g. SUCCESS
    pub fn response_text(&self) -> &str {
        self.get(keys::RESPONSE_TEXT)
    }
}

impl ResponseDecoder for QueryStringResponse {
    fn processor(&self) -> Processor {
        self.processor
    }

    fn code(&self) -> i32 {
        parse_int(self.get(keys::RESPONSE))
    }

    fn amount(&self) -> Decimal {
        Decimal::ZERO
    }

    fn transaction_id(&self) -> &str {
        self.get(keys::TRANSACTION_ID)
    }

    fn authorization_code(&self) -> &str {
        self.get(keys::AUTHORIZATION_CODE)
    }

    fn response_code(&self) -> &str {
        self.get(keys::RESPONSE_CODE)
    }

    fn message(&self) -> &str {
        result_message(self.response_code())
    }

    fn invoice_number(&self) -> &str {
        self.get(keys::INVOICE_NUMBER)
    }

    fn full_response(&self) -> &str {
        &self.raw
    }

    fn avs_code(&self) -> &str {
        self.get(keys::AVS_RESPONSE)
    }

    fn avs_response(&self) -> &'static str {
        avs_message(self.avs_code())
    }

    fn ccv_code(&self) -> &str {
        self.get(keys::CVV_RESPONSE)
    }

    fn ccv_response(&self) -> &'static str {
        ccv_message(self.ccv_code())
    }
}

impl fmt::Display for QueryStringResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, label) in keys::LABELS {
            writeln!(f, "{} = {}", label, self.get(key))?;
        }
        Ok(())
    }
}

/// Text for a `response_code` result code
pub fn result_message(code: &str) -> &'static str {
    match code {
        "100" => "Transaction was Approved.",

        "200" => "Transaction was Declined by Processor.",
        "201" => "Do Not Honor.",
        "202" => "Insufficient Funds.",
        "203" => "Over Limit.",
        "204" => "Transaction not allowed.",
        "220" => "Incorrect Payment Data.",
        "221" => "No such card issuer.",
        "222" => "No card number on file with issuer.",
        "224" => "Invalid expiration date.",
        "225" => "Invalid security card code.",
        "240" => "Call Issuer for Further Information.",
        "250" => "Pick Up Card.",
        "251" => "Lost card.",
        "252" => "Stolen card.",
        "253" => "Fraudulent card.",
        "260" => "Declined with further Instructions Available (see response text)",
        "261" => "Declined. Stop ALL recurring payments.",
        "262" => "Declined. Stop this recurring program.",
        "263" => "Declined. Update cardholder data available.",
        "264" => "Declined. Retry in a few days.",

        "300" => "Transaction was Rejected by Gateway.",

        "400" => "Transaction Error Returned by Processor.",
        "410" => "Invalid Merchant Configuration.",
        "420" => "Communication Error.",
        "421" => "Communication Error with Issuer.",
        "430" => "Duplicate Transaction at Processor.",
        "440" => "Processor Format Error.",
        "441" => "Invalid transaction information.",
        "460" => "Processor feature not available.",
        "461" => "Unsupported card type.",
        _ => "",
    }
}

/// Explanation of a query-string gateway AVS code
pub fn avs_message(code: &str) -> &'static str {
    match code {
        "A" | "B" => "Address (Street) matches, ZIP does not",
        "C" | "N" => "No Match on Address (Street) or ZIP",
        "D" | "L" | "M" | "P" | "Z" => "Five digit ZIP matches, Address (Street) does not",
        "E" => "Not a mail/phone order",
        "G" | "I" => "Non-U.S. Card Issuing Bank",
        "O" | "0" => "AVS not available",
        "R" => "Retry — System unavailable or timed out",
        "S" => "Service not supported by issuer",
        "U" => "Address information is unavailable",
        "W" => "Nine digit ZIP matches, Address (Street) does not",
        "X" => "Address (Street) and nine digit ZIP match",
        "Y" => "Address (Street) and five digit ZIP match",
        _ => "",
    }
}

/// Explanation of a query-string gateway card code (CCV) result
pub fn ccv_message(code: &str) -> &'static str {
    match code {
        "M" => "Successful Match",
        "N" => "The Card Code does not match",
        "P" => "The Card Code was not processed",
        "S" => "Merchant has indicated that the Card Code is not present on card",
        "U" => "Card Code is not supported by the card issuer",
        _ => "",
    }
}
