//! Processor-agnostic response contract
//!
//! Every processor decoder implements [`ResponseDecoder`], normalizing its
//! wire grammar into the same accessors. [`GatewayResponse`] is the closed
//! set of decoders a [`crate::Gateway`] returns.
//!
//! Decoders parse eagerly when constructed and are immutable afterwards;
//! accessors compute from the parsed payload. Missing fields read as the
//! empty string and malformed numbers as zero.

use crate::processors::authorize_net::AuthorizeNetResponse;
use crate::processors::query_string::QueryStringResponse;
use crate::request::GatewayRequest;
use crate::types::Processor;
use crate::{GatewayError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a transaction, derived from the processor's result code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// Code 1
    Approved,
    /// Code 2
    Declined,
    /// Code 3
    Error,
    /// Code 4, Authorize.Net only
    HeldForReview,
    /// Any other code
    Unknown,
}

impl ResponseStatus {
    /// Map the result codes every processor shares
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ResponseStatus::Approved,
            2 => ResponseStatus::Declined,
            3 => ResponseStatus::Error,
            _ => ResponseStatus::Unknown,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseStatus::Approved => "approved",
            ResponseStatus::Declined => "declined",
            ResponseStatus::Error => "error",
            ResponseStatus::HeldForReview => "held for review",
            ResponseStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Normalized accessors over one decoded response
pub trait ResponseDecoder {
    /// Processor that produced the response
    fn processor(&self) -> Processor;

    /// Numeric result code (1 approved, 2 declined, 3 error)
    fn code(&self) -> i32;

    fn status(&self) -> ResponseStatus {
        ResponseStatus::from_code(self.code())
    }

    fn is_approved(&self) -> bool {
        self.status() == ResponseStatus::Approved
    }

    fn is_declined(&self) -> bool {
        self.status() == ResponseStatus::Declined
    }

    fn is_error(&self) -> bool {
        self.status() == ResponseStatus::Error
    }

    fn is_held_for_review(&self) -> bool {
        self.status() == ResponseStatus::HeldForReview
    }

    /// Amount echoed back by the processor, zero when not reported
    fn amount(&self) -> Decimal;

    fn transaction_id(&self) -> &str;

    fn authorization_code(&self) -> &str;

    /// Processor-specific response code as sent on the wire
    fn response_code(&self) -> &str;

    /// Human-readable result message
    fn message(&self) -> &str;

    fn invoice_number(&self) -> &str;

    /// Raw response body, for diagnostics
    fn full_response(&self) -> &str;

    fn avs_code(&self) -> &str;

    /// Explanation of the AVS code, empty when the code is unknown
    fn avs_response(&self) -> &'static str;

    fn ccv_code(&self) -> &str;

    /// Explanation of the CCV code, empty when the code is unknown
    fn ccv_response(&self) -> &'static str;

    /// Owned snapshot of the normalized fields
    fn summary(&self) -> ResponseSummary {
        ResponseSummary {
            processor: self.processor(),
            status: self.status(),
            code: self.code(),
            response_code: self.response_code().to_string(),
            message: self.message().to_string(),
            transaction_id: self.transaction_id().to_string(),
            authorization_code: self.authorization_code().to_string(),
            invoice_number: self.invoice_number().to_string(),
            amount: self.amount(),
            avs_code: self.avs_code().to_string(),
            avs_response: self.avs_response().to_string(),
            ccv_code: self.ccv_code().to_string(),
            ccv_response: self.ccv_response().to_string(),
            raw: self.full_response().to_string(),
        }
    }
}

/// Serializable snapshot of a decoded response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub processor: Processor,
    pub status: ResponseStatus,
    pub code: i32,
    pub response_code: String,
    pub message: String,
    pub transaction_id: String,
    pub authorization_code: String,
    pub invoice_number: String,
    pub amount: Decimal,
    pub avs_code: String,
    pub avs_response: String,
    pub ccv_code: String,
    pub ccv_response: String,
    /// Raw response body
    pub raw: String,
}

impl ResponseSummary {
    /// Encode the summary as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decoded response from one of the supported processors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    AuthorizeNet(AuthorizeNetResponse),
    Durango(QueryStringResponse),
    Charge1(QueryStringResponse),
}

macro_rules! with_response {
    ($self:expr, $response:ident => $body:expr) => {
        match $self {
            GatewayResponse::AuthorizeNet($response) => $body,
            GatewayResponse::Durango($response) => $body,
            GatewayResponse::Charge1($response) => $body,
        }
    };
}

impl GatewayResponse {
    /// Decode a raw body with the decoder matching the request that produced it
    ///
    /// Authorize.Net bodies are split on the delimiter queued in the request.
    pub fn decode(request: &GatewayRequest, raw: &str) -> Result<Self> {
        match request {
            GatewayRequest::AuthorizeNet(request) => Ok(GatewayResponse::AuthorizeNet(
                AuthorizeNetResponse::decode(raw, request.delimiter()?)?,
            )),
            GatewayRequest::Durango(_) => Ok(GatewayResponse::Durango(
                QueryStringResponse::decode(Processor::Durango, raw)?,
            )),
            GatewayRequest::Charge1(_) => Ok(GatewayResponse::Charge1(
                QueryStringResponse::decode(Processor::Charge1, raw)?,
            )),
            GatewayRequest::PayPal(_) => Err(GatewayError::unsupported(
                Processor::PayPal,
                "response decoding",
            )),
        }
    }
}

impl ResponseDecoder for GatewayResponse {
    fn processor(&self) -> Processor {
        with_response!(self, response => response.processor())
    }

    fn code(&self) -> i32 {
        with_response!(self, response => response.code())
    }

    fn status(&self) -> ResponseStatus {
        with_response!(self, response => response.status())
    }

    fn amount(&self) -> Decimal {
        with_response!(self, response => response.amount())
    }

    fn transaction_id(&self) -> &str {
        with_response!(self, response => response.transaction_id())
    }

    fn authorization_code(&self) -> &str {
        with_response!(self, response => response.authorization_code())
    }

    fn response_code(&self) -> &str {
        with_response!(self, response => response.response_code())
    }

    fn message(&self) -> &str {
        with_response!(self, response => response.message())
    }

    fn invoice_number(&self) -> &str {
        with_response!(self, response => response.invoice_number())
    }

    fn full_response(&self) -> &str {
        with_response!(self, response => response.full_response())
    }

    fn avs_code(&self) -> &str {
        with_response!(self, response => response.avs_code())
    }

    fn avs_response(&self) -> &'static str {
        with_response!(self, response => response.avs_response())
    }

    fn ccv_code(&self) -> &str {
        with_response!(self, response => response.ccv_code())
    }

    fn ccv_response(&self) -> &'static str {
        with_response!(self, response => response.ccv_response())
    }
}

impl fmt::Display for GatewayResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_response!(self, response => fmt::Display::fmt(response, f))
    }
}
