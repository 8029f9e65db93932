//! Processor identity and transaction type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment processor a gateway talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Processor {
    /// Authorize.Net AIM, positional pipe-delimited responses
    #[serde(alias = "authorizenet")]
    AuthorizeNet,
    /// Durango, query-string responses
    Durango,
    /// Charge1, query-string responses
    Charge1,
    /// PayPal, not implemented
    #[serde(rename = "paypal")]
    PayPal,
}

impl Processor {
    /// Get the configuration identifier for this processor
    pub fn as_str(&self) -> &'static str {
        match self {
            Processor::AuthorizeNet => "authorize_net",
            Processor::Durango => "durango",
            Processor::Charge1 => "charge1",
            Processor::PayPal => "paypal",
        }
    }

    /// Whether the processor has a working request/response adapter
    pub fn is_supported(&self) -> bool {
        !matches!(self, Processor::PayPal)
    }

    /// Get all known processors
    pub fn all() -> [Processor; 4] {
        [
            Processor::AuthorizeNet,
            Processor::Durango,
            Processor::Charge1,
            Processor::PayPal,
        ]
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Processor::AuthorizeNet => "AuthorizeNet",
            Processor::Durango => "Durango",
            Processor::Charge1 => "Charge1",
            Processor::PayPal => "PayPal",
        };
        f.write_str(name)
    }
}

impl FromStr for Processor {
    type Err = crate::GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authorize_net" | "authorizenet" => Ok(Processor::AuthorizeNet),
            "durango" => Ok(Processor::Durango),
            "charge1" => Ok(Processor::Charge1),
            "paypal" => Ok(Processor::PayPal),
            other => Err(crate::GatewayError::config(format!(
                "Unknown payment processor: {}",
                other
            ))),
        }
    }
}

/// Kind of transaction a request performs
///
/// Set by exactly one action call per request; each processor maps it to
/// its own wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Reserve funds without capturing them
    Authorize,
    /// Authorize and capture in one step
    Sale,
    /// Capture a prior authorization
    Settle,
    /// Cancel an unsettled transaction
    Void,
    /// Return funds for a settled transaction
    Refund,
}

impl TransactionType {
    /// Name used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Authorize => "authorize",
            TransactionType::Sale => "sale",
            TransactionType::Settle => "settle",
            TransactionType::Void => "void",
            TransactionType::Refund => "refund",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_parsing() {
        assert_eq!("AuthorizeNet".parse::<Processor>().unwrap(), Processor::AuthorizeNet);
        assert_eq!(" Charge1 ".parse::<Processor>().unwrap(), Processor::Charge1);
        assert_eq!("PAYPAL".parse::<Processor>().unwrap(), Processor::PayPal);

        let error = "stripe".parse::<Processor>().unwrap_err();
        assert_eq!(error.to_string(), "Configuration error: Unknown payment processor: stripe");
    }

    #[test]
    fn test_processor_identifiers_round_trip() {
        for processor in Processor::all() {
            assert_eq!(processor.as_str().parse::<Processor>().unwrap(), processor);
            let json = serde_json::to_string(&processor).unwrap();
            assert_eq!(json, format!("\"{}\"", processor.as_str()));
        }
    }

    #[test]
    fn test_transaction_type_display() {
        assert_eq!(TransactionType::Settle.to_string(), "settle");
        assert_eq!(
            serde_json::to_string(&TransactionType::Refund).unwrap(),
            "\"refund\""
        );
    }
}
