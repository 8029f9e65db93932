//! PayPal placeholder adapter
//!
//! PayPal is a recognized processor but has no working integration: every
//! builder call and validation fails with [`GatewayError::Unsupported`],
//! so a PayPal request can never reach the network.

use crate::fields::FieldTable;
use crate::request::{RequestBuilder, RequestState};
use crate::types::{Customer, Processor, Shipping, TransactionType};
use crate::{GatewayError, Result};
use rust_decimal::Decimal;

/// Request builder that rejects every operation
#[derive(Debug, Clone)]
pub struct PayPalRequest {
    state: RequestState,
}

impl PayPalRequest {
    /// Credentials are accepted for symmetry with the other processors and
    /// are never queued.
    pub fn new(_username: impl Into<String>, _password: impl Into<String>, test_mode: bool) -> Self {
        Self {
            state: RequestState::new(Processor::PayPal, test_mode),
        }
    }

    fn unsupported<T>(operation: &'static str) -> Result<T> {
        Err(GatewayError::unsupported(Processor::PayPal, operation))
    }
}

impl RequestBuilder for PayPalRequest {
    fn processor(&self) -> Processor {
        Processor::PayPal
    }

    fn post_url(&self) -> &str {
        self.state.post_url
    }

    fn test_mode(&self) -> bool {
        self.state.test_mode
    }

    fn transaction_type(&self) -> Option<TransactionType> {
        None
    }

    fn fields(&self) -> &FieldTable {
        &self.state.fields
    }

    fn api_keys(&self) -> &'static [&'static str] {
        &[]
    }

    fn add_customer(&mut self, _customer: &Customer) -> Result<&mut Self> {
        Self::unsupported("add_customer")
    }

    fn add_shipping(&mut self, _shipping: &Shipping) -> Result<&mut Self> {
        Self::unsupported("add_shipping")
    }

    fn add_merchant_value(&mut self, _key: &str, _value: &str) -> Result<&mut Self> {
        Self::unsupported("add_merchant_value")
    }

    fn add_invoice(&mut self, _invoice_number: &str) -> Result<&mut Self> {
        Self::unsupported("add_invoice")
    }

    fn authorize(
        &mut self,
        _card_number: &str,
        _expiry: &str,
        _cvv: &str,
        _amount: Decimal,
    ) -> Result<&mut Self> {
        Self::unsupported("authorize")
    }

    fn sale(
        &mut self,
        _card_number: &str,
        _expiry: &str,
        _cvv: &str,
        _amount: Decimal,
    ) -> Result<&mut Self> {
        Self::unsupported("sale")
    }

    fn settle(&mut self, _transaction_id: &str, _amount: Decimal) -> Result<&mut Self> {
        Self::unsupported("settle")
    }

    fn void(&mut self, _transaction_id: &str) -> Result<&mut Self> {
        Self::unsupported("void")
    }

    fn refund(
        &mut self,
        _transaction_id: &str,
        _amount: Decimal,
        _card_number: &str,
    ) -> Result<&mut Self> {
        Self::unsupported("refund")
    }

    fn validate(&self) -> Result<()> {
        Self::unsupported("validate")
    }
}
