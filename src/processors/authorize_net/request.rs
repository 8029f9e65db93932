//! Authorize.Net request builder

use super::api;
use crate::fields::FieldTable;
use crate::request::{format_amount, RequestBuilder, RequestState};
use crate::types::{Customer, Processor, Shipping, TransactionType};
use crate::{GatewayError, Result};
use rust_decimal::Decimal;

/// Delimiter queued by default and used to split responses
pub const DEFAULT_DELIMITER: char = '|';

/// Request builder for the Authorize.Net AIM gateway
#[derive(Debug, Clone)]
pub struct AuthorizeNetRequest {
    state: RequestState,
}

impl AuthorizeNetRequest {
    /// Create a request with credentials and the gateway's default settings queued
    pub fn new(login: impl Into<String>, transaction_key: impl Into<String>, test_mode: bool) -> Self {
        let mut state = RequestState::new(Processor::AuthorizeNet, test_mode);
        state.queue(api::API_LOGIN, login);
        state.queue(api::TRANSACTION_KEY, transaction_key);
        // default settings
        state.queue(api::DELIMIT_DATA, "TRUE");
        state.queue(api::DELIMIT_CHARACTER, DEFAULT_DELIMITER.to_string());
        state.queue(api::RELAY_RESPONSE, "TRUE");
        state.queue(api::EMAIL_CUSTOMER, "FALSE");
        state.queue(api::METHOD, "CC");
        state.queue(api::COUNTRY, crate::types::DEFAULT_COUNTRY);
        state.queue(api::SHIP_COUNTRY, crate::types::DEFAULT_COUNTRY);
        state.queue(api::DUPLICATE_WINDOW_TIME, "120");
        Self { state }
    }

    /// Delimiter the gateway will use for its response
    ///
    /// This is whatever is queued under `x_delim_char` at send time, so a
    /// merchant override of the field is honored when decoding.
    pub fn delimiter(&self) -> Result<char> {
        self.state
            .fields
            .get(api::DELIMIT_CHARACTER)
            .and_then(|value| value.chars().next())
            .ok_or_else(|| GatewayError::validation([api::DELIMIT_CHARACTER]))
    }

    fn set_action(&mut self, action: TransactionType) -> Result<()> {
        let wire_value = match action {
            TransactionType::Authorize => "AUTH_ONLY",
            TransactionType::Sale => "AUTH_CAPTURE",
            TransactionType::Settle => "PRIOR_AUTH_CAPTURE",
            TransactionType::Refund => "CREDIT",
            TransactionType::Void => "VOID",
        };
        self.state
            .set_action(action, api::TRANSACTION_TYPE, wire_value)
    }

    fn queue_card(&mut self, card_number: &str, expiry: &str, cvv: &str, amount: Decimal) {
        self.state.queue(api::CREDIT_CARD_NUMBER, card_number);
        self.state.queue(api::CREDIT_CARD_EXPIRATION, expiry);
        self.state.queue(api::CREDIT_CARD_CODE, cvv);
        self.state.queue(api::AMOUNT, format_amount(amount));
    }
}

fn required_fields(action: TransactionType) -> &'static [&'static str] {
    match action {
        TransactionType::Authorize | TransactionType::Sale => &[
            api::CREDIT_CARD_NUMBER,
            api::CREDIT_CARD_EXPIRATION,
            api::AMOUNT,
        ],
        TransactionType::Settle => &[api::TRANSACTION_ID],
        TransactionType::Refund => &[api::TRANSACTION_ID, api::AMOUNT, api::CREDIT_CARD_NUMBER],
        TransactionType::Void => &[api::TRANSACTION_ID],
    }
}

impl RequestBuilder for AuthorizeNetRequest {
    fn processor(&self) -> Processor {
        self.state.processor
    }

    fn post_url(&self) -> &str {
        self.state.post_url
    }

    fn test_mode(&self) -> bool {
        self.state.test_mode
    }

    fn transaction_type(&self) -> Option<TransactionType> {
        self.state.transaction_type
    }

    fn fields(&self) -> &FieldTable {
        &self.state.fields
    }

    fn api_keys(&self) -> &'static [&'static str] {
        api::API_KEYS
    }

    fn add_customer(&mut self, customer: &Customer) -> Result<&mut Self> {
        self.state.queue(api::FIRST_NAME, customer.first_name.as_str());
        self.state.queue(api::LAST_NAME, customer.last_name.as_str());
        self.state.queue(api::ADDRESS, customer.address.as_str());
        self.state.queue(api::CITY, customer.city.as_str());
        self.state.queue(api::STATE, customer.state.as_str());
        self.state.queue(api::ZIP, customer.zip.as_str());
        self.state.queue(api::CUSTOMER_ID, customer.id.as_str());
        Ok(self)
    }

    fn add_shipping(&mut self, shipping: &Shipping) -> Result<&mut Self> {
        self.state.queue(api::SHIP_FIRST_NAME, shipping.first_name.as_str());
        self.state.queue(api::SHIP_LAST_NAME, shipping.last_name.as_str());
        self.state.queue(api::SHIP_ADDRESS, shipping.address.as_str());
        self.state.queue(api::SHIP_STATE, shipping.state.as_str());
        self.state.queue(api::SHIP_ZIP, shipping.zip.as_str());
        Ok(self)
    }

    fn add_merchant_value(&mut self, key: &str, value: &str) -> Result<&mut Self> {
        self.state.queue(key, value);
        Ok(self)
    }

    fn add_invoice(&mut self, invoice_number: &str) -> Result<&mut Self> {
        self.state.queue(api::INVOICE_NUMBER, invoice_number);
        Ok(self)
    }

    fn authorize(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        amount: Decimal,
    ) -> Result<&mut Self> {
        self.set_action(TransactionType::Authorize)?;
        self.queue_card(card_number, expiry, cvv, amount);
        Ok(self)
    }

    fn sale(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        amount: Decimal,
    ) -> Result<&mut Self> {
        self.set_action(TransactionType::Sale)?;
        self.queue_card(card_number, expiry, cvv, amount);
        Ok(self)
    }

    fn settle(&mut self, transaction_id: &str, amount: Decimal) -> Result<&mut Self> {
        self.set_action(TransactionType::Settle)?;
        self.state.queue(api::TRANSACTION_ID, transaction_id);
        if amount > Decimal::ZERO {
            self.state.queue(api::AMOUNT, format_amount(amount));
        }
        Ok(self)
    }

    fn void(&mut self, transaction_id: &str) -> Result<&mut Self> {
        self.set_action(TransactionType::Void)?;
        self.state.queue(api::TRANSACTION_ID, transaction_id);
        Ok(self)
    }

    fn refund(
        &mut self,
        transaction_id: &str,
        amount: Decimal,
        card_number: &str,
    ) -> Result<&mut Self> {
        self.set_action(TransactionType::Refund)?;
        self.state.queue(api::TRANSACTION_ID, transaction_id);
        self.state.queue(api::CREDIT_CARD_NUMBER, card_number);
        self.state.queue(api::AMOUNT, format_amount(amount));
        Ok(self)
    }

    /// The response delimiter is checked last, so a request that cannot be
    /// decoded is never posted.
    fn validate(&self) -> Result<()> {
        self.state.validate(
            &[api::API_LOGIN, api::TRANSACTION_KEY],
            api::TRANSACTION_TYPE,
            required_fields,
        )?;
        self.delimiter().map(|_| ())
    }
}
