//! Durango / Charge1 request builder

use super::api;
use crate::fields::FieldTable;
use crate::request::{format_amount, RequestBuilder, RequestState};
use crate::types::{Customer, Processor, Shipping, TransactionType, DEFAULT_COUNTRY};
use crate::Result;
use rust_decimal::Decimal;

/// Request builder for the query-string processors
#[derive(Debug, Clone)]
pub struct QueryStringRequest {
    state: RequestState,
}

impl QueryStringRequest {
    /// Create a Durango request
    pub fn durango(username: impl Into<String>, password: impl Into<String>, test_mode: bool) -> Self {
        Self::new(Processor::Durango, username, password, test_mode)
    }

    /// Create a Charge1 request
    pub fn charge1(username: impl Into<String>, password: impl Into<String>, test_mode: bool) -> Self {
        Self::new(Processor::Charge1, username, password, test_mode)
    }

    fn new(
        processor: Processor,
        username: impl Into<String>,
        password: impl Into<String>,
        test_mode: bool,
    ) -> Self {
        let mut state = RequestState::new(processor, test_mode);
        state.queue(api::API_LOGIN, username);
        state.queue(api::PASSWORD, password);
        state.queue(api::METHOD, "creditcard");
        Self { state }
    }

    fn set_action(&mut self, action: TransactionType) -> Result<()> {
        let wire_value = match action {
            TransactionType::Authorize => "auth",
            TransactionType::Sale => "sale",
            TransactionType::Settle => "capture",
            TransactionType::Refund => "refund",
            TransactionType::Void => "void",
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
        TransactionType::Refund => &[api::TRANSACTION_ID, api::AMOUNT],
        TransactionType::Void => &[api::TRANSACTION_ID],
    }
}

impl RequestBuilder for QueryStringRequest {
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

    /// The customer id has no field in this vocabulary and is not sent.
    fn add_customer(&mut self, customer: &Customer) -> Result<&mut Self> {
        self.state.queue(api::FIRST_NAME, customer.first_name.as_str());
        self.state.queue(api::LAST_NAME, customer.last_name.as_str());
        self.state.queue(api::ADDRESS, customer.address.as_str());
        self.state.queue(api::CITY, customer.city.as_str());
        self.state.queue(api::STATE, customer.state.as_str());
        self.state.queue(api::ZIP, customer.zip.as_str());
        self.state.queue(api::COUNTRY, DEFAULT_COUNTRY);
        Ok(self)
    }

    fn add_shipping(&mut self, shipping: &Shipping) -> Result<&mut Self> {
        self.state.queue(api::SHIP_FIRST_NAME, shipping.first_name.as_str());
        self.state.queue(api::SHIP_LAST_NAME, shipping.last_name.as_str());
        self.state.queue(api::SHIP_ADDRESS, shipping.address.as_str());
        self.state.queue(api::SHIP_STATE, shipping.state.as_str());
        self.state.queue(api::SHIP_ZIP, shipping.zip.as_str());
        self.state.queue(api::SHIP_COUNTRY, DEFAULT_COUNTRY);
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

    /// The card number is not part of this vocabulary's refund and is ignored.
    fn refund(
        &mut self,
        transaction_id: &str,
        amount: Decimal,
        _card_number: &str,
    ) -> Result<&mut Self> {
        self.set_action(TransactionType::Refund)?;
        self.state.queue(api::TRANSACTION_ID, transaction_id);
        self.state.queue(api::AMOUNT, format_amount(amount));
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        self.state.validate(
            &[api::API_LOGIN, api::PASSWORD],
            api::TRANSACTION_TYPE,
            required_fields,
        )
    }
}
