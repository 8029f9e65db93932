//! Processor-agnostic request building
//!
//! Each processor adapter implements [`RequestBuilder`]: a fluent contract
//! that writes the processor's own wire fields into a [`FieldTable`].
//! [`GatewayRequest`] is the closed set of adapters a [`crate::Gateway`]
//! hands out, selected once from the configured [`Processor`].
//!
//! # Examples
//!
//! ```
//! use qs_gateway::request::{GatewayRequest, RequestBuilder};
//! use qs_gateway::types::{Customer, Processor};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> qs_gateway::Result<()> {
//! let mut request = GatewayRequest::new(Processor::Durango, "demo", "password", true);
//! request
//!     .add_customer(&Customer::new("00001", "John", "Smith", "1000 Main St.", "Miami", "FL", "33021"))?
//!     .add_invoice("1234")?
//!     .authorize("4111111111111111", "102030", "111", Decimal::new(10000, 2))?;
//!
//! request.validate()?;
//! assert!(request.to_post_string().contains("amount=100.00"));
//! # Ok(())
//! # }
//! ```

use crate::fields::FieldTable;
use crate::processors::authorize_net::AuthorizeNetRequest;
use crate::processors::paypal::PayPalRequest;
use crate::processors::query_string::QueryStringRequest;
use crate::types::{urls, Customer, Processor, Shipping, TransactionType};
use crate::{GatewayError, Result};
use rust_decimal::Decimal;

/// Fluent contract every processor request implements
///
/// Field-setting calls may be chained in any order; exactly one action call
/// (`authorize`, `sale`, `settle`, `void` or `refund`) selects the
/// transaction type.
pub trait RequestBuilder {
    /// Processor the request is built for
    fn processor(&self) -> Processor;

    /// Endpoint the request is posted to
    fn post_url(&self) -> &str;

    /// Whether the request targets the processor's test endpoint
    fn test_mode(&self) -> bool;

    /// Transaction type chosen by the action call, if any
    fn transaction_type(&self) -> Option<TransactionType>;

    /// Wire fields queued so far
    fn fields(&self) -> &FieldTable;

    /// Every request field name the processor accepts
    fn api_keys(&self) -> &'static [&'static str];

    /// Whether the processor accepts the given request field name
    fn api_contains_key(&self, key: &str) -> bool {
        self.api_keys().contains(&key)
    }

    /// Queue billing customer fields
    fn add_customer(&mut self, customer: &Customer) -> Result<&mut Self>;

    /// Queue ship-to fields
    fn add_shipping(&mut self, shipping: &Shipping) -> Result<&mut Self>;

    /// Queue an arbitrary merchant-defined field under its raw wire name
    fn add_merchant_value(&mut self, key: &str, value: &str) -> Result<&mut Self>;

    /// Queue the merchant invoice number
    fn add_invoice(&mut self, invoice_number: &str) -> Result<&mut Self>;

    /// Authorize `amount` on a card without capturing it
    fn authorize(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        amount: Decimal,
    ) -> Result<&mut Self>;

    /// Authorize and capture `amount` on a card
    fn sale(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        amount: Decimal,
    ) -> Result<&mut Self>;

    /// Capture a prior authorization; the amount is only sent when positive
    fn settle(&mut self, transaction_id: &str, amount: Decimal) -> Result<&mut Self>;

    /// Capture the full authorized amount of a prior authorization
    fn settle_full(&mut self, transaction_id: &str) -> Result<&mut Self> {
        self.settle(transaction_id, Decimal::ZERO)
    }

    /// Cancel an unsettled transaction
    fn void(&mut self, transaction_id: &str) -> Result<&mut Self>;

    /// Refund a settled transaction
    fn refund(
        &mut self,
        transaction_id: &str,
        amount: Decimal,
        card_number: &str,
    ) -> Result<&mut Self>;

    /// Check that every field the chosen transaction needs is present
    ///
    /// Credential fields are asserted first, then the fields of the action.
    /// Before any action call this fails naming the credential fields and
    /// the transaction-type field.
    fn validate(&self) -> Result<()>;

    /// Serialize the queued fields as a form-encoded body
    fn to_post_string(&self) -> String {
        self.fields().to_post_string()
    }
}

/// Format an amount for the wire
///
/// Fixed-point and locale-invariant: no grouping separator, `.` as the
/// decimal mark, scale preserved.
pub fn format_amount(amount: Decimal) -> String {
    amount.to_string()
}

/// State shared by the working request adapters
#[derive(Debug, Clone)]
pub(crate) struct RequestState {
    pub(crate) processor: Processor,
    pub(crate) post_url: &'static str,
    pub(crate) test_mode: bool,
    pub(crate) transaction_type: Option<TransactionType>,
    pub(crate) fields: FieldTable,
}

impl RequestState {
    pub(crate) fn new(processor: Processor, test_mode: bool) -> Self {
        Self {
            processor,
            post_url: urls::post_url(processor, test_mode),
            test_mode,
            transaction_type: None,
            fields: FieldTable::new(),
        }
    }

    pub(crate) fn queue(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.queue(key, value);
    }

    /// Record the transaction type and queue its wire value
    pub(crate) fn set_action(
        &mut self,
        action: TransactionType,
        type_key: &str,
        wire_value: &str,
    ) -> Result<()> {
        if let Some(current) = self.transaction_type {
            return Err(GatewayError::ActionAlreadySet {
                current,
                requested: action,
            });
        }
        self.transaction_type = Some(action);
        self.fields.queue(type_key, wire_value);
        Ok(())
    }

    /// Credential check followed by the per-action field check
    pub(crate) fn validate(
        &self,
        credentials: &[&str],
        type_key: &str,
        required: impl Fn(TransactionType) -> &'static [&'static str],
    ) -> Result<()> {
        let Some(action) = self.transaction_type else {
            let mut fields: Vec<&str> = credentials.to_vec();
            fields.push(type_key);
            return Err(GatewayError::validation(fields));
        };

        self.fields.assert_present(credentials)?;
        self.fields.assert_present(required(action))
    }
}

/// Request adapter for one of the supported processors
#[derive(Debug, Clone)]
pub enum GatewayRequest {
    AuthorizeNet(AuthorizeNetRequest),
    Durango(QueryStringRequest),
    Charge1(QueryStringRequest),
    PayPal(PayPalRequest),
}

macro_rules! with_request {
    ($self:expr, $request:ident => $body:expr) => {
        match $self {
            GatewayRequest::AuthorizeNet($request) => $body,
            GatewayRequest::Durango($request) => $body,
            GatewayRequest::Charge1($request) => $body,
            GatewayRequest::PayPal($request) => $body,
        }
    };
}

impl GatewayRequest {
    /// Create the request adapter for a processor, queuing its credentials
    pub fn new(
        processor: Processor,
        username: impl Into<String>,
        password: impl Into<String>,
        test_mode: bool,
    ) -> Self {
        match processor {
            Processor::AuthorizeNet => {
                GatewayRequest::AuthorizeNet(AuthorizeNetRequest::new(username, password, test_mode))
            }
            Processor::Durango => {
                GatewayRequest::Durango(QueryStringRequest::durango(username, password, test_mode))
            }
            Processor::Charge1 => {
                GatewayRequest::Charge1(QueryStringRequest::charge1(username, password, test_mode))
            }
            Processor::PayPal => {
                GatewayRequest::PayPal(PayPalRequest::new(username, password, test_mode))
            }
        }
    }
}

impl RequestBuilder for GatewayRequest {
    fn processor(&self) -> Processor {
        with_request!(self, request => request.processor())
    }

    fn post_url(&self) -> &str {
        with_request!(self, request => request.post_url())
    }

    fn test_mode(&self) -> bool {
        with_request!(self, request => request.test_mode())
    }

    fn transaction_type(&self) -> Option<TransactionType> {
        with_request!(self, request => request.transaction_type())
    }

    fn fields(&self) -> &FieldTable {
        with_request!(self, request => request.fields())
    }

    fn api_keys(&self) -> &'static [&'static str] {
        with_request!(self, request => request.api_keys())
    }

    fn add_customer(&mut self, customer: &Customer) -> Result<&mut Self> {
        with_request!(&mut *self, request => { request.add_customer(customer)?; });
        Ok(self)
    }

    fn add_shipping(&mut self, shipping: &Shipping) -> Result<&mut Self> {
        with_request!(&mut *self, request => { request.add_shipping(shipping)?; });
        Ok(self)
    }

    fn add_merchant_value(&mut self, key: &str, value: &str) -> Result<&mut Self> {
        with_request!(&mut *self, request => { request.add_merchant_value(key, value)?; });
        Ok(self)
    }

    fn add_invoice(&mut self, invoice_number: &str) -> Result<&mut Self> {
        with_request!(&mut *self, request => { request.add_invoice(invoice_number)?; });
        Ok(self)
    }

    fn authorize(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        amount: Decimal,
    ) -> Result<&mut Self> {
        with_request!(&mut *self, request => {
            request.authorize(card_number, expiry, cvv, amount)?;
        });
        Ok(self)
    }

    fn sale(
        &mut self,
        card_number: &str,
        expiry: &str,
        cvv: &str,
        amount: Decimal,
    ) -> Result<&mut Self> {
        with_request!(&mut *self, request => {
            request.sale(card_number, expiry, cvv, amount)?;
        });
        Ok(self)
    }

    fn settle(&mut self, transaction_id: &str, amount: Decimal) -> Result<&mut Self> {
        with_request!(&mut *self, request => { request.settle(transaction_id, amount)?; });
        Ok(self)
    }

    fn void(&mut self, transaction_id: &str) -> Result<&mut Self> {
        with_request!(&mut *self, request => { request.void(transaction_id)?; });
        Ok(self)
    }

    fn refund(
        &mut self,
        transaction_id: &str,
        amount: Decimal,
        card_number: &str,
    ) -> Result<&mut Self> {
        with_request!(&mut *self, request => {
            request.refund(transaction_id, amount, card_number)?;
        });
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        with_request!(self, request => request.validate())
    }
}
