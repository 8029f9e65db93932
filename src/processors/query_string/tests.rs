//! Tests for the Durango / Charge1 adapter

use super::response::{avs_message, ccv_message, result_message};
use super::{api, keys, QueryStringRequest, QueryStringResponse};
use crate::request::RequestBuilder;
use crate::response::ResponseDecoder;
use crate::types::{Customer, Processor, Shipping};
use crate::GatewayError;
use rust_decimal::Decimal;
use std::str::FromStr;

const SAMPLE: &str = "response=1&responsetext=SUCCESS&authcode=123456&transactionid=281719471\
                      &avsresponse=Y&cvvresponse=M&orderid=1234&response_code=100";

fn amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_constructors_set_processor_and_defaults() {
    let durango = QueryStringRequest::durango("demo", "password", true);
    let charge1 = QueryStringRequest::charge1("demo", "password", false);

    assert_eq!(durango.processor(), Processor::Durango);
    assert_eq!(charge1.processor(), Processor::Charge1);
    assert_eq!(durango.post_url(), charge1.post_url());
    assert_eq!(
        durango.to_post_string(),
        "username=demo&password=password&payment=creditcard"
    );
}

#[test]
fn test_customer_and_shipping_fields() {
    let mut request = QueryStringRequest::durango("demo", "password", true);
    request
        .add_customer(&Customer::new("00001", "John", "Smith", "1000 Main St.", "Miami", "FL", "33021"))
        .unwrap()
        .add_shipping(&Shipping::new("Jane", "Smith", "2 Side St.", "GA", "30301"))
        .unwrap();

    let fields = request.fields();
    assert_eq!(fields.get(api::FIRST_NAME), Some("John"));
    assert_eq!(fields.get(api::ADDRESS), Some("1000 Main St."));
    assert_eq!(fields.get(api::CITY), Some("Miami"));
    assert_eq!(fields.get(api::COUNTRY), Some("US"));
    assert_eq!(fields.get(api::SHIP_STATE), Some("GA"));
    assert_eq!(fields.get(api::SHIP_COUNTRY), Some("US"));
    // no customer id in this vocabulary
    assert!(!fields.iter().any(|(_, value)| value == "00001"));
}

#[test]
fn test_actions_map_to_wire_types() {
    let mut auth = QueryStringRequest::charge1("demo", "password", true);
    auth.authorize("4111111111111111", "1030", "999", amount("10.00")).unwrap();
    assert_eq!(auth.fields().get(api::TRANSACTION_TYPE), Some("auth"));
    assert_eq!(auth.fields().get(api::CREDIT_CARD_CODE), Some("999"));

    let mut sale = QueryStringRequest::charge1("demo", "password", true);
    sale.sale("4111111111111111", "1030", "999", amount("10.00")).unwrap();
    assert_eq!(sale.fields().get(api::TRANSACTION_TYPE), Some("sale"));

    let mut void = QueryStringRequest::durango("demo", "password", true);
    void.void("TXN001").unwrap();
    assert_eq!(void.fields().get(api::TRANSACTION_TYPE), Some("void"));
    assert_eq!(void.fields().get(api::TRANSACTION_ID), Some("TXN001"));

    let mut refund = QueryStringRequest::durango("demo", "password", true);
    refund.refund("TXN001", amount("3.00"), "4111111111111111").unwrap();
    assert_eq!(refund.fields().get(api::TRANSACTION_TYPE), Some("refund"));
    assert!(!refund.fields().contains_key(api::CREDIT_CARD_NUMBER));
    assert!(refund.validate().is_ok());
}

#[test]
fn test_refund_requires_amount() {
    let mut request = QueryStringRequest::durango("demo", "password", true);
    request.refund("", amount("3.00"), "").unwrap();

    match request.validate() {
        Err(GatewayError::Validation { fields }) => assert_eq!(fields, vec![api::TRANSACTION_ID]),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_decode_sample_response() {
    let response = QueryStringResponse::decode(Processor::Durango, SAMPLE).unwrap();

    assert!(response.is_approved());
    assert_eq!(response.response_text(), "SUCCESS");
    assert_eq!(response.authorization_code(), "123456");
    assert_eq!(response.transaction_id(), "281719471");
    assert_eq!(response.invoice_number(), "1234");
    assert_eq!(response.response_code(), "100");
    assert_eq!(response.message(), "Transaction was Approved.");
    assert_eq!(response.avs_response(), "Address (Street) and five digit ZIP match");
    assert_eq!(response.ccv_response(), "Successful Match");
    assert_eq!(response.amount(), Decimal::ZERO);
    assert_eq!(response.full_response(), SAMPLE);
    assert_eq!(response.pairs().len(), 8);
    assert_eq!(response.position_of("281719471"), Some(3));
}

#[test]
fn test_decode_percent_encoded_values() {
    let response =
        QueryStringResponse::decode(Processor::Charge1, "response=3&responsetext=Invalid+Card%21").unwrap();
    assert!(response.is_error());
    assert_eq!(response.processor(), Processor::Charge1);
    assert_eq!(response.response_text(), "Invalid Card!");
}

#[test]
fn test_repeated_keys_are_comma_joined() {
    let raw = "response=2&responsetext=DECLINE&transactionid=1&responsetext=Call+issuer";
    let response = QueryStringResponse::decode(Processor::Durango, raw).unwrap();

    assert_eq!(response.response_text(), "DECLINE,Call issuer");
    assert_eq!(response.pairs().len(), 3);
    assert_eq!(response.position_of("DECLINE,Call issuer"), Some(1));
    assert_eq!(response.full_response(), raw);
}

#[test]
fn test_decode_empty_body_fails() {
    let error = QueryStringResponse::decode(Processor::Charge1, "").unwrap_err();
    match error {
        GatewayError::Decode { processor, message } => {
            assert_eq!(processor, Processor::Charge1);
            assert!(message.contains("recheck that all dates and amounts"));
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_garbled_code_reads_zero() {
    let response = QueryStringResponse::decode(Processor::Durango, "response=abc").unwrap();
    assert_eq!(response.code(), 0);
    assert!(!response.is_approved() && !response.is_declined() && !response.is_error());
}

#[test]
fn test_display_renders_labelled_keys() {
    let response = QueryStringResponse::decode(Processor::Durango, SAMPLE).unwrap();
    let rendered = response.to_string();

    assert_eq!(rendered.lines().count(), keys::LABELS.len());
    assert!(rendered.starts_with("Response = 1\n"));
    assert!(rendered.contains("Cardholder Authentication Verification Response = M\n"));
    assert!(rendered.ends_with("Response Code = 100\n"));
}

#[test]
fn test_result_code_table() {
    assert_eq!(result_message("100"), "Transaction was Approved.");
    assert_eq!(result_message("202"), "Insufficient Funds.");
    assert_eq!(result_message("253"), "Fraudulent card.");
    assert_eq!(result_message("264"), "Declined. Retry in a few days.");
    assert_eq!(result_message("300"), "Transaction was Rejected by Gateway.");
    assert_eq!(result_message("461"), "Unsupported card type.");
    assert_eq!(result_message("223"), "");
}

#[test]
fn test_avs_and_ccv_tables() {
    assert_eq!(avs_message("B"), "Address (Street) matches, ZIP does not");
    assert_eq!(avs_message("E"), "Not a mail/phone order");
    assert_eq!(avs_message("I"), "Non-U.S. Card Issuing Bank");
    assert_eq!(avs_message("M"), "Five digit ZIP matches, Address (Street) does not");
    assert_eq!(avs_message("0"), "AVS not available");
    assert_eq!(avs_message("O"), "AVS not available");
    assert_eq!(avs_message("Q"), "");
    assert_eq!(
        ccv_message("S"),
        "Merchant has indicated that the Card Code is not present on card"
    );
    assert_eq!(ccv_message("N"), "The Card Code does not match");
}
