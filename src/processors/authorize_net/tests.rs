//! Tests for the Authorize.Net adapter

use super::response::{avs_message, ccv_message};
use super::{api, offsets, AuthorizeNetRequest, AuthorizeNetResponse};
use crate::request::RequestBuilder;
use crate::response::{ResponseDecoder, ResponseStatus};
use crate::types::{Customer, Processor, TransactionType};
use crate::GatewayError;
use rust_decimal::Decimal;
use std::str::FromStr;

fn amount(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

/// An approved response with every labelled offset, the reserved fields
/// and the trailing card type populated
fn full_response() -> String {
    let mut fields: Vec<String> = (0..55).map(|i| format!("f{}", i)).collect();
    fields[offsets::RESPONSE_CODE] = "1".into();
    fields[offsets::RESPONSE_SUBCODE] = "1".into();
    fields[offsets::RESPONSE_REASON_CODE] = "1".into();
    fields[offsets::RESPONSE_REASON_TEXT] = "This transaction has been approved.".into();
    fields[offsets::AMOUNT] = "19.99".into();
    fields[offsets::TAX] = "1.50".into();
    fields[offsets::METHOD] = "CC".into();
    fields[offsets::TRANSACTION_TYPE] = "auth_capture".into();
    fields[offsets::CARD_CODE_RESPONSE] = "M".into();
    fields[offsets::ACCOUNT_NUMBER] = "XXXX1111".into();
    fields[offsets::CARD_TYPE_FIELD] = "Visa".into();
    fields.join("|")
}

#[test]
fn test_new_request_queues_credentials_and_defaults() {
    let request = AuthorizeNetRequest::new("login", "key", true);
    let keys: Vec<&str> = request.fields().keys().collect();

    assert_eq!(
        keys,
        vec![
            api::API_LOGIN,
            api::TRANSACTION_KEY,
            api::DELIMIT_DATA,
            api::DELIMIT_CHARACTER,
            api::RELAY_RESPONSE,
            api::EMAIL_CUSTOMER,
            api::METHOD,
            api::COUNTRY,
            api::SHIP_COUNTRY,
            api::DUPLICATE_WINDOW_TIME,
        ]
    );
    assert_eq!(request.fields().get(api::DELIMIT_CHARACTER), Some("|"));
    assert_eq!(request.fields().get(api::DUPLICATE_WINDOW_TIME), Some("120"));
    assert_eq!(request.post_url(), "https://test.authorize.net/gateway/transact.dll");
    assert_eq!(
        AuthorizeNetRequest::new("login", "key", false).post_url(),
        "https://secure.authorize.net/gateway/transact.dll"
    );
}

#[test]
fn test_actions_map_to_wire_types() {
    let cases = [
        (TransactionType::Authorize, "AUTH_ONLY"),
        (TransactionType::Sale, "AUTH_CAPTURE"),
        (TransactionType::Settle, "PRIOR_AUTH_CAPTURE"),
        (TransactionType::Void, "VOID"),
        (TransactionType::Refund, "CREDIT"),
    ];

    for (action, wire) in cases {
        let mut request = AuthorizeNetRequest::new("login", "key", true);
        match action {
            TransactionType::Authorize => {
                request.authorize("4111111111111111", "1030", "111", amount("1.00")).unwrap();
            }
            TransactionType::Sale => {
                request.sale("4111111111111111", "1030", "111", amount("1.00")).unwrap();
            }
            TransactionType::Settle => {
                request.settle_full("TXN001").unwrap();
            }
            TransactionType::Void => {
                request.void("TXN001").unwrap();
            }
            TransactionType::Refund => {
                request.refund("TXN001", amount("1.00"), "1111").unwrap();
            }
        }

        assert_eq!(request.fields().get(api::TRANSACTION_TYPE), Some(wire));
        assert!(request.validate().is_ok(), "{} should validate", action);
    }
}

#[test]
fn test_customer_includes_customer_id() {
    let mut request = AuthorizeNetRequest::new("login", "key", true);
    request
        .add_customer(&Customer::new("00001", "John", "Smith", "1000 Main St.", "Miami", "FL", "33021"))
        .unwrap();

    assert_eq!(request.fields().get(api::CUSTOMER_ID), Some("00001"));
    assert_eq!(request.fields().get(api::CITY), Some("Miami"));
    assert_eq!(request.fields().get(api::FIRST_NAME), Some("John"));
}

#[test]
fn test_refund_requires_card_number() {
    let mut request = AuthorizeNetRequest::new("login", "key", true);
    request.refund("TXN001", amount("5.00"), "").unwrap();

    match request.validate() {
        Err(GatewayError::Validation { fields }) => assert_eq!(fields, vec![api::CREDIT_CARD_NUMBER]),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_delimiter_follows_merchant_override() {
    let mut request = AuthorizeNetRequest::new("login", "key", true);
    assert_eq!(request.delimiter().unwrap(), '|');

    request.add_merchant_value(api::DELIMIT_CHARACTER, ",").unwrap();
    assert_eq!(request.delimiter().unwrap(), ',');

    request.add_merchant_value(api::DELIMIT_CHARACTER, "").unwrap();
    match request.delimiter() {
        Err(GatewayError::Validation { fields }) => assert_eq!(fields, vec![api::DELIMIT_CHARACTER]),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_empty_delimiter() {
    let mut request = AuthorizeNetRequest::new("login", "key", true);
    request
        .add_merchant_value(api::DELIMIT_CHARACTER, "")
        .unwrap()
        .sale("4111111111111111", "1030", "111", amount("9.99"))
        .unwrap();

    match request.validate() {
        Err(GatewayError::Validation { fields }) => assert_eq!(fields, vec![api::DELIMIT_CHARACTER]),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_card_type_is_read_after_reserved_fields() {
    let response = AuthorizeNetResponse::decode(&full_response(), '|').unwrap();
    assert_eq!(response.card_type(), "Visa");
    assert_eq!(response.field(offsets::CARD_TYPE), "f41");

    // a 45-field response carries no card type
    let short: Vec<String> = (0..45).map(|i| i.to_string()).collect();
    let response = AuthorizeNetResponse::decode(&short.join("|"), '|').unwrap();
    assert_eq!(response.card_type(), "");
}

#[test]
fn test_decode_short_response() {
    let response = AuthorizeNetResponse::decode("1|2|3|Approved|AUTH123|Y|TXN001", '|').unwrap();

    assert_eq!(response.code(), 1);
    assert_eq!(response.sub_code(), 2);
    assert_eq!(response.reason_code(), 3);
    assert_eq!(response.message(), "Approved");
    assert_eq!(response.authorization_code(), "AUTH123");
    assert_eq!(response.avs_code(), "Y");
    assert_eq!(response.transaction_id(), "TXN001");
    assert!(response.is_approved());

    // offsets past the end read empty
    assert_eq!(response.invoice_number(), "");
    assert_eq!(response.ccv_code(), "");
    assert_eq!(response.amount(), Decimal::ZERO);
}

#[test]
fn test_decode_single_token_fails() {
    let error = AuthorizeNetResponse::decode("Error: bad request", '|').unwrap_err();
    match error {
        GatewayError::Decode { processor, message } => {
            assert_eq!(processor, Processor::AuthorizeNet);
            assert!(message.starts_with("Error: bad request"));
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_decode_full_response() {
    let raw = full_response();
    let response = AuthorizeNetResponse::decode(&raw, '|').unwrap();

    assert_eq!(response.fields().len(), 55);
    assert_eq!(response.amount(), amount("19.99"));
    assert_eq!(response.tax(), amount("1.50"));
    assert_eq!(response.method(), "CC");
    assert_eq!(response.transaction_type(), "auth_capture");
    assert_eq!(response.card_number(), "XXXX1111");
    assert_eq!(response.card_type(), "Visa");
    assert_eq!(response.ccv_code(), "M");
    assert_eq!(response.ccv_response(), "Successful Match");
    assert_eq!(response.customer_id(), "f12");
    assert_eq!(response.ship_country(), "f31");
    assert_eq!(response.md5_hash(), "f37");
    assert_eq!(response.position_of("XXXX1111"), Some(offsets::ACCOUNT_NUMBER));
    assert_eq!(response.position_of("missing"), None);
    assert_eq!(response.full_response(), raw);
}

#[test]
fn test_display_renders_every_label() {
    let response = AuthorizeNetResponse::decode(&full_response(), '|').unwrap();
    let rendered = response.to_string();

    assert_eq!(rendered.lines().count(), 45);
    assert!(rendered.starts_with("Response Code = 1\n"));
    assert!(rendered.contains("Account Number = XXXX1111\n"));
    assert!(rendered.ends_with("Balance On Card = f44\n"));
}

#[test]
fn test_held_for_review_status() {
    let response = AuthorizeNetResponse::decode("4|1|253|Held|A1|Y|T1", '|').unwrap();
    assert_eq!(response.status(), ResponseStatus::HeldForReview);
    assert!(response.is_held_for_review());
    assert!(!response.is_approved());
}

#[test]
fn test_lookup_tables() {
    assert_eq!(avs_message("A"), "Address (Street) matches, ZIP does not");
    assert_eq!(avs_message("R"), "Retry — System unavailable or timed out");
    assert_eq!(avs_message("Z"), "Five digit ZIP matches, Address (Street) does not");
    assert_eq!(avs_message("Q"), "");
    assert_eq!(ccv_message("S"), "The Card Code should be on card, but is not indicated");
    assert_eq!(ccv_message("U"), "Card Code is not supported by the card issuer");
    assert_eq!(ccv_message(""), "");
}
