//! Cardholder and shipping details

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Billing customer queued by `add_customer`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Merchant-side customer id
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Street address
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

/// Ship-to address queued by `add_shipping`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    pub first_name: String,
    pub last_name: String,
    /// Street address
    pub address: String,
    pub state: String,
    pub zip: String,
}

impl Shipping {
    /// Create a new shipping address
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

/// Format a card expiry as `MMYYYY`
///
/// Request builders queue the expiry exactly as given; this is a convenience
/// for callers holding a date.
pub fn expiry_mmyyyy(date: impl Datelike) -> String {
    format!("{:02}{:04}", date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_expiry_formatting() {
        let date = NaiveDate::from_ymd_opt(2031, 3, 17).unwrap();
        assert_eq!(expiry_mmyyyy(date), "032031");
    }

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new(
            "00001",
            "John",
            "Smith",
            "1000 Main St.",
            "Miami",
            "FL",
            "33021",
        );
        assert_eq!(customer.id, "00001");
        assert_eq!(customer.city, "Miami");
        assert_eq!(customer.zip, "33021");
    }
}
