//! Payment form and order confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartLine;
use crate::checkout::ShippingAddress;
use crate::ids::OrderId;
use crate::money::Money;

/// Payment failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// A required payment input is blank.
    #[error("Missing payment field: {0}")]
    MissingField(&'static str),

    /// The gateway refused the charge.
    #[error("Payment declined: {0}")]
    Declined(String),
}

/// Card form inputs. Only presence is checked; this is a demo gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub name_on_card: String,
}

impl PaymentDetails {
    pub fn new(
        card_number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
        name_on_card: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
            name_on_card: name_on_card.into(),
        }
    }

    /// Blank inputs, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("card_number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
            ("name_on_card", &self.name_on_card),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        match self.missing_fields().first() {
            Some(field) => Err(PaymentError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Last four characters of the card number, for receipts.
    pub fn masked_card(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {}", tail)
    }
}

/// What the confirmation panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub address: ShippingAddress,
    pub lines: Vec<CartLine>,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_details_validate() {
        let details = PaymentDetails::new("1234 5678 9012 3456", "12/30", "123", "John Doe");
        assert!(details.validate().is_ok());
        assert_eq!(details.masked_card(), "**** 3456");
    }

    #[test]
    fn test_first_blank_field_reported() {
        let details = PaymentDetails::new("", "12/30", " ", "John Doe");
        assert_eq!(details.missing_fields(), vec!["card_number", "cvv"]);
        assert_eq!(details.validate(), Err(PaymentError::MissingField("card_number")));
    }

    #[test]
    fn test_any_non_empty_card_accepted() {
        // No format validation on card data.
        let details = PaymentDetails::new("x", "y", "z", "w");
        assert!(details.validate().is_ok());
        assert_eq!(details.masked_card(), "**** x");
    }
}
