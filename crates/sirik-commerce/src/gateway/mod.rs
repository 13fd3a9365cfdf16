//! Asynchronous capabilities the checkout depends on.
//!
//! The session only talks to these traits, so the in-memory mocks can be
//! swapped for a shipping-rates service or a payment processor.

mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checkout::{Locality, PaymentDetails, PaymentError, Pincode};
use crate::ids::OrderId;
use crate::money::Money;

pub use mock::{MockPaymentGateway, MockPincodeDirectory, SERVICEABLE_PINCODES};

/// Failure of a pincode lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The directory answered: nobody delivers there.
    #[error("No delivery area for pincode {0}")]
    NotServiceable(Pincode),

    /// The directory could not answer.
    #[error("Pincode lookup unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a pincode to its city and state.
#[async_trait]
pub trait PincodeDirectory: Send + Sync {
    async fn lookup(&self, code: &Pincode) -> Result<Locality, LookupError>;
}

/// A charge submitted to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: Money,
    pub details: PaymentDetails,
}

/// Proof that a charge went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order_id: OrderId,
    pub amount: Money,
    pub processed_at: DateTime<Utc>,
}

/// Takes a payment.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}
