//! Commerce error types.

use thiserror::Error;

use crate::checkout::{PaymentError, PincodeError};
use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A catalog must hold at least one product.
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Checkout needs at least one cart line.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Not one of the address form's inputs.
    #[error("Unknown address field: {0}")]
    UnknownField(String),

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// A payment for this session is already being processed.
    #[error("Payment already in progress")]
    PaymentInProgress,

    /// The panel that started the operation was dismissed.
    #[error("Operation cancelled: the panel was closed")]
    Cancelled,

    /// Address validation failed.
    #[error(transparent)]
    Pincode(#[from] PincodeError),

    /// Payment form or gateway failure.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
