//! Checkout module.
//!
//! Contains the address form and pincode validator, the payment form and
//! the panel sequencer.

mod address;
mod flow;
mod payment;
mod pincode;

pub use address::{AddressField, AddressForm, DerivedField, ShippingAddress};
pub use flow::{CheckoutContext, CheckoutFlow, CheckoutStep};
pub use payment::{Confirmation, PaymentDetails, PaymentError};
pub use pincode::{Locality, Pincode, PincodeError, PincodeStatus};
