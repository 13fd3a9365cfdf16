//! Storefront domain types and checkout logic for the SIRIK site.
//!
//! - **Catalog**: the fixed product lineup and cyclic carousel
//! - **Cart**: one aggregated line per product, quantity picker, totals
//! - **Checkout**: address form with pincode validation, payment form,
//!   panel sequencer
//! - **Gateway**: async pincode directory and payment gateway traits, with
//!   fixed-table, fixed-delay mocks
//! - **Session**: the controller tying them together for one visitor
//!
//! # Example
//!
//! ```rust,no_run
//! use sirik_commerce::prelude::*;
//!
//! # async fn run() -> Result<(), CommerceError> {
//! let mut session = CheckoutSession::from_config(&CommerceConfig::default());
//! session.add_to_cart(ProductId::new(1), 2)?;
//! session.proceed_to_checkout()?;
//!
//! session.set_address_field(AddressField::Name, "Asha Rao")?;
//! session.set_address_field(AddressField::Phone, "9876543210")?;
//! session.set_address_field(AddressField::Address, "12 Temple Street")?;
//! session.set_address_field(AddressField::Pincode, "600001")?;
//! session.submit_address().await?;
//!
//! let details = PaymentDetails::new("4111 1111 1111 1111", "12/30", "123", "Asha Rao");
//! let confirmation = session.pay(details).await?;
//! println!("Order {} for {}", confirmation.order_id, confirmation.total);
//! session.run_confirmation().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod gateway;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CheckoutTimings, CommerceConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Carousel, Catalog, Product, PRODUCT_FEATURES};

    // Cart
    pub use crate::cart::{Cart, CartLine, QuantitySelector, MAX_QUANTITY_PER_LINE};

    // Checkout
    pub use crate::checkout::{
        AddressField, AddressForm, CheckoutFlow, CheckoutStep, Confirmation, DerivedField,
        Locality, PaymentDetails, PaymentError, Pincode, PincodeError, PincodeStatus,
        ShippingAddress,
    };

    // Gateways
    pub use crate::gateway::{
        LookupError, MockPaymentGateway, MockPincodeDirectory, PaymentGateway, PaymentReceipt,
        PaymentRequest, PincodeDirectory, SERVICEABLE_PINCODES,
    };

    // Session
    pub use crate::session::{CheckoutSession, Outcome, SessionActions, SessionView};
}
