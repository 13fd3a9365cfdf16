//! Serializable snapshot of a session, for renderers and JSON output.

use serde::{Deserialize, Serialize};

use super::CheckoutSession;
use crate::cart::CartLine;
use crate::catalog::Product;
use crate::checkout::{AddressForm, CheckoutStep, Confirmation, PincodeStatus};
use crate::error::CommerceError;
use crate::gateway::{PaymentGateway, PincodeDirectory};
use crate::ids::SessionId;
use crate::money::Money;

/// Everything a renderer needs to draw the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub step: CheckoutStep,
    pub product_index: usize,
    pub product_count: usize,
    pub current_product: Product,
    pub quantity: u32,
    pub cart: Vec<CartLine>,
    pub item_count: u32,
    pub total: Money,
    pub address: AddressForm,
    pub pincode_status: PincodeStatus,
    pub pincode_message: Option<String>,
    pub payment_message: Option<String>,
    pub processing_payment: bool,
    pub confirmation: Option<Confirmation>,
    pub actions: SessionActions,
}

/// Which controls are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionActions {
    pub can_add_to_cart: bool,
    pub can_proceed_to_checkout: bool,
    pub can_check_pincode: bool,
    pub can_submit_address: bool,
    pub can_pay: bool,
}

impl SessionView {
    pub(super) fn capture<D, G>(session: &CheckoutSession<D, G>) -> Result<Self, CommerceError>
    where
        D: PincodeDirectory,
        G: PaymentGateway,
    {
        let step = session.step();
        let cart = session.cart();
        let address = session.address();

        let actions = SessionActions {
            can_add_to_cart: matches!(step, CheckoutStep::Browsing | CheckoutStep::CartOpen),
            can_proceed_to_checkout: step == CheckoutStep::CartOpen && !cart.is_empty(),
            can_check_pincode: step == CheckoutStep::AddressForm && address.can_check(),
            can_submit_address: step == CheckoutStep::AddressForm && address.can_submit(),
            can_pay: step == CheckoutStep::Payment
                && !cart.is_empty()
                && !session.is_processing_payment(),
        };

        Ok(Self {
            session_id: session.id().clone(),
            step,
            product_index: session.carousel.index(),
            product_count: session.catalog().len(),
            current_product: session.current_product().clone(),
            quantity: session.quantity(),
            cart: cart.lines().to_vec(),
            item_count: cart.item_count(),
            total: cart.total()?,
            address: address.clone(),
            pincode_status: address.status(),
            pincode_message: address.error().map(|e| e.to_string()),
            payment_message: session.payment_error().map(|e| e.to_string()),
            processing_payment: session.is_processing_payment(),
            confirmation: session.confirmation().cloned(),
            actions,
        })
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
