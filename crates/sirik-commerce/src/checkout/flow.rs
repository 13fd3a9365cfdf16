//! Checkout panel sequencer.

use crate::cart::Cart;
use crate::checkout::{AddressForm, PaymentDetails};
use crate::CommerceError;
use serde::{Deserialize, Serialize};

const CART_ITEMS: &str = "cart items";

/// Panels of the storefront, in forward order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// No panel open.
    #[default]
    Browsing,
    /// Cart sidebar.
    CartOpen,
    /// Delivery address dialog.
    AddressForm,
    /// Card payment dialog.
    Payment,
    /// Order confirmation, shown until the session resets.
    Confirmed,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Browsing => "browsing",
            CheckoutStep::CartOpen => "cart_open",
            CheckoutStep::AddressForm => "address_form",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmed => "confirmed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Browsing => "Browsing",
            CheckoutStep::CartOpen => "Your Cart",
            CheckoutStep::AddressForm => "Delivery Address",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmed => "Order Confirmed",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Browsing => 1,
            CheckoutStep::CartOpen => 2,
            CheckoutStep::AddressForm => 3,
            CheckoutStep::Payment => 4,
            CheckoutStep::Confirmed => 5,
        }
    }

    /// The step a normal forward move leads to.
    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Browsing => Some(CheckoutStep::CartOpen),
            CheckoutStep::CartOpen => Some(CheckoutStep::AddressForm),
            CheckoutStep::AddressForm => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Confirmed),
            CheckoutStep::Confirmed => None,
        }
    }

    /// Whether a panel is showing.
    pub fn is_panel(&self) -> bool {
        *self != CheckoutStep::Browsing
    }
}

/// Everything the sequencer's guards look at.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutContext<'a> {
    pub cart: &'a Cart,
    pub address: &'a AddressForm,
    pub payment: Option<&'a PaymentDetails>,
}

/// Linear panel state machine with cancel back to Browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckoutFlow {
    step: CheckoutStep,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Check if the flow may enter `step` from where it is.
    pub fn can_advance_to(&self, step: CheckoutStep, ctx: &CheckoutContext<'_>) -> bool {
        self.step.next() == Some(step) && self.missing_for_step(step, ctx).is_empty()
    }

    /// Move one step forward.
    pub fn advance(&mut self, ctx: &CheckoutContext<'_>) -> Result<CheckoutStep, CommerceError> {
        let next = self
            .step
            .next()
            .ok_or_else(|| CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            })?;

        let missing = self.missing_for_step(next, ctx);
        if !missing.is_empty() {
            if missing.contains(&CART_ITEMS) {
                return Err(CommerceError::EmptyCart);
            }
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        self.step = next;
        Ok(next)
    }

    /// Open the cart panel from Browsing; a no-op when already open.
    pub fn open_cart(&mut self) -> Result<(), CommerceError> {
        match self.step {
            CheckoutStep::Browsing | CheckoutStep::CartOpen => {
                self.step = CheckoutStep::CartOpen;
                Ok(())
            }
            other => Err(CommerceError::InvalidCheckoutTransition {
                from: other.as_str().to_string(),
                to: CheckoutStep::CartOpen.as_str().to_string(),
            }),
        }
    }

    /// Close whatever panel is open. Returns the step that was dismissed.
    pub fn dismiss(&mut self) -> CheckoutStep {
        std::mem::replace(&mut self.step, CheckoutStep::Browsing)
    }

    /// What's missing to enter a step.
    fn missing_for_step(&self, step: CheckoutStep, ctx: &CheckoutContext<'_>) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if step != CheckoutStep::Browsing && step != CheckoutStep::CartOpen && ctx.cart.is_empty() {
            missing.push(CART_ITEMS);
        }
        match step {
            CheckoutStep::Payment => {
                missing.extend(ctx.address.missing_fields());
                if !ctx.address.can_submit() {
                    missing.push("serviceable pincode");
                }
            }
            CheckoutStep::Confirmed => match ctx.payment {
                Some(details) => missing.extend(details.missing_fields()),
                None => missing.push("payment details"),
            },
            CheckoutStep::Browsing | CheckoutStep::CartOpen | CheckoutStep::AddressForm => {}
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::{AddressField, Locality};
    use crate::ids::ProductId;
    use crate::money::Currency;

    fn cart_with_item() -> Cart {
        let mut cart = Cart::new(Currency::INR);
        let catalog = Catalog::default();
        cart.add(catalog.get(ProductId::new(1)).unwrap(), 1).unwrap();
        cart
    }

    fn resolved_address() -> AddressForm {
        let mut form = AddressForm::new();
        form.set(AddressField::Name, "Asha");
        form.set(AddressField::Phone, "98765");
        form.set(AddressField::Address, "12 Temple St");
        form.set(AddressField::Pincode, "600001");
        let code = form.begin_check().unwrap();
        form.complete_check(&code, Ok(Locality::new("Chennai", "Tamil Nadu")));
        form
    }

    #[test]
    fn test_flow_starts_browsing() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Browsing);
    }

    #[test]
    fn test_empty_cart_cannot_proceed() {
        let cart = Cart::new(Currency::INR);
        let address = AddressForm::new();
        let ctx = CheckoutContext { cart: &cart, address: &address, payment: None };

        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        assert!(!flow.can_advance_to(CheckoutStep::AddressForm, &ctx));
        assert_eq!(flow.advance(&ctx), Err(CommerceError::EmptyCart));
        assert_eq!(flow.step(), CheckoutStep::CartOpen);
    }

    #[test]
    fn test_address_required_for_payment() {
        let cart = cart_with_item();
        let mut address = AddressForm::new();
        address.set(AddressField::Name, "Asha");
        let ctx = CheckoutContext { cart: &cart, address: &address, payment: None };

        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        flow.advance(&ctx).unwrap();
        assert!(matches!(
            flow.advance(&ctx),
            Err(CommerceError::CheckoutIncomplete(_))
        ));
        assert_eq!(flow.step(), CheckoutStep::AddressForm);
    }

    #[test]
    fn test_full_forward_path() {
        let cart = cart_with_item();
        let address = resolved_address();
        let details = PaymentDetails::new("1", "2", "3", "4");
        let ctx = CheckoutContext { cart: &cart, address: &address, payment: Some(&details) };

        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.advance(&ctx).unwrap(), CheckoutStep::CartOpen);
        assert_eq!(flow.advance(&ctx).unwrap(), CheckoutStep::AddressForm);
        assert_eq!(flow.advance(&ctx).unwrap(), CheckoutStep::Payment);
        assert_eq!(flow.advance(&ctx).unwrap(), CheckoutStep::Confirmed);
        assert!(matches!(
            flow.advance(&ctx),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }

    #[test]
    fn test_empty_cart_cannot_confirm() {
        let cart = cart_with_item();
        let address = resolved_address();
        let details = PaymentDetails::new("1", "2", "3", "4");
        let ctx = CheckoutContext { cart: &cart, address: &address, payment: Some(&details) };

        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        flow.advance(&ctx).unwrap();
        flow.advance(&ctx).unwrap();
        assert_eq!(flow.step(), CheckoutStep::Payment);

        let empty = Cart::new(Currency::INR);
        let ctx = CheckoutContext { cart: &empty, address: &address, payment: Some(&details) };
        assert!(!flow.can_advance_to(CheckoutStep::Confirmed, &ctx));
        assert_eq!(flow.advance(&ctx), Err(CommerceError::EmptyCart));
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_dismiss_returns_to_browsing() {
        let cart = cart_with_item();
        let address = AddressForm::new();
        let ctx = CheckoutContext { cart: &cart, address: &address, payment: None };

        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        flow.advance(&ctx).unwrap();
        assert_eq!(flow.dismiss(), CheckoutStep::AddressForm);
        assert_eq!(flow.step(), CheckoutStep::Browsing);
    }

    #[test]
    fn test_cannot_open_cart_mid_checkout() {
        let cart = cart_with_item();
        let address = AddressForm::new();
        let ctx = CheckoutContext { cart: &cart, address: &address, payment: None };

        let mut flow = CheckoutFlow::new();
        flow.open_cart().unwrap();
        flow.advance(&ctx).unwrap();
        assert!(flow.open_cart().is_err());
    }
}
