//! The storefront session controller.
//!
//! `CheckoutSession` owns the catalog browser, cart, address form and
//! panel sequencer for one visitor, and is the only thing that mutates
//! them. Every asynchronous step is split into `begin_*` and `complete_*`
//! halves joined by a ticket. Dismissing a panel or resetting the session
//! moves the session to a new epoch, and tickets from an older epoch
//! complete as [`Outcome::Stale`] without touching state.

mod view;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cart::{Cart, CartLine, QuantitySelector};
use crate::catalog::{Carousel, Catalog, Product};
use crate::checkout::{
    AddressField, AddressForm, CheckoutContext, CheckoutFlow, CheckoutStep, Confirmation,
    Locality, PaymentDetails, PaymentError, Pincode, PincodeError, ShippingAddress,
};
use crate::config::CommerceConfig;
use crate::error::CommerceError;
use crate::gateway::{
    LookupError, MockPaymentGateway, MockPincodeDirectory, PaymentGateway, PaymentReceipt,
    PaymentRequest, PincodeDirectory,
};
use crate::ids::{ProductId, SessionId};
use crate::money::Money;

pub use view::{SessionActions, SessionView};

/// Result of completing a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The result was applied to the session.
    Applied(T),
    /// The panel that started the operation is gone; nothing changed.
    Stale,
}

impl<T> Outcome<T> {
    pub fn is_stale(&self) -> bool {
        matches!(self, Outcome::Stale)
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(v) => Some(v),
            Outcome::Stale => None,
        }
    }
}

/// A pincode lookup in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    epoch: u64,
    code: Pincode,
}

impl LookupTicket {
    pub fn code(&self) -> &Pincode {
        &self.code
    }
}

/// A payment in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTicket {
    epoch: u64,
    request: PaymentRequest,
    address: ShippingAddress,
    lines: Vec<CartLine>,
}

impl PaymentTicket {
    pub fn request(&self) -> &PaymentRequest {
        &self.request
    }
}

/// The confirmation display timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationTicket {
    epoch: u64,
}

/// One visitor's storefront state.
pub struct CheckoutSession<D = MockPincodeDirectory, G = MockPaymentGateway> {
    id: SessionId,
    catalog: Catalog,
    carousel: Carousel,
    quantity: QuantitySelector,
    cart: Cart,
    address: AddressForm,
    flow: CheckoutFlow,
    processing_payment: bool,
    payment_error: Option<PaymentError>,
    confirmation: Option<Confirmation>,
    epoch: u64,
    confirmation_display: Duration,
    directory: D,
    gateway: G,
}

impl CheckoutSession<MockPincodeDirectory, MockPaymentGateway> {
    /// A session over the SIRIK lineup backed by the mock services.
    pub fn from_config(config: &CommerceConfig) -> Self {
        Self::new(
            Catalog::sirik(config.currency),
            MockPincodeDirectory::new(config.timings.pincode_lookup()),
            MockPaymentGateway::new(config.timings.payment_processing()),
            config.timings.confirmation_display(),
        )
    }
}

impl<D: PincodeDirectory, G: PaymentGateway> CheckoutSession<D, G> {
    pub fn new(catalog: Catalog, directory: D, gateway: G, confirmation_display: Duration) -> Self {
        let currency = catalog
            .at(0)
            .map(|p| p.price.currency)
            .unwrap_or_default();
        let id = SessionId::generate();
        debug!(session_id = %id, products = catalog.len(), "session created");
        Self {
            id,
            catalog,
            carousel: Carousel::new(),
            quantity: QuantitySelector::new(),
            cart: Cart::new(currency),
            address: AddressForm::new(),
            flow: CheckoutFlow::new(),
            processing_payment: false,
            payment_error: None,
            confirmation: None,
            epoch: 0,
            confirmation_display,
            directory,
            gateway,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn address(&self) -> &AddressForm {
        &self.address
    }

    pub fn step(&self) -> CheckoutStep {
        self.flow.step()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn is_processing_payment(&self) -> bool {
        self.processing_payment
    }

    pub fn payment_error(&self) -> Option<&PaymentError> {
        self.payment_error.as_ref()
    }

    // ---- browsing -------------------------------------------------------

    pub fn current_product(&self) -> &Product {
        self.carousel.current(&self.catalog)
    }

    pub fn next_product(&mut self) -> &Product {
        self.carousel.next(&self.catalog);
        self.current_product()
    }

    pub fn previous_product(&mut self) -> &Product {
        self.carousel.previous(&self.catalog);
        self.current_product()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub fn increment_quantity(&mut self) -> u32 {
        self.quantity.increment()
    }

    pub fn decrement_quantity(&mut self) -> u32 {
        self.quantity.decrement()
    }

    // ---- cart -----------------------------------------------------------

    /// Add the selected quantity of the product on display.
    pub fn add_current_to_cart(&mut self) -> Result<u32, CommerceError> {
        let id = self.current_product().id;
        let quantity = self.quantity.get();
        self.add_to_cart(id, quantity)
    }

    /// Add `quantity` of a product, reset the picker and open the cart.
    ///
    /// Returns the resulting quantity on that product's line.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> Result<u32, CommerceError> {
        self.expect_cart_editable()?;
        let product = self.catalog.get(product_id)?;
        let line_quantity = self.cart.add(product, quantity)?;
        self.quantity.reset();
        self.flow.open_cart()?;

        info!(
            session_id = %self.id,
            %product_id,
            quantity,
            line_quantity,
            "added to cart"
        );
        Ok(line_quantity)
    }

    /// Remove a product's line; absent ids are ignored.
    ///
    /// Only allowed while browsing or with the cart panel open, so the
    /// order cannot change under the address or payment panels.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        self.expect_cart_editable()?;
        let removed = self.cart.remove(product_id);
        debug!(session_id = %self.id, %product_id, removed, "remove from cart");
        Ok(removed)
    }

    pub fn total(&self) -> Result<Money, CommerceError> {
        self.cart.total()
    }

    pub fn open_cart(&mut self) -> Result<(), CommerceError> {
        self.flow.open_cart()
    }

    /// Cart panel → address panel. Needs a non-empty cart.
    pub fn proceed_to_checkout(&mut self) -> Result<(), CommerceError> {
        self.expect_step(CheckoutStep::CartOpen, CheckoutStep::AddressForm)?;
        let ctx = self.context(None);
        let mut flow = self.flow;
        flow.advance(&ctx)?;
        self.flow = flow;
        info!(session_id = %self.id, items = self.cart.item_count(), "checkout started");
        Ok(())
    }

    // ---- address --------------------------------------------------------

    /// Edit one input of the address form. Only the address panel accepts
    /// edits; city and state stay fixed once the payment panel is open.
    pub fn set_address_field(
        &mut self,
        field: AddressField,
        value: impl Into<String>,
    ) -> Result<(), CommerceError> {
        self.expect_step(CheckoutStep::AddressForm, CheckoutStep::AddressForm)?;
        self.address.set(field, value);
        Ok(())
    }

    /// Validate the pincode format and start a lookup.
    pub fn begin_pincode_check(&mut self) -> Result<LookupTicket, CommerceError> {
        self.expect_step(CheckoutStep::AddressForm, CheckoutStep::AddressForm)?;
        let code = self.address.begin_check().inspect_err(|e| {
            debug!(session_id = %self.id, error = %e, "pincode rejected before lookup");
        })?;
        debug!(session_id = %self.id, pincode = %code, "pincode lookup started");
        Ok(LookupTicket {
            epoch: self.epoch,
            code,
        })
    }

    /// Apply a lookup result.
    pub fn complete_pincode_check(
        &mut self,
        ticket: LookupTicket,
        result: Result<Locality, LookupError>,
    ) -> Outcome<Result<Locality, PincodeError>> {
        if ticket.epoch != self.epoch {
            debug!(session_id = %self.id, pincode = %ticket.code, "ignoring lookup from a dismissed panel");
            return Outcome::Stale;
        }
        match self.address.complete_check(&ticket.code, result) {
            Some(outcome) => {
                match &outcome {
                    Ok(locality) => info!(
                        session_id = %self.id,
                        pincode = %ticket.code,
                        city = %locality.city,
                        state = %locality.state,
                        "pincode resolved"
                    ),
                    Err(e) => info!(session_id = %self.id, pincode = %ticket.code, error = %e, "pincode rejected"),
                }
                Outcome::Applied(outcome)
            }
            None => Outcome::Stale,
        }
    }

    /// Run a full lookup against the directory.
    pub async fn check_pincode(&mut self) -> Result<Locality, CommerceError> {
        let ticket = self.begin_pincode_check()?;
        let result = self.directory.lookup(ticket.code()).await;
        match self.complete_pincode_check(ticket, result) {
            Outcome::Applied(outcome) => Ok(outcome?),
            Outcome::Stale => Err(CommerceError::Cancelled),
        }
    }

    /// Address panel → payment panel, once the pincode is resolved and the
    /// required inputs are filled.
    pub fn confirm_address(&mut self) -> Result<ShippingAddress, CommerceError> {
        self.expect_step(CheckoutStep::AddressForm, CheckoutStep::Payment)?;
        let ctx = self.context(None);
        let mut flow = self.flow;
        flow.advance(&ctx)?;
        let address = self.address.to_shipping_address()?;
        self.flow = flow;
        info!(session_id = %self.id, pincode = %address.pincode, "address accepted");
        Ok(address)
    }

    /// Submit the address form: look the pincode up again, then advance.
    pub async fn submit_address(&mut self) -> Result<ShippingAddress, CommerceError> {
        self.expect_step(CheckoutStep::AddressForm, CheckoutStep::Payment)?;
        let missing = self.address.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }
        self.check_pincode().await?;
        self.confirm_address()
    }

    // ---- payment --------------------------------------------------------

    /// Validate the card form and start a charge for the cart total.
    pub fn begin_payment(&mut self, details: PaymentDetails) -> Result<PaymentTicket, CommerceError> {
        self.expect_step(CheckoutStep::Payment, CheckoutStep::Confirmed)?;
        if self.processing_payment {
            return Err(CommerceError::PaymentInProgress);
        }
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        details.validate()?;
        let address = self.address.to_shipping_address()?;
        let amount = self.cart.total()?;

        self.processing_payment = true;
        self.payment_error = None;
        debug!(session_id = %self.id, %amount, card = %details.masked_card(), "payment started");

        Ok(PaymentTicket {
            epoch: self.epoch,
            request: PaymentRequest { amount, details },
            address,
            lines: self.cart.lines().to_vec(),
        })
    }

    /// Apply a gateway answer.
    pub fn complete_payment(
        &mut self,
        ticket: PaymentTicket,
        result: Result<PaymentReceipt, PaymentError>,
    ) -> Result<Outcome<Confirmation>, CommerceError> {
        if ticket.epoch != self.epoch {
            debug!(session_id = %self.id, "ignoring payment result from a dismissed panel");
            return Ok(Outcome::Stale);
        }
        self.processing_payment = false;

        let receipt = match result {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "payment failed");
                self.payment_error = Some(e.clone());
                return Err(e.into());
            }
        };

        let ctx = self.context(Some(&ticket.request.details));
        let mut flow = self.flow;
        flow.advance(&ctx)?;
        self.flow = flow;

        let confirmation = Confirmation {
            order_id: receipt.order_id,
            placed_at: receipt.processed_at,
            address: ticket.address,
            lines: ticket.lines,
            total: receipt.amount,
        };
        info!(
            session_id = %self.id,
            order_id = %confirmation.order_id,
            total = %confirmation.total,
            "order confirmed"
        );
        self.confirmation = Some(confirmation.clone());
        Ok(Outcome::Applied(confirmation))
    }

    /// Charge the cart through the gateway.
    pub async fn pay(&mut self, details: PaymentDetails) -> Result<Confirmation, CommerceError> {
        let ticket = self.begin_payment(details)?;
        let result = self.gateway.process(ticket.request()).await;
        match self.complete_payment(ticket, result)? {
            Outcome::Applied(confirmation) => Ok(confirmation),
            Outcome::Stale => Err(CommerceError::Cancelled),
        }
    }

    // ---- confirmation ---------------------------------------------------

    /// How long the confirmation is shown.
    pub fn confirmation_display(&self) -> Duration {
        self.confirmation_display
    }

    /// Start the confirmation display timer.
    pub fn begin_confirmation(&self) -> Result<ConfirmationTicket, CommerceError> {
        self.expect_step(CheckoutStep::Confirmed, CheckoutStep::Browsing)?;
        Ok(ConfirmationTicket { epoch: self.epoch })
    }

    /// The display timer fired: wipe the session.
    pub fn finish_confirmation(&mut self, ticket: ConfirmationTicket) -> Outcome<()> {
        if ticket.epoch != self.epoch || self.flow.step() != CheckoutStep::Confirmed {
            return Outcome::Stale;
        }
        self.reset();
        Outcome::Applied(())
    }

    /// Show the confirmation for the configured time, then reset.
    pub async fn run_confirmation(&mut self) -> Result<Outcome<()>, CommerceError> {
        let ticket = self.begin_confirmation()?;
        tokio::time::sleep(self.confirmation_display).await;
        Ok(self.finish_confirmation(ticket))
    }

    // ---- cancel / reset -------------------------------------------------

    /// Close the open panel and orphan any pending operation.
    ///
    /// The cart and address inputs survive, except that dismissing the
    /// confirmation completes the reset early.
    pub fn dismiss(&mut self) -> CheckoutStep {
        let dismissed = self.flow.dismiss();
        self.epoch += 1;
        self.address.abandon_check();
        self.processing_payment = false;
        debug!(session_id = %self.id, step = dismissed.as_str(), "panel dismissed");

        if dismissed == CheckoutStep::Confirmed {
            self.reset();
        }
        dismissed
    }

    /// Clear cart, address and panels.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.cart.clear();
        self.address.reset();
        self.flow = CheckoutFlow::new();
        self.quantity.reset();
        self.processing_payment = false;
        self.payment_error = None;
        self.confirmation = None;
        info!(session_id = %self.id, "session reset");
    }

    /// Serializable view of the whole session.
    pub fn snapshot(&self) -> Result<SessionView, CommerceError> {
        SessionView::capture(self)
    }

    // ---- helpers --------------------------------------------------------

    fn context<'a>(&'a self, payment: Option<&'a PaymentDetails>) -> CheckoutContext<'a> {
        CheckoutContext {
            cart: &self.cart,
            address: &self.address,
            payment,
        }
    }

    /// Fail unless the session is on `expected`; `target` is the step the
    /// caller was trying to reach and only feeds the error.
    fn expect_step(&self, expected: CheckoutStep, target: CheckoutStep) -> Result<(), CommerceError> {
        let step = self.flow.step();
        if step == expected {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                from: step.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        }
    }

    fn expect_cart_editable(&self) -> Result<(), CommerceError> {
        match self.flow.step() {
            CheckoutStep::Browsing | CheckoutStep::CartOpen => Ok(()),
            step => Err(CommerceError::InvalidCheckoutTransition {
                from: step.as_str().to_string(),
                to: CheckoutStep::CartOpen.as_str().to_string(),
            }),
        }
    }
}
