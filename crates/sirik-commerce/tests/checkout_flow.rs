//! End-to-end storefront scenarios on a paused clock.

use std::time::Duration;

use sirik_commerce::prelude::*;

fn session() -> CheckoutSession {
    CheckoutSession::from_config(&CommerceConfig::default())
}

fn fill_address(session: &mut CheckoutSession, pincode: &str) {
    session.set_address_field(AddressField::Name, "Asha Rao").unwrap();
    session.set_address_field(AddressField::Phone, "9876543210").unwrap();
    session.set_address_field(AddressField::Address, "12 Temple Street").unwrap();
    session.set_address_field(AddressField::Pincode, pincode).unwrap();
}

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let mut session = session();
    session.add_to_cart(ProductId::new(1), 2).unwrap();
    session.add_to_cart(ProductId::new(1), 1).unwrap();

    let lines = session.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(session.total().unwrap(), Money::from_major(240, Currency::INR));
}

#[test]
fn test_empty_cart_never_offers_checkout() {
    let mut session = session();
    session.open_cart().unwrap();
    let view = session.snapshot().unwrap();
    assert!(view.is_cart_empty());
    assert!(!view.actions.can_proceed_to_checkout);
    assert!(session.proceed_to_checkout().is_err());

    session.add_to_cart(ProductId::new(2), 1).unwrap();
    session.remove_from_cart(ProductId::new(2)).unwrap();
    assert!(!session.snapshot().unwrap().actions.can_proceed_to_checkout);
}

#[tokio::test(start_paused = true)]
async fn test_bengaluru_pincode_resolves_after_lookup_delay() {
    let mut session = session();
    session.add_to_cart(ProductId::new(1), 1).unwrap();
    session.proceed_to_checkout().unwrap();
    fill_address(&mut session, "560001");

    let started = tokio::time::Instant::now();
    let locality = session.check_pincode().await.unwrap();

    assert_eq!(locality, Locality::new("Bengaluru", "Karnataka"));
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(session.address().status(), PincodeStatus::Resolved);
}

#[tokio::test(start_paused = true)]
async fn test_short_pincode_rejected_without_waiting() {
    let mut session = session();
    session.add_to_cart(ProductId::new(1), 1).unwrap();
    session.proceed_to_checkout().unwrap();
    fill_address(&mut session, "12");

    let started = tokio::time::Instant::now();
    let err = session.check_pincode().await.unwrap_err();

    assert_eq!(err, CommerceError::Pincode(PincodeError::InvalidFormat));
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_unserviceable_pincode_rejected_the_same_way_twice() {
    let mut session = session();
    session.add_to_cart(ProductId::new(1), 1).unwrap();
    session.proceed_to_checkout().unwrap();
    fill_address(&mut session, "999999");

    let first = session.check_pincode().await;
    let second = session.check_pincode().await;

    assert_eq!(first, Err(CommerceError::Pincode(PincodeError::NotServiceable)));
    assert_eq!(first, second);
    assert!(first.unwrap_err().to_string().contains("not available"));
    assert_eq!(session.address().status(), PincodeStatus::Rejected);
    assert!(!session.address().city().is_resolved());
}

#[tokio::test(start_paused = true)]
async fn test_chennai_checkout_confirms_then_resets() {
    let mut session = session();
    session.add_to_cart(ProductId::new(1), 2).unwrap();
    session.add_to_cart(ProductId::new(2), 1).unwrap();
    session.proceed_to_checkout().unwrap();
    fill_address(&mut session, "600001");

    let address = session.submit_address().await.unwrap();
    assert_eq!(address.city, "Chennai");
    assert_eq!(address.state, "Tamil Nadu");
    assert_eq!(session.step(), CheckoutStep::Payment);

    let started = tokio::time::Instant::now();
    let details = PaymentDetails::new("1234 5678 9012 3456", "12/30", "123", "Asha Rao");
    let confirmation = session.pay(details).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));

    assert_eq!(session.step(), CheckoutStep::Confirmed);
    assert_eq!(confirmation.address, address);
    assert_eq!(confirmation.total, Money::from_major(310, Currency::INR));
    assert_eq!(confirmation.lines.len(), 2);
    assert_eq!(session.snapshot().unwrap().confirmation, Some(confirmation));

    let shown = tokio::time::Instant::now();
    assert_eq!(session.run_confirmation().await.unwrap(), Outcome::Applied(()));
    assert!(shown.elapsed() >= Duration::from_millis(3000));

    assert_eq!(session.step(), CheckoutStep::Browsing);
    assert!(session.cart().is_empty());
    assert!(session.confirmation().is_none());
    assert_eq!(session.address(), &AddressForm::new());
}

#[tokio::test(start_paused = true)]
async fn test_cancelling_address_panel_keeps_cart() {
    let mut session = session();
    session.add_to_cart(ProductId::new(3), 4).unwrap();
    session.proceed_to_checkout().unwrap();
    fill_address(&mut session, "400001");

    assert_eq!(session.dismiss(), CheckoutStep::AddressForm);
    assert_eq!(session.step(), CheckoutStep::Browsing);
    assert_eq!(session.total().unwrap(), Money::from_major(800, Currency::INR));

    // Inputs survive, so reopening resumes where the user left off.
    session.open_cart().unwrap();
    session.proceed_to_checkout().unwrap();
    assert_eq!(session.address().get(AddressField::Pincode), "400001");
    session.submit_address().await.unwrap();
    assert_eq!(session.step(), CheckoutStep::Payment);
}
