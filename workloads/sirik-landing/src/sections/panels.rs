//! Slide-over panels driven by the checkout step.

use sirik_commerce::cart::CartLine;
use sirik_commerce::checkout::{
    AddressField, CheckoutStep, Confirmation, PincodeStatus, ShippingAddress,
};
use sirik_commerce::session::SessionView;

use super::{disabled_attr, html_escape};

/// Render whichever panel the session has open, or nothing while browsing.
pub fn render_panel(view: &SessionView) -> String {
    let (title, body) = match view.step {
        CheckoutStep::Browsing => return String::new(),
        CheckoutStep::CartOpen => ("Your Cart", render_cart(view)),
        CheckoutStep::AddressForm => ("Delivery Address", render_address(view)),
        CheckoutStep::Payment | CheckoutStep::Confirmed => ("Payment Details", render_payment(view)),
    };

    format!(
        r#"<aside class="panel" data-panel="{}">
    <div class="panel-header">
        <h3>{}</h3>
        <button class="panel-close" aria-label="Close">&times;</button>
    </div>
    {}
</aside>"#,
        view.step.as_str(),
        title,
        body
    )
}

fn render_cart(view: &SessionView) -> String {
    if view.is_cart_empty() {
        return r#"<div class="cart-empty"><p>Your cart is empty</p></div>"#.to_string();
    }

    let lines: String = view.cart.iter().map(render_cart_line).collect();

    format!(
        r#"<div class="cart-lines">{}</div>
    <div class="cart-footer">
        <span>Subtotal</span>
        <span class="cart-total">{}</span>
        <button class="proceed"{}>Proceed to Checkout</button>
    </div>"#,
        lines,
        html_escape(&view.total.display()),
        disabled_attr(view.actions.can_proceed_to_checkout)
    )
}

fn render_cart_line(line: &CartLine) -> String {
    let line_total = line
        .line_total()
        .map(|m| m.display())
        .unwrap_or_default();

    format!(
        r#"<div class="cart-line" data-product-id="{}">
            <img src="{}" alt="{}">
            <h4>{}</h4>
            <p>{} &times; {}</p>
            <span>{}</span>
            <button class="remove" aria-label="Remove">&times;</button>
        </div>"#,
        line.product.id,
        html_escape(&line.product.image),
        html_escape(&line.product.name),
        html_escape(&line.product.name),
        html_escape(&line.product.price.display()),
        line.quantity,
        html_escape(&line_total)
    )
}

fn render_address(view: &SessionView) -> String {
    let form = &view.address;
    let input = |field: AddressField, kind: &str| {
        format!(
            r#"<label for="{0}">{1}</label>
            <input type="{2}" id="{0}" name="{0}" value="{3}">"#,
            field.as_str(),
            field.display_name(),
            kind,
            html_escape(form.get(field))
        )
    };

    let checking = view.pincode_status == PincodeStatus::Checking;
    let check_label = if checking { "Checking..." } else { "Check" };

    let message = view
        .pincode_message
        .as_ref()
        .map(|m| format!(r#"<p class="pincode-error">{}</p>"#, html_escape(m)))
        .unwrap_or_default();

    let locality = match (form.city().value(), form.state().value()) {
        (Some(city), Some(state)) => format!(
            r#"<label>City</label><input type="text" value="{}" readonly>
            <label>State</label><input type="text" value="{}" readonly>"#,
            html_escape(city),
            html_escape(state)
        ),
        _ => String::new(),
    };

    format!(
        r#"<form class="address-form" data-pincode-status="{}">
        {}
        {}
        {}
        <button type="button" class="check-pincode"{}>{}</button>
        {}
        {}
        {}
        {}
        <button type="submit" class="continue"{}>Continue to Payment</button>
    </form>"#,
        view.pincode_status.as_str(),
        input(AddressField::Name, "text"),
        input(AddressField::Phone, "tel"),
        input(AddressField::Pincode, "text"),
        disabled_attr(view.actions.can_check_pincode),
        check_label,
        message,
        locality,
        input(AddressField::Address, "text"),
        input(AddressField::Landmark, "text"),
        disabled_attr(view.actions.can_submit_address)
    )
}

fn render_payment(view: &SessionView) -> String {
    if let Some(confirmation) = &view.confirmation {
        return render_confirmation(confirmation);
    }

    let summary: String = view
        .cart
        .iter()
        .map(|line| {
            format!(
                "<li><span>{} &times; {}</span><span>{}</span></li>",
                html_escape(&line.product.name),
                line.quantity,
                html_escape(&line.line_total().map(|m| m.display()).unwrap_or_default())
            )
        })
        .collect();

    let address = view
        .address
        .to_shipping_address()
        .map(|a| render_address_block(&a))
        .unwrap_or_default();

    let error = view
        .payment_message
        .as_ref()
        .map(|m| format!(r#"<p class="payment-error">{}</p>"#, html_escape(m)))
        .unwrap_or_default();

    let pay_label = if view.processing_payment {
        "Processing...".to_string()
    } else {
        format!("Pay {}", view.total.display())
    };

    format!(
        r#"<div class="order-summary">
        <h4>Order Summary</h4>
        <ul>{}</ul>
        <p class="order-total">{}</p>
    </div>
    {}
    <form class="payment-form">
        <label for="card_number">Card Number</label>
        <input type="text" id="card_number" placeholder="1234 5678 9012 3456">
        <label for="expiry">Expiry Date</label>
        <input type="text" id="expiry" placeholder="MM/YY">
        <label for="cvv">CVV</label>
        <input type="text" id="cvv" placeholder="123">
        <label for="name_on_card">Name on Card</label>
        <input type="text" id="name_on_card">
        {}
        <button type="submit" class="pay"{}>{}</button>
    </form>"#,
        summary,
        html_escape(&view.total.display()),
        address,
        error,
        disabled_attr(view.actions.can_pay),
        html_escape(&pay_label)
    )
}

fn render_confirmation(confirmation: &Confirmation) -> String {
    format!(
        r#"<div class="confirmation" data-order-id="{}">
        <h4>Payment Successful!</h4>
        <p>Thank you for your purchase</p>
        {}
        <p class="order-total">Order total: {}</p>
    </div>"#,
        html_escape(confirmation.order_id.as_str()),
        render_address_block(&confirmation.address),
        html_escape(&confirmation.total.display())
    )
}

fn render_address_block(address: &ShippingAddress) -> String {
    let landmark = address
        .landmark
        .as_ref()
        .map(|l| format!("<p>Landmark: {}</p>", html_escape(l)))
        .unwrap_or_default();

    format!(
        r#"<div class="delivery-address">
        <h4>Delivery Address</h4>
        <p>{}</p>
        <p>{}</p>
        <p>{}</p>
        <p>Phone: {}</p>
        {}
    </div>"#,
        html_escape(&address.name),
        html_escape(&address.address),
        html_escape(&address.locality_line()),
        html_escape(&address.phone),
        landmark
    )
}
