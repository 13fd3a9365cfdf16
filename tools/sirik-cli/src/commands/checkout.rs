//! Run a checkout from the terminal.
//!
//! Every value can come from a flag. Anything missing is prompted for,
//! unless `--no-input` is given, in which case the session reports what
//! is missing.

use anyhow::{bail, Result};
use dialoguer::{Input, Password, Select};
use sirik_commerce::prelude::*;

use super::{add_items, CheckoutArgs};
use crate::context::Context;

const STEPS: usize = 4;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut session = CheckoutSession::from_config(&ctx.config.commerce);
    let interactive = !args.no_input;

    ctx.output.header("Checkout");

    // Cart
    ctx.output.step(1, STEPS, "Cart");
    add_items(&mut session, &args.items)?;
    if session.cart().is_empty() && interactive {
        pick_items(&mut session)?;
    }
    if session.cart().is_empty() {
        bail!("Your cart is empty. Add items with --add <id>[:qty]");
    }
    show_cart(&session, ctx)?;
    session.proceed_to_checkout()?;

    // Address
    ctx.output.step(2, STEPS, "Delivery address");
    fill_address(&mut session, &args, interactive)?;
    let address = submit_address(&mut session, ctx, interactive).await?;
    ctx.output.kv("Deliver to", &address.locality_line());

    // Payment
    ctx.output.step(3, STEPS, "Payment");
    let details = payment_details(&args, &address, interactive)?;
    let total = session.total()?;
    let spinner = ctx.output.spinner(&format!("Paying {}...", total));
    let result = session.pay(details).await;
    spinner.finish_and_clear();
    let confirmation = result?;

    // Confirmation
    ctx.output.step(4, STEPS, "Confirmation");
    show_confirmation(&confirmation, ctx);

    if args.no_wait {
        session.dismiss();
    } else {
        let spinner = ctx.output.spinner("Closing order...");
        session.run_confirmation().await?;
        spinner.finish_and_clear();
    }

    Ok(())
}

/// Interactive product picker.
fn pick_items(session: &mut CheckoutSession) -> Result<()> {
    let products: Vec<(ProductId, String)> = session
        .catalog()
        .products()
        .iter()
        .map(|p| (p.id, format!("{} - {}", p.name, p.price)))
        .collect();

    let mut labels: Vec<&str> = products.iter().map(|(_, label)| label.as_str()).collect();
    labels.push("Done");

    loop {
        let choice = Select::new()
            .with_prompt("Add a drink")
            .items(&labels)
            .default(0)
            .interact()?;
        let Some((id, _)) = products.get(choice) else {
            return Ok(());
        };

        let quantity: u32 = Input::new()
            .with_prompt("Quantity")
            .default(1)
            .validate_with(|q: &u32| {
                if (1..=MAX_QUANTITY_PER_LINE).contains(q) {
                    Ok(())
                } else {
                    Err(format!("Enter 1 to {}", MAX_QUANTITY_PER_LINE))
                }
            })
            .interact_text()?;

        session.add_to_cart(*id, quantity)?;
    }
}

fn show_cart(session: &CheckoutSession, ctx: &Context) -> Result<()> {
    let widths = [18, 12, 12];
    for line in session.cart().lines() {
        let each = format!("{} x {}", line.product.price, line.quantity);
        let subtotal = line.line_total()?.display();
        let row = [line.product.name.as_str(), each.as_str(), subtotal.as_str()];
        ctx.output.table_row(&row, &widths);
    }
    ctx.output.kv("Subtotal", &session.total()?.display());
    Ok(())
}

fn fill_address(session: &mut CheckoutSession, args: &CheckoutArgs, interactive: bool) -> Result<()> {
    for field in AddressField::ALL {
        let given = match field {
            AddressField::Name => &args.name,
            AddressField::Phone => &args.phone,
            AddressField::Pincode => &args.pincode,
            AddressField::Address => &args.address,
            AddressField::Landmark => &args.landmark,
        };

        let value = match given {
            Some(value) => value.clone(),
            None if interactive => prompt(field.display_name(), !field.is_required())?,
            None => continue,
        };
        session.set_address_field(field, value)?;
    }
    Ok(())
}

/// Submit the form, re-asking for the pincode while it is rejected.
async fn submit_address(
    session: &mut CheckoutSession,
    ctx: &Context,
    interactive: bool,
) -> Result<ShippingAddress> {
    loop {
        let spinner = ctx.output.spinner("Checking pincode...");
        let result = session.submit_address().await;
        spinner.finish_and_clear();

        match result {
            Ok(address) => return Ok(address),
            Err(CommerceError::Pincode(e)) if interactive => {
                ctx.output.warn(&e.to_string());
                let code = prompt(AddressField::Pincode.display_name(), false)?;
                session.set_address_field(AddressField::Pincode, code)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn payment_details(
    args: &CheckoutArgs,
    address: &ShippingAddress,
    interactive: bool,
) -> Result<PaymentDetails> {
    let field = |given: &Option<String>, label: &str| -> Result<String> {
        match given {
            Some(value) => Ok(value.clone()),
            None if interactive => prompt(label, false),
            None => Ok(String::new()),
        }
    };

    let card_number = field(&args.card_number, "Card Number")?;
    let expiry = field(&args.expiry, "Expiry Date (MM/YY)")?;
    let cvv = match &args.cvv {
        Some(cvv) => cvv.clone(),
        None if interactive => Password::new().with_prompt("CVV").interact()?,
        None => String::new(),
    };
    let name_on_card = args
        .name_on_card
        .clone()
        .unwrap_or_else(|| address.name.clone());

    Ok(PaymentDetails::new(card_number, expiry, cvv, name_on_card))
}

fn show_confirmation(confirmation: &Confirmation, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(confirmation);
        return;
    }

    ctx.output.success("Payment Successful! Thank you for your purchase");
    ctx.output.kv("Order", confirmation.order_id.as_str());
    for line in &confirmation.lines {
        ctx.output.list_item(&format!("{} x {}", line.product.name, line.quantity));
    }
    for line in confirmation.address.multi_line().lines() {
        ctx.output.kv("Address", line);
    }
    ctx.output.kv("Order total", &confirmation.total.display());
}

fn prompt(label: &str, optional: bool) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(optional)
        .interact_text()?;
    Ok(value)
}
