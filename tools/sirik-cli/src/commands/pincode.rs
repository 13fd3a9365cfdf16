//! Check delivery coverage for a pincode.

use anyhow::{Context as _, Result};
use serde_json::json;
use sirik_commerce::checkout::{AddressField, AddressForm};
use sirik_commerce::gateway::{MockPincodeDirectory, PincodeDirectory};

use super::PincodeArgs;
use crate::context::Context;

/// Run the pincode command.
pub async fn run(args: PincodeArgs, ctx: &Context) -> Result<()> {
    let directory = MockPincodeDirectory::new(ctx.config.commerce.timings.pincode_lookup());

    let mut form = AddressForm::new();
    form.set(AddressField::Pincode, args.code.trim());
    let code = form.begin_check()?;

    let spinner = ctx.output.spinner(&format!("Checking {}...", code));
    let result = directory.lookup(&code).await;
    spinner.finish_and_clear();

    let locality = form
        .complete_check(&code, result)
        .context("lookup result was discarded")??;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "pincode": code,
            "city": locality.city,
            "state": locality.state,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Delivery available to {}", code));
    ctx.output.kv("City", &locality.city);
    ctx.output.kv("State", &locality.state);

    Ok(())
}
