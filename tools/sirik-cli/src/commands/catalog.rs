//! List the product lineup.

use anyhow::Result;
use sirik_commerce::catalog::{Catalog, PRODUCT_FEATURES};

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::sirik(ctx.config.commerce.currency);

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    ctx.output.header("SIRIK lineup");
    let widths = [4, 18, 10];
    ctx.output.table_row(&["ID", "Name", "Price"], &widths);
    for product in catalog.products() {
        let id = product.id.to_string();
        let price = product.price.display();
        let row = [id.as_str(), product.name.as_str(), price.as_str()];
        ctx.output.table_row(&row, &widths);
        if args.long {
            ctx.output.kv("about", &product.description);
        }
    }

    ctx.output.info("");
    ctx.output.info("Every drink is:");
    for feature in PRODUCT_FEATURES {
        ctx.output.list_item(feature);
    }

    Ok(())
}
