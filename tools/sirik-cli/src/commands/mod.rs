//! CLI command implementations.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod pincode;
pub mod render;

use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use sirik_commerce::prelude::{CheckoutSession, PaymentGateway, PincodeDirectory, ProductId};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show the full product descriptions.
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for the pincode command.
#[derive(Args)]
pub struct PincodeArgs {
    /// Six-digit pincode to check.
    pub code: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to add, as `<id>` or `<id>:<quantity>`. Repeatable.
    #[arg(short, long = "add", value_name = "ID[:QTY]")]
    pub items: Vec<ItemSpec>,

    /// Full name.
    #[arg(long)]
    pub name: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Delivery pincode.
    #[arg(long)]
    pub pincode: Option<String>,

    /// Street address.
    #[arg(long)]
    pub address: Option<String>,

    /// Landmark (optional).
    #[arg(long)]
    pub landmark: Option<String>,

    /// Card number.
    #[arg(long)]
    pub card_number: Option<String>,

    /// Card expiry (MM/YY).
    #[arg(long)]
    pub expiry: Option<String>,

    /// Card CVV.
    #[arg(long)]
    pub cvv: Option<String>,

    /// Name on card (defaults to the delivery name).
    #[arg(long)]
    pub name_on_card: Option<String>,

    /// Never prompt; fail on anything missing.
    #[arg(long)]
    pub no_input: bool,

    /// Close the confirmation immediately instead of waiting for it.
    #[arg(long)]
    pub no_wait: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output file ("-" for stdout). Defaults to the configured path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// JSON or TOML file with page copy overrides.
    #[arg(long)]
    pub content: Option<String>,

    /// Item to put in the cart before rendering. Repeatable.
    #[arg(short, long = "add", value_name = "ID[:QTY]")]
    pub items: Vec<ItemSpec>,

    /// Render with the cart panel open.
    #[arg(long)]
    pub open_cart: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File format: toml (commented) or json.
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Validate the config file.
    Validate,
}

/// `<id>[:<quantity>]` from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub product: ProductId,
    pub quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, qty)) => (id, qty),
            None => (s, "1"),
        };
        let id: u32 = id
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid product id '{}'", id))?;
        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid quantity '{}'", quantity))?;
        Ok(Self {
            product: ProductId::new(id),
            quantity,
        })
    }
}

/// Put every item in the session's cart.
pub fn add_items<D, G>(session: &mut CheckoutSession<D, G>, items: &[ItemSpec]) -> Result<()>
where
    D: PincodeDirectory,
    G: PaymentGateway,
{
    for item in items {
        session.add_to_cart(item.product, item.quantity)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sirik_commerce::prelude::*;

    use super::*;

    #[test]
    fn test_item_spec_parsing() {
        assert_eq!(
            "2:3".parse::<ItemSpec>().unwrap(),
            ItemSpec {
                product: ProductId::new(2),
                quantity: 3
            }
        );
        assert_eq!("1".parse::<ItemSpec>().unwrap().quantity, 1);
        assert!("x:1".parse::<ItemSpec>().is_err());
        assert!("1:many".parse::<ItemSpec>().is_err());
    }

    #[test]
    fn test_add_items_merges() {
        let mut session = CheckoutSession::from_config(&CommerceConfig::default());
        let items: Vec<ItemSpec> = ["1:2", "1"].iter().map(|s| s.parse().unwrap()).collect();
        add_items(&mut session, &items).unwrap();
        assert_eq!(session.cart().item_count(), 3);
        assert_eq!(session.cart().lines().len(), 1);
    }

    #[test]
    fn test_add_items_rejects_zero() {
        let mut session = CheckoutSession::from_config(&CommerceConfig::default());
        let items = ["3:0".parse::<ItemSpec>().unwrap()];
        assert!(add_items(&mut session, &items).is_err());
    }
}
