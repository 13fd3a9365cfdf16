//! Shopping cart module.
//!
//! Contains the cart, its aggregated lines and the pending quantity picker.

mod cart;
mod quantity;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use quantity::QuantitySelector;
