//! Product catalog module.
//!
//! A fixed, ordered product lineup and the carousel that browses it.

mod carousel;
mod lineup;
mod product;

pub use carousel::Carousel;
pub use lineup::{Catalog, PRODUCT_FEATURES};
pub use product::Product;
