//! Product record.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog. Never mutated after the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            7,
            "Test Fizz",
            "A test drink",
            "https://example.com/fizz.jpg",
            Money::from_major(99, Currency::INR),
        );
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.price.major_units(), 99);
    }
}
