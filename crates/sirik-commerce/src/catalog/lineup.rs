//! The ordered product lineup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Badges shown next to every product.
pub const PRODUCT_FEATURES: [&str; 4] = ["Low Sugar", "Low Calorie", "Added Prebiotics", "Vegan"];

/// An immutable, zero-indexed, non-empty list of products.
///
/// Cloning is cheap: the products are shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog. Fails on an empty list or a duplicated product id.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        if products.is_empty() {
            return Err(CommerceError::EmptyCatalog);
        }
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self {
            products: products.into(),
        })
    }

    /// The SIRIK lineup priced in the given currency.
    pub fn sirik(currency: Currency) -> Self {
        Self {
            products: vec![
                Product::new(
                    1,
                    "Classic Nannari",
                    "Our flagship drink featuring the earthy, aromatic Nannari root that's been cherished for centuries in South India. Lightly carbonated with a subtle sweetness and cooling properties.",
                    "https://res.cloudinary.com/dnbqgzh4t/image/upload/v1748967137/brr1234eqwo1ipgvgq9j.webp",
                    Money::from_major(80, currency),
                ),
                Product::new(
                    2,
                    "Ginger Zest",
                    "The perfect blend of traditional Nannari with a zesty kick of ginger. This invigorating combination offers both digestive benefits and a refreshing flavor profile.",
                    "https://res.cloudinary.com/dnbqgzh4t/image/upload/v1748967137/abrvpq0hujmvesap3zry.jpg",
                    Money::from_major(150, currency),
                ),
                Product::new(
                    3,
                    "Mint Refresh",
                    "A cooling combination of Nannari and fresh mint that delivers the ultimate refreshment. Perfect for hot days when you need something crisp and revitalizing.",
                    "https://res.cloudinary.com/dnbqgzh4t/image/upload/v1748967136/scjqo8svxo0epy8smlma.jpg",
                    Money::from_major(200, currency),
                ),
            ]
            .into(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product at a zero-based position.
    pub fn at(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Index following `index`, wrapping to the start.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index preceding `index`, wrapping to the end.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sirik(Currency::INR)
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = CommerceError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products.to_vec()
    }
}
