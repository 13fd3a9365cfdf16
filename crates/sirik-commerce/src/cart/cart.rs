//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed on one cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 99;

/// A shopping cart.
///
/// Lines keep the order in which products were first added, and there is
/// at most one line per product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "CartData")]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of a product.
    ///
    /// Merges into the existing line for the same product, otherwise appends
    /// a new line. Returns the line's resulting quantity.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - The line would exceed MAX_QUANTITY_PER_LINE
    /// - The product is priced in another currency
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        Ok(quantity)
    }

    /// Remove the line for `product_id`. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() < len_before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ(price × quantity) over all lines; zero for an empty cart.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(totals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Unchecked wire form of a [`Cart`].
#[derive(Deserialize)]
struct CartData {
    lines: Vec<CartLine>,
    #[serde(default)]
    currency: Currency,
}

impl TryFrom<CartData> for Cart {
    type Error = CommerceError;

    /// Replays every line through [`Cart::add`]; a product listed twice is
    /// rejected rather than merged.
    fn try_from(data: CartData) -> Result<Self, Self::Error> {
        let mut cart = Cart::new(data.currency);
        for line in data.lines {
            if cart.get(line.product.id).is_some() {
                return Err(CommerceError::DuplicateProduct(line.product.id));
            }
            cart.add(&line.product, line.quantity)?;
        }
        Ok(cart)
    }
}

/// One aggregated entry per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: u32) -> Product {
        Catalog::default().get(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.is_empty());
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::INR));
    }

    #[test]
    fn test_add_same_product_merges_line() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(1), 2).unwrap();
        assert_eq!(cart.add(&product(1), 1).unwrap(), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 3);
        assert_eq!(cart.total().unwrap(), Money::from_major(240, Currency::INR));
    }

    #[test]
    fn test_lines_keep_first_insertion_order() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(3), 1).unwrap();
        cart.add(&product(1), 1).unwrap();
        cart.add(&product(3), 4).unwrap();

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_total_mixed_lines() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(1), 2).unwrap();
        cart.add(&product(2), 1).unwrap();
        cart.add(&product(3), 3).unwrap();
        // 2*80 + 150 + 3*200
        assert_eq!(cart.total().unwrap().major_units(), 910);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(2), 1).unwrap();
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart, before);

        assert!(cart.remove(ProductId::new(2)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = Cart::new(Currency::INR);
        assert_eq!(
            cart.add(&product(1), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(1), MAX_QUANTITY_PER_LINE).unwrap();
        assert!(matches!(
            cart.add(&product(1), 1),
            Err(CommerceError::QuantityExceedsLimit(100, MAX_QUANTITY_PER_LINE))
        ));
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_LINE);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new(Currency::USD);
        assert!(matches!(
            cart.add(&product(1), 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_total_overflow_reported() {
        let price = Money::new(i64::MAX / 2 + 1, Currency::INR);
        let mut cart = Cart::new(Currency::INR);
        cart.add(&Product::new(1u32, "A", "", "", price), 1).unwrap();
        cart.add(&Product::new(2u32, "B", "", "", price), 1).unwrap();
        assert_eq!(cart.total(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_deserialize_checks_lines() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(1), 2).unwrap();
        cart.add(&product(3), 1).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(serde_json::from_value::<Cart>(json.clone()).unwrap(), cart);

        let mut doubled = json.clone();
        let first = doubled["lines"][0].clone();
        doubled["lines"].as_array_mut().unwrap().push(first);
        assert!(serde_json::from_value::<Cart>(doubled).is_err());

        let mut zero = json.clone();
        zero["lines"][0]["quantity"] = 0.into();
        assert!(serde_json::from_value::<Cart>(zero).is_err());

        let mut foreign = json;
        foreign["currency"] = "USD".into();
        assert!(serde_json::from_value::<Cart>(foreign).is_err());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(Currency::INR);
        cart.add(&product(1), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
