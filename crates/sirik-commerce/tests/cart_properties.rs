//! Property tests for cart aggregation.

use std::collections::HashMap;

use proptest::prelude::*;
use sirik_commerce::prelude::*;

fn adds() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..=3, 1u32..=5), 0..15)
}

proptest! {
    #[test]
    fn test_one_line_per_product_and_quantities_sum(ops in adds()) {
        let catalog = Catalog::default();
        let mut cart = Cart::new(Currency::INR);
        let mut expected: HashMap<u32, u32> = HashMap::new();

        for (id, qty) in &ops {
            cart.add(catalog.get(ProductId::new(*id)).unwrap(), *qty).unwrap();
            *expected.entry(*id).or_default() += qty;
        }

        let mut seen = std::collections::HashSet::new();
        for line in cart.lines() {
            prop_assert!(seen.insert(line.product.id));
            prop_assert_eq!(Some(&line.quantity), expected.get(&line.product.id.get()));
        }
        prop_assert_eq!(cart.lines().len(), expected.len());
    }

    #[test]
    fn test_total_is_sum_of_price_times_quantity(ops in adds()) {
        let catalog = Catalog::default();
        let mut cart = Cart::new(Currency::INR);
        for (id, qty) in &ops {
            cart.add(catalog.get(ProductId::new(*id)).unwrap(), *qty).unwrap();
        }

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.product.price.amount_minor * i64::from(l.quantity))
            .sum();
        prop_assert_eq!(cart.total().unwrap().amount_minor, expected);
    }

    #[test]
    fn test_removing_absent_product_changes_nothing(ops in adds(), missing in 4u32..100) {
        let catalog = Catalog::default();
        let mut cart = Cart::new(Currency::INR);
        for (id, qty) in &ops {
            cart.add(catalog.get(ProductId::new(*id)).unwrap(), *qty).unwrap();
        }
        let before = cart.clone();

        prop_assert!(!cart.remove(ProductId::new(missing)));
        prop_assert_eq!(cart, before);
    }
}
