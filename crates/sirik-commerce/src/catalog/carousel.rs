//! Cyclic browsing over the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};

/// Position of the product currently on display.
///
/// The index is always in range because a catalog is never empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current<'a>(&self, catalog: &'a Catalog) -> &'a Product {
        &catalog.products()[self.index % catalog.len()]
    }

    pub fn next(&mut self, catalog: &Catalog) -> usize {
        self.index = catalog.next_index(self.index);
        self.index
    }

    pub fn previous(&mut self, catalog: &Catalog) -> usize {
        self.index = catalog.previous_index(self.index);
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_returns_to_start() {
        let catalog = Catalog::default();
        let mut carousel = Carousel::new();
        for _ in 0..catalog.len() {
            carousel.next(&catalog);
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let catalog = Catalog::default();
        let mut carousel = Carousel::new();
        assert_eq!(carousel.previous(&catalog), 2);
        assert_eq!(carousel.current(&catalog).name, "Mint Refresh");
        assert_eq!(carousel.next(&catalog), 0);
    }
}
