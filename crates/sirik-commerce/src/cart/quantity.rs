//! Quantity picker shown next to the "Add to Cart" button.

use serde::{Deserialize, Serialize};

use crate::cart::MAX_QUANTITY_PER_LINE;
use crate::error::CommerceError;

/// Pending quantity for the next add. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct QuantitySelector(u32);

impl QuantitySelector {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) -> u32 {
        self.0 = (self.0 + 1).min(MAX_QUANTITY_PER_LINE);
        self.0
    }

    pub fn decrement(&mut self) -> u32 {
        if self.0 > 1 {
            self.0 -= 1;
        }
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 1;
    }
}

impl TryFrom<u32> for QuantitySelector {
    type Error = CommerceError;

    fn try_from(quantity: u32) -> Result<Self, Self::Error> {
        match quantity {
            0 => Err(CommerceError::InvalidQuantity(0)),
            q if q > MAX_QUANTITY_PER_LINE => {
                Err(CommerceError::QuantityExceedsLimit(q, MAX_QUANTITY_PER_LINE))
            }
            q => Ok(Self(q)),
        }
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}
