//! Storefront configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::money::Currency;

/// Top-level storefront settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommerceConfig {
    /// Currency the catalog is priced in.
    #[serde(default)]
    pub currency: Currency,

    /// Simulated delays of the mock services.
    #[serde(default)]
    pub timings: CheckoutTimings,
}

/// Fixed delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTimings {
    /// Latency of the pincode lookup.
    #[serde(default = "default_pincode_lookup_ms")]
    pub pincode_lookup_ms: u64,

    /// Latency of the payment round-trip.
    #[serde(default = "default_payment_processing_ms")]
    pub payment_processing_ms: u64,

    /// How long the confirmation stays up before the session resets.
    #[serde(default = "default_confirmation_display_ms")]
    pub confirmation_display_ms: u64,
}

fn default_pincode_lookup_ms() -> u64 {
    1000
}

fn default_payment_processing_ms() -> u64 {
    1500
}

fn default_confirmation_display_ms() -> u64 {
    3000
}

impl CheckoutTimings {
    /// All delays zero.
    pub fn instant() -> Self {
        Self {
            pincode_lookup_ms: 0,
            payment_processing_ms: 0,
            confirmation_display_ms: 0,
        }
    }

    pub fn pincode_lookup(&self) -> Duration {
        Duration::from_millis(self.pincode_lookup_ms)
    }

    pub fn payment_processing(&self) -> Duration {
        Duration::from_millis(self.payment_processing_ms)
    }

    pub fn confirmation_display(&self) -> Duration {
        Duration::from_millis(self.confirmation_display_ms)
    }
}

impl Default for CheckoutTimings {
    fn default() -> Self {
        Self {
            pincode_lookup_ms: default_pincode_lookup_ms(),
            payment_processing_ms: default_payment_processing_ms(),
            confirmation_display_ms: default_confirmation_display_ms(),
        }
    }
}
