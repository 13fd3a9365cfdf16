//! Fixed-table, fixed-delay stand-ins for the real services.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{
    LookupError, PaymentGateway, PaymentReceipt, PaymentRequest, PincodeDirectory,
};
use crate::checkout::{Locality, PaymentError, Pincode};
use crate::ids::OrderId;

/// Pincodes with delivery coverage: (pincode, city, state).
pub const SERVICEABLE_PINCODES: [(&str, &str, &str); 5] = [
    ("600001", "Chennai", "Tamil Nadu"),
    ("560001", "Bengaluru", "Karnataka"),
    ("400001", "Mumbai", "Maharashtra"),
    ("110001", "New Delhi", "Delhi"),
    ("700001", "Kolkata", "West Bengal"),
];

/// Looks pincodes up in [`SERVICEABLE_PINCODES`] after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockPincodeDirectory {
    delay: Duration,
}

impl MockPincodeDirectory {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No simulated latency.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockPincodeDirectory {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl PincodeDirectory for MockPincodeDirectory {
    async fn lookup(&self, code: &Pincode) -> Result<Locality, LookupError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let hit = SERVICEABLE_PINCODES
            .iter()
            .find(|(pin, _, _)| *pin == code.as_str());
        debug!(pincode = %code, found = hit.is_some(), "mock pincode lookup");

        match hit {
            Some((_, city, state)) => Ok(Locality::new(*city, *state)),
            None => Err(LookupError::NotServiceable(code.clone())),
        }
    }
}

/// Approves every complete payment after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
    delay: Duration,
}

impl MockPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        request.details.validate()?;
        if !request.amount.is_positive() {
            return Err(PaymentError::Declined("amount must be positive".to_string()));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = PaymentReceipt {
            order_id: OrderId::generate(),
            amount: request.amount,
            processed_at: chrono::Utc::now(),
        };
        debug!(order_id = %receipt.order_id, amount = %receipt.amount, "mock payment approved");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::PaymentDetails;
    use crate::money::{Currency, Money};

    #[tokio::test(start_paused = true)]
    async fn test_lookup_known_pincode() {
        let directory = MockPincodeDirectory::default();
        let code = Pincode::parse("560001").unwrap();

        let started = tokio::time::Instant::now();
        let locality = directory.lookup(&code).await.unwrap();

        assert_eq!(locality, Locality::new("Bengaluru", "Karnataka"));
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_lookup_unknown_pincode_is_deterministic() {
        let directory = MockPincodeDirectory::instant();
        let code = Pincode::parse("999999").unwrap();

        let first = directory.lookup(&code).await;
        let second = directory.lookup(&code).await;
        assert_eq!(first, Err(LookupError::NotServiceable(code.clone())));
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_approved_after_delay() {
        let gateway = MockPaymentGateway::default();
        let request = PaymentRequest {
            amount: Money::from_major(240, Currency::INR),
            details: PaymentDetails::new("4111 1111 1111 1111", "12/30", "123", "Asha Rao"),
        };

        let started = tokio::time::Instant::now();
        let receipt = gateway.process(&request).await.unwrap();

        assert_eq!(receipt.amount, request.amount);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_payment_rejects_blank_fields() {
        let gateway = MockPaymentGateway::instant();
        let request = PaymentRequest {
            amount: Money::from_major(80, Currency::INR),
            details: PaymentDetails::new("4111", "", "123", "Asha Rao"),
        };
        assert_eq!(
            gateway.process(&request).await,
            Err(PaymentError::MissingField("expiry"))
        );
    }
}
