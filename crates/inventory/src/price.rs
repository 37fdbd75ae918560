use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Purchase price of an item. Always finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_item("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_item(format!(
                "price cannot be negative (got {amount:.2})"
            )));
        }
        // Adding +0.0 folds a negative zero into positive zero.
        Ok(Self(amount + 0.0))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", round_cents(self.0))
    }
}

/// Round to two decimals, halves away from zero (`{:.2}` alone rounds ties to even).
pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_valid_price() {
        assert_eq!(Price::new(0.0).unwrap().amount(), 0.0);
    }

    #[test]
    fn negative_and_non_finite_prices_are_rejected() {
        for bad in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match Price::new(bad) {
                Err(DomainError::InvalidItem(_)) => {}
                other => panic!("expected InvalidItem for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let price = Price::new(-0.0).unwrap();
        assert!(price.amount().is_sign_positive());
        assert_eq!(price.to_string(), "0.00");
    }

    #[test]
    fn cents_round_half_up() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(format!("{:.2}", round_cents(0.005)), "0.01");
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::new(1234.5).unwrap().to_string(), "1234.50");
    }
}
