//! Money primitives: a single fixed currency and integer minor units.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// The system's only currency (East Caribbean dollar).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "XCD")]
    Xcd,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Xcd => "XCD",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Non-negative amount in minor currency units (cents).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(u64);

impl ValueObject for Cents {}

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Cents) -> DomainResult<Cents> {
        self.0
            .checked_add(other.0)
            .map(Cents)
            .ok_or_else(|| DomainError::invalid_amount("amount overflows the running total"))
    }

    pub const fn saturating_add(self, other: Cents) -> Cents {
        Cents(self.0.saturating_add(other.0))
    }

    /// Major units (`cents / 100`) for display only; never feed this back into arithmetic.
    pub fn as_major_units(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl From<u64> for Cents {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Cents> for u64 {
    fn from(value: Cents) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Cents {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Cents)
            .map_err(|_| DomainError::invalid_amount(format!("{value} is negative")))
    }
}

impl TryFrom<f64> for Cents {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DomainError::invalid_amount(format!(
                "{value} is not a whole number of cents"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_amount(format!("{value} is negative")));
        }
        if value > MAX_EXACT_F64 {
            return Err(DomainError::invalid_amount(format!("{value} is out of range")));
        }
        Ok(Cents(value as u64))
    }
}

impl TryFrom<&serde_json::Number> for Cents {
    type Error = DomainError;

    fn try_from(value: &serde_json::Number) -> Result<Self, Self::Error> {
        if let Some(v) = value.as_u64() {
            return Ok(Cents(v));
        }
        if let Some(v) = value.as_i64() {
            return Cents::try_from(v);
        }
        match value.as_f64() {
            Some(v) => Cents::try_from(v),
            None => Err(DomainError::invalid_amount(format!("{value} is not a number"))),
        }
    }
}

impl TryFrom<&serde_json::Value> for Cents {
    type Error = DomainError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Number(n) => Cents::try_from(n),
            serde_json::Value::Null => Err(DomainError::invalid_amount("amount is required")),
            other => Err(DomainError::invalid_amount(format!(
                "expected an integer number of cents, got {other}"
            ))),
        }
    }
}

impl core::fmt::Display for Cents {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Saturates at `u64::MAX`; read-side aggregates never fail.
impl core::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Self {
        iter.fold(Cents::ZERO, Cents::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> DomainResult<Cents> {
        Cents::try_from(&v)
    }

    #[test]
    fn integral_json_amounts_are_accepted() {
        assert_eq!(parse(json!(300)).unwrap(), Cents::new(300));
        assert_eq!(parse(json!(0)).unwrap(), Cents::ZERO);
        assert_eq!(parse(json!(300.0)).unwrap(), Cents::new(300));
    }

    #[test]
    fn negative_fractional_and_non_numeric_amounts_are_rejected() {
        for bad in [json!(-50), json!(12.5), json!("300"), json!(null), json!(-0.5)] {
            match parse(bad.clone()) {
                Err(DomainError::InvalidAmount(_)) => {}
                other => panic!("expected InvalidAmount for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn checked_add_reports_overflow_as_invalid_amount() {
        let err = Cents::new(u64::MAX).checked_add(Cents::new(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount(_)));
    }

    #[test]
    fn major_units_are_cents_over_one_hundred() {
        assert_eq!(Cents::new(1200).as_major_units(), 12.0);
        assert_eq!(Cents::new(5).as_major_units(), 0.05);
    }

    #[test]
    fn currency_serializes_as_iso_code() {
        assert_eq!(serde_json::to_string(&Currency::Xcd).unwrap(), "\"XCD\"");
    }
}
