use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Neg, Sub},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------     Money       -------------------------------------------------------------

/// A currency amount in minor units (pence, cents). Bank transaction amounts are negative for
/// debits, so the full signed range is supported.
#[derive(Debug, Clone, Copy, Default, Ord, PartialOrd, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money(i64);

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented as a minor-unit amount: {0}")]
pub struct MoneyConversionError(String);

impl Money {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn from_major_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// The magnitude of the amount, ignoring the debit/credit sign.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<u64> for Money {
    type Error = MoneyConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(MoneyConversionError(format!("{value} is too large")))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
