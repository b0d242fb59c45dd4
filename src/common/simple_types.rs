use std::fmt;
use std::iter::Sum;

use anyhow::{ensure, Result};
use thiserror::Error;

/// 1-based display sequence number of an order line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemNumber {
    value: u32,
}

impl ItemNumber {
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self { value })
    }

    /// The number the next line gets when `line_count` lines already exist,
    /// or `None` once numbering would pass `u32::MAX`.
    pub(crate) fn after(line_count: usize) -> Option<Self> {
        u32::try_from(line_count)
            .ok()
            .and_then(|count| count.checked_add(1))
            .map(|value| Self { value })
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductName {
    value: String,
}

impl ProductName {
    /// Surrounding whitespace is not part of the name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = name.trim();
        ensure!(!value.is_empty(), "product name must not be empty");
        Ok(Self {
            value: value.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Why a raw keypad entry was not accepted as a quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QuantityRejection {
    #[error("no quantity entered")]
    Blank,
    #[error("not a number")]
    Unparseable,
    #[error("quantity must not be negative")]
    Negative,
    #[error("line total would overflow")]
    TooLarge,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity {
    value: f64,
}

impl Quantity {
    pub const ONE: Quantity = Quantity { value: 1. };

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn new(value: f64) -> Result<Self, QuantityRejection> {
        if !value.is_finite() {
            return Err(QuantityRejection::Unparseable);
        }
        if value < 0. {
            return Err(QuantityRejection::Negative);
        }
        // folds -0 into 0
        Ok(Self { value: value.abs() })
    }

    pub fn parse(raw: &str) -> Result<Self, QuantityRejection> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(QuantityRejection::Blank);
        }
        let value: f64 = raw.parse().map_err(|_| QuantityRejection::Unparseable)?;
        Self::new(value)
    }
}

impl std::ops::Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0. {
            write!(f, "{:.0}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Price {
    value: f64,
}

impl Price {
    pub const ZERO: Price = Price { value: 0. };

    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl std::ops::Mul<Quantity> for Price {
    type Output = Price;

    fn mul(self, rhs: Quantity) -> Self::Output {
        Self {
            value: self.value * rhs.value,
        }
    }
}

impl Sum<Self> for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |a, b| a + b)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Sum of every line total in an order.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GrandTotal {
    value: Price,
}

impl GrandTotal {
    pub fn value(&self) -> Price {
        self.value
    }
    pub fn sum_prices(prices: impl Iterator<Item = Price>) -> GrandTotal {
        let sum = prices.sum();
        Self { value: sum }
    }
}

impl fmt::Display for GrandTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
