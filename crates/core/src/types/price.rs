//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are whole rupees, but line totals and cart totals are always
//! shown with exactly two decimal places, so amounts are carried as
//! [`Decimal`] and only rescaled when formatted.
//!
//! Arithmetic saturates at the [`Decimal`] bounds. Stored carts are not
//! trusted, and an absurd persisted price must not make rendering panic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// Currency symbol prefixed to every displayed price (Indian rupee, U+20B9).
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// Number of decimal places used when displaying an amount.
const DISPLAY_SCALE: u32 = 2;

/// A price in rupees.
///
/// ```
/// use gadget_bazaar_core::Price;
///
/// let price = Price::from_units(400);
/// assert_eq!(price.to_string(), "₹400.00");
/// assert_eq!(price.times(3).amount_string(), "1200.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// The raw decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// The amount fixed to two decimal places, without a currency symbol.
    #[must_use]
    pub fn amount_string(&self) -> String {
        let mut amount = self.0;
        amount.rescale(DISPLAY_SCALE);
        amount.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.amount_string())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Prices are written as JSON numbers: whole amounts as integers, others as
/// floats.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let whole = self.0.fract().is_zero().then(|| self.0.to_i64()).flatten();
        if let Some(units) = whole {
            return serializer.serialize_i64(units);
        }
        match self.0.to_f64() {
            Some(amount) => serializer.serialize_f64(amount),
            None => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
