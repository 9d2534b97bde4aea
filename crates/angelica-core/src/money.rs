//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The web storefront stores prices as JS numbers:                        │
//! │    89.9 * 3 = 269.70000000000005                                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    8990 * 3 = 26970  →  "269.70"                                        │
//! │                                                                         │
//! │  Decimals only exist at the JSON boundary (see [`decimal`]).            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use angelica_core::money::Money;
//!
//! let price = Money::from_cents(8990); // 89.90
//! let line_total = price * 3;
//! assert_eq!(line_total.to_string(), "269.70");
//!
//! // Values read from persisted slots
//! let parsed = Money::from_decimal(89.9).unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

/// Largest decimal magnitude accepted by [`Money::from_decimal`].
///
/// Beyond this, `f64` can no longer represent every cent.
const MAX_DECIMAL: f64 = 9.0e13;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (céntimos for PEN).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic never panics on a negative intermediate
/// - **Saturating**: sums and products clamp at the i64 bounds, so a
///   tampered slot with a huge quantity cannot overflow a total
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Currency-agnostic**: the symbol is a display concern of the caller
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLine.price ──► line total (price × qty)
///                                         │
///                                         ▼
///                        Cart::total() ──► OrderSummary ──► WhatsApp text
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use angelica_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as stored by the web storefront) to Money.
    ///
    /// Rounds half away from zero to the nearest cent. Returns `None` for
    /// NaN, infinities and magnitudes that cannot be held exactly.
    ///
    /// ```rust
    /// use angelica_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(129.9), Some(Money::from_cents(12990)));
    /// assert_eq!(Money::from_decimal(100.0), Some(Money::from_cents(10000)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_DECIMAL {
            return None;
        }
        Some(Money((value * 100.0).round() as i64))
    }

    /// Returns the value as a decimal number (for the JSON boundary only).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    ///
    /// ```rust
    /// use angelica_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, saturating at the i64 bounds.
    ///
    /// ```rust
    /// use angelica_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4990);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 14970);
    /// assert_eq!(unit_price.multiply_quantity(i64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount behind a currency symbol, e.g. `S/ 269.70`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", symbol, self)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering without a currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Decimal (De)serialization
// =============================================================================

/// Serde adapter that reads and writes Money as a plain decimal number.
///
/// The persisted slots store `price` the way the web storefront wrote it:
/// `100`, `129.9`. Whole amounts are written back as integers so existing
/// data keeps its exact shape.
///
/// ```rust
/// use angelica_core::money::{self, Money};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Priced {
///     #[serde(with = "money::decimal")]
///     price: Money,
/// }
///
/// let json = serde_json::to_string(&Priced { price: Money::from_cents(10000) }).unwrap();
/// assert_eq!(json, r#"{"price":100}"#);
/// ```
pub mod decimal {
    use super::Money;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if money.minor() == 0 {
            serializer.serialize_i64(money.major())
        } else {
            serializer.serialize_f64(money.to_decimal())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| D::Error::custom(format!("price out of range: {}", value)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Priced {
        #[serde(with = "decimal")]
        price: Money,
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        let total = Money::from_cents(26970);
        assert_eq!(total.format_with_symbol("S/"), "S/ 269.70");
        assert_eq!(total.format_with_symbol(""), "269.70");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        let price = Money::from_cents(12990);

        assert_eq!(price.multiply_quantity(i64::MAX), max);
        assert_eq!(price * (i64::MAX / 50), max);
        assert_eq!(max + price, max);

        let mut acc = max;
        acc += price;
        assert_eq!(acc, max);

        let total: Money = vec![max, price, price].into_iter().sum();
        assert_eq!(total, max);
        assert_eq!(total.to_string(), "92233720368547758.07");
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::from_decimal(89.9), Some(Money::from_cents(8990)));
        assert_eq!(Money::from_decimal(49.99), Some(Money::from_cents(4999)));
        assert_eq!(Money::from_decimal(0.005), Some(Money::from_cents(1)));
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(1.0e20), None);
    }

    /// Float prices would drift; integer totals must not.
    #[test]
    fn test_no_float_drift_in_totals() {
        let price = Money::from_decimal(89.9).unwrap();
        assert_eq!((price * 3).to_string(), "269.70");
    }

    #[test]
    fn test_decimal_serializes_whole_amounts_as_integers() {
        let whole = Priced { price: Money::from_cents(10000) };
        assert_eq!(serde_json::to_string(&whole).unwrap(), r#"{"price":100}"#);

        let fractional = Priced { price: Money::from_cents(12990) };
        assert_eq!(serde_json::to_string(&fractional).unwrap(), r#"{"price":129.9}"#);
    }

    #[test]
    fn test_decimal_reads_integers_and_floats() {
        let from_int: Priced = serde_json::from_str(r#"{"price":100}"#).unwrap();
        assert_eq!(from_int.price.cents(), 10000);

        let from_float: Priced = serde_json::from_str(r#"{"price":49.99}"#).unwrap();
        assert_eq!(from_float.price.cents(), 4999);

        assert!(serde_json::from_str::<Priced>(r#"{"price":"12"}"#).is_err());
    }
}
