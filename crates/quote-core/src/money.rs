//! # Money Module
//!
//! Provides the `Money` type for handling prices and line amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A breakdown adds five line amounts. Summing floats and rounding the    │
//! │  result can disagree with summing the rounded line amounts.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    0.50 × 4 = 50 cents × 4 = 200 cents, exactly                        │
//! │    Every total is the exact sum of its lines; the only formatting      │
//! │    step is at the presentation boundary                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quote_core::money::Money;
//!
//! // Create from cents (preferred)
//! let unit = Money::from_cents(50); // $0.50
//!
//! // Or from configuration text
//! let fee = Money::parse_decimal("10.00").unwrap();
//!
//! let line = unit.multiply_quantity(4); // $2.00
//! assert_eq!((line + fee).to_string(), "$12.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 cents**: exact arithmetic, no rounding between line items
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Non-negative in practice**: prices are validated on the way in
///   (see [`crate::validation::validate_price_cents`]) and quantities are
///   unsigned, so derived amounts never go below zero
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PriceTable.unit_product ──► × product_count ──► LineItem.amount       │
/// │  PriceTable.packages[tier] ─────────────────────► LineItem.amount       │
/// │                                                          │              │
/// │                                                          ▼              │
/// │                                   Σ five amounts ──► PriceBreakdown.total│
/// │                                                          │              │
/// │                                                          ▼              │
/// │                                          Displayed as "$23.00" in UI   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(10).cents(), 1000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Parses a non-negative decimal amount such as `"0.5"`, `"10"` or
    /// `"19.99"`.
    ///
    /// At most two fractional digits are accepted; anything finer cannot be
    /// represented in cents and is rejected rather than rounded. This is how
    /// price tables are read from configuration files.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("0.5").unwrap().cents(), 50);
    /// assert_eq!(Money::parse_decimal(" 20 ").unwrap().cents(), 2000);
    /// assert!(Money::parse_decimal("-1").is_err());
    /// assert!(Money::parse_decimal("1.005").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Money, ValidationError> {
        let text = text.trim();
        let unsigned = text.strip_prefix('+').unwrap_or(text);

        if unsigned.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        if unsigned.starts_with('-') {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must contain at least one digit"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("must be a plain decimal number"));
        }
        if frac.len() > 2 {
            return Err(invalid("must have at most two decimal places"));
        }

        let overflow = || ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        };

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        // "5" means 50 cents, "05" means 5 cents
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => i64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => frac.parse().map_err(|_| invalid("must be a plain decimal number"))?,
        };

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(overflow)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Multiplies a unit price by a count.
    ///
    /// Saturates at `i64::MAX` cents instead of overflowing; counts are
    /// already clamped to `u32`, so this only matters for absurd unit prices.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(50); // $0.50
    /// let line_total = unit_price.multiply_quantity(4);
    /// assert_eq!(line_total.cents(), 200); // $2.00
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Products field: "4"
    ///      │
    ///      ▼
    /// normalize_count("4") = 4
    ///      │
    ///      ▼
    /// unit_product.multiply_quantity(4) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Products line: $2.00
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        let cents = self.0 as i128 * qty as i128;
        Money(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`: always two decimal places.
///
/// ## Note
/// The symbol here is the fixed `$` of the calculator. The adapter's
/// `ConfigState::format_currency` swaps in a configured symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(50)), "$0.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse_decimal("+3.10").unwrap().cents(), 310);
    }

    #[test]
    fn test_parse_decimal_rejects_bad_input() {
        assert!(matches!(
            Money::parse_decimal(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Money::parse_decimal("-0.50"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Money::parse_decimal("1.234"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(Money::parse_decimal("ten").is_err());
        assert!(Money::parse_decimal(".").is_err());
        assert!(Money::parse_decimal("1e3").is_err());
        assert!(Money::parse_decimal("99999999999999999999").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);

        let total: Money = [a, b, Money::from_cents(1)].iter().sum();
        assert_eq!(total.cents(), 1501);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(50);
        assert_eq!(unit_price.multiply_quantity(4).cents(), 200);
        assert_eq!(unit_price.multiply_quantity(0), Money::zero());
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(huge.multiply_quantity(u32::MAX).cents(), i64::MAX);
    }
}
