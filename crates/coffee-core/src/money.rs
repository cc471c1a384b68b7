//! # Money Module
//!
//! Provides the `Money` type for prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    3.95 + 0.30 + 0.90 as f64 = 5.1499999999999995                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    395 + 30 + 90 = 515 cents, printed as "5.15"                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coffee_core::money::Money;
//!
//! let coffee = Money::from_cents(300);
//! let milk = Money::from_cents(30);
//! assert_eq!((coffee + milk).to_string(), "3.30");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (Rappen for CHF).
///
/// ## Where Money is Used
/// ```text
/// ProductDefinition.price ──► OrderLine.base_price ──► OrderLine::price()
///                                                        │ (zero when free)
///                                                        ▼
///                                  ReceiptLine.amount ──► Receipt.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use coffee_core::money::Money;
    ///
    /// let price = Money::from_cents(395); // 3.95
    /// assert_eq!(price.cents(), 395);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit part, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use coffee_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(395).whole_units(), 3);
    /// assert_eq!(Money::from_cents(30).whole_units(), 0);
    /// ```
    #[inline]
    pub const fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the fractional part in cents (always 0-99).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the plain amount with two decimals, no currency (`"3.95"`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.whole_units().abs(),
            self.cents_part()
        )
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        let money = Money::from_cents(395);
        assert_eq!(money.cents(), 395);
        assert_eq!(money.whole_units(), 3);
        assert_eq!(money.cents_part(), 95);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(300).to_string(), "3.00");
        assert_eq!(Money::from_cents(30).to_string(), "0.30");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(1205).to_string(), "12.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_sum_avoids_float_drift() {
        let total: Money = [395, 30, 90]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.to_string(), "5.15");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert_eq!(Money::default(), zero);

        let mut running = Money::from_cents(250);
        running += Money::from_cents(50);
        assert!(running.is_positive());
        assert_eq!(running.cents(), 300);
    }

    #[test]
    fn test_ordering_follows_cents() {
        assert!(Money::from_cents(395) > Money::from_cents(350));
        assert!(Money::from_cents(30) < Money::from_cents(50));
    }
}
