//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64:                                                                │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    230 × 10% = 23.000000000000004   ❌ Totals drift                     │
//! │                                                                         │
//! │  Integer cents do not work either: 10% off $0.35 is 3.5 cents, and     │
//! │  the pricing engine must not round (rounding is a presentation step).  │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 decimals                                         │
//! │    230 × 10 / 100 = 23 exactly                                          │
//! │    35 × 10 / 100  = 3.5 exactly                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_units(50);
//! let doubled = price * 2;
//! let total = price + Money::from_units(30);
//!
//! assert_eq!(doubled, Money::from_units(100));
//! assert_eq!(total, Money::from_units(80));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// One hundred, the denominator of every percentage.
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole currency units with an exact
/// fractional part.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values only appear transiently while a
///   deduction is computed; the pricing folds never store one
/// - **Single field tuple struct**: Zero-cost abstraction over Decimal
/// - **Transparent serde**: an inventory file reads `cost: 50`, not a map
/// - **Saturating arithmetic**: amounts beyond the decimal range clamp to
///   `Decimal::MAX`/`Decimal::MIN` instead of panicking
///
/// ## Where Money is Used
/// ```text
/// InventoryItem.cost ──► Cursor.current_cost ──► SummationResult.raw_total
///                                                        │
///                         Discount.deductible_for ◄──────┤
///                                                        ▼
///                                               SummationResult.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_units(50);
    /// assert_eq!(price.to_string(), "50");
    /// ```
    #[inline]
    pub fn from_units(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Creates a Money value from a mantissa and a decimal scale.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_scaled(1099, 2); // 10.99
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_scaled(mantissa: i64, scale: u32) -> Self {
        Money(Decimal::new(mantissa, scale))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_scaled(299, 2);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_scaled(897, 2));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Returns `percent`% of this amount, unrounded.
    ///
    /// The rate is scaled down first, so a large amount only overflows when
    /// the result itself would.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let total = Money::from_units(230);
    /// assert_eq!(total.percentage(Decimal::from(10)), Money::from_units(23));
    /// ```
    pub fn percentage(&self, percent: Decimal) -> Money {
        Money(self.0.saturating_mul(percent / HUNDRED))
    }

    /// Clamps negative amounts to zero.
    #[inline]
    pub fn floor_at_zero(self) -> Money {
        if self.is_negative() {
            Money::zero()
        } else {
            self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the bare normalized decimal (`50`, `10.5`).
///
/// ## Note
/// This is for logs and debugging. Currency formatting belongs to whatever
/// presents the receipt.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Money::from_units(units)
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a unit count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
