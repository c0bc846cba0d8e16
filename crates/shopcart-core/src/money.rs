//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    15.0 * 1.2 = 18.000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    1500 cents × 12000 bps / 10000 = 1800 cents                         │
//! │    Any rounding happens once, explicitly, half-up                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! let rate = Money::from_cents(1500); // $15.00 per unit
//! let per_unit = rate.apply_multiplier_bps(12_000); // × 1.2 = $18.00
//! let expedited = per_unit.multiply_quantity(3);
//! assert_eq!(expedited.cents(), 5400);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// One whole multiplier expressed in basis points (1.0 = 10 000 bps).
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets validation see and reject negative prices
///   instead of silently wrapping
/// - **Single field tuple struct**: Serializes as a bare integer
/// - **Saturating arithmetic**: Operators and scaling clamp at the `i64`
///   bounds. `validate_cart` uses the `checked_*` forms to reject carts
///   that would reach them.
///
/// ## Where Money is Used
/// ```text
/// Item.price ──► Item.line_total ──► items_subtotal ──┐
///                                                     ├──► raw total ──► total
/// tier rate × multiplier × units ──► shipping_cost ───┘      (× (1 - discount))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a unit quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        Money(saturate(i128::from(self.0) * i128::from(qty)))
    }

    /// Like [`Money::multiply_quantity`], but `None` on overflow.
    pub fn checked_multiply_quantity(&self, qty: u64) -> Option<Self> {
        let qty = i64::try_from(qty).ok()?;
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Scales the amount by a factor given in basis points, rounding half-up
    /// to the nearest cent.
    ///
    /// ## Arguments
    /// * `factor_bps` - Multiplier in basis points (12 000 = ×1.2, 9 000 = ×0.9)
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let base = Money::from_cents(200);
    /// assert_eq!(base.apply_multiplier_bps(25_000).cents(), 500); // × 2.5
    /// assert_eq!(base.apply_multiplier_bps(10_000).cents(), 200); // × 1.0
    /// ```
    pub fn apply_multiplier_bps(&self, factor_bps: u32) -> Money {
        // i64 × u32 always fits in i128
        let scaled = (i128::from(self.0) * i128::from(factor_bps) + i128::from(BPS_SCALE / 2))
            / i128::from(BPS_SCALE);
        Money(saturate(scaled))
    }
}

/// Clamps an `i128` intermediate into the `i64` cent range.
fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. Real display formatting belongs to the frontend.
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a unit count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(u64::from(qty))
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
