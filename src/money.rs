//! Wallet amounts with half-chip precision.
//!
//! Chips are whole, but a natural pays 2.5× the bet, so balances and payouts
//! are kept as a count of half-chips.

use core::fmt;
use core::ops::{Add, Sub};

/// Half-chips per chip.
pub const HALVES_PER_CHIP: u64 = 2;

/// An amount of money, exact to half a chip.
///
/// ```
/// use bjtable::Money;
///
/// let payout = Money::from_halves(5 * 25);
/// assert_eq!(payout.to_string(), "62.5");
/// assert_eq!(payout.whole_chips(), 62);
/// assert!(payout.has_half());
/// assert_eq!(Money::from_chips(40).to_string(), "40");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Nothing.
    pub const ZERO: Self = Self(0);

    /// Creates an amount of whole chips.
    #[must_use]
    pub const fn from_chips(chips: u64) -> Self {
        Self(chips.saturating_mul(HALVES_PER_CHIP))
    }

    /// Creates an amount from a count of half-chips.
    #[must_use]
    pub const fn from_halves(halves: u64) -> Self {
        Self(halves)
    }

    /// Returns the amount as a count of half-chips.
    #[must_use]
    pub const fn halves(self) -> u64 {
        self.0
    }

    /// Returns the whole chips in the amount, dropping any half.
    #[must_use]
    pub const fn whole_chips(self) -> u64 {
        self.0 / HALVES_PER_CHIP
    }

    /// Returns whether the amount carries half a chip.
    #[must_use]
    pub const fn has_half(self) -> bool {
        self.0 % HALVES_PER_CHIP != 0
    }

    /// Adds, stopping at the largest representable amount.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtracts, or returns `None` if `other` is larger.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(halves) => Some(Self(halves)),
            None => None,
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_half() {
            write!(f, "{}.5", self.whole_chips())
        } else {
            write!(f, "{}", self.whole_chips())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_chips_survive_arithmetic() {
        let wallet = Money::from_chips(999);
        let payout = Money::from_halves(5);

        let total = wallet + payout;
        assert_eq!(total.halves(), 2003);
        assert_eq!(total.whole_chips(), 1001);
        assert!(total.has_half());
        assert_eq!(total - payout, wallet);
    }

    #[test]
    fn checked_sub_refuses_to_go_negative() {
        let wallet = Money::from_halves(3);
        assert_eq!(wallet.checked_sub(Money::from_chips(1)), Some(Money::from_halves(1)));
        assert_eq!(wallet.checked_sub(Money::from_chips(2)), None);
    }

    #[test]
    fn ordering_counts_the_half() {
        assert!(Money::from_halves(21) > Money::from_chips(10));
        assert!(Money::from_halves(19) < Money::from_chips(10));
        assert_eq!(Money::from_chips(u64::MAX).halves(), u64::MAX);
    }

    #[test]
    fn displays_whole_and_half_amounts() {
        assert_eq!(Money::ZERO.to_string(), "0");
        assert_eq!(Money::from_halves(3).to_string(), "1.5");
        assert_eq!(Money::from_chips(1150).to_string(), "1150");
    }
}
