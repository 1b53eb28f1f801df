//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;

/// A raw token amount in the smallest unit of its asset.
///
/// Used for reserves, vault balances and LP share counts alike. Arithmetic
/// methods are checked: they return `None` on overflow, underflow, or
/// division by zero instead of panicking. Products are formed in `u128`
/// and narrowed back, so `a * b / c` only fails when the final quotient
/// exceeds `u64::MAX`.
///
/// # Examples
///
/// ```
/// use hydra_pool::domain::{Amount, Rounding};
///
/// let shares = Amount::new(3);
/// let reserve = Amount::new(10);
/// let supply = Amount::new(4);
/// // ceil(3 * 10 / 4) = ceil(7.5) = 8
/// assert_eq!(shares.checked_mul_div(reserve, supply, Rounding::Up), Some(Amount::new(8)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self * numerator / denominator` with explicit rounding.
    ///
    /// The product is formed in `u128`, which cannot overflow for two
    /// `u64` factors. Returns `None` if `denominator` is zero or the
    /// quotient does not fit in `u64`.
    #[must_use]
    pub const fn checked_mul_div(
        &self,
        numerator: Self,
        denominator: Self,
        rounding: Rounding,
    ) -> Option<Self> {
        let product = self.0 as u128 * numerator.0 as u128;
        match rounding.div(product, denominator.0 as u128) {
            Some(q) if q <= u64::MAX as u128 => Some(Self(q as u64)),
            _ => None,
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
