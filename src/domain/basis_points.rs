//! Basis-point fee rate.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Denominator for basis points: 10 000 bp = 100%.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%).
///
/// Any `u16` can be stored, but only values strictly below 10 000 are
/// usable as a pool fee: a 100% fee would leave nothing to trade. See
/// [`is_valid_fee`](Self::is_valid_fee).
///
/// # Examples
///
/// ```
/// use hydra_pool::domain::{Amount, BasisPoints, Rounding};
///
/// let fee = BasisPoints::new(1_000); // 10%
/// let net = fee.apply_complement(Amount::new(15_000), Rounding::Down).expect("no overflow");
/// assert_eq!(net, Amount::new(13_500));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (no fee).
    pub const ZERO: Self = Self(0);

    /// Largest usable fee, 9 999 bp.
    pub const MAX_FEE: Self = Self(BPS_DENOMINATOR - 1);

    /// Creates a new `BasisPoints` from a raw `u16` value.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the value lies in `[0, 10_000)`.
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, the share of an input that survives the fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the value exceeds 10 000.
    pub fn complement(&self) -> crate::error::Result<u16> {
        BPS_DENOMINATOR
            .checked_sub(self.0)
            .ok_or(AmmError::InvalidFee("fee exceeds 10000 basis points"))
    }

    /// Computes `amount * (10_000 - self) / 10_000`, the part of `amount`
    /// left after the fee is taken.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the value exceeds 10 000.
    /// - [`AmmError::Overflow`] if the quotient does not fit in `u64`.
    pub fn apply_complement(
        &self,
        amount: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        let complement = self.complement()?;
        amount
            .checked_mul_div(
                Amount::new(u64::from(complement)),
                Amount::new(u64::from(BPS_DENOMINATOR)),
                rounding,
            )
            .ok_or(AmmError::Overflow("fee complement overflow"))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
