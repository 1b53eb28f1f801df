//! Constant-product swap trait.
//!
//! [`SwapPool`] prices and applies trades against a pool's tracked
//! reserves. It only updates the reserve bookkeeping; moving the tokens
//! themselves is the job of the [`VaultLedger`](super::VaultLedger)
//! batch the engine builds from the returned [`SwapQuote`].
//!
//! # Fee Deduction Invariant
//!
//! The fee is deducted from the input **before** the pricing formula is
//! applied, and the full input is added to the reserve:
//!
//! ```text
//! net_input  = floor(amount_in × (10_000 − fee_bps) / 10_000)
//! amount_out = floor(reserve_out × net_input / (reserve_in + net_input))
//! reserve_in  += amount_in
//! reserve_out −= amount_out
//! ```
//!
//! so `reserve_in × reserve_out` never decreases.

use crate::domain::{Amount, BasisPoints, SwapDirection, SwapQuote};
use crate::error::AmmError;

/// Trait for pools that trade one asset for the other.
///
/// # Errors
///
/// - [`AmmError::ZeroLiquidity`] — either reserve is zero
/// - [`AmmError::InvalidAmount`] — zero input, or input too small to buy
///   a single unit of output
/// - [`AmmError::SlippageExceeded`] — output below the caller's minimum
/// - [`AmmError::Overflow`] — arithmetic left the `u64` range
pub trait SwapPool {
    /// Computes the outcome of a trade without mutating the pool.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap) except `SlippageExceeded`.
    fn quote_swap(&self, direction: SwapDirection, amount_in: Amount)
        -> Result<SwapQuote, AmmError>;

    /// Executes a trade against the reserves.
    ///
    /// On error the pool is left untouched.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapQuote, AmmError>;

    /// Fee charged on every trade's input.
    #[must_use]
    fn fee(&self) -> BasisPoints;
}
