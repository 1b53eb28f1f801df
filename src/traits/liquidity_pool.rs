//! Liquidity provision trait extending [`SwapPool`].
//!
//! # Share Accounting
//!
//! [`LiquidityPool::total_shares`] changes only through
//! [`LiquidityPool::deposit`] and [`LiquidityPool::withdraw`]. Swaps move
//! reserves but never the share count, so fees accrue to existing shares.
//!
//! # Rounding
//!
//! Every rounding step favours the pool:
//!
//! | Operation | Formula | Rounding |
//! |-----------|---------|----------|
//! | deposit   | `shares × reserve / total_shares` | up |
//! | withdraw  | `shares × reserve / total_shares` | down |
//!
//! The first deposit into an empty pool prices one share at one unit of
//! each asset.

use super::SwapPool;
use crate::domain::{Amount, DepositQuote, WithdrawQuote};
use crate::error::AmmError;

/// Trait for pools that mint and burn proportional LP shares.
pub trait LiquidityPool: SwapPool {
    /// Computes the assets required to mint `shares`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::Overflow`] if a required amount does not fit in `u64`.
    fn quote_deposit(&self, shares: Amount) -> Result<DepositQuote, AmmError>;

    /// Mints `shares`, growing the reserves by the required amounts.
    ///
    /// # Errors
    ///
    /// Everything [`quote_deposit`](Self::quote_deposit) returns, plus
    /// [`AmmError::SlippageExceeded`] if a required amount is above
    /// `max_x` / `max_y`.
    fn deposit(
        &mut self,
        shares: Amount,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositQuote, AmmError>;

    /// Computes the assets paid out for burning `shares`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if `shares` is zero or
    ///   exceeds [`total_shares`](Self::total_shares).
    fn quote_withdraw(&self, shares: Amount) -> Result<WithdrawQuote, AmmError>;

    /// Burns `shares`, shrinking the reserves by the paid-out amounts.
    ///
    /// # Errors
    ///
    /// Everything [`quote_withdraw`](Self::quote_withdraw) returns, plus
    /// [`AmmError::SlippageExceeded`] if a payout is below `min_x` /
    /// `min_y`.
    fn withdraw(
        &mut self,
        shares: Amount,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawQuote, AmmError>;

    /// Outstanding LP shares.
    fn total_shares(&self) -> Amount;
}
