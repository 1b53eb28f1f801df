//! Read-only view of a pool's mutable state.

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints};

/// Point-in-time copy of a pool's reserves, supply and fee.
///
/// Returned by the engine's read accessor. Holds no lock; the pool may
/// change as soon as the snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolSnapshot {
    /// Tracked balance of asset X.
    pub reserve_x: Amount,
    /// Tracked balance of asset Y.
    pub reserve_y: Amount,
    /// Outstanding LP shares.
    pub lp_supply: Amount,
    /// Swap fee.
    pub fee_bps: BasisPoints,
    /// Whether the pool is paused.
    pub locked: bool,
}

impl PoolSnapshot {
    /// The constant-product invariant `reserve_x * reserve_y`.
    #[must_use]
    pub const fn k(&self) -> u128 {
        self.reserve_x.get() as u128 * self.reserve_y.get() as u128
    }

    /// Returns `true` if the pool holds no liquidity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lp_supply.is_zero()
    }
}
