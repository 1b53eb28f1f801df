//! Persistent record of one pool.

use serde::{Deserialize, Serialize};

use crate::config::PoolParams;
use crate::domain::{Address, Amount, BasisPoints, PoolSnapshot, Principal, SwapDirection};
use crate::error::{AmmError, Result};

/// Identity, fee and reserve state of one pool.
///
/// # Invariants
///
/// - `mint_x != mint_y` and `fee_bps < 10_000`; both immutable.
/// - `reserve_x == 0 && reserve_y == 0` exactly when `lp_supply == 0`.
/// - `reserve_x` / `reserve_y` equal the balances of the pool's vaults and
///   `lp_supply` equals the LP mint supply.
///
/// A `PoolConfig` is never deleted; a fully withdrawn pool stays active and
/// can be seeded again by a new first deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    id: u64,
    authority: Principal,
    mint_x: Address,
    mint_y: Address,
    fee_bps: BasisPoints,
    pub(crate) reserve_x: Amount,
    pub(crate) reserve_y: Amount,
    pub(crate) lp_supply: Amount,
    locked: bool,
}

impl PoolConfig {
    /// Creates an empty, unlocked pool from validated parameters.
    #[must_use]
    pub fn new(params: &PoolParams) -> Self {
        Self {
            id: params.id(),
            authority: *params.authority(),
            mint_x: *params.mint_x(),
            mint_y: *params.mint_y(),
            fee_bps: params.fee_bps(),
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            lp_supply: Amount::ZERO,
            locked: false,
        }
    }

    /// Pool id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Principal that created the pool.
    #[must_use]
    pub const fn authority(&self) -> &Principal {
        &self.authority
    }

    /// Mint of asset X.
    #[must_use]
    pub const fn mint_x(&self) -> &Address {
        &self.mint_x
    }

    /// Mint of asset Y.
    #[must_use]
    pub const fn mint_y(&self) -> &Address {
        &self.mint_y
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee_bps(&self) -> BasisPoints {
        self.fee_bps
    }

    /// Tracked X reserve.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Tracked Y reserve.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Outstanding LP shares.
    pub const fn lp_supply(&self) -> Amount {
        self.lp_supply
    }

    /// Whether the pool is paused.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// `(reserve_in, reserve_out)` for a trade in `direction`.
    #[must_use]
    pub const fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        }
    }

    /// `(mint_in, mint_out)` for a trade in `direction`.
    #[must_use]
    pub const fn mints_for(&self, direction: SwapDirection) -> (&Address, &Address) {
        match direction {
            SwapDirection::XToY => (&self.mint_x, &self.mint_y),
            SwapDirection::YToX => (&self.mint_y, &self.mint_x),
        }
    }

    /// Point-in-time copy of the mutable state.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            lp_supply: self.lp_supply,
            fee_bps: self.fee_bps,
            locked: self.locked,
        }
    }

    /// # Errors
    ///
    /// Returns [`AmmError::PoolLocked`] if the pool is paused.
    pub fn assert_not_locked(&self) -> Result<()> {
        if self.locked {
            return Err(AmmError::PoolLocked);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`AmmError::Unauthorized`] unless `caller` is the pool
    /// authority.
    pub fn assert_is_authority(&self, caller: &Principal) -> Result<()> {
        if &self.authority != caller {
            return Err(AmmError::Unauthorized);
        }
        Ok(())
    }

    /// Pauses the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the authority.
    /// - [`AmmError::PoolLocked`] if the pool is already paused.
    pub fn lock(&mut self, caller: &Principal) -> Result<()> {
        self.assert_is_authority(caller)?;
        self.assert_not_locked()?;
        self.locked = true;
        Ok(())
    }

    /// Resumes the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `caller` is not the authority.
    /// - [`AmmError::PoolNotLocked`] if the pool is not paused.
    pub fn unlock(&mut self, caller: &Principal) -> Result<()> {
        self.assert_is_authority(caller)?;
        if !self.locked {
            return Err(AmmError::PoolNotLocked);
        }
        self.locked = false;
        Ok(())
    }
}

/// Lifecycle state of a pool id.
///
/// `Uninitialized -> Active` is the only transition and it is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolStatus {
    /// No pool has been created under this id.
    Uninitialized,
    /// The pool exists and accepts operations (unless locked).
    Active,
}
