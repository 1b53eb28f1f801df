//! Parameters of a pool to be initialized.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, BasisPoints, Principal};
use crate::error::{AmmError, Result};

/// Validated blueprint for [`AmmEngine::initialize`](crate::engine::AmmEngine::initialize).
///
/// # Validation
///
/// - `fee_bps` must be below 10 000.
/// - `mint_x` and `mint_y` must differ.
///
/// The engine additionally checks the fee against its configured cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolParams {
    id: u64,
    fee_bps: BasisPoints,
    authority: Principal,
    mint_x: Address,
    mint_y: Address,
}

impl PoolParams {
    /// Creates new pool parameters.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if `fee_bps >= 10_000`.
    /// - [`AmmError::InvalidMints`] if `mint_x == mint_y`.
    pub fn new(
        id: u64,
        fee_bps: BasisPoints,
        authority: Principal,
        mint_x: Address,
        mint_y: Address,
    ) -> Result<Self> {
        let params = Self {
            id,
            fee_bps,
            authority,
            mint_x,
            mint_y,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all parameter invariants.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new). Deserialized values skip `new`, so call
    /// this before using them.
    pub fn validate(&self) -> Result<()> {
        if !self.fee_bps.is_valid_fee() {
            return Err(AmmError::InvalidFee("fee must be below 10000 basis points"));
        }
        if self.mint_x == self.mint_y {
            return Err(AmmError::InvalidMints);
        }
        Ok(())
    }

    /// Pool id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee_bps(&self) -> BasisPoints {
        self.fee_bps
    }

    /// Principal allowed to lock and unlock the pool.
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
}
