//! The full set of derived accounts belonging to one pool.

use serde::{Deserialize, Serialize};

use super::{associated_account, config_address, lp_mint_address};
use crate::domain::Address;
use crate::error::{AmmError, Result};

/// Config, LP mint and vault addresses of a pool.
///
/// Built by [`PoolAddresses::derive`]; a client sends its own copy with
/// every request and the engine checks it with [`PoolAddresses::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolAddresses {
    /// Pool config account; owner of both vaults and authority of the LP mint.
    pub config: Address,
    /// Mint of the pool's LP shares.
    pub lp_mint: Address,
    /// Vault holding the X reserve.
    pub vault_x: Address,
    /// Vault holding the Y reserve.
    pub vault_y: Address,
}

impl PoolAddresses {
    /// Derives every account of pool `pool_id` trading `mint_x` against
    /// `mint_y` under `program_id`.
    #[must_use]
    pub fn derive(program_id: &Address, pool_id: u64, mint_x: &Address, mint_y: &Address) -> Self {
        let config = config_address(program_id, pool_id);
        Self {
            config,
            lp_mint: lp_mint_address(program_id, &config),
            vault_x: associated_account(&config, mint_x),
            vault_y: associated_account(&config, mint_y),
        }
    }

    /// Checks `supplied` against `self`, account by account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AddressMismatch`] naming the first account that
    /// differs, checked in the order config, LP mint, vault X, vault Y.
    pub fn verify(&self, supplied: &Self) -> Result<()> {
        if self.config != supplied.config {
            return Err(AmmError::AddressMismatch("config"));
        }
        if self.lp_mint != supplied.lp_mint {
            return Err(AmmError::AddressMismatch("lp_mint"));
        }
        if self.vault_x != supplied.vault_x {
            return Err(AmmError::AddressMismatch("vault_x"));
        }
        if self.vault_y != supplied.vault_y {
            return Err(AmmError::AddressMismatch("vault_y"));
        }
        Ok(())
    }
}
