//! Deterministic derivation of pool account addresses.
//!
//! Every account a pool owns is a pure function of public seed material,
//! so any client can recompute it off-line and the engine can reject a
//! request that names the wrong account before anything is mutated.
//!
//! # Encoding
//!
//! ```text
//! address = SHA-256( DOMAIN_TAG
//!                 || le64(len(seed_0)) || seed_0
//!                 || ...
//!                 || le64(len(seed_n)) || seed_n
//!                 || namespace )
//! ```
//!
//! The length prefix makes the encoding injective over seed lists:
//! `["ab", "c"]` and `["a", "bc"]` hash different inputs.
//!
//! | Account | Namespace | Seeds |
//! |---------|-----------|-------|
//! | config  | program id | `"config"`, `le64(pool_id)` |
//! | LP mint | program id | `"lp"`, `config` |
//! | vault   | [`ASSOCIATED_ACCOUNT_PROGRAM`] | `owner`, [`TOKEN_LEDGER_PROGRAM`], `mint` |

mod pool_addresses;

pub use pool_addresses::PoolAddresses;

use sha2::{Digest, Sha256};

use crate::domain::Address;

/// Prefix mixed into every derivation so pool addresses cannot collide
/// with hashes computed for other purposes.
const DOMAIN_TAG: &[u8] = b"hydra-pool/derived-address";

/// Seed naming a pool's config account.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed naming a pool's LP mint.
pub const LP_SEED: &[u8] = b"lp";

/// Identity of the fungible-token ledger program.
pub const TOKEN_LEDGER_PROGRAM: Address = Address::from_label(b"token-ledger");

/// Namespace of associated (owner, mint) token accounts.
pub const ASSOCIATED_ACCOUNT_PROGRAM: Address = Address::from_label(b"associated-account");

/// Derives an address from `seeds` under `namespace`.
#[must_use]
pub fn derive_address(namespace: &Address, seeds: &[&[u8]]) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    for seed in seeds {
        hasher.update((seed.len() as u64).to_le_bytes());
        hasher.update(seed);
    }
    hasher.update(namespace.as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    Address::new(digest)
}

/// Address of the config account of pool `pool_id`.
#[must_use]
pub fn config_address(program_id: &Address, pool_id: u64) -> Address {
    derive_address(program_id, &[CONFIG_SEED, &pool_id.to_le_bytes()])
}

/// Address of the LP mint owned by `config`.
#[must_use]
pub fn lp_mint_address(program_id: &Address, config: &Address) -> Address {
    derive_address(program_id, &[LP_SEED, config.as_bytes()])
}

/// The associated token account of `owner` for `mint`.
#[must_use]
pub fn associated_account(owner: &Address, mint: &Address) -> Address {
    derive_address(
        &ASSOCIATED_ACCOUNT_PROGRAM,
        &[owner.as_bytes(), TOKEN_LEDGER_PROGRAM.as_bytes(), mint.as_bytes()],
    )
}
