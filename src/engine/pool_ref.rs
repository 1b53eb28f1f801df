//! Caller-side reference to a pool.

use serde::{Deserialize, Serialize};

use crate::derivation::PoolAddresses;

/// A pool id together with the accounts the caller believes belong to it.
///
/// Every engine operation re-derives the accounts and rejects the request
/// with [`AddressMismatch`](crate::error::AmmError::AddressMismatch) if
/// any differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolRef {
    /// Pool id.
    pub id: u64,
    /// Accounts supplied with the request.
    pub accounts: PoolAddresses,
}

impl PoolRef {
    /// Creates a reference from explicit accounts.
    #[must_use]
    pub const fn new(id: u64, accounts: PoolAddresses) -> Self {
        Self { id, accounts }
    }
}
