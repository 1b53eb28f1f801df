//! Ledger instructions.

use crate::domain::{Address, Amount};

/// One leg of a [`VaultLedger`](crate::traits::VaultLedger) batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerOp {
    /// Create a new mint. Fails if it exists.
    CreateMint {
        /// Mint address.
        mint: Address,
        /// Only principal allowed to mint.
        authority: Address,
        /// Display decimals.
        decimals: u8,
    },
    /// Open an empty account. Fails if it is already open.
    Open {
        /// Asset of the account.
        asset: Address,
        /// Owner of the account.
        owner: Address,
    },
    /// Open an empty account unless it is already open.
    EnsureOpen {
        /// Asset of the account.
        asset: Address,
        /// Owner of the account.
        owner: Address,
    },
    /// Move balance between two open accounts.
    Transfer {
        /// Asset moved.
        asset: Address,
        /// Debited owner.
        from: Address,
        /// Credited owner.
        to: Address,
        /// Units moved.
        amount: Amount,
    },
    /// Issue new units.
    Mint {
        /// Mint to issue from.
        asset: Address,
        /// Credited owner.
        to: Address,
        /// Units issued.
        amount: Amount,
        /// Signer; must be the mint authority.
        authority: Address,
    },
    /// Destroy units held by an account.
    Burn {
        /// Mint burned from.
        asset: Address,
        /// Debited owner.
        from: Address,
        /// Units destroyed.
        amount: Amount,
    },
}
