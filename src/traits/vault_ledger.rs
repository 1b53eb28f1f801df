//! Contract of the fungible-token ledger holding pool vaults.
//!
//! Balances live in `(asset, owner)` accounts. A pool's vaults are the
//! accounts of its two mints owned by the pool's config address, and its
//! LP shares are issued by a mint whose authority is that same address.
//!
//! # Atomicity
//!
//! [`VaultLedger::execute`] applies a batch of [`LedgerOp`]s
//! all-or-nothing: if any op fails, none of the batch is visible. The
//! single-op convenience methods are one-element batches.

use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::ledger::LedgerOp;

/// A token ledger the engine can move pool balances through.
///
/// Implementations must be shareable across threads; the engine calls
/// [`execute`](Self::execute) concurrently for distinct pools.
pub trait VaultLedger: Send + Sync {
    /// Applies `ops` in order as one atomic unit.
    ///
    /// # Errors
    ///
    /// Returns the [`LedgerError`] of the first op that fails; the ledger
    /// is then unchanged.
    fn execute(&self, ops: &[LedgerOp]) -> Result<(), LedgerError>;

    /// Balance of `owner`'s `asset` account, or `None` if it is not open.
    fn balance(&self, asset: &Address, owner: &Address) -> Option<Amount>;

    /// Total supply of `mint`, or `None` if it does not exist.
    fn supply(&self, mint: &Address) -> Option<Amount>;

    /// Creates `mint` with `authority` as its only minter.
    ///
    /// # Errors
    ///
    /// [`LedgerError::MintExists`] if the mint already exists.
    fn create_mint(
        &self,
        mint: Address,
        authority: Address,
        decimals: u8,
    ) -> Result<(), LedgerError> {
        self.execute(&[LedgerOp::CreateMint {
            mint,
            authority,
            decimals,
        }])
    }

    /// Opens an empty `asset` account for `owner`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::MintNotFound`] if `asset` does not exist.
    /// - [`LedgerError::AccountExists`] if the account is already open.
    fn open_account(&self, asset: Address, owner: Address) -> Result<(), LedgerError> {
        self.execute(&[LedgerOp::Open { asset, owner }])
    }

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AccountNotFound`] if either account is missing.
    /// - [`LedgerError::InsufficientFunds`] if `from` holds less than `amount`.
    fn transfer(
        &self,
        asset: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.execute(&[LedgerOp::Transfer {
            asset,
            from,
            to,
            amount,
        }])
    }

    /// Issues `amount` new units of `asset` to `to`, signed by `authority`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnauthorizedMint`] if `authority` is not the minter.
    /// - [`LedgerError::AccountNotFound`] if `to` has no account.
    /// - [`LedgerError::Overflow`] if supply or balance would overflow.
    fn mint(
        &self,
        asset: Address,
        to: Address,
        amount: Amount,
        authority: Address,
    ) -> Result<(), LedgerError> {
        self.execute(&[LedgerOp::Mint {
            asset,
            to,
            amount,
            authority,
        }])
    }

    /// Destroys `amount` units of `asset` held by `from`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AccountNotFound`] if `from` has no account.
    /// - [`LedgerError::InsufficientFunds`] if `from` holds less than `amount`.
    fn burn(&self, asset: Address, from: Address, amount: Amount) -> Result<(), LedgerError> {
        self.execute(&[LedgerOp::Burn {
            asset,
            from,
            amount,
        }])
    }
}
