//! In-memory [`VaultLedger`] for tests, simulation and demos.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::LedgerOp;
use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::VaultLedger;

type AccountKey = (Address, Address);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MintRecord {
    authority: Address,
    decimals: u8,
    supply: Amount,
}

#[derive(Debug, Default)]
struct Tables {
    mints: HashMap<Address, MintRecord>,
    accounts: HashMap<AccountKey, Amount>,
}

/// Writes of one batch layered over the committed tables.
struct Staged<'a> {
    base: &'a Tables,
    mints: HashMap<Address, MintRecord>,
    accounts: HashMap<AccountKey, Amount>,
}

impl<'a> Staged<'a> {
    fn new(base: &'a Tables) -> Self {
        Self {
            base,
            mints: HashMap::new(),
            accounts: HashMap::new(),
        }
    }

    fn mint(&self, mint: &Address) -> Option<MintRecord> {
        self.mints
            .get(mint)
            .or_else(|| self.base.mints.get(mint))
            .copied()
    }

    fn account(&self, key: &AccountKey) -> Option<Amount> {
        self.accounts
            .get(key)
            .or_else(|| self.base.accounts.get(key))
            .copied()
    }

    fn require_mint(&self, mint: &Address) -> Result<MintRecord, LedgerError> {
        self.mint(mint).ok_or(LedgerError::MintNotFound(*mint))
    }

    fn require_account(&self, asset: &Address, owner: &Address) -> Result<Amount, LedgerError> {
        self.account(&(*asset, *owner))
            .ok_or(LedgerError::AccountNotFound {
                asset: *asset,
                owner: *owner,
            })
    }

    fn ensure_account(&self, asset: &Address, owner: &Address) -> Result<(), LedgerError> {
        self.require_account(asset, owner).map(|_| ())
    }

    fn debit(&mut self, asset: &Address, owner: &Address, amount: Amount) -> Result<(), LedgerError> {
        let balance = self.require_account(asset, owner)?;
        let rest = balance
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientFunds {
                asset: *asset,
                owner: *owner,
                balance: balance.get(),
                required: amount.get(),
            })?;
        self.accounts.insert((*asset, *owner), rest);
        Ok(())
    }

    fn credit(
        &mut self,
        asset: &Address,
        owner: &Address,
        amount: Amount,
        context: &'static str,
    ) -> Result<(), LedgerError> {
        let balance = self.require_account(asset, owner)?;
        let grown = balance
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow(context))?;
        self.accounts.insert((*asset, *owner), grown);
        Ok(())
    }

    fn apply(&mut self, op: &LedgerOp) -> Result<(), LedgerError> {
        match *op {
            LedgerOp::CreateMint {
                mint,
                authority,
                decimals,
            } => {
                if self.mint(&mint).is_some() {
                    return Err(LedgerError::MintExists(mint));
                }
                self.mints.insert(
                    mint,
                    MintRecord {
                        authority,
                        decimals,
                        supply: Amount::ZERO,
                    },
                );
            }
            LedgerOp::Open { asset, owner } => {
                self.require_mint(&asset)?;
                if self.account(&(asset, owner)).is_some() {
                    return Err(LedgerError::AccountExists { asset, owner });
                }
                self.accounts.insert((asset, owner), Amount::ZERO);
            }
            LedgerOp::EnsureOpen { asset, owner } => {
                self.require_mint(&asset)?;
                if self.account(&(asset, owner)).is_none() {
                    self.accounts.insert((asset, owner), Amount::ZERO);
                }
            }
            LedgerOp::Transfer {
                asset,
                from,
                to,
                amount,
            } => {
                self.ensure_account(&asset, &to)?;
                self.debit(&asset, &from, amount)?;
                self.credit(&asset, &to, amount, "transfer credit")?;
            }
            LedgerOp::Mint {
                asset,
                to,
                amount,
                authority,
            } => {
                let mut record = self.require_mint(&asset)?;
                if record.authority != authority {
                    return Err(LedgerError::UnauthorizedMint {
                        mint: asset,
                        signer: authority,
                    });
                }
                record.supply = record
                    .supply
                    .checked_add(&amount)
                    .ok_or(LedgerError::Overflow("mint supply"))?;
                self.credit(&asset, &to, amount, "mint balance")?;
                self.mints.insert(asset, record);
            }
            LedgerOp::Burn {
                asset,
                from,
                amount,
            } => {
                let mut record = self.require_mint(&asset)?;
                self.debit(&asset, &from, amount)?;
                record.supply = record
                    .supply
                    .checked_sub(&amount)
                    .ok_or(LedgerError::Overflow("burn supply"))?;
                self.mints.insert(asset, record);
            }
        }
        Ok(())
    }

    fn into_writes(self) -> (HashMap<Address, MintRecord>, HashMap<AccountKey, Amount>) {
        (self.mints, self.accounts)
    }
}

/// Thread-safe in-memory token ledger.
///
/// Each [`execute`](VaultLedger::execute) call takes the ledger lock,
/// stages every op over the committed state and merges the staged writes
/// only once all ops succeeded.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    tables: Mutex<Tables>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimals of `mint`, or `None` if it does not exist.
    #[must_use]
    pub fn decimals(&self, mint: &Address) -> Option<u8> {
        self.tables.lock().mints.get(mint).map(|m| m.decimals)
    }

    /// Mint authority of `mint`, or `None` if it does not exist.
    #[must_use]
    pub fn mint_authority(&self, mint: &Address) -> Option<Address> {
        self.tables.lock().mints.get(mint).map(|m| m.authority)
    }
}

impl VaultLedger for MemoryLedger {
    fn execute(&self, ops: &[LedgerOp]) -> Result<(), LedgerError> {
        let mut tables = self.tables.lock();
        let (mints, accounts) = {
            let mut staged = Staged::new(&tables);
            for op in ops {
                staged.apply(op)?;
            }
            staged.into_writes()
        };
        tables.mints.extend(mints);
        tables.accounts.extend(accounts);
        tracing::trace!(ops = ops.len(), "ledger batch committed");
        Ok(())
    }

    fn balance(&self, asset: &Address, owner: &Address) -> Option<Amount> {
        self.tables.lock().accounts.get(&(*asset, *owner)).copied()
    }

    fn supply(&self, mint: &Address) -> Option<Amount> {
        self.tables.lock().mints.get(mint).map(|m| m.supply)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const MINT: Address = Address::from_label(b"mint");
    const AUTH: Address = Address::from_label(b"mint-authority");
    const ALICE: Address = Address::from_label(b"alice");
    const BOB: Address = Address::from_label(b"bob");

    fn funded() -> MemoryLedger {
        let ledger = MemoryLedger::new();
        let ops = [
            LedgerOp::CreateMint {
                mint: MINT,
                authority: AUTH,
                decimals: 6,
            },
            LedgerOp::Open {
                asset: MINT,
                owner: ALICE,
            },
            LedgerOp::Open {
                asset: MINT,
                owner: BOB,
            },
            LedgerOp::Mint {
                asset: MINT,
                to: ALICE,
                amount: Amount::new(1_000),
                authority: AUTH,
            },
        ];
        let Ok(()) = ledger.execute(&ops) else {
            panic!("setup batch");
        };
        ledger
    }

    #[test]
    fn setup_balances() {
        let ledger = funded();
        assert_eq!(ledger.balance(&MINT, &ALICE), Some(Amount::new(1_000)));
        assert_eq!(ledger.balance(&MINT, &BOB), Some(Amount::ZERO));
        assert_eq!(ledger.supply(&MINT), Some(Amount::new(1_000)));
        assert_eq!(ledger.decimals(&MINT), Some(6));
        assert_eq!(ledger.mint_authority(&MINT), Some(AUTH));
    }

    #[test]
    fn transfer_moves_balance() {
        let ledger = funded();
        assert_eq!(ledger.transfer(MINT, ALICE, BOB, Amount::new(400)), Ok(()));
        assert_eq!(ledger.balance(&MINT, &ALICE), Some(Amount::new(600)));
        assert_eq!(ledger.balance(&MINT, &BOB), Some(Amount::new(400)));
        assert_eq!(ledger.supply(&MINT), Some(Amount::new(1_000)));
    }

    #[test]
    fn self_transfer_is_neutral() {
        let ledger = funded();
        assert_eq!(ledger.transfer(MINT, ALICE, ALICE, Amount::new(1_000)), Ok(()));
        assert_eq!(ledger.balance(&MINT, &ALICE), Some(Amount::new(1_000)));
    }

    #[test]
    fn overdraft_rejected() {
        let ledger = funded();
        let r = ledger.transfer(MINT, BOB, ALICE, Amount::new(1));
        assert_eq!(
            r,
            Err(LedgerError::InsufficientFunds {
                asset: MINT,
                owner: BOB,
                balance: 0,
                required: 1,
            })
        );
    }

    #[test]
    fn failed_batch_leaves_no_trace() {
        let ledger = funded();
        let carol = Address::from_label(b"carol");
        let ops = [
            LedgerOp::Open {
                asset: MINT,
                owner: carol,
            },
            LedgerOp::Transfer {
                asset: MINT,
                from: ALICE,
                to: carol,
                amount: Amount::new(500),
            },
            LedgerOp::Burn {
                asset: MINT,
                from: ALICE,
                amount: Amount::new(501),
            },
        ];
        let Err(LedgerError::InsufficientFunds { .. }) = ledger.execute(&ops) else {
            panic!("expected InsufficientFunds");
        };
        assert_eq!(ledger.balance(&MINT, &carol), None);
        assert_eq!(ledger.balance(&MINT, &ALICE), Some(Amount::new(1_000)));
        assert_eq!(ledger.supply(&MINT), Some(Amount::new(1_000)));
    }

    #[test]
    fn later_ops_see_earlier_writes() {
        let ledger = funded();
        let carol = Address::from_label(b"carol");
        let ops = [
            LedgerOp::EnsureOpen {
                asset: MINT,
                owner: carol,
            },
            LedgerOp::Transfer {
                asset: MINT,
                from: ALICE,
                to: carol,
                amount: Amount::new(700),
            },
            LedgerOp::Burn {
                asset: MINT,
                from: carol,
                amount: Amount::new(200),
            },
        ];
        assert_eq!(ledger.execute(&ops), Ok(()));
        assert_eq!(ledger.balance(&MINT, &carol), Some(Amount::new(500)));
        assert_eq!(ledger.supply(&MINT), Some(Amount::new(800)));
    }

    #[test]
    fn open_is_strict_ensure_open_is_not() {
        let ledger = funded();
        assert_eq!(
            ledger.open_account(MINT, ALICE),
            Err(LedgerError::AccountExists {
                asset: MINT,
                owner: ALICE,
            })
        );
        let ensure = [LedgerOp::EnsureOpen {
            asset: MINT,
            owner: ALICE,
        }];
        assert_eq!(ledger.execute(&ensure), Ok(()));
        assert_eq!(ledger.balance(&MINT, &ALICE), Some(Amount::new(1_000)));
    }

    #[test]
    fn open_requires_mint() {
        let ledger = MemoryLedger::new();
        assert_eq!(
            ledger.open_account(MINT, ALICE),
            Err(LedgerError::MintNotFound(MINT))
        );
    }

    #[test]
    fn duplicate_mint_rejected() {
        let ledger = funded();
        assert_eq!(
            ledger.create_mint(MINT, ALICE, 9),
            Err(LedgerError::MintExists(MINT))
        );
        assert_eq!(ledger.decimals(&MINT), Some(6));
    }

    #[test]
    fn mint_requires_authority() {
        let ledger = funded();
        assert_eq!(
            ledger.mint(MINT, BOB, Amount::new(1), ALICE),
            Err(LedgerError::UnauthorizedMint {
                mint: MINT,
                signer: ALICE,
            })
        );
    }

    #[test]
    fn mint_overflow_rejected() {
        let ledger = funded();
        let r = ledger.mint(MINT, BOB, Amount::MAX, AUTH);
        assert_eq!(r, Err(LedgerError::Overflow("mint supply")));
        assert_eq!(ledger.balance(&MINT, &BOB), Some(Amount::ZERO));
    }

    #[test]
    fn transfer_to_missing_account() {
        let ledger = funded();
        let carol = Address::from_label(b"carol");
        assert_eq!(
            ledger.transfer(MINT, ALICE, carol, Amount::new(1)),
            Err(LedgerError::AccountNotFound {
                asset: MINT,
                owner: carol,
            })
        );
        assert_eq!(ledger.balance(&MINT, &ALICE), Some(Amount::new(1_000)));
    }
}
