//! The pool engine: validation, per-pool serialization and atomic commit.
//!
//! Every mutating operation follows the same sequence:
//!
//! 1. Resolve the pool's slot in the [`PoolRegistry`] and lock it.
//! 2. Re-derive the pool's accounts and compare them with the caller's
//!    [`PoolRef`].
//! 3. Run the pool math on a copy of the [`PoolConfig`].
//! 4. Submit every token movement as one [`VaultLedger::execute`] batch.
//! 5. Store the copy back into the slot.
//!
//! A failure in steps 1–4 returns before step 5, and step 5 cannot fail,
//! so an error never leaves a partial update behind in either the pool
//! record or the ledger.

mod pool_ref;
mod registry;

pub use pool_ref::PoolRef;
pub use registry::PoolRegistry;

use tracing::{debug, info, warn};

use crate::config::{EngineConfig, PoolParams};
use crate::derivation::PoolAddresses;
use crate::domain::{
    Address, Amount, DepositQuote, PoolSnapshot, Principal, SwapDirection, SwapQuote,
    WithdrawQuote,
};
use crate::error::{AmmError, Result};
use crate::ledger::LedgerOp;
use crate::state::{PoolConfig, PoolStatus};
use crate::traits::{LiquidityPool, SwapPool, VaultLedger};

/// Constant-product pool engine over a token ledger `L`.
///
/// The engine is `Sync` when `L` is, and all operations take `&self`:
/// share it across threads with an `Arc`.
///
/// # Examples
///
/// ```
/// use hydra_pool::prelude::*;
///
/// let ledger = MemoryLedger::new();
/// let mint_x = Address::from_label(b"mint-x");
/// let mint_y = Address::from_label(b"mint-y");
/// let issuer = Address::from_label(b"issuer");
/// ledger.create_mint(mint_x, issuer, 6).expect("mint x");
/// ledger.create_mint(mint_y, issuer, 6).expect("mint y");
///
/// let engine = AmmEngine::new(EngineConfig::default(), ledger).expect("engine");
/// let creator = Address::from_label(b"creator");
/// let params = PoolParams::new(1, BasisPoints::new(30), creator, mint_x, mint_y).expect("params");
/// let pool = engine.pool_ref(1, &mint_x, &mint_y);
/// engine.initialize(&params, &pool).expect("initialized");
///
/// assert_eq!(engine.pool_status(1), PoolStatus::Active);
/// assert_eq!(engine.pool_state(1).expect("state").lp_supply, Amount::ZERO);
/// ```
#[derive(Debug)]
pub struct AmmEngine<L> {
    config: EngineConfig,
    ledger: L,
    pools: PoolRegistry,
}

impl<L: VaultLedger> AmmEngine<L> {
    /// Creates an engine with no pools.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Config`] if `config` fails validation.
    pub fn new(config: EngineConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ledger,
            pools: PoolRegistry::new(),
        })
    }

    /// Engine settings.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying token ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Derived accounts of pool `id` trading `mint_x` against `mint_y`.
    #[must_use]
    pub fn addresses(&self, id: u64, mint_x: &Address, mint_y: &Address) -> PoolAddresses {
        PoolAddresses::derive(&self.config.program_id, id, mint_x, mint_y)
    }

    /// A [`PoolRef`] carrying the correctly derived accounts.
    #[must_use]
    pub fn pool_ref(&self, id: u64, mint_x: &Address, mint_y: &Address) -> PoolRef {
        PoolRef::new(id, self.addresses(id, mint_x, mint_y))
    }

    // -- initialize ---------------------------------------------------------

    /// Creates pool `params.id()` with empty reserves.
    ///
    /// Opens the LP mint (authority: the config address) and both vaults
    /// in one ledger batch. Both asset mints must already exist in the
    /// ledger.
    ///
    /// # Errors
    ///
    /// In check order:
    ///
    /// - [`AmmError::InvalidFee`] if the fee is 10 000 or more, or above
    ///   the engine's `max_fee_bps`.
    /// - [`AmmError::InvalidMints`] if both mints are equal.
    /// - [`AmmError::AddressMismatch`] if `pool` disagrees with the
    ///   derived accounts.
    /// - [`AmmError::AlreadyInitialized`] if the id is taken.
    /// - [`AmmError::Ledger`] if the ledger rejects the batch.
    pub fn initialize(&self, params: &PoolParams, pool: &PoolRef) -> Result<PoolSnapshot> {
        params.validate()?;
        if params.fee_bps() > self.config.max_fee_bps {
            return Err(AmmError::InvalidFee("fee above engine max_fee_bps"));
        }

        let id = params.id();
        if pool.id != id {
            warn!(pool_id = id, supplied = pool.id, "pool id mismatch on initialize");
            return Err(AmmError::AddressMismatch("config"));
        }
        let derived = self.addresses(id, params.mint_x(), params.mint_y());
        verify_accounts(id, &derived, &pool.accounts)?;

        let slot = self.pools.get_or_create(id);
        let mut guard = slot.lock();
        if guard.is_some() {
            return Err(AmmError::AlreadyInitialized(id));
        }

        let ops = [
            LedgerOp::CreateMint {
                mint: derived.lp_mint,
                authority: derived.config,
                decimals: self.config.lp_decimals,
            },
            LedgerOp::Open {
                asset: *params.mint_x(),
                owner: derived.config,
            },
            LedgerOp::Open {
                asset: *params.mint_y(),
                owner: derived.config,
            },
        ];
        if let Err(err) = self.ledger.execute(&ops) {
            drop(guard);
            self.pools.release(id, slot);
            return Err(err.into());
        }

        let state = PoolConfig::new(params);
        let snapshot = state.snapshot();
        *guard = Some(state);
        info!(
            pool_id = id,
            fee_bps = params.fee_bps().get(),
            authority = %params.authority(),
            config = %derived.config,
            "pool initialized"
        );
        Ok(snapshot)
    }

    // -- liquidity ----------------------------------------------------------

    /// Mints `amount` LP shares to `depositor` against a proportional
    /// payment of both assets.
    ///
    /// The depositor's X and Y accounts must be open and funded; their LP
    /// account is opened if missing.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    /// - [`AmmError::AddressMismatch`] on a wrong account in `pool`.
    /// - [`AmmError::PoolLocked`] if the pool is paused.
    /// - [`AmmError::ReservedPrincipal`] if `depositor` is one of the
    ///   pool's own accounts.
    /// - [`AmmError::InvalidAmount`] if `amount` is zero.
    /// - [`AmmError::SlippageExceeded`] if a required amount is above
    ///   `max_x` / `max_y`.
    /// - [`AmmError::Overflow`] if reserves or supply would overflow.
    /// - [`AmmError::Ledger`] if a transfer or mint is rejected.
    pub fn deposit(
        &self,
        pool: &PoolRef,
        depositor: &Principal,
        amount: Amount,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositQuote> {
        let quote = self.with_pool(pool, |state, accounts| {
            state.assert_not_locked()?;
            reject_pool_principal(pool.id, depositor, accounts)?;
            let quote = state
                .deposit(amount, max_x, max_y)
                .map_err(|e| log_slippage(pool.id, "deposit", e))?;
            let ops = vec![
                LedgerOp::Transfer {
                    asset: *state.mint_x(),
                    from: *depositor,
                    to: accounts.config,
                    amount: quote.amount_x(),
                },
                LedgerOp::Transfer {
                    asset: *state.mint_y(),
                    from: *depositor,
                    to: accounts.config,
                    amount: quote.amount_y(),
                },
                LedgerOp::EnsureOpen {
                    asset: accounts.lp_mint,
                    owner: *depositor,
                },
                LedgerOp::Mint {
                    asset: accounts.lp_mint,
                    to: *depositor,
                    amount: quote.shares(),
                    authority: accounts.config,
                },
            ];
            Ok((quote, ops))
        })?;
        debug!(
            pool_id = pool.id,
            depositor = %depositor,
            shares = quote.shares().get(),
            amount_x = quote.amount_x().get(),
            amount_y = quote.amount_y().get(),
            "deposit"
        );
        Ok(quote)
    }

    /// Burns `amount` of `withdrawer`'s LP shares and pays out their
    /// proportional claim on both reserves.
    ///
    /// The withdrawer's X and Y accounts are opened if missing.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    /// - [`AmmError::AddressMismatch`] on a wrong account in `pool`.
    /// - [`AmmError::PoolLocked`] if the pool is paused.
    /// - [`AmmError::ReservedPrincipal`] if `withdrawer` is one of the
    ///   pool's own accounts.
    /// - [`AmmError::InsufficientLiquidity`] if `amount` is zero, exceeds
    ///   the LP supply, or exceeds the withdrawer's LP balance.
    /// - [`AmmError::SlippageExceeded`] if a payout is below `min_x` /
    ///   `min_y`.
    /// - [`AmmError::Ledger`] if a burn or transfer is rejected.
    pub fn withdraw(
        &self,
        pool: &PoolRef,
        withdrawer: &Principal,
        amount: Amount,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawQuote> {
        let quote = self.with_pool(pool, |state, accounts| {
            state.assert_not_locked()?;
            reject_pool_principal(pool.id, withdrawer, accounts)?;
            let held = self
                .ledger
                .balance(&accounts.lp_mint, withdrawer)
                .unwrap_or(Amount::ZERO);
            if amount > held {
                return Err(AmmError::InsufficientLiquidity);
            }
            let quote = state
                .withdraw(amount, min_x, min_y)
                .map_err(|e| log_slippage(pool.id, "withdraw", e))?;
            let ops = vec![
                LedgerOp::Burn {
                    asset: accounts.lp_mint,
                    from: *withdrawer,
                    amount: quote.shares(),
                },
                LedgerOp::EnsureOpen {
                    asset: *state.mint_x(),
                    owner: *withdrawer,
                },
                LedgerOp::EnsureOpen {
                    asset: *state.mint_y(),
                    owner: *withdrawer,
                },
                LedgerOp::Transfer {
                    asset: *state.mint_x(),
                    from: accounts.config,
                    to: *withdrawer,
                    amount: quote.amount_x(),
                },
                LedgerOp::Transfer {
                    asset: *state.mint_y(),
                    from: accounts.config,
                    to: *withdrawer,
                    amount: quote.amount_y(),
                },
            ];
            Ok((quote, ops))
        })?;
        debug!(
            pool_id = pool.id,
            withdrawer = %withdrawer,
            shares = quote.shares().get(),
            amount_x = quote.amount_x().get(),
            amount_y = quote.amount_y().get(),
            "withdraw"
        );
        Ok(quote)
    }

    // -- swap ---------------------------------------------------------------

    /// Sells `amount_in` of one asset to the pool for the other.
    ///
    /// The swapper's input account must be open and funded; their output
    /// account is opened if missing.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    /// - [`AmmError::AddressMismatch`] on a wrong account in `pool`.
    /// - [`AmmError::PoolLocked`] if the pool is paused.
    /// - [`AmmError::ReservedPrincipal`] if `swapper` is one of the pool's
    ///   own accounts.
    /// - [`AmmError::ZeroLiquidity`] if either reserve is empty.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero or buys
    ///   nothing.
    /// - [`AmmError::SlippageExceeded`] if the output is below `min_out`.
    /// - [`AmmError::Ledger`] if a transfer is rejected.
    pub fn swap(
        &self,
        pool: &PoolRef,
        swapper: &Principal,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapQuote> {
        let quote = self.with_pool(pool, |state, accounts| {
            state.assert_not_locked()?;
            reject_pool_principal(pool.id, swapper, accounts)?;
            let quote = state
                .swap(direction, amount_in, min_out)
                .map_err(|e| log_slippage(pool.id, "swap", e))?;
            let (mint_in, mint_out) = state.mints_for(direction);
            let ops = vec![
                LedgerOp::EnsureOpen {
                    asset: *mint_out,
                    owner: *swapper,
                },
                LedgerOp::Transfer {
                    asset: *mint_in,
                    from: *swapper,
                    to: accounts.config,
                    amount: quote.amount_in(),
                },
                LedgerOp::Transfer {
                    asset: *mint_out,
                    from: accounts.config,
                    to: *swapper,
                    amount: quote.amount_out(),
                },
            ];
            Ok((quote, ops))
        })?;
        debug!(pool_id = pool.id, swapper = %swapper, quote = %quote, "swap");
        Ok(quote)
    }

    /// Prices a swap against the current reserves without executing it.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`], [`AmmError::PoolLocked`], and the math
    /// errors of [`swap`](Self::swap) except slippage.
    pub fn quote_swap(
        &self,
        id: u64,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        let state = self.pool_config(id)?;
        state.assert_not_locked()?;
        state.quote_swap(direction, amount_in)
    }

    // -- lock ---------------------------------------------------------------

    /// Pauses deposit, swap and withdraw on the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] / [`AmmError::AddressMismatch`] as for
    ///   every operation.
    /// - [`AmmError::Unauthorized`] unless `caller` is the pool authority.
    /// - [`AmmError::PoolLocked`] if the pool is already paused.
    pub fn lock(&self, pool: &PoolRef, caller: &Principal) -> Result<()> {
        self.with_pool(pool, |state, _| {
            state.lock(caller)?;
            Ok(((), Vec::new()))
        })?;
        info!(pool_id = pool.id, caller = %caller, "pool locked");
        Ok(())
    }

    /// Resumes a paused pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] / [`AmmError::AddressMismatch`] as for
    ///   every operation.
    /// - [`AmmError::Unauthorized`] unless `caller` is the pool authority.
    /// - [`AmmError::PoolNotLocked`] if the pool is not paused.
    pub fn unlock(&self, pool: &PoolRef, caller: &Principal) -> Result<()> {
        self.with_pool(pool, |state, _| {
            state.unlock(caller)?;
            Ok(((), Vec::new()))
        })?;
        info!(pool_id = pool.id, caller = %caller, "pool unlocked");
        Ok(())
    }

    // -- read accessors -----------------------------------------------------

    /// Current reserves, supply, fee and lock flag of pool `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if the pool does not exist.
    pub fn pool_state(&self, id: u64) -> Result<PoolSnapshot> {
        self.read(id, PoolConfig::snapshot)
    }

    /// Full stored record of pool `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if the pool does not exist.
    pub fn pool_config(&self, id: u64) -> Result<PoolConfig> {
        self.read(id, PoolConfig::clone)
    }

    /// Lifecycle state of pool id `id`.
    #[must_use]
    pub fn pool_status(&self, id: u64) -> PoolStatus {
        match self.read(id, |_| ()) {
            Ok(()) => PoolStatus::Active,
            Err(_) => PoolStatus::Uninitialized,
        }
    }

    /// Ids of every initialized pool, ascending.
    #[must_use]
    pub fn pool_ids(&self) -> Vec<u64> {
        self.pools.ids()
    }

    /// Checks the stored reserves and LP supply of pool `id` against the
    /// ledger's vault balances and LP mint supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    /// - [`AmmError::ReserveMismatch`] naming the first drifted quantity.
    pub fn reconcile(&self, id: u64) -> Result<()> {
        let slot = self.pools.get(id).ok_or(AmmError::PoolNotFound(id))?;
        let guard = slot.lock();
        let state = guard.as_ref().ok_or(AmmError::PoolNotFound(id))?;
        let accounts = self.addresses(id, state.mint_x(), state.mint_y());

        let checks = [
            (
                "reserve_x",
                state.reserve_x(),
                self.ledger.balance(state.mint_x(), &accounts.config),
            ),
            (
                "reserve_y",
                state.reserve_y(),
                self.ledger.balance(state.mint_y(), &accounts.config),
            ),
            (
                "lp_supply",
                state.lp_supply(),
                self.ledger.supply(&accounts.lp_mint),
            ),
        ];
        for (what, recorded, actual) in checks {
            let actual = actual.unwrap_or(Amount::ZERO);
            if recorded != actual {
                warn!(
                    pool_id = id,
                    what,
                    recorded = recorded.get(),
                    actual = actual.get(),
                    "ledger drift"
                );
                return Err(AmmError::ReserveMismatch {
                    what,
                    recorded: recorded.get(),
                    actual: actual.get(),
                });
            }
        }
        Ok(())
    }

    // -- internals ----------------------------------------------------------

    fn read<T>(&self, id: u64, f: impl FnOnce(&PoolConfig) -> T) -> Result<T> {
        let slot = self.pools.get(id).ok_or(AmmError::PoolNotFound(id))?;
        let guard = slot.lock();
        guard.as_ref().map(f).ok_or(AmmError::PoolNotFound(id))
    }

    /// Runs `op` on a copy of the pool's record under the pool lock,
    /// executes the ledger batch it returns and then stores the copy.
    fn with_pool<T>(
        &self,
        pool: &PoolRef,
        op: impl FnOnce(&mut PoolConfig, &PoolAddresses) -> Result<(T, Vec<LedgerOp>)>,
    ) -> Result<T> {
        let slot = self
            .pools
            .get(pool.id)
            .ok_or(AmmError::PoolNotFound(pool.id))?;
        let mut guard = slot.lock();
        let current = guard.as_ref().ok_or(AmmError::PoolNotFound(pool.id))?;

        let derived = self.addresses(pool.id, current.mint_x(), current.mint_y());
        verify_accounts(pool.id, &derived, &pool.accounts)?;

        let mut next = current.clone();
        let (output, ops) = op(&mut next, &derived)?;
        if !ops.is_empty() {
            self.ledger.execute(&ops)?;
        }
        *guard = Some(next);
        Ok(output)
    }
}

fn verify_accounts(id: u64, derived: &PoolAddresses, supplied: &PoolAddresses) -> Result<()> {
    derived.verify(supplied).map_err(|e| {
        warn!(pool_id = id, error = %e, "rejected pool accounts");
        e
    })
}

/// The pool's config and vault addresses never trade against the pool.
fn reject_pool_principal(id: u64, principal: &Principal, accounts: &PoolAddresses) -> Result<()> {
    let reserved = [
        ("config", &accounts.config),
        ("vault_x", &accounts.vault_x),
        ("vault_y", &accounts.vault_y),
    ];
    for (name, address) in reserved {
        if principal == address {
            warn!(pool_id = id, account = name, "pool account used as principal");
            return Err(AmmError::ReservedPrincipal(name));
        }
    }
    Ok(())
}

fn log_slippage(id: u64, operation: &'static str, err: AmmError) -> AmmError {
    if let AmmError::SlippageExceeded(bound) = &err {
        warn!(pool_id = id, operation, bound = *bound, "slippage bound rejected request");
    }
    err
}
