//! # Hydra Pool
//!
//! Constant-product liquidity pool engine: two-asset pools priced by
//! `x · y = k`, deterministic pool addressing, and atomic settlement
//! through a pluggable token ledger.
//!
//! Four caller-driven operations cover the pool lifecycle:
//!
//! - **initialize** — create a pool, its LP mint and both vaults
//! - **deposit** — mint LP shares against a proportional payment
//! - **swap** — trade one asset for the other, fee retained by the pool
//! - **withdraw** — burn LP shares for their share of both reserves
//!
//! The pool authority can additionally **lock** and **unlock** a pool.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `memory-ledger` | yes | In-memory [`VaultLedger`](traits::VaultLedger) implementation |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pool::prelude::*;
//!
//! // 1. A ledger with two assets and a funded trader
//! let ledger = MemoryLedger::new();
//! let issuer = Address::from_label(b"issuer");
//! let mint_x = Address::from_label(b"usdc");
//! let mint_y = Address::from_label(b"weth");
//! let alice = Address::from_label(b"alice");
//! for mint in [mint_x, mint_y] {
//!     ledger.create_mint(mint, issuer, 6).expect("mint");
//!     ledger.open_account(mint, alice).expect("account");
//!     ledger.mint(mint, alice, Amount::new(1_000_000), issuer).expect("funded");
//! }
//!
//! // 2. Create a 0.30% pool
//! let engine = AmmEngine::new(EngineConfig::default(), ledger).expect("engine");
//! let params = PoolParams::new(1, BasisPoints::new(30), alice, mint_x, mint_y).expect("params");
//! let pool = engine.pool_ref(1, &mint_x, &mint_y);
//! engine.initialize(&params, &pool).expect("initialized");
//!
//! // 3. Seed it and trade against it
//! engine
//!     .deposit(&pool, &alice, Amount::new(100_000), Amount::MAX, Amount::MAX)
//!     .expect("deposit");
//! let quote = engine
//!     .swap(&pool, &alice, SwapDirection::XToY, Amount::new(10_000), Amount::new(1))
//!     .expect("swap");
//!
//! assert!(quote.amount_out().get() > 0);
//! assert!(quote.fee().get() > 0);
//! assert_eq!(engine.reconcile(1), Ok(()));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  PoolRef + principal + amounts
//! └──────┬──────┘
//!        │ initialize / deposit / swap / withdraw
//!        ▼
//! ┌─────────────┐
//! │  AmmEngine   │  per-pool lock, address checks, atomic commit
//! └──────┬──────┘
//!        │ SwapPool + LiquidityPool on a copy of PoolConfig
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  checked constant-product math
//! └──────┬──────┘
//!        │ one LedgerOp batch
//!        ▼
//! ┌─────────────┐
//! │ VaultLedger  │  vault, LP mint and user balances
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), quotes |
//! | [`derivation`] | Deterministic pool account addresses: [`PoolAddresses`](derivation::PoolAddresses) |
//! | [`config`] | [`EngineConfig`](config::EngineConfig) (TOML) and [`PoolParams`](config::PoolParams) |
//! | [`state`] | The stored [`PoolConfig`](state::PoolConfig) record |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`VaultLedger`](traits::VaultLedger) |
//! | [`pools`] | Deposit, withdraw and swap math |
//! | [`ledger`] | [`LedgerOp`](ledger::LedgerOp) and the in-memory ledger |
//! | [`engine`] | [`AmmEngine`](engine::AmmEngine) orchestration |
//! | [`math`] | Checked arithmetic |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod config;
pub mod derivation;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod state;
pub mod traits;
