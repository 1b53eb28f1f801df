//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] describe the pool math and are
//! implemented by [`PoolConfig`](crate::state::PoolConfig).
//! [`VaultLedger`] is the seam to the token ledger that holds the actual
//! balances.

mod liquidity_pool;
mod swap_pool;
mod vault_ledger;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use vault_ledger::VaultLedger;
