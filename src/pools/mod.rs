//! Pool math: [`LiquidityPool`](crate::traits::LiquidityPool) and
//! [`SwapPool`](crate::traits::SwapPool) for
//! [`PoolConfig`](crate::state::PoolConfig).
//!
//! | Module | Operations | Rounding |
//! |--------|------------|----------|
//! | `liquidity` | deposit, withdraw | up in, down out |
//! | `swap` | swap | down |
//!
//! Every method either returns the quote and updates the reserves, or
//! returns an error and leaves the pool untouched.

mod liquidity;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
