//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_pool::prelude::*;
//! ```

pub use crate::domain::{
    Address, Amount, BasisPoints, DepositQuote, PoolSnapshot, Principal, Rounding, SwapDirection,
    SwapQuote, WithdrawQuote,
};

pub use crate::traits::{LiquidityPool, SwapPool, VaultLedger};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{EngineConfig, PoolParams};

pub use crate::derivation::PoolAddresses;

pub use crate::engine::{AmmEngine, PoolRef};

pub use crate::state::{PoolConfig, PoolStatus};

pub use crate::error::{AmmError, ErrorKind, LedgerError, Result};

pub use crate::ledger::LedgerOp;
#[cfg(feature = "memory-ledger")]
pub use crate::ledger::MemoryLedger;
