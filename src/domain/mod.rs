//! Fundamental domain value types used throughout the pool engine.
//!
//! Addresses, amounts, fee rates, swap directions and the quotes that
//! describe the outcome of each operation. All types are small `Copy`
//! newtypes or records with validated or checked operations.

mod address;
mod amount;
mod basis_points;
mod pool_snapshot;
mod quote;
mod rounding;
mod swap_direction;

pub use address::Address;
pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use pool_snapshot::PoolSnapshot;
pub use quote::{DepositQuote, SwapQuote, WithdrawQuote};
pub use rounding::Rounding;
pub use swap_direction::SwapDirection;

/// A principal (caller identity) verified by the execution environment.
pub type Principal = Address;
