//! Stored pool state.

mod pool_config;

pub use pool_config::{PoolConfig, PoolStatus};
