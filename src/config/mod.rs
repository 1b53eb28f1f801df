//! Engine and pool configuration.
//!
//! [`EngineConfig`] holds the settings shared by every pool of an engine
//! and can be loaded from TOML. [`PoolParams`] is the validated blueprint
//! handed to [`AmmEngine::initialize`](crate::engine::AmmEngine::initialize).

mod engine;
mod pool_params;

pub use engine::{EngineConfig, DEFAULT_LP_DECIMALS, DEFAULT_PROGRAM_ID};
pub use pool_params::PoolParams;
