//! Engine-wide settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Address, BasisPoints};
use crate::error::{AmmError, Result};

/// Program id used when none is configured.
pub const DEFAULT_PROGRAM_ID: Address = Address::from_label(b"hydra-pool");

/// Decimals of every LP mint created by the engine.
pub const DEFAULT_LP_DECIMALS: u8 = 6;

fn default_program_id() -> Address {
    DEFAULT_PROGRAM_ID
}

const fn default_lp_decimals() -> u8 {
    DEFAULT_LP_DECIMALS
}

const fn default_max_fee_bps() -> BasisPoints {
    BasisPoints::MAX_FEE
}

/// Settings shared by every pool an [`AmmEngine`](crate::engine::AmmEngine)
/// manages.
///
/// Every field has a default, so a TOML document only needs to name the
/// values it overrides:
///
/// ```toml
/// program_id = "5Hjb..."
/// lp_decimals = 9
/// max_fee_bps = 500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Namespace of every derived config and LP mint address.
    #[serde(default = "default_program_id")]
    pub program_id: Address,

    /// Decimals of LP mints created at initialization.
    #[serde(default = "default_lp_decimals")]
    pub lp_decimals: u8,

    /// Highest fee a pool may be initialized with.
    #[serde(default = "default_max_fee_bps")]
    pub max_fee_bps: BasisPoints,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program_id: DEFAULT_PROGRAM_ID,
            lp_decimals: DEFAULT_LP_DECIMALS,
            max_fee_bps: BasisPoints::MAX_FEE,
        }
    }
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Config`] if `max_fee_bps` is 10 000 or more.
    pub fn new(program_id: Address, lp_decimals: u8, max_fee_bps: BasisPoints) -> Result<Self> {
        let config = Self {
            program_id,
            lp_decimals,
            max_fee_bps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Config`] on malformed TOML, an unknown key, a bad
    /// address, or a value rejected by [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| AmmError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Config`] if the file cannot be read, or any error
    /// of [`from_toml_str`](Self::from_toml_str).
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| AmmError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading engine config");
        Self::from_toml_str(&source)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Config`] if `max_fee_bps` is 10 000 or more.
    pub fn validate(&self) -> Result<()> {
        if !self.max_fee_bps.is_valid_fee() {
            return Err(AmmError::Config(format!(
                "max_fee_bps must be below 10000, got {}",
                self.max_fee_bps.get()
            )));
        }
        Ok(())
    }
}
