//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error aborts the operation that produced it with no
//! observable state change; the engine never retries on its own.

use thiserror::Error;

use crate::domain::Address;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors raised by the token ledger collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The referenced mint does not exist.
    #[error("mint {0} not found")]
    MintNotFound(Address),

    /// A mint already exists at this address.
    #[error("mint {0} already exists")]
    MintExists(Address),

    /// No account is open for this `(asset, owner)` pair.
    #[error("no {asset} account for owner {owner}")]
    AccountNotFound {
        /// Asset (mint) of the account.
        asset: Address,
        /// Owner of the account.
        owner: Address,
    },

    /// An account is already open for this `(asset, owner)` pair.
    #[error("{asset} account for owner {owner} already exists")]
    AccountExists {
        /// Asset (mint) of the account.
        asset: Address,
        /// Owner of the account.
        owner: Address,
    },

    /// The debited account holds less than the requested amount.
    #[error("insufficient {asset} funds for {owner}: balance {balance}, required {required}")]
    InsufficientFunds {
        /// Asset (mint) of the account.
        asset: Address,
        /// Owner of the account.
        owner: Address,
        /// Balance at the time of the debit.
        balance: u64,
        /// Amount requested.
        required: u64,
    },

    /// The signer of a mint instruction is not the mint authority.
    #[error("{signer} is not the mint authority of {mint}")]
    UnauthorizedMint {
        /// Mint being minted.
        mint: Address,
        /// Principal that attempted the mint.
        signer: Address,
    },

    /// A balance or supply update would exceed `u64::MAX`.
    #[error("ledger arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Coarse classification of an [`AmmError`], used by callers to decide
/// whether to adjust parameters and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request: bad fee, equal mints, zero amount, bad address text.
    Validation,
    /// A caller-supplied slippage bound was violated.
    Slippage,
    /// Burn exceeds supply or holder balance.
    InsufficientLiquidity,
    /// Swap against an empty reserve.
    ZeroLiquidity,
    /// An arithmetic step left the representable range.
    Overflow,
    /// The pool already exists.
    AlreadyInitialized,
    /// A supplied account address differs from the derived one.
    AddressMismatch,
    /// The pool does not exist.
    NotFound,
    /// The pool is locked, or the caller lacks permission.
    Access,
    /// Stored state disagrees with the ledger.
    Inconsistent,
    /// Engine configuration could not be loaded.
    Config,
    /// The token ledger rejected a leg of the operation.
    Ledger,
}

/// Unified error enum for every operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Fee outside `[0, 10_000)` or above the engine cap.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Both sides of the pool use the same mint.
    #[error("pool mints must differ")]
    InvalidMints,

    /// A zero or otherwise unusable amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A caller-supplied min/max bound was violated.
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// Burn request exceeds the LP supply or the holder's LP balance.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Swap attempted while a reserve is zero.
    #[error("pool has zero liquidity")]
    ZeroLiquidity,

    /// Arithmetic overflow or underflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A pool with this id already exists.
    #[error("pool {0} is already initialized")]
    AlreadyInitialized(u64),

    /// A supplied account address differs from the derived one.
    #[error("address mismatch for {0} account")]
    AddressMismatch(&'static str),

    /// No pool exists with this id.
    #[error("pool {0} not found")]
    PoolNotFound(u64),

    /// The pool is locked.
    #[error("pool is locked")]
    PoolLocked,

    /// Unlock requested on a pool that is not locked.
    #[error("pool is not locked")]
    PoolNotLocked,

    /// Caller is not the pool authority.
    #[error("caller is not the pool authority")]
    Unauthorized,

    /// A pool's own config or vault address was named as the trading
    /// principal.
    #[error("pool {0} account cannot act as a principal")]
    ReservedPrincipal(&'static str),

    /// Stored reserves or supply disagree with the ledger.
    #[error("{what} mismatch: recorded {recorded}, ledger {actual}")]
    ReserveMismatch {
        /// Which quantity drifted.
        what: &'static str,
        /// Value recorded in the pool config.
        recorded: u64,
        /// Value observed in the ledger.
        actual: u64,
    },

    /// Address text could not be decoded.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Engine configuration could not be parsed or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The token ledger rejected a leg of the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl AmmError {
    /// Returns the coarse [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFee(_)
            | Self::InvalidMints
            | Self::InvalidAmount(_)
            | Self::InvalidAddress(_) => ErrorKind::Validation,
            Self::SlippageExceeded(_) => ErrorKind::Slippage,
            Self::InsufficientLiquidity => ErrorKind::InsufficientLiquidity,
            Self::ZeroLiquidity => ErrorKind::ZeroLiquidity,
            Self::Overflow(_) | Self::DivisionByZero => ErrorKind::Overflow,
            Self::AlreadyInitialized(_) => ErrorKind::AlreadyInitialized,
            Self::AddressMismatch(_) => ErrorKind::AddressMismatch,
            Self::PoolNotFound(_) => ErrorKind::NotFound,
            Self::PoolLocked
            | Self::PoolNotLocked
            | Self::Unauthorized
            | Self::ReservedPrincipal(_) => ErrorKind::Access,
            Self::ReserveMismatch { .. } => ErrorKind::Inconsistent,
            Self::Config(_) => ErrorKind::Config,
            Self::Ledger(_) => ErrorKind::Ledger,
        }
    }
}
