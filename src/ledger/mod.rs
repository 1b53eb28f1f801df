//! Token ledger instructions and the in-memory reference ledger.
//!
//! [`LedgerOp`] is the unit of work of a
//! [`VaultLedger`](crate::traits::VaultLedger) batch. With the
//! `memory-ledger` feature (on by default) this module also provides
//! [`MemoryLedger`].

#[cfg(feature = "memory-ledger")]
mod memory;
mod op;

#[cfg(feature = "memory-ledger")]
pub use memory::MemoryLedger;
pub use op::LedgerOp;
