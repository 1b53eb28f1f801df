//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] turns every overflow, underflow and division by
//! zero into an [`AmmError`](crate::error::AmmError) so the math in
//! [`pools`](crate::pools) can be written as a chain of `?` steps.

mod checked;

pub use checked::CheckedArithmetic;
