//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait lifts the `Option`-returning checked
//! methods of [`Amount`] into [`Result<Self, AmmError>`] with a context
//! string, so every arithmetic step can be chained with `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_pool::domain::{Amount, Rounding};
//! use hydra_pool::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(100_000);
//! let grown = reserve.safe_add(&Amount::new(15_000), "reserve_x").expect("fits");
//! assert_eq!(grown, Amount::new(115_000));
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics** — all error conditions produce `Err`.
/// - **No saturation** — overflow and underflow both surface as
///   [`AmmError::Overflow`] carrying the caller's context.
/// - Division by zero surfaces as [`AmmError::DivisionByZero`].
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked `self * numerator / denominator` with a wide intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds the representable
    ///   range.
    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
        context: &'static str,
    ) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Overflow(context))
    }

    fn safe_mul_div(
        &self,
        numerator: &Self,
        denominator: &Self,
        rounding: Rounding,
        context: &'static str,
    ) -> Result<Self, AmmError> {
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        self.checked_mul_div(*numerator, *denominator, rounding)
            .ok_or(AmmError::Overflow(context))
    }
}
