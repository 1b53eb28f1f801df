//! Direction of a swap through a two-asset pool.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the pool is sold.
///
/// On the wire the direction is a single flag `is_x`: `true` sells X for
/// Y, `false` sells Y for X.
///
/// # Examples
///
/// ```
/// use hydra_pool::domain::SwapDirection;
///
/// assert_eq!(SwapDirection::from_is_x(true), SwapDirection::XToY);
/// assert_eq!(SwapDirection::XToY.reverse(), SwapDirection::YToX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset X, receive asset Y.
    XToY,
    /// Sell asset Y, receive asset X.
    YToX,
}

impl SwapDirection {
    /// Decodes the wire flag.
    #[must_use]
    pub const fn from_is_x(is_x: bool) -> Self {
        if is_x {
            Self::XToY
        } else {
            Self::YToX
        }
    }

    /// Encodes the wire flag.
    #[must_use]
    pub const fn is_x(self) -> bool {
        matches!(self, Self::XToY)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::XToY => Self::YToX,
            Self::YToX => Self::XToY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => f.write_str("X->Y"),
            Self::YToX => f.write_str("Y->X"),
        }
    }
}
