//! Computed outcomes of liquidity and swap operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, SwapDirection};

/// Token amounts moved by a deposit.
///
/// `amount_x` / `amount_y` are what the depositor pays in; `shares` is what
/// is minted to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositQuote {
    shares: Amount,
    amount_x: Amount,
    amount_y: Amount,
}

impl DepositQuote {
    pub(crate) const fn new(shares: Amount, amount_x: Amount, amount_y: Amount) -> Self {
        Self {
            shares,
            amount_x,
            amount_y,
        }
    }

    /// LP shares minted to the depositor.
    pub const fn shares(&self) -> Amount {
        self.shares
    }

    /// Asset X paid into the pool.
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Asset Y paid into the pool.
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }
}

/// Token amounts moved by a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawQuote {
    shares: Amount,
    amount_x: Amount,
    amount_y: Amount,
}

impl WithdrawQuote {
    pub(crate) const fn new(shares: Amount, amount_x: Amount, amount_y: Amount) -> Self {
        Self {
            shares,
            amount_x,
            amount_y,
        }
    }

    /// LP shares burned.
    pub const fn shares(&self) -> Amount {
        self.shares
    }

    /// Asset X paid out to the withdrawer.
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Asset Y paid out to the withdrawer.
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }
}

/// The outcome of a swap.
///
/// # Invariants
///
/// - `amount_in = amount_in_after_fee + fee`
/// - `amount_out < reserve_out` of the pool the quote was taken against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    amount_in_after_fee: Amount,
    amount_out: Amount,
}

impl SwapQuote {
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_in_after_fee: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_in_after_fee,
            amount_out,
        }
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Full input debited from the swapper, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Input that entered the pricing formula.
    pub const fn amount_in_after_fee(&self) -> Amount {
        self.amount_in_after_fee
    }

    /// Fee retained by the pool, `amount_in - amount_in_after_fee`.
    pub const fn fee(&self) -> Amount {
        Amount::new(self.amount_in.get().saturating_sub(self.amount_in_after_fee.get()))
    }

    /// Output credited to the swapper.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in={} out={} fee={}",
            self.direction,
            self.amount_in,
            self.amount_out,
            self.fee()
        )
    }
}
