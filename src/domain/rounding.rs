//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the crate.
///
/// Deposits round the required input **up** and withdrawals round the
/// payout **down**, so each liquidity action leaves at most one unit of
/// dust in the pool's favour. Swaps truncate.
///
/// # Examples
///
/// ```
/// use hydra_pool::domain::Rounding;
///
/// assert_eq!(Rounding::Up.div(7, 2), Some(4));
/// assert_eq!(Rounding::Down.div(7, 2), Some(3));
/// assert_eq!(Rounding::Down.div(7, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Divides `numerator` by `denominator` in this direction.
    ///
    /// Returns `None` if `denominator` is zero. Never overflows: the
    /// ceiling is computed as `q + (r != 0)`.
    #[must_use]
    pub const fn div(self, numerator: u128, denominator: u128) -> Option<u128> {
        if denominator == 0 {
            return None;
        }
        let q = numerator / denominator;
        match self {
            Self::Down => Some(q),
            Self::Up => {
                if numerator % denominator == 0 {
                    Some(q)
                } else {
                    // q < numerator here, so q + 1 cannot overflow
                    Some(q + 1)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_ignores_direction() {
        assert_eq!(Rounding::Up.div(100, 10), Some(10));
        assert_eq!(Rounding::Down.div(100, 10), Some(10));
    }

    #[test]
    fn remainder_rounds_by_direction() {
        assert_eq!(Rounding::Up.div(101, 10), Some(11));
        assert_eq!(Rounding::Down.div(101, 10), Some(10));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(Rounding::Up.div(0, 3), Some(0));
    }

    #[test]
    fn zero_denominator_is_none() {
        assert_eq!(Rounding::Up.div(1, 0), None);
        assert_eq!(Rounding::Down.div(1, 0), None);
    }

    #[test]
    fn ceiling_at_u128_max_does_not_overflow() {
        assert_eq!(Rounding::Up.div(u128::MAX, 2), Some(u128::MAX / 2 + 1));
    }
}
