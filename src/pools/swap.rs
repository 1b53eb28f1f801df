//! Constant-product swap math for [`PoolConfig`].
//!
//! # Swap Algorithm
//!
//! 1. `net_input = floor(amount_in × (10 000 − fee_bps) / 10 000)`
//! 2. `amount_out = floor(reserve_out × net_input / (reserve_in + net_input))`
//! 3. `reserve_in += amount_in` (fee stays in the pool)
//! 4. `reserve_out -= amount_out`
//!
//! # Invariant
//!
//! `k_after ≥ k_before`, strictly when `fee_bps > 0`: the pricing step
//! alone preserves `k` up to truncation, and the fee adds input without a
//! matching output.

use crate::domain::{Amount, BasisPoints, Rounding, SwapDirection, SwapQuote};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::state::PoolConfig;
use crate::traits::SwapPool;

impl SwapPool for PoolConfig {
    fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote, AmmError> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::ZeroLiquidity);
        }
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be non-zero"));
        }

        let net_input = self.fee_bps().apply_complement(amount_in, Rounding::Down)?;
        let denominator = reserve_in.safe_add(&net_input, "swap reserve_in + net_input")?;
        let amount_out =
            reserve_out.safe_mul_div(&net_input, &denominator, Rounding::Down, "swap amount_out")?;
        if amount_out.is_zero() {
            return Err(AmmError::InvalidAmount("swap output rounds to zero"));
        }
        Ok(SwapQuote::new(direction, amount_in, net_input, amount_out))
    }

    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_out: Amount,
    ) -> Result<SwapQuote, AmmError> {
        let quote = self.quote_swap(direction, amount_in)?;
        if quote.amount_out() < min_out {
            return Err(AmmError::SlippageExceeded("swap output below min_out"));
        }

        let (reserve_in, reserve_out) = self.reserves_for(direction);
        let reserve_in = reserve_in.safe_add(&amount_in, "reserve_in")?;
        let reserve_out = reserve_out.safe_sub(&quote.amount_out(), "reserve_out")?;

        match direction {
            SwapDirection::XToY => {
                self.reserve_x = reserve_in;
                self.reserve_y = reserve_out;
            }
            SwapDirection::YToX => {
                self.reserve_y = reserve_in;
                self.reserve_x = reserve_out;
            }
        }
        Ok(quote)
    }

    fn fee(&self) -> BasisPoints {
        self.fee_bps()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolParams;
    use crate::domain::Address;

    fn make_pool(fee: u16, reserve_x: u64, reserve_y: u64) -> PoolConfig {
        let Ok(params) = PoolParams::new(
            1,
            BasisPoints::new(fee),
            Address::from_label(b"authority"),
            Address::from_label(b"mint-x"),
            Address::from_label(b"mint-y"),
        ) else {
            panic!("valid params");
        };
        let mut pool = PoolConfig::new(&params);
        pool.reserve_x = Amount::new(reserve_x);
        pool.reserve_y = Amount::new(reserve_y);
        pool.lp_supply = Amount::new(reserve_x.min(reserve_y));
        pool
    }

    #[test]
    fn ten_percent_fee_swap() {
        let mut pool = make_pool(1_000, 100_000, 100_000);
        let Ok(q) = pool.swap(SwapDirection::XToY, Amount::new(15_000), Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_in_after_fee(), Amount::new(13_500));
        assert_eq!(q.amount_out(), Amount::new(11_894));
        assert_eq!(q.fee(), Amount::new(1_500));
        assert_eq!(pool.reserve_x(), Amount::new(115_000));
        assert_eq!(pool.reserve_y(), Amount::new(88_106));
    }

    #[test]
    fn reverse_direction_updates_other_side() {
        let mut pool = make_pool(1_000, 100_000, 100_000);
        let Ok(q) = pool.swap(SwapDirection::YToX, Amount::new(15_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out(), Amount::new(11_894));
        assert_eq!(pool.reserve_y(), Amount::new(115_000));
        assert_eq!(pool.reserve_x(), Amount::new(88_106));
    }

    #[test]
    fn quote_does_not_mutate() {
        let pool = make_pool(30, 1_000_000, 1_000_000);
        let before = pool.snapshot();
        let Ok(q) = pool.quote_swap(SwapDirection::XToY, Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert!(q.amount_out() > Amount::ZERO);
        assert_eq!(pool.snapshot(), before);
    }

    #[test]
    fn empty_reserve_is_zero_liquidity() {
        let pool = make_pool(30, 0, 0);
        assert_eq!(
            pool.quote_swap(SwapDirection::XToY, Amount::new(1)),
            Err(AmmError::ZeroLiquidity)
        );
        // liquidity is checked before the amount
        assert_eq!(
            pool.quote_swap(SwapDirection::XToY, Amount::ZERO),
            Err(AmmError::ZeroLiquidity)
        );
    }

    #[test]
    fn zero_input_rejected() {
        let pool = make_pool(30, 100, 100);
        let Err(AmmError::InvalidAmount(_)) = pool.quote_swap(SwapDirection::XToY, Amount::ZERO)
        else {
            panic!("expected InvalidAmount");
        };
    }

    #[test]
    fn dust_output_rejected() {
        let mut pool = make_pool(30, 1_000_000, 10);
        let r = pool.swap(SwapDirection::XToY, Amount::new(10), Amount::ZERO);
        assert_eq!(
            r,
            Err(AmmError::InvalidAmount("swap output rounds to zero"))
        );
        assert_eq!(pool.reserve_x(), Amount::new(1_000_000));
    }

    #[test]
    fn slippage_leaves_pool_untouched() {
        let mut pool = make_pool(1_000, 100_000, 100_000);
        let r = pool.swap(SwapDirection::XToY, Amount::new(15_000), Amount::new(11_895));
        assert_eq!(
            r,
            Err(AmmError::SlippageExceeded("swap output below min_out"))
        );
        assert_eq!(pool.reserve_x(), Amount::new(100_000));
        assert_eq!(pool.reserve_y(), Amount::new(100_000));
    }

    #[test]
    fn min_out_is_inclusive() {
        let mut pool = make_pool(1_000, 100_000, 100_000);
        assert!(pool
            .swap(SwapDirection::XToY, Amount::new(15_000), Amount::new(11_894))
            .is_ok());
    }

    #[test]
    fn output_never_drains_reserve() {
        let mut pool = make_pool(0, 1_000, 1_000);
        let Ok(q) = pool.swap(SwapDirection::XToY, Amount::new(u64::MAX - 1_000), Amount::ZERO)
        else {
            panic!("expected Ok");
        };
        assert!(q.amount_out() < Amount::new(1_000));
        assert!(pool.reserve_y() > Amount::ZERO);
    }

    #[test]
    fn reserve_overflow_surfaces() {
        let mut pool = make_pool(0, u64::MAX - 10, 1_000);
        let r = pool.swap(SwapDirection::XToY, Amount::new(100), Amount::ZERO);
        let Err(AmmError::Overflow(_)) = r else {
            panic!("expected Overflow");
        };
        assert_eq!(pool.reserve_y(), Amount::new(1_000));
    }

    #[test]
    fn zero_fee_keeps_k_non_decreasing() {
        let mut pool = make_pool(0, 1_000_000, 1_000_000);
        let k0 = pool.snapshot().k();
        assert!(pool
            .swap(SwapDirection::XToY, Amount::new(12_345), Amount::ZERO)
            .is_ok());
        assert!(pool.snapshot().k() >= k0);
        assert_eq!(pool.fee(), BasisPoints::ZERO);
    }
}
