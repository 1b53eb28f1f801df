//! Deposit and withdraw math for [`PoolConfig`].
//!
//! # Deposit (mint `shares`)
//!
//! - empty pool: `amount_x = amount_y = shares`
//! - otherwise: `amount = ceil(shares × reserve / lp_supply)` per side
//!
//! # Withdraw (burn `shares`)
//!
//! - `amount = floor(shares × reserve / lp_supply)` per side
//!
//! Rounding up on the way in and down on the way out means a deposit
//! followed by a withdrawal of the same shares never returns more than
//! was paid.

use crate::domain::{Amount, DepositQuote, Rounding, WithdrawQuote};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::state::PoolConfig;
use crate::traits::LiquidityPool;

impl LiquidityPool for PoolConfig {
    fn quote_deposit(&self, shares: Amount) -> Result<DepositQuote, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("deposit shares must be non-zero"));
        }
        if self.lp_supply.is_zero() {
            return Ok(DepositQuote::new(shares, shares, shares));
        }
        let amount_x =
            shares.safe_mul_div(&self.reserve_x, &self.lp_supply, Rounding::Up, "deposit amount_x")?;
        let amount_y =
            shares.safe_mul_div(&self.reserve_y, &self.lp_supply, Rounding::Up, "deposit amount_y")?;
        Ok(DepositQuote::new(shares, amount_x, amount_y))
    }

    fn deposit(
        &mut self,
        shares: Amount,
        max_x: Amount,
        max_y: Amount,
    ) -> Result<DepositQuote, AmmError> {
        let quote = self.quote_deposit(shares)?;
        if quote.amount_x() > max_x {
            return Err(AmmError::SlippageExceeded("deposit amount_x above max_x"));
        }
        if quote.amount_y() > max_y {
            return Err(AmmError::SlippageExceeded("deposit amount_y above max_y"));
        }

        let reserve_x = self.reserve_x.safe_add(&quote.amount_x(), "reserve_x")?;
        let reserve_y = self.reserve_y.safe_add(&quote.amount_y(), "reserve_y")?;
        let lp_supply = self.lp_supply.safe_add(&shares, "lp_supply")?;

        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;
        self.lp_supply = lp_supply;
        Ok(quote)
    }

    fn quote_withdraw(&self, shares: Amount) -> Result<WithdrawQuote, AmmError> {
        if shares.is_zero() || shares > self.lp_supply {
            return Err(AmmError::InsufficientLiquidity);
        }
        let amount_x = shares.safe_mul_div(
            &self.reserve_x,
            &self.lp_supply,
            Rounding::Down,
            "withdraw amount_x",
        )?;
        let amount_y = shares.safe_mul_div(
            &self.reserve_y,
            &self.lp_supply,
            Rounding::Down,
            "withdraw amount_y",
        )?;
        Ok(WithdrawQuote::new(shares, amount_x, amount_y))
    }

    fn withdraw(
        &mut self,
        shares: Amount,
        min_x: Amount,
        min_y: Amount,
    ) -> Result<WithdrawQuote, AmmError> {
        let quote = self.quote_withdraw(shares)?;
        if quote.amount_x() < min_x {
            return Err(AmmError::SlippageExceeded("withdraw amount_x below min_x"));
        }
        if quote.amount_y() < min_y {
            return Err(AmmError::SlippageExceeded("withdraw amount_y below min_y"));
        }

        let reserve_x = self.reserve_x.safe_sub(&quote.amount_x(), "reserve_x")?;
        let reserve_y = self.reserve_y.safe_sub(&quote.amount_y(), "reserve_y")?;
        let lp_supply = self.lp_supply.safe_sub(&shares, "lp_supply")?;

        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;
        self.lp_supply = lp_supply;
        Ok(quote)
    }

    fn total_shares(&self) -> Amount {
        self.lp_supply
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolParams;
    use crate::domain::{Address, BasisPoints};

    fn make_pool(reserve_x: u64, reserve_y: u64, lp_supply: u64) -> PoolConfig {
        let Ok(params) = PoolParams::new(
            1,
            BasisPoints::new(1_000),
            Address::from_label(b"authority"),
            Address::from_label(b"mint-x"),
            Address::from_label(b"mint-y"),
        ) else {
            panic!("valid params");
        };
        let mut pool = PoolConfig::new(&params);
        pool.reserve_x = Amount::new(reserve_x);
        pool.reserve_y = Amount::new(reserve_y);
        pool.lp_supply = Amount::new(lp_supply);
        pool
    }

    #[test]
    fn first_deposit_is_one_to_one() {
        let pool = make_pool(0, 0, 0);
        let Ok(q) = pool.quote_deposit(Amount::new(100_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_x(), Amount::new(100_000));
        assert_eq!(q.amount_y(), Amount::new(100_000));
        assert_eq!(q.shares(), Amount::new(100_000));
    }

    #[test]
    fn first_deposit_slippage() {
        let mut pool = make_pool(0, 0, 0);
        let r = pool.deposit(Amount::new(100_000), Amount::new(80_000), Amount::new(80_000));
        let Err(AmmError::SlippageExceeded(_)) = r else {
            panic!("expected SlippageExceeded");
        };
        assert_eq!(pool.lp_supply(), Amount::ZERO);
    }

    #[test]
    fn zero_shares_rejected() {
        let mut pool = make_pool(0, 0, 0);
        let r = pool.deposit(Amount::ZERO, Amount::MAX, Amount::MAX);
        let Err(AmmError::InvalidAmount(_)) = r else {
            panic!("expected InvalidAmount");
        };
    }

    #[test]
    fn later_deposit_rounds_up() {
        // 1 share of a (10, 3) / 4 pool: ceil(10/4)=3, ceil(3/4)=1
        let mut pool = make_pool(10, 3, 4);
        let Ok(q) = pool.deposit(Amount::new(1), Amount::MAX, Amount::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_x(), Amount::new(3));
        assert_eq!(q.amount_y(), Amount::new(1));
        assert_eq!(pool.reserve_x(), Amount::new(13));
        assert_eq!(pool.reserve_y(), Amount::new(4));
        assert_eq!(pool.total_shares(), Amount::new(5));
    }

    #[test]
    fn max_bound_is_inclusive() {
        let mut pool = make_pool(10, 3, 4);
        let r = pool.deposit(Amount::new(1), Amount::new(3), Amount::new(1));
        assert!(r.is_ok());
    }

    #[test]
    fn withdraw_rounds_down() {
        let mut pool = make_pool(10, 3, 4);
        let Ok(q) = pool.withdraw(Amount::new(1), Amount::ZERO, Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_x(), Amount::new(2));
        assert_eq!(q.amount_y(), Amount::ZERO);
        assert_eq!(pool.reserve_x(), Amount::new(8));
        assert_eq!(pool.reserve_y(), Amount::new(3));
        assert_eq!(pool.lp_supply(), Amount::new(3));
    }

    #[test]
    fn full_withdraw_empties_pool() {
        let mut pool = make_pool(115_000, 88_106, 100_000);
        let Ok(q) = pool.withdraw(Amount::new(100_000), Amount::new(60_000), Amount::new(60_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_x(), Amount::new(115_000));
        assert_eq!(q.amount_y(), Amount::new(88_106));
        assert!(pool.snapshot().is_empty());
        assert_eq!(pool.reserve_x(), Amount::ZERO);
        assert_eq!(pool.reserve_y(), Amount::ZERO);
    }

    #[test]
    fn emptied_pool_can_be_reseeded() {
        let mut pool = make_pool(115_000, 88_106, 100_000);
        assert!(pool
            .withdraw(Amount::new(100_000), Amount::ZERO, Amount::ZERO)
            .is_ok());
        let Ok(q) = pool.deposit(Amount::new(50), Amount::MAX, Amount::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_x(), Amount::new(50));
        assert_eq!(pool.lp_supply(), Amount::new(50));
    }

    #[test]
    fn withdraw_bounds() {
        let mut pool = make_pool(100, 100, 100);
        assert_eq!(
            pool.withdraw(Amount::ZERO, Amount::ZERO, Amount::ZERO),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            pool.withdraw(Amount::new(101), Amount::ZERO, Amount::ZERO),
            Err(AmmError::InsufficientLiquidity)
        );
        let Err(AmmError::SlippageExceeded(_)) =
            pool.withdraw(Amount::new(50), Amount::new(51), Amount::ZERO)
        else {
            panic!("expected SlippageExceeded");
        };
        assert_eq!(pool.lp_supply(), Amount::new(100));
    }

    #[test]
    fn withdraw_on_empty_pool() {
        let mut pool = make_pool(0, 0, 0);
        assert_eq!(
            pool.withdraw(Amount::new(1), Amount::ZERO, Amount::ZERO),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn deposit_overflow_leaves_pool_untouched() {
        let mut pool = make_pool(u64::MAX - 1, 1, 1);
        let r = pool.deposit(Amount::new(1), Amount::MAX, Amount::MAX);
        assert_eq!(r, Err(AmmError::Overflow("reserve_x")));
        assert_eq!(pool.reserve_y(), Amount::new(1));
        assert_eq!(pool.lp_supply(), Amount::new(1));
    }
}
