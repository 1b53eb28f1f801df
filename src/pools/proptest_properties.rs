//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant preservation** — `k` non-decreasing across swaps, strictly
//!    increasing with a non-zero fee.
//! 2. **Bounded output** — a swap never pays out the whole reserve.
//! 3. **Liquidity conservation** — deposit then withdraw never returns more
//!    than was paid.
//! 4. **Empty iff unissued** — reserves are both zero exactly when no
//!    shares are outstanding.
//! 5. **Quote consistency** — `quote_swap` predicts `swap` exactly.

use proptest::prelude::*;

use crate::config::PoolParams;
use crate::domain::{Address, Amount, BasisPoints, SwapDirection};
use crate::state::PoolConfig;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn empty_pool(fee: u16) -> PoolConfig {
    let Ok(params) = PoolParams::new(
        1,
        BasisPoints::new(fee),
        Address::from_label(b"authority"),
        Address::from_label(b"mint-x"),
        Address::from_label(b"mint-y"),
    ) else {
        panic!("valid params");
    };
    PoolConfig::new(&params)
}

/// Pool seeded by a first deposit of `seed` shares followed by a swap that
/// skews the reserves.
fn seeded_pool(fee: u16, seed: u64, skew: u64) -> PoolConfig {
    let mut pool = empty_pool(fee);
    let Ok(_) = pool.deposit(Amount::new(seed), Amount::MAX, Amount::MAX) else {
        panic!("seed deposit");
    };
    let _ = pool.swap(SwapDirection::XToY, Amount::new(skew), Amount::ZERO);
    pool
}

fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..BasisPoints::MAX_FEE.get()
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_is_x)
}

// ---------------------------------------------------------------------------
// 1. Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_k_non_decreasing(
        fee in fee_strategy(),
        seed in reserve_strategy(),
        skew in 0u64..100_000,
        swaps in prop::collection::vec((direction_strategy(), 1u64..1_000_000), 1..10),
    ) {
        let mut pool = seeded_pool(fee, seed, skew);
        for (direction, amount_in) in swaps {
            let k_before = pool.snapshot().k();
            if pool.swap(direction, Amount::new(amount_in), Amount::ZERO).is_err() {
                prop_assert_eq!(pool.snapshot().k(), k_before);
                continue;
            }
            let k_after = pool.snapshot().k();
            prop_assert!(k_after >= k_before, "k decreased: {} < {}", k_after, k_before);
            if fee > 0 {
                prop_assert!(k_after > k_before, "k flat with fee {}", fee);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Bounded output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_below_reserve(
        fee in fee_strategy(),
        seed in reserve_strategy(),
        direction in direction_strategy(),
        amount_in in 1u64..=u64::MAX / 2,
    ) {
        let pool = seeded_pool(fee, seed, 0);
        let (_, reserve_out) = pool.reserves_for(direction);
        if let Ok(quote) = pool.quote_swap(direction, Amount::new(amount_in)) {
            prop_assert!(quote.amount_out() < reserve_out);
            prop_assert!(quote.amount_in_after_fee() <= quote.amount_in());
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        fee in fee_strategy(),
        seed in reserve_strategy(),
        skew in 0u64..1_000_000,
        shares in 1u64..1_000_000,
    ) {
        let mut pool = seeded_pool(fee, seed, skew);
        let Ok(paid) = pool.deposit(Amount::new(shares), Amount::MAX, Amount::MAX) else {
            return Ok(());
        };
        let Ok(got) = pool.withdraw(Amount::new(shares), Amount::ZERO, Amount::ZERO) else {
            return Err(TestCaseError::fail("withdraw of fresh shares failed"));
        };
        prop_assert!(got.amount_x() <= paid.amount_x());
        prop_assert!(got.amount_y() <= paid.amount_y());
    }
}

// ---------------------------------------------------------------------------
// 4. Empty iff unissued
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_zero_iff_supply_zero(
        seed in reserve_strategy(),
        ops in prop::collection::vec((any::<bool>(), 1u64..2_000_000), 1..20),
    ) {
        let mut pool = empty_pool(30);
        let _ = pool.deposit(Amount::new(seed), Amount::MAX, Amount::MAX);
        for (is_deposit, amount) in ops {
            let amount = Amount::new(amount);
            if is_deposit {
                let _ = pool.deposit(amount, Amount::MAX, Amount::MAX);
            } else {
                let shares = amount.min(pool.total_shares());
                let _ = pool.withdraw(shares, Amount::ZERO, Amount::ZERO);
            }
            let snap = pool.snapshot();
            let reserves_empty = snap.reserve_x.is_zero() && snap.reserve_y.is_zero();
            prop_assert_eq!(reserves_empty, snap.lp_supply.is_zero());
            prop_assert!(snap.reserve_x.is_zero() == snap.reserve_y.is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Quote consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_matches_swap(
        fee in fee_strategy(),
        seed in reserve_strategy(),
        direction in direction_strategy(),
        amount_in in 1u64..10_000_000,
    ) {
        let mut pool = seeded_pool(fee, seed, 0);
        let quoted = pool.quote_swap(direction, Amount::new(amount_in));
        let executed = pool.swap(direction, Amount::new(amount_in), Amount::ZERO);
        prop_assert_eq!(quoted, executed);
    }
}
