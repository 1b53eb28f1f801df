//! Replays the reference pool lifecycle against the in-memory ledger:
//! initialize, a rejected first deposit, a seeded pool, a swap and a full
//! withdrawal.
//!
//! ```text
//! RUST_LOG=debug cargo run --example harness
//! ```

use hydra_pool::prelude::*;
use tracing::info;

const POOL_ID: u64 = 11_431_744_375_459_076_608;
const FEE_BPS: u16 = 1_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let issuer = Address::from_label(b"issuer");
    let mint_x = Address::from_label(b"mint-x");
    let mint_y = Address::from_label(b"mint-y");
    let user = Address::from_label(b"user");

    let ledger = MemoryLedger::new();
    for mint in [mint_x, mint_y] {
        ledger.create_mint(mint, issuer, 6)?;
        ledger.open_account(mint, user)?;
        ledger.mint(mint, user, Amount::new(1_000_000), issuer)?;
    }

    let engine = AmmEngine::new(EngineConfig::default(), ledger)?;
    let pool = engine.pool_ref(POOL_ID, &mint_x, &mint_y);
    info!(config = %pool.accounts.config, lp_mint = %pool.accounts.lp_mint, "derived pool accounts");

    let params = PoolParams::new(POOL_ID, BasisPoints::new(FEE_BPS), user, mint_x, mint_y)?;
    let snapshot = engine.initialize(&params, &pool)?;
    info!(?snapshot, "initialized");

    let rejected = engine.deposit(
        &pool,
        &user,
        Amount::new(100_000),
        Amount::new(80_000),
        Amount::new(80_000),
    );
    info!(?rejected, "first deposit with tight bounds");

    let deposit = engine.deposit(
        &pool,
        &user,
        Amount::new(100_000),
        Amount::new(100_000),
        Amount::new(100_000),
    )?;
    info!(?deposit, "seeded");

    let swap = engine.swap(
        &pool,
        &user,
        SwapDirection::from_is_x(true),
        Amount::new(15_000),
        Amount::new(10_000),
    )?;
    info!(%swap, state = ?engine.pool_state(POOL_ID)?, "swapped");

    let withdraw = engine.withdraw(
        &pool,
        &user,
        Amount::new(100_000),
        Amount::new(60_000),
        Amount::new(60_000),
    )?;
    info!(?withdraw, state = ?engine.pool_state(POOL_ID)?, "withdrew");

    engine.reconcile(POOL_ID)?;
    info!(
        x = %engine.ledger().balance(&mint_x, &user).unwrap_or_default(),
        y = %engine.ledger().balance(&mint_y, &user).unwrap_or_default(),
        "final user balances"
    );
    Ok(())
}
