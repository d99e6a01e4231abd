//! benches/price_update.rs
//! Run with:  cargo bench --bench price_update
//! HTML:      target/criterion/report/index.html

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stock_sim::{RandomWalkModel, StockMarket, UserPortfolio};

/// A portfolio that owns one share of everything in the market.
fn setup_full_portfolio(market: &StockMarket) -> UserPortfolio {
    let mut portfolio = UserPortfolio::with_balance(1_000_000.0);
    for stock in market.stocks() {
        portfolio
            .buy(stock, 1)
            .expect("seed balance covers the whole universe");
    }
    portfolio
}

fn bench_daily_tick(c: &mut Criterion) {
    c.bench_function("market_advance_day", |b| {
        b.iter_batched(
            || (StockMarket::new(), RandomWalkModel::with_seed(42)),
            |(mut market, mut model)| {
                market.advance_day(&mut model);
                black_box(market.stocks()[0].price);
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("portfolio_advance_day", |b| {
        let market = StockMarket::new();
        b.iter_batched(
            || (setup_full_portfolio(&market), RandomWalkModel::with_seed(42)),
            |(mut portfolio, mut model)| {
                portfolio.advance_day(&mut model);
                black_box(portfolio.snapshots().len());
            },
            BatchSize::SmallInput,
        )
    });

    // A whole simulated year, market and portfolio together.
    c.bench_function("simulate_252_days", |b| {
        b.iter_batched(
            || {
                let market = StockMarket::new();
                let portfolio = setup_full_portfolio(&market);
                (market, portfolio, RandomWalkModel::with_seed(42))
            },
            |(mut market, mut portfolio, mut model)| {
                for _ in 0..252 {
                    market.advance_day(&mut model);
                    portfolio.advance_day(&mut model);
                }
                black_box(portfolio.balance());
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_daily_tick);
criterion_main!(benches);
