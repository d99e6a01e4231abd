// src/simulators/random_walk.rs

//! The daily price model: a bounded uniform random walk.
//!
//! Each day, a stock moves by a uniform fraction of its own price, scaled by
//! its risk tier's volatility, and is clamped at the price floor.  This is
//! deliberately crude — there is no drift and no fat tail, just noise.

use crate::config::{PRICE_FLOOR, SHOCK_STEPS};
use crate::stocks::definitions::{RiskTier, SimulatedStock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the randomness source for price updates.  One model instance drives
/// both the market catalog and the portfolio, so a single seed makes an
/// entire session reproducible.
pub struct RandomWalkModel {
    rng: StdRng,
}

impl RandomWalkModel {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic model for tests and repeatable runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Computes tomorrow's price from today's.  Never fails and never
    /// returns a value below the floor.
    pub fn next_price(&mut self, price: f64, risk: RiskTier) -> f64 {
        let shock = self.rng.gen_range(-SHOCK_STEPS..=SHOCK_STEPS) as f64 / SHOCK_STEPS as f64;
        let next = price + shock * risk.volatility() * price;
        if next < PRICE_FLOOR { PRICE_FLOOR } else { next }
    }

    /// Advances one stock by one day: new price plus a history entry.
    pub fn advance(&mut self, stock: &mut SimulatedStock) {
        let next = self.next_price(stock.price, stock.risk);
        stock.apply_price(next);
    }
}

impl Default for RandomWalkModel {
    fn default() -> Self {
        Self::new()
    }
}
