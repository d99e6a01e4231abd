// src/stocks/definitions.rs

//! Core stock metadata and the market catalog.
//!
//! The simulator runs over a fixed universe of nine stocks.  Extend
//! `default_universe()` with more entries whenever you add tickers.

use crate::config::{VOLATILITY_HIGH, VOLATILITY_LOW, VOLATILITY_MEDIUM};
use crate::simulators::random_walk::RandomWalkModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How wildly a stock's price is allowed to swing each simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// The fraction of the current price a single daily shock can move.
    pub fn volatility(self) -> f64 {
        match self {
            RiskTier::High => VOLATILITY_HIGH,
            RiskTier::Medium => VOLATILITY_MEDIUM,
            RiskTier::Low => VOLATILITY_LOW,
        }
    }

    /// Parses a free-form risk tag.  Anything that is not exactly "High" or
    /// "Medium" silently falls back to `Low` — that is the historical
    /// behavior and callers rely on it, so don't "fix" it here.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "High" => RiskTier::High,
            "Medium" => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// One tradable stock.  The market owns one of these per ticker; a portfolio
/// holds its own copy that random-walks independently after purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatedStock {
    /// 1-based identifier, equal to the stock's position in the catalog.
    pub id: u32,
    /// Human-readable name, unique within the catalog.  This is the join key
    /// for portfolio lookups.
    pub name: String,
    /// Latest price.  Always >= the price floor after an update.
    pub price: f64,
    /// Risk tier, fixed for the life of the stock.
    pub risk: RiskTier,
    /// Chronological price history, starting with the initial price.
    /// Append-only; its length doubles as the elapsed day counter.
    history: Vec<f64>,
}

impl SimulatedStock {
    pub fn new<T: Into<String>>(id: u32, name: T, price: f64, risk: RiskTier) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            risk,
            history: vec![price],
        }
    }

    /// The simulated day this stock is on.  Day 1 is the initial listing,
    /// so this is simply the history length.
    pub fn day(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Records an already-computed price as the newest entry.  Only the
    /// price model should call this.
    pub(crate) fn apply_price(&mut self, price: f64) {
        self.price = price;
        self.history.push(price);
    }
}

impl fmt::Display for SimulatedStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2}, {})", self.name, self.price, self.risk)
    }
}

/// A read-only row for the "show market" boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub risk: RiskTier,
    pub day: usize,
}

impl StockSnapshot {
    fn of(stock: &SimulatedStock) -> Self {
        Self {
            id: stock.id,
            name: stock.name.clone(),
            price: stock.price,
            risk: stock.risk,
            day: stock.day(),
        }
    }
}

/// The universe of stocks available when the market boots.
///
/// *Ids must stay 1-based and match each entry's position — `StockMarket::get`
/// indexes by position rather than searching.*
pub fn default_universe() -> Vec<SimulatedStock> {
    vec![
        SimulatedStock::new(1, "Apple", 211.0, RiskTier::Medium),
        SimulatedStock::new(2, "Google", 165.0, RiskTier::Medium),
        SimulatedStock::new(3, "Amazon", 205.0, RiskTier::High),
        SimulatedStock::new(4, "McDonald's", 314.0, RiskTier::Low),
        SimulatedStock::new(5, "UnitedHealth", 60.0, RiskTier::Low),
        SimulatedStock::new(6, "Tesla", 342.0, RiskTier::High),
        SimulatedStock::new(7, "NVDA", 134.0, RiskTier::High),
        SimulatedStock::new(8, "Microsoft", 453.0, RiskTier::Medium),
        SimulatedStock::new(9, "META", 643.0, RiskTier::High),
    ]
}

/// The market catalog: every tradable stock, in id order.  The set is fixed
/// at construction; only prices move afterwards.
#[derive(Debug)]
pub struct StockMarket {
    stocks: Vec<SimulatedStock>,
}

impl StockMarket {
    /// Creates the market with the default nine-stock universe.
    pub fn new() -> Self {
        Self {
            stocks: default_universe(),
        }
    }

    /// Builds a market from an explicit universe.  Mostly useful for tests.
    pub fn with_stocks(stocks: Vec<SimulatedStock>) -> Self {
        Self { stocks }
    }

    /// Looks a stock up by its 1-based id.  `None` means the id is out of
    /// range and the caller should report it as invalid.
    pub fn get(&self, id: u32) -> Option<&SimulatedStock> {
        if id >= 1 && (id as usize) <= self.stocks.len() {
            Some(&self.stocks[id as usize - 1])
        } else {
            None
        }
    }

    /// All stocks in id order.
    pub fn stocks(&self) -> &[SimulatedStock] {
        &self.stocks
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Advances every stock's price by one simulated day.  Updates are
    /// independent, so catalog order does not affect the outcome.
    pub fn advance_day(&mut self, model: &mut RandomWalkModel) {
        for stock in &mut self.stocks {
            model.advance(stock);
        }
    }

    /// Snapshot rows for the display layer.
    pub fn snapshots(&self) -> Vec<StockSnapshot> {
        self.stocks.iter().map(StockSnapshot::of).collect()
    }
}

impl Default for StockMarket {
    fn default() -> Self {
        Self::new()
    }
}
