// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod portfolio;
pub mod simulators;
pub mod stocks;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` ---
pub use stocks::definitions::{
    RiskTier, SimulatedStock, StockMarket, StockSnapshot, default_universe,
};

// --- From `simulators` ---
pub use simulators::random_walk::RandomWalkModel;

// --- From `portfolio` ---
pub use portfolio::{HoldingSnapshot, OwnedStock, TradeError, UserPortfolio};
