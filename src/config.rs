// src/config.rs

//! A centralized place for tuning simulation parameters.

// --- Portfolio ---
pub const INITIAL_BALANCE: f64 = 3000.0;

// --- Price model ---
// No price is ever allowed below this floor after an update.
pub const PRICE_FLOOR: f64 = 1.0;
// The daily shock is a uniform integer in [-SHOCK_STEPS, SHOCK_STEPS],
// normalized to [-1.0, 1.0] by dividing through by SHOCK_STEPS.
pub const SHOCK_STEPS: i32 = 100;

// --- Volatility coefficient per risk tier ---
// A High-risk stock can move up to 20% of its price in a single day,
// Medium up to 10%, Low up to 5%.
pub const VOLATILITY_HIGH: f64 = 0.20;
pub const VOLATILITY_MEDIUM: f64 = 0.10;
pub const VOLATILITY_LOW: f64 = 0.05;
