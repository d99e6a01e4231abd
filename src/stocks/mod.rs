// src/stocks/mod.rs

pub mod definitions;
