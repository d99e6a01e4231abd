// src/simulators/mod.rs

pub mod random_walk;
