//! Position sizing and risk/reward calculation.
//!
//! A single pure function maps account parameters and trade levels to the
//! position size, money at risk, reward ratio and projected profit/loss.

mod calculator;

pub use calculator::{compute, RiskCalculator};
