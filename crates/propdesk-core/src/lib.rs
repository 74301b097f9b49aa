//! Core types for the position-size calculator.
//!
//! This crate provides the value objects shared by every surface:
//! - Calculator inputs and the raw-field parsing rules
//! - The derived risk figures
//! - Risk/reward rating bands and trade direction

pub mod error;
pub mod types;

pub use error::{CalculatorError, CalculatorResult};
pub use types::*;
