//! Error types for the calculator.

use thiserror::Error;

/// Errors raised while turning raw user input into calculator input.
///
/// The calculation itself never fails; only parsing does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },
}

/// Result type alias for calculator operations.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
