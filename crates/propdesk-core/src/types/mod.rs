//! Calculator value types.

mod input;
mod outcome;
mod rating;

pub use input::{parse_price, CalculatorInput};
pub use outcome::RiskResult;
pub use rating::{RiskRewardRating, TradeDirection};
