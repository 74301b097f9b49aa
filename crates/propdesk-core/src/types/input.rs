//! Calculator input record and raw-field parsing.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TradeDirection;
use crate::{CalculatorError, CalculatorResult};

/// Everything the calculator needs for one evaluation.
///
/// Price levels are optional: `None` means the field was not entered, which
/// is different from a level of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Account balance the risk is taken against
    pub account_size: Decimal,
    /// Percentage of the account risked on the trade
    pub risk_percent: Decimal,
    /// Planned entry price
    pub entry_price: Option<Decimal>,
    /// Stop-loss level
    pub stop_loss: Option<Decimal>,
    /// Take-profit level
    pub take_profit: Option<Decimal>,
}

impl CalculatorInput {
    /// Create an input with no price levels entered.
    pub fn new(account_size: Decimal, risk_percent: Decimal) -> Self {
        Self {
            account_size,
            risk_percent,
            entry_price: None,
            stop_loss: None,
            take_profit: None,
        }
    }

    pub fn with_entry_price(mut self, price: Decimal) -> Self {
        self.entry_price = Some(price);
        self
    }

    pub fn with_stop_loss(mut self, price: Decimal) -> Self {
        self.stop_loss = Some(price);
        self
    }

    pub fn with_take_profit(mut self, price: Decimal) -> Self {
        self.take_profit = Some(price);
        self
    }

    /// Side of the trade implied by where the stop sits relative to entry.
    pub fn direction(&self) -> Option<TradeDirection> {
        TradeDirection::from_levels(self.entry_price?, self.stop_loss?)
    }
}

/// Parse a raw form field into an optional price.
///
/// Blank input (after trimming) is treated as "not entered". Plain and
/// scientific notation are both accepted. Finite numbers beyond the `Decimal`
/// range saturate at `Decimal::MAX` / `Decimal::MIN`, and magnitudes below its
/// precision round towards zero.
pub fn parse_price(field: &str, raw: &str) -> CalculatorResult<Option<Decimal>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(value) = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        return Ok(Some(value));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(saturate(value))),
        _ => Err(CalculatorError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

// Only reached for finite values `Decimal` could not represent directly.
fn saturate(value: f64) -> Decimal {
    if value.abs() < 1.0 {
        Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
    } else if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
