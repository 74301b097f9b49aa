//! Fixed-fractional position size calculator.

use propdesk_core::{CalculatorInput, RiskResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Stateless calculator. Evaluate it on every input change.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskCalculator;

impl RiskCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Derive the risk figures for one input.
    ///
    /// Total over its domain: missing levels and zero distances produce zeros,
    /// and results too large for `Decimal` saturate at `Decimal::MAX`.
    pub fn compute(&self, input: &CalculatorInput) -> RiskResult {
        let risk_amount = risk_amount(input.account_size, input.risk_percent);

        let stop_loss_distance = distance(input.entry_price, input.stop_loss);
        let take_profit_distance = distance(input.take_profit, input.entry_price);

        let position_size = if stop_loss_distance > Decimal::ZERO {
            saturating_div(risk_amount, stop_loss_distance)
        } else {
            Decimal::ZERO
        };

        let risk_reward_ratio =
            if stop_loss_distance > Decimal::ZERO && take_profit_distance > Decimal::ZERO {
                saturating_div(take_profit_distance, stop_loss_distance)
            } else {
                Decimal::ZERO
            };

        RiskResult {
            risk_amount,
            stop_loss_distance,
            position_size,
            take_profit_distance,
            risk_reward_ratio,
            potential_profit: position_size.saturating_mul(take_profit_distance),
            potential_loss: risk_amount,
        }
    }
}

/// Evaluate the calculator on loose fields.
pub fn compute(
    account_size: Decimal,
    risk_percent: Decimal,
    entry_price: Option<Decimal>,
    stop_loss: Option<Decimal>,
    take_profit: Option<Decimal>,
) -> RiskResult {
    RiskCalculator.compute(&CalculatorInput {
        account_size,
        risk_percent,
        entry_price,
        stop_loss,
        take_profit,
    })
}

// Non-positive account size or risk percent risks nothing.
fn risk_amount(account_size: Decimal, risk_percent: Decimal) -> Decimal {
    if account_size <= Decimal::ZERO || risk_percent <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    account_size.saturating_mul(risk_percent / dec!(100))
}

fn distance(a: Option<Decimal>, b: Option<Decimal>) -> Decimal {
    match (a, b) {
        (Some(a), Some(b)) => a.saturating_sub(b).abs(),
        _ => Decimal::ZERO,
    }
}

// Callers guarantee a positive divisor; only overflow is left to handle.
fn saturating_div(numerator: Decimal, divisor: Decimal) -> Decimal {
    numerator.checked_div(divisor).unwrap_or(Decimal::MAX)
}
