//! Request and response bodies.

use propdesk_config::CalculatorSettings;
use propdesk_core::{
    parse_price, CalculatorInput, CalculatorResult, RiskResult, RiskRewardRating, TradeDirection,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numeric field as the dashboard sends it: either a JSON number or the
/// raw text of a form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Text(String),
    Number(serde_json::Number),
}

impl NumberField {
    /// Both forms share the text rules: blank resolves to `None`, values
    /// outside the `Decimal` range saturate.
    pub fn resolve(&self, field: &str) -> CalculatorResult<Option<Decimal>> {
        match self {
            NumberField::Number(number) => parse_price(field, &number.to_string()),
            NumberField::Text(raw) => parse_price(field, raw),
        }
    }
}

fn resolve(field: Option<&NumberField>, name: &str) -> CalculatorResult<Option<Decimal>> {
    match field {
        Some(value) => value.resolve(name),
        None => Ok(None),
    }
}

/// Body of `POST /calculate-position-size`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(default)]
    pub account_size: Option<NumberField>,
    #[serde(default)]
    pub risk_percent: Option<NumberField>,
    #[serde(default)]
    pub entry_price: Option<NumberField>,
    #[serde(default)]
    pub stop_loss: Option<NumberField>,
    #[serde(default)]
    pub take_profit: Option<NumberField>,
}

impl CalculationRequest {
    /// Resolve the raw fields, filling account size and risk percent from
    /// `defaults` when they are absent.
    pub fn into_input(self, defaults: &CalculatorSettings) -> CalculatorResult<CalculatorInput> {
        let account_size = resolve(self.account_size.as_ref(), "accountSize")?
            .unwrap_or(defaults.default_account_size);
        let risk_percent = resolve(self.risk_percent.as_ref(), "riskPercent")?
            .unwrap_or(defaults.default_risk_percent);

        Ok(CalculatorInput {
            account_size,
            risk_percent,
            entry_price: resolve(self.entry_price.as_ref(), "entryPrice")?,
            stop_loss: resolve(self.stop_loss.as_ref(), "stopLoss")?,
            take_profit: resolve(self.take_profit.as_ref(), "takeProfit")?,
        })
    }
}

/// Body returned by `POST /calculate-position-size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub risk_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub stop_loss_distance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub position_size: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub take_profit_distance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub risk_reward_ratio: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub potential_loss: Decimal,
    /// `None` when the ratio is not computable
    pub rating: Option<RiskRewardRating>,
    pub direction: Option<TradeDirection>,
}

impl CalculationResponse {
    pub fn new(input: &CalculatorInput, result: &RiskResult) -> Self {
        Self {
            risk_amount: result.risk_amount,
            stop_loss_distance: result.stop_loss_distance,
            position_size: result.position_size,
            take_profit_distance: result.take_profit_distance,
            risk_reward_ratio: result.risk_reward_ratio,
            potential_profit: result.potential_profit,
            potential_loss: result.potential_loss,
            rating: result.rating(),
            direction: input.direction(),
        }
    }
}
