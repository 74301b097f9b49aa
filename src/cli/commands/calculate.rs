//! Calculate command implementation.

use anyhow::Result;
use propdesk_api::CalculationResponse;
use propdesk_config::AppConfig;
use propdesk_core::{CalculatorInput, RiskResult};
use propdesk_risk::RiskCalculator;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::cli::{CalculateArgs, OutputFormat};

pub async fn run(args: CalculateArgs, config: &AppConfig) -> Result<()> {
    let input = CalculatorInput {
        account_size: args
            .account_size
            .unwrap_or(config.calculator.default_account_size),
        risk_percent: args
            .risk_percent
            .unwrap_or(config.calculator.default_risk_percent),
        entry_price: args.entry,
        stop_loss: args.stop_loss,
        take_profit: args.take_profit,
    };

    if input.account_size <= Decimal::ZERO {
        warn!("Account size {} is not positive; nothing is at risk", input.account_size);
    }
    debug!(?input, "Calculating position size");

    let result = RiskCalculator::new().compute(&input);

    match args.output {
        OutputFormat::Text => print!("{}", render_summary(&input, &result)),
        OutputFormat::Json => {
            let response = CalculationResponse::new(&input, &result);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Render a boxed text summary of one calculation.
pub fn render_summary(input: &CalculatorInput, result: &RiskResult) -> String {
    let mut s = String::new();

    s.push_str("═══════════════════════════════════════════════════════════\n");
    s.push_str("                  POSITION SIZE CALCULATOR                 \n");
    s.push_str("═══════════════════════════════════════════════════════════\n\n");

    s.push_str("INPUTS\n");
    s.push_str("───────────────────────────────────────────────────────────\n");
    s.push_str(&format!("  Account Size:        ${:.2}\n", input.account_size));
    s.push_str(&format!("  Risk:                {}%\n", input.risk_percent.normalize()));
    s.push_str(&format!("  Entry Price:         {}\n", level(input.entry_price)));
    s.push_str(&format!("  Stop Loss:           {}\n", level(input.stop_loss)));
    s.push_str(&format!("  Take Profit:         {}\n", level(input.take_profit)));
    if let Some(direction) = input.direction() {
        s.push_str(&format!("  Direction:           {}\n", direction));
    }
    s.push('\n');

    s.push_str("POSITION\n");
    s.push_str("───────────────────────────────────────────────────────────\n");
    s.push_str(&format!("  Risk Amount:         ${:.2}\n", result.risk_amount));
    s.push_str(&format!(
        "  Stop Distance:       {}\n",
        result.stop_loss_distance.normalize()
    ));
    s.push_str(&format!("  Position Size:       {:.2} units\n", result.position_size));
    s.push('\n');

    s.push_str("RISK / REWARD\n");
    s.push_str("───────────────────────────────────────────────────────────\n");
    s.push_str(&format!(
        "  Target Distance:     {}\n",
        result.take_profit_distance.normalize()
    ));
    match result.rating() {
        Some(rating) => s.push_str(&format!(
            "  Risk/Reward:         1:{:.2} ({})\n",
            result.risk_reward_ratio, rating
        )),
        None => s.push_str("  Risk/Reward:         n/a\n"),
    }
    s.push_str(&format!("  Potential Profit:    ${:.2}\n", result.potential_profit));
    s.push_str(&format!("  Potential Loss:      ${:.2}\n", result.potential_loss));
    s.push_str("═══════════════════════════════════════════════════════════\n");

    s
}

fn level(price: Option<Decimal>) -> String {
    price
        .map(|p| p.normalize().to_string())
        .unwrap_or_else(|| "-".to_string())
}
