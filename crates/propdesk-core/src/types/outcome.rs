//! Derived risk figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskRewardRating;

/// Output of one calculator evaluation.
///
/// Every field is non-negative. A zero `risk_reward_ratio` can mean either a
/// genuine zero or "not computable"; use [`RiskResult::is_ratio_computable`]
/// to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskResult {
    /// Money at risk: account size times risk percent
    pub risk_amount: Decimal,
    /// |entry - stop loss|, zero when either is missing
    pub stop_loss_distance: Decimal,
    /// Units to trade so the stop loses exactly `risk_amount`
    pub position_size: Decimal,
    /// |take profit - entry|, zero when either is missing
    pub take_profit_distance: Decimal,
    /// Take-profit distance over stop-loss distance
    pub risk_reward_ratio: Decimal,
    /// Profit if the take-profit is hit
    pub potential_profit: Decimal,
    /// Loss if the stop is hit; always equal to `risk_amount`
    pub potential_loss: Decimal,
}

impl RiskResult {
    /// Both distances are positive, so the ratio is meaningful.
    pub fn is_ratio_computable(&self) -> bool {
        self.stop_loss_distance > Decimal::ZERO && self.take_profit_distance > Decimal::ZERO
    }

    /// Rating band for the ratio, or `None` when it is not computable.
    pub fn rating(&self) -> Option<RiskRewardRating> {
        self.is_ratio_computable()
            .then(|| RiskRewardRating::classify(self.risk_reward_ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rating_requires_both_distances() {
        let no_target = RiskResult {
            risk_amount: dec!(100),
            stop_loss_distance: dec!(0.005),
            position_size: dec!(20000),
            potential_loss: dec!(100),
            ..Default::default()
        };
        assert!(!no_target.is_ratio_computable());
        assert_eq!(no_target.rating(), None);

        let full = RiskResult {
            take_profit_distance: dec!(0.01),
            risk_reward_ratio: dec!(2),
            potential_profit: dec!(200),
            ..no_target
        };
        assert!(full.is_ratio_computable());
        assert_eq!(full.rating(), Some(RiskRewardRating::Excellent));
    }
}
