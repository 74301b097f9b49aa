//! Display classifications derived from calculator output.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality band for a risk/reward ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRewardRating {
    /// Ratio of 2 or more
    Excellent,
    /// Ratio from 1 up to (not including) 2
    Acceptable,
    /// Ratio below 1
    NotRecommended,
}

impl RiskRewardRating {
    /// Place a ratio into its band.
    pub fn classify(ratio: Decimal) -> Self {
        if ratio >= dec!(2) {
            RiskRewardRating::Excellent
        } else if ratio >= dec!(1) {
            RiskRewardRating::Acceptable
        } else {
            RiskRewardRating::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskRewardRating::Excellent => "excellent",
            RiskRewardRating::Acceptable => "acceptable",
            RiskRewardRating::NotRecommended => "not recommended",
        }
    }
}

impl fmt::Display for RiskRewardRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trade side implied by the stop-loss placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    /// Stop below entry is a long, stop above entry is a short. Equal levels
    /// say nothing about direction.
    pub fn from_levels(entry_price: Decimal, stop_loss: Decimal) -> Option<Self> {
        if stop_loss < entry_price {
            Some(TradeDirection::Long)
        } else if stop_loss > entry_price {
            Some(TradeDirection::Short)
        } else {
            None
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "long"),
            TradeDirection::Short => write!(f, "short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bands() {
        assert_eq!(RiskRewardRating::classify(dec!(3)), RiskRewardRating::Excellent);
        assert_eq!(RiskRewardRating::classify(dec!(2)), RiskRewardRating::Excellent);
        assert_eq!(RiskRewardRating::classify(dec!(1.5)), RiskRewardRating::Acceptable);
        assert_eq!(RiskRewardRating::classify(dec!(1)), RiskRewardRating::Acceptable);
        assert_eq!(RiskRewardRating::classify(dec!(0.99)), RiskRewardRating::NotRecommended);
        assert_eq!(RiskRewardRating::classify(Decimal::ZERO), RiskRewardRating::NotRecommended);
    }

    #[test]
    fn test_rating_serialization() {
        let json = serde_json::to_string(&RiskRewardRating::NotRecommended).unwrap();
        assert_eq!(json, "\"not_recommended\"");
        assert_eq!(RiskRewardRating::NotRecommended.to_string(), "not recommended");
    }

    #[test]
    fn test_direction_from_levels() {
        assert_eq!(TradeDirection::from_levels(dec!(1.1), dec!(1.095)), Some(TradeDirection::Long));
        assert_eq!(TradeDirection::from_levels(dec!(1.095), dec!(1.1)), Some(TradeDirection::Short));
        assert_eq!(TradeDirection::from_levels(dec!(1.1), dec!(1.1)), None);
    }
}
