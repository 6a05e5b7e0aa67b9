/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::serialization::exact_decimal_opt;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side (long or short) of a position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PositionSide {
    /// Signed units held
    #[serde(default, with = "exact_decimal_opt")]
    pub units: Option<Decimal>,
    /// Volume weighted average open price
    #[serde(default, with = "exact_decimal_opt")]
    pub average_price: Option<Decimal>,
    /// Open trades contributing to this side
    #[serde(rename = "tradeIDs")]
    pub trade_ids: Option<Vec<String>>,
    /// Lifetime profit/loss
    #[serde(default, with = "exact_decimal_opt")]
    pub pl: Option<Decimal>,
    /// Unrealized profit/loss
    #[serde(rename = "unrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub unrealized_pl: Option<Decimal>,
    /// Profit/loss since the last reset
    #[serde(rename = "resettablePL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub resettable_pl: Option<Decimal>,
    /// Lifetime financing
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Lifetime dividend adjustments
    #[serde(default, with = "exact_decimal_opt")]
    pub dividend_adjustment: Option<Decimal>,
    /// Lifetime guaranteed execution fees
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_fees: Option<Decimal>,
}

/// Long and short exposure to one instrument
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Instrument
    pub instrument: Option<String>,
    /// Lifetime profit/loss
    #[serde(default, with = "exact_decimal_opt")]
    pub pl: Option<Decimal>,
    /// Unrealized profit/loss
    #[serde(rename = "unrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub unrealized_pl: Option<Decimal>,
    /// Margin used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_used: Option<Decimal>,
    /// Profit/loss since the last reset
    #[serde(rename = "resettablePL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub resettable_pl: Option<Decimal>,
    /// Lifetime financing
    #[serde(default, with = "exact_decimal_opt")]
    pub financing: Option<Decimal>,
    /// Lifetime commission
    #[serde(default, with = "exact_decimal_opt")]
    pub commission: Option<Decimal>,
    /// Lifetime dividend adjustments
    #[serde(default, with = "exact_decimal_opt")]
    pub dividend_adjustment: Option<Decimal>,
    /// Lifetime guaranteed execution fees
    #[serde(default, with = "exact_decimal_opt")]
    pub guaranteed_execution_fees: Option<Decimal>,
    /// Long side
    pub long: Option<PositionSide>,
    /// Short side
    pub short: Option<PositionSide>,
}

impl Position {
    /// Long units plus (negative) short units; `None` when neither side is present
    #[must_use]
    pub fn net_units(&self) -> Option<Decimal> {
        let long = self.long.as_ref().and_then(|s| s.units);
        let short = self.short.as_ref().and_then(|s| s.units);
        match (long, short) {
            (None, None) => None,
            (l, s) => Some(l.unwrap_or_default() + s.unwrap_or_default()),
        }
    }
}

/// Price-dependent state of a position
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedPositionState {
    /// Instrument
    pub instrument: Option<String>,
    /// Net unrealized profit/loss
    #[serde(rename = "netUnrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub net_unrealized_pl: Option<Decimal>,
    /// Long side unrealized profit/loss
    #[serde(rename = "longUnrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub long_unrealized_pl: Option<Decimal>,
    /// Short side unrealized profit/loss
    #[serde(rename = "shortUnrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub short_unrealized_pl: Option<Decimal>,
    /// Margin used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_used: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn net_units_sums_both_sides() {
        let position: Position = serde_json::from_value(json!({
            "instrument": "EUR_USD",
            "long": {"units": "1500", "tradeIDs": ["1", "2"]},
            "short": {"units": "-500"}
        }))
        .unwrap();
        assert_eq!(position.net_units().unwrap().to_string(), "1000");
        assert_eq!(position.long.unwrap().trade_ids.unwrap().len(), 2);
    }

    #[test]
    fn sides_absent_means_no_net_units() {
        let position: Position = serde_json::from_value(json!({"instrument": "EUR_USD"})).unwrap();
        assert!(position.net_units().is_none());
        assert!(position.pl.is_none());
    }
}
