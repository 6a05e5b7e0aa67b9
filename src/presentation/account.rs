/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::order::{DynamicOrderState, Order};
use crate::presentation::position::{CalculatedPositionState, Position};
use crate::presentation::trade::{CalculatedTradeState, TradeSummary};
use crate::presentation::transaction::Transaction;
use crate::presentation::serialization::exact_decimal_opt;
use pretty_simple_display::DisplaySimple;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account id and the sub-accounts tags it carries
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountProperties {
    /// Account id
    pub id: Option<String>,
    /// Multi-Trading Account login, when applicable
    #[serde(rename = "mt4AccountID")]
    pub mt4_account_id: Option<i64>,
    /// Tags
    pub tags: Option<Vec<String>>,
}

/// Balance, margin and profit/loss figures that change with prices
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedAccountState {
    /// Unrealized profit/loss
    #[serde(rename = "unrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub unrealized_pl: Option<Decimal>,
    /// Net asset value
    #[serde(rename = "NAV")]
    #[serde(default, with = "exact_decimal_opt")]
    pub nav: Option<Decimal>,
    /// Margin used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_used: Option<Decimal>,
    /// Margin available
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_available: Option<Decimal>,
    /// Value of open positions
    #[serde(default, with = "exact_decimal_opt")]
    pub position_value: Option<Decimal>,
    /// Margin closeout unrealized profit/loss
    #[serde(rename = "marginCloseoutUnrealizedPL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_closeout_unrealized_pl: Option<Decimal>,
    /// Margin closeout net asset value
    #[serde(rename = "marginCloseoutNAV")]
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_closeout_nav: Option<Decimal>,
    /// Margin closeout margin used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_closeout_margin_used: Option<Decimal>,
    /// Margin closeout percentage; 1.0 triggers a closeout
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_closeout_percent: Option<Decimal>,
    /// Margin closeout position value
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_closeout_position_value: Option<Decimal>,
    /// Value available for withdrawal
    #[serde(default, with = "exact_decimal_opt")]
    pub withdrawal_limit: Option<Decimal>,
    /// Margin call margin used
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_call_margin_used: Option<Decimal>,
    /// Margin call percentage; 1.0 triggers a margin call
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_call_percent: Option<Decimal>,
}

/// Fields shared by [`Account`] and [`AccountSummary`]
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountCore {
    /// Account id
    pub id: Option<String>,
    /// Client-assigned alias
    pub alias: Option<String>,
    /// Home currency
    pub currency: Option<String>,
    /// Current balance
    #[serde(default, with = "exact_decimal_opt")]
    pub balance: Option<Decimal>,
    /// User that created the account
    #[serde(rename = "createdByUserID")]
    pub created_by_user_id: Option<i64>,
    /// Creation time
    pub created_time: Option<String>,
    /// Guaranteed stop loss availability
    pub guaranteed_stop_loss_order_mode: Option<String>,
    /// Lifetime profit/loss
    #[serde(default, with = "exact_decimal_opt")]
    pub pl: Option<Decimal>,
    /// Profit/loss since the last reset
    #[serde(rename = "resettablePL")]
    #[serde(default, with = "exact_decimal_opt")]
    pub resettable_pl: Option<Decimal>,
    /// Time of the last reset
    #[serde(rename = "resettablePLTime")]
    pub resettable_pl_time: Option<String>,
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
    /// Client-set margin rate
    #[serde(default, with = "exact_decimal_opt")]
    pub margin_rate: Option<Decimal>,
    /// Time the current margin call started
    pub margin_call_enter_time: Option<String>,
    /// Number of margin call extensions
    pub margin_call_extension_count: Option<i32>,
    /// Time of the last margin call extension
    pub last_margin_call_extension_time: Option<String>,
    /// Number of open trades
    pub open_trade_count: Option<i32>,
    /// Number of open positions
    pub open_position_count: Option<i32>,
    /// Number of pending orders
    pub pending_order_count: Option<i32>,
    /// Whether hedging is allowed
    pub hedging_enabled: Option<bool>,
    /// Most recent transaction id
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: Option<String>,
    /// Price-dependent figures
    #[serde(flatten)]
    pub calculated: CalculatedAccountState,
}

/// Full account with its open trades, positions and pending orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account fields
    #[serde(flatten)]
    pub core: AccountCore,
    /// Open trades
    pub trades: Option<Vec<TradeSummary>>,
    /// Positions, including closed ones with history
    pub positions: Option<Vec<Position>>,
    /// Pending orders
    pub orders: Option<Vec<Order>>,
}

/// Account without its trades, positions and orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountSummary {
    /// Account fields
    #[serde(flatten)]
    pub core: AccountCore,
}

/// Changes to an account since a given transaction
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountChanges {
    /// Orders created
    pub orders_created: Option<Vec<Order>>,
    /// Orders cancelled
    pub orders_cancelled: Option<Vec<Order>>,
    /// Orders filled
    pub orders_filled: Option<Vec<Order>>,
    /// Orders triggered
    pub orders_triggered: Option<Vec<Order>>,
    /// Trades opened
    pub trades_opened: Option<Vec<TradeSummary>>,
    /// Trades reduced
    pub trades_reduced: Option<Vec<TradeSummary>>,
    /// Trades closed
    pub trades_closed: Option<Vec<TradeSummary>>,
    /// Positions changed
    pub positions: Option<Vec<Position>>,
    /// Transactions generated
    pub transactions: Option<Vec<Transaction>>,
}

/// Current price-dependent state of an account and its contents
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct AccountChangesState {
    /// Account figures
    #[serde(flatten)]
    pub calculated: CalculatedAccountState,
    /// Pending order states
    pub orders: Option<Vec<DynamicOrderState>>,
    /// Open trade states
    pub trades: Option<Vec<CalculatedTradeState>>,
    /// Position states
    pub positions: Option<Vec<CalculatedPositionState>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn calculated_figures_are_read_from_the_top_level() {
        let summary: AccountSummary = serde_json::from_value(json!({
            "id": "101-004-1234567-001",
            "currency": "USD",
            "balance": "100000.0000",
            "NAV": "100012.3450",
            "marginRate": "0.02",
            "openTradeCount": 1
        }))
        .unwrap();
        assert_eq!(summary.core.calculated.nav.unwrap().to_string(), "100012.3450");
        assert_eq!(summary.core.open_trade_count, Some(1));
        assert!(summary.core.alias.is_none());
    }

    #[test]
    fn changes_decode_transactions_polymorphically() {
        let changes: AccountChanges = serde_json::from_value(json!({
            "transactions": [
                {"id": "1", "type": "MARGIN_CALL_ENTER"},
                {"id": "2", "type": "SOMETHING_NEW"}
            ]
        }))
        .unwrap();
        let txs = changes.transactions.unwrap();
        assert!(matches!(txs[0], Transaction::MarginCallEnter(_)));
        assert!(txs[1].is_unknown());
        assert!(changes.orders_created.is_none());
    }
}
