//! Structured display records for the presentation layer.
//!
//! A closed set of snapshot variants replaces runtime type inspection:
//! each entity produces its own variant, and view adapters consume them by
//! exhaustive match.

use chrono::NaiveDateTime;

use super::transaction::Side;

#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Quote(QuoteSnapshot),
    Transaction(TransactionSnapshot),
    Position(PositionSnapshot),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSnapshot {
    pub ticker: String,
    pub price: f64,
    pub asof: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSnapshot {
    pub ticker: String,
    pub side: Side,
    pub executed_price: f64,
    pub quantity: i64,
    pub value: f64,
    pub executed_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    pub ticker: String,
    pub quantity: i64,
    pub average_price: f64,
    pub purchase_value: f64,
    pub current_value: f64,
    pub pnl: f64,
    pub num_transactions: u32,
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
}
