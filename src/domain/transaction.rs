//! Buy/sell transaction value object.

use chrono::NaiveDateTime;

use super::bar::PriceBar;
use super::error::FolioError;
use super::snapshot::{Snapshot, TransactionSnapshot};
use crate::ports::clock_port::ClockPort;
use crate::ports::quote_port::QuotePort;

/// Direction of a transaction, derived from the sign of its quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
    None,
}

impl Side {
    pub fn from_quantity(quantity: i64) -> Self {
        match quantity {
            q if q > 0 => Side::Buy,
            q if q < 0 => Side::Sell,
            _ => Side::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
            Side::None => "none",
        }
    }
}

/// A single executed buy or sell. Quantity is signed: positive for buys,
/// negative for sells. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    ticker: String,
    quantity: i64,
    executed_price: f64,
    executed_at: NaiveDateTime,
}

impl Transaction {
    /// Build a transaction by fetching a quote at (or near) `at`.
    ///
    /// The executed price is the close of the fetched bar. When `at` is
    /// omitted the most recent bar is used and the transaction is stamped
    /// with the injected clock's current time.
    pub fn execute(
        quotes: &dyn QuotePort,
        clock: &dyn ClockPort,
        ticker: &str,
        quantity: i64,
        at: Option<NaiveDateTime>,
    ) -> Result<Self, FolioError> {
        let bar = quotes.fetch_quote(ticker, at)?;
        let executed_at = at.unwrap_or_else(|| clock.now());
        Ok(Self::from_bar(&bar, quantity, executed_at))
    }

    /// Build a transaction directly from an already-fetched bar.
    pub fn from_bar(bar: &PriceBar, quantity: i64, executed_at: NaiveDateTime) -> Self {
        Transaction {
            ticker: bar.ticker.clone(),
            quantity,
            executed_price: bar.close,
            executed_at,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn executed_price(&self) -> f64 {
        self.executed_price
    }

    pub fn executed_at(&self) -> NaiveDateTime {
        self.executed_at
    }

    /// executed_price × signed quantity. Negative for sells.
    pub fn value(&self) -> f64 {
        self.executed_price * self.quantity as f64
    }

    pub fn side(&self) -> Side {
        Side::from_quantity(self.quantity)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Transaction(TransactionSnapshot {
            ticker: self.ticker.clone(),
            side: self.side(),
            executed_price: self.executed_price,
            quantity: self.quantity,
            value: self.value(),
            executed_at: self.executed_at,
        })
    }
}
