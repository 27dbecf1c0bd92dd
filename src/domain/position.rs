//! Position accounting: folds transactions into running cost basis and value.

use chrono::NaiveDateTime;

use super::error::FolioError;
use super::snapshot::{PositionSnapshot, Snapshot};
use super::transaction::Transaction;

/// Running aggregate of all transactions for one ticker.
///
/// Mutated only by [`Position::fold`], one transaction at a time. There is no
/// undo: folding is a pure forward state transition. Current value is pegged
/// to the executed price of the last folded transaction, not a live quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    ticker: String,
    quantity: i64,
    average_price: f64,
    purchase_value: f64,
    current_value: f64,
    pnl: f64,
    num_transactions: u32,
    date_range: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl Position {
    /// An empty position holding no shares.
    pub fn new(ticker: &str) -> Self {
        Position {
            ticker: ticker.to_string(),
            quantity: 0,
            average_price: 0.0,
            purchase_value: 0.0,
            current_value: 0.0,
            pnl: 0.0,
            num_transactions: 0,
            date_range: None,
        }
    }

    /// Seed a position from its first transaction: average price is the
    /// executed price, cost basis is the transaction value, and the date
    /// range collapses to the execution timestamp.
    pub fn from_transaction(tx: &Transaction) -> Self {
        let at = tx.executed_at();
        Position {
            ticker: tx.ticker().to_string(),
            quantity: tx.quantity(),
            average_price: tx.executed_price(),
            purchase_value: tx.value(),
            current_value: tx.value(),
            pnl: 0.0,
            num_transactions: 1,
            date_range: Some((at, at)),
        }
    }

    /// Fold one transaction into the running state.
    ///
    /// Buys add their value to the cost basis at the paid price. Sells
    /// remove cost at the pre-fold average price, so a sale never moves the
    /// average; realized gains are not tracked separately. When the net
    /// quantity is driven to zero or below, the average price resets to
    /// zero. Selling more than held is permitted and produces a negative
    /// quantity; callers that want to forbid shorts must guard.
    pub fn fold(&mut self, tx: &Transaction) -> Result<(), FolioError> {
        if tx.ticker() != self.ticker {
            return Err(FolioError::TickerMismatch {
                expected: self.ticker.clone(),
                found: tx.ticker().to_string(),
            });
        }

        self.num_transactions += 1;
        if tx.quantity() > 0 {
            self.purchase_value += tx.value();
        } else {
            self.purchase_value += tx.quantity() as f64 * self.average_price;
        }
        self.quantity += tx.quantity();
        self.current_value = self.quantity as f64 * tx.executed_price();
        self.pnl = self.current_value - self.purchase_value;
        self.average_price = if self.quantity > 0 {
            self.purchase_value / self.quantity as f64
        } else {
            0.0
        };
        let at = tx.executed_at();
        self.date_range = Some(match self.date_range {
            None => (at, at),
            Some((lo, hi)) => (lo.min(at), hi.max(at)),
        });
        Ok(())
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Defined (nonzero) only while quantity > 0.
    pub fn average_price(&self) -> f64 {
        self.average_price
    }

    pub fn purchase_value(&self) -> f64 {
        self.purchase_value
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn pnl(&self) -> f64 {
        self.pnl
    }

    pub fn num_transactions(&self) -> u32 {
        self.num_transactions
    }

    pub fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.date_range
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Position(PositionSnapshot {
            ticker: self.ticker.clone(),
            quantity: self.quantity,
            average_price: self.average_price,
            purchase_value: self.purchase_value,
            current_value: self.current_value,
            pnl: self.pnl,
            num_transactions: self.num_transactions,
            date_range: self.date_range,
        })
    }
}
