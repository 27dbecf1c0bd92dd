//! Portfolio aggregate: positions keyed by ticker plus cash and totals.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use super::error::FolioError;
use super::position::Position;
use super::transaction::Transaction;
use crate::ports::clock_port::ClockPort;
use crate::ports::quote_port::QuotePort;

/// Owns every position and the cash balance. Buys and sells go through the
/// quote port for a fresh price, then trigger a full balance recompute.
/// Transactions are applied one at a time in caller order; results are
/// order-dependent.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    start_date: NaiveDateTime,
    cash_balance: f64,
    total_paid: f64,
    total_value: f64,
    positions: HashMap<String, Position>,
}

impl Portfolio {
    pub fn new(cash: f64, start: NaiveDateTime) -> Self {
        Portfolio {
            start_date: start,
            cash_balance: cash,
            total_paid: 0.0,
            total_value: cash,
            positions: HashMap::new(),
        }
    }

    /// Like [`Portfolio::new`] but pre-seeds an empty position per ticker.
    pub fn with_tickers(cash: f64, start: NaiveDateTime, tickers: &[String]) -> Self {
        let mut portfolio = Self::new(cash, start);
        for ticker in tickers {
            portfolio
                .positions
                .insert(ticker.clone(), Position::new(ticker));
        }
        portfolio
    }

    /// Buy `quantity` shares of `ticker` at the quoted close for `at`.
    ///
    /// When `at` is omitted, the most recent quote is used and the
    /// transaction is stamped with the clock's current time. A quote failure
    /// aborts before any state is touched.
    pub fn buy(
        &mut self,
        quotes: &dyn QuotePort,
        clock: &dyn ClockPort,
        ticker: &str,
        quantity: i64,
        at: Option<NaiveDateTime>,
    ) -> Result<Transaction, FolioError> {
        self.apply(quotes, clock, ticker, quantity, at)
    }

    /// Sell `quantity` shares of `ticker`. Selling an unseen ticker seeds a
    /// negative position; selling more than held is not rejected.
    pub fn sell(
        &mut self,
        quotes: &dyn QuotePort,
        clock: &dyn ClockPort,
        ticker: &str,
        quantity: i64,
        at: Option<NaiveDateTime>,
    ) -> Result<Transaction, FolioError> {
        self.apply(quotes, clock, ticker, -quantity, at)
    }

    fn apply(
        &mut self,
        quotes: &dyn QuotePort,
        clock: &dyn ClockPort,
        ticker: &str,
        signed_quantity: i64,
        at: Option<NaiveDateTime>,
    ) -> Result<Transaction, FolioError> {
        let tx = Transaction::execute(quotes, clock, ticker, signed_quantity, at)?;
        match self.positions.get_mut(ticker) {
            Some(pos) => pos.fold(&tx)?,
            None => {
                self.positions
                    .insert(ticker.to_string(), Position::from_transaction(&tx));
            }
        }
        self.update_balances(tx.value());
        Ok(tx)
    }

    /// Full balance recompute after a transaction of the given value.
    ///
    /// Cash moves by the transaction value (sells carry negative value and
    /// so add cash); total paid and total value are recomputed over every
    /// position rather than adjusted incrementally.
    pub fn update_balances(&mut self, last_transaction_value: f64) {
        self.cash_balance -= last_transaction_value;
        let mut purchase_value = 0.0;
        let mut current_value = 0.0;
        for pos in self.positions.values() {
            purchase_value += pos.purchase_value();
            current_value += pos.current_value();
        }
        self.total_paid = purchase_value;
        self.total_value = current_value + self.cash_balance;
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn cash_balance(&self) -> f64 {
        self.cash_balance
    }

    pub fn total_paid(&self) -> f64 {
        self.total_paid
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn position(&self, ticker: &str) -> Option<&Position> {
        self.positions.get(ticker)
    }

    pub fn has_position(&self, ticker: &str) -> bool {
        self.positions.contains_key(ticker)
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions in ticker order, for deterministic display.
    pub fn positions_sorted(&self) -> Vec<&Position> {
        let mut positions: Vec<&Position> = self.positions.values().collect();
        positions.sort_by(|a, b| a.ticker().cmp(b.ticker()));
        positions
    }
}
