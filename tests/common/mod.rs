#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use folio::domain::bar::PriceBar;
use folio::domain::error::FolioError;
use folio::ports::clock_port::ClockPort;
use folio::ports::quote_port::QuotePort;
use std::collections::HashMap;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::MIN)
}

pub fn make_bar(ticker: &str, day: &str, close: f64) -> PriceBar {
    let day = NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
    PriceBar {
        ticker: ticker.to_string(),
        open: close,
        high: close,
        low: close,
        close,
        volume: 10_000,
        dividends: 0.0,
        split_factor: 0.0,
        asof: day.and_time(NaiveTime::MIN),
    }
}

/// Quote port answering from in-memory per-ticker bar lists.
pub struct MockQuotePort {
    pub bars: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockQuotePort {
    pub fn new() -> Self {
        Self {
            bars: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<PriceBar>) -> Self {
        self.bars.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl QuotePort for MockQuotePort {
    fn fetch_quote(
        &self,
        ticker: &str,
        at: Option<NaiveDateTime>,
    ) -> Result<PriceBar, FolioError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(FolioError::QuoteData {
                reason: reason.clone(),
            });
        }
        let bars = self
            .bars
            .get(ticker)
            .ok_or_else(|| FolioError::QuoteUnavailable {
                ticker: ticker.to_string(),
                date: at.map(|t| t.date()),
            })?;
        let bar = match at {
            Some(requested) => bars.iter().find(|b| b.asof.date() == requested.date()),
            None => bars.last(),
        };
        bar.cloned().ok_or_else(|| FolioError::QuoteUnavailable {
            ticker: ticker.to_string(),
            date: at.map(|t| t.date()),
        })
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl ClockPort for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
