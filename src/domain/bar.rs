//! Daily price bar representation.

use chrono::NaiveDateTime;

use super::snapshot::{QuoteSnapshot, Snapshot};

/// One trading day's worth of price, volume, and corporate-action data for a
/// single ticker. Immutable once fetched from the quote provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub ticker: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
    pub dividends: f64,
    pub split_factor: f64,
    pub asof: NaiveDateTime,
}

impl PriceBar {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::Quote(QuoteSnapshot {
            ticker: self.ticker.clone(),
            price: self.close,
            asof: self.asof,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_bar() -> PriceBar {
        PriceBar {
            ticker: "NVDA".into(),
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 50_000,
            dividends: 0.0,
            split_factor: 0.0,
            asof: NaiveDate::from_ymd_opt(2021, 1, 11)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn snapshot_carries_close_as_price() {
        let bar = sample_bar();
        match bar.snapshot() {
            Snapshot::Quote(q) => {
                assert_eq!(q.ticker, "NVDA");
                assert!((q.price - 105.0).abs() < f64::EPSILON);
                assert_eq!(q.asof, bar.asof);
            }
            other => panic!("expected quote snapshot, got {other:?}"),
        }
    }
}
