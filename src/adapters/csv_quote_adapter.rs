//! CSV file quote adapter.
//!
//! Serves quotes from per-ticker daily-bar files named `{TICKER}.csv` with
//! columns `date,open,high,low,close,volume,dividends,split_factor`.

use crate::domain::bar::PriceBar;
use crate::domain::error::FolioError;
use crate::ports::quote_port::QuotePort;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct CsvQuoteAdapter {
    quotes_dir: PathBuf,
}

struct Row {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
    dividends: f64,
    split_factor: f64,
}

impl CsvQuoteAdapter {
    pub fn new(quotes_dir: PathBuf) -> Self {
        Self { quotes_dir }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.quotes_dir.join(format!("{ticker}.csv"))
    }

    fn read_rows(&self, ticker: &str, at: Option<NaiveDateTime>) -> Result<Vec<Row>, FolioError> {
        let path = self.csv_path(ticker);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FolioError::QuoteUnavailable {
                    ticker: ticker.to_string(),
                    date: at.map(|t| t.date()),
                });
            }
            Err(e) => {
                return Err(FolioError::QuoteData {
                    reason: format!("failed to read {}: {}", path.display(), e),
                });
            }
        };

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| FolioError::QuoteData {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = field(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                FolioError::QuoteData {
                    reason: format!("invalid date {date_str:?}: {e}"),
                }
            })?;

            rows.push(Row {
                date,
                open: parse_f64(&record, 1, "open")?,
                high: parse_f64(&record, 2, "high")?,
                low: parse_f64(&record, 3, "low")?,
                close: parse_f64(&record, 4, "close")?,
                volume: parse_i64(&record, 5, "volume")?,
                dividends: parse_f64(&record, 6, "dividends")?,
                split_factor: parse_f64(&record, 7, "split_factor")?,
            });
        }
        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }
}

fn field<'a>(record: &'a csv::StringRecord, index: usize, name: &str) -> Result<&'a str, FolioError> {
    record.get(index).ok_or_else(|| FolioError::QuoteData {
        reason: format!("missing {name} column"),
    })
}

fn parse_f64(record: &csv::StringRecord, index: usize, name: &str) -> Result<f64, FolioError> {
    field(record, index, name)?
        .parse()
        .map_err(|e| FolioError::QuoteData {
            reason: format!("invalid {name} value: {e}"),
        })
}

fn parse_i64(record: &csv::StringRecord, index: usize, name: &str) -> Result<i64, FolioError> {
    field(record, index, name)?
        .parse()
        .map_err(|e| FolioError::QuoteData {
            reason: format!("invalid {name} value: {e}"),
        })
}

impl QuotePort for CsvQuoteAdapter {
    fn fetch_quote(
        &self,
        ticker: &str,
        at: Option<NaiveDateTime>,
    ) -> Result<PriceBar, FolioError> {
        let rows = self.read_rows(ticker, at)?;

        let (row, asof) = match at {
            Some(ts) => {
                let row = rows.iter().find(|r| r.date == ts.date()).ok_or_else(|| {
                    FolioError::QuoteUnavailable {
                        ticker: ticker.to_string(),
                        date: Some(ts.date()),
                    }
                })?;
                (row, ts)
            }
            None => {
                let row = rows.last().ok_or_else(|| FolioError::QuoteUnavailable {
                    ticker: ticker.to_string(),
                    date: None,
                })?;
                (row, row.date.and_time(NaiveTime::MIN))
            }
        };

        Ok(PriceBar {
            ticker: ticker.to_string(),
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            dividends: row.dividends,
            split_factor: row.split_factor,
            asof,
        })
    }
}
