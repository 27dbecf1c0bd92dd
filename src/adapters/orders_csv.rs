//! Order-list CSV reader for the replay command.
//!
//! Expected columns: `date,side,ticker,quantity` with a header row. Dates
//! are `YYYY-MM-DD`; side is `buy` or `sell`; quantity is a positive share
//! count (direction comes from the side column).

use crate::domain::error::FolioError;
use crate::domain::transaction::Side;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub at: NaiveDateTime,
    pub side: Side,
    pub ticker: String,
    pub quantity: i64,
}

pub fn read_orders(path: &Path) -> Result<Vec<Order>, FolioError> {
    let content = fs::read_to_string(path)?;
    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut orders = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        // header occupies line 1
        let line = index + 2;
        let record = result.map_err(|e| FolioError::InvalidOrder {
            line,
            reason: format!("CSV parse error: {e}"),
        })?;

        let field = |idx: usize, name: &str| -> Result<&str, FolioError> {
            record.get(idx).ok_or_else(|| FolioError::InvalidOrder {
                line,
                reason: format!("missing {name} column"),
            })
        };

        let date_str = field(0, "date")?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            FolioError::InvalidOrder {
                line,
                reason: format!("invalid date {date_str:?}: {e}"),
            }
        })?;

        let side = match field(1, "side")?.to_lowercase().as_str() {
            "buy" => Side::Buy,
            "sell" => Side::Sell,
            other => {
                return Err(FolioError::InvalidOrder {
                    line,
                    reason: format!("unknown side {other:?} (expected buy or sell)"),
                });
            }
        };

        let ticker = field(2, "ticker")?.trim().to_string();
        if ticker.is_empty() {
            return Err(FolioError::InvalidOrder {
                line,
                reason: "empty ticker".into(),
            });
        }

        let quantity: i64 = field(3, "quantity")?.parse().map_err(|e| {
            FolioError::InvalidOrder {
                line,
                reason: format!("invalid quantity: {e}"),
            }
        })?;
        if quantity <= 0 {
            return Err(FolioError::InvalidOrder {
                line,
                reason: format!("quantity must be positive, got {quantity}"),
            });
        }

        orders.push(Order {
            at: date.and_time(NaiveTime::MIN),
            side,
            ticker,
            quantity,
        });
    }

    Ok(orders)
}
