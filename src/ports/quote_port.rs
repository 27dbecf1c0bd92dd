//! Market-data access port trait.

use crate::domain::bar::PriceBar;
use crate::domain::error::FolioError;
use chrono::NaiveDateTime;

/// External quote provider contract.
///
/// Returns the trading day's bar for `ticker` containing `at`, or the most
/// recent available bar when `at` is `None`. Implementations must fail with
/// [`FolioError::QuoteUnavailable`] when no trading data exists for the
/// requested ticker/date rather than zero-filling.
pub trait QuotePort {
    fn fetch_quote(
        &self,
        ticker: &str,
        at: Option<NaiveDateTime>,
    ) -> Result<PriceBar, FolioError>;
}
