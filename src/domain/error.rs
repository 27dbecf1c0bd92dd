//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for folio.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("transaction ticker {found} does not match position ticker {expected}")]
    TickerMismatch { expected: String, found: String },

    #[error("no quote data for {ticker} {}", when(.date))]
    QuoteUnavailable {
        ticker: String,
        date: Option<NaiveDate>,
    },

    #[error("quote data error: {reason}")]
    QuoteData { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid order at line {line}: {reason}")]
    InvalidOrder { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn when(date: &Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("on {d}"),
        None => "at latest".to_string(),
    }
}

impl From<&FolioError> for std::process::ExitCode {
    fn from(err: &FolioError) -> Self {
        let code: u8 = match err {
            FolioError::Io(_) => 1,
            FolioError::ConfigParse { .. }
            | FolioError::ConfigMissing { .. }
            | FolioError::ConfigInvalid { .. } => 2,
            FolioError::QuoteUnavailable { .. } | FolioError::QuoteData { .. } => 3,
            FolioError::InvalidOrder { .. } => 4,
            FolioError::TickerMismatch { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
