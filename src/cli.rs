//! CLI definition and dispatch.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_view_adapter::ConsoleViewAdapter;
use crate::adapters::csv_quote_adapter::CsvQuoteAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::orders_csv::{read_orders, Order};
use crate::adapters::system_clock::SystemClock;
use crate::domain::error::FolioError;
use crate::domain::portfolio::Portfolio;
use crate::domain::transaction::{Side, Transaction};
use crate::ports::clock_port::ClockPort;
use crate::ports::config_port::ConfigPort;
use crate::ports::quote_port::QuotePort;
use crate::ports::view_port::ViewPort;

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Equities portfolio tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and display a quote
    Quote {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        ticker: String,
        /// Trading day (YYYY-MM-DD); omit for the most recent bar
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Replay an order list into a fresh portfolio
    Replay {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        orders: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Quote {
            config,
            ticker,
            date,
        } => run_quote(&config, &ticker, date),
        Command::Replay { config, orders } => run_replay(&config, &orders),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = FolioError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn build_quote_adapter(config: &dyn ConfigPort) -> Result<CsvQuoteAdapter, FolioError> {
    let quotes_dir =
        config
            .get_string("data", "quotes_dir")
            .ok_or_else(|| FolioError::ConfigMissing {
                section: "data".into(),
                key: "quotes_dir".into(),
            })?;
    Ok(CsvQuoteAdapter::new(PathBuf::from(quotes_dir)))
}

/// Split a comma-separated ticker list, dropping empty entries.
pub fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Apply an order list to a fresh portfolio built from config.
///
/// Orders are applied one at a time in file order; the first quote failure
/// aborts the replay with the portfolio state at that point discarded.
pub fn replay(
    config: &dyn ConfigPort,
    quotes: &dyn QuotePort,
    clock: &dyn ClockPort,
    orders: &[Order],
) -> Result<(Portfolio, Vec<Transaction>), FolioError> {
    let cash = config.get_double("portfolio", "cash", 5000.0);
    let tickers = config
        .get_string("portfolio", "tickers")
        .map(|raw| parse_tickers(&raw))
        .unwrap_or_default();

    let mut portfolio = Portfolio::with_tickers(cash, clock.now(), &tickers);
    let mut transactions = Vec::with_capacity(orders.len());
    for order in orders {
        let tx = match order.side {
            Side::Buy => {
                portfolio.buy(quotes, clock, &order.ticker, order.quantity, Some(order.at))?
            }
            Side::Sell | Side::None => {
                portfolio.sell(quotes, clock, &order.ticker, order.quantity, Some(order.at))?
            }
        };
        transactions.push(tx);
    }
    Ok((portfolio, transactions))
}

fn run_quote(config_path: &PathBuf, ticker: &str, date: Option<NaiveDate>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let quotes = match build_quote_adapter(&config) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let at = date.map(|d| d.and_time(NaiveTime::MIN));
    let bar = match quotes.fetch_quote(ticker, at) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let view = ConsoleViewAdapter;
    println!("{}", view.render(&bar.snapshot()));
    ExitCode::SUCCESS
}

fn run_replay(config_path: &PathBuf, orders_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let quotes = match build_quote_adapter(&config) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let orders = match read_orders(orders_path) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Replaying {} orders from {}", orders.len(), orders_path.display());

    let clock = SystemClock;
    let (portfolio, transactions) = match replay(&config, &quotes, &clock, &orders) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let view = ConsoleViewAdapter;
    for tx in &transactions {
        println!("{}", view.render(&tx.snapshot()));
    }
    for pos in portfolio.positions_sorted() {
        println!("{}", view.render(&pos.snapshot()));
    }
    println!("{}", view.summarize(&portfolio));
    ExitCode::SUCCESS
}
