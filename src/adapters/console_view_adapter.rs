//! Console text rendering of entity snapshots.

use crate::domain::portfolio::Portfolio;
use crate::domain::snapshot::{
    PositionSnapshot, QuoteSnapshot, Snapshot, TransactionSnapshot,
};
use crate::domain::transaction::Side;
use crate::ports::view_port::ViewPort;

const RULE: &str = "=====================================";

pub struct ConsoleViewAdapter;

impl ConsoleViewAdapter {
    fn render_quote(&self, q: &QuoteSnapshot) -> String {
        format!(
            "{RULE}\n{ticker} Quote\n\tPrice: ${price:.2}\n\tDate: {date}\n\tTime: {time}\n{RULE}",
            ticker = q.ticker,
            price = q.price,
            date = q.asof.format("%Y-%m-%d"),
            time = q.asof.format("%H:%M:%S"),
        )
    }

    fn render_transaction(&self, t: &TransactionSnapshot) -> String {
        let mut out = format!(
            "{RULE}\n{ticker} ({side}) Transaction\n\tPrice: ${price:.2}\n\tQuantity: {quantity}\n",
            ticker = t.ticker,
            side = t.side.label(),
            price = t.executed_price,
            quantity = t.quantity,
        );
        match t.side {
            Side::Buy => out.push_str(&format!("\tValue: ${:.2}\n", t.value)),
            Side::Sell => out.push_str(&format!("\tValue: -${:.2}\n", t.value.abs())),
            Side::None => {}
        }
        out.push_str(&format!(
            "\tDate Time: {}\n{RULE}",
            t.executed_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out
    }

    fn render_position(&self, p: &PositionSnapshot) -> String {
        let (start, end) = match p.date_range {
            Some((lo, hi)) => (
                lo.format("%Y-%m-%d").to_string(),
                hi.format("%Y-%m-%d").to_string(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        format!(
            "{RULE}\n{ticker} Position\n\tPurchase Value: ${purchase:.2}\n\tCurrent Value: ${current:.2}\n\tQuantity: {quantity}\n\tStart Date: {start}\n\tEnd Date: {end}\n{RULE}",
            ticker = p.ticker,
            purchase = p.purchase_value,
            current = p.current_value,
            quantity = p.quantity,
        )
    }
}

impl ViewPort for ConsoleViewAdapter {
    fn render(&self, snapshot: &Snapshot) -> String {
        match snapshot {
            Snapshot::Quote(q) => self.render_quote(q),
            Snapshot::Transaction(t) => self.render_transaction(t),
            Snapshot::Position(p) => self.render_position(p),
        }
    }

    fn summarize(&self, portfolio: &Portfolio) -> String {
        let mut out = String::from("Portfolio:\n");
        for pos in portfolio.positions_sorted() {
            out.push_str(&format!("{}: {}\n", pos.ticker(), pos.quantity()));
        }
        out.push_str(&format!("Cash: ${:.2}\n", portfolio.cash_balance()));
        out.push_str(&format!("Total value: ${:.2}\n", portfolio.total_value()));
        out
    }
}
