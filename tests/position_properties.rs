//! Property tests for the position fold algebra.

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::Days;
use common::*;
use folio::domain::bar::PriceBar;
use folio::domain::position::Position;
use folio::domain::transaction::Transaction;
use proptest::prelude::*;

fn tx(ticker: &str, quantity: i64, price: f64, day_offset: u64) -> Transaction {
    let at = ts(2021, 1, 1).checked_add_days(Days::new(day_offset)).unwrap();
    let bar = PriceBar {
        ticker: ticker.to_string(),
        open: price,
        high: price,
        low: price,
        close: price,
        volume: 1_000,
        dividends: 0.0,
        split_factor: 0.0,
        asof: at,
    };
    Transaction::from_bar(&bar, quantity, at)
}

fn buy_strategy() -> impl Strategy<Value = Vec<(f64, i64)>> {
    prop::collection::vec((1.0f64..500.0, 1i64..200), 1..12)
}

proptest! {
    /// With no intervening sells, the cost basis is the exact sum of the
    /// paid amounts and the average is basis over shares.
    #[test]
    fn buys_sum_into_cost_basis(buys in buy_strategy()) {
        let mut pos = Position::new("NVDA");
        let mut expected_basis = 0.0;
        let mut expected_shares = 0i64;
        for (i, (price, qty)) in buys.iter().enumerate() {
            pos.fold(&tx("NVDA", *qty, *price, i as u64)).unwrap();
            expected_basis += price * *qty as f64;
            expected_shares += qty;
        }
        prop_assert_eq!(pos.quantity(), expected_shares);
        assert_relative_eq!(pos.purchase_value(), expected_basis, max_relative = 1e-9);
        assert_relative_eq!(
            pos.average_price(),
            expected_basis / expected_shares as f64,
            max_relative = 1e-9
        );
    }

    /// A partial sell never moves the average price.
    #[test]
    fn partial_sell_preserves_average(
        buys in buy_strategy(),
        sell_fraction in 0.01f64..0.99,
        sale_price in 1.0f64..500.0,
    ) {
        let mut pos = Position::new("NVDA");
        for (i, (price, qty)) in buys.iter().enumerate() {
            pos.fold(&tx("NVDA", *qty, *price, i as u64)).unwrap();
        }
        let held = pos.quantity();
        let sell_qty = ((held as f64 * sell_fraction) as i64).max(1).min(held - 1);
        prop_assume!(sell_qty >= 1 && sell_qty < held);

        let avg_before = pos.average_price();
        pos.fold(&tx("NVDA", -sell_qty, sale_price, buys.len() as u64)).unwrap();

        prop_assert_eq!(pos.quantity(), held - sell_qty);
        assert_relative_eq!(pos.average_price(), avg_before, max_relative = 1e-9);
    }

    /// After any fold, valuation snaps to the last folded price and P&L is
    /// its difference against the cost basis.
    #[test]
    fn valuation_snaps_to_last_fold(
        buys in buy_strategy(),
        last_price in 1.0f64..500.0,
        last_qty in -50i64..50,
    ) {
        let mut pos = Position::new("NVDA");
        for (i, (price, qty)) in buys.iter().enumerate() {
            pos.fold(&tx("NVDA", *qty, *price, i as u64)).unwrap();
        }
        pos.fold(&tx("NVDA", last_qty, last_price, buys.len() as u64)).unwrap();

        assert_relative_eq!(
            pos.current_value(),
            pos.quantity() as f64 * last_price,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            pos.pnl(),
            pos.current_value() - pos.purchase_value(),
            max_relative = 1e-9
        );
    }

    /// Selling exactly everything held returns the basis to (numerically
    /// near) zero and resets the average.
    #[test]
    fn full_liquidation_clears_basis(
        buys in buy_strategy(),
        exit_price in 1.0f64..500.0,
    ) {
        let mut pos = Position::new("NVDA");
        for (i, (price, qty)) in buys.iter().enumerate() {
            pos.fold(&tx("NVDA", *qty, *price, i as u64)).unwrap();
        }
        let held = pos.quantity();
        pos.fold(&tx("NVDA", -held, exit_price, buys.len() as u64)).unwrap();

        prop_assert_eq!(pos.quantity(), 0);
        assert_abs_diff_eq!(pos.purchase_value(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.average_price(), 0.0, epsilon = 1e-12);
    }

    /// The covered date range is the min/max of all folded timestamps,
    /// whatever order they arrive in.
    #[test]
    fn date_range_is_fold_order_independent(offsets in prop::collection::vec(0u64..3650, 1..16)) {
        let mut pos = Position::new("NVDA");
        for offset in &offsets {
            pos.fold(&tx("NVDA", 1, 100.0, *offset)).unwrap();
        }
        let lo = *offsets.iter().min().unwrap();
        let hi = *offsets.iter().max().unwrap();
        let expected = (
            ts(2021, 1, 1).checked_add_days(Days::new(lo)).unwrap(),
            ts(2021, 1, 1).checked_add_days(Days::new(hi)).unwrap(),
        );
        prop_assert_eq!(pos.date_range(), Some(expected));
    }
}
