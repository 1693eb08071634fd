//! Property tests for per-symbol statistics.

use aggregator::{AggregationEngine, SymbolStats, TradeEvent};
use proptest::prelude::*;

fn trades() -> impl Strategy<Value = Vec<(f64, u64, i64)>> {
    prop::collection::vec((0.0f64..1_000_000.0, 1u64..10_000, any::<i64>()), 1..200)
}

fn fold(trades: &[(f64, u64, i64)]) -> SymbolStats {
    let (price, quantity, timestamp) = trades[0];
    let mut stats = SymbolStats::create("SYM", price, quantity, timestamp);
    for &(price, quantity, timestamp) in &trades[1..] {
        stats.update(price, quantity, timestamp);
    }
    stats
}

proptest! {
    #[test]
    fn high_low_are_extremes_of_all_prices(trades in trades()) {
        let stats = fold(&trades);

        let max = trades.iter().map(|t| t.0).fold(f64::MIN, f64::max);
        let min = trades.iter().map(|t| t.0).fold(f64::MAX, f64::min);
        prop_assert_eq!(stats.high(), max);
        prop_assert_eq!(stats.low(), min);
    }

    #[test]
    fn high_low_independent_of_order(mut trades in trades()) {
        let forward = fold(&trades);
        trades.reverse();
        let backward = fold(&trades);

        prop_assert_eq!(forward.high(), backward.high());
        prop_assert_eq!(forward.low(), backward.low());
    }

    #[test]
    fn endpoints_follow_application_order(trades in trades()) {
        let stats = fold(&trades);
        let first = trades[0];
        let last = trades[trades.len() - 1];

        prop_assert_eq!(stats.open(), first.0);
        prop_assert_eq!(stats.first_ts(), first.2);
        prop_assert_eq!(stats.close(), last.0);
        prop_assert_eq!(stats.last_ts(), last.2);
        prop_assert_eq!(stats.event_count(), trades.len() as u64);
    }

    #[test]
    fn open_close_within_range(trades in trades()) {
        let stats = fold(&trades);

        prop_assert!(stats.low() <= stats.open() && stats.open() <= stats.high());
        prop_assert!(stats.low() <= stats.close() && stats.close() <= stats.high());
        prop_assert!(stats.low() <= stats.vwap() + 1e-6 && stats.vwap() <= stats.high() + 1e-6);
        prop_assert!(stats.low() <= stats.avg_price() + 1e-6 && stats.avg_price() <= stats.high() + 1e-6);
    }

    #[test]
    fn engine_keeps_one_entry_per_symbol(
        events in prop::collection::vec((0usize..5, 0.0f64..100.0, 1u64..100), 1..300)
    ) {
        let names = ["A", "B", "C", "D", "E"];
        let mut engine = AggregationEngine::new();

        for (i, &(sym, price, quantity)) in events.iter().enumerate() {
            engine.apply(TradeEvent {
                symbol: names[sym].to_string(),
                venue: "V".to_string(),
                price,
                quantity,
                timestamp: i as i64,
            });
        }

        let mut distinct: Vec<usize> = events.iter().map(|e| e.0).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let report = engine.finalize();
        prop_assert_eq!(report.len(), distinct.len());
        prop_assert!(report.windows(2).all(|w| w[0].symbol() < w[1].symbol()));
        let total: u64 = report.iter().map(|s| s.event_count()).sum();
        prop_assert_eq!(total, events.len() as u64);
    }
}
