use category_totals::application::channel::aggregate_via_channel;
use category_totals::application::direct::aggregate_direct;
use category_totals::application::locked::aggregate_locked;
use category_totals::application::sequential::aggregate;
use category_totals::domain::totals::CategoryTotals;
use category_totals::domain::transaction::Transaction;
use category_totals::infrastructure::generator::{
    GROCERY_AMOUNT, GROCERY_CODE, RESTAURANT_AMOUNT, RESTAURANT_CODE, make_transactions,
};
use std::sync::Arc;

const PAIRS: usize = 500_000;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_one_million_records_across_all_strategies() {
    let records: Arc<[Transaction]> = make_transactions(PAIRS).unwrap().into();
    assert_eq!(records.len(), 1_000_000);

    let expected = CategoryTotals::from([
        (GROCERY_CODE, 5_000_000_000),
        (RESTAURANT_CODE, 5_100_000_000),
    ]);
    assert_eq!(GROCERY_AMOUNT * PAIRS as i64, 5_000_000_000);
    assert_eq!(RESTAURANT_AMOUNT * PAIRS as i64, 5_100_000_000);

    assert_eq!(aggregate(Some(&records[..])).unwrap(), expected);

    for workers in [4, 10] {
        let locked = aggregate_locked(Some(records.clone()), workers).await.unwrap();
        assert_eq!(locked, expected, "locked with {} workers", workers);

        let direct = aggregate_direct(Some(records.clone()), workers).await.unwrap();
        assert_eq!(direct, expected, "direct with {} workers", workers);

        let channel = aggregate_via_channel(Some(records.clone()), workers).await.unwrap();
        assert_eq!(channel, expected, "channel with {} workers", workers);
    }
}
