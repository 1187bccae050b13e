use category_totals::application::engine::{Strategy, TotalsEngine};
use category_totals::application::partition::PartitionPolicy;
use category_totals::domain::ports::AggregatorBox;
use category_totals::domain::totals::CategoryTotals;
use category_totals::error::AggregationError;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_aggregators_as_trait_objects() {
    let records = common::records(&["5411", "5812", "5411", "5812"], &[100_00, 200_00, 400_00, 300_00]);
    let expected = CategoryTotals::from([("5411", 500_00), ("5812", 500_00)]);

    let aggregators: Vec<AggregatorBox> = [
        Strategy::Sequential,
        Strategy::Locked,
        Strategy::Direct,
        Strategy::Channel,
    ]
    .into_iter()
    .map(|strategy| strategy.aggregator(PartitionPolicy::Truncate))
    .collect();

    // Verify Send + Sync by running each boxed aggregator on its own task
    let mut handles = Vec::new();
    for aggregator in aggregators {
        let records = records.clone();
        handles.push(tokio::spawn(async move {
            let totals = aggregator.aggregate(Some(records), 2).await;
            (aggregator.name(), totals)
        }));
    }

    for handle in handles {
        let (name, totals) = handle.await.unwrap();
        assert_eq!(totals.unwrap(), expected, "{}", name);
    }
}

#[tokio::test]
async fn test_cross_check_reports_truncated_totals() {
    let records = common::records(&["A", "B", "A", "C", "B"], &[100, 200, 400, 300, 50]);

    let totals = TotalsEngine::default()
        .cross_check(Some(records.clone()), 2)
        .await
        .unwrap();
    assert_eq!(totals, CategoryTotals::from([("A", 500), ("B", 200), ("C", 300)]));

    let engine = TotalsEngine::new(PartitionPolicy::RemainderToLast);
    assert_eq!(engine.policy(), PartitionPolicy::RemainderToLast);
    let totals = engine.cross_check(Some(records), 2).await.unwrap();
    assert_eq!(totals.sum_of(&["A", "B", "C"]).unwrap(), 1050);
}

#[tokio::test]
async fn test_engine_rejects_negative_workers() {
    let records = common::records(&["A"], &[1]);
    let result = TotalsEngine::default()
        .aggregate(Strategy::Channel, Some(records), -3)
        .await;
    assert!(matches!(result, Err(AggregationError::InvalidWorkerCount(-3))));
}
