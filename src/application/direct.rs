use super::partition::{PartitionPolicy, chunk_ranges};
use crate::domain::ports::TotalsAggregator;
use crate::domain::totals::{CategoryTotals, PartialTotals};
use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Workers write every record straight into one shared map, taking the lock
/// once per record. No partial maps are built. The shared sums are
/// range-checked once, after every worker has joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectWriteAggregator {
    policy: PartitionPolicy,
}

impl DirectWriteAggregator {
    pub fn new(policy: PartitionPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl TotalsAggregator for DirectWriteAggregator {
    fn name(&self) -> &'static str {
        "direct"
    }

    async fn aggregate(
        &self,
        records: Option<Arc<[Transaction]>>,
        worker_count: i64,
    ) -> Result<CategoryTotals> {
        let records = records.ok_or(AggregationError::EmptyInput)?;
        let chunks = chunk_ranges(records.len(), worker_count, self.policy)?;
        debug!("direct: spawning {} workers over {} records", chunks.len(), records.len());

        let shared = Arc::new(Mutex::new(PartialTotals::new()));
        let mut workers = JoinSet::new();
        for chunk in chunks {
            let records = Arc::clone(&records);
            let shared = Arc::clone(&shared);
            workers.spawn(async move {
                for record in &records[chunk] {
                    shared.lock().await.add(&record.category_code, record.amount);
                }
            });
        }

        while let Some(joined) = workers.join_next().await {
            joined?;
        }

        let written = std::mem::take(&mut *shared.lock().await);
        written.finish()
    }
}

/// Direct-write aggregation with the truncating partitioner.
pub async fn aggregate_direct(
    records: Option<Arc<[Transaction]>>,
    worker_count: i64,
) -> Result<CategoryTotals> {
    DirectWriteAggregator::default()
        .aggregate(records, worker_count)
        .await
}
