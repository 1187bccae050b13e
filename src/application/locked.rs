use super::partition::{PartitionPolicy, chunk_ranges};
use super::sequential;
use crate::domain::ports::TotalsAggregator;
use crate::domain::totals::{CategoryTotals, PartialTotals};
use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Aggregates each chunk into a private partial map, then merges the
/// partials into one shared map under a single lock.
///
/// The lock is held only for the merge of one chunk's partial totals, never
/// while a chunk is being summed. The merged sums are range-checked once,
/// after every worker has joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockedAggregator {
    policy: PartitionPolicy,
}

impl LockedAggregator {
    pub fn new(policy: PartitionPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl TotalsAggregator for LockedAggregator {
    fn name(&self) -> &'static str {
        "locked"
    }

    async fn aggregate(
        &self,
        records: Option<Arc<[Transaction]>>,
        worker_count: i64,
    ) -> Result<CategoryTotals> {
        let records = records.ok_or(AggregationError::EmptyInput)?;
        let chunks = chunk_ranges(records.len(), worker_count, self.policy)?;
        debug!("locked: spawning {} workers over {} records", chunks.len(), records.len());

        let shared = Arc::new(Mutex::new(PartialTotals::new()));
        let mut workers = JoinSet::new();
        for chunk in chunks {
            let records = Arc::clone(&records);
            let shared = Arc::clone(&shared);
            workers.spawn(async move {
                let partial = sequential::accumulate(&records[chunk]);
                shared.lock().await.merge(partial);
            });
        }

        // Returning early drops the set, which aborts the remaining workers.
        while let Some(joined) = workers.join_next().await {
            joined?;
        }

        let merged = std::mem::take(&mut *shared.lock().await);
        merged.finish()
    }
}

/// Lock-based aggregation with the truncating partitioner.
pub async fn aggregate_locked(
    records: Option<Arc<[Transaction]>>,
    worker_count: i64,
) -> Result<CategoryTotals> {
    LockedAggregator::default()
        .aggregate(records, worker_count)
        .await
}
