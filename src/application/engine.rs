use super::channel::ChannelAggregator;
use super::direct::DirectWriteAggregator;
use super::locked::LockedAggregator;
use super::partition::{PartitionPolicy, covered_len};
use super::sequential::{self, SequentialAggregator};
use crate::domain::ports::AggregatorBox;
use crate::domain::totals::CategoryTotals;
use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use log::debug;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    Sequential,
    Locked,
    Direct,
    Channel,
}

impl Strategy {
    pub const PARALLEL: [Strategy; 3] = [Strategy::Locked, Strategy::Direct, Strategy::Channel];

    pub fn aggregator(self, policy: PartitionPolicy) -> AggregatorBox {
        match self {
            Strategy::Sequential => Box::new(SequentialAggregator),
            Strategy::Locked => Box::new(LockedAggregator::new(policy)),
            Strategy::Direct => Box::new(DirectWriteAggregator::new(policy)),
            Strategy::Channel => Box::new(ChannelAggregator::new(policy)),
        }
    }
}

/// The entry point used by callers that pick a strategy at runtime.
///
/// `TotalsEngine` carries the partition policy shared by every parallel
/// strategy it runs. It holds no state between calls; each call owns the
/// totals it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalsEngine {
    policy: PartitionPolicy,
}

impl TotalsEngine {
    pub fn new(policy: PartitionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PartitionPolicy {
        self.policy
    }

    pub async fn aggregate(
        &self,
        strategy: Strategy,
        records: Option<Arc<[Transaction]>>,
        worker_count: i64,
    ) -> Result<CategoryTotals> {
        let aggregator = strategy.aggregator(self.policy);
        debug!("running {} aggregation", aggregator.name());
        aggregator.aggregate(records, worker_count).await
    }

    /// Runs every parallel strategy and checks each against the sequential
    /// totals of the records the partitioner actually covers.
    ///
    /// Returns the agreed totals, or `Mismatch` naming the first strategy
    /// that disagrees.
    pub async fn cross_check(
        &self,
        records: Option<Arc<[Transaction]>>,
        worker_count: i64,
    ) -> Result<CategoryTotals> {
        let records = records.ok_or(AggregationError::EmptyInput)?;
        let covered = covered_len(records.len(), worker_count, self.policy)?;
        let baseline = sequential::aggregate(Some(&records[..covered]))?;

        for strategy in Strategy::PARALLEL {
            let aggregator = strategy.aggregator(self.policy);
            let totals = aggregator
                .aggregate(Some(Arc::clone(&records)), worker_count)
                .await?;
            if totals != baseline {
                return Err(AggregationError::Mismatch {
                    strategy: aggregator.name(),
                });
            }
            debug!("{} aggregation agrees with the sequential baseline", aggregator.name());
        }

        Ok(baseline)
    }
}
