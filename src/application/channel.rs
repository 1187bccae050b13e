use super::partition::{PartitionPolicy, chunk_ranges};
use super::sequential;
use crate::domain::ports::TotalsAggregator;
use crate::domain::totals::{CategoryTotals, PartialTotals};
use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fan-out/fan-in over a channel.
///
/// Each worker sums its chunk and sends the partial totals as one message.
/// A single collector merges exactly one message per worker and range-checks
/// the result once. Nothing is shared between workers and no lock is taken; a
/// partial map changes owner when it is sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelAggregator {
    policy: PartitionPolicy,
}

impl ChannelAggregator {
    pub fn new(policy: PartitionPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl TotalsAggregator for ChannelAggregator {
    fn name(&self) -> &'static str {
        "channel"
    }

    async fn aggregate(
        &self,
        records: Option<Arc<[Transaction]>>,
        worker_count: i64,
    ) -> Result<CategoryTotals> {
        let records = records.ok_or(AggregationError::EmptyInput)?;
        let chunks = chunk_ranges(records.len(), worker_count, self.policy)?;
        let expected = chunks.len();
        debug!("channel: spawning {} workers over {} records", expected, records.len());

        let (sender, receiver) = mpsc::channel::<PartialTotals>(1);
        for chunk in chunks {
            let records = Arc::clone(&records);
            let sender = sender.clone();
            tokio::spawn(async move {
                let partial = sequential::accumulate(&records[chunk]);
                if sender.send(partial).await.is_err() {
                    debug!("channel: collector stopped before partial totals were delivered");
                }
            });
        }
        // Only worker senders remain, so a worker that dies without sending
        // closes the channel instead of leaving the collector waiting.
        drop(sender);

        collect(receiver, expected).await
    }
}

/// Merges exactly `expected` partials from `receiver`.
///
/// Fails with [`AggregationError::MissingPartials`] when every sender is gone
/// before that many have arrived.
async fn collect(
    mut receiver: mpsc::Receiver<PartialTotals>,
    expected: usize,
) -> Result<CategoryTotals> {
    let mut merged = PartialTotals::new();
    for received in 0..expected {
        match receiver.recv().await {
            Some(partial) => merged.merge(partial),
            None => {
                return Err(AggregationError::MissingPartials { expected, received });
            }
        }
    }
    receiver.close();

    merged.finish()
}

/// Channel aggregation with the truncating partitioner.
pub async fn aggregate_via_channel(
    records: Option<Arc<[Transaction]>>,
    worker_count: i64,
) -> Result<CategoryTotals> {
    ChannelAggregator::default()
        .aggregate(records, worker_count)
        .await
}
