use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use log::warn;
use std::ops::Range;

/// What happens to the `len % workers` records that do not fill a whole chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PartitionPolicy {
    /// Every chunk holds exactly `len / workers` records and the trailing
    /// remainder is left out of the aggregate.
    #[default]
    Truncate,
    /// The last chunk also takes the trailing remainder.
    RemainderToLast,
}

/// Validates a caller supplied worker count.
pub fn worker_count(requested: i64) -> Result<usize> {
    if requested <= 0 {
        return Err(AggregationError::InvalidWorkerCount(requested));
    }
    usize::try_from(requested).map_err(|_| AggregationError::TooManyWorkers(requested))
}

/// Number of leading records the chunks of `len` records cover under `policy`.
pub fn covered_len(len: usize, requested: i64, policy: PartitionPolicy) -> Result<usize> {
    let workers = worker_count(requested)?;
    Ok(match policy {
        PartitionPolicy::Truncate => (len / workers) * workers,
        PartitionPolicy::RemainderToLast => len,
    })
}

/// Index ranges of the contiguous, non-overlapping chunks, one per worker,
/// in input order starting at index 0.
///
/// A count whose ranges cannot be allocated is reported as
/// [`AggregationError::TooManyWorkers`].
pub fn chunk_ranges(len: usize, requested: i64, policy: PartitionPolicy) -> Result<Vec<Range<usize>>> {
    let workers = worker_count(requested)?;
    let chunk_size = len / workers;
    let mut ranges: Vec<Range<usize>> = Vec::new();
    ranges
        .try_reserve_exact(workers)
        .map_err(|_| AggregationError::TooManyWorkers(requested))?;
    for worker in 0..workers {
        ranges.push(worker * chunk_size..(worker + 1) * chunk_size);
    }

    let remainder = len - chunk_size * workers;
    if remainder > 0 {
        match policy {
            PartitionPolicy::Truncate => {
                warn!(
                    "{} of {} records do not fill a chunk for {} workers and are left out of the totals",
                    remainder, len, workers
                );
            }
            PartitionPolicy::RemainderToLast => {
                if let Some(last) = ranges.last_mut() {
                    last.end = len;
                }
            }
        }
    }

    Ok(ranges)
}

/// Splits `records` into `worker_count` chunks, dropping any trailing remainder.
pub fn partition(records: &[Transaction], worker_count: i64) -> Result<Vec<&[Transaction]>> {
    partition_with(records, worker_count, PartitionPolicy::Truncate)
}

pub fn partition_with(
    records: &[Transaction],
    worker_count: i64,
    policy: PartitionPolicy,
) -> Result<Vec<&[Transaction]>> {
    Ok(chunk_ranges(records.len(), worker_count, policy)?
        .into_iter()
        .map(|range| &records[range])
        .collect())
}
