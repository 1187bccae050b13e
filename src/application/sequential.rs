use crate::domain::ports::TotalsAggregator;
use crate::domain::totals::{CategoryTotals, PartialTotals};
use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Sums amounts per category in a single linear pass.
///
/// This is the reference result every concurrent strategy has to match.
/// `None` is rejected with [`AggregationError::EmptyInput`]; an empty slice
/// yields empty totals.
pub fn aggregate(records: Option<&[Transaction]>) -> Result<CategoryTotals> {
    let records = records.ok_or(AggregationError::EmptyInput)?;
    accumulate(records).finish()
}

/// Unchecked running sums of `records`, for callers that merge further
/// partials before range-checking.
pub fn accumulate(records: &[Transaction]) -> PartialTotals {
    let mut partial = PartialTotals::new();
    for record in records {
        partial.add(&record.category_code, record.amount);
    }
    partial
}

/// Single-threaded baseline. It has no workers, so `worker_count` is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAggregator;

#[async_trait]
impl TotalsAggregator for SequentialAggregator {
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn aggregate(
        &self,
        records: Option<Arc<[Transaction]>>,
        _worker_count: i64,
    ) -> Result<CategoryTotals> {
        aggregate(records.as_deref())
    }
}
