use super::totals::CategoryTotals;
use super::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A strategy that turns a sequence of transactions into per-category totals.
///
/// `records` is `None` when the caller has no sequence at all, which is
/// reported as `EmptyInput`. Implementations return only after every worker
/// they spawned has finished; a worker that never finishes blocks the call.
#[async_trait]
pub trait TotalsAggregator: Send + Sync {
    fn name(&self) -> &'static str;
    async fn aggregate(
        &self,
        records: Option<Arc<[Transaction]>>,
        worker_count: i64,
    ) -> Result<CategoryTotals>;
}

pub type AggregatorBox = Box<dyn TotalsAggregator>;
