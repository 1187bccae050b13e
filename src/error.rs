use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregationError>;

#[derive(Error, Debug)]
pub enum AggregationError {
    /// The record sequence itself was absent. A present but empty sequence is not an error.
    #[error("no transactions supplied")]
    EmptyInput,
    #[error("worker count must be a positive integer, got {0}")]
    InvalidWorkerCount(i64),
    #[error("cannot allocate chunks for {0} workers")]
    TooManyWorkers(i64),
    #[error("cannot allocate {pairs} synthetic transaction pairs")]
    TooManyRecords { pairs: usize },
    #[error("total for category {category} overflowed a signed 64-bit integer")]
    Overflow { category: String },
    #[error("channel closed after {received} of {expected} partial totals")]
    MissingPartials { expected: usize, received: usize },
    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("{strategy} strategy disagrees with the sequential baseline")]
    Mismatch { strategy: &'static str },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML error: {0}")]
    Xml(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
