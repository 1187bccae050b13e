//! Application layer: the aggregation strategies and the engine that selects
//! between them.
//!
//! Every parallel strategy splits its input with [`partition`], runs one
//! `tokio` task per chunk and blocks until all of them have finished. They
//! differ only in how partial results are combined:
//!
//! - [`locked`] merges per-chunk partial totals under one mutex,
//! - [`direct`] takes the mutex for every single record,
//! - [`channel`] sends partial totals to a single collector over an `mpsc`
//!   channel and takes no lock at all.
//!
//! Sums are kept in `i128` until every partial has been combined and are
//! range-checked into `i64` once, so no strategy's result depends on the
//! order records or partials arrive in.
//!
//! None of them has a timeout. A worker that never finishes stalls the call.

pub mod channel;
pub mod direct;
pub mod engine;
pub mod locked;
pub mod partition;
pub mod sequential;
