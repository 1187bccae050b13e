//! Sources of transaction records that need no file: synthetic data for
//! load runs and benchmarks.

pub mod generator;
