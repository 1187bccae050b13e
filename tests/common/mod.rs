#![allow(dead_code)]

use category_totals::domain::transaction::Transaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Records with the given categories and amounts, paired up by position.
pub fn records(categories: &[&str], amounts: &[i64]) -> Arc<[Transaction]> {
    categories
        .iter()
        .zip(amounts)
        .enumerate()
        .map(|(i, (category, amount))| {
            Transaction::new(format!("{:04}", i + 1), *amount, 1606192422 + i as i64, *category, "Done")
        })
        .collect()
}

/// Reproducible random records spread over `categories` distinct codes,
/// including refunds and zero amounts.
pub fn random_records(seed: u64, count: usize, categories: usize) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let category = format!("{}", 5000 + rng.gen_range(0..categories));
            Transaction::new(i.to_string(), rng.gen_range(-5_000..20_000), 0, category, "Done")
        })
        .collect()
}
