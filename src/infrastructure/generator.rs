use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};

pub const GROCERY_CODE: &str = "5411";
pub const GROCERY_AMOUNT: i64 = 100_00;
pub const RESTAURANT_CODE: &str = "5812";
pub const RESTAURANT_AMOUNT: i64 = 102_00;

// 2020-09-10 12:23:21 UTC and 14:15:21 UTC.
const GROCERY_EPOCH: i64 = 1_599_740_601;
const RESTAURANT_EPOCH: i64 = 1_599_747_321;
// Each pair moves one hour, one minute and one second later.
const PAIR_STEP: i64 = 3_661;

/// Builds `2 * pairs` synthetic records alternating a grocery and a
/// restaurant charge with fixed amounts.
///
/// Fails with [`AggregationError::TooManyRecords`] when that many records
/// cannot be allocated.
pub fn make_transactions(pairs: usize) -> Result<Vec<Transaction>> {
    let mut records = Vec::new();
    pairs
        .checked_mul(2)
        .and_then(|len| records.try_reserve_exact(len).ok())
        .ok_or(AggregationError::TooManyRecords { pairs })?;
    for i in 0..pairs {
        let offset = i as i64 * PAIR_STEP;
        records.push(Transaction::new(
            (2 * i + 1).to_string(),
            GROCERY_AMOUNT,
            GROCERY_EPOCH + offset,
            GROCERY_CODE,
            "Done",
        ));
        records.push(Transaction::new(
            (2 * i + 2).to_string(),
            RESTAURANT_AMOUNT,
            RESTAURANT_EPOCH + offset,
            RESTAURANT_CODE,
            "Done",
        ));
    }
    Ok(records)
}
