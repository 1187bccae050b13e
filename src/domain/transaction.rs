use serde::{Deserialize, Serialize};

/// A single card charge.
///
/// Records are plain values: nothing is validated on construction and the
/// aggregation strategies only ever read them. `amount` is in minor currency
/// units and may be zero or negative (refunds).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "bill", alias = "amount")]
    pub amount: i64,
    #[serde(rename = "time", alias = "timestamp")]
    pub timestamp: i64,
    #[serde(rename = "mcc", alias = "category_code")]
    pub category_code: String,
    pub status: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: i64,
        timestamp: i64,
        category_code: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            timestamp,
            category_code: category_code.into(),
            status: status.into(),
        }
    }
}
