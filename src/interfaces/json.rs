use crate::domain::totals::CategoryTotals;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::{Read, Write};

#[derive(Deserialize)]
#[serde(untagged)]
enum TransactionsDocument {
    Wrapped {
        #[serde(rename = "Transactions", alias = "transactions")]
        transactions: Vec<Transaction>,
    },
    Bare(Vec<Transaction>),
}

/// Reads `{"Transactions": [...]}` or a bare array of transactions.
///
/// Unlike the CSV reader this is all-or-nothing: one bad entry fails the document.
pub fn read_transactions<R: Read>(source: R) -> Result<Vec<Transaction>> {
    let document: TransactionsDocument = serde_json::from_reader(source)?;
    Ok(match document {
        TransactionsDocument::Wrapped { transactions } => transactions,
        TransactionsDocument::Bare(transactions) => transactions,
    })
}

/// Writes totals as a JSON object keyed by category, in category order.
pub fn write_totals<W: Write>(mut sink: W, totals: &CategoryTotals) -> Result<()> {
    let ordered: BTreeMap<&str, i64> = totals.sorted().into_iter().collect();
    serde_json::to_writer_pretty(&mut sink, &ordered)?;
    writeln!(sink)?;
    Ok(())
}
