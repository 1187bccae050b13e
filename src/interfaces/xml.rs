use crate::domain::category::describe;
use crate::domain::totals::CategoryTotals;
use crate::domain::transaction::Transaction;
use crate::error::{AggregationError, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Deserialize)]
struct TransactionsDocument {
    #[serde(rename = "transaction", default)]
    transactions: Vec<Transaction>,
}

#[derive(Serialize)]
#[serde(rename = "totals")]
struct TotalsDocument<'a> {
    #[serde(rename = "category")]
    categories: Vec<CategoryEntry<'a>>,
}

#[derive(Serialize)]
struct CategoryEntry<'a> {
    code: &'a str,
    description: &'static str,
    total: i64,
}

/// Reads a `<transactions>` document holding one `<transaction>` element per
/// record, with `id`, `bill`, `time`, `mcc` and `status` children.
///
/// All-or-nothing, like the JSON reader.
pub fn read_transactions<R: BufRead>(source: R) -> Result<Vec<Transaction>> {
    let document: TransactionsDocument =
        quick_xml::de::from_reader(source).map_err(|e| AggregationError::Xml(e.to_string()))?;
    Ok(document.transactions)
}

/// Writes totals as `<totals>` with one `<category>` element per entry, in
/// category order.
pub fn write_totals<W: Write>(mut sink: W, totals: &CategoryTotals) -> Result<()> {
    let document = TotalsDocument {
        categories: totals
            .sorted()
            .into_iter()
            .map(|(code, total)| CategoryEntry {
                code,
                description: describe(code),
                total,
            })
            .collect(),
    };
    let body = quick_xml::se::to_string(&document).map_err(|e| AggregationError::Xml(e.to_string()))?;
    writeln!(sink, "{}", DECLARATION)?;
    writeln!(sink, "{}", body)?;
    Ok(())
}
