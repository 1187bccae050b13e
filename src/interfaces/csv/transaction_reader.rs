use crate::domain::transaction::Transaction;
use crate::error::Result;
use std::io::Read;

const HEADER_ID: &str = "ID";

/// Reads transactions from CSV rows laid out as `ID,Bill,Time,MCC,Status`.
///
/// Columns are positional. A row whose first field is `ID` is treated as the
/// header and skipped wherever it appears.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily parses rows; a malformed row yields an `Err` and does not end the stream.
    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction>> {
        self.reader
            .into_records()
            .filter(|row| !matches!(row, Ok(record) if record.get(0) == Some(HEADER_ID)))
            .map(|row| -> Result<Transaction> {
                let (id, amount, timestamp, category_code, status): (String, i64, i64, String, String) =
                    row?.deserialize(None)?;
                Ok(Transaction {
                    id,
                    amount,
                    timestamp,
                    category_code,
                    status,
                })
            })
    }
}
