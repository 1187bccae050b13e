use crate::domain::category::describe;
use crate::domain::totals::CategoryTotals;
use crate::error::Result;
use std::io::Write;

/// Writes category totals as `category,description,total` rows, ordered by category.
pub struct TotalsWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TotalsWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_totals(&mut self, totals: &CategoryTotals) -> Result<()> {
        self.writer.write_record(["category", "description", "total"])?;
        for (category, total) in totals.sorted() {
            let total = total.to_string();
            self.writer
                .write_record([category, describe(category), total.as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
