pub mod totals_writer;
pub mod transaction_reader;
