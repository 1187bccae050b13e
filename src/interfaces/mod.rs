//! File formats spoken by the command line front end. The engine itself never
//! touches files; these adapters turn bytes into records and totals into bytes.

pub mod csv;
pub mod json;
pub mod xml;
