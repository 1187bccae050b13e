pub mod category;
pub mod ports;
pub mod totals;
pub mod transaction;
