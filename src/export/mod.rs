//! Export module for TaskFlow
//!
//! Provides data export in two formats:
//! - CSV: spreadsheet-compatible task and transaction listings
//! - JSON: machine-readable arrays of records
//!
//! Both can run the records through the redaction filter on the way out.

pub mod csv;
pub mod json;

pub use self::csv::{export_tasks_csv, export_transactions_csv};
pub use self::json::export_json;
