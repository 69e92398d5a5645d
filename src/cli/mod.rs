//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod classify;
pub mod config;
pub mod export;
pub mod stats;
pub mod task;
pub mod transaction;

pub use classify::{handle_classify_command, ClassifyCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use stats::handle_stats_command;
pub use task::{handle_task_command, TaskCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TaskflowError, TaskflowResult};
use crate::models::Money;

/// Today's date in the local timezone
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(input: &str) -> TaskflowResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        TaskflowError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse an optional date argument where "none" or "" clears the value
pub(crate) fn parse_clearable_date(input: &str) -> TaskflowResult<Option<NaiveDate>> {
    if input.trim().is_empty() || input.trim().eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

/// Parse an amount argument
pub(crate) fn parse_amount(input: &str) -> TaskflowResult<Money> {
    Money::parse(input).map_err(|_| {
        TaskflowError::Validation(format!(
            "Invalid amount format: '{}'. Use a format like '12.50' or '100'",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(parse_date("03/09/2025").unwrap_err().is_validation());
        assert_eq!(parse_clearable_date("none").unwrap(), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), Money::from_cents(1250));
        assert!(parse_amount("twelve").unwrap_err().is_validation());
    }
}
