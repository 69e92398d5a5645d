//! Stats CLI command
//!
//! Prints the monthly summary, followed by suggestions when they are
//! enabled.

use chrono::{Datelike, NaiveDate};

use super::today;
use crate::config::Settings;
use crate::display::{format_suggestions, format_summary};
use crate::error::{TaskflowError, TaskflowResult};
use crate::reports::{suggest, summarize};
use crate::storage::Storage;

/// Parse a YYYY-MM month argument into its first day
fn parse_month(input: &str) -> TaskflowResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d").map_err(|_| {
        TaskflowError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", input))
    })
}

/// Handle the stats command
pub fn handle_stats_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> TaskflowResult<()> {
    let today = today();
    let reference = match month {
        Some(month) => parse_month(&month)?,
        None => today,
    };

    let tasks = storage.tasks.get_all()?;
    let transactions = storage.transactions.get_all()?;

    let stats = summarize(&tasks, &transactions, reference);
    let label = format!("{:04}-{:02}", reference.year(), reference.month());
    print!(
        "{}",
        format_summary(&stats, &label, &settings.currency_symbol)
    );

    if settings.assist.suggestions_active() {
        println!();
        print!("{}", format_suggestions(&suggest(&tasks, &transactions, today)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2025-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("Feb").is_err());
    }
}
