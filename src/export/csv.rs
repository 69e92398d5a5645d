//! CSV Export functionality
//!
//! Exports tasks and transactions to CSV format. With redaction on, free-text
//! columns go through [`redact_text`] and amounts are masked.

use std::io::Write;

use crate::error::TaskflowResult;
use crate::models::{Task, Transaction};
use crate::privacy::{redact_text, REDACTED};

const TASK_HEADER: [&str; 7] = [
    "Title",
    "Description",
    "Priority",
    "Status",
    "Due Date",
    "Category",
    "Created At",
];

const TRANSACTION_HEADER: [&str; 7] = [
    "Date",
    "Description",
    "Amount",
    "Type",
    "Category",
    "Tags",
    "Notes",
];

/// Export tasks to CSV
pub fn export_tasks_csv<W: Write>(
    tasks: &[Task],
    writer: &mut W,
    redact: bool,
) -> TaskflowResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(TASK_HEADER)?;

    let text = |s: &str| if redact { redact_text(s) } else { s.to_string() };

    for task in tasks {
        csv.write_record([
            text(&task.title),
            text(task.description.as_deref().unwrap_or_default()),
            task.priority.to_string(),
            if task.completed { "Completed" } else { "Pending" }.to_string(),
            task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            task.category.clone(),
            task.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    redact: bool,
) -> TaskflowResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(TRANSACTION_HEADER)?;

    let text = |s: &str| if redact { redact_text(s) } else { s.to_string() };

    for txn in transactions {
        let amount = if redact {
            REDACTED.to_string()
        } else {
            txn.amount.format_with_symbol("")
        };

        csv.write_record([
            txn.date.to_string(),
            text(&txn.title),
            amount,
            txn.kind.to_string(),
            txn.category.clone(),
            txn.tags.joined(", "),
            text(txn.description.as_deref().unwrap_or_default()),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
