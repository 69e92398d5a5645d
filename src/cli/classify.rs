//! Classify CLI commands
//!
//! Preview what the classifier would guess without creating anything.

use clap::Subcommand;

use super::parse_amount;
use crate::classify::Assistant;
use crate::config::Settings;
use crate::display::{format_expense_classification, format_task_classification};
use crate::error::TaskflowResult;

/// Classify subcommands
#[derive(Subcommand)]
pub enum ClassifyCommands {
    /// Guess title, priority and effort for a task description
    Task {
        /// Free-text description
        text: String,
    },
    /// Guess a category for an expense
    Expense {
        /// Free-text description
        text: String,
        /// Amount (e.g. "45.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a classify command
pub fn handle_classify_command(settings: &Settings, cmd: ClassifyCommands) -> TaskflowResult<()> {
    let assistant = Assistant::heuristic(settings.assist);

    match cmd {
        ClassifyCommands::Task { text } => {
            let result = assistant.parse_task(&text)?;
            print!("{}", format_task_classification(&result));
        }
        ClassifyCommands::Expense { text, amount } => {
            let amount = parse_amount(&amount)?;
            let result = assistant.categorize_expense(&text, amount)?;
            print!("{}", format_expense_classification(&result));
        }
    }

    Ok(())
}
