//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{parse_amount, parse_date, today};
use crate::classify::Assistant;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{TaskflowError, TaskflowResult};
use crate::models::{Tags, TransactionKind};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short title (e.g. "Lunch with client")
        title: String,
        /// Amount, always positive (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
        /// Suggest a category from the title and notes
        #[arg(long)]
        auto_categorize: bool,
    },
    /// List transactions
    List {
        /// Only income or only expenses
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Filter by tag
        #[arg(short, long)]
        tag: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or ID prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or ID prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        /// New notes ("" clears them)
        #[arg(short, long)]
        notes: Option<String>,
        /// Replace tags (comma-separated, "" clears them)
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or ID prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TaskflowResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            income,
            category,
            date,
            notes,
            tags,
            auto_categorize,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => today(),
            };

            let mut input = CreateTransactionInput::new(title, amount, date);
            input.kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            input.description = notes;
            input.tags = tags.as_deref().map(Tags::parse).unwrap_or_default();

            let txn = if auto_categorize {
                input.category = category;
                let assistant = Assistant::heuristic(settings.assist);
                service.create_categorized(input, &assistant)?
            } else {
                input.category =
                    Some(category.unwrap_or_else(|| settings.default_expense_category.clone()));
                service.create(input)?
            };

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date);
            println!("  Amount:   {}", txn.amount.format_with_symbol(symbol));
            println!("  Type:     {}", txn.kind);
            println!("  Category: {}", txn.category);
            if let (Some(suggested), Some(confidence)) =
                (&txn.ai_suggested_category, txn.ai_confidence)
            {
                println!(
                    "  Suggested {} ({:.0}% confidence)",
                    suggested,
                    confidence * 100.0
                );
            }
        }

        TransactionCommands::List {
            kind,
            category,
            tag,
            limit,
            from,
            to,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);

            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(tag) = tag {
                filter = filter.tag(tag);
            }
            if let Some(from) = from {
                filter.start_date = Some(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter.end_date = Some(parse_date(&to)?);
            }

            let transactions = service.list(filter)?;
            println!("{}", format_transaction_list(&transactions, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.require(&id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            kind,
            category,
            date,
            notes,
            tags,
        } => {
            let txn = service.require(&id)?;

            let input = UpdateTransactionInput {
                title,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                kind,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
                description: notes.map(Some),
                tags: tags.as_deref().map(Tags::parse),
            };

            if input.title.is_none()
                && input.amount.is_none()
                && input.kind.is_none()
                && input.category.is_none()
                && input.date.is_none()
                && input.description.is_none()
                && input.tags.is_none()
            {
                return Err(TaskflowError::Validation(
                    "Nothing to change; pass at least one field to edit".into(),
                ));
            }

            let updated = service.update(txn.id, input)?;
            println!("Updated transaction: {}", updated.id);
            print!("{}", format_transaction_details(&updated, symbol));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.require(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  {}", txn);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                deleted.title,
                deleted.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
