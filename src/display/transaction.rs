//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::{Money, Transaction};

const TITLE_WIDTH: usize = 32;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

/// Amount with its direction: income positive, expenses negative
pub fn signed_amount(txn: &Transaction, symbol: &str) -> String {
    if txn.is_income() {
        format!("+{}", txn.amount.format_with_symbol(symbol))
    } else {
        format!("-{}", txn.amount.format_with_symbol(symbol))
    }
}

/// Format a list of transactions as a table with income and expense totals
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            title: truncate(&txn.title, TITLE_WIDTH),
            category: txn.category.clone(),
            amount: signed_amount(txn, symbol),
            tags: txn.tags.joined(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    let income: Money = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses: Money = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    format!(
        "{}\n\n{} transactions  income {}  expenses {}",
        table,
        transactions.len(),
        income.format_with_symbol(symbol),
        expenses.format_with_symbol(symbol)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Title:       {}\n", txn.title));
    output.push_str(&format!("  Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("  Amount:      {}\n", signed_amount(txn, symbol)));
    output.push_str(&format!("  Type:        {}\n", txn.kind));
    output.push_str(&format!("  Category:    {}\n", txn.category));

    if !txn.tags.is_empty() {
        output.push_str(&format!("  Tags:        {}\n", txn.tags.joined(", ")));
    }

    if let Some(suggested) = &txn.ai_suggested_category {
        let confidence = txn
            .ai_confidence
            .map(|c| format!(" ({:.0}%)", c * 100.0))
            .unwrap_or_default();
        output.push_str(&format!("  Suggested:   {}{}\n", suggested, confidence));
    }

    if let Some(description) = &txn.description {
        output.push_str(&format!("  Notes:       {}\n", description));
    }

    output
}
