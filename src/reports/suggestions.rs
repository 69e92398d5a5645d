//! Rule-based suggestions shown next to the summary
//!
//! Looks at overdue and high-priority work and at unusually large recent
//! transactions. At most [`MAX_SUGGESTIONS`] are returned, in rule order.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::{Money, Priority, Task, Transaction};

pub const MAX_SUGGESTIONS: usize = 3;

/// How many of the newest transactions are checked for large amounts
const RECENT_WINDOW: usize = 5;

/// What a suggestion is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Warning,
    Priority,
    Finance,
    General,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Warning => "warning",
            Self::Priority => "priority",
            Self::Finance => "finance",
            Self::General => "tip",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Suggestion {
    fn new(kind: SuggestionKind, title: String, message: &str, action: &str) -> Self {
        Self {
            kind,
            title,
            message: message.to_string(),
            action: action.to_string(),
        }
    }
}

/// Build suggestions for the current collections
pub fn suggest(tasks: &[Task], transactions: &[Transaction], today: NaiveDate) -> Vec<Suggestion> {
    let pending: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    let overdue = pending.iter().filter(|t| t.is_overdue(today)).count();
    let high_priority = pending
        .iter()
        .filter(|t| t.priority == Priority::High)
        .count();

    let mut suggestions = Vec::new();

    if overdue > 0 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Warning,
            format!("{} overdue tasks", overdue),
            "Consider rescheduling or delegating these tasks.",
            "Review overdue tasks",
        ));
    }

    if high_priority > 0 {
        suggestions.push(Suggestion::new(
            SuggestionKind::Priority,
            format!("{} high priority tasks", high_priority),
            "Focus on these tasks first for maximum impact.",
            "View high priority",
        ));
    }

    let large = large_recent_transactions(transactions);
    if large > 0 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Finance,
            title: "Large expenses detected".to_string(),
            message: format!(
                "You have {} expenses significantly above average.",
                large
            ),
            action: "Review expenses".to_string(),
        });
    }

    if suggestions.is_empty() && !pending.is_empty() {
        suggestions.push(Suggestion::new(
            SuggestionKind::General,
            "Productivity tip".to_string(),
            "Try breaking down large tasks into smaller, actionable steps.",
            "Learn more",
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Count recent transactions above twice the average expense
///
/// The recent window covers both kinds, while the average is taken over
/// expenses only; with no expenses the average is zero.
fn large_recent_transactions(transactions: &[Transaction]) -> usize {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_WINDOW);

    let expenses: Vec<Money> = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .collect();
    let average_cents = if expenses.is_empty() {
        0.0
    } else {
        expenses.iter().sum::<Money>().cents() as f64 / expenses.len() as f64
    };

    recent
        .iter()
        .filter(|t| t.amount.cents() as f64 > average_cents * 2.0)
        .count()
}
