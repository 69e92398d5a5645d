//! Display formatting for terminal output
//!
//! Lists render as tables; single records and reports render as aligned
//! text.

pub mod summary;
pub mod task;
pub mod transaction;

pub use summary::{
    format_expense_classification, format_suggestions, format_summary,
    format_task_classification,
};
pub use task::{format_task_details, format_task_list};
pub use transaction::{format_transaction_details, format_transaction_list};

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title here", 10), "a longe...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
