//! Summary, suggestion and classifier output formatting

use super::separator;
use super::task::format_hours;
use crate::classify::{ClassificationResult, ExpenseGuess, TaskGuess};
use crate::reports::{Suggestion, SummaryStats};

const REPORT_WIDTH: usize = 40;

/// Format monthly stats; `month` labels the money section (e.g. "2025-01")
pub fn format_summary(stats: &SummaryStats, month: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Tasks\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!("  Total:        {:>8}\n", stats.total_tasks));
    output.push_str(&format!("  Completed:    {:>8}\n", stats.completed_tasks));
    output.push_str(&format!("  Pending:      {:>8}\n", stats.pending_tasks));
    output.push_str(&format!("  Productivity: {:>7}%\n", stats.productivity_score));

    output.push_str(&format!("\nMoney ({})\n", month));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "  Income:       {:>12}\n",
        stats.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expenses:     {:>12}\n",
        stats.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:      {:>12}\n",
        stats.balance.format_with_symbol(symbol)
    ));

    output
}

/// Format suggestions as a short numbered list
pub fn format_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return "No suggestions right now.\n".to_string();
    }

    let mut output = String::from("Suggestions\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    for (i, s) in suggestions.iter().enumerate() {
        output.push_str(&format!("  {}. [{}] {}\n", i + 1, s.kind, s.title));
        output.push_str(&format!("     {}\n", s.message));
        output.push_str(&format!("     -> {}\n", s.action));
    }
    output
}

fn push_provenance<T>(output: &mut String, result: &ClassificationResult<T>) {
    output.push_str(&format!(
        "  Confidence:  {}%\n",
        result.confidence_percent()
    ));
    output.push_str(&format!("  Reasoning:   {}\n", result.reasoning));
    if result.fallback_used {
        output.push_str("  Source:      rule-based\n");
    }
}

pub fn format_task_classification(result: &ClassificationResult<TaskGuess>) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Title:       {}\n", result.result.title));
    output.push_str(&format!("  Priority:    {}\n", result.result.priority));
    output.push_str(&format!(
        "  Estimate:    {}\n",
        format_hours(result.result.estimated_hours)
    ));
    push_provenance(&mut output, result);
    output
}

pub fn format_expense_classification(result: &ClassificationResult<ExpenseGuess>) -> String {
    let mut output = String::new();
    output.push_str(&format!("  Category:    {}\n", result.result.category));
    push_provenance(&mut output, result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify_expense, classify_task};
    use crate::models::Money;
    use crate::reports::SuggestionKind;

    #[test]
    fn test_summary() {
        let stats = SummaryStats {
            total_tasks: 4,
            completed_tasks: 3,
            pending_tasks: 1,
            total_expenses: Money::from_cents(5000),
            total_income: Money::from_cents(2000),
            balance: Money::from_cents(-3000),
            productivity_score: 75,
        };

        let output = format_summary(&stats, "2025-01", "$");
        assert!(output.contains("Productivity:      75%"));
        assert!(output.contains("Money (2025-01)"));
        assert!(output.contains("-$30.00"));
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(format_suggestions(&[]), "No suggestions right now.\n");

        let s = Suggestion {
            kind: SuggestionKind::Warning,
            title: "2 overdue tasks".into(),
            message: "m".into(),
            action: "a".into(),
        };
        let output = format_suggestions(&[s]);
        assert!(output.contains("1. [warning] 2 overdue tasks"));
    }

    #[test]
    fn test_classifications() {
        let output = format_task_classification(&classify_task("research the market"));
        assert!(output.contains("Title:       research the market"));
        assert!(output.contains("Estimate:    1.5h"));
        assert!(output.contains("Confidence:  60%"));
        assert!(output.contains("rule-based"));

        let output = format_expense_classification(&classify_expense("Taxi", Money::from_units(30)));
        assert!(output.contains("Category:    Travel"));
        assert!(output.contains("Confidence:  70%"));
    }
}
