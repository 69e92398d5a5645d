//! Task display formatting
//!
//! Formats tasks for terminal output in table and detail views.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::Task;

const TITLE_WIDTH: usize = 40;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = " ")]
    status: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Est.")]
    estimate: String,
}

impl TaskRow {
    fn new(task: &Task, today: NaiveDate) -> Self {
        let due = match task.due_date {
            Some(date) if task.is_overdue(today) => format!("{} !", date),
            Some(date) => date.to_string(),
            None => String::new(),
        };

        Self {
            id: task.id.to_string(),
            status: if task.completed { "[x]" } else { "[ ]" },
            title: truncate(&task.title, TITLE_WIDTH),
            priority: task.priority.to_string(),
            due,
            category: task.category.clone(),
            estimate: task.estimated_hours.map(format_hours).unwrap_or_default(),
        }
    }
}

/// Format a list of tasks as a table; overdue due dates are flagged with `!`
pub fn format_task_list(tasks: &[Task], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let rows: Vec<TaskRow> = tasks.iter().map(|t| TaskRow::new(t, today)).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    let pending = tasks.iter().filter(|t| !t.completed).count();
    format!("{}\n\n{} tasks, {} pending", table, tasks.len(), pending)
}

/// Format a single task's details
pub fn format_task_details(task: &Task) -> String {
    let mut output = String::new();

    output.push_str(&format!("Task: {}\n", task.title));
    output.push_str(&format!("  ID:          {}\n", task.id));
    output.push_str(&format!(
        "  Status:      {}\n",
        if task.completed { "Completed" } else { "Pending" }
    ));
    output.push_str(&format!("  Priority:    {}\n", task.priority));
    output.push_str(&format!("  Category:    {}\n", task.category));

    if let Some(due) = task.due_date {
        output.push_str(&format!("  Due:         {}\n", due));
    }
    if let Some(hours) = task.estimated_hours {
        output.push_str(&format!("  Estimate:    {}\n", format_hours(hours)));
    }
    output.push_str(&format!(
        "  Created:     {}\n",
        task.created_at.format("%Y-%m-%d %H:%M")
    ));
    if task.ai_enhanced {
        output.push_str("  Assisted:    yes\n");
    }
    if let Some(description) = &task.description {
        output.push_str(&format!("\n  {}\n", description));
    }

    output
}

/// "1.5h", "4h"
pub(crate) fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}h", hours as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_task_list(&[], today()), "No tasks found.");
    }

    #[test]
    fn test_list_contains_rows_and_footer() {
        let mut late = Task::new("Pay rent", "Home");
        late.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        late.priority = Priority::High;
        let mut done = Task::new("Water plants", "Home");
        done.toggle();

        let output = format_task_list(&[late, done], today());

        assert!(output.contains("Pay rent"));
        assert!(output.contains("2025-06-01 !"));
        assert!(output.contains("[x]"));
        assert!(output.ends_with("2 tasks, 1 pending"));
    }

    #[test]
    fn test_details() {
        let mut task = Task::new("Research vendors", "Work");
        task.estimated_hours = Some(1.5);
        task.description = Some("Research vendors for the new CRM".into());
        task.ai_enhanced = true;

        let output = format_task_details(&task);
        assert!(output.contains("Status:      Pending"));
        assert!(output.contains("Estimate:    1.5h"));
        assert!(output.contains("Assisted:    yes"));
        assert!(output.contains("new CRM"));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(4.0), "4h");
        assert_eq!(format_hours(1.5), "1.5h");
    }
}
