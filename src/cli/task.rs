//! Task CLI commands
//!
//! Implements CLI commands for task management.

use clap::{Subcommand, ValueEnum};

use super::{parse_clearable_date, parse_date, today};
use crate::classify::Assistant;
use crate::config::Settings;
use crate::display::{format_task_classification, format_task_details, format_task_list};
use crate::error::{TaskflowError, TaskflowResult};
use crate::models::{Priority, StatusFilter};
use crate::services::{CreateTaskInput, TaskFilter, TaskService, UpdateTaskInput};
use crate::storage::Storage;

/// Which tasks to list
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    All,
    Active,
    Completed,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Active => StatusFilter::Active,
            StatusArg::Completed => StatusFilter::Completed,
        }
    }
}

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    Add {
        /// Task title, or a free-text description with --smart
        text: String,
        /// Let the classifier pick title, priority and estimate
        #[arg(long)]
        smart: bool,
        /// Longer description
        #[arg(short, long, conflicts_with = "smart")]
        description: Option<String>,
        /// Priority (low, medium, high)
        #[arg(short, long, conflicts_with = "smart")]
        priority: Option<Priority>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Category, defaults to the configured task category
        #[arg(short, long)]
        category: Option<String>,
        /// Estimated hours
        #[arg(short, long, conflicts_with = "smart")]
        estimate: Option<f64>,
    },
    /// List tasks
    List {
        /// Completion filter
        #[arg(short, long, value_enum, default_value = "all")]
        status: StatusArg,
        /// Only this priority
        #[arg(short, long)]
        priority: Option<Priority>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of tasks to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show task details
    Show {
        /// Task ID or ID prefix
        id: String,
    },
    /// Edit a task
    Edit {
        /// Task ID or ID prefix
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        /// New description ("" clears it)
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        /// New due date ("none" clears it)
        #[arg(long)]
        due: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// New estimate in hours (0 clears it)
        #[arg(short, long)]
        estimate: Option<f64>,
    },
    /// Mark a task completed, or pending again
    Toggle {
        /// Task ID or ID prefix
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID or ID prefix
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a task command
pub fn handle_task_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TaskCommands,
) -> TaskflowResult<()> {
    let service = TaskService::new(storage);

    match cmd {
        TaskCommands::Add {
            text,
            smart,
            description,
            priority,
            due,
            category,
            estimate,
        } => {
            let due_date = due.as_deref().map(parse_date).transpose()?;
            let category = category.unwrap_or_else(|| settings.default_task_category.clone());

            let task = if smart {
                let assistant = Assistant::heuristic(settings.assist);
                let (task, guess) =
                    service.create_from_text(&text, &category, due_date, &assistant)?;
                println!("Classifier guess:");
                print!("{}", format_task_classification(&guess));
                task
            } else {
                service.create(CreateTaskInput {
                    title: text,
                    description,
                    priority,
                    due_date,
                    category,
                    estimated_hours: estimate,
                })?
            };

            println!("Created task:");
            println!("  ID:       {}", task.id);
            println!("  Title:    {}", task.title);
            println!("  Priority: {}", task.priority);
            if let Some(due) = task.due_date {
                println!("  Due:      {}", due);
            }
        }

        TaskCommands::List {
            status,
            priority,
            category,
            limit,
        } => {
            let mut filter = TaskFilter::new().status(status.into());
            if let Some(priority) = priority {
                filter = filter.priority(priority);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let tasks = service.list(filter)?;
            println!("{}", format_task_list(&tasks, today()));
        }

        TaskCommands::Show { id } => {
            let task = service.require(&id)?;
            print!("{}", format_task_details(&task));
        }

        TaskCommands::Edit {
            id,
            title,
            description,
            priority,
            due,
            category,
            estimate,
        } => {
            let task = service.require(&id)?;

            if title.is_none()
                && description.is_none()
                && priority.is_none()
                && due.is_none()
                && category.is_none()
                && estimate.is_none()
            {
                return Err(TaskflowError::Validation(
                    "Nothing to change; pass at least one field to edit".into(),
                ));
            }

            let input = UpdateTaskInput {
                title,
                description: description.map(Some),
                priority,
                due_date: due.as_deref().map(parse_clearable_date).transpose()?,
                category,
                estimated_hours: estimate.map(|h| if h == 0.0 { None } else { Some(h) }),
            };

            let updated = service.update(task.id, input)?;
            println!("Updated task: {}", updated.id);
            print!("{}", format_task_details(&updated));
        }

        TaskCommands::Toggle { id } => {
            let task = service.require(&id)?;
            let toggled = service.toggle(task.id)?;
            let state = if toggled.completed { "completed" } else { "pending" };
            println!("Marked '{}' as {}", toggled.title, state);
        }

        TaskCommands::Delete { id, force } => {
            let task = service.require(&id)?;

            if !force {
                println!("About to delete task:");
                println!("  {}", task);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(task.id)?;
            println!("Deleted task: {} ({})", deleted.id, deleted.title);
        }
    }

    Ok(())
}
