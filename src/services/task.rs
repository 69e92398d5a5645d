//! Task service
//!
//! Business logic for task management: creation (plain or classifier
//! assisted), edits, completion toggling, deletion and filtered listing.

use chrono::NaiveDate;
use tracing::info;

use crate::classify::{Assistant, ClassificationResult, Classifier, TaskGuess, DEFAULT_TASK_TITLE};
use crate::error::{TaskflowError, TaskflowResult};
use crate::models::{Priority, StatusFilter, Task, TaskId};
use crate::storage::Storage;

/// Service for task management
pub struct TaskService<'a> {
    storage: &'a Storage,
}

/// Options for filtering tasks
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    /// Case-insensitive category match
    pub category: Option<String>,
    pub limit: Option<usize>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, task: &Task) -> bool {
        self.status.matches(task)
            && self.priority.map_or(true, |p| task.priority == p)
            && self
                .category
                .as_deref()
                .map_or(true, |c| task.category.eq_ignore_ascii_case(c))
    }
}

/// Input for creating a new task
#[derive(Debug, Clone, Default)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub category: String,
    pub estimated_hours: Option<f64>,
}

/// Changes to apply to an existing task; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<NaiveDate>>,
    pub category: Option<String>,
    /// `Some(None)` clears the estimate
    pub estimated_hours: Option<Option<f64>>,
}

impl<'a> TaskService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new task
    pub fn create(&self, input: CreateTaskInput) -> TaskflowResult<Task> {
        let mut task = Task::new(input.title.trim(), input.category.trim());
        task.description = normalize_text(input.description);
        task.priority = input.priority.unwrap_or_default();
        task.due_date = input.due_date;
        task.estimated_hours = input.estimated_hours;

        self.insert(task)
    }

    /// Create a task from free text using the classifier
    ///
    /// The guessed title, priority and estimate are used; the full text is
    /// kept as the description and the task is flagged as assisted. A guessed
    /// title that trims to nothing becomes [`DEFAULT_TASK_TITLE`].
    pub fn create_from_text<C: Classifier>(
        &self,
        text: &str,
        category: &str,
        due_date: Option<NaiveDate>,
        assistant: &Assistant<C>,
    ) -> TaskflowResult<(Task, ClassificationResult<TaskGuess>)> {
        let guess = assistant.parse_task(text)?;

        let title = match guess.result.title.trim() {
            "" => DEFAULT_TASK_TITLE,
            title => title,
        };
        let mut task = Task::new(title, category.trim());
        task.description = normalize_text(Some(text.to_string()));
        task.priority = guess.result.priority;
        task.estimated_hours = Some(guess.result.estimated_hours);
        task.due_date = due_date;
        task.ai_enhanced = true;

        let task = self.insert(task)?;
        Ok((task, guess))
    }

    fn insert(&self, task: Task) -> TaskflowResult<Task> {
        task.validate()
            .map_err(|e| TaskflowError::Validation(e.to_string()))?;

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;

        info!(id = %task.id, ai_enhanced = task.ai_enhanced, "created task");
        Ok(task)
    }

    pub fn get(&self, id: TaskId) -> TaskflowResult<Option<Task>> {
        self.storage.tasks.get(id)
    }

    /// Find a task by ID or ID prefix
    pub fn find(&self, identifier: &str) -> TaskflowResult<Option<Task>> {
        self.storage.tasks.find(identifier)
    }

    /// Find a task or fail with a not-found error
    pub fn require(&self, identifier: &str) -> TaskflowResult<Task> {
        self.find(identifier)?
            .ok_or_else(|| TaskflowError::task_not_found(identifier))
    }

    /// List tasks, newest first
    pub fn list(&self, filter: TaskFilter) -> TaskflowResult<Vec<Task>> {
        let mut tasks = self.storage.tasks.get_all()?;
        tasks.retain(|t| filter.matches(t));
        if let Some(limit) = filter.limit {
            tasks.truncate(limit);
        }
        Ok(tasks)
    }

    /// Apply edits to a task
    pub fn update(&self, id: TaskId, input: UpdateTaskInput) -> TaskflowResult<Task> {
        let mut task = self
            .storage
            .tasks
            .get(id)?
            .ok_or_else(|| TaskflowError::task_not_found(id.to_string()))?;

        if let Some(title) = input.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = input.description {
            task.description = normalize_text(description);
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(due_date) = input.due_date {
            task.due_date = due_date;
        }
        if let Some(category) = input.category {
            task.category = category.trim().to_string();
        }
        if let Some(estimate) = input.estimated_hours {
            task.estimated_hours = estimate;
        }

        task.validate()
            .map_err(|e| TaskflowError::Validation(e.to_string()))?;

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;

        info!(id = %task.id, "updated task");
        Ok(task)
    }

    /// Flip a task between pending and completed
    pub fn toggle(&self, id: TaskId) -> TaskflowResult<Task> {
        let mut task = self
            .storage
            .tasks
            .get(id)?
            .ok_or_else(|| TaskflowError::task_not_found(id.to_string()))?;

        task.toggle();
        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;

        info!(id = %task.id, completed = task.completed, "toggled task");
        Ok(task)
    }

    /// Delete a task
    pub fn delete(&self, id: TaskId) -> TaskflowResult<Task> {
        let task = self
            .storage
            .tasks
            .delete(id)?
            .ok_or_else(|| TaskflowError::task_not_found(id.to_string()))?;
        self.storage.tasks.save()?;

        info!(id = %task.id, "deleted task");
        Ok(task)
    }
}

/// Trim optional text, treating blank as absent
pub(crate) fn normalize_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssistSettings, TaskflowPaths};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaskflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(title: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: title.to_string(),
            category: "General".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_task() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let task = service
            .create(CreateTaskInput {
                description: Some("  ".into()),
                priority: Some(Priority::High),
                ..input("  Book flights  ")
            })
            .unwrap();

        assert_eq!(task.title, "Book flights");
        assert_eq!(task.description, None);
        assert_eq!(task.priority, Priority::High);
        assert!(!task.ai_enhanced);
        assert!(storage.paths().tasks_file().exists());
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let err = service.create(input("   ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.tasks.count().unwrap(), 0);
    }

    #[test]
    fn test_create_from_text() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);
        let assistant = Assistant::heuristic(AssistSettings::default());

        let (task, guess) = service
            .create_from_text(
                "Urgent: analyze Q3 churn. Share with the team!",
                "Work",
                None,
                &assistant,
            )
            .unwrap();

        assert_eq!(task.title, "Urgent: analyze Q3 churn");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.estimated_hours, Some(1.5));
        assert_eq!(
            task.description.as_deref(),
            Some("Urgent: analyze Q3 churn. Share with the team!")
        );
        assert!(task.ai_enhanced);
        assert_eq!(guess.confidence, 0.6);
    }

    #[test]
    fn test_create_from_text_with_blank_first_sentence() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);
        let assistant = Assistant::heuristic(AssistSettings::default());

        let (task, guess) = service
            .create_from_text("   ! fix the login page asap", "Work", None, &assistant)
            .unwrap();

        assert_eq!(guess.result.title, "   ");
        assert_eq!(task.title, DEFAULT_TASK_TITLE);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(
            task.description.as_deref(),
            Some("! fix the login page asap")
        );
        assert_eq!(storage.tasks.count().unwrap(), 1);
    }

    #[test]
    fn test_create_from_text_respects_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);
        let assistant = Assistant::heuristic(AssistSettings {
            task_parsing: false,
            ..AssistSettings::default()
        });

        let err = service
            .create_from_text("anything", "Work", None, &assistant)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_toggle_and_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let a = service.create(input("A")).unwrap();
        service.create(input("B")).unwrap();

        let toggled = service.toggle(a.id).unwrap();
        assert!(toggled.completed);

        let active = service
            .list(TaskFilter::new().status(StatusFilter::Active))
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "B");

        let completed = service
            .list(TaskFilter::new().status(StatusFilter::Completed))
            .unwrap();
        assert_eq!(completed[0].id, a.id);

        assert!(!service.toggle(a.id).unwrap().completed);
    }

    #[test]
    fn test_update_and_clear_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);
        let task = service
            .create(CreateTaskInput {
                estimated_hours: Some(2.0),
                due_date: NaiveDate::from_ymd_opt(2025, 1, 1),
                ..input("Draft")
            })
            .unwrap();

        let updated = service
            .update(
                task.id,
                UpdateTaskInput {
                    title: Some("Final".into()),
                    due_date: Some(None),
                    estimated_hours: Some(None),
                    category: Some("Work".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.due_date, None);
        assert_eq!(updated.estimated_hours, None);
        assert_eq!(updated.category, "Work");

        let err = service
            .update(
                task.id,
                UpdateTaskInput {
                    estimated_hours: Some(Some(-1.0)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);

        let task = service.create(input("Temp")).unwrap();
        service.delete(task.id).unwrap();
        assert!(service.delete(task.id).unwrap_err().is_not_found());
        assert!(service.require("tsk-00000000").unwrap_err().is_not_found());
    }

    #[test]
    fn test_filter_by_priority_and_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TaskService::new(&storage);
        service
            .create(CreateTaskInput {
                priority: Some(Priority::High),
                category: "Work".into(),
                ..input("A")
            })
            .unwrap();
        service.create(input("B")).unwrap();

        let high = service
            .list(TaskFilter::new().priority(Priority::High))
            .unwrap();
        assert_eq!(high.len(), 1);

        let work = service.list(TaskFilter::new().category("work")).unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(service.list(TaskFilter::new().limit(1)).unwrap().len(), 1);
    }
}
