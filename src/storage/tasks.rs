//! Task repository for JSON storage
//!
//! Manages loading and saving tasks to tasks.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::TaskflowError;
use crate::models::{Task, TaskId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of tasks.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TaskData {
    tasks: Vec<Task>,
}

/// Repository for task persistence, keyed by ID
pub struct TaskRepository {
    path: PathBuf,
    data: RwLock<HashMap<TaskId, Task>>,
}

impl TaskRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<TaskId, Task>>, TaskflowError> {
        self.data
            .read()
            .map_err(|e| TaskflowError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<TaskId, Task>>, TaskflowError> {
        self.data
            .write()
            .map_err(|e| TaskflowError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load tasks from disk
    ///
    /// A file listing the same ID twice keeps the later entry.
    pub fn load(&self) -> Result<(), TaskflowError> {
        let file_data: TaskData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.clear();
        for task in file_data.tasks {
            data.insert(task.id, task);
        }

        debug!(count = data.len(), path = %self.path.display(), "loaded tasks");
        Ok(())
    }

    /// Save tasks to disk, newest first
    pub fn save(&self) -> Result<(), TaskflowError> {
        let file_data = TaskData {
            tasks: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)?;
        debug!(count = file_data.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn get(&self, id: TaskId) -> Result<Option<Task>, TaskflowError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All tasks, newest created first
    pub fn get_all(&self) -> Result<Vec<Task>, TaskflowError> {
        let mut tasks: Vec<Task> = self.read()?.values().cloned().collect();
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(tasks)
    }

    /// Find a task by full ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> Result<Option<Task>, TaskflowError> {
        if let Ok(id) = identifier.parse::<TaskId>() {
            return self.get(id);
        }

        let data = self.read()?;
        let mut matches = data.values().filter(|t| t.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(task), None) => Ok(Some(task.clone())),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(TaskflowError::Validation(format!(
                "Task ID '{}' is ambiguous; use more characters",
                identifier
            ))),
        }
    }

    /// Insert or update a task
    pub fn upsert(&self, task: Task) -> Result<(), TaskflowError> {
        self.write()?.insert(task.id, task);
        Ok(())
    }

    /// Delete a task, returning it if it existed
    pub fn delete(&self, id: TaskId) -> Result<Option<Task>, TaskflowError> {
        Ok(self.write()?.remove(&id))
    }

    pub fn count(&self) -> Result<usize, TaskflowError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TaskRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let repo = TaskRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_save_reload() {
        let (_temp_dir, repo) = create_test_repo();
        let mut task = Task::new("Write tests", "Work");
        task.due_date = chrono::NaiveDate::from_ymd_opt(2025, 7, 1);
        let id = task.id;

        repo.upsert(task.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = TaskRepository::new(repo.path.clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(id).unwrap(), Some(task));
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let (_temp_dir, repo) = create_test_repo();
        let mut task = Task::new("Draft", "Work");
        repo.upsert(task.clone()).unwrap();

        task.title = "Final".into();
        repo.upsert(task.clone()).unwrap();

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(task.id).unwrap().unwrap().title, "Final");
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        let mut old = Task::new("Old", "x");
        old.created_at = Utc::now() - Duration::days(2);
        let new = Task::new("New", "x");

        repo.upsert(old).unwrap();
        repo.upsert(new).unwrap();

        let titles: Vec<String> = repo.get_all().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        let task = Task::new("Find me", "x");
        repo.upsert(task.clone()).unwrap();

        assert_eq!(repo.find(&task.id.to_string()).unwrap(), Some(task.clone()));
        assert_eq!(
            repo.find(&task.id.as_uuid().to_string()).unwrap(),
            Some(task.clone())
        );
        assert_eq!(repo.find("tsk-zzzz").unwrap(), None);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let task = Task::new("Gone", "x");
        repo.upsert(task.clone()).unwrap();

        assert!(repo.delete(task.id).unwrap().is_some());
        assert!(repo.delete(task.id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
