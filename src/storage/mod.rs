//! Storage layer for TaskFlow
//!
//! JSON file storage with atomic writes. Each collection lives in its own
//! file under the data directory and is loaded fully into memory.

pub mod file_io;
pub mod tasks;
pub mod transactions;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use tasks::TaskRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::TaskflowPaths;
use crate::error::TaskflowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TaskflowPaths,
    pub tasks: TaskRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TaskflowPaths) -> Result<Self, TaskflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            tasks: TaskRepository::new(paths.tasks_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TaskflowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TaskflowError> {
        self.tasks.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TaskflowError> {
        self.tasks.save()?;
        self.transactions.save()?;
        Ok(())
    }
}
