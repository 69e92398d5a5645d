//! Service layer for TaskFlow
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence after each change, and the hand-off to
//! the classifier for assisted entry.

pub mod task;
pub mod transaction;

pub use task::{CreateTaskInput, TaskFilter, TaskService, UpdateTaskInput};
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
    FALLBACK_CATEGORY,
};
