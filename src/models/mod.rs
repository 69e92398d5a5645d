//! Core data models for TaskFlow
//!
//! Tasks and transactions are the two collections the application keeps;
//! everything else is derived from them.

pub mod ids;
pub mod money;
pub mod task;
pub mod transaction;

pub use ids::{TaskId, TransactionId};
pub use money::Money;
pub use task::{Priority, StatusFilter, Task};
pub use transaction::{Tags, Transaction, TransactionKind};
