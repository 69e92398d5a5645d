//! Reports module for TaskFlow
//!
//! Derived views over the task and transaction collections: the monthly
//! summary and the suggestions shown beside it.

pub mod suggestions;
pub mod summary;

pub use suggestions::{suggest, Suggestion, SuggestionKind, MAX_SUGGESTIONS};
pub use summary::{summarize, SummaryStats};
