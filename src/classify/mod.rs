//! Heuristic text classification
//!
//! Keyword and word-count rules that guess a task's priority and effort or a
//! transaction's category. Despite the "assist" naming in the settings there
//! is no model call anywhere: every guess is deterministic, local and
//! reported with `fallback_used = true`.
//!
//! [`Classifier`] is the seam for a different backend. [`Assistant`] puts
//! the user's [`AssistSettings`] in front of whichever backend is in use.

pub mod expense;
pub mod result;
pub mod task;

pub use expense::classify_expense;
pub use result::{ClassificationResult, ExpenseCategory, ExpenseGuess, TaskGuess};
pub use task::{classify_task, DEFAULT_TASK_TITLE};

use tracing::debug;

use crate::config::AssistSettings;
use crate::error::{TaskflowError, TaskflowResult};
use crate::models::Money;
use crate::privacy::redact_text;

/// A source of task and expense guesses
pub trait Classifier {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Whether text stays inside this process
    fn is_local(&self) -> bool;

    fn classify_task(&self, description: &str) -> ClassificationResult<TaskGuess>;

    fn classify_expense(&self, description: &str, amount: Money)
        -> ClassificationResult<ExpenseGuess>;
}

/// The built-in keyword classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl Classifier for HeuristicClassifier {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn is_local(&self) -> bool {
        true
    }

    fn classify_task(&self, description: &str) -> ClassificationResult<TaskGuess> {
        classify_task(description)
    }

    fn classify_expense(
        &self,
        description: &str,
        amount: Money,
    ) -> ClassificationResult<ExpenseGuess> {
        classify_expense(description, amount)
    }
}

/// Applies the assist toggles and privacy mode around a classifier
pub struct Assistant<C: Classifier = HeuristicClassifier> {
    backend: C,
    settings: AssistSettings,
}

impl Assistant<HeuristicClassifier> {
    /// Assistant backed by the built-in heuristics
    pub fn heuristic(settings: AssistSettings) -> Self {
        Self::new(HeuristicClassifier, settings)
    }
}

impl<C: Classifier> Assistant<C> {
    pub fn new(backend: C, settings: AssistSettings) -> Self {
        Self { backend, settings }
    }

    pub fn settings(&self) -> &AssistSettings {
        &self.settings
    }

    /// Parse a task description, if task parsing is enabled
    pub fn parse_task(&self, description: &str) -> TaskflowResult<ClassificationResult<TaskGuess>> {
        if !self.settings.task_parsing_active() {
            return Err(TaskflowError::Validation(
                "Task parsing is disabled (see `taskflow config set assist.task_parsing true`)"
                    .into(),
            ));
        }
        let text = self.outbound(description);
        debug!(backend = self.backend.name(), "classifying task description");
        Ok(self.backend.classify_task(&text))
    }

    /// Categorize a transaction, if expense categorization is enabled
    pub fn categorize_expense(
        &self,
        description: &str,
        amount: Money,
    ) -> TaskflowResult<ClassificationResult<ExpenseGuess>> {
        if !self.settings.expense_categorization_active() {
            return Err(TaskflowError::Validation(
                "Expense categorization is disabled (see `taskflow config set assist.expense_categorization true`)"
                    .into(),
            ));
        }
        let text = self.outbound(description);
        debug!(backend = self.backend.name(), "categorizing expense");
        Ok(self.backend.classify_expense(&text, amount))
    }

    /// Text as it may be handed to the backend
    fn outbound(&self, text: &str) -> String {
        if self.settings.privacy_mode && !self.backend.is_local() {
            debug!(backend = self.backend.name(), "privacy mode: redacting outbound text");
            redact_text(text)
        } else {
            text.to_string()
        }
    }
}
