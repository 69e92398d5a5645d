//! Classifier output types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Priority;

/// A structured guess with the classifier's self-reported certainty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult<T> {
    /// The guessed payload
    pub result: T,
    /// Certainty in [0, 1]
    pub confidence: f64,
    /// Human-readable justification
    pub reasoning: String,
    /// True when a rule-based fallback produced the guess
    pub fallback_used: bool,
}

impl<T> ClassificationResult<T> {
    pub(crate) fn heuristic(result: T, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            result,
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: reasoning.into(),
            fallback_used: true,
        }
    }

    /// Confidence as a whole percentage, for display
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Guessed fields for a new task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGuess {
    pub title: String,
    pub priority: Priority,
    pub estimated_hours: f64,
}

/// Category buckets the expense classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Travel,
    Meals,
    Software,
    Office,
    Training,
    Payroll,
    Marketing,
    Equipment,
    Miscellaneous,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Meals => "Meals",
            Self::Software => "Software",
            Self::Office => "Office",
            Self::Training => "Training",
            Self::Payroll => "Payroll",
            Self::Marketing => "Marketing",
            Self::Equipment => "Equipment",
            Self::Miscellaneous => "Miscellaneous",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guessed category for a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGuess {
    pub category: ExpenseCategory,
}
