//! Rule-based task parsing
//!
//! Turns a free-text task description into a title, priority and effort
//! estimate.

use super::result::{ClassificationResult, TaskGuess};
use crate::models::Priority;

/// Title used when the description yields nothing usable
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// Counted in `char`s (Unicode scalar values), so an emoji is one character
const TITLE_MAX_CHARS: usize = 50;
const TASK_CONFIDENCE: f64 = 0.6;
const TASK_REASONING: &str = "Rule-based parsing applied";

/// Priority rules, checked in order; the first matching row wins
const PRIORITY_RULES: &[(&[&str], Priority)] = &[
    (&["urgent", "asap", "important"], Priority::High),
    (&["when you have time", "low priority"], Priority::Low),
];

/// Word-count thresholds, applied in order; a later match overwrites an
/// earlier one rather than adding to it
const EFFORT_RULES: &[(usize, f64)] = &[(50, 4.0), (200, 8.0)];

const BASE_ESTIMATE_HOURS: f64 = 1.0;

/// Case-sensitive markers that stretch the estimate
const DEEP_WORK_MARKERS: &[&str] = &["research", "analyze"];
const DEEP_WORK_FACTOR: f64 = 1.5;

/// Parse a task description into a structured guess
///
/// Never fails: an empty description gives the default title, medium
/// priority and a one hour estimate.
pub fn classify_task(description: &str) -> ClassificationResult<TaskGuess> {
    let guess = TaskGuess {
        title: extract_title(description),
        priority: infer_priority(description),
        estimated_hours: estimate_hours(description),
    };
    ClassificationResult::heuristic(guess, TASK_CONFIDENCE, TASK_REASONING)
}

fn infer_priority(description: &str) -> Priority {
    let lower = description.to_lowercase();
    PRIORITY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, priority)| *priority)
        .unwrap_or(Priority::Medium)
}

fn estimate_hours(description: &str) -> f64 {
    let words = description.split_whitespace().count();

    let mut hours = BASE_ESTIMATE_HOURS;
    for &(threshold, estimate) in EFFORT_RULES {
        if words > threshold {
            hours = estimate;
        }
    }

    if DEEP_WORK_MARKERS.iter().any(|m| description.contains(m)) {
        hours *= DEEP_WORK_FACTOR;
    }
    hours
}

fn extract_title(description: &str) -> String {
    let first_sentence = description
        .split(['.', '!', '?'])
        .next()
        .unwrap_or_default();
    let title: String = first_sentence.chars().take(TITLE_MAX_CHARS).collect();

    if title.is_empty() {
        DEFAULT_TASK_TITLE.to_string()
    } else {
        title
    }
}
