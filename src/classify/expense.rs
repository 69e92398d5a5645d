//! Rule-based expense categorization

use super::result::{ClassificationResult, ExpenseCategory, ExpenseGuess};
use crate::models::Money;

const KEYWORD_CONFIDENCE: f64 = 0.7;

/// Keyword groups, checked in order; the first group with any match wins
const CATEGORY_RULES: &[(&[&str], ExpenseCategory)] = &[
    (
        &["uber", "lyft", "taxi", "train", "flight", "hotel"],
        ExpenseCategory::Travel,
    ),
    (
        &["lunch", "dinner", "coffee", "restaurant", "food"],
        ExpenseCategory::Meals,
    ),
    (
        &["amazon", "software", "subscription", "license"],
        ExpenseCategory::Software,
    ),
    (
        &["office", "supplies", "printer", "desk"],
        ExpenseCategory::Office,
    ),
    (
        &["course", "training", "book", "conference"],
        ExpenseCategory::Training,
    ),
    (
        &["salary", "payment", "invoice", "freelance"],
        ExpenseCategory::Payroll,
    ),
    (
        &["advertising", "marketing", "social media", "campaign"],
        ExpenseCategory::Marketing,
    ),
];

/// Above this amount an unmatched description is treated as equipment
const EQUIPMENT_THRESHOLD: Money = Money::from_units(1000);
/// Below this amount an unmatched description is miscellaneous
const MISCELLANEOUS_THRESHOLD: Money = Money::from_units(50);

/// Guess a category for a transaction description and amount
///
/// Never fails. Negative amounts are not validated here and simply fall
/// into the small-amount branch.
pub fn classify_expense(description: &str, amount: Money) -> ClassificationResult<ExpenseGuess> {
    let lower = description.to_lowercase();

    if let Some((keywords, category)) = CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
    {
        return ClassificationResult::heuristic(
            ExpenseGuess {
                category: *category,
            },
            KEYWORD_CONFIDENCE,
            format!("Matched keywords: {}", keywords.join(", ")),
        );
    }

    let (category, confidence, reasoning) = if amount > EQUIPMENT_THRESHOLD {
        (
            ExpenseCategory::Equipment,
            0.5,
            "High amount suggests equipment purchase",
        )
    } else if amount < MISCELLANEOUS_THRESHOLD {
        (
            ExpenseCategory::Miscellaneous,
            0.4,
            "Small amount, categorizing as miscellaneous",
        )
    } else {
        (ExpenseCategory::Other, 0.3, "No clear category match found")
    };

    ClassificationResult::heuristic(ExpenseGuess { category }, confidence, reasoning)
}
