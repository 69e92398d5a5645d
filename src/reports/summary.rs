//! Monthly summary statistics
//!
//! Task counts over the whole list, money totals over one calendar month.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Task, Transaction, TransactionKind};

/// Derived counts and totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SummaryStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// Expenses dated in the reference month
    pub total_expenses: Money,
    /// Income dated in the reference month
    pub total_income: Money,
    /// Income minus expenses; may be negative
    pub balance: Money,
    /// Completed share of all tasks, as a rounded percentage
    pub productivity_score: u32,
}

/// Summarize the collections for the calendar month containing `reference`
///
/// The caller supplies `reference` (usually today's local date) so the
/// result does not depend on the wall clock.
pub fn summarize(tasks: &[Task], transactions: &[Transaction], reference: NaiveDate) -> SummaryStats {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.completed).count();

    let mut total_expenses = Money::zero();
    let mut total_income = Money::zero();
    for txn in transactions.iter().filter(|t| t.in_month_of(reference)) {
        match txn.kind {
            TransactionKind::Expense => total_expenses += txn.amount,
            TransactionKind::Income => total_income += txn.amount,
        }
    }

    SummaryStats {
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks - completed_tasks,
        total_expenses,
        total_income,
        balance: total_income - total_expenses,
        productivity_score: productivity_score(completed_tasks, total_tasks),
    }
}

fn productivity_score(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(completed: bool) -> Task {
        let mut t = Task::new("t", "General");
        t.completed = completed;
        t
    }

    fn txn(kind: TransactionKind, cents: i64, on: NaiveDate) -> Transaction {
        Transaction::new("x", Money::from_cents(cents), kind, "Other", on)
    }

    #[test]
    fn test_empty_collections() {
        let stats = summarize(&[], &[], date(2025, 6, 15));
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.productivity_score, 0);
    }

    #[test]
    fn test_task_counts_and_score() {
        let tasks = vec![task(true), task(true), task(true), task(false)];
        let stats = summarize(&tasks, &[], date(2025, 6, 15));
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.completed_tasks, 3);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.productivity_score, 75);
    }

    #[test]
    fn test_score_rounds_half_up() {
        let tasks = vec![task(true), task(false), task(false)];
        assert_eq!(summarize(&tasks, &[], date(2025, 1, 1)).productivity_score, 33);

        let tasks = vec![task(true), task(true), task(false)];
        assert_eq!(summarize(&tasks, &[], date(2025, 1, 1)).productivity_score, 67);

        let mut tasks: Vec<Task> = (0..8).map(|_| task(false)).collect();
        tasks[0].completed = true;
        // 12.5 rounds to 13
        assert_eq!(summarize(&tasks, &[], date(2025, 1, 1)).productivity_score, 13);
    }

    #[test]
    fn test_money_totals_are_limited_to_reference_month() {
        let reference = date(2025, 6, 15);
        let transactions = vec![
            txn(TransactionKind::Income, 300_000, date(2025, 6, 1)),
            txn(TransactionKind::Expense, 4_550, date(2025, 6, 30)),
            txn(TransactionKind::Expense, 10_000, date(2025, 6, 2)),
            // other months and years are ignored
            txn(TransactionKind::Expense, 99_999, date(2025, 5, 31)),
            txn(TransactionKind::Income, 99_999, date(2024, 6, 10)),
        ];

        let stats = summarize(&[], &transactions, reference);
        assert_eq!(stats.total_income, Money::from_cents(300_000));
        assert_eq!(stats.total_expenses, Money::from_cents(14_550));
        assert_eq!(stats.balance, Money::from_cents(285_450));
    }

    #[test]
    fn test_negative_balance() {
        let reference = date(2025, 2, 10);
        let transactions = vec![txn(TransactionKind::Expense, 2_000, date(2025, 2, 1))];
        let stats = summarize(&[], &transactions, reference);
        assert_eq!(stats.balance, Money::from_cents(-2_000));
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let reference = date(2025, 3, 1);
        let huge = i64::MAX / 2 + 1;
        let transactions = vec![
            txn(TransactionKind::Income, huge, date(2025, 3, 1)),
            txn(TransactionKind::Income, huge, date(2025, 3, 2)),
            txn(TransactionKind::Expense, huge, date(2025, 3, 3)),
            txn(TransactionKind::Expense, huge, date(2025, 3, 4)),
        ];

        let stats = summarize(&[], &transactions, reference);
        assert_eq!(stats.total_income.cents(), i64::MAX);
        assert_eq!(stats.total_expenses.cents(), i64::MAX);
        assert!(stats.balance.is_zero());
    }
}
