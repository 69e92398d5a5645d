//! Transaction service
//!
//! Provides business logic for transaction management including CRUD operations,
//! filtering, and optional category suggestions from the classifier.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::classify::{Assistant, Classifier};
use crate::error::{TaskflowError, TaskflowResult};
use crate::models::{Money, Tags, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

use super::task::normalize_text;

/// Category used when neither the caller nor the classifier supplies one
pub const FALLBACK_CATEGORY: &str = "Other";

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by category, case-insensitive
    pub category: Option<String>,
    /// Filter by tag
    pub tag: Option<String>,
    /// Filter by date range start
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Filter by date range, both ends inclusive
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self
                .category
                .as_deref()
                .map_or(true, |c| txn.category.eq_ignore_ascii_case(c))
            && self.tag.as_deref().map_or(true, |t| txn.tags.contains(t))
            && self.start_date.map_or(true, |d| txn.date >= d)
            && self.end_date.map_or(true, |d| txn.date <= d)
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub amount: Money,
    pub kind: TransactionKind,
    /// `None` lets the classifier pick, or falls back to [`FALLBACK_CATEGORY`]
    pub category: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub tags: Tags,
}

impl CreateTransactionInput {
    pub fn new(title: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            amount,
            kind: TransactionKind::Expense,
            category: None,
            date,
            description: None,
            tags: Tags::new(),
        }
    }

    /// Text handed to the classifier: title plus description
    fn classification_text(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(desc) if !desc.is_empty() => format!("{} {}", self.title.trim(), desc),
            _ => self.title.trim().to_string(),
        }
    }
}

/// Changes to apply to an existing transaction; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub title: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub tags: Option<Tags>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TaskflowResult<Transaction> {
        let txn = build(input);
        self.insert(txn)
    }

    /// Create a transaction, recording the classifier's category suggestion
    ///
    /// The suggestion and its confidence are always stored. An explicit
    /// category in the input wins over the suggestion.
    pub fn create_categorized<C: Classifier>(
        &self,
        input: CreateTransactionInput,
        assistant: &Assistant<C>,
    ) -> TaskflowResult<Transaction> {
        let guess = assistant.categorize_expense(&input.classification_text(), input.amount)?;
        let suggested = guess.result.category.as_str().to_string();
        debug!(
            category = %suggested,
            confidence = guess.confidence,
            "classifier suggested category"
        );

        let explicit = input.category.is_some();
        let mut txn = build(input);
        if !explicit {
            txn.category = suggested.clone();
        }
        txn.ai_suggested_category = Some(suggested);
        txn.ai_confidence = Some(guess.confidence);

        self.insert(txn)
    }

    fn insert(&self, txn: Transaction) -> TaskflowResult<Transaction> {
        txn.validate()
            .map_err(|e| TaskflowError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, kind = %txn.kind, category = %txn.category, "created transaction");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> TaskflowResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by ID or ID prefix
    pub fn find(&self, identifier: &str) -> TaskflowResult<Option<Transaction>> {
        self.storage.transactions.find(identifier)
    }

    /// Find a transaction or fail with a not-found error
    pub fn require(&self, identifier: &str) -> TaskflowResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| TaskflowError::transaction_not_found(identifier))
    }

    /// List transactions with filtering, newest dated first
    pub fn list(&self, filter: TransactionFilter) -> TaskflowResult<Vec<Transaction>> {
        let mut transactions = match (filter.start_date, filter.end_date) {
            (Some(start), Some(end)) => self.storage.transactions.get_by_date_range(start, end)?,
            _ => self.storage.transactions.get_all()?,
        };

        transactions.retain(|t| filter.matches(t));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// The `count` most recent transactions
    pub fn recent(&self, count: usize) -> TaskflowResult<Vec<Transaction>> {
        self.list(TransactionFilter::new().limit(count))
    }

    /// Apply edits to a transaction
    pub fn update(
        &self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> TaskflowResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| TaskflowError::transaction_not_found(id.to_string()))?;

        if let Some(title) = input.title {
            txn.title = title.trim().to_string();
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(category) = input.category {
            txn.category = category.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(description) = input.description {
            txn.description = normalize_text(description);
        }
        if let Some(tags) = input.tags {
            txn.tags = tags;
        }

        txn.validate()
            .map_err(|e| TaskflowError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> TaskflowResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| TaskflowError::transaction_not_found(id.to_string()))?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }
}

fn build(input: CreateTransactionInput) -> Transaction {
    let category = input
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

    let mut txn = Transaction::new(
        input.title.trim(),
        input.amount,
        input.kind,
        category,
        input.date,
    );
    txn.description = normalize_text(input.description);
    txn.tags = input.tags;
    txn
}
