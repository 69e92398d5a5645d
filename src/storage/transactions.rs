//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::TaskflowError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence, keyed by ID
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<TransactionId, Transaction>>, TaskflowError> {
        self.data
            .read()
            .map_err(|e| TaskflowError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<TransactionId, Transaction>>, TaskflowError> {
        self.data
            .write()
            .map_err(|e| TaskflowError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), TaskflowError> {
        let file_data: TransactionData = read_json(&self.path)?;
        let mut data = self.write()?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        debug!(count = data.len(), path = %self.path.display(), "loaded transactions");
        Ok(())
    }

    /// Save transactions to disk, newest dated first
    pub fn save(&self) -> Result<(), TaskflowError> {
        let file_data = TransactionData {
            transactions: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)?;
        debug!(count = file_data.transactions.len(), "saved transactions");
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TaskflowError> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All transactions, newest dated first
    pub fn get_all(&self) -> Result<Vec<Transaction>, TaskflowError> {
        let mut transactions: Vec<Transaction> = self.read()?.values().cloned().collect();
        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(transactions)
    }

    /// Transactions dated within `start..=end`
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, TaskflowError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    /// Find a transaction by full ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> Result<Option<Transaction>, TaskflowError> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.get(id);
        }

        let data = self.read()?;
        let mut matches = data.values().filter(|t| t.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(Some(txn.clone())),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(TaskflowError::Validation(format!(
                "Transaction ID '{}' is ambiguous; use more characters",
                identifier
            ))),
        }
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), TaskflowError> {
        self.write()?.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, TaskflowError> {
        Ok(self.write()?.remove(&id))
    }

    pub fn count(&self) -> Result<usize, TaskflowError> {
        Ok(self.read()?.len())
    }
}
