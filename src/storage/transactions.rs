//! Transaction store for JSON storage
//!
//! Owns the in-memory transaction sequence and mirrors it to
//! transactions.json. Every successful add rewrites the whole file.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info, warn};

use crate::error::TrackerError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Append-only store of transactions, insertion order preserved
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new transaction store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load transactions from disk
    ///
    /// A missing file means no transactions yet. A malformed file is a
    /// `Parse` error and leaves the in-memory sequence untouched.
    pub fn load(&self) -> Result<(), TrackerError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded transactions"
        );
        *data = transactions;
        Ok(())
    }

    /// Validate and append a transaction, then persist the whole sequence
    ///
    /// Invalid input is rejected with a `Validation` error before anything
    /// changes. If the write fails, the in-memory append is rolled back so
    /// memory and file stay in agreement.
    pub fn add(&self, txn: Transaction) -> Result<(), TrackerError> {
        if let Err(e) = txn.validate() {
            warn!(error = %e, "Rejected transaction");
            return Err(TrackerError::Validation(e.to_string()));
        }

        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.push(txn);
        if let Err(e) = write_json_atomic(&self.path, &*data) {
            data.pop();
            return Err(e);
        }

        debug!(count = data.len(), "Persisted transactions");
        Ok(())
    }

    /// Get all transactions in insertion order
    pub fn all(&self) -> Result<Vec<Transaction>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }

    /// Check if the store holds no transactions
    pub fn is_empty(&self) -> Result<bool, TrackerError> {
        Ok(self.count()? == 0)
    }
}
