// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use expense_tracker::application::LedgerStore;
use expense_tracker::storage::{FileStore, MemoryStore};
use expense_tracker::Entry;
use tempfile::TempDir;

/// Helper to create an empty in-memory ledger
pub fn memory_ledger() -> LedgerStore<MemoryStore> {
    LedgerStore::load(MemoryStore::new())
}

/// Helper to create a ledger backed by a temporary directory
pub fn file_ledger() -> Result<(LedgerStore<FileStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let store = LedgerStore::load(FileStore::new(temp_dir.path().join("data")));
    Ok((store, temp_dir))
}

/// Reload a ledger from whatever its backend currently holds
pub fn reload<S: expense_tracker::storage::KeyValueStore>(store: LedgerStore<S>) -> LedgerStore<S> {
    LedgerStore::load(store.into_storage())
}

/// Test fixture: a small month of activity
pub struct SampleEntries;

impl SampleEntries {
    /// Salary, rent, groceries and a side gig
    pub fn record_month<S: expense_tracker::storage::KeyValueStore>(
        store: &mut LedgerStore<S>,
    ) -> Result<Vec<Entry>> {
        Ok(vec![
            store.add("Salary", "2500", "income")?,
            store.add("Rent", "900", "expense")?,
            store.add("Groceries", "143.27", "expense")?,
            store.add("Freelance gig", "320.5", "income")?,
        ])
    }
}
