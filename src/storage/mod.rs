mod file;
mod memory;

pub use file::*;
pub use memory::*;

use thiserror::Error;

/// Key under which the whole ledger is stored.
pub const LEDGER_KEY: &str = "transactions";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque string key-value store backing the ledger.
/// Calls are synchronous; the ledger never retries or checks for partial writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
