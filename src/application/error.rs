use thiserror::Error;

use crate::domain::ParseAmountError;
use crate::io::ExportError;
use crate::storage::StoreError;

/// Rejected input for a new entry. The ledger is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error("Unknown entry kind: {0:?} (expected income or expense)")]
    UnknownKind(String),
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to persist ledger: {0}")]
    Storage(#[from] StoreError),

    #[error("Failed to encode ledger: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl LedgerError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}
