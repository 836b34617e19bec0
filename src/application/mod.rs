// Application layer: the ledger store that every client (CLI, tests, a
// future UI) goes through to read or mutate entries.

pub mod error;
pub mod ledger_store;

pub use error::*;
pub use ledger_store::*;
