use std::collections::HashSet;

use chrono::Utc;

use crate::domain::{compute_totals, parse_amount, Entry, EntryId, Kind, Totals};
use crate::io::{render_csv, render_json};
use crate::storage::{KeyValueStore, LEDGER_KEY};

use super::{LedgerError, ValidationError};

/// Owner of the ledger: the ordered entry list plus the store it is mirrored to.
/// This is the only way to read or mutate entries. Every successful mutation
/// is followed by a full flush before the call returns.
pub struct LedgerStore<S: KeyValueStore> {
    entries: Vec<Entry>,
    storage: S,
    /// Highest id issued or loaded so far
    last_id: EntryId,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Load the ledger from `storage`.
    ///
    /// A failed read, a missing or blank value, or a value that does not
    /// parse as a list of entries all yield an empty ledger. Parsed entries
    /// are adopted as they are.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get(LEDGER_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<Entry>>(&raw) {
                    Ok(entries) => entries,
                    Err(err) => {
                        tracing::warn!("stored ledger is unreadable, starting empty: {err}");
                        Vec::new()
                    }
                }
            }
            Ok(_) => Vec::new(),
            Err(err) => {
                tracing::warn!("failed to read stored ledger, starting empty: {err}");
                Vec::new()
            }
        };

        let last_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        tracing::debug!("loaded {} entries", entries.len());

        Self {
            entries,
            storage,
            last_id,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Validate raw input and record a new entry at the end of the ledger.
    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        kind: &str,
    ) -> Result<Entry, LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        let amount = parse_amount(amount).map_err(ValidationError::from)?;
        let kind =
            Kind::from_str(kind).ok_or_else(|| ValidationError::UnknownKind(kind.to_string()))?;

        let entry = Entry::new(self.next_id(), description, amount, kind);
        self.entries.push(entry.clone());

        if let Err(err) = self.persist() {
            self.entries.pop();
            return Err(err);
        }

        tracing::info!("added {} entry {} ({})", entry.kind, entry.id, entry.amount);
        Ok(entry)
    }

    /// Remove the entry with the given id. Unknown ids are not an error;
    /// the ledger is flushed either way.
    pub fn delete(&mut self, id: EntryId) -> Result<(), LedgerError> {
        let previous = self.entries.clone();
        self.entries.retain(|entry| entry.id != id);
        let removed = previous.len() - self.entries.len();

        if let Err(err) = self.persist() {
            self.entries = previous;
            return Err(err);
        }

        if removed > 0 {
            tracing::info!("deleted entry {id}");
        } else {
            tracing::debug!("no entry with id {id}, nothing deleted");
        }
        Ok(())
    }

    // ========================
    // Queries
    // ========================

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Income, expense and balance, recomputed from the full list.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.entries)
    }

    /// Pretty-printed JSON array of all entries. `[]` when empty.
    pub fn export_json(&self) -> Result<String, LedgerError> {
        Ok(render_json(&self.entries)?)
    }

    /// CSV export, or `None` when there is nothing to export.
    pub fn export_csv(&self) -> Result<Option<String>, LedgerError> {
        Ok(render_csv(&self.entries)?)
    }

    /// Give back the storage backend, e.g. to reload from it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================
    // Internals
    // ========================

    /// Millisecond timestamp, bumped past the last issued id when the clock
    /// has not moved on. Once ids run out at `i64::MAX`, the smallest free
    /// positive id is reused instead.
    fn next_id(&mut self) -> EntryId {
        let now = Utc::now().timestamp_millis();
        match self.last_id.checked_add(1) {
            Some(next) => {
                let id = now.max(next);
                self.last_id = id;
                id
            }
            None => self.smallest_free_id(),
        }
    }

    fn smallest_free_id(&self) -> EntryId {
        let used: HashSet<EntryId> = self.entries.iter().map(|entry| entry.id).collect();
        (1..).find(|id| !used.contains(id)).unwrap_or(0)
    }

    /// Write the full ledger under the fixed key.
    fn persist(&mut self) -> Result<(), LedgerError> {
        let payload = serde_json::to_string(&self.entries)?;
        if let Err(err) = self.storage.set(LEDGER_KEY, &payload) {
            tracing::error!("failed to persist ledger: {err}");
            return Err(err.into());
        }
        tracing::debug!("flushed {} entries", self.entries.len());
        Ok(())
    }
}
