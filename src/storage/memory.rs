use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single key.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("transactions").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut store = MemoryStore::with_value("transactions", "[]");
        store.set("transactions", "[1]").unwrap();

        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
