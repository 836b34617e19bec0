use serde::{Deserialize, Serialize};

use super::Amount;

/// Entry ids are millisecond timestamps, bumped forward on collision.
pub type EntryId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }

    /// Sign used when rendering an amount of this kind.
    pub fn sign(&self) -> char {
        match self {
            Kind::Income => '+',
            Kind::Expense => '-',
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense item.
/// Entries are immutable once recorded; the only way to change one is to
/// delete it and add a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry")]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    /// Always positive; the direction comes from `kind`
    pub amount: Amount,
    pub kind: Kind,
}

/// Stored shape of an entry. Older ledgers wrote the kind as `type`;
/// when both fields are present `kind` wins.
#[derive(Deserialize)]
struct StoredEntry {
    id: EntryId,
    description: String,
    amount: Amount,
    kind: Option<Kind>,
    #[serde(rename = "type")]
    legacy_kind: Option<Kind>,
}

impl TryFrom<StoredEntry> for Entry {
    type Error = String;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        let kind = stored
            .kind
            .or(stored.legacy_kind)
            .ok_or_else(|| "missing field `kind`".to_string())?;
        Ok(Entry::new(stored.id, stored.description, stored.amount, kind))
    }
}

impl Entry {
    /// Build an entry from already validated parts.
    pub fn new(id: EntryId, description: impl Into<String>, amount: Amount, kind: Kind) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
        }
    }
}
