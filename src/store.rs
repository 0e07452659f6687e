//! Persistence seam: the store trait the edit flow talks to, plus an
//! in-memory implementation for tests and demos.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error as StdError;

/// One blocklist entry as the store keeps it.
///
/// `number` is in storage form and may contain the storage wildcard token.
/// It doubles as the entry's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocklistEntry {
    /// User-given label for the entry.
    pub name: String,
    /// Storage-form number pattern, also the key.
    pub number: String,
}

impl BlocklistEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

/// Trait for the blocklist persistence collaborator.
///
/// The store is keyed by the storage-form number string. The core never
/// opens connections or manages transactions; implementations own the
/// resource lifecycle around each call.
pub trait NumberStore {
    /// Error type returned by store operations.
    type Error: StdError + Send + Sync + 'static;

    /// Load the entry stored under the given storage-form number, if any.
    fn load(&self, number: &str) -> Result<Option<BlocklistEntry>, Self::Error>;

    /// Insert a new entry.
    fn insert(&mut self, entry: BlocklistEntry) -> Result<(), Self::Error>;

    /// Replace the entry stored under `original_number` with `entry`.
    ///
    /// The key may change when the user edited the number itself.
    fn update(&mut self, original_number: &str, entry: BlocklistEntry) -> Result<(), Self::Error>;
}

/// In-memory [`NumberStore`] backed by a `HashMap`.
///
/// Used in tests and demos; a real deployment would back this trait with
/// the application's database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, BlocklistEntry>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NumberStore for MemoryStore {
    type Error = Infallible;

    fn load(&self, number: &str) -> Result<Option<BlocklistEntry>, Self::Error> {
        Ok(self.entries.get(number).cloned())
    }

    fn insert(&mut self, entry: BlocklistEntry) -> Result<(), Self::Error> {
        self.entries.insert(entry.number.clone(), entry);
        Ok(())
    }

    fn update(&mut self, original_number: &str, entry: BlocklistEntry) -> Result<(), Self::Error> {
        self.entries.remove(original_number);
        self.entries.insert(entry.number.clone(), entry);
        Ok(())
    }
}
