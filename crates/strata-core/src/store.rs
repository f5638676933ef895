//! Content store contract and in-memory implementation.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::record::ContentRecord;

/// A key/value store holding the records produced by a loader.
///
/// The host guarantees that load cycles never overlap, so implementations
/// only need interior locking to be shareable behind `Arc`, not to arbitrate
/// concurrent writers.
pub trait ContentStore: Send + Sync {
    /// Removes all records.
    fn clear(&self);

    /// Upserts one record, keyed by its id.
    fn set(&self, record: ContentRecord);

    /// Returns the record with the given id, if present.
    fn get(&self, id: &str) -> Option<ContentRecord>;

    /// Returns all record ids in insertion order.
    fn ids(&self) -> Vec<String>;

    /// Returns the number of records.
    fn len(&self) -> usize;

    /// Returns true if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory [`ContentStore`] preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<IndexMap<String, ContentRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> Vec<ContentRecord> {
        self.records.read().values().cloned().collect()
    }
}

impl ContentStore for MemoryStore {
    fn clear(&self) {
        self.records.write().clear();
    }

    fn set(&self, record: ContentRecord) {
        let mut records = self.records.write();
        records.insert(record.id().to_string(), record);
    }

    fn get(&self, id: &str) -> Option<ContentRecord> {
        self.records.read().get(id).cloned()
    }

    fn ids(&self) -> Vec<String> {
        self.records.read().keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }
}
