//! Run metadata persisted across load cycles.

use std::collections::HashMap;

use parking_lot::RwLock;

/// A scalar key/value store that survives across load cycles.
///
/// Loaders use this for small bookkeeping values such as conditional-request
/// markers; it is not a content store.
pub trait MetaStore: Send + Sync {
    /// Returns the value for the given key, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets the value for the given key.
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`MetaStore`].
#[derive(Debug, Default)]
pub struct MemoryMeta {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryMeta {
    /// Creates an empty metadata store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetaStore for MemoryMeta {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }
}
