//! The host context injected into each load cycle.

use std::sync::Arc;

use crate::digest::generate_digest;
use crate::meta::{MemoryMeta, MetaStore};
use crate::store::{ContentStore, MemoryStore};

/// Digest function supplied by the host.
pub type DigestFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Collaborators a loader needs for one load cycle.
///
/// The context is built by the host and passed into every
/// [`Loader::load`](crate::Loader::load) call; loaders hold no references to
/// the store or metadata between cycles.
#[derive(Clone)]
pub struct LoaderContext {
    store: Arc<dyn ContentStore>,
    meta: Arc<dyn MetaStore>,
    digest: DigestFn,
}

impl LoaderContext {
    /// Creates a context over the given store and metadata, with the default
    /// digest function.
    pub fn new(store: Arc<dyn ContentStore>, meta: Arc<dyn MetaStore>) -> Self {
        Self {
            store,
            meta,
            digest: Arc::new(|content| generate_digest(content)),
        }
    }

    /// Creates a context backed by fresh in-memory collaborators.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryMeta::new()))
    }

    /// Replaces the digest function.
    pub fn with_digest(mut self, digest: DigestFn) -> Self {
        self.digest = digest;
        self
    }

    /// Returns the content store.
    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    /// Returns the run metadata store.
    pub fn meta(&self) -> &dyn MetaStore {
        self.meta.as_ref()
    }

    /// Computes the digest for a content body.
    pub fn digest(&self, content: &str) -> String {
        (self.digest)(content)
    }
}

impl std::fmt::Debug for LoaderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderContext")
            .field("records", &self.store.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ContentRecord;

    #[test]
    fn test_in_memory_context() {
        let ctx = LoaderContext::in_memory();
        assert!(ctx.store().is_empty());
        assert!(ctx.meta().get("key").is_none());
    }

    #[test]
    fn test_default_digest() {
        let ctx = LoaderContext::in_memory();
        assert_eq!(ctx.digest("body"), generate_digest("body"));
    }

    #[test]
    fn test_custom_digest() {
        let ctx = LoaderContext::in_memory()
            .with_digest(Arc::new(|content| format!("len:{}", content.len())));
        assert_eq!(ctx.digest("four"), "len:4");
    }

    #[test]
    fn test_store_access_through_context() {
        let ctx = LoaderContext::in_memory();
        ctx.store().set(ContentRecord::new("a.md", "body", "d"));
        assert_eq!(ctx.store().len(), 1);
    }
}
