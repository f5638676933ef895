//! # Strata Core
//!
//! Foundational types and traits for the Strata content-loading pipeline.
//!
//! This crate defines the contract between the pipeline host and content
//! loaders: the [`ContentStore`] that holds loaded records, the [`MetaStore`]
//! that persists scalar run metadata across load cycles, the digest function
//! used to fingerprint content, and the [`Loader`] trait that backends
//! implement.
//!
//! ## Example
//!
//! ```ignore
//! use strata_core::{Loader, LoaderContext};
//!
//! let ctx = LoaderContext::in_memory();
//! my_loader.load(&ctx).await?;
//!
//! for id in ctx.store().ids() {
//!     println!("loaded {}", id);
//! }
//! ```

pub mod context;
pub mod digest;
pub mod error;
pub mod loader;
pub mod meta;
pub mod record;
pub mod store;

// Re-exports
pub use context::{DigestFn, LoaderContext};
pub use digest::generate_digest;
pub use error::LoaderError;
pub use loader::Loader;
pub use meta::{MemoryMeta, MetaStore};
pub use record::{ContentRecord, RenderedContent};
pub use store::{ContentStore, MemoryStore};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }

    #[test]
    fn version_is_semver() {
        let v = version();
        assert_eq!(v.split('.').count(), 3, "Version should be semver");
    }
}
