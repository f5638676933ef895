//! # Strata GitHub Backend
//!
//! Loads the contents of one GitHub repository directory into a Strata
//! content store, refreshing only when the remote directory has changed.
//!
//! The backend is a thin adapter: the GitHub Contents API provides listings
//! and file bodies, the entity tag on the listing response acts as the
//! change marker, and the Strata host framework owns persistence, digests
//! and scheduling.
//!
//! ## Failure model
//!
//! A changed cycle clears the store before repopulating it, so no stale
//! file survives a remote rename or delete, at the cost of a transient
//! empty window. Because the change marker is persisted before the file
//! fetches begin, a failure mid-loop leaves the store partially populated
//! and the marker already advanced: a subsequent "not modified" response
//! will not repair the store until the remote directory changes again.
//! Hosts that cannot tolerate that window should stage records and swap
//! them in atomically on their side.
//!
//! ## Example
//!
//! ```ignore
//! use strata_core::LoaderContext;
//! use strata_github::{GithubRepoLoader, GithubSourceConfig};
//!
//! let config = GithubSourceConfig::builder()
//!     .owner("rust-lang")
//!     .repo("rfcs")
//!     .path("text")
//!     .build()?;
//!
//! let loader = GithubRepoLoader::new(config);
//! let ctx = LoaderContext::in_memory();
//!
//! loader.load_cycle(&ctx).await?;
//! ```

pub mod client;
pub mod error;
pub mod loader;
pub mod source;

// Re-exports
pub use client::{EntryKind, GithubContentClient, GithubSourceConfig, RemoteEntry};
pub use error::SourceError;
pub use loader::{CycleOutcome, GithubRepoLoader, RepoLoader, CHANGE_MARKER_KEY};
pub use source::{DirectoryFetch, RepoContents};

// Re-export strata_core for consumers
pub use strata_core;
