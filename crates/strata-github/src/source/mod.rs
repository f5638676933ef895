//! Repository content source abstraction.
//!
//! This module defines the trait the synchronization driver fetches
//! through, and the tagged result types it consumes.

mod fetch;
mod traits;

pub use fetch::DirectoryFetch;
pub use traits::RepoContents;
