//! Repository content source trait definition.

use async_trait::async_trait;

use super::DirectoryFetch;
use crate::error::SourceError;

/// Read access to one tracked directory in a remote repository.
///
/// This trait is the seam between the synchronization driver and the
/// transport: [`GithubContentClient`](crate::GithubContentClient) implements
/// it over the Contents API, and tests implement it with scripted responses.
#[async_trait]
pub trait RepoContents: Send + Sync {
    /// Fetches the tracked directory's listing, conditionally.
    ///
    /// # Arguments
    ///
    /// * `if_none_match` - the change marker persisted from the previous
    ///   cycle, if any. When it still matches the remote state the fetch
    ///   resolves to [`DirectoryFetch::NotModified`] with no listing.
    ///
    /// # Errors
    ///
    /// - `SourceError::NotADirectory` if the tracked path resolved to a
    ///   single file; fatal misconfiguration.
    /// - `SourceError::Transport` for any non-success, non-304 response.
    async fn fetch_directory(
        &self,
        if_none_match: Option<&str>,
    ) -> Result<DirectoryFetch, SourceError>;

    /// Fetches one file's raw text body.
    ///
    /// Returns `None` when the path no longer resolves to a plain file
    /// (it became a directory, symlink or submodule since the listing was
    /// taken); the caller must treat that as a skip signal, not a failure.
    async fn fetch_file(&self, path: &str) -> Result<Option<String>, SourceError>;
}
