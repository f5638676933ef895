//! Synchronization driver.
//!
//! One load cycle checks whether the tracked directory changed since the
//! previous cycle and, if so, replaces the store contents with freshly
//! fetched file bodies. Unchanged cycles end without touching the store
//! or the persisted change marker.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use strata_core::{ContentRecord, Loader, LoaderContext, LoaderError};

use crate::client::{GithubContentClient, GithubSourceConfig};
use crate::error::SourceError;
use crate::source::{DirectoryFetch, RepoContents};

/// Metadata key under which the change marker is persisted between cycles.
pub const CHANGE_MARKER_KEY: &str = "if-none-match";

/// The outcome of one load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The remote directory was unchanged (or unreachable); the store and
    /// the persisted marker were left untouched.
    Unchanged,

    /// The store was cleared and repopulated from a fresh listing.
    Refreshed {
        /// Files fetched and written to the store.
        stored: usize,
        /// Listing entries skipped because they no longer resolved to a
        /// plain file.
        skipped: usize,
    },
}

impl CycleOutcome {
    /// Returns true if the cycle left the store untouched.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Drives load cycles against a repository content source.
///
/// The driver owns the change marker's read/write lifecycle and the store's
/// replace-all operation; the source it fetches through is stateless.
pub struct RepoLoader<C> {
    source: C,
    label: String,
    schema: Option<serde_json::Value>,
}

/// A [`RepoLoader`] over the GitHub Contents API.
pub type GithubRepoLoader = RepoLoader<GithubContentClient>;

impl GithubRepoLoader {
    /// Creates a loader for the configured GitHub directory.
    pub fn new(config: GithubSourceConfig) -> Self {
        let label = config.label();
        Self::with_source(GithubContentClient::new(config), label)
    }
}

impl<C: RepoContents> RepoLoader<C> {
    /// Creates a loader over an arbitrary content source.
    pub fn with_source(source: C, label: impl Into<String>) -> Self {
        Self {
            source,
            label: label.into(),
            schema: None,
        }
    }

    /// Attaches a value-shape descriptor, passed through to the host
    /// unchanged.
    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Returns the `owner/repo/path` label this loader reports in logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs one load cycle.
    ///
    /// A remote-reported "not modified" and a status-carrying transport
    /// failure both end the cycle as [`CycleOutcome::Unchanged`] with the
    /// store and marker untouched; distinguishing a remote outage from
    /// "nothing to do" is deliberately left to the remote's own reporting.
    /// All other errors propagate.
    ///
    /// When the directory did change, the new marker is persisted before any
    /// file is fetched, so the marker always reflects the listing that was
    /// actually observed. A file-fetch failure after that point aborts the
    /// cycle and leaves the store partially repopulated until the remote
    /// directory changes again (see crate docs).
    pub async fn load_cycle(&self, ctx: &LoaderContext) -> Result<CycleOutcome, SourceError> {
        info!("loading repo directory {}", self.label);

        let previous = ctx.meta().get(CHANGE_MARKER_KEY);
        debug!("previous change marker: {:?}", previous);

        let fetch = match self.source.fetch_directory(previous.as_deref()).await {
            Ok(fetch) => fetch,
            Err(err) if err.is_transport() => {
                warn!("{} while fetching {}, skipping cycle", err, self.label);
                return Ok(CycleOutcome::Unchanged);
            }
            Err(err) => return Err(err),
        };

        let (entries, etag) = match fetch {
            DirectoryFetch::NotModified => {
                info!("{} not modified, skipping", self.label);
                return Ok(CycleOutcome::Unchanged);
            }
            DirectoryFetch::Changed { entries, etag } => (entries, etag),
        };

        // Persist the marker before any file fetch, so it reflects the
        // listing actually observed even if a later fetch fails.
        if let Some(etag) = etag {
            ctx.meta().set(CHANGE_MARKER_KEY, &etag);
        }

        let files: Vec<_> = entries.into_iter().filter(|e| e.is_file()).collect();

        ctx.store().clear();

        let mut stored = 0;
        let mut skipped = 0;

        for entry in files {
            match self.source.fetch_file(&entry.path).await? {
                None => {
                    info!("skipping {}: no longer a plain file", entry.path);
                    skipped += 1;
                }
                Some(body) => {
                    let digest = ctx.digest(&body);
                    ctx.store()
                        .set(ContentRecord::new(entry.path.as_str(), body, digest));
                    stored += 1;
                }
            }
        }

        debug!(
            "refreshed {}: {} stored, {} skipped",
            self.label, stored, skipped
        );

        Ok(CycleOutcome::Refreshed { stored, skipped })
    }
}

#[async_trait]
impl<C: RepoContents> Loader for RepoLoader<C> {
    fn name(&self) -> &str {
        "github-repo-loader"
    }

    async fn load(&self, ctx: &LoaderContext) -> Result<(), LoaderError> {
        match self.load_cycle(ctx).await {
            Ok(_) => Ok(()),
            Err(err @ SourceError::NotADirectory) => {
                Err(LoaderError::configuration(err.to_string()))
            }
            Err(err) => Err(LoaderError::source(err)),
        }
    }

    fn schema(&self) -> Option<&serde_json::Value> {
        self.schema.as_ref()
    }
}

impl<C> std::fmt::Debug for RepoLoader<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoLoader")
            .field("label", &self.label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_unchanged() {
        assert!(CycleOutcome::Unchanged.is_unchanged());
        assert!(!CycleOutcome::Refreshed {
            stored: 1,
            skipped: 0
        }
        .is_unchanged());
    }

    #[test]
    fn test_loader_name_and_schema() {
        let config = GithubSourceConfig::builder()
            .owner("org")
            .repo("content")
            .path("docs")
            .build()
            .unwrap();

        let loader =
            GithubRepoLoader::new(config).with_schema(serde_json::json!({"type": "string"}));

        assert_eq!(loader.name(), "github-repo-loader");
        assert_eq!(loader.label(), "org/content/docs");
        assert_eq!(loader.schema().unwrap()["type"], "string");
    }
}
