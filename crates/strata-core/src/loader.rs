//! Loader trait definition.

use async_trait::async_trait;

use crate::context::LoaderContext;
use crate::error::LoaderError;

/// A source of content records.
///
/// This trait abstracts over different content backends (remote repository
/// hosts, filesystems, APIs) so the pipeline host can run a load cycle
/// without knowing where the content comes from.
///
/// The host invokes [`load`](Loader::load) on its own schedule and guarantees
/// that invocations never overlap; a loader sees one cycle at a time.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Returns the name of this loader, used for logging and identification.
    fn name(&self) -> &str;

    /// Runs one load cycle against the given context.
    ///
    /// A cycle may leave the store untouched (nothing changed at the source)
    /// or replace its contents wholesale; partial updates are loader-defined.
    ///
    /// # Errors
    ///
    /// - `LoaderError::Configuration` if the loader cannot operate as
    ///   configured; the host should not retry.
    /// - `LoaderError::Source` for unanticipated backend failures; the host
    ///   scheduler decides whether the next scheduled cycle runs.
    async fn load(&self, ctx: &LoaderContext) -> Result<(), LoaderError>;

    /// Returns an optional value-shape descriptor for the records this
    /// loader produces. Opaque to the pipeline; passed through to consumers.
    fn schema(&self) -> Option<&serde_json::Value> {
        None
    }
}
