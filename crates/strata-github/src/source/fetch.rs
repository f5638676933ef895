//! Tagged results for directory fetches.

use crate::client::RemoteEntry;

/// The outcome of a conditional directory fetch.
///
/// The two non-error shapes the endpoint can legitimately produce are
/// discriminated explicitly; a path resolving to a single file is an error,
/// not a variant.
#[derive(Debug)]
pub enum DirectoryFetch {
    /// The directory changed relative to the supplied marker (or no marker
    /// was supplied). Carries the fresh listing and the new change marker
    /// from the response headers, when present.
    Changed {
        /// The ordered directory listing.
        entries: Vec<RemoteEntry>,
        /// The entity tag for this listing state.
        etag: Option<String>,
    },

    /// The remote reported the directory unchanged relative to the supplied
    /// marker. No listing was transferred. This is the steady-state fast
    /// path, not an error.
    NotModified,
}

impl DirectoryFetch {
    /// Returns true if the directory changed.
    pub fn has_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}
