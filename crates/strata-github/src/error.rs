//! Error types for the GitHub content source.

use thiserror::Error;

/// Errors that can occur when fetching repository contents.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The configured path resolved to a single file, not a directory.
    /// Fatal; the cycle cannot proceed until the configuration changes.
    #[error("target path must be a directory")]
    NotADirectory,

    /// The remote host answered with a non-success, non-304 status
    /// (authentication, rate limit, not-found). Carries the remote status
    /// code; the driver treats this as "no change this cycle".
    #[error("github api error: status {status}")]
    Transport {
        /// The remote HTTP status code.
        status: u16,
    },

    /// A connection-level or response-decoding fault with no remote status.
    /// Unanticipated; propagates uncaught out of the cycle.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The transport-encoded file body could not be decoded to text.
    #[error("invalid content encoding for {path}: {reason}")]
    Decode {
        /// The file path whose content failed to decode.
        path: String,
        /// Why decoding failed.
        reason: String,
    },
}

impl SourceError {
    /// Creates a transport error from a remote status code.
    pub fn transport(status: u16) -> Self {
        Self::Transport { status }
    }

    /// Creates a decode error.
    pub fn decode(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a status-carrying transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns true if this error is fatal and retrying cannot help.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotADirectory)
    }
}
