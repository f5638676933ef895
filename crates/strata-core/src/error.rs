//! Error types for content loaders.

use thiserror::Error;

/// Errors surfaced to the host from a load cycle.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The loader is misconfigured. Fatal; retrying the cycle cannot
    /// succeed until the configuration changes.
    #[error("loader configuration error: {0}")]
    Configuration(String),

    /// The backing source failed in a way the loader does not handle.
    /// Propagated to the host scheduler, which owns retry and reporting.
    #[error("load failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LoaderError {
    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Wraps a source error.
    pub fn source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }

    /// Returns true if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = LoaderError::configuration("target path must be a directory");
        assert_eq!(
            err.to_string(),
            "loader configuration error: target path must be a directory"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_source_chain() {
        let io = std::io::Error::other("boom");
        let err = LoaderError::source(io);

        use std::error::Error;
        assert!(err.source().is_some());
        assert!(!err.is_configuration());
    }
}
