//! GitHub Contents API client.
//!
//! This module provides the transport wrapper around the "get content"
//! endpoint, together with its configuration and wire payload types.

mod config;
mod contents;
mod payload;

pub use config::GithubSourceConfig;
pub use contents::GithubContentClient;
pub use payload::{decode_file_content, ContentsPayload, EntryKind, RemoteEntry, RemoteFile};
