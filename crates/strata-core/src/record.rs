//! Store record types.

use serde::{Deserialize, Serialize};

/// A single persisted unit of loaded content, keyed by its id.
///
/// Records are what loaders write into a [`ContentStore`](crate::ContentStore):
/// one per source file, with the raw body carried as rendered content and a
/// digest computed from that body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// The record id (for file-backed loaders, the file path).
    id: String,

    /// Structured data extracted from the content. Loaders that do not
    /// parse their content leave this as an empty object.
    data: serde_json::Value,

    /// The rendered form of the content.
    rendered: RenderedContent,

    /// Deterministic fingerprint of the content body.
    digest: String,
}

/// Rendered content carried by a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedContent {
    /// The content body as it should be rendered.
    html: String,
}

impl RenderedContent {
    /// Creates rendered content from a raw body.
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Returns the rendered body.
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl ContentRecord {
    /// Creates a record for a raw content body.
    ///
    /// The data field is initialized to an empty object and the body is
    /// carried verbatim as the rendered content.
    pub fn new(id: impl Into<String>, body: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: serde_json::Value::Object(serde_json::Map::new()),
            rendered: RenderedContent::new(body),
            digest: digest.into(),
        }
    }

    /// Returns the record id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the structured data.
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Returns the rendered content.
    pub fn rendered(&self) -> &RenderedContent {
        &self.rendered
    }

    /// Returns the content digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Builder-style method to set structured data.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}
