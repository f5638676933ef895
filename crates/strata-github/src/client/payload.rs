//! Wire payload types for the Contents API.
//!
//! The "get content" endpoint answers with either a listing (JSON array)
//! or a single content object, depending on what the path resolves to.
//! [`ContentsPayload`] makes that discrimination explicit instead of
//! shape-sniffing the response at the call sites.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

use crate::error::SourceError;

/// The type tag of a remote entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A plain file.
    File,
    /// A subdirectory.
    Dir,
    /// A symbolic link.
    Symlink,
    /// A git submodule.
    Submodule,
}

/// One element of a directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    /// The entry name (final path segment).
    pub name: String,
    /// The entry path relative to the repository root.
    pub path: String,
    /// The content-addressable blob id.
    pub sha: String,
    /// The entry size in bytes.
    #[serde(default)]
    pub size: u64,
    /// The entry type tag.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl RemoteEntry {
    /// Returns true if this entry is a plain file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// A single content object, returned when the path resolves to one entry
/// rather than a directory.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFile {
    /// The entry path relative to the repository root.
    pub path: String,
    /// The entry type tag.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Transport-encoded body. Absent for submodules and oversized files.
    #[serde(default)]
    pub content: Option<String>,
    /// The body encoding (`"base64"` for regular files).
    #[serde(default)]
    pub encoding: Option<String>,
}

/// The two response shapes the "get content" endpoint can produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentsPayload {
    /// The path resolved to a directory.
    Listing(Vec<RemoteEntry>),
    /// The path resolved to a single entry.
    Entry(RemoteFile),
}

/// Decodes a file object's transport-encoded body into raw text.
///
/// The API wraps base64 bodies with newlines, so whitespace is stripped
/// before decoding.
pub fn decode_file_content(file: &RemoteFile) -> Result<String, SourceError> {
    match file.encoding.as_deref() {
        Some("base64") => {}
        other => {
            return Err(SourceError::decode(
                &file.path,
                format!("unsupported encoding {:?}", other),
            ));
        }
    }

    let raw = file
        .content
        .as_deref()
        .ok_or_else(|| SourceError::decode(&file.path, "missing content field"))?;

    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| SourceError::decode(&file.path, e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| SourceError::decode(&file.path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_payload() {
        let json = r#"[
            {"name": "a.md", "path": "docs/a.md", "sha": "aaa", "size": 12, "type": "file"},
            {"name": "sub", "path": "docs/sub", "sha": "bbb", "size": 0, "type": "dir"}
        ]"#;

        let payload: ContentsPayload = serde_json::from_str(json).unwrap();
        match payload {
            ContentsPayload::Listing(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(entries[0].is_file());
                assert_eq!(entries[1].kind, EntryKind::Dir);
                assert_eq!(entries[1].path, "docs/sub");
            }
            ContentsPayload::Entry(_) => panic!("expected a listing"),
        }
    }

    #[test]
    fn test_single_file_payload() {
        let json = r#"{
            "name": "a.md",
            "path": "docs/a.md",
            "sha": "aaa",
            "size": 6,
            "type": "file",
            "content": "aGVsbG8=",
            "encoding": "base64"
        }"#;

        let payload: ContentsPayload = serde_json::from_str(json).unwrap();
        match payload {
            ContentsPayload::Entry(file) => {
                assert_eq!(file.kind, EntryKind::File);
                assert_eq!(decode_file_content(&file).unwrap(), "hello");
            }
            ContentsPayload::Listing(_) => panic!("expected a single entry"),
        }
    }

    #[test]
    fn test_decode_strips_newline_wrapping() {
        let file = RemoteFile {
            path: "a.md".to_string(),
            kind: EntryKind::File,
            content: Some("aGVsbG8g\nd29ybGQ=\n".to_string()),
            encoding: Some("base64".to_string()),
        };

        assert_eq!(decode_file_content(&file).unwrap(), "hello world");
    }

    #[test]
    fn test_decode_rejects_unknown_encoding() {
        let file = RemoteFile {
            path: "a.md".to_string(),
            kind: EntryKind::File,
            content: Some("aGVsbG8=".to_string()),
            encoding: Some("none".to_string()),
        };

        let err = decode_file_content(&file).unwrap_err();
        assert!(err.to_string().contains("a.md"));
    }

    #[test]
    fn test_decode_rejects_missing_content() {
        let file = RemoteFile {
            path: "vendored".to_string(),
            kind: EntryKind::Submodule,
            content: None,
            encoding: Some("base64".to_string()),
        };

        assert!(decode_file_content(&file).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let file = RemoteFile {
            path: "a.md".to_string(),
            kind: EntryKind::File,
            content: Some("!!not-base64!!".to_string()),
            encoding: Some("base64".to_string()),
        };

        assert!(decode_file_content(&file).is_err());
    }
}
