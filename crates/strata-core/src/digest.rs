//! Content fingerprinting.

use sha2::{Digest, Sha256};

/// Computes a deterministic fingerprint for a content body.
///
/// Two identical bodies always produce the same digest, so consumers can
/// compare digests to detect whether a record's content changed between
/// load cycles.
pub fn generate_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = generate_digest("# Hello\n");
        let b = generate_digest("# Hello\n");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_differs_for_different_content() {
        assert_ne!(generate_digest("a"), generate_digest("b"));
    }

    #[test]
    fn test_digest_known_value() {
        // SHA-256 of the empty string
        assert_eq!(
            generate_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
