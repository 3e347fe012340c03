//! Content fingerprints used as deduplication keys.

use sha2::{Digest, Sha256};

/// Length in characters of every fingerprint.
pub const FINGERPRINT_LEN: usize = 64;

/// Returns the lowercase hex SHA-256 digest of an already normalized URL.
///
/// Fingerprints only ever appear inside backend keys; they are never returned to
/// clients.
pub fn fingerprint(normalized_url: &str) -> String {
    hex::encode(Sha256::digest(normalized_url.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_known_digest() {
        assert_eq!(
            fingerprint("https://example.com/a"),
            "2dce0a4c50441bfccfa9caf4b58c3cba6e06c420505dd829f0436de1aa44baac"
        );
    }

    #[test]
    fn test_fingerprint_fixed_length() {
        assert_eq!(fingerprint("").len(), FINGERPRINT_LEN);
        assert_eq!(fingerprint(&"x".repeat(5000)).len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_fingerprint_distinguishes_urls() {
        assert_ne!(
            fingerprint("https://example.com/a"),
            fingerprint("https://example.com/b")
        );
    }
}
