//! Short codes for long URLs: SHA-256, URL-safe base64, truncated.
//!
//! Codes are derived, never stored; there is no lookup from code back to URL.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use sha2::{Digest, Sha256};

pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Characters in a padded base64 encoding of a 32-byte digest
pub const MAX_CODE_LENGTH: usize = 44;

pub fn digest(url: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.finalize().into()
}

pub fn digest_hex(url: &str) -> String {
    hex::encode(digest(url))
}

/// First `length` characters of the URL-safe base64 digest (clamped to 1..=44)
pub fn short_code(url: &str, length: usize) -> String {
    let encoded = URL_SAFE.encode(digest(url));
    let length = length.clamp(1, MAX_CODE_LENGTH);
    encoded[..length].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_url() {
        assert_eq!(short_code("https://www.google.com/", DEFAULT_CODE_LENGTH), "0OGWoMJdNd");
        assert_eq!(
            digest_hex("https://www.google.com/"),
            "d0e196a0c25d35dd0a84593cbae0f38333aa58529936444ea26453eab28dfc86"
        );
    }

    #[test]
    fn test_code_is_url_safe() {
        let code = short_code("", MAX_CODE_LENGTH);
        assert_eq!(code, "47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU=");
        assert!(!code.contains('+') && !code.contains('/'));
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(short_code("https://example.com", 0).len(), 1);
        assert_eq!(short_code("https://example.com", 500).len(), MAX_CODE_LENGTH);
    }

    #[test]
    fn test_distinct_urls_distinct_codes() {
        assert_ne!(
            short_code("https://example.com/a", DEFAULT_CODE_LENGTH),
            short_code("https://example.com/b", DEFAULT_CODE_LENGTH)
        );
    }
}
