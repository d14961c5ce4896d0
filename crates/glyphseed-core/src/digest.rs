//! BLAKE3 digests of rendered markup.
//!
//! Golden files pin digests rather than full markup so a fixture stays one
//! line per seed.

/// Lowercase hex BLAKE3 digest of a markup string.
pub fn markup_digest(markup: &str) -> String {
    blake3::hash(markup.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_shape() {
        let digest = markup_digest("<svg/>");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, markup_digest("<svg/>"));
        assert_ne!(digest, markup_digest("<svg />"));
    }

    #[test]
    fn test_empty_digest() {
        assert_eq!(
            markup_digest(""),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }
}
