//! Canonical URL form used for fingerprinting.
//!
//! Two submissions that normalize to the same string share one dedup entry. The
//! stored forward mapping always keeps the URL exactly as submitted.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL has leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("URL contains a control character")]
    ControlCharacter,
}

/// Normalizes a URL to the canonical form fed into the fingerprint.
///
/// # Normalization Rules
///
/// 1. Input with surrounding whitespace or control characters is rejected
/// 2. Only `http` and `https` are accepted; scheme and host are lowercased
/// 3. Default ports (80, 443) are dropped
/// 4. The fragment is dropped, an empty `?` is dropped
/// 5. Path and query keep their case and order
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for other schemes,
/// [`UrlNormalizationError::MissingHost`] when no host is present and
/// [`UrlNormalizationError::SurroundingWhitespace`] or
/// [`UrlNormalizationError::ControlCharacter`] for input that is not a valid
/// header value.
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_normalizer::normalize_url;
///
/// assert_eq!(
///     normalize_url("HTTPS://Example.COM:443/Path?q=1#top").unwrap(),
///     "https://example.com/Path?q=1"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    // Url::parse strips these silently; the raw input is stored as-is.
    if input.trim() != input {
        return Err(UrlNormalizationError::SurroundingWhitespace);
    }
    if input.chars().any(char::is_control) {
        return Err(UrlNormalizationError::ControlCharacter);
    }

    // The url crate already lowercases scheme and host and elides default ports.
    let mut url = Url::parse(input)
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    url.set_fragment(None);
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_root_path() {
        assert_eq!(normalize_url("http://example.com").unwrap(), "http://example.com/");
    }

    #[test]
    fn test_normalize_lowercases_scheme_and_host() {
        assert_eq!(
            normalize_url("HTTPS://ExAmPlE.CoM/CasePath").unwrap(),
            "https://example.com/CasePath"
        );
    }

    #[test]
    fn test_normalize_drops_default_ports_only() {
        assert_eq!(
            normalize_url("http://example.com:80/a").unwrap(),
            "http://example.com/a"
        );
        assert_eq!(
            normalize_url("https://example.com:443/a").unwrap(),
            "https://example.com/a"
        );
        assert_eq!(
            normalize_url("https://example.com:8443/a").unwrap(),
            "https://example.com:8443/a"
        );
    }

    #[test]
    fn test_normalize_drops_fragment_and_empty_query() {
        assert_eq!(
            normalize_url("https://example.com/page?#section").unwrap(),
            "https://example.com/page"
        );
        assert_eq!(
            normalize_url("https://example.com/page?b=2&a=1#x").unwrap(),
            "https://example.com/page?b=2&a=1"
        );
    }

    #[test]
    fn test_normalize_rejects_surrounding_whitespace() {
        for input in ["https://example.com/a\n", "  https://example.com/a", "https://example.com/a "] {
            assert_eq!(
                normalize_url(input),
                Err(UrlNormalizationError::SurroundingWhitespace),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_normalize_rejects_control_characters() {
        for input in ["https://example.com/a\u{0}b", "https://exa\tmple.com/", "https://example.com/\u{7f}"] {
            assert_eq!(
                normalize_url(input),
                Err(UrlNormalizationError::ControlCharacter),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_equivalent_spellings_normalize_equal() {
        let a = normalize_url("https://EXAMPLE.com:443/a#frag").unwrap();
        let b = normalize_url("https://example.com/a").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(
            normalize_url("not a url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_url(""),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        for input in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "mailto:someone@example.com",
            "file:///etc/passwd",
        ] {
            assert_eq!(
                normalize_url(input),
                Err(UrlNormalizationError::UnsupportedProtocol),
                "{input}"
            );
        }
    }
}
