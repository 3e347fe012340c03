//! Short code entity: the public identifier of a shortened URL.

use crate::utils::base62::{self, DecodeError};
use serde::Serialize;
use std::fmt;

/// A canonical base62 short code.
///
/// Every `ShortCode` decodes to exactly one sequence number and that number
/// encodes back to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Builds the code for an allocated sequence number.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(base62::encode(sequence))
    }

    /// Validates a caller-supplied code.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the string is not a canonical base62 code in the
    /// supported range.
    pub fn parse(code: &str) -> Result<Self, DecodeError> {
        base62::decode(code)?;
        Ok(Self(code.to_string()))
    }

    /// Returns the sequence number this code was derived from.
    pub fn sequence(&self) -> u64 {
        // Construction guarantees a canonical code
        base62::decode(&self.0).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequence_round_trips() {
        let code = ShortCode::from_sequence(125);
        assert_eq!(code.as_str(), "21");
        assert_eq!(code.sequence(), 125);
    }

    #[test]
    fn test_parse_accepts_canonical_code() {
        let code = ShortCode::parse("Zz9").unwrap();
        assert_eq!(code.to_string(), "Zz9");
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(ShortCode::parse("").is_err());
        assert!(ShortCode::parse("abc!").is_err());
        assert!(ShortCode::parse("007").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ShortCode::from_sequence(1)).unwrap();
        assert_eq!(json, "\"1\"");
    }
}
