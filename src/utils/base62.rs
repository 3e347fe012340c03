//! Radix-62 positional encoding of sequence numbers into short codes.
//!
//! The alphabet is digits, then lowercase, then uppercase letters. Encoding always
//! produces the shortest representation, so every value has exactly one code and
//! [`decode`] rejects non-canonical input such as a leading `0`.

/// Symbols in digit-value order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const RADIX: u64 = 62;

/// Largest value a short code may carry.
///
/// Matches the range of the backend's signed 64-bit counter.
pub const MAX_VALUE: u64 = i64::MAX as u64;

/// Length of `encode(MAX_VALUE)`, the longest code this encoder emits.
pub const MAX_CODE_LEN: usize = 11;

/// Reasons a string is not a valid short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("short code is empty")]
    Empty,

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("short code has a leading zero")]
    LeadingZero,

    #[error("short code exceeds the supported range")]
    Overflow,
}

/// Encodes `value` as its shortest base62 representation.
///
/// # Examples
///
/// ```
/// use shortlink::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(MAX_CODE_LEN + 1);
    while value > 0 {
        buf.push(ALPHABET[(value % RADIX) as usize]);
        value /= RADIX;
    }
    buf.reverse();

    // ALPHABET is pure ASCII
    String::from_utf8(buf).unwrap_or_default()
}

/// Decodes a canonical base62 code back into its value.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the input is empty, contains a symbol outside
/// [`ALPHABET`], starts with a redundant `0`, or exceeds [`MAX_VALUE`].
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut value: u64 = 0;
    for (position, character) in code.chars().enumerate() {
        let digit = digit_value(character)
            .ok_or(DecodeError::InvalidCharacter { character, position })?;

        if position == 0 && digit == 0 && code.len() > 1 {
            return Err(DecodeError::LeadingZero);
        }

        value = value
            .checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .filter(|v| *v <= MAX_VALUE)
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(value)
}

/// Returns true if every character of `code` belongs to [`ALPHABET`].
pub fn is_alphabet(code: &str) -> bool {
    code.chars().all(|c| c.is_ascii_alphanumeric())
}

fn digit_value(c: char) -> Option<u64> {
    let v = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'a'..='z' => c as u64 - 'a' as u64 + 10,
        'A'..='Z' => c as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(v)
}
