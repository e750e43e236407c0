// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;
use std::fmt::Display;

use crate::xdr::{XdrEncode, XdrError};

/// Maximum number of characters a `String32` can hold.
pub const MAX_STRING32_LENGTH: usize = 32;

/// Fixed-capacity text value, at most 32 characters long.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct String32(String);

impl String32 {
    /// Validates the character count and wraps the string into a new
    /// `String32` instance.
    pub fn new(value: &str) -> Result<Self, XdrError> {
        let length = value.chars().count();

        if length > MAX_STRING32_LENGTH {
            return Err(XdrError::StringTooLong(length, MAX_STRING32_LENGTH));
        }

        Ok(Self(value.to_owned()))
    }

    /// Returns the text as `&str`.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for String32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strings encode as a byte-length word, the raw bytes and zero padding up to
/// the next word boundary.
impl XdrEncode for String32 {
    fn encode(&self, buf: &mut Vec<u8>) {
        let bytes = self.0.as_bytes();

        (bytes.len() as u32).encode(buf);
        buf.extend_from_slice(bytes);

        let padding = (4 - bytes.len() % 4) % 4;
        buf.resize(buf.len() + padding, 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::xdr::{XdrEncode, XdrError};

    use super::String32;

    #[test]
    fn capacity() {
        assert!(String32::new("").is_ok());
        assert!(String32::new(&"a".repeat(32)).is_ok());

        // Character count, not byte count
        assert!(String32::new(&"ü".repeat(32)).is_ok());

        assert!(matches!(
            String32::new(&"a".repeat(33)),
            Err(XdrError::StringTooLong(33, 32))
        ));
    }

    #[test]
    fn encoding() {
        let mut buf = Vec::new();
        String32::new("abc").unwrap().encode(&mut buf);
        assert_eq!(buf, [0, 0, 0, 3, b'a', b'b', b'c', 0]);

        // Word-aligned strings take no padding
        let mut buf = Vec::new();
        String32::new("abcd").unwrap().encode(&mut buf);
        assert_eq!(buf, [0, 0, 0, 4, b'a', b'b', b'c', b'd']);
    }
}
