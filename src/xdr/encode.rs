// SPDX-License-Identifier: AGPL-3.0-or-later

//! Methods to encode wire records.
//!
//! Encoding is append-only and infallible, all record shapes are fixed at
//! construction time.
//!
//! ```text
//! ┌─────────┐                           ┌────────────────┐
//! │Operation│ ───encode_operation()───► │EncodedOperation│ ────► bytes
//! └─────────┘                           └────────────────┘
//! ```
use crate::xdr::{EncodedOperation, Operation};

/// Types which append their canonical wire encoding to a byte buffer.
pub trait XdrEncode {
    /// Appends the encoding of this value to the given buffer.
    fn encode(&self, buf: &mut Vec<u8>);
}

impl XdrEncode for u32 {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.to_be_bytes());
    }
}

/// Optional values encode as a presence word, followed by the value itself
/// when present.
impl<T: XdrEncode> XdrEncode for Option<T> {
    fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            Some(value) => {
                1u32.encode(buf);
                value.encode(buf);
            }
            None => 0u32.encode(buf),
        }
    }
}

/// Encodes an operation in canonical wire format.
pub fn encode_operation(operation: &Operation) -> EncodedOperation {
    let mut bytes = Vec::new();
    operation.encode(&mut bytes);
    EncodedOperation::from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::XdrEncode;

    #[test]
    fn word_encoding() {
        let mut buf = Vec::new();
        7u32.encode(&mut buf);
        assert_eq!(buf, [0, 0, 0, 7]);
    }

    #[test]
    fn optional_encoding() {
        let mut buf = Vec::new();
        Some(7u32).encode(&mut buf);
        assert_eq!(buf, [0, 0, 0, 1, 0, 0, 0, 7]);

        let mut buf = Vec::new();
        None::<u32>.encode(&mut buf);
        assert_eq!(buf, [0, 0, 0, 0]);
    }
}
