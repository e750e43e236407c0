// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::hash::Hash as StdHash;

use serde::{Deserialize, Serialize};

/// Wrapper type for canonically encoded operation bytes.
#[derive(Clone, Debug, Eq, PartialEq, StdHash, Serialize, Deserialize)]
pub struct EncodedOperation(#[serde(with = "hex::serde")] Vec<u8>);

impl EncodedOperation {
    /// Returns new `EncodedOperation` instance from given bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_owned())
    }

    /// Returns operation bytes as slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    /// Returns operation bytes, consuming the wrapper.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns payload size (number of bytes) of encoded operation.
    pub fn size(&self) -> u64 {
        self.0.len() as u64
    }
}

impl Display for EncodedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
