// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for working with textual account addresses.
use thiserror::Error;

/// Errors from `AccountId` struct.
#[derive(Error, Debug)]
#[allow(missing_copy_implementations)]
pub enum StrKeyError {
    /// Address string contains characters outside the base32 alphabet.
    #[error("invalid base32 encoding in address string")]
    InvalidBase32Encoding(#[from] data_encoding::DecodeError),

    /// Address payload has an invalid length.
    #[error("invalid address length {0} bytes, expected {1} bytes")]
    InvalidLength(usize, usize),

    /// Address carries an unexpected version byte.
    #[error("invalid address version byte {0}, expected {1}")]
    InvalidVersionByte(u8, u8),

    /// Address checksum does not match its payload.
    #[error("invalid address checksum")]
    InvalidChecksum,
}
