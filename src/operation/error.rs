// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for building operations from configuration requests.
use thiserror::Error;

use crate::strkey::StrKeyError;
use crate::xdr::XdrError;

/// Errors from `SetOptionsBuilder` struct.
#[derive(Error, Debug)]
pub enum OperationBuilderError {
    /// Address given for the named field failed strkey decoding.
    #[error("invalid {0} address: {1}")]
    InvalidAddress(&'static str, #[source] StrKeyError),

    /// Text given for the named field exceeds its wire capacity.
    #[error("{0} is {1} characters long, maximum is {2} characters")]
    FieldTooLong(&'static str, usize, usize),

    /// Envelope layer rejected the assembled payload. The builder controls
    /// the payload shape, so this is an unexpected condition.
    #[error(transparent)]
    Envelope(#[from] XdrError),
}
