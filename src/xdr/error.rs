// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error types for constructing wire-format records.
use thiserror::Error;

use crate::xdr::OperationKind;

/// Errors from the wire-format layer.
#[derive(Error, Debug)]
#[allow(missing_copy_implementations)]
pub enum XdrError {
    /// Typed payload does not belong to the given operation kind.
    #[error("operation body construction failed for kind {0:?}")]
    EnvelopeConstruction(OperationKind),

    /// String exceeds the capacity of its fixed-size wire slot.
    #[error("string is {0} characters long, maximum is {1} characters")]
    StringTooLong(usize, usize),
}
