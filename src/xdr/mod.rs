// SPDX-License-Identifier: AGPL-3.0-or-later

//! Wire-format records and their canonical binary encoding.
//!
//! The types in this module mirror the ledger's XDR wire format: big-endian
//! words, presence-flagged optionals, zero-padded strings and tagged unions.
//! Records are fixed in shape, an absent optional slot still occupies its
//! presence word on the wire.
mod account_key;
mod encode;
mod encoded_operation;
mod error;
mod operation;
mod set_options;
mod string32;

pub use account_key::AccountKey;
pub use encode::{XdrEncode, encode_operation};
pub use encoded_operation::EncodedOperation;
pub use error::XdrError;
pub use operation::{Operation, OperationBody, OperationKind, OperationPayload};
pub use set_options::{SetOptionsOp, Signer};
pub use string32::{MAX_STRING32_LENGTH, String32};
