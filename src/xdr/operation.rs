// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::xdr::{AccountKey, SetOptionsOp, XdrEncode, XdrError};

/// Operation type tags with their fixed wire discriminants.
///
/// Only `SetOptions` carries a payload type in this crate, the neighbouring
/// tags exist so envelope construction can reject mismatched payloads.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    /// Fund and create a new account.
    CreateAccount = 0,
    /// Transfer an asset between accounts.
    Payment = 1,
    /// Change the configuration of an account.
    SetOptions = 5,
}

/// Typed operation payloads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OperationPayload {
    /// Account configuration changes.
    SetOptions(SetOptionsOp),
}

/// Operation payload wrapped with its wire tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OperationBody {
    /// Account configuration changes.
    SetOptions(SetOptionsOp),
}

impl OperationBody {
    /// Wraps a typed payload into the operation body tagged by `kind`.
    ///
    /// Fails when the payload variant does not belong to the given kind.
    pub fn new(kind: OperationKind, payload: OperationPayload) -> Result<Self, XdrError> {
        match (kind, payload) {
            (OperationKind::SetOptions, OperationPayload::SetOptions(record)) => {
                Ok(OperationBody::SetOptions(record))
            }
            (kind, _) => Err(XdrError::EnvelopeConstruction(kind)),
        }
    }

    /// Returns the wire tag of this body.
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationBody::SetOptions(_) => OperationKind::SetOptions,
        }
    }
}

/// One discrete state change, ready to be bundled into a transaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operation {
    /// Account the operation runs against. Absent means the transaction's
    /// source account, which later pipeline stages fill in.
    pub source_account: Option<AccountKey>,
    /// Tagged operation payload.
    pub body: OperationBody,
}

impl Operation {
    /// Wraps a typed payload into a new `Operation` instance tagged by
    /// `kind`.
    pub fn new(kind: OperationKind, payload: OperationPayload) -> Result<Self, XdrError> {
        Ok(Self {
            source_account: None,
            body: OperationBody::new(kind, payload)?,
        })
    }

    /// Returns the wire tag of this operation.
    pub fn kind(&self) -> OperationKind {
        self.body.kind()
    }

    /// Returns the set-options record when this operation carries one.
    pub fn as_set_options(&self) -> Option<&SetOptionsOp> {
        match &self.body {
            OperationBody::SetOptions(record) => Some(record),
        }
    }
}

impl XdrEncode for OperationKind {
    fn encode(&self, buf: &mut Vec<u8>) {
        (*self as u32).encode(buf);
    }
}

impl XdrEncode for OperationBody {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.kind().encode(buf);

        match self {
            OperationBody::SetOptions(record) => record.encode(buf),
        }
    }
}

impl XdrEncode for Operation {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.source_account.encode(buf);
        self.body.encode(buf);
    }
}
