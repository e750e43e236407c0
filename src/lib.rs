// SPDX-License-Identifier: AGPL-3.0-or-later

//! # txnbuild
//!
//! Build, validate and encode account-configuration operations for
//! Stellar-compatible ledgers.
//!
//! An operation describes one discrete state change bundled inside a signed
//! transaction. This crate covers the "set options" operation: it turns a
//! sparse configuration request (inflation destination, authorization flags,
//! signing weights and thresholds, home domain, signer changes) into the
//! canonical fixed-shape wire record the ledger understands.
//!
//! ```
//! use txnbuild::operation::{AccountFlag, SetOptionsBuilder};
//! use txnbuild::xdr::encode_operation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let operation = SetOptionsBuilder::new()
//!     .set_flags(&[AccountFlag::AUTH_REQUIRED, AccountFlag::AUTH_REVOCABLE])
//!     .home_domain("example.org")
//!     .build()?;
//!
//! let encoded = encode_operation(&operation);
//! # assert!(encoded.size() > 0);
//! # Ok(())
//! # }
//! ```
//!
//! Transaction assembly, fees, sequence numbers and signing happen in later
//! pipeline stages and are not part of this crate.
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod operation;
pub mod strkey;
#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;
pub mod xdr;

pub use operation::{AccountFlag, OperationBuilderError, SetOptionsBuilder};
pub use strkey::{AccountId, StrKeyError};
pub use xdr::{EncodedOperation, Operation, OperationKind, XdrError, encode_operation};

/// Trait used by `txnbuild` structs to validate data.
pub trait Validate {
    /// Validation error.
    type Error;

    /// Validates a `txnbuild` data type.
    fn validate(&self) -> Result<(), Self::Error>;
}
