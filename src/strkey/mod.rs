// SPDX-License-Identifier: AGPL-3.0-or-later

//! Textual account addresses ("strkey") and their binary key representation.
//!
//! An address is the base32 rendering of a version byte, the 32 byte account
//! key and a CRC16 checksum. Account addresses carry version byte `6 << 3`
//! and therefore always start with `G`.
mod account_id;
mod checksum;
mod error;

pub use account_id::{ACCOUNT_KEY_LENGTH, AccountId};
pub use error::StrKeyError;
