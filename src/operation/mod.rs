// SPDX-License-Identifier: AGPL-3.0-or-later

//! Build ledger operations from caller-facing configuration requests.
//!
//! A builder tracks which optional fields the caller actually set, applies
//! per-field validation and encoding rules and assembles the canonical wire
//! record, or fails with the first validation error in field order.
mod error;
mod flags;
mod set_options;

pub use error::OperationBuilderError;
pub use flags::AccountFlag;
pub use set_options::SetOptionsBuilder;
