// SPDX-License-Identifier: AGPL-3.0-or-later

//! Methods and structs for generating test data.
pub mod constants;
pub mod fixtures;
