// SPDX-License-Identifier: AGPL-3.0-or-later

//! Constants used across the test_utils module for default values.

/// The default test account address, used when an address is needed in
/// fixtures and a custom value isn't specified.
pub const ACCOUNT_ID: &str = "GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR";

/// A second account address, used where a test needs a signer distinct from
/// the default account.
pub const SIGNER_ACCOUNT_ID: &str = "GB6PJ5MKFWE6SMYT6LPJSYCKQFHM5KMABTZBPMKA5HB2POSZUXMYFC4Z";

/// The default home domain used throughout the fixtures module.
pub const HOME_DOMAIN: &str = "example.org";
