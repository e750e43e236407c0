// SPDX-License-Identifier: AGPL-3.0-or-later

//! Fixtures for injecting default and random test values into rstest
//! methods.
use rstest::fixture;

use crate::operation::{AccountFlag, SetOptionsBuilder};
use crate::strkey::AccountId;
use crate::test_utils::constants::{ACCOUNT_ID, HOME_DOMAIN, SIGNER_ACCOUNT_ID};

/// Fixture which injects the default account id into a test method. Default
/// value can be overridden at testing time by passing in a custom address
/// string.
#[fixture]
pub fn account_id(#[default(ACCOUNT_ID)] address: &str) -> AccountId {
    AccountId::new(address).unwrap()
}

/// Fixture which injects a random account id into a test method.
#[fixture]
pub fn random_account_id() -> AccountId {
    AccountId::from_bytes(rand::random())
}

/// Fixture which injects a set-options builder with every field populated.
#[fixture]
pub fn set_options() -> SetOptionsBuilder {
    SetOptionsBuilder::new()
        .inflation_destination(ACCOUNT_ID)
        .clear_flags(&[AccountFlag::AUTH_REVOCABLE])
        .set_flags(&[AccountFlag::AUTH_REQUIRED])
        .master_weight(10)
        .low_threshold(1)
        .medium_threshold(2)
        .high_threshold(2)
        .home_domain(HOME_DOMAIN)
        .signer(SIGNER_ACCOUNT_ID, 4)
}
