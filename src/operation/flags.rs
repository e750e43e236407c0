// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Bitmask flag controlling one account authorization setting.
///
/// Bit patterns outside the documented constants are representable on
/// purpose: flags added on the ledger side must pass through older builders
/// unchanged.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct AccountFlag(
    /// Raw bit pattern of the flag.
    pub u32,
);

impl AccountFlag {
    /// Other accounts need this account's permission before they can hold
    /// its credit.
    pub const AUTH_REQUIRED: Self = Self(1);

    /// This account may revoke credit it has authorized other accounts to
    /// hold.
    pub const AUTH_REVOCABLE: Self = Self(2);

    /// The authorization flags are frozen and the account can never be
    /// merged.
    pub const AUTH_IMMUTABLE: Self = Self(4);

    /// Returns the raw bit pattern of this flag.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<u32> for AccountFlag {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Merges a sequence of flags into one bitmask, `None` for an empty
/// sequence.
///
/// Duplicate flags collapse under bitwise OR. A non-empty sequence always
/// produces a present mask, even when that mask is zero.
pub(crate) fn merge_flags(flags: &[AccountFlag]) -> Option<u32> {
    if flags.is_empty() {
        return None;
    }

    Some(flags.iter().fold(0, |mask, flag| mask | flag.bits()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{AccountFlag, merge_flags};

    #[rstest]
    #[case::three_different(&[1, 2, 4], 7)]
    #[case::three_of_the_same(&[1, 1, 1], 1)]
    #[case::redundant_flags(&[1, 2, 4, 2, 4, 1], 7)]
    #[case::fewer_than_three(&[1, 2], 3)]
    #[case::undefined_bit_patterns(&[3, 3, 3], 3)]
    #[case::zero_flags(&[0, 2, 0], 2)]
    #[case::only_zero(&[0], 0)]
    fn merging(#[case] flags: &[u32], #[case] expected: u32) {
        let flags: Vec<AccountFlag> = flags.iter().map(|flag| AccountFlag(*flag)).collect();
        assert_eq!(merge_flags(&flags), Some(expected));
    }

    #[test]
    fn order_independence() {
        assert_eq!(
            merge_flags(&[AccountFlag(1), AccountFlag(2), AccountFlag(4)]),
            merge_flags(&[AccountFlag(4), AccountFlag(2), AccountFlag(1)]),
        );
    }

    #[test]
    fn empty_sequence() {
        // No mask at all, not a present zero mask
        assert_eq!(merge_flags(&[]), None);
    }

    #[test]
    fn named_constants() {
        assert_eq!(AccountFlag::AUTH_REQUIRED.bits(), 1);
        assert_eq!(AccountFlag::AUTH_REVOCABLE.bits(), 2);
        assert_eq!(AccountFlag::AUTH_IMMUTABLE.bits(), 4);

        assert_eq!(
            merge_flags(&[
                AccountFlag::AUTH_REQUIRED,
                AccountFlag::AUTH_REVOCABLE,
                AccountFlag::AUTH_IMMUTABLE
            ]),
            Some(7)
        );
    }
}
