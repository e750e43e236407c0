// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::strkey::{ACCOUNT_KEY_LENGTH, AccountId};
use crate::xdr::XdrEncode;

/// Key type tag for Ed25519 account keys, the only key type in use.
const KEY_TYPE_ED25519: u32 = 0;

/// Binary account key as it appears inside wire records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AccountKey([u8; ACCOUNT_KEY_LENGTH]);

impl AccountKey {
    /// Wraps raw key bytes into a new `AccountKey` instance.
    pub const fn new(bytes: [u8; ACCOUNT_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Bytes of the key.
    pub const fn as_bytes(&self) -> &[u8; ACCOUNT_KEY_LENGTH] {
        &self.0
    }
}

impl From<&AccountId> for AccountKey {
    fn from(account_id: &AccountId) -> Self {
        Self(account_id.to_bytes())
    }
}

impl From<&AccountKey> for AccountId {
    fn from(key: &AccountKey) -> Self {
        AccountId::from_bytes(key.0)
    }
}

impl XdrEncode for AccountKey {
    fn encode(&self, buf: &mut Vec<u8>) {
        KEY_TYPE_ED25519.encode(buf);
        buf.extend_from_slice(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use crate::strkey::AccountId;
    use crate::test_utils::constants::ACCOUNT_ID;
    use crate::xdr::XdrEncode;

    use super::AccountKey;

    #[test]
    fn from_account_id() {
        let account_id = AccountId::new(ACCOUNT_ID).unwrap();
        let key = AccountKey::from(&account_id);

        assert_eq!(key.as_bytes(), &account_id.to_bytes());
        assert_eq!(AccountId::from(&key), account_id);
    }

    #[test]
    fn encoding() {
        let key = AccountKey::new([7; 32]);

        let mut buf = Vec::new();
        key.encode(&mut buf);

        // Key type word followed by the raw key
        assert_eq!(&buf[..4], [0, 0, 0, 0]);
        assert_eq!(&buf[4..], [7; 32]);
    }
}
