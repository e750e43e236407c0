// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::Display;
use std::hash::Hash as StdHash;
use std::str::FromStr;

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize, Serializer};

use crate::Validate;
use crate::strkey::StrKeyError;
use crate::strkey::checksum::checksum;

/// Size of binary account keys.
pub const ACCOUNT_KEY_LENGTH: usize = 32;

/// Version byte marking an address as an account address. Renders as a
/// leading `G` in base32.
const VERSION_BYTE_ACCOUNT: u8 = 6 << 3;

/// Decoded size of an address: version byte, key and two checksum bytes.
const DECODED_LENGTH: usize = ACCOUNT_KEY_LENGTH + 3;

/// Account ids are textual addresses wrapping an Ed25519 public key.
///
/// The string holds the base32 encoding (RFC 4648 alphabet, no padding) of
/// the version byte, the raw key and a little-endian CRC16 checksum.
#[derive(Clone, Debug, Eq, StdHash, PartialEq)]
pub struct AccountId(String);

impl AccountId {
    /// Validates and wraps an address string into a new `AccountId` instance.
    ///
    /// ## Example
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use txnbuild::strkey::AccountId;
    ///
    /// let account_id =
    ///     AccountId::new("GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(value: &str) -> Result<Self, StrKeyError> {
        let account_id = Self(String::from(value));
        account_id.validate()?;
        Ok(account_id)
    }

    /// Encodes a raw account key into its textual address form.
    pub fn from_bytes(key: [u8; ACCOUNT_KEY_LENGTH]) -> Self {
        let mut data = Vec::with_capacity(DECODED_LENGTH);
        data.push(VERSION_BYTE_ACCOUNT);
        data.extend_from_slice(&key);

        let crc = checksum(&data);
        data.extend_from_slice(&crc.to_le_bytes());

        Self(BASE32_NOPAD.encode(&data))
    }

    /// Returns the raw account key of this address.
    pub fn to_bytes(&self) -> [u8; ACCOUNT_KEY_LENGTH] {
        // Unwrap as we already checked the encoding during construction
        let data = BASE32_NOPAD.decode(self.0.as_bytes()).unwrap();
        data[1..=ACCOUNT_KEY_LENGTH].try_into().unwrap()
    }

    /// Returns the address as `&str`.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Validate for AccountId {
    type Error = StrKeyError;

    /// Checks the address against the strkey format.
    ///
    /// 1. It is base32 without padding
    /// 2. It decodes to version byte, key and checksum
    /// 3. The version byte marks an account address
    /// 4. The checksum matches version byte and key
    fn validate(&self) -> Result<(), Self::Error> {
        let data = BASE32_NOPAD.decode(self.0.as_bytes())?;

        if data.len() != DECODED_LENGTH {
            return Err(StrKeyError::InvalidLength(data.len(), DECODED_LENGTH));
        }

        if data[0] != VERSION_BYTE_ACCOUNT {
            return Err(StrKeyError::InvalidVersionByte(data[0], VERSION_BYTE_ACCOUNT));
        }

        let claimed = u16::from_le_bytes([data[DECODED_LENGTH - 2], data[DECODED_LENGTH - 1]]);
        if claimed != checksum(&data[..DECODED_LENGTH - 2]) {
            return Err(StrKeyError::InvalidChecksum);
        }

        Ok(())
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountId {
    type Err = StrKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let address: &str = Deserialize::deserialize(deserializer)?;

        let account_id = AccountId::new(address)
            .map_err(|err| serde::de::Error::custom(format!("invalid address, {}", err)))?;

        Ok(account_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::strkey::StrKeyError;

    use super::{ACCOUNT_KEY_LENGTH, AccountId};

    #[test]
    fn validate() {
        // Lowercase characters are outside the base32 alphabet
        assert!(matches!(
            AccountId::new("gdlvvgabqkyqvn6vjp7nhslea45a5yls6pnkmizfv4bbu2hxa5irvhur"),
            Err(StrKeyError::InvalidBase32Encoding(_))
        ));

        // Too short
        assert!(matches!(
            AccountId::new("AAAAAAAAAAAAAAAA"),
            Err(StrKeyError::InvalidLength(10, 35))
        ));

        // Version byte of a secret seed, not an account
        assert!(matches!(
            AccountId::new("SAAACAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUPB6NKI"),
            Err(StrKeyError::InvalidVersionByte(144, 48))
        ));

        // Flipped last character breaks the checksum
        assert!(matches!(
            AccountId::new("GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUS"),
            Err(StrKeyError::InvalidChecksum)
        ));

        // Valid account address
        assert!(
            AccountId::new("GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR").is_ok()
        );
    }

    #[test]
    fn to_bytes() {
        let key: [u8; ACCOUNT_KEY_LENGTH] = [
            215, 90, 152, 1, 130, 177, 10, 183, 213, 75, 254, 211, 201, 100, 7, 58, 14, 225, 114,
            243, 218, 166, 35, 37, 175, 2, 26, 104, 247, 7, 81, 26,
        ];

        let account_id =
            AccountId::new("GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR").unwrap();
        assert_eq!(account_id.to_bytes(), key);
    }

    #[test]
    fn from_bytes() {
        let key: [u8; ACCOUNT_KEY_LENGTH] = [
            215, 90, 152, 1, 130, 177, 10, 183, 213, 75, 254, 211, 201, 100, 7, 58, 14, 225, 114,
            243, 218, 166, 35, 37, 175, 2, 26, 104, 247, 7, 81, 26,
        ];

        let account_id = AccountId::from_bytes(key);
        assert_eq!(
            account_id.as_str(),
            "GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR"
        );
        assert_eq!(account_id.to_bytes(), key);
    }

    #[test]
    fn zero_key() {
        let account_id = AccountId::from_bytes([0; ACCOUNT_KEY_LENGTH]);
        assert_eq!(
            account_id.as_str(),
            "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF"
        );
    }

    #[test]
    fn from_str() {
        let address = "GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR";
        let account_id: AccountId = address.parse().unwrap();
        assert_eq!(address, account_id.as_str());
    }

    #[test]
    fn string_representation() {
        let address = "GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR";
        let account_id = AccountId::new(address).unwrap();

        assert_eq!(address, account_id.to_string());
        assert_eq!(address, format!("{}", account_id));
    }

    #[test]
    fn serde_roundtrip() {
        let address = "GDLVVGABQKYQVN6VJP7NHSLEA45A5YLS6PNKMIZFV4BBU2HXA5IRVHUR";
        let account_id = AccountId::new(address).unwrap();

        let json = serde_json::to_string(&account_id).unwrap();
        assert_eq!(json, format!("\"{}\"", address));

        let deserialized: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(account_id, deserialized);

        // Addresses are validated again when deserializing
        let result: Result<AccountId, _> = serde_json::from_str("\"GAAAA\"");
        assert!(result.is_err());
    }
}
