// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::xdr::{AccountKey, String32, XdrEncode};

/// Canonical wire record of the set-options operation.
///
/// Each slot is either absent (the field is omitted from the wire payload)
/// or holds the fully encoded value. A slot is present exactly when the
/// caller provided the corresponding field, no defaults are synthesized.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SetOptionsOp {
    /// Account receiving this account's inflation payouts.
    pub inflation_dest: Option<AccountKey>,
    /// Merged bitmask of authorization flags to clear.
    pub clear_flags: Option<u32>,
    /// Merged bitmask of authorization flags to set.
    pub set_flags: Option<u32>,
    /// Weight of the account's master key.
    pub master_weight: Option<u32>,
    /// Threshold for low-security operations.
    pub low_threshold: Option<u32>,
    /// Threshold for medium-security operations.
    pub med_threshold: Option<u32>,
    /// Threshold for high-security operations.
    pub high_threshold: Option<u32>,
    /// Home domain of the account.
    pub home_domain: Option<String32>,
    /// Signer to add, update or remove.
    pub signer: Option<Signer>,
}

/// Signer key paired with its voting weight.
///
/// Weight zero instructs the ledger to remove the signer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Signer {
    /// Binary key of the signer.
    pub key: AccountKey,
    /// Voting weight of the signer.
    pub weight: u32,
}

impl XdrEncode for SetOptionsOp {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.inflation_dest.encode(buf);
        self.clear_flags.encode(buf);
        self.set_flags.encode(buf);
        self.master_weight.encode(buf);
        self.low_threshold.encode(buf);
        self.med_threshold.encode(buf);
        self.high_threshold.encode(buf);
        self.home_domain.encode(buf);
        self.signer.encode(buf);
    }
}

impl XdrEncode for Signer {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.key.encode(buf);
        self.weight.encode(buf);
    }
}
