// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::operation::OperationBuilderError;
use crate::operation::flags::{AccountFlag, merge_flags};
use crate::strkey::AccountId;
use crate::xdr::{
    AccountKey, Operation, OperationKind, OperationPayload, SetOptionsOp, Signer, String32,
    XdrError,
};

/// Builder for the set-options operation, changing the configuration of an
/// account.
///
/// All fields are optional. A field which was never set is omitted from the
/// wire record entirely, the ledger leaves the corresponding account setting
/// untouched.
///
/// ```
/// use txnbuild::operation::{AccountFlag, SetOptionsBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let operation = SetOptionsBuilder::new()
///     .set_flags(&[AccountFlag::AUTH_REQUIRED])
///     .master_weight(10)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SetOptionsBuilder {
    inflation_destination: Option<String>,
    clear_flags: Vec<AccountFlag>,
    set_flags: Vec<AccountFlag>,
    master_weight: Option<u8>,
    low_threshold: Option<u8>,
    medium_threshold: Option<u8>,
    high_threshold: Option<u8>,
    home_domain: Option<String>,
    signer: Option<(String, u8)>,
}

impl SetOptionsBuilder {
    /// Returns a new instance of `SetOptionsBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account receiving this account's inflation payouts.
    ///
    /// Once a transaction carrying this field commits, the destination can
    /// be changed again later but never unset.
    pub fn inflation_destination(mut self, address: &str) -> Self {
        self.inflation_destination = Some(address.to_owned());
        self
    }

    /// Set authorization flags to clear on the account.
    pub fn clear_flags(mut self, flags: &[AccountFlag]) -> Self {
        self.clear_flags = flags.to_vec();
        self
    }

    /// Set authorization flags to set on the account.
    pub fn set_flags(mut self, flags: &[AccountFlag]) -> Self {
        self.set_flags = flags.to_vec();
        self
    }

    /// Set the weight of the account's master key.
    ///
    /// Weight zero is meaningful, it locks the master key out of signing.
    pub fn master_weight(mut self, weight: u8) -> Self {
        self.master_weight = Some(weight);
        self
    }

    /// Set the signature threshold for low-security operations.
    pub fn low_threshold(mut self, threshold: u8) -> Self {
        self.low_threshold = Some(threshold);
        self
    }

    /// Set the signature threshold for medium-security operations.
    pub fn medium_threshold(mut self, threshold: u8) -> Self {
        self.medium_threshold = Some(threshold);
        self
    }

    /// Set the signature threshold for high-security operations.
    pub fn high_threshold(mut self, threshold: u8) -> Self {
        self.high_threshold = Some(threshold);
        self
    }

    /// Set the home domain of the account, at most 32 characters.
    pub fn home_domain(mut self, domain: &str) -> Self {
        self.home_domain = Some(domain.to_owned());
        self
    }

    /// Add or update a signer of the account. Weight zero removes the
    /// signer.
    pub fn signer(mut self, address: &str, weight: u8) -> Self {
        self.signer = Some((address.to_owned(), weight));
        self
    }

    /// Builds and returns the wire operation, running all field handlers in
    /// order.
    ///
    /// The first failing field aborts the build and is reported with the
    /// field name that caused it. Building twice from an unmodified builder
    /// yields byte-identical records.
    pub fn build(&self) -> Result<Operation, OperationBuilderError> {
        let mut record = SetOptionsOp::default();

        self.handle_inflation_destination(&mut record)?;
        self.handle_clear_flags(&mut record);
        self.handle_set_flags(&mut record);
        self.handle_thresholds(&mut record);
        self.handle_home_domain(&mut record)?;
        self.handle_signer(&mut record)?;

        let operation = Operation::new(
            OperationKind::SetOptions,
            OperationPayload::SetOptions(record),
        )?;

        Ok(operation)
    }

    /// Resolves the inflation destination address into its binary key.
    fn handle_inflation_destination(
        &self,
        record: &mut SetOptionsOp,
    ) -> Result<(), OperationBuilderError> {
        match &self.inflation_destination {
            Some(address) if !address.is_empty() => {
                let account_id = AccountId::new(address).map_err(|err| {
                    OperationBuilderError::InvalidAddress("inflation destination", err)
                })?;
                record.inflation_dest = Some(AccountKey::from(&account_id));
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Merges the clear-authorization flags into a single bitmask.
    ///
    /// An empty sequence leaves the slot empty, it does not store a zero
    /// mask. Undefined bit patterns pass through unchecked.
    fn handle_clear_flags(&self, record: &mut SetOptionsOp) {
        record.clear_flags = merge_flags(&self.clear_flags);
    }

    /// Merges the set-authorization flags into a single bitmask.
    fn handle_set_flags(&self, record: &mut SetOptionsOp) {
        record.set_flags = merge_flags(&self.set_flags);
    }

    /// Forwards master weight and thresholds into their slots, widened to
    /// wire words. Absent values stay absent.
    fn handle_thresholds(&self, record: &mut SetOptionsOp) {
        record.master_weight = self.master_weight.map(u32::from);
        record.low_threshold = self.low_threshold.map(u32::from);
        record.med_threshold = self.medium_threshold.map(u32::from);
        record.high_threshold = self.high_threshold.map(u32::from);
    }

    /// Validates the home domain length and stores it as fixed-capacity
    /// text.
    fn handle_home_domain(&self, record: &mut SetOptionsOp) -> Result<(), OperationBuilderError> {
        match &self.home_domain {
            Some(domain) if !domain.is_empty() => {
                let home_domain = String32::new(domain).map_err(|err| match err {
                    XdrError::StringTooLong(length, max) => {
                        OperationBuilderError::FieldTooLong("home domain", length, max)
                    }
                    err => err.into(),
                })?;
                record.home_domain = Some(home_domain);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Resolves the signer address and pairs it with its weight.
    ///
    /// The default pair (empty address, weight zero) means "no signer
    /// change" and leaves the slot empty. Weight zero together with a real
    /// address is a removal instruction for the ledger, not an absent value.
    fn handle_signer(&self, record: &mut SetOptionsOp) -> Result<(), OperationBuilderError> {
        match &self.signer {
            Some((address, weight)) if !(address.is_empty() && *weight == 0) => {
                let account_id = AccountId::new(address)
                    .map_err(|err| OperationBuilderError::InvalidAddress("signer", err))?;

                record.signer = Some(Signer {
                    key: AccountKey::from(&account_id),
                    weight: u32::from(*weight),
                });
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
