//! # External Callback Payloads
//!
//! The order-matching collaborator supplies swap parameters as an opaque
//! bincode blob; this module decodes and validates it. Creation itself stays
//! in the service — decode errors and parameter errors must be tellable
//! apart from state errors.

use crate::domain::RegistryError;
use hb_01_vault::VaultParams;
use serde::{Deserialize, Serialize};
use shared_types::{is_zero_address, is_zero_hash, Address, Hash, Salt, TokenId};

/// Parameter tuple handed over by the order-matching collaborator.
///
/// Carries a relative timeout rather than an absolute deadline: the matching
/// engine cannot know when the callback will execute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalVaultRequest {
    /// Token for the vault.
    pub token: TokenId,
    /// Depositor principal.
    pub depositor: Address,
    /// Beneficiary principal.
    pub beneficiary: Address,
    /// Commitment hash shared by both legs.
    pub hash_lock: Hash,
    /// Seconds from execution until the vault's recovery deadline.
    pub timeout_secs: u64,
    /// Salt for identity derivation.
    pub salt: Salt,
}

impl ExternalVaultRequest {
    /// Validate the decoded payload before it reaches creation logic.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if is_zero_address(&self.depositor) || is_zero_address(&self.beneficiary) {
            return Err(RegistryError::InvalidParameters(
                "callback payload names a zero principal".into(),
            ));
        }
        if is_zero_hash(&self.hash_lock) {
            return Err(RegistryError::InvalidParameters(
                "callback payload carries a zero hash lock".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(RegistryError::InvalidParameters(
                "callback payload carries a zero timeout".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the relative timeout into absolute vault parameters.
    pub fn to_params(&self, now: u64) -> VaultParams {
        VaultParams {
            token: self.token,
            depositor: self.depositor,
            beneficiary: self.beneficiary,
            hash_lock: self.hash_lock,
            deadline: now + self.timeout_secs,
        }
    }
}

/// Decode an opaque callback blob.
pub fn decode_external_request(bytes: &[u8]) -> Result<ExternalVaultRequest, RegistryError> {
    bincode::deserialize(bytes)
        .map_err(|e| RegistryError::InvalidParameters(format!("undecodable callback payload: {e}")))
}

/// Encode a callback payload; used by the matching adapter and by tests.
pub fn encode_external_request(request: &ExternalVaultRequest) -> Vec<u8> {
    bincode::serialize(request).expect("external request serialization cannot fail")
}
