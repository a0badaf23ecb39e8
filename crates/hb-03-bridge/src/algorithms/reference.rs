//! # External Reference Parsing
//!
//! An inbound swap is keyed by the hashlock of the external payment it waits
//! on. The reference string carries that hashlock hex-encoded (the payment
//! hash of an invoice, for instance); deriving the commitment is decoding
//! it, nothing more. The reference is otherwise opaque to the coordinator.

use crate::domain::BridgeError;
use shared_types::{is_zero_hash, Hash};

/// Derive the commitment hash from an external settlement reference.
///
/// Accepts a 64-character hex string, with or without a `0x` prefix.
pub fn derive_commitment(reference: &str) -> Result<Hash, BridgeError> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return Err(BridgeError::InvalidReference("empty reference".into()));
    }
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let bytes = hex::decode(digits)
        .map_err(|e| BridgeError::InvalidReference(format!("not hex: {e}")))?;
    let hash: Hash = bytes.try_into().map_err(|_| {
        BridgeError::InvalidReference("reference must carry a 32-byte payment hash".into())
    })?;

    if is_zero_hash(&hash) {
        return Err(BridgeError::InvalidReference("zero payment hash".into()));
    }
    Ok(hash)
}
