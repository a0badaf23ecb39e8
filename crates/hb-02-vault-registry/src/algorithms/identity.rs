//! # Deterministic Identity Derivation
//!
//! `identity = SHA-256(tag ‖ registry ‖ salt ‖ fingerprint(params))`
//!
//! Any party holding the parameter tuple and the salt can compute the
//! identity before the vault exists; the registry identity in the preimage
//! keeps identities from colliding across registries. Note this is a
//! coordination key, deliberately independent of the configurable commitment
//! scheme: changing how secrets are hashed must not move where vaults live.

use hb_01_vault::VaultParams;
use sha2::{Digest, Sha256};
use shared_types::{Address, Hash, Salt, VaultId};

/// Domain-separation tag for identity derivation.
const IDENTITY_TAG: &[u8] = b"hb/vault-identity/v1";

/// Fingerprint of a vault's immutable parameter tuple.
pub fn params_fingerprint(params: &VaultParams) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(params.token);
    hasher.update(params.depositor);
    hasher.update(params.beneficiary);
    hasher.update(params.hash_lock);
    hasher.update(params.deadline.to_be_bytes());
    hasher.finalize().into()
}

/// Derive the identity a vault with these parameters will be created at.
pub fn compute_identity(registry: &Address, params: &VaultParams, salt: &Salt) -> VaultId {
    let mut hasher = Sha256::new();
    hasher.update(IDENTITY_TAG);
    hasher.update(registry);
    hasher.update(salt);
    hasher.update(params_fingerprint(params));
    hasher.finalize().into()
}
