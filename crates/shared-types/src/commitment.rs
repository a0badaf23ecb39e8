//! # Commitment Scheme
//!
//! The hash function binding a secret to its hashlock.
//!
//! Every component that validates a commitment (vault release, bridge
//! settlement confirmation) is constructed with a [`CommitmentScheme`] value
//! and must use it for all commitment checks. Mixing schemes across legs
//! would make a secret valid on one side and worthless on the other, so the
//! scheme is system configuration, not a per-component choice.

use crate::entities::{Hash, Secret};
use crate::secure_secret::SecureSecret;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// Hash function used for secret commitments, system-wide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitmentScheme {
    /// SHA-256 (default; matches the common external-network hashlock).
    #[default]
    Sha256,
    /// SHA3-256, for domains that standardise on Keccak-family digests.
    Sha3_256,
}

impl CommitmentScheme {
    /// Compute the commitment hash of a secret.
    pub fn commit(&self, secret: &Secret) -> Hash {
        match self {
            CommitmentScheme::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(secret);
                hasher.finalize().into()
            }
            CommitmentScheme::Sha3_256 => {
                let mut hasher = Sha3_256::new();
                hasher.update(secret);
                hasher.finalize().into()
            }
        }
    }

    /// Check that a secret hashes to the given commitment.
    pub fn verify(&self, secret: &Secret, hash_lock: &Hash) -> bool {
        self.commit(secret) == *hash_lock
    }
}

/// Generate a cryptographically random secret, zeroized on drop.
pub fn generate_secret() -> SecureSecret {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    SecureSecret::new(bytes)
}
