//! # Shared Entities
//!
//! Principal, hash and identifier types used across all components.

use serde::{Deserialize, Serialize};

/// Hash type (32-byte digest).
pub type Hash = [u8; 32];

/// Principal address type (20-byte).
pub type Address = [u8; 20];

/// Secret preimage type (32-byte).
pub type Secret = [u8; 32];

/// Salt for deterministic identity derivation (32-byte).
pub type Salt = [u8; 32];

/// Vault identity: a coordination key derived before the vault exists.
pub type VaultId = Hash;

/// Token identifier within the local value domain.
pub type TokenId = Address;

/// Settlement domain identifiers.
///
/// A swap has exactly two legs; each leg settles in one of these domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainId {
    /// The local ledger this process executes against.
    Local,
    /// The external payment network observed by the relay.
    External,
}

/// Check whether an address is the all-zero (absent) principal.
pub fn is_zero_address(addr: &Address) -> bool {
    addr.iter().all(|b| *b == 0)
}

/// Check whether a hash is the all-zero (absent) commitment.
pub fn is_zero_hash(hash: &Hash) -> bool {
    hash.iter().all(|b| *b == 0)
}

/// Short hex prefix for log lines, e.g. `a3f09b12`.
pub fn short_hex(bytes: &[u8]) -> String {
    hex::encode(&bytes[..bytes.len().min(4)])
}
