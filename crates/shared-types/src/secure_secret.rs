//! # Secure Secret Type
//!
//! Wrapper for HTLC secrets that zeroizes memory on drop.
//!
//! A secret is only sensitive until it is revealed on-ledger; before that
//! moment it is the single value standing between locked funds and their
//! beneficiary. Holding it in a plain array risks leaving copies behind in
//! memory dumps and core files, so the initiator-side secret lives in this
//! wrapper from generation until reveal.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte secret that zeroizes on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureSecret {
    inner: [u8; 32],
}

impl SecureSecret {
    /// Wrap raw secret bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { inner: bytes }
    }

    /// Copy a slice into a secret. Returns `None` unless it is exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 32 {
            return None;
        }
        let mut inner = [0u8; 32];
        inner.copy_from_slice(slice);
        Some(Self { inner })
    }

    /// Borrow the secret bytes. Use immediately; do not store the reference.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.inner
    }

    /// Copy the secret out for an API that consumes a plain array.
    ///
    /// The copy is the caller's responsibility; reach for this only at the
    /// reveal boundary where the secret becomes public anyway.
    pub fn expose(&self) -> [u8; 32] {
        self.inner
    }
}

impl std::fmt::Debug for SecureSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecureSecret(***)")
    }
}

impl Serialize for SecureSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(self.inner))
    }
}

impl<'de> Deserialize<'de> for SecureSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        Self::from_slice(&bytes).ok_or_else(|| serde::de::Error::custom("invalid secret length"))
    }
}
