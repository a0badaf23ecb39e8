//! # Domain Errors

use hb_01_vault::{LedgerError, VaultError};
use shared_types::VaultId;
use thiserror::Error;

/// Registry error types.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The deterministic identity was already instantiated.
    #[error("vault already exists: {0:?}")]
    AlreadyExists(VaultId),

    /// No vault under that identity.
    #[error("vault not found: {0:?}")]
    VaultNotFound(VaultId),

    /// Malformed input: empty batch, undecodable callback payload, etc.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Wrong caller for a principal-gated operation.
    #[error("unauthorized caller")]
    Unauthorized,

    /// A vault guard rejected the operation.
    #[error(transparent)]
    Vault(#[from] VaultError),

    /// The value-transfer collaborator refused the move.
    #[error("ledger failure: {0}")]
    Ledger(#[from] LedgerError),
}
