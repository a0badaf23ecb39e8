//! # Domain Errors

use hb_01_vault::LedgerError;
use hb_02_vault_registry::RegistryError;
use shared_types::Hash;
use thiserror::Error;

/// Bridge coordinator error types.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A zero amount where value must flow.
    #[error("invalid amount")]
    InvalidAmount,

    /// The external settlement reference is malformed.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// The recipient principal is absent.
    #[error("invalid recipient")]
    InvalidRecipient,

    /// A swap under this commitment hash already exists.
    #[error("swap already exists: {0:?}")]
    AlreadyExists(Hash),

    /// No swap under this commitment hash.
    #[error("swap not found: {0:?}")]
    SwapNotFound(Hash),

    /// Wrong caller for a relay- or owner-gated operation.
    #[error("unauthorized caller")]
    Unauthorized,

    /// Operation attempted outside its valid swap state.
    #[error("invalid swap transition: {from} -> {to}")]
    InvalidState {
        /// Current state.
        from: String,
        /// Attempted state.
        to: String,
    },

    /// Expiry attempted before the deadline.
    #[error("swap not yet expired: deadline={deadline}, now={now}")]
    NotYetExpired {
        /// Swap deadline.
        deadline: u64,
        /// Observed time.
        now: u64,
    },

    /// Secret does not hash to the commitment under the system scheme.
    #[error("invalid proof")]
    InvalidProof,

    /// The registry rejected a vault operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The value-transfer collaborator refused the move.
    #[error("ledger failure: {0}")]
    Ledger(#[from] LedgerError),
}
