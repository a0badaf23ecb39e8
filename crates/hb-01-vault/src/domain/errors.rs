//! # Domain Errors
//!
//! Every guard violation maps to a specific kind so off-system automation can
//! tell "try again later" (`NotYetExpired`) from "this will never succeed"
//! (`InvalidProof`, `AlreadyFinal`).

use crate::ports::LedgerError;
use thiserror::Error;

/// Vault error types.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Malformed or zero creation inputs.
    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),

    /// Wrong caller for a principal-gated operation.
    #[error("unauthorized caller")]
    Unauthorized,

    /// `lock` was already performed.
    #[error("vault already locked")]
    AlreadyLocked,

    /// Zero amount supplied to `lock`.
    #[error("invalid amount")]
    InvalidAmount,

    /// Operation requires a locked vault.
    #[error("vault not locked")]
    NotLocked,

    /// Vault already reached a terminal state (released or recovered).
    #[error("vault already finalized")]
    AlreadyFinal,

    /// Release attempted at or past the deadline.
    #[error("vault expired: deadline={deadline}, now={now}")]
    Expired {
        /// Recovery deadline.
        deadline: u64,
        /// Observed time.
        now: u64,
    },

    /// Recovery attempted before the deadline.
    #[error("vault not yet expired: deadline={deadline}, now={now}")]
    NotYetExpired {
        /// Recovery deadline.
        deadline: u64,
        /// Observed time.
        now: u64,
    },

    /// Secret does not hash to the stored commitment.
    #[error("invalid proof")]
    InvalidProof,

    /// The value-transfer collaborator refused the move.
    #[error("ledger failure: {0}")]
    Ledger(#[from] LedgerError),
}
