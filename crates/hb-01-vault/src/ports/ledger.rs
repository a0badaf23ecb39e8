//! # Token Ledger Port
//!
//! The fungible-token move primitive the vault settles against. A failure
//! from this collaborator aborts the calling operation before any vault
//! state is committed.

use async_trait::async_trait;
use shared_types::{Address, TokenId};
use thiserror::Error;

/// Value-transfer failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The source account does not hold enough of the token.
    #[error("insufficient balance: have={have}, need={need}")]
    InsufficientBalance {
        /// Balance currently held.
        have: u64,
        /// Amount required.
        need: u64,
    },

    /// The ledger rejected the transfer for a domain-specific reason.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Fungible-token move primitive.
///
/// `transfer_from` pulls value out of a third party's account (the
/// depositor, at lock time); `transfer` pushes value out of an account the
/// caller controls (custody, at release/recover time). A real ledger would
/// enforce an allowance on the pull path; the distinction is kept so
/// adapters against such ledgers map one-to-one.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Pull `amount` of `token` from `from` into `to`.
    async fn transfer_from(
        &self,
        token: TokenId,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError>;

    /// Push `amount` of `token` from a caller-controlled account to `to`.
    async fn transfer(
        &self,
        token: TokenId,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError>;

    /// Current balance of `account` for `token`.
    async fn balance_of(&self, token: TokenId, account: Address) -> u64;
}
