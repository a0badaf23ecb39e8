//! # HB-01 Hash Time-Locked Vault
//!
//! A vault holds exactly one locked value transfer, released by presenting a
//! secret that hashes to the vault's commitment, or recovered by the
//! depositor after the deadline. Exactly one of release/recovery can ever
//! happen.
//!
//! **Component ID:** 01
//! **Architecture:** Hexagonal (domain + ports/adapters)
//!
//! ## State Machine
//!
//! ```text
//! Created ──lock──▶ Locked ──release──▶ Released
//!                      │
//!                      └────recover───▶ Recovered
//! ```
//!
//! All transitions are single-shot; nothing mutates after a terminal state.
//!
//! ## Module Structure
//!
//! ```text
//! hb-01-vault/
//! ├── domain/          # Vault entity, VaultState, errors
//! ├── ports/           # TokenLedger + Clock (outbound)
//! └── adapters/        # In-memory ledger, manual clock
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryTokenLedger;
pub use domain::{Vault, VaultError, VaultParams, VaultState};
pub use ports::{Clock, LedgerError, ManualClock, SystemClock, TokenLedger};
