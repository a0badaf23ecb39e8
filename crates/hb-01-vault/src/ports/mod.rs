//! # Ports Module
//!
//! Outbound dependencies of the vault: the value-transfer collaborator and
//! the clock.

pub mod clock;
pub mod ledger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ledger::{LedgerError, TokenLedger};
