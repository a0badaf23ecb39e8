//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports.

mod memory_ledger;

pub use memory_ledger::InMemoryTokenLedger;
