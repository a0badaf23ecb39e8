//! # HB-03 Bridge Coordinator
//!
//! Coordinates swaps whose two legs settle in different domains: a hash
//! time-locked vault on the local ledger, and an externally confirmed
//! payment sharing the same commitment hash on the other side.
//!
//! **Component ID:** 03
//! **Architecture:** Hexagonal (domain + algorithms + ports)
//!
//! ## Swap State Machine
//!
//! ```text
//! Initiated ──[ReferenceSet]──▶ ExternalConfirmed ──▶ Completed
//!     │              │                  │
//!     └──────────────┴───── deadline ───┴───────────▶ Expired
//! ```
//!
//! `ReferenceSet` only occurs outbound; `Expired` moves no funds — the
//! underlying vault's recovery path returns them.
//!
//! ## Trust Model
//!
//! The protocol cannot force the second leg to settle after the first leg's
//! reveal; an off-system relay watches the external network and carries the
//! secret here. The coordinator only verifies what the relay presents,
//! against the one commitment scheme the whole system shares.
//!
//! ## Module Structure
//!
//! ```text
//! hb-03-bridge/
//! ├── domain/          # Swap, SwapState, SwapDirection, errors
//! ├── algorithms/      # External-reference parsing
//! ├── ports/           # BridgeApi (inbound)
//! └── service.rs       # BridgeCoordinator
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::derive_commitment;
pub use domain::{BridgeConfig, BridgeError, Swap, SwapDirection, SwapState};
pub use ports::BridgeApi;
pub use service::BridgeCoordinator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
