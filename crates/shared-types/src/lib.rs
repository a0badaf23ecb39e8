//! # Shared Types Crate
//!
//! Cross-component primitives for Hashlock-Bridge. Every type that more than
//! one component validates against lives here, so the vault, the registry and
//! the bridge coordinator can never drift apart on the basics.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: principals, hashes and the commitment scheme
//!   are defined once and injected everywhere.
//! - **One Commitment Scheme**: the hash function that binds secrets to
//!   hashlocks is an explicit [`CommitmentScheme`] value, never a
//!   per-component choice. A secret that validates on one leg validates on
//!   every leg configured with the same scheme.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commitment;
pub mod entities;
pub mod secure_secret;

pub use commitment::{generate_secret, CommitmentScheme};
pub use entities::*;
pub use secure_secret::SecureSecret;
