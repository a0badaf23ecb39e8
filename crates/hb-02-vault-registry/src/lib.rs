//! # HB-02 Vault Registry
//!
//! Derives collision-resistant deterministic identities for vaults before
//! they exist, creates them on demand, and tracks every instantiated
//! identity so no identity is ever created twice.
//!
//! **Component ID:** 02
//! **Architecture:** Hexagonal (domain + algorithms + ports)
//!
//! ## Why deterministic identities
//!
//! Two parties on two domains agree off-band on a parameter tuple and a
//! salt. Each can then compute — before anything exists — the identity their
//! counterparty's vault will have, watch for its creation event, and verify
//! the parameters match. The identity is a pure coordination key: it doubles
//! as the custody account, but deploys nothing.
//!
//! ## Module Structure
//!
//! ```text
//! hb-02-vault-registry/
//! ├── domain/          # RegistryError
//! ├── algorithms/      # Identity derivation
//! ├── ipc/             # External-callback payload codec
//! ├── ports/           # RegistryApi (inbound)
//! └── service.rs       # VaultRegistry
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ipc;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{compute_identity, params_fingerprint};
pub use domain::RegistryError;
pub use ipc::{decode_external_request, encode_external_request, ExternalVaultRequest};
pub use ports::RegistryApi;
pub use service::VaultRegistry;
