//! # IPC Module
//!
//! Codec for the opaque parameter blob the order-matching collaborator hands
//! over. Kept apart from creation logic so the wire format can evolve
//! independently.

pub mod payloads;

pub use payloads::{decode_external_request, encode_external_request, ExternalVaultRequest};
