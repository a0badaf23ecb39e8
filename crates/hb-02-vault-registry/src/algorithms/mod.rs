//! # Algorithms Module

pub mod identity;

pub use identity::{compute_identity, params_fingerprint};
