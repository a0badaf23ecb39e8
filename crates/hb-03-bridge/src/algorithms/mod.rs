//! # Algorithms Module

pub mod reference;

pub use reference::derive_commitment;
