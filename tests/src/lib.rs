//! # Hashlock-Bridge Test Suite
//!
//! Unified test crate for cross-component flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-component coordination scenarios
//!     ├── vault_flows.rs    # Two-domain vault choreography, timeouts
//!     └── bridge_flows.rs   # Bridge end-to-end scenarios, events
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hb-tests
//!
//! # By category
//! cargo test -p hb-tests integration::vault_flows
//! cargo test -p hb-tests integration::bridge_flows
//! ```

#![allow(dead_code)]

pub mod integration;
