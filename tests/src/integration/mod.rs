//! Cross-component coordination scenarios.

pub mod bridge_flows;
pub mod vault_flows;
