//! # Domain Value Objects
//!
//! The vault state machine.

use serde::{Deserialize, Serialize};

/// Vault lifecycle states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultState {
    /// Created, no funds held yet.
    #[default]
    Created,
    /// Funds pulled into custody, awaiting release or recovery.
    Locked,
    /// Secret presented before the deadline; funds went to the beneficiary.
    Released,
    /// Deadline passed unused; funds returned to the depositor.
    Recovered,
}

impl VaultState {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, next: VaultState) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Locked)
                | (Self::Locked, Self::Released)
                | (Self::Locked, Self::Recovered)
        )
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Released | Self::Recovered)
    }
}
