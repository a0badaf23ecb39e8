//! # Domain Value Objects
//!
//! The swap state machine tracked by the coordinator.

use serde::{Deserialize, Serialize};

/// Which way value flows through the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Local vault leg first; external settlement pays it out.
    LocalToExternal,
    /// External settlement first; a local vault is funded on confirmation.
    ExternalToLocal,
}

/// Swap lifecycle states.
///
/// `ReferenceSet` is an optional stop reachable only in the
/// `LocalToExternal` direction, between initiation and confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapState {
    /// Registered with the coordinator.
    #[default]
    Initiated,
    /// The relay attached the external settlement reference.
    ReferenceSet,
    /// The relay confirmed external settlement and revealed the secret.
    ExternalConfirmed,
    /// The local leg was withdrawn; nothing left to do.
    Completed,
    /// Deadline passed before completion; vault recovery takes over.
    Expired,
}

impl SwapState {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, next: SwapState) -> bool {
        matches!(
            (self, next),
            (Self::Initiated, Self::ReferenceSet)
                | (Self::Initiated, Self::ExternalConfirmed)
                | (Self::Initiated, Self::Expired)
                | (Self::ReferenceSet, Self::ExternalConfirmed)
                | (Self::ReferenceSet, Self::Expired)
                | (Self::ExternalConfirmed, Self::Completed)
                | (Self::ExternalConfirmed, Self::Expired)
        )
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Expired)
    }
}
