//! # Domain Entities
//!
//! The swap record and the coordinator configuration.

use super::errors::BridgeError;
use super::value_objects::{SwapDirection, SwapState};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, Secret, TokenId, VaultId};

/// One cross-domain exchange, keyed by its commitment hash.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Swap {
    /// Commitment hash shared by both legs.
    pub hash_lock: Hash,
    /// Backing vault on the local leg, once one exists.
    pub vault_id: Option<VaultId>,
    /// Principal that registered the swap.
    pub initiator: Address,
    /// Local-domain token.
    pub token: TokenId,
    /// Amount on the local leg.
    pub local_amount: u64,
    /// Amount on the external leg (zero for inbound swaps).
    pub external_amount: u64,
    /// Opaque external settlement reference (e.g. a payment request).
    pub external_reference: Option<String>,
    /// Current state.
    pub state: SwapState,
    /// Direction of value flow.
    pub direction: SwapDirection,
    /// Creation timestamp.
    pub created_at: u64,
    /// Deadline after which `expire` becomes available.
    pub deadline: u64,
    /// Revealed secret; set once at confirmation, never changed.
    pub secret: Option<Secret>,
    /// Local recipient (inbound swaps only).
    pub recipient: Option<Address>,
}

impl Swap {
    /// Register an outbound swap: local vault leg, external payout.
    #[allow(clippy::too_many_arguments)]
    pub fn new_outbound(
        hash_lock: Hash,
        vault_id: VaultId,
        initiator: Address,
        token: TokenId,
        local_amount: u64,
        external_amount: u64,
        created_at: u64,
        deadline: u64,
    ) -> Self {
        Self {
            hash_lock,
            vault_id: Some(vault_id),
            initiator,
            token,
            local_amount,
            external_amount,
            external_reference: None,
            state: SwapState::Initiated,
            direction: SwapDirection::LocalToExternal,
            created_at,
            deadline,
            secret: None,
            recipient: None,
        }
    }

    /// Register an inbound swap: external settlement first, vault funded at
    /// confirmation.
    #[allow(clippy::too_many_arguments)]
    pub fn new_inbound(
        hash_lock: Hash,
        initiator: Address,
        token: TokenId,
        local_amount: u64,
        recipient: Address,
        reference: String,
        created_at: u64,
        deadline: u64,
    ) -> Self {
        Self {
            hash_lock,
            vault_id: None,
            initiator,
            token,
            local_amount,
            external_amount: 0,
            external_reference: Some(reference),
            state: SwapState::Initiated,
            direction: SwapDirection::ExternalToLocal,
            created_at,
            deadline,
            secret: None,
            recipient: Some(recipient),
        }
    }

    /// Transition to a new state, or fail with `InvalidState`.
    pub fn transition_to(&mut self, next: SwapState) -> Result<(), BridgeError> {
        if !self.state.can_transition_to(next) {
            return Err(BridgeError::InvalidState {
                from: format!("{:?}", self.state),
                to: format!("{next:?}"),
            });
        }
        self.state = next;
        Ok(())
    }
}

/// Coordinator configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Lifetime of vaults the coordinator funds at confirmation of an
    /// inbound swap, and of the inbound swap record itself.
    pub inbound_vault_timeout_secs: u64,
    /// Suggested lifetime for outbound swaps; initiators may pick their own
    /// deadline, this is what `suggested_outbound_deadline` hands out.
    pub default_outbound_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            inbound_vault_timeout_secs: 18 * 3600,
            default_outbound_timeout_secs: 24 * 3600,
        }
    }
}

impl BridgeConfig {
    /// Deadline an outbound initiator should use absent a better estimate.
    pub fn suggested_outbound_deadline(&self, now: u64) -> u64 {
        now + self.default_outbound_timeout_secs
    }
}
