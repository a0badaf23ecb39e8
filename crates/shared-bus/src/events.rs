//! # Coordination Events
//!
//! Everything an off-system observer needs to drive the opposite leg of a
//! swap: which vault or swap changed state, under which commitment hash, and
//! the parameters another party would need to recompute the same identity.

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, Hash, Salt, Secret, TokenId, VaultId};

/// Coarse event topics for subscription filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// Vault lifecycle: created, locked, released, recovered.
    Vault,
    /// Cross-domain swap lifecycle tracked by the bridge coordinator.
    Swap,
}

/// All events published to the bus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CoordinationEvent {
    /// A vault identity was instantiated.
    ///
    /// Carries the full parameter tuple plus salt so an independent party on
    /// the other domain can recompute the identity and create the matching
    /// vault.
    VaultCreated {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// The derived vault identity.
        vault_id: VaultId,
        /// Registry that instantiated the vault.
        registry: Address,
        /// Domain the vault was created in.
        domain: DomainId,
        /// Token held by the vault.
        token: TokenId,
        /// Depositor principal.
        depositor: Address,
        /// Beneficiary principal.
        beneficiary: Address,
        /// Commitment hash shared by both legs.
        hash_lock: Hash,
        /// Recovery deadline (unix seconds).
        deadline: u64,
        /// Salt used for identity derivation.
        salt: Salt,
    },

    /// Funds were pulled into vault custody.
    VaultLocked {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// The vault that was locked.
        vault_id: VaultId,
        /// Locked amount.
        amount: u64,
    },

    /// A valid secret was presented; funds moved to the beneficiary.
    ///
    /// The revealed secret is public from this moment on, so observers can
    /// carry it to the matching vault in the other domain.
    VaultReleased {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// The vault that was released.
        vault_id: VaultId,
        /// Beneficiary who received the funds.
        beneficiary: Address,
        /// The revealed secret.
        secret: Secret,
    },

    /// The deadline passed unused; funds returned to the depositor.
    VaultRecovered {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// The vault that was recovered.
        vault_id: VaultId,
        /// Depositor who received the funds back.
        depositor: Address,
    },

    /// A cross-domain swap was registered with the coordinator.
    SwapInitiated {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// Commitment hash keying the swap.
        hash_lock: Hash,
        /// Initiating principal.
        initiator: Address,
        /// Direction of value flow.
        outbound: bool,
        /// Local-domain amount.
        local_amount: u64,
        /// External-domain amount (zero for inbound swaps).
        external_amount: u64,
        /// Backing vault, if one exists yet.
        vault_id: Option<VaultId>,
        /// Swap deadline (unix seconds).
        deadline: u64,
    },

    /// The relay attached an external settlement reference to a swap.
    ReferenceAttached {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// Commitment hash keying the swap.
        hash_lock: Hash,
        /// The external settlement reference (e.g. a payment request).
        reference: String,
    },

    /// The relay confirmed external settlement by revealing the secret.
    ExternalSettlementConfirmed {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// Commitment hash keying the swap.
        hash_lock: Hash,
        /// The revealed secret (public from here on).
        secret: Secret,
        /// Backing vault created/available for the local leg.
        vault_id: Option<VaultId>,
    },

    /// The local leg was withdrawn; the swap is finished.
    SwapCompleted {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// Commitment hash keying the swap.
        hash_lock: Hash,
    },

    /// The swap passed its deadline without completing.
    SwapExpired {
        /// Correlation id for observer-side tracing.
        correlation_id: String,
        /// Commitment hash keying the swap.
        hash_lock: Hash,
    },
}

impl CoordinationEvent {
    /// Topic this event belongs to.
    pub fn topic(&self) -> EventTopic {
        match self {
            CoordinationEvent::VaultCreated { .. }
            | CoordinationEvent::VaultLocked { .. }
            | CoordinationEvent::VaultReleased { .. }
            | CoordinationEvent::VaultRecovered { .. } => EventTopic::Vault,
            CoordinationEvent::SwapInitiated { .. }
            | CoordinationEvent::ReferenceAttached { .. }
            | CoordinationEvent::ExternalSettlementConfirmed { .. }
            | CoordinationEvent::SwapCompleted { .. }
            | CoordinationEvent::SwapExpired { .. } => EventTopic::Swap,
        }
    }
}

/// Fresh correlation id for a published event.
pub fn new_correlation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
