//! # Inbound Ports
//!
//! What the bridge coordinator can be asked to do.
//!
//! The relay principal named in the coordinator's configuration is the only
//! caller allowed to attach references and confirm external settlement; it
//! runs its own client against the external network and carries the revealed
//! secret back here. Cross-domain sequencing is the relay's job, never this
//! API's.

use crate::domain::{BridgeError, Swap};
use async_trait::async_trait;
use shared_types::{Address, Hash, Secret, TokenId, VaultId};

/// Bridge coordinator API - inbound port.
#[async_trait]
pub trait BridgeApi: Send + Sync {
    /// Start an outbound swap: lock local value behind `hash_lock`, to be
    /// paid out externally. Returns the backing vault's identity.
    async fn initiate_local_to_external(
        &mut self,
        caller: Address,
        token: TokenId,
        local_amount: u64,
        external_amount: u64,
        hash_lock: Hash,
        deadline: u64,
    ) -> Result<VaultId, BridgeError>;

    /// Start an inbound swap: register interest in an external payment whose
    /// hashlock is carried by `reference`. Returns the commitment hash the
    /// swap is keyed by.
    async fn initiate_external_to_local(
        &mut self,
        caller: Address,
        reference: &str,
        token: TokenId,
        local_amount: u64,
        recipient: Address,
    ) -> Result<Hash, BridgeError>;

    /// Attach the external settlement reference to an outbound swap.
    /// Relay-only.
    async fn set_external_reference(
        &mut self,
        caller: Address,
        hash_lock: Hash,
        reference: String,
    ) -> Result<(), BridgeError>;

    /// Confirm external settlement by presenting the revealed secret.
    /// Relay-only; for inbound swaps this also creates and funds the
    /// recipient's vault.
    async fn confirm_external_settlement(
        &mut self,
        caller: Address,
        hash_lock: Hash,
        secret: Secret,
    ) -> Result<(), BridgeError>;

    /// Release an outbound swap's backing vault with the stored secret and
    /// forward the proceeds to the relay.
    async fn withdraw_local(&mut self, hash_lock: Hash) -> Result<(), BridgeError>;

    /// Mark a swap expired once its deadline has passed. Moves no funds —
    /// the vault's own recovery path returns them.
    async fn expire(&mut self, hash_lock: Hash) -> Result<(), BridgeError>;

    /// Replace the relay principal. Owner-only; affects only calls made
    /// after the change.
    fn set_relay(&mut self, caller: Address, relay: Address) -> Result<(), BridgeError>;

    /// Look up a swap by commitment hash.
    fn get_swap(&self, hash_lock: &Hash) -> Option<&Swap>;
}
