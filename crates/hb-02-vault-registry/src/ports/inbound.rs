//! # Inbound Ports
//!
//! What the registry can be asked to do.

use crate::domain::RegistryError;
use async_trait::async_trait;
use hb_01_vault::{Vault, VaultParams};
use shared_types::{Address, Salt, Secret, VaultId};

/// Registry API - inbound port.
///
/// Every mutating entry point is atomic: it either fully applies its effects
/// or none at all, including when the ledger collaborator fails mid-call.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// Instantiate a vault at its deterministic identity.
    async fn create(&mut self, params: VaultParams, salt: Salt) -> Result<VaultId, RegistryError>;

    /// Create and immediately fund a vault. Depositor-only.
    async fn create_and_lock(
        &mut self,
        caller: Address,
        params: VaultParams,
        salt: Salt,
        amount: u64,
    ) -> Result<VaultId, RegistryError>;

    /// Create a vault from the order-matching collaborator's opaque payload.
    /// Restricted to the configured callback authority.
    async fn create_from_callback(
        &mut self,
        caller: Address,
        payload: &[u8],
    ) -> Result<VaultId, RegistryError>;

    /// Create several vaults in one call; all or nothing.
    async fn batch_create(
        &mut self,
        requests: Vec<(VaultParams, Salt)>,
    ) -> Result<Vec<VaultId>, RegistryError>;

    /// Pull funds from the depositor into vault custody.
    async fn lock(
        &mut self,
        caller: Address,
        vault_id: VaultId,
        amount: u64,
    ) -> Result<(), RegistryError>;

    /// Release a locked vault to its beneficiary with a valid secret.
    /// Callable by anyone.
    async fn release(&mut self, vault_id: VaultId, secret: Secret) -> Result<(), RegistryError>;

    /// Return a locked vault's funds to the depositor after the deadline.
    /// Depositor-only.
    async fn recover(&mut self, caller: Address, vault_id: VaultId) -> Result<(), RegistryError>;

    /// Replace the authorized external-callback principal. Owner-only;
    /// affects only calls made after the change.
    fn set_callback_authority(
        &mut self,
        caller: Address,
        authority: Address,
    ) -> Result<(), RegistryError>;

    /// Look up a vault by identity.
    fn get_vault(&self, vault_id: &VaultId) -> Option<&Vault>;

    /// Whether an identity has been instantiated.
    fn contains(&self, vault_id: &VaultId) -> bool;

    /// Number of vaults created through this registry.
    fn created_count(&self) -> u64;
}
