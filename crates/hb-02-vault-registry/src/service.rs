//! # Vault Registry Service
//!
//! Owns the arena of instantiated vaults. All access to vault state goes
//! through an instance of this service — there is no module-level singleton.
//!
//! Mutation ordering inside every entry point: validate, move value through
//! the ledger, then commit vault state and publish. A ledger refusal aborts
//! the call before any state has changed.

use crate::algorithms::compute_identity;
use crate::domain::RegistryError;
use crate::ipc::decode_external_request;
use crate::ports::RegistryApi;
use async_trait::async_trait;
use hb_01_vault::{Clock, TokenLedger, Vault, VaultParams};
use shared_bus::{new_correlation_id, CoordinationEvent, EventPublisher};
use shared_types::{short_hex, Address, CommitmentScheme, DomainId, Salt, Secret, VaultId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::info;

/// The vault registry: deterministic identities, creation, custody flows.
pub struct VaultRegistry {
    registry_id: Address,
    domain: DomainId,
    owner: Address,
    callback_authority: Option<Address>,
    scheme: CommitmentScheme,
    vaults: HashMap<VaultId, Vault>,
    created_count: u64,
    ledger: Arc<dyn TokenLedger>,
    clock: Arc<dyn Clock>,
    bus: Arc<dyn EventPublisher>,
}

impl VaultRegistry {
    /// Create a registry bound to one settlement domain.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry_id: Address,
        domain: DomainId,
        owner: Address,
        scheme: CommitmentScheme,
        ledger: Arc<dyn TokenLedger>,
        clock: Arc<dyn Clock>,
        bus: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            registry_id,
            domain,
            owner,
            callback_authority: None,
            scheme,
            vaults: HashMap::new(),
            created_count: 0,
            ledger,
            clock,
            bus,
        }
    }

    /// Identity a vault with these parameters would be created at.
    ///
    /// Pure pass-through to [`compute_identity`] with this registry's own
    /// identity mixed in.
    pub fn identity_for(&self, params: &VaultParams, salt: &Salt) -> VaultId {
        compute_identity(&self.registry_id, params, salt)
    }

    /// Commitment scheme this registry validates against.
    pub fn scheme(&self) -> CommitmentScheme {
        self.scheme
    }

    /// Read-only mirror of the release guards, for polling observers.
    pub fn can_release(&self, vault_id: &VaultId, secret: &Secret) -> bool {
        let now = self.clock.now_unix();
        self.vaults
            .get(vault_id)
            .map(|v| v.can_release(self.scheme, secret, now))
            .unwrap_or(false)
    }

    /// Read-only mirror of the recover guards, for polling observers.
    pub fn can_recover(&self, vault_id: &VaultId, caller: &Address) -> bool {
        let now = self.clock.now_unix();
        self.vaults
            .get(vault_id)
            .map(|v| v.can_recover(caller, now))
            .unwrap_or(false)
    }

    fn insert_vault(&mut self, vault: Vault) {
        self.vaults.insert(vault.id, vault);
        self.created_count += 1;
    }

    async fn publish_created(&self, vault: &Vault, salt: Salt) {
        self.bus
            .publish(CoordinationEvent::VaultCreated {
                correlation_id: new_correlation_id(),
                vault_id: vault.id,
                registry: self.registry_id,
                domain: self.domain,
                token: vault.token,
                depositor: vault.depositor,
                beneficiary: vault.beneficiary,
                hash_lock: vault.hash_lock,
                deadline: vault.deadline,
                salt,
            })
            .await;
    }

    async fn publish_locked(&self, vault_id: VaultId, amount: u64) {
        self.bus
            .publish(CoordinationEvent::VaultLocked {
                correlation_id: new_correlation_id(),
                vault_id,
                amount,
            })
            .await;
    }
}

#[async_trait]
impl RegistryApi for VaultRegistry {
    async fn create(&mut self, params: VaultParams, salt: Salt) -> Result<VaultId, RegistryError> {
        let now = self.clock.now_unix();
        let vault_id = self.identity_for(&params, &salt);
        if self.vaults.contains_key(&vault_id) {
            return Err(RegistryError::AlreadyExists(vault_id));
        }

        let vault = Vault::new(vault_id, params, now)?;
        self.publish_created(&vault, salt).await;
        self.insert_vault(vault);

        info!("[registry] created vault {}", short_hex(&vault_id));
        Ok(vault_id)
    }

    async fn create_and_lock(
        &mut self,
        caller: Address,
        params: VaultParams,
        salt: Salt,
        amount: u64,
    ) -> Result<VaultId, RegistryError> {
        if caller != params.depositor {
            return Err(RegistryError::Unauthorized);
        }

        let now = self.clock.now_unix();
        let vault_id = self.identity_for(&params, &salt);
        if self.vaults.contains_key(&vault_id) {
            return Err(RegistryError::AlreadyExists(vault_id));
        }

        // Build and fully validate the vault before any effect lands, so a
        // ledger refusal leaves the registry exactly as it was.
        let mut vault = Vault::new(vault_id, params, now)?;
        vault.ensure_can_lock(&caller, amount)?;
        self.ledger
            .transfer_from(vault.token, caller, vault.custody_address(), amount)
            .await?;
        vault.apply_lock(amount);

        self.publish_created(&vault, salt).await;
        self.publish_locked(vault_id, amount).await;
        self.insert_vault(vault);

        info!(
            "[registry] created and locked vault {} ({} units)",
            short_hex(&vault_id),
            amount
        );
        Ok(vault_id)
    }

    async fn create_from_callback(
        &mut self,
        caller: Address,
        payload: &[u8],
    ) -> Result<VaultId, RegistryError> {
        if self.callback_authority != Some(caller) {
            return Err(RegistryError::Unauthorized);
        }

        let request = decode_external_request(payload)?;
        request.validate()?;
        let params = request.to_params(self.clock.now_unix());
        self.create(params, request.salt).await
    }

    async fn batch_create(
        &mut self,
        requests: Vec<(VaultParams, Salt)>,
    ) -> Result<Vec<VaultId>, RegistryError> {
        if requests.is_empty() {
            return Err(RegistryError::InvalidParameters("empty batch".into()));
        }

        let now = self.clock.now_unix();

        // Phase one: validate everything, touching nothing.
        let mut batch = Vec::with_capacity(requests.len());
        let mut seen = HashSet::new();
        for (params, salt) in requests {
            let vault_id = self.identity_for(&params, &salt);
            if self.vaults.contains_key(&vault_id) || !seen.insert(vault_id) {
                return Err(RegistryError::AlreadyExists(vault_id));
            }
            let vault = Vault::new(vault_id, params, now)?;
            batch.push((vault, salt));
        }

        // Phase two: nothing can fail anymore; apply the whole batch.
        let mut created = Vec::with_capacity(batch.len());
        for (vault, salt) in batch {
            created.push(vault.id);
            self.publish_created(&vault, salt).await;
            self.insert_vault(vault);
        }

        info!("[registry] batch-created {} vaults", created.len());
        Ok(created)
    }

    async fn lock(
        &mut self,
        caller: Address,
        vault_id: VaultId,
        amount: u64,
    ) -> Result<(), RegistryError> {
        let (token, custody) = {
            let vault = self
                .vaults
                .get(&vault_id)
                .ok_or(RegistryError::VaultNotFound(vault_id))?;
            vault.ensure_can_lock(&caller, amount)?;
            (vault.token, vault.custody_address())
        };

        self.ledger
            .transfer_from(token, caller, custody, amount)
            .await?;

        let vault = self
            .vaults
            .get_mut(&vault_id)
            .ok_or(RegistryError::VaultNotFound(vault_id))?;
        vault.apply_lock(amount);

        self.publish_locked(vault_id, amount).await;
        info!(
            "[registry] locked vault {} ({} units)",
            short_hex(&vault_id),
            amount
        );
        Ok(())
    }

    async fn release(&mut self, vault_id: VaultId, secret: Secret) -> Result<(), RegistryError> {
        let now = self.clock.now_unix();
        let (token, custody, beneficiary, amount) = {
            let vault = self
                .vaults
                .get(&vault_id)
                .ok_or(RegistryError::VaultNotFound(vault_id))?;
            vault.ensure_can_release(self.scheme, &secret, now)?;
            (
                vault.token,
                vault.custody_address(),
                vault.beneficiary,
                vault.amount,
            )
        };

        self.ledger
            .transfer(token, custody, beneficiary, amount)
            .await?;

        let vault = self
            .vaults
            .get_mut(&vault_id)
            .ok_or(RegistryError::VaultNotFound(vault_id))?;
        vault.apply_release(secret);

        self.bus
            .publish(CoordinationEvent::VaultReleased {
                correlation_id: new_correlation_id(),
                vault_id,
                beneficiary,
                secret,
            })
            .await;
        info!("[registry] released vault {}", short_hex(&vault_id));
        Ok(())
    }

    async fn recover(&mut self, caller: Address, vault_id: VaultId) -> Result<(), RegistryError> {
        let now = self.clock.now_unix();
        let (token, custody, depositor, amount) = {
            let vault = self
                .vaults
                .get(&vault_id)
                .ok_or(RegistryError::VaultNotFound(vault_id))?;
            vault.ensure_can_recover(&caller, now)?;
            (
                vault.token,
                vault.custody_address(),
                vault.depositor,
                vault.amount,
            )
        };

        self.ledger.transfer(token, custody, depositor, amount).await?;

        let vault = self
            .vaults
            .get_mut(&vault_id)
            .ok_or(RegistryError::VaultNotFound(vault_id))?;
        vault.apply_recover();

        self.bus
            .publish(CoordinationEvent::VaultRecovered {
                correlation_id: new_correlation_id(),
                vault_id,
                depositor,
            })
            .await;
        info!("[registry] recovered vault {}", short_hex(&vault_id));
        Ok(())
    }

    fn set_callback_authority(
        &mut self,
        caller: Address,
        authority: Address,
    ) -> Result<(), RegistryError> {
        if caller != self.owner {
            return Err(RegistryError::Unauthorized);
        }
        self.callback_authority = Some(authority);
        info!(
            "[registry] callback authority set to {}",
            short_hex(&authority)
        );
        Ok(())
    }

    fn get_vault(&self, vault_id: &VaultId) -> Option<&Vault> {
        self.vaults.get(vault_id)
    }

    fn contains(&self, vault_id: &VaultId) -> bool {
        self.vaults.contains_key(vault_id)
    }

    fn created_count(&self) -> u64 {
        self.created_count
    }
}
