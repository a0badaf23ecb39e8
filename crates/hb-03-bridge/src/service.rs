//! # Bridge Coordinator Service
//!
//! Orchestrates swaps whose two legs settle in different domains. The local
//! leg is always a vault owned through the registry; the external leg is
//! only ever observed, through the relay principal who confirms settlement
//! by presenting the revealed secret.
//!
//! The coordinator holds no funds of its own outside a single atomic
//! withdrawal: outbound vaults name it beneficiary, and `withdraw_local`
//! forwards the released amount to the relay in the same call.

use crate::algorithms::derive_commitment;
use crate::domain::{BridgeConfig, BridgeError, Swap, SwapDirection, SwapState};
use crate::ports::BridgeApi;
use async_trait::async_trait;
use hb_01_vault::{Clock, TokenLedger, VaultParams};
use hb_02_vault_registry::{RegistryApi, VaultRegistry};
use shared_bus::{new_correlation_id, CoordinationEvent, EventPublisher};
use shared_types::{
    is_zero_address, short_hex, Address, CommitmentScheme, Hash, Secret, TokenId, VaultId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// The bridge coordinator.
pub struct BridgeCoordinator {
    coordinator_id: Address,
    owner: Address,
    relay: Address,
    config: BridgeConfig,
    scheme: CommitmentScheme,
    registry: VaultRegistry,
    swaps: HashMap<Hash, Swap>,
    ledger: Arc<dyn TokenLedger>,
    clock: Arc<dyn Clock>,
    bus: Arc<dyn EventPublisher>,
}

impl BridgeCoordinator {
    /// Create a coordinator over its own registry.
    ///
    /// The commitment scheme is taken from the registry so both components
    /// validate secrets against the same hash function by construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coordinator_id: Address,
        owner: Address,
        relay: Address,
        config: BridgeConfig,
        registry: VaultRegistry,
        ledger: Arc<dyn TokenLedger>,
        clock: Arc<dyn Clock>,
        bus: Arc<dyn EventPublisher>,
    ) -> Self {
        let scheme = registry.scheme();
        Self {
            coordinator_id,
            owner,
            relay,
            config,
            scheme,
            registry,
            swaps: HashMap::new(),
            ledger,
            clock,
            bus,
        }
    }

    /// The registry backing the local legs.
    pub fn registry(&self) -> &VaultRegistry {
        &self.registry
    }

    /// Mutable registry access, for local-leg operations the coordinator is
    /// not part of (an inbound recipient releasing its vault, recovery).
    pub fn registry_mut(&mut self) -> &mut VaultRegistry {
        &mut self.registry
    }

    /// The currently configured relay principal.
    pub fn relay(&self) -> Address {
        self.relay
    }

    /// Coordinator configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    fn ensure_relay(&self, caller: &Address) -> Result<(), BridgeError> {
        if *caller != self.relay {
            return Err(BridgeError::Unauthorized);
        }
        Ok(())
    }

    fn invalid_state(from: SwapState, to: SwapState) -> BridgeError {
        BridgeError::InvalidState {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

#[async_trait]
impl BridgeApi for BridgeCoordinator {
    async fn initiate_local_to_external(
        &mut self,
        caller: Address,
        token: TokenId,
        local_amount: u64,
        external_amount: u64,
        hash_lock: Hash,
        deadline: u64,
    ) -> Result<VaultId, BridgeError> {
        if local_amount == 0 || external_amount == 0 {
            return Err(BridgeError::InvalidAmount);
        }
        if self.swaps.contains_key(&hash_lock) {
            return Err(BridgeError::AlreadyExists(hash_lock));
        }

        let now = self.clock.now_unix();
        let params = VaultParams {
            token,
            depositor: caller,
            beneficiary: self.coordinator_id,
            hash_lock,
            deadline,
        };
        // The backing vault is created and funded in one step; the salt is
        // the commitment hash itself, so the counterparty can recompute the
        // vault identity from the swap key alone.
        let vault_id = self
            .registry
            .create_and_lock(caller, params, hash_lock, local_amount)
            .await?;

        let swap = Swap::new_outbound(
            hash_lock,
            vault_id,
            caller,
            token,
            local_amount,
            external_amount,
            now,
            deadline,
        );
        self.swaps.insert(hash_lock, swap);

        self.bus
            .publish(CoordinationEvent::SwapInitiated {
                correlation_id: new_correlation_id(),
                hash_lock,
                initiator: caller,
                outbound: true,
                local_amount,
                external_amount,
                vault_id: Some(vault_id),
                deadline,
            })
            .await;
        info!(
            "[bridge] outbound swap {} initiated, vault {}",
            short_hex(&hash_lock),
            short_hex(&vault_id)
        );
        Ok(vault_id)
    }

    async fn initiate_external_to_local(
        &mut self,
        caller: Address,
        reference: &str,
        token: TokenId,
        local_amount: u64,
        recipient: Address,
    ) -> Result<Hash, BridgeError> {
        let hash_lock = derive_commitment(reference)?;
        if local_amount == 0 {
            return Err(BridgeError::InvalidAmount);
        }
        if is_zero_address(&recipient) {
            return Err(BridgeError::InvalidRecipient);
        }
        if self.swaps.contains_key(&hash_lock) {
            return Err(BridgeError::AlreadyExists(hash_lock));
        }

        let now = self.clock.now_unix();
        let deadline = now + self.config.inbound_vault_timeout_secs;
        let swap = Swap::new_inbound(
            hash_lock,
            caller,
            token,
            local_amount,
            recipient,
            reference.trim().to_string(),
            now,
            deadline,
        );
        self.swaps.insert(hash_lock, swap);

        self.bus
            .publish(CoordinationEvent::SwapInitiated {
                correlation_id: new_correlation_id(),
                hash_lock,
                initiator: caller,
                outbound: false,
                local_amount,
                external_amount: 0,
                vault_id: None,
                deadline,
            })
            .await;
        info!("[bridge] inbound swap {} initiated", short_hex(&hash_lock));
        Ok(hash_lock)
    }

    async fn set_external_reference(
        &mut self,
        caller: Address,
        hash_lock: Hash,
        reference: String,
    ) -> Result<(), BridgeError> {
        self.ensure_relay(&caller)?;
        if reference.trim().is_empty() {
            return Err(BridgeError::InvalidReference("empty reference".into()));
        }

        let swap = self
            .swaps
            .get_mut(&hash_lock)
            .ok_or(BridgeError::SwapNotFound(hash_lock))?;
        if swap.direction != SwapDirection::LocalToExternal
            || swap.state != SwapState::Initiated
        {
            return Err(Self::invalid_state(swap.state, SwapState::ReferenceSet));
        }

        swap.external_reference = Some(reference.clone());
        swap.transition_to(SwapState::ReferenceSet)?;

        self.bus
            .publish(CoordinationEvent::ReferenceAttached {
                correlation_id: new_correlation_id(),
                hash_lock,
                reference,
            })
            .await;
        info!(
            "[bridge] reference attached to swap {}",
            short_hex(&hash_lock)
        );
        Ok(())
    }

    async fn confirm_external_settlement(
        &mut self,
        caller: Address,
        hash_lock: Hash,
        secret: Secret,
    ) -> Result<(), BridgeError> {
        self.ensure_relay(&caller)?;

        let (state, direction, token, local_amount, recipient) = {
            let swap = self
                .swaps
                .get(&hash_lock)
                .ok_or(BridgeError::SwapNotFound(hash_lock))?;
            (
                swap.state,
                swap.direction,
                swap.token,
                swap.local_amount,
                swap.recipient,
            )
        };
        // A second confirmation lands here: the transition check makes the
        // call fail instead of double-funding or rewriting the secret.
        if !state.can_transition_to(SwapState::ExternalConfirmed) {
            return Err(Self::invalid_state(state, SwapState::ExternalConfirmed));
        }
        if !self.scheme.verify(&secret, &hash_lock) {
            return Err(BridgeError::InvalidProof);
        }

        // Inbound swaps get their local vault now, funded by the relay. Any
        // failure here aborts before the swap record changes.
        let created_vault = match direction {
            SwapDirection::ExternalToLocal => {
                let recipient = recipient.ok_or(BridgeError::InvalidRecipient)?;
                let now = self.clock.now_unix();
                let params = VaultParams {
                    token,
                    depositor: self.relay,
                    beneficiary: recipient,
                    hash_lock,
                    deadline: now + self.config.inbound_vault_timeout_secs,
                };
                Some(
                    self.registry
                        .create_and_lock(self.relay, params, hash_lock, local_amount)
                        .await?,
                )
            }
            SwapDirection::LocalToExternal => None,
        };

        let swap = self
            .swaps
            .get_mut(&hash_lock)
            .ok_or(BridgeError::SwapNotFound(hash_lock))?;
        swap.secret = Some(secret);
        if created_vault.is_some() {
            swap.vault_id = created_vault;
        }
        swap.transition_to(SwapState::ExternalConfirmed)?;

        self.bus
            .publish(CoordinationEvent::ExternalSettlementConfirmed {
                correlation_id: new_correlation_id(),
                hash_lock,
                secret,
                vault_id: swap.vault_id,
            })
            .await;
        info!(
            "[bridge] external settlement confirmed for swap {}",
            short_hex(&hash_lock)
        );
        Ok(())
    }

    async fn withdraw_local(&mut self, hash_lock: Hash) -> Result<(), BridgeError> {
        let (state, direction, vault_id, secret, token, local_amount) = {
            let swap = self
                .swaps
                .get(&hash_lock)
                .ok_or(BridgeError::SwapNotFound(hash_lock))?;
            (
                swap.state,
                swap.direction,
                swap.vault_id,
                swap.secret,
                swap.token,
                swap.local_amount,
            )
        };
        if direction != SwapDirection::LocalToExternal || state != SwapState::ExternalConfirmed {
            return Err(Self::invalid_state(state, SwapState::Completed));
        }
        let (vault_id, secret) = match (vault_id, secret) {
            (Some(vault_id), Some(secret)) => (vault_id, secret),
            _ => return Err(Self::invalid_state(state, SwapState::Completed)),
        };

        // Release pays the coordinator (the vault's beneficiary); forwarding
        // to the relay cannot fail afterwards since custody was just
        // credited with exactly this amount.
        self.registry.release(vault_id, secret).await?;
        self.ledger
            .transfer(token, self.coordinator_id, self.relay, local_amount)
            .await?;

        let swap = self
            .swaps
            .get_mut(&hash_lock)
            .ok_or(BridgeError::SwapNotFound(hash_lock))?;
        swap.transition_to(SwapState::Completed)?;

        self.bus
            .publish(CoordinationEvent::SwapCompleted {
                correlation_id: new_correlation_id(),
                hash_lock,
            })
            .await;
        info!("[bridge] swap {} completed", short_hex(&hash_lock));
        Ok(())
    }

    async fn expire(&mut self, hash_lock: Hash) -> Result<(), BridgeError> {
        let now = self.clock.now_unix();
        let swap = self
            .swaps
            .get_mut(&hash_lock)
            .ok_or(BridgeError::SwapNotFound(hash_lock))?;
        if swap.state.is_terminal() {
            return Err(Self::invalid_state(swap.state, SwapState::Expired));
        }
        if now < swap.deadline {
            return Err(BridgeError::NotYetExpired {
                deadline: swap.deadline,
                now,
            });
        }

        swap.transition_to(SwapState::Expired)?;

        self.bus
            .publish(CoordinationEvent::SwapExpired {
                correlation_id: new_correlation_id(),
                hash_lock,
            })
            .await;
        info!("[bridge] swap {} expired", short_hex(&hash_lock));
        Ok(())
    }

    fn set_relay(&mut self, caller: Address, relay: Address) -> Result<(), BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::Unauthorized);
        }
        self.relay = relay;
        info!("[bridge] relay set to {}", short_hex(&relay));
        Ok(())
    }

    fn get_swap(&self, hash_lock: &Hash) -> Option<&Swap> {
        self.swaps.get(hash_lock)
    }
}
