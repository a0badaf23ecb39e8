//! # Bridge Flows
//!
//! End-to-end coordinator scenarios: outbound and inbound swaps driven the
//! way an off-system relay and its counterparties would drive them, with the
//! event choreography observed through a bus subscription.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hb_01_vault::{InMemoryTokenLedger, ManualClock, TokenLedger, VaultState};
    use hb_02_vault_registry::{RegistryApi, VaultRegistry};
    use hb_03_bridge::{BridgeApi, BridgeConfig, BridgeCoordinator, BridgeError, SwapState};
    use shared_bus::{CoordinationEvent, InMemoryEventBus};
    use shared_types::{Address, CommitmentScheme, DomainId, Secret};

    const REGISTRY_ID: Address = [0x77u8; 20];
    const COORDINATOR: Address = [0x88u8; 20];
    const OWNER: Address = [0x99u8; 20];
    const RELAY: Address = [0x66u8; 20];
    const TOKEN: Address = [0xEEu8; 20];
    const ALICE: Address = [0x0Au8; 20];
    const BOB: Address = [0x0Bu8; 20];
    const NOW: u64 = 1_000;
    const DEADLINE: u64 = 100_000;
    const SECRET: Secret = [0x42u8; 32];

    struct Harness {
        bridge: BridgeCoordinator,
        ledger: Arc<InMemoryTokenLedger>,
        clock: Arc<ManualClock>,
        bus: Arc<InMemoryEventBus>,
    }

    fn harness_with_scheme(scheme: CommitmentScheme) -> Harness {
        let ledger = Arc::new(InMemoryTokenLedger::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let bus = Arc::new(InMemoryEventBus::new());
        let registry = VaultRegistry::new(
            REGISTRY_ID,
            DomainId::Local,
            OWNER,
            scheme,
            ledger.clone(),
            clock.clone(),
            bus.clone(),
        );
        let bridge = BridgeCoordinator::new(
            COORDINATOR,
            OWNER,
            RELAY,
            BridgeConfig::default(),
            registry,
            ledger.clone(),
            clock.clone(),
            bus.clone(),
        );
        Harness {
            bridge,
            ledger,
            clock,
            bus,
        }
    }

    fn harness() -> Harness {
        harness_with_scheme(CommitmentScheme::Sha256)
    }

    fn hash_lock_under(scheme: CommitmentScheme) -> [u8; 32] {
        scheme.commit(&SECRET)
    }

    /// Full outbound swap: initiate, attach reference, confirm, withdraw —
    /// with every transition observable on the bus, in order.
    #[tokio::test]
    async fn test_outbound_swap_end_to_end_with_events() {
        let mut h = harness();
        let mut sub = h.bus.subscribe();
        let hash = hash_lock_under(CommitmentScheme::Sha256);
        h.ledger.mint(TOKEN, ALICE, 250);

        h.bridge
            .initiate_local_to_external(ALICE, TOKEN, 250, 500, hash, DEADLINE)
            .await
            .unwrap();
        h.bridge
            .set_external_reference(RELAY, hash, format!("0x{}", hex::encode(hash)))
            .await
            .unwrap();
        h.bridge
            .confirm_external_settlement(RELAY, hash, SECRET)
            .await
            .unwrap();
        h.bridge.withdraw_local(hash).await.unwrap();

        // The relay ends up holding the local leg.
        assert_eq!(h.ledger.balance_of(TOKEN, RELAY).await, 250);
        assert_eq!(
            h.bridge.get_swap(&hash).unwrap().state,
            SwapState::Completed
        );

        // Event choreography, in publication order.
        let mut topics = Vec::new();
        while let Some(event) = sub.try_recv() {
            topics.push(match event {
                CoordinationEvent::VaultCreated { .. } => "vault-created",
                CoordinationEvent::VaultLocked { .. } => "vault-locked",
                CoordinationEvent::VaultReleased { .. } => "vault-released",
                CoordinationEvent::SwapInitiated { .. } => "swap-initiated",
                CoordinationEvent::ReferenceAttached { .. } => "reference-attached",
                CoordinationEvent::ExternalSettlementConfirmed { .. } => "confirmed",
                CoordinationEvent::SwapCompleted { .. } => "completed",
                other => panic!("unexpected event {other:?}"),
            });
        }
        assert_eq!(
            topics,
            vec![
                "vault-created",
                "vault-locked",
                "swap-initiated",
                "reference-attached",
                "confirmed",
                "vault-released",
                "completed",
            ]
        );
    }

    /// Inbound swap: the relay confirms the external payment, which funds a
    /// vault for the recipient; the recipient then releases it directly —
    /// the coordinator's role ends at funding.
    #[tokio::test]
    async fn test_inbound_swap_recipient_claims_directly() {
        let mut h = harness();
        let hash = hash_lock_under(CommitmentScheme::Sha256);
        let reference = hex::encode(hash);
        h.ledger.mint(TOKEN, RELAY, 300);

        h.bridge
            .initiate_external_to_local(BOB, &reference, TOKEN, 300, BOB)
            .await
            .unwrap();
        h.bridge
            .confirm_external_settlement(RELAY, hash, SECRET)
            .await
            .unwrap();

        let vault_id = h
            .bridge
            .get_swap(&hash)
            .unwrap()
            .vault_id
            .expect("confirmation funds the vault");

        // Bob claims with the (now public) secret, straight on the registry.
        h.bridge.registry_mut().release(vault_id, SECRET).await.unwrap();
        assert_eq!(h.ledger.balance_of(TOKEN, BOB).await, 300);
        assert_eq!(
            h.bridge.registry().get_vault(&vault_id).unwrap().state,
            VaultState::Released
        );

        // Confirming again must neither re-fund nor rewrite anything.
        assert!(matches!(
            h.bridge
                .confirm_external_settlement(RELAY, hash, SECRET)
                .await,
            Err(BridgeError::InvalidState { .. })
        ));
        assert_eq!(h.bridge.registry().created_count(), 1);
    }

    /// The whole system runs identically under the alternative scheme — the
    /// hash function is configuration, not behavior.
    #[tokio::test]
    async fn test_system_runs_under_sha3_scheme() {
        let mut h = harness_with_scheme(CommitmentScheme::Sha3_256);
        let hash = hash_lock_under(CommitmentScheme::Sha3_256);
        h.ledger.mint(TOKEN, ALICE, 100);

        h.bridge
            .initiate_local_to_external(ALICE, TOKEN, 100, 200, hash, DEADLINE)
            .await
            .unwrap();
        h.bridge
            .confirm_external_settlement(RELAY, hash, SECRET)
            .await
            .unwrap();
        h.bridge.withdraw_local(hash).await.unwrap();
        assert_eq!(h.ledger.balance_of(TOKEN, RELAY).await, 100);
    }

    /// A commitment made under the wrong scheme never validates: the legs
    /// would be irreconcilable, which is exactly what one shared scheme
    /// prevents.
    #[tokio::test]
    async fn test_scheme_mismatch_is_rejected() {
        let mut h = harness_with_scheme(CommitmentScheme::Sha3_256);
        let sha2_hash = hash_lock_under(CommitmentScheme::Sha256);
        h.ledger.mint(TOKEN, ALICE, 100);

        h.bridge
            .initiate_local_to_external(ALICE, TOKEN, 100, 200, sha2_hash, DEADLINE)
            .await
            .unwrap();
        assert!(matches!(
            h.bridge
                .confirm_external_settlement(RELAY, sha2_hash, SECRET)
                .await,
            Err(BridgeError::InvalidProof)
        ));
    }

    /// Expiry and recovery compose: the coordinator marks the swap expired
    /// (moving nothing), then the depositor recovers through the vault's own
    /// path.
    #[tokio::test]
    async fn test_expired_outbound_swap_unwinds_via_recovery() {
        let mut h = harness();
        let hash = hash_lock_under(CommitmentScheme::Sha256);
        h.ledger.mint(TOKEN, ALICE, 100);

        let vault_id = h
            .bridge
            .initiate_local_to_external(ALICE, TOKEN, 100, 200, hash, DEADLINE)
            .await
            .unwrap();

        h.clock.set(DEADLINE);
        h.bridge.expire(hash).await.unwrap();
        h.bridge.registry_mut().recover(ALICE, vault_id).await.unwrap();

        assert_eq!(h.ledger.balance_of(TOKEN, ALICE).await, 100);
        assert_eq!(h.bridge.get_swap(&hash).unwrap().state, SwapState::Expired);

        // The late-arriving secret changes nothing anymore.
        assert!(matches!(
            h.bridge.confirm_external_settlement(RELAY, hash, SECRET).await,
            Err(BridgeError::InvalidState { .. })
        ));
    }
}
