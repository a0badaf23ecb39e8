//! # Vault Flows
//!
//! Two independent registries stand in for two settlement domains. Nothing
//! links them except the parameter tuples the parties agreed on off-band —
//! the same shape a real cross-chain deployment has.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hb_01_vault::{
        InMemoryTokenLedger, ManualClock, TokenLedger, VaultError, VaultParams, VaultState,
    };
    use hb_02_vault_registry::{compute_identity, RegistryApi, RegistryError, VaultRegistry};
    use shared_bus::InMemoryEventBus;
    use shared_types::{Address, CommitmentScheme, DomainId, Salt, Secret};

    const ALICE: Address = [0x0Au8; 20];
    const BOB: Address = [0x0Bu8; 20];
    const OWNER: Address = [0x99u8; 20];
    const TOKEN_X: Address = [0xE1u8; 20];
    const TOKEN_Y: Address = [0xE2u8; 20];
    const REGISTRY_A: Address = [0x71u8; 20];
    const REGISTRY_B: Address = [0x72u8; 20];
    const SALT: Salt = [0x55u8; 32];

    const NOW: u64 = 1_000;
    const T1: u64 = 100_000;
    const T2: u64 = 50_000; // T2 < T1: the responder's leg expires first.

    const SECRET: Secret = [0x42u8; 32];

    /// One settlement domain: a registry over its own ledger and clock.
    struct Domain {
        registry: VaultRegistry,
        ledger: Arc<InMemoryTokenLedger>,
        clock: Arc<ManualClock>,
    }

    fn domain(registry_id: Address) -> Domain {
        let ledger = Arc::new(InMemoryTokenLedger::new());
        let clock = Arc::new(ManualClock::new(NOW));
        let bus = Arc::new(InMemoryEventBus::new());
        let registry = VaultRegistry::new(
            registry_id,
            DomainId::Local,
            OWNER,
            CommitmentScheme::Sha256,
            ledger.clone(),
            clock.clone(),
            bus,
        );
        Domain {
            registry,
            ledger,
            clock,
        }
    }

    fn hash_lock() -> [u8; 32] {
        CommitmentScheme::Sha256.commit(&SECRET)
    }

    /// The classic two-vault exchange: Alice locks token X for Bob under
    /// deadline T1; Bob locks token Y for Alice under T2 < T1. Bob's release
    /// of vault A reveals the secret; Alice reuses it on vault B.
    #[tokio::test]
    async fn test_cross_domain_exchange_with_one_secret() {
        let mut domain_a = domain(REGISTRY_A);
        let mut domain_b = domain(REGISTRY_B);
        domain_a.ledger.mint(TOKEN_X, ALICE, 100);
        domain_b.ledger.mint(TOKEN_Y, BOB, 100);

        let params_a = VaultParams {
            token: TOKEN_X,
            depositor: ALICE,
            beneficiary: BOB,
            hash_lock: hash_lock(),
            deadline: T1,
        };
        let params_b = VaultParams {
            token: TOKEN_Y,
            depositor: BOB,
            beneficiary: ALICE,
            hash_lock: hash_lock(),
            deadline: T2,
        };

        let vault_a = domain_a
            .registry
            .create_and_lock(ALICE, params_a, SALT, 100)
            .await
            .unwrap();
        let vault_b = domain_b
            .registry
            .create_and_lock(BOB, params_b, SALT, 100)
            .await
            .unwrap();

        // Bob claims on domain A, revealing the secret.
        domain_a.registry.release(vault_a, SECRET).await.unwrap();
        assert_eq!(domain_a.ledger.balance_of(TOKEN_X, BOB).await, 100);
        assert_eq!(
            domain_a.registry.get_vault(&vault_a).unwrap().state,
            VaultState::Released
        );

        // The revealed secret is now public; Alice carries it to domain B.
        let revealed = domain_a
            .registry
            .get_vault(&vault_a)
            .unwrap()
            .secret
            .expect("release stores the secret");
        domain_b.registry.release(vault_b, revealed).await.unwrap();
        assert_eq!(domain_b.ledger.balance_of(TOKEN_Y, ALICE).await, 100);
        assert_eq!(
            domain_b.registry.get_vault(&vault_b).unwrap().state,
            VaultState::Released
        );
    }

    /// Both parties compute the counterparty's vault identity before either
    /// vault exists, and creation lands exactly there.
    #[tokio::test]
    async fn test_identities_agree_before_creation() {
        let mut domain_b = domain(REGISTRY_B);
        domain_b.ledger.mint(TOKEN_Y, BOB, 100);

        let params_b = VaultParams {
            token: TOKEN_Y,
            depositor: BOB,
            beneficiary: ALICE,
            hash_lock: hash_lock(),
            deadline: T2,
        };

        // Alice, off-band, predicts where Bob's vault will live.
        let predicted = compute_identity(&REGISTRY_B, &params_b, &SALT);
        assert!(!domain_b.registry.contains(&predicted));

        let actual = domain_b
            .registry
            .create_and_lock(BOB, params_b, SALT, 100)
            .await
            .unwrap();
        assert_eq!(predicted, actual);
    }

    /// Deadline passes untouched: the depositor recovers, and a late release
    /// with the correct secret is permanently refused.
    #[tokio::test]
    async fn test_timeout_recovery_then_release_is_final() {
        let mut d = domain(REGISTRY_A);
        d.ledger.mint(TOKEN_X, ALICE, 100);

        let params = VaultParams {
            token: TOKEN_X,
            depositor: ALICE,
            beneficiary: BOB,
            hash_lock: hash_lock(),
            deadline: T2,
        };
        let vault_id = d
            .registry
            .create_and_lock(ALICE, params, SALT, 100)
            .await
            .unwrap();

        // Too early to recover.
        assert!(matches!(
            d.registry.recover(ALICE, vault_id).await,
            Err(RegistryError::Vault(VaultError::NotYetExpired { .. }))
        ));

        d.clock.set(T2);
        d.registry.recover(ALICE, vault_id).await.unwrap();
        assert_eq!(d.ledger.balance_of(TOKEN_X, ALICE).await, 100);

        // Even the correct secret is refused after recovery.
        assert!(matches!(
            d.registry.release(vault_id, SECRET).await,
            Err(RegistryError::Vault(VaultError::AlreadyFinal))
        ));
    }

    /// The responder's shorter deadline protects them: once T2 passes, Bob
    /// recovers his leg even though Alice's vault is still live until T1.
    #[tokio::test]
    async fn test_asymmetric_deadlines_allow_partial_unwind() {
        let mut domain_a = domain(REGISTRY_A);
        let mut domain_b = domain(REGISTRY_B);
        domain_a.ledger.mint(TOKEN_X, ALICE, 100);
        domain_b.ledger.mint(TOKEN_Y, BOB, 100);

        let vault_a = domain_a
            .registry
            .create_and_lock(
                ALICE,
                VaultParams {
                    token: TOKEN_X,
                    depositor: ALICE,
                    beneficiary: BOB,
                    hash_lock: hash_lock(),
                    deadline: T1,
                },
                SALT,
                100,
            )
            .await
            .unwrap();
        let vault_b = domain_b
            .registry
            .create_and_lock(
                BOB,
                VaultParams {
                    token: TOKEN_Y,
                    depositor: BOB,
                    beneficiary: ALICE,
                    hash_lock: hash_lock(),
                    deadline: T2,
                },
                SALT,
                100,
            )
            .await
            .unwrap();

        // Nobody revealed; both domains pass T2.
        domain_a.clock.set(T2);
        domain_b.clock.set(T2);

        domain_b.registry.recover(BOB, vault_b).await.unwrap();
        assert_eq!(domain_b.ledger.balance_of(TOKEN_Y, BOB).await, 100);

        // Alice's vault is still releasable until T1 — but she, too, can
        // wait it out and recover at T1.
        assert!(domain_a.registry.can_release(&vault_a, &SECRET));
        domain_a.clock.set(T1);
        domain_a.registry.recover(ALICE, vault_a).await.unwrap();
        assert_eq!(domain_a.ledger.balance_of(TOKEN_X, ALICE).await, 100);
    }

    /// Identity derivation is injective across registries: the same tuple
    /// and salt land at different identities on different domains.
    #[tokio::test]
    async fn test_same_tuple_different_registries_different_identities() {
        let params = VaultParams {
            token: TOKEN_X,
            depositor: ALICE,
            beneficiary: BOB,
            hash_lock: hash_lock(),
            deadline: T1,
        };
        assert_ne!(
            compute_identity(&REGISTRY_A, &params, &SALT),
            compute_identity(&REGISTRY_B, &params, &SALT)
        );
    }
}
