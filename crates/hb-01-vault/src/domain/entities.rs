//! # Domain Entities
//!
//! The vault entity and its creation parameters.
//!
//! The entity owns every guard of the state machine but performs no value
//! movement itself: callers check a transition with `ensure_can_*`, move
//! funds through the [`TokenLedger`](crate::ports::TokenLedger) port, and
//! only then commit the transition with `apply_*`. A ledger failure between
//! the two steps therefore leaves the vault untouched.

use super::errors::VaultError;
use super::value_objects::VaultState;
use serde::{Deserialize, Serialize};
use shared_types::{
    is_zero_address, is_zero_hash, Address, CommitmentScheme, Hash, Secret, TokenId, VaultId,
};

/// Identity-defining parameters of a vault, fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultParams {
    /// Token held by the vault.
    pub token: TokenId,
    /// Principal who funds the vault and may recover after the deadline.
    pub depositor: Address,
    /// Principal who receives the funds on release.
    pub beneficiary: Address,
    /// Commitment hash of the secret.
    pub hash_lock: Hash,
    /// Absolute unix time after which recovery is permitted.
    pub deadline: u64,
}

impl VaultParams {
    /// Validate the parameter tuple against the current time.
    pub fn validate(&self, now: u64) -> Result<(), VaultError> {
        if is_zero_address(&self.depositor) {
            return Err(VaultError::InvalidParameters("zero depositor"));
        }
        if is_zero_address(&self.beneficiary) {
            return Err(VaultError::InvalidParameters("zero beneficiary"));
        }
        if is_zero_hash(&self.hash_lock) {
            return Err(VaultError::InvalidParameters("zero hash lock"));
        }
        if self.deadline <= now {
            return Err(VaultError::InvalidParameters("deadline not in the future"));
        }
        Ok(())
    }
}

/// A single hash time-locked vault.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vault {
    /// Deterministic identity (also derives the custody address).
    pub id: VaultId,
    /// Token held by the vault.
    pub token: TokenId,
    /// Depositor principal.
    pub depositor: Address,
    /// Beneficiary principal.
    pub beneficiary: Address,
    /// Commitment hash of the secret.
    pub hash_lock: Hash,
    /// Recovery deadline (unix seconds).
    pub deadline: u64,
    /// Locked amount; set exactly once, by `lock`.
    pub amount: u64,
    /// Current state.
    pub state: VaultState,
    /// Revealed secret; set exactly once, by `release`, never changed.
    pub secret: Option<Secret>,
    /// Creation timestamp.
    pub created_at: u64,
}

impl Vault {
    /// Create a vault after validating its parameters.
    pub fn new(id: VaultId, params: VaultParams, now: u64) -> Result<Self, VaultError> {
        params.validate(now)?;
        Ok(Self {
            id,
            token: params.token,
            depositor: params.depositor,
            beneficiary: params.beneficiary,
            hash_lock: params.hash_lock,
            deadline: params.deadline,
            amount: 0,
            state: VaultState::Created,
            secret: None,
            created_at: now,
        })
    }

    /// Ledger account funds sit at between `lock` and the terminal transition.
    pub fn custody_address(&self) -> Address {
        let mut addr = [0u8; 20];
        addr.copy_from_slice(&self.id[..20]);
        addr
    }

    /// Check the `lock` guards without mutating.
    pub fn ensure_can_lock(&self, caller: &Address, amount: u64) -> Result<(), VaultError> {
        if *caller != self.depositor {
            return Err(VaultError::Unauthorized);
        }
        if self.state != VaultState::Created {
            return Err(VaultError::AlreadyLocked);
        }
        if amount == 0 {
            return Err(VaultError::InvalidAmount);
        }
        Ok(())
    }

    /// Commit the `lock` transition. Guards must have been checked.
    pub fn apply_lock(&mut self, amount: u64) {
        debug_assert!(self.state.can_transition_to(VaultState::Locked));
        self.amount = amount;
        self.state = VaultState::Locked;
    }

    /// Check the `release` guards without mutating.
    ///
    /// Callable by anyone; funds always go to the beneficiary.
    pub fn ensure_can_release(
        &self,
        scheme: CommitmentScheme,
        secret: &Secret,
        now: u64,
    ) -> Result<(), VaultError> {
        match self.state {
            VaultState::Created => return Err(VaultError::NotLocked),
            VaultState::Released | VaultState::Recovered => return Err(VaultError::AlreadyFinal),
            VaultState::Locked => {}
        }
        if now >= self.deadline {
            return Err(VaultError::Expired {
                deadline: self.deadline,
                now,
            });
        }
        if !scheme.verify(secret, &self.hash_lock) {
            return Err(VaultError::InvalidProof);
        }
        Ok(())
    }

    /// Commit the `release` transition and store the revealed secret.
    pub fn apply_release(&mut self, secret: Secret) {
        debug_assert!(self.state.can_transition_to(VaultState::Released));
        debug_assert!(self.secret.is_none());
        self.secret = Some(secret);
        self.state = VaultState::Released;
    }

    /// Check the `recover` guards without mutating.
    pub fn ensure_can_recover(&self, caller: &Address, now: u64) -> Result<(), VaultError> {
        if *caller != self.depositor {
            return Err(VaultError::Unauthorized);
        }
        match self.state {
            VaultState::Created => return Err(VaultError::NotLocked),
            VaultState::Released | VaultState::Recovered => return Err(VaultError::AlreadyFinal),
            VaultState::Locked => {}
        }
        if now < self.deadline {
            return Err(VaultError::NotYetExpired {
                deadline: self.deadline,
                now,
            });
        }
        Ok(())
    }

    /// Commit the `recover` transition.
    pub fn apply_recover(&mut self) {
        debug_assert!(self.state.can_transition_to(VaultState::Recovered));
        self.state = VaultState::Recovered;
    }

    /// Read-only mirror of the `release` guards, for polling observers.
    pub fn can_release(&self, scheme: CommitmentScheme, secret: &Secret, now: u64) -> bool {
        self.ensure_can_release(scheme, secret, now).is_ok()
    }

    /// Read-only mirror of the `recover` guards, for polling observers.
    pub fn can_recover(&self, caller: &Address, now: u64) -> bool {
        self.ensure_can_recover(caller, now).is_ok()
    }

    /// Current state, for polling observers.
    pub fn status(&self) -> VaultState {
        self.state
    }
}
