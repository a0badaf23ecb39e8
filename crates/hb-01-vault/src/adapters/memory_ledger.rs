//! In-Memory Token Ledger
//!
//! Implements the `TokenLedger` port against a balance map. In production
//! this would adapt a real token ledger; here it backs tests and single-node
//! simulation.

use crate::ports::{LedgerError, TokenLedger};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{short_hex, Address, TokenId};
use std::collections::HashMap;
use tracing::debug;

/// Balance-map ledger.
pub struct InMemoryTokenLedger {
    balances: RwLock<HashMap<(TokenId, Address), u64>>,
}

impl InMemoryTokenLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Credit an account out of thin air. Test setup only.
    pub fn mint(&self, token: TokenId, account: Address, amount: u64) {
        let mut balances = self.balances.write();
        *balances.entry((token, account)).or_insert(0) += amount;
    }

    fn move_value(
        &self,
        token: TokenId,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();
        let have = balances.get(&(token, from)).copied().unwrap_or(0);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        balances.insert((token, from), have - amount);
        *balances.entry((token, to)).or_insert(0) += amount;
        debug!(
            "[ledger] moved {} of {} from {} to {}",
            amount,
            short_hex(&token),
            short_hex(&from),
            short_hex(&to)
        );
        Ok(())
    }
}

impl Default for InMemoryTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenLedger for InMemoryTokenLedger {
    async fn transfer_from(
        &self,
        token: TokenId,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        self.move_value(token, from, to, amount)
    }

    async fn transfer(
        &self,
        token: TokenId,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        self.move_value(token, from, to, amount)
    }

    async fn balance_of(&self, token: TokenId, account: Address) -> u64 {
        self.balances.read().get(&(token, account)).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: TokenId = [0xEEu8; 20];
    const ALICE: Address = [0x0Au8; 20];
    const BOB: Address = [0x0Bu8; 20];

    #[tokio::test]
    async fn test_mint_and_balance() {
        let ledger = InMemoryTokenLedger::new();
        ledger.mint(TOKEN, ALICE, 500);
        assert_eq!(ledger.balance_of(TOKEN, ALICE).await, 500);
        assert_eq!(ledger.balance_of(TOKEN, BOB).await, 0);
    }

    #[tokio::test]
    async fn test_transfer_moves_balance() {
        let ledger = InMemoryTokenLedger::new();
        ledger.mint(TOKEN, ALICE, 500);
        ledger.transfer(TOKEN, ALICE, BOB, 200).await.unwrap();
        assert_eq!(ledger.balance_of(TOKEN, ALICE).await, 300);
        assert_eq!(ledger.balance_of(TOKEN, BOB).await, 200);
    }

    #[tokio::test]
    async fn test_transfer_rejects_overdraft() {
        let ledger = InMemoryTokenLedger::new();
        ledger.mint(TOKEN, ALICE, 100);
        let result = ledger.transfer_from(TOKEN, ALICE, BOB, 101).await;
        assert_eq!(
            result,
            Err(LedgerError::InsufficientBalance {
                have: 100,
                need: 101
            })
        );
        // Nothing moved.
        assert_eq!(ledger.balance_of(TOKEN, ALICE).await, 100);
        assert_eq!(ledger.balance_of(TOKEN, BOB).await, 0);
    }

    #[tokio::test]
    async fn test_balances_are_per_token() {
        let other: TokenId = [0xDDu8; 20];
        let ledger = InMemoryTokenLedger::new();
        ledger.mint(TOKEN, ALICE, 100);
        assert_eq!(ledger.balance_of(other, ALICE).await, 0);
    }
}
