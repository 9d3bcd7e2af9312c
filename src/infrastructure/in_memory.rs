use crate::domain::amount::Amount;
use crate::domain::ports::{AmountSelector, CashManager, PaymentProcessor};
use crate::domain::withdrawal::PaymentStatus;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An amount selector backed by a queue of pre-entered amounts.
///
/// Stands in for the keypad: each withdrawal consumes the next entry. An
/// exhausted queue yields 0, which the orchestrator rejects as a technical
/// failure, matching a dead input device.
#[derive(Default, Clone)]
pub struct QueuedAmountSelector {
    entries: Arc<RwLock<VecDeque<i64>>>,
}

impl QueuedAmountSelector {
    pub fn new(entries: impl IntoIterator<Item = i64>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }
}

#[async_trait]
impl AmountSelector for QueuedAmountSelector {
    async fn select_amount(&self) -> i64 {
        let mut entries = self.entries.write().await;
        entries.pop_front().unwrap_or(0)
    }
}

/// A thread-safe in-memory cash vault.
///
/// `can_deliver` compares against the current holdings fresh on every call;
/// `deliver` debits the vault. Serializing concurrent withdrawals against a
/// single vault is the caller's responsibility.
#[derive(Default, Clone)]
pub struct InMemoryCashInventory {
    cash_on_hand: Arc<RwLock<i64>>,
}

impl InMemoryCashInventory {
    pub fn new(cash_on_hand: i64) -> Self {
        Self {
            cash_on_hand: Arc::new(RwLock::new(cash_on_hand)),
        }
    }

    /// Current holdings, for reconciliation and tests.
    pub async fn cash_on_hand(&self) -> i64 {
        *self.cash_on_hand.read().await
    }
}

#[async_trait]
impl CashManager for InMemoryCashInventory {
    async fn can_deliver(&self, amount: Amount) -> bool {
        let cash = self.cash_on_hand.read().await;
        amount.value() <= *cash
    }

    async fn deliver(&self, amount: Amount) {
        let mut cash = self.cash_on_hand.write().await;
        *cash -= amount.value();
    }
}

/// A payment processor charging an in-memory account balance.
///
/// `pay` debits the balance and reports `Success` when funds suffice,
/// otherwise reports `Failure` and leaves the balance untouched.
#[derive(Default, Clone)]
pub struct InMemoryPaymentProcessor {
    balance: Arc<RwLock<i64>>,
}

impl InMemoryPaymentProcessor {
    pub fn new(balance: i64) -> Self {
        Self {
            balance: Arc::new(RwLock::new(balance)),
        }
    }

    pub async fn balance(&self) -> i64 {
        *self.balance.read().await
    }
}

#[async_trait]
impl PaymentProcessor for InMemoryPaymentProcessor {
    async fn pay(&self, amount: Amount) -> PaymentStatus {
        let mut balance = self.balance.write().await;
        if amount.value() <= *balance {
            *balance -= amount.value();
            PaymentStatus::Success
        } else {
            PaymentStatus::Failure
        }
    }
}
