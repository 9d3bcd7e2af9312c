use super::amount::Amount;
use super::withdrawal::PaymentStatus;
use async_trait::async_trait;

/// Supplies the amount the user asked for.
///
/// Called exactly once per withdrawal; the selector itself signals no error.
/// A non-positive value is possible here (broken keypad) and is rejected by
/// the orchestrator, not the selector.
#[async_trait]
pub trait AmountSelector: Send + Sync {
    async fn select_amount(&self) -> i64;
}

/// The physical cash store and dispensing hardware.
#[async_trait]
pub trait CashManager: Send + Sync {
    /// Whether the machine currently holds enough dispensable cash.
    /// Answered fresh per withdrawal; never cached.
    async fn can_deliver(&self, amount: Amount) -> bool;

    /// Dispenses the cash. Assumed to succeed once invoked.
    async fn deliver(&self, amount: Amount);
}

/// The payment/authorization backend.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Attempts to charge the amount. Invoked at most once per withdrawal;
    /// the orchestrator never retries a failed charge.
    async fn pay(&self, amount: Amount) -> PaymentStatus;
}

pub type AmountSelectorBox = Box<dyn AmountSelector>;
pub type CashManagerBox = Box<dyn CashManager>;
pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
