use atm_core::application::atm::Atm;
use atm_core::domain::withdrawal::WithdrawalStatus;
use atm_core::error::AtmError;
use atm_core::infrastructure::in_memory::{
    InMemoryCashInventory, InMemoryPaymentProcessor, QueuedAmountSelector,
};

fn atm_over(
    inventory: &InMemoryCashInventory,
    processor: &InMemoryPaymentProcessor,
    amount: i64,
) -> Atm {
    Atm::new(
        Box::new(QueuedAmountSelector::new([amount])),
        Box::new(inventory.clone()),
        Box::new(processor.clone()),
    )
}

#[tokio::test]
async fn test_successful_withdrawal_moves_money() {
    let inventory = InMemoryCashInventory::new(10_000);
    let processor = InMemoryPaymentProcessor::new(1_000);

    let atm = atm_over(&inventory, &processor, 150);
    let status = atm.run_cash_withdrawal().await.unwrap();

    assert_eq!(status, WithdrawalStatus::Done);
    assert_eq!(inventory.cash_on_hand().await, 9_850);
    assert_eq!(processor.balance().await, 850);
}

#[tokio::test]
async fn test_cash_not_available_leaves_everything_untouched() {
    let inventory = InMemoryCashInventory::new(100);
    let processor = InMemoryPaymentProcessor::new(1_000);

    let atm = atm_over(&inventory, &processor, 300);
    let status = atm.run_cash_withdrawal().await.unwrap();

    assert_eq!(status, WithdrawalStatus::CashNotAvailable);
    assert_eq!(inventory.cash_on_hand().await, 100);
    assert_eq!(processor.balance().await, 1_000);
}

#[tokio::test]
async fn test_payment_rejected_dispenses_nothing() {
    let inventory = InMemoryCashInventory::new(10_000);
    let processor = InMemoryPaymentProcessor::new(50);

    let atm = atm_over(&inventory, &processor, 200);
    let status = atm.run_cash_withdrawal().await.unwrap();

    assert_eq!(status, WithdrawalStatus::PaymentRejected);
    // No money left the machine and the account was not charged.
    assert_eq!(inventory.cash_on_hand().await, 10_000);
    assert_eq!(processor.balance().await, 50);
}

#[tokio::test]
async fn test_invalid_amount_short_circuits() {
    let inventory = InMemoryCashInventory::new(10_000);
    let processor = InMemoryPaymentProcessor::new(1_000);

    let atm = atm_over(&inventory, &processor, -17);
    let result = atm.run_cash_withdrawal().await;

    assert!(matches!(result, Err(AtmError::InvalidAmount { amount: -17 })));
    assert_eq!(inventory.cash_on_hand().await, 10_000);
    assert_eq!(processor.balance().await, 1_000);
}

#[tokio::test]
async fn test_sequential_withdrawals_drain_the_vault() {
    let inventory = InMemoryCashInventory::new(250);
    let processor = InMemoryPaymentProcessor::new(1_000);

    let first = atm_over(&inventory, &processor, 200);
    assert_eq!(
        first.run_cash_withdrawal().await.unwrap(),
        WithdrawalStatus::Done
    );

    // Second request exceeds what is left in the vault.
    let second = atm_over(&inventory, &processor, 100);
    assert_eq!(
        second.run_cash_withdrawal().await.unwrap(),
        WithdrawalStatus::CashNotAvailable
    );

    assert_eq!(inventory.cash_on_hand().await, 50);
    assert_eq!(processor.balance().await, 800);
}
