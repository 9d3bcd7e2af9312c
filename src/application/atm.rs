use crate::domain::amount::Amount;
use crate::domain::ports::{AmountSelectorBox, CashManagerBox, PaymentProcessorBox};
use crate::domain::withdrawal::{PaymentStatus, WithdrawalStatus};
use crate::error::Result;

/// The withdrawal orchestrator.
///
/// `Atm` owns the three collaborator ports and runs the cash-withdrawal
/// workflow as one deterministic pass: validate the selected amount, check
/// deliverability, charge the payment instrument, dispense. Each collaborator
/// is awaited in strict sequence; there are no retries and no backtracking
/// within an invocation.
pub struct Atm {
    amount_selector: AmountSelectorBox,
    cash_manager: CashManagerBox,
    payment_processor: PaymentProcessorBox,
}

impl Atm {
    /// Creates a new `Atm` from its three collaborators.
    pub fn new(
        amount_selector: AmountSelectorBox,
        cash_manager: CashManagerBox,
        payment_processor: PaymentProcessorBox,
    ) -> Self {
        Self {
            amount_selector,
            cash_manager,
            payment_processor,
        }
    }

    /// Runs one cash withdrawal to completion.
    ///
    /// Returns the terminal business outcome, or `AtmError::InvalidAmount`
    /// when the selector yields a non-positive amount. In the invalid-amount
    /// case no collaborator beyond the selector is touched. Cash is delivered
    /// only after the charge succeeded, and at most once.
    pub async fn run_cash_withdrawal(&self) -> Result<WithdrawalStatus> {
        let selected = self.amount_selector.select_amount().await;
        let amount = Amount::new(selected)?;

        if !self.cash_manager.can_deliver(amount).await {
            return Ok(WithdrawalStatus::CashNotAvailable);
        }

        match self.payment_processor.pay(amount).await {
            PaymentStatus::Failure => Ok(WithdrawalStatus::PaymentRejected),
            PaymentStatus::Success => {
                self.cash_manager.deliver(amount).await;
                Ok(WithdrawalStatus::Done)
            }
        }
    }
}
