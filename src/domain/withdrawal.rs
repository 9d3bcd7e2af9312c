/// Result of attempting to charge an amount through the payment processor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Success,
    Failure,
}

/// The single externally observable outcome of one withdrawal run.
///
/// `CashNotAvailable` and `PaymentRejected` are expected business outcomes,
/// deliberately kept out of the error channel: the front end decides whether
/// to prompt the user again.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WithdrawalStatus {
    Done,
    CashNotAvailable,
    PaymentRejected,
}

impl std::fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WithdrawalStatus::Done => "DONE",
            WithdrawalStatus::CashNotAvailable => "CASH_NOT_AVAILABLE",
            WithdrawalStatus::PaymentRejected => "PAYMENT_REJECTED",
        };
        f.write_str(s)
    }
}
