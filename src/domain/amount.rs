use crate::error::AtmError;

/// A withdrawal amount in whole currency units.
///
/// Wraps `i64` to enforce the domain rule that a withdrawal amount is
/// strictly positive. A non-positive value coming out of the amount selector
/// is a contract violation, not a normal business outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    pub fn new(value: i64) -> Result<Self, AtmError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(AtmError::InvalidAmount { amount: value })
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = AtmError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
