use thiserror::Error;

pub type Result<T> = std::result::Result<T, AtmError>;

#[derive(Error, Debug)]
pub enum AtmError {
    /// Technical failure: the amount selector produced a non-positive amount.
    /// This is a machine fault (e.g. a broken keypad), not a business outcome.
    #[error("invalid withdrawal amount selected: {amount}")]
    InvalidAmount { amount: i64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings error: {0}")]
    Settings(String),
}
