use crate::error::{AtmError, Result};
use serde::Deserialize;
use std::path::Path;

/// Machine configuration for the simulated front end.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct MachineSettings {
    /// Cash loaded into the vault, in whole currency units.
    #[serde(default = "default_cash_on_hand")]
    pub cash_on_hand: i64,
    /// Balance of the account backing the card, in whole currency units.
    #[serde(default = "default_account_balance")]
    pub account_balance: i64,
}

fn default_cash_on_hand() -> i64 {
    10_000
}

fn default_account_balance() -> i64 {
    1_000
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            cash_on_hand: default_cash_on_hand(),
            account_balance: default_account_balance(),
        }
    }
}

impl MachineSettings {
    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| AtmError::Settings(e.to_string()))
    }
}
