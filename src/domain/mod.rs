pub mod amount;
pub mod ports;
pub mod withdrawal;
