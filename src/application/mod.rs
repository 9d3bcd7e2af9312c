pub mod atm;
