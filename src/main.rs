use atm_core::application::atm::Atm;
use atm_core::domain::ports::{AmountSelectorBox, CashManagerBox, PaymentProcessorBox};
use atm_core::infrastructure::in_memory::{
    InMemoryCashInventory, InMemoryPaymentProcessor, QueuedAmountSelector,
};
use atm_core::infrastructure::settings::MachineSettings;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount to withdraw, in whole currency units
    amount: i64,

    /// Path to a JSON machine settings file (optional)
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match cli.settings {
        Some(path) => MachineSettings::load(&path).into_diagnostic()?,
        None => MachineSettings::default(),
    };

    let selector: AmountSelectorBox = Box::new(QueuedAmountSelector::new([cli.amount]));
    let cash_manager: CashManagerBox =
        Box::new(InMemoryCashInventory::new(settings.cash_on_hand));
    let payment_processor: PaymentProcessorBox =
        Box::new(InMemoryPaymentProcessor::new(settings.account_balance));

    let atm = Atm::new(selector, cash_manager, payment_processor);

    let status = atm.run_cash_withdrawal().await.into_diagnostic()?;
    println!("{}", status);

    Ok(())
}
