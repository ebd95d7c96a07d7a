//! Account CLI commands
//!
//! Deposit, withdraw and transfer against accounts built from the command
//! line. Refused operations come back as `BankError::Account`.

use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use super::OutputOptions;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::BankResult;
use crate::models::Account;

/// An account to open for the duration of one command
#[derive(Args, Debug, Clone)]
pub struct AccountArgs {
    /// Account identifier (e.g., "a@b.com")
    pub identifier: String,
    /// Starting balance (e.g., "100.00")
    #[arg(allow_negative_numbers = true)]
    pub balance: Decimal,
}

impl AccountArgs {
    fn open(&self) -> BankResult<Account> {
        Ok(Account::new(self.identifier.clone(), self.balance)?)
    }
}

/// Handle `bank deposit`
pub fn handle_deposit(
    account: &AccountArgs,
    amount: Decimal,
    output: &OutputOptions,
) -> BankResult<()> {
    let mut account = account.open()?;
    account.deposit(amount)?;

    info!(account = account.identifier(), %amount, "deposited");
    print_accounts(&[&account], output)
}

/// Handle `bank withdraw`
pub fn handle_withdraw(
    account: &AccountArgs,
    amount: Decimal,
    output: &OutputOptions,
) -> BankResult<()> {
    let mut account = account.open()?;
    account.withdraw(amount)?;

    info!(account = account.identifier(), %amount, "withdrew");
    print_accounts(&[&account], output)
}

/// Handle `bank transfer`
pub fn handle_transfer(
    from: &AccountArgs,
    to: &AccountArgs,
    amount: Decimal,
    output: &OutputOptions,
) -> BankResult<()> {
    let mut source = from.open()?;
    let mut destination = to.open()?;
    source.transfer(Some(&mut destination), amount)?;

    info!(
        from = source.identifier(),
        to = destination.identifier(),
        %amount,
        "transferred"
    );
    print_accounts(&[&source, &destination], output)
}

fn print_accounts(accounts: &[&Account], output: &OutputOptions) -> BankResult<()> {
    if output.json {
        let json = match accounts {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{}", json);
    } else if let [single] = accounts {
        print!("{}", format_account_details(single, &output.currency_symbol));
    } else {
        print!("{}", format_account_list(accounts, &output.currency_symbol));
    }
    Ok(())
}
