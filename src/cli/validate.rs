//! Validation CLI commands
//!
//! Runs the identifier and amount validators without opening an account.

use clap::Subcommand;
use rust_decimal::Decimal;
use serde_json::json;

use super::OutputOptions;
use crate::error::BankResult;
use crate::models::Account;

/// Validate subcommands
#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Check whether a string is an acceptable account identifier
    Identifier {
        /// Identifier to check (e.g., "a@b.com")
        identifier: String,
    },
    /// Check whether a decimal is an acceptable amount
    Amount {
        /// Amount to check (e.g., "10.50")
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
}

/// Handle a validate command
pub fn handle_validate_command(cmd: ValidateCommands, output: &OutputOptions) -> BankResult<()> {
    let (input, valid) = match cmd {
        ValidateCommands::Identifier { identifier } => {
            let valid = Account::is_identifier_valid(&identifier);
            (identifier, valid)
        }
        ValidateCommands::Amount { amount } => (amount.to_string(), Account::is_amount_valid(amount)),
    };

    if output.json {
        println!("{}", json!({ "input": input, "valid": valid }));
    } else {
        println!("{}", if valid { "valid" } else { "invalid" });
    }

    Ok(())
}
