use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use bank_account::cli::{
    handle_deposit, handle_transfer, handle_validate_command, handle_withdraw, AccountArgs,
    OutputOptions, ValidateCommands,
};
use bank_account::config::Settings;

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "In-memory bank account sandbox",
    long_about = "Opens throwaway accounts from the command line and applies a single \
                  deposit, withdrawal or transfer to them. Nothing is stored between runs."
)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(long, global = true, env = "BANK_ACCOUNT_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the identifier or amount validators
    #[command(subcommand)]
    Validate(ValidateCommands),

    /// Open an account and deposit into it
    Deposit {
        #[command(flatten)]
        account: AccountArgs,
        /// Amount to deposit
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Open an account and withdraw from it
    Withdraw {
        #[command(flatten)]
        account: AccountArgs,
        /// Amount to withdraw
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Open two accounts and transfer between them
    Transfer {
        /// Source account identifier
        from: String,
        /// Source starting balance
        #[arg(allow_negative_numbers = true)]
        from_balance: Decimal,
        /// Destination account identifier
        to: String,
        /// Destination starting balance
        #[arg(allow_negative_numbers = true)]
        to_balance: Decimal,
        /// Amount to transfer
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_or_default(path)?,
        None => Settings::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = OutputOptions::from_settings(&settings, cli.json);

    match cli.command {
        Commands::Validate(cmd) => handle_validate_command(cmd, &output)?,
        Commands::Deposit { account, amount } => handle_deposit(&account, amount, &output)?,
        Commands::Withdraw { account, amount } => handle_withdraw(&account, amount, &output)?,
        Commands::Transfer {
            from,
            from_balance,
            to,
            to_balance,
            amount,
        } => {
            let from = AccountArgs {
                identifier: from,
                balance: from_balance,
            };
            let to = AccountArgs {
                identifier: to,
                balance: to_balance,
            };
            handle_transfer(&from, &to, amount, &output)?;
        }
    }

    Ok(())
}
