//! CLI command handlers
//!
//! Bridges clap argument parsing with the account model. The `bank` binary
//! keeps nothing between runs: every command builds the accounts it needs
//! from its arguments, applies one operation and prints the result.

pub mod account;
pub mod validate;

pub use account::{handle_deposit, handle_transfer, handle_withdraw, AccountArgs};
pub use validate::{handle_validate_command, ValidateCommands};

use crate::config::Settings;

/// How a handler should print its result
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub json: bool,
    pub currency_symbol: String,
}

impl OutputOptions {
    /// Build output options from settings, with `--json` overriding the file
    pub fn from_settings(settings: &Settings, json_flag: bool) -> Self {
        Self {
            json: json_flag || settings.json_output,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_overrides_settings() {
        let settings = Settings::default();
        assert!(!OutputOptions::from_settings(&settings, false).json);
        assert!(OutputOptions::from_settings(&settings, true).json);

        let settings = Settings {
            json_output: true,
            ..Settings::default()
        };
        assert!(OutputOptions::from_settings(&settings, false).json);
    }
}
