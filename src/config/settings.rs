//! User settings for the `bank` binary
//!
//! Settings live in an optional JSON file. Every field has a default, so a
//! partial file (or no file at all) is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BankError, BankResult};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing balances
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Log filter used when `RUST_LOG` is not set (tracing `EnvFilter` syntax)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Print JSON instead of text
    #[serde(default)]
    pub json_output: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            log_filter: default_log_filter(),
            json_output: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or return defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> BankResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| BankError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BankError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to `path` as pretty-printed JSON
    pub fn save(&self, path: &Path) -> BankResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BankError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BankError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| BankError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.log_filter, "warn");
        assert!(!settings.json_output);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_default(&temp_dir.path().join("bank.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("bank.json");

        let settings = Settings {
            currency_symbol: "€".to_string(),
            log_filter: "bank_account=debug".to_string(),
            json_output: true,
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load_or_default(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank.json");
        std::fs::write(&path, r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_default(&path).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.log_filter, "warn");
        assert!(!loaded.json_output);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bank.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_or_default(&path).unwrap_err();
        assert!(matches!(err, BankError::Config(_)));
    }
}
