//! Error types for bank-account
//!
//! `AccountError` covers the two ways an account operation can be refused.
//! `BankError` is the application-level error used by configuration and the
//! command-line front end.

use thiserror::Error;

use crate::models::Money;

/// Errors returned by [`crate::models::Account`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Malformed input: bad identifier, invalid amount, absent destination
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested amount exceeds the available balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
}

impl AccountError {
    /// Create an invalid-argument error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an insufficient-funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

/// The main error type for the `bank` application
#[derive(Error, Debug)]
pub enum BankError {
    /// An account operation was refused
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for account operations
pub type AccountResult<T> = Result<T, AccountError>;

/// Result type alias for application operations
pub type BankResult<T> = Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = AccountError::invalid("Invalid deposit amount");
        assert_eq!(err.to_string(), "Invalid argument: Invalid deposit amount");
        assert!(err.is_invalid_argument());
        assert!(!err.is_insufficient_funds());
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = AccountError::InsufficientFunds {
            requested: Money::from_cents(5000),
            available: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested $50.00, available $30.00"
        );
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_account_error_is_transparent() {
        let err: BankError = AccountError::invalid("Invalid identifier").into();
        assert_eq!(err.to_string(), "Invalid argument: Invalid identifier");
        assert!(matches!(err, BankError::Account(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bank_err: BankError = io_err.into();
        assert!(matches!(bank_err, BankError::Io(_)));
    }
}
