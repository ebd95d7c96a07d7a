//! bank-account - a minimal in-memory bank account model
//!
//! An [`Account`] holds an email-shaped identifier and a non-negative balance
//! with cent precision. Deposits, withdrawals and transfers validate their
//! inputs first and either apply completely or return an [`AccountError`].
//!
//! # Architecture
//!
//! - `models`: the account entity and the `Money` type
//! - `error`: account and application error types
//! - `config`: settings for the `bank` binary
//! - `display`: terminal formatting of accounts
//! - `cli`: command definitions and handlers for the `bank` binary
//!
//! # Example
//!
//! ```rust
//! use bank_account::models::{Account, Money};
//! use rust_decimal::Decimal;
//!
//! let mut a = Account::new("a@b.com", Decimal::from(100))?;
//! let mut b = Account::new("c@d.com", Decimal::from(50))?;
//! a.transfer(Some(&mut b), Decimal::from(30))?;
//!
//! assert_eq!(a.balance(), Money::from_cents(7000));
//! assert_eq!(b.balance(), Money::from_cents(8000));
//! # Ok::<(), bank_account::AccountError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;

pub use error::{AccountError, BankError};
pub use models::{Account, Money};
