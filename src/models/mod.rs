//! Core data models for bank-account
//!
//! The account entity and the fixed-point money type it stores its balance in.

pub mod account;
pub mod money;

pub use account::Account;
pub use money::{Money, MoneyParseError};
