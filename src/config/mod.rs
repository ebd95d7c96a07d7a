//! Configuration module for bank-account
//!
//! Settings for the `bank` binary: display currency symbol, default log
//! filter and output format.

pub mod settings;

pub use settings::Settings;
