//! Account model
//!
//! A single in-memory account: an email-shaped identifier and a non-negative
//! balance that only changes through deposit, withdraw and transfer. Every
//! check runs before any field is touched, so a refused operation leaves the
//! account exactly as it was.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::money::{Money, SCALE};
use crate::error::{AccountError, AccountResult};

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    identifier: String,
    balance: Money,
}

impl Account {
    /// Create a new account
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the identifier or the starting balance
    /// fails validation.
    ///
    /// # Examples
    /// ```
    /// use bank_account::models::{Account, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let account = Account::new("a@b.com", Decimal::new(20000, 2)).unwrap();
    /// assert_eq!(account.balance(), Money::from_cents(20000));
    /// ```
    pub fn new(identifier: impl Into<String>, starting_balance: Decimal) -> AccountResult<Self> {
        let identifier = identifier.into();

        if !Self::is_identifier_valid(&identifier) {
            debug!(%identifier, "rejected account: invalid identifier");
            return Err(AccountError::invalid("Invalid identifier"));
        }

        let balance = Self::validated_amount(starting_balance, "Invalid starting balance")?;

        debug!(%identifier, %balance, "account opened");
        Ok(Self {
            identifier,
            balance,
        })
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Deposit money into the account
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is not a valid amount, or if the new
    /// balance cannot be represented.
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        let amount = Self::validated_amount(amount, "Invalid deposit amount")?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::invalid("Deposit would overflow the balance"))?;

        debug!(account = %self.identifier, %amount, balance = %self.balance, "deposit applied");
        Ok(())
    }

    /// Withdraw money from the account
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `amount` is not a valid amount, `InsufficientFunds`
    /// if it exceeds the current balance.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        let amount = Self::validated_amount(amount, "Invalid withdrawal amount")?;
        self.ensure_covers(amount)?;

        self.balance = Money::from_cents(self.balance.cents() - amount.cents());

        debug!(account = %self.identifier, %amount, balance = %self.balance, "withdrawal applied");
        Ok(())
    }

    /// Move money from this account to `other`
    ///
    /// Both balances change together or not at all: every check, including
    /// the destination overflow check, happens before the first mutation.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `other` is `None`, the amount is invalid, or the
    /// destination balance would overflow. `InsufficientFunds` if the amount
    /// exceeds this account's balance.
    pub fn transfer(&mut self, other: Option<&mut Account>, amount: Decimal) -> AccountResult<()> {
        let Some(other) = other else {
            debug!(account = %self.identifier, "rejected transfer: no destination");
            return Err(AccountError::invalid("Destination account cannot be absent"));
        };

        let amount = Self::validated_amount(amount, "Invalid transfer amount")?;
        self.ensure_covers(amount)?;

        let credited = other.balance.checked_add(amount).ok_or_else(|| {
            AccountError::invalid("Transfer would overflow the destination balance")
        })?;

        self.balance = Money::from_cents(self.balance.cents() - amount.cents());
        other.balance = credited;

        debug!(
            from = %self.identifier,
            to = %other.identifier,
            %amount,
            "transfer applied"
        );
        Ok(())
    }

    /// Loose email-shape check for identifiers
    ///
    /// Requires a non-empty part before the first `@`, and a `.` somewhere
    /// after that `@` which is not the last character. Nothing more.
    pub fn is_identifier_valid(identifier: &str) -> bool {
        let at = match identifier.find('@') {
            Some(0) | None => return false,
            Some(at) => at,
        };

        match identifier[at..].find('.') {
            Some(offset) => at + offset != identifier.len() - 1,
            None => false,
        }
    }

    /// Amounts must be non-negative with at most two decimal places
    pub fn is_amount_valid(amount: Decimal) -> bool {
        if amount < Decimal::ZERO {
            return false;
        }
        amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero) == amount
    }

    fn validated_amount(amount: Decimal, message: &str) -> AccountResult<Money> {
        if !Self::is_amount_valid(amount) {
            debug!(%amount, reason = message, "rejected amount");
            return Err(AccountError::invalid(message));
        }
        Money::from_decimal(amount).ok_or_else(|| {
            debug!(%amount, "rejected amount: out of range");
            AccountError::invalid(format!("{}: out of range", message))
        })
    }

    fn ensure_covers(&self, amount: Money) -> AccountResult<()> {
        if amount > self.balance {
            debug!(
                account = %self.identifier,
                requested = %amount,
                available = %self.balance,
                "rejected: insufficient funds"
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier, self.balance)
    }
}
