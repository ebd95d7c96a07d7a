//! Money type for representing account balances
//!
//! Internally stores amounts in cents (i64) so that every stored balance has
//! exactly two fractional digits. Amounts arrive from callers as `Decimal` and
//! are converted with [`Money::from_decimal`], which refuses anything finer
//! than a cent instead of rounding it away.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional digits a `Money` value carries
pub const SCALE: u32 = 2;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use bank_account::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Convert an exact decimal amount into cents
    ///
    /// Returns `None` when `amount` has more than two significant fractional
    /// digits or does not fit in `i64` cents. Trailing zeros are fine:
    /// `1.500` converts to 150 cents.
    ///
    /// # Examples
    /// ```
    /// use bank_account::models::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(1050, 2)), Some(Money::from_cents(1050)));
    /// assert_eq!(Money::from_decimal(Decimal::new(1, 3)), None);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        if amount.round_dp(SCALE) != amount {
            return None;
        }
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Self)
    }

    /// The exact decimal value of this amount, with a scale of two
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, SCALE)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Subtract `other`, returning `None` on overflow
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10". Unlike a display
    /// parser this does not truncate: "10.505" is rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let value: Decimal = rest
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
        let value = if negative { -value } else { value };

        Self::from_decimal(value).ok_or_else(|| MoneyParseError::TooPrecise(s.to_string()))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Money amount has more than two decimal places: {}", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
    }

    #[test]
    fn test_from_decimal() {
        assert_eq!(
            Money::from_decimal(Decimal::new(1050, 2)),
            Some(Money::from_cents(1050))
        );
        assert_eq!(
            Money::from_decimal(Decimal::from(100)),
            Some(Money::from_cents(10000))
        );
        // trailing zeros do not add precision
        assert_eq!(
            Money::from_decimal(Decimal::new(1500, 3)),
            Some(Money::from_cents(150))
        );
        assert_eq!(Money::from_decimal(Decimal::new(1, 3)), None);
        assert_eq!(Money::from_decimal(Decimal::new(10505, 3)), None);
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        assert_eq!(Money::from_decimal(Decimal::MAX), None);
        assert_eq!(Money::from_decimal(Decimal::from(i64::MAX)), None);
    }

    #[test]
    fn test_to_decimal() {
        let d = Money::from_cents(1050).to_decimal();
        assert_eq!(d, Decimal::new(105, 1));
        assert_eq!(d.to_string(), "10.50");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_sub(b), Some(Money::from_cents(500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Money::parse("10.505"),
            Err(MoneyParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    proptest! {
        #[test]
        fn prop_cents_survive_decimal_conversion(cents in any::<i64>()) {
            let money = Money::from_cents(cents);
            prop_assert_eq!(Money::from_decimal(money.to_decimal()), Some(money));
        }

        #[test]
        fn prop_sub_cent_fraction_is_refused(cents in -1_000_000i64..1_000_000, extra in 1i64..10) {
            let amount = Decimal::new(cents * 10 + extra, 3);
            prop_assert_eq!(Money::from_decimal(amount), None);
        }
    }
}
