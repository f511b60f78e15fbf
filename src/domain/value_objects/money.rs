//! # Money Value Object
//!
//! Currency-tagged monetary amount in minor units.
//!
//! Carrier rate responses quote prices in minor units (cents, öre, pence).
//! [`Money`] keeps the amount as an `i64` together with its [`Currency`] and
//! refuses arithmetic across currencies.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::value_objects::{Currency, Money};
//!
//! let eur = Currency::new("EUR").unwrap();
//! let price = Money::new(10_250, eur.clone());
//! let surcharge = Money::new(350, eur);
//!
//! let total = price.checked_add(&surcharge).unwrap();
//! assert_eq!(total.amount_minor(), 10_600);
//! assert_eq!(total.to_string(), "106.00 EUR");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO-4217 currency code.
///
/// # Invariants
///
/// - Exactly three ASCII letters
/// - Stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from a three-letter code.
    ///
    /// The code is uppercased on construction.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCurrency`] if the code is not exactly
    /// three ASCII letters.
    pub fn new(code: &str) -> DomainResult<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_currency(code));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// A monetary amount in minor units, tagged with its currency.
///
/// Negative amounts are permitted (refunds, adjustments).
///
/// # Examples
///
/// ```
/// use multiship::domain::value_objects::{Currency, Money};
///
/// let sek = Currency::new("SEK").unwrap();
/// let amount = Money::new(-150, sek);
/// assert_eq!(amount.to_string(), "-1.50 SEK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor units.
    amount_minor: i64,
    /// Currency of the amount.
    currency: Currency,
}

impl Money {
    /// Creates a monetary amount from minor units.
    #[must_use]
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Returns the amount in minor units.
    #[inline]
    #[must_use]
    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CurrencyMismatch`] if the currencies differ and
    /// [`DomainError::ArithmeticOverflow`] if the sum overflows.
    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::currency_mismatch(
                self.currency.as_str(),
                other.currency.as_str(),
            ));
        }
        let amount = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or_else(|| DomainError::overflow("money add"))?;
        Ok(Money::new(amount, self.currency.clone()))
    }

    /// Multiplies the amount by an integer factor.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ArithmeticOverflow`] if the product overflows.
    pub fn checked_mul(&self, factor: i64) -> DomainResult<Money> {
        let amount = self
            .amount_minor
            .checked_mul(factor)
            .ok_or_else(|| DomainError::overflow("money mul"))?;
        Ok(Money::new(amount, self.currency.clone()))
    }
}

impl fmt::Display for Money {
    /// Formats assuming a minor-unit exponent of two.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        write!(f, "{sign}{}.{:02} {}", abs / 100, abs % 100, self.currency)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod currency {
        use super::*;

        #[test]
        fn uppercases_valid_code() {
            let c = Currency::new("eur").unwrap();
            assert_eq!(c.as_str(), "EUR");
        }

        #[test]
        fn rejects_bad_codes() {
            assert!(Currency::new("EU").is_err());
            assert!(Currency::new("EURO").is_err());
            assert!(Currency::new("E1R").is_err());
            assert!(Currency::new("").is_err());
        }

        #[test]
        fn parses_from_str() {
            let c: Currency = "usd".parse().unwrap();
            assert_eq!(c.as_str(), "USD");
        }
    }

    mod money {
        use super::*;

        fn eur(amount: i64) -> Money {
            Money::new(amount, Currency::new("EUR").unwrap())
        }

        #[test]
        fn checked_add_same_currency() {
            let total = eur(100).checked_add(&eur(250)).unwrap();
            assert_eq!(total.amount_minor(), 350);
        }

        #[test]
        fn checked_add_rejects_mismatch() {
            let usd = Money::new(100, Currency::new("USD").unwrap());
            let err = eur(100).checked_add(&usd).unwrap_err();
            assert!(matches!(err, DomainError::CurrencyMismatch { .. }));
        }

        #[test]
        fn checked_add_overflow() {
            let err = eur(i64::MAX).checked_add(&eur(1)).unwrap_err();
            assert!(matches!(err, DomainError::ArithmeticOverflow { .. }));
        }

        #[test]
        fn checked_mul() {
            assert_eq!(eur(250).checked_mul(3).unwrap().amount_minor(), 750);
            assert!(eur(i64::MAX).checked_mul(2).is_err());
        }

        #[test]
        fn display_rounds_nothing() {
            assert_eq!(eur(10_600).to_string(), "106.00 EUR");
            assert_eq!(eur(5).to_string(), "0.05 EUR");
            assert_eq!(eur(-50).to_string(), "-0.50 EUR");
            assert_eq!(eur(-150).to_string(), "-1.50 EUR");
        }
    }
}
