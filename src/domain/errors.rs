//! # Domain Errors
//!
//! Error types for domain validation and value object construction.
//!
//! These errors represent violations of domain invariants: malformed country
//! codes, mismatched currencies, out-of-range measurements. They are distinct
//! from [`CarrierError`](crate::infrastructure::carriers::error::CarrierError),
//! which covers failures while talking to carrier web services.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::errors::DomainError;
//!
//! let err = DomainError::validation("parcel weight must be positive");
//! assert!(err.to_string().contains("weight"));
//! ```

use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Generic validation failure.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },

    /// Country code is not a two-letter ISO-3166 alpha-2 code.
    #[error("invalid country code: {code}")]
    InvalidCountryCode {
        /// The rejected code.
        code: String,
    },

    /// Currency code is not a three-letter ISO-4217 code.
    #[error("invalid currency code: {code}")]
    InvalidCurrency {
        /// The rejected code.
        code: String,
    },

    /// Arithmetic between two amounts in different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        left: String,
        /// Currency of the right operand.
        right: String,
    },

    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },
}

impl DomainError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an invalid country code error.
    #[must_use]
    pub fn invalid_country_code(code: impl Into<String>) -> Self {
        Self::InvalidCountryCode { code: code.into() }
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::ArithmeticOverflow {
            operation: operation.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = DomainError::invalid_country_code("SWE");
        assert_eq!(err.to_string(), "invalid country code: SWE");

        let err = DomainError::currency_mismatch("EUR", "USD");
        assert!(err.to_string().contains("EUR"));
        assert!(err.to_string().contains("USD"));
    }

    #[test]
    fn constructors() {
        assert!(matches!(
            DomainError::validation("x"),
            DomainError::Validation { .. }
        ));
        assert!(matches!(
            DomainError::overflow("add"),
            DomainError::ArithmeticOverflow { .. }
        ));
    }
}
