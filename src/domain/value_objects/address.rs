//! # Address Value Object
//!
//! Postal address shared by quote, shipment, and pickup requests.
//!
//! Tracking activities reuse the same type with most fields empty, so only
//! the country code is validated, and only when present.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::value_objects::Address;
//!
//! let address = Address::new(
//!     "Helmut's Hardware",
//!     vec!["Hauptstraße 1".to_string()],
//!     "10115",
//!     "Berlin",
//!     "",
//!     "de",
//! )
//! .unwrap()
//! .with_contact_phone("+49 30 1234567");
//!
//! assert_eq!(address.country_code(), "DE");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of address lines carriers accept.
const MAX_ADDRESS_LINES: usize = 3;

/// A postal address with optional contact details.
///
/// # Invariants
///
/// - At most three address lines
/// - `country_code`, when non-empty, is a two-letter ISO-3166 alpha-2 code,
///   stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Company or person name.
    name: String,
    /// Street address lines, at most three.
    lines: Vec<String>,
    /// Postal or ZIP code.
    postal_code: String,
    /// City name.
    city: String,
    /// State or province, where applicable.
    state: String,
    /// ISO-3166 alpha-2 country code, uppercase. May be empty on
    /// carrier-reported activity locations.
    country_code: String,
    /// Contact person name.
    contact_name: Option<String>,
    /// Contact phone number.
    contact_phone: Option<String>,
    /// Contact email address.
    contact_email: Option<String>,
}

impl Address {
    /// Creates an address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if more than three address lines
    /// are given, or [`DomainError::InvalidCountryCode`] if a non-empty
    /// country code is not two ASCII letters.
    pub fn new(
        name: impl Into<String>,
        lines: Vec<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country_code: &str,
    ) -> DomainResult<Self> {
        if lines.len() > MAX_ADDRESS_LINES {
            return Err(DomainError::validation(format!(
                "at most {MAX_ADDRESS_LINES} address lines are supported, got {}",
                lines.len()
            )));
        }
        Ok(Self {
            name: name.into(),
            lines,
            postal_code: postal_code.into(),
            city: city.into(),
            state: state.into(),
            country_code: validate_country_code(country_code)?,
            contact_name: None,
            contact_phone: None,
            contact_email: None,
        })
    }

    /// Creates a minimal address carrying only a city and country.
    ///
    /// Carrier tracking feeds report activity locations this way.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCountryCode`] if a non-empty country
    /// code is not two ASCII letters.
    pub fn location(city: impl Into<String>, country_code: &str) -> DomainResult<Self> {
        Self::new("", Vec::new(), "", city, "", country_code)
    }

    /// Sets the contact person name.
    #[must_use]
    pub fn with_contact_name(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn with_contact_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact_phone = Some(phone.into());
        self
    }

    /// Sets the contact email address.
    #[must_use]
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// Returns the company or person name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the street address lines.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the postal code.
    #[inline]
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the state or province.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the country code.
    #[inline]
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Returns the contact person name.
    #[inline]
    #[must_use]
    pub fn contact_name(&self) -> Option<&str> {
        self.contact_name.as_deref()
    }

    /// Returns the contact phone number.
    #[inline]
    #[must_use]
    pub fn contact_phone(&self) -> Option<&str> {
        self.contact_phone.as_deref()
    }

    /// Returns the contact email address.
    #[inline]
    #[must_use]
    pub fn contact_email(&self) -> Option<&str> {
        self.contact_email.as_deref()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.city, self.country_code)?;
        if !self.postal_code.is_empty() {
            write!(f, " ({})", self.postal_code)?;
        }
        Ok(())
    }
}

fn validate_country_code(code: &str) -> DomainResult<String> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(String::new());
    }
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::invalid_country_code(code));
    }
    Ok(code.to_ascii_uppercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_country_code() {
        let a = Address::location("Stockholm", "se").unwrap();
        assert_eq!(a.country_code(), "SE");
        assert_eq!(a.city(), "Stockholm");
    }

    #[test]
    fn empty_country_code_is_allowed() {
        let a = Address::location("Somewhere", "").unwrap();
        assert_eq!(a.country_code(), "");
    }

    #[test]
    fn rejects_bad_country_codes() {
        assert!(Address::location("Stockholm", "SWE").is_err());
        assert!(Address::location("Stockholm", "S1").is_err());
    }

    #[test]
    fn rejects_too_many_lines() {
        let lines = vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];
        let err = Address::new("n", lines, "", "c", "", "SE").unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn contact_builders() {
        let a = Address::location("Lund", "SE")
            .unwrap()
            .with_contact_name("Eva")
            .with_contact_email("eva@example.com");
        assert_eq!(a.contact_name(), Some("Eva"));
        assert_eq!(a.contact_email(), Some("eva@example.com"));
        assert!(a.contact_phone().is_none());
    }

    #[test]
    fn display() {
        let a = Address::new("n", vec![], "211 20", "Malmö", "", "SE").unwrap();
        assert_eq!(a.to_string(), "Malmö SE (211 20)");
    }
}
