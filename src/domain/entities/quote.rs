//! # Quote Entity
//!
//! A shipping rate quoted by one carrier for one service level.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::entities::Quote;
//! use multiship::domain::value_objects::{Currency, Money, Vendor};
//!
//! let quote = Quote::new(
//!     Vendor::Dhl,
//!     "EXPRESS WORLDWIDE",
//!     Money::new(45_900, Currency::new("EUR").unwrap()),
//! );
//!
//! assert_eq!(quote.to_string(), "DHL EXPRESS WORLDWIDE: 459.00 EUR");
//! ```

use crate::domain::value_objects::{Money, Vendor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price quote from a carrier.
///
/// Immutable once constructed. The service string is the carrier's own
/// product name and is compared verbatim; it is not normalized across
/// vendors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quoting carrier.
    vendor: Vendor,
    /// Carrier-specific service/product name.
    service: String,
    /// Quoted price in minor units.
    price: Money,
}

impl Quote {
    /// Creates a quote.
    #[must_use]
    pub fn new(vendor: Vendor, service: impl Into<String>, price: Money) -> Self {
        Self {
            vendor,
            service: service.into(),
            price,
        }
    }

    /// Returns the quoting carrier.
    #[inline]
    #[must_use]
    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Returns the carrier's service name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the quoted price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> &Money {
        &self.price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.vendor, self.service, self.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Currency;

    #[test]
    fn accessors() {
        let quote = Quote::new(
            Vendor::Tnt,
            "10:00 Express",
            Money::new(12_000, Currency::new("GBP").unwrap()),
        );
        assert_eq!(quote.vendor(), Vendor::Tnt);
        assert_eq!(quote.service(), "10:00 Express");
        assert_eq!(quote.price().amount_minor(), 12_000);
    }
}
