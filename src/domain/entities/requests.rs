//! # Request Entities
//!
//! Carrier-agnostic requests the client hands to adapters: rate quoting and
//! shipment creation, plus the loosely-typed option maps for tracking and
//! cancellation.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::entities::QuoteRequestBuilder;
//! use multiship::domain::value_objects::{Address, Length, LengthUnit, Mass, MassUnit, Parcel};
//!
//! let sender = Address::location("Stockholm", "SE").unwrap();
//! let recipient = Address::location("Oslo", "NO").unwrap();
//! let parcel = Parcel::new(
//!     Length::new(30.0, LengthUnit::Centimeter).unwrap(),
//!     Length::new(20.0, LengthUnit::Centimeter).unwrap(),
//!     Length::new(10.0, LengthUnit::Centimeter).unwrap(),
//!     Mass::new(1.0, MassUnit::Kilogram).unwrap(),
//! );
//!
//! let request = QuoteRequestBuilder::new(sender, recipient)
//!     .parcel(parcel)
//!     .extra("dhl.payment_type", "S")
//!     .build();
//!
//! assert_eq!(request.parcels().len(), 1);
//! ```

use crate::domain::value_objects::{Address, LabelFormat, Money, Parcel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Loosely-typed per-call options for tracking queries.
///
/// Adapters read the keys they understand and ignore the rest. Vendor
/// adapters document their keys under a vendor prefix (`"ups.locale"`).
pub type TrackingOptions = HashMap<String, String>;

/// Loosely-typed per-call options for shipment cancellation.
pub type CancelOptions = HashMap<String, String>;

/// Request for shipping rate quotes.
///
/// Immutable once built; construct with [`QuoteRequestBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Origin address.
    sender: Address,
    /// Destination address.
    recipient: Address,
    /// Parcels in the shipment.
    parcels: Vec<Parcel>,
    /// Requested ship date. Carriers quote for today when absent.
    ship_date: Option<DateTime<Utc>>,
    /// Declared value for insurance, when insuring.
    insured_value: Option<Money>,
    /// Vendor-specific pass-through options.
    extras: HashMap<String, String>,
}

impl QuoteRequest {
    /// Returns the origin address.
    #[inline]
    #[must_use]
    pub fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the destination address.
    #[inline]
    #[must_use]
    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    /// Returns the parcels.
    #[inline]
    #[must_use]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Returns the requested ship date.
    #[inline]
    #[must_use]
    pub fn ship_date(&self) -> Option<DateTime<Utc>> {
        self.ship_date
    }

    /// Returns the declared insurance value.
    #[inline]
    #[must_use]
    pub fn insured_value(&self) -> Option<&Money> {
        self.insured_value.as_ref()
    }

    /// Returns a vendor-specific option.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    /// Returns all vendor-specific options.
    #[inline]
    #[must_use]
    pub fn extras(&self) -> &HashMap<String, String> {
        &self.extras
    }
}

/// Builder for [`QuoteRequest`].
#[derive(Debug, Clone)]
pub struct QuoteRequestBuilder {
    sender: Address,
    recipient: Address,
    parcels: Vec<Parcel>,
    ship_date: Option<DateTime<Utc>>,
    insured_value: Option<Money>,
    extras: HashMap<String, String>,
}

impl QuoteRequestBuilder {
    /// Creates a builder for the given route.
    #[must_use]
    pub fn new(sender: Address, recipient: Address) -> Self {
        Self {
            sender,
            recipient,
            parcels: Vec::new(),
            ship_date: None,
            insured_value: None,
            extras: HashMap::new(),
        }
    }

    /// Appends a parcel.
    #[must_use]
    pub fn parcel(mut self, parcel: Parcel) -> Self {
        self.parcels.push(parcel);
        self
    }

    /// Replaces the parcel list.
    #[must_use]
    pub fn parcels(mut self, parcels: Vec<Parcel>) -> Self {
        self.parcels = parcels;
        self
    }

    /// Sets the requested ship date.
    #[must_use]
    pub fn ship_date(mut self, date: DateTime<Utc>) -> Self {
        self.ship_date = Some(date);
        self
    }

    /// Sets the declared insurance value.
    #[must_use]
    pub fn insured_value(mut self, value: Money) -> Self {
        self.insured_value = Some(value);
        self
    }

    /// Adds a vendor-specific pass-through option.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> QuoteRequest {
        QuoteRequest {
            sender: self.sender,
            recipient: self.recipient,
            parcels: self.parcels,
            ship_date: self.ship_date,
            insured_value: self.insured_value,
            extras: self.extras,
        }
    }
}

/// Request to create a shipment and produce labels.
///
/// Extends the quoting fields with the booked service and label options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Origin address.
    sender: Address,
    /// Destination address.
    recipient: Address,
    /// Parcels in the shipment.
    parcels: Vec<Parcel>,
    /// Carrier-specific service name to book.
    service: String,
    /// Requested label format.
    label_format: LabelFormat,
    /// Requested ship date.
    ship_date: Option<DateTime<Utc>>,
    /// Customer reference printed on the label, where supported.
    reference: Option<String>,
    /// Vendor-specific pass-through options.
    extras: HashMap<String, String>,
}

impl ShipmentRequest {
    /// Creates a shipment request with PDF labels.
    #[must_use]
    pub fn new(
        sender: Address,
        recipient: Address,
        parcels: Vec<Parcel>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            recipient,
            parcels,
            service: service.into(),
            label_format: LabelFormat::Pdf,
            ship_date: None,
            reference: None,
            extras: HashMap::new(),
        }
    }

    /// Sets the label format.
    #[must_use]
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = format;
        self
    }

    /// Sets the ship date.
    #[must_use]
    pub fn with_ship_date(mut self, date: DateTime<Utc>) -> Self {
        self.ship_date = Some(date);
        self
    }

    /// Sets the customer reference.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Adds a vendor-specific pass-through option.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Returns the origin address.
    #[inline]
    #[must_use]
    pub fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the destination address.
    #[inline]
    #[must_use]
    pub fn recipient(&self) -> &Address {
        &self.recipient
    }

    /// Returns the parcels.
    #[inline]
    #[must_use]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Returns the service to book.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the requested label format.
    #[inline]
    #[must_use]
    pub fn label_format(&self) -> LabelFormat {
        self.label_format
    }

    /// Returns the ship date.
    #[inline]
    #[must_use]
    pub fn ship_date(&self) -> Option<DateTime<Utc>> {
        self.ship_date
    }

    /// Returns the customer reference.
    #[inline]
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Returns a vendor-specific option.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Currency, Length, LengthUnit, Mass, MassUnit};

    fn test_parcel() -> Parcel {
        Parcel::new(
            Length::new(30.0, LengthUnit::Centimeter).unwrap(),
            Length::new(20.0, LengthUnit::Centimeter).unwrap(),
            Length::new(10.0, LengthUnit::Centimeter).unwrap(),
            Mass::new(1.0, MassUnit::Kilogram).unwrap(),
        )
    }

    #[test]
    fn quote_request_builder() {
        let request = QuoteRequestBuilder::new(
            Address::location("Stockholm", "SE").unwrap(),
            Address::location("Oslo", "NO").unwrap(),
        )
        .parcel(test_parcel())
        .insured_value(Money::new(50_000, Currency::new("SEK").unwrap()))
        .extra("tnt.division", "express")
        .build();

        assert_eq!(request.sender().country_code(), "SE");
        assert_eq!(request.parcels().len(), 1);
        assert_eq!(request.extra("tnt.division"), Some("express"));
        assert_eq!(request.extra("missing"), None);
        assert!(request.ship_date().is_none());
    }

    #[test]
    fn shipment_request_defaults_to_pdf() {
        let request = ShipmentRequest::new(
            Address::location("Stockholm", "SE").unwrap(),
            Address::location("Oslo", "NO").unwrap(),
            vec![test_parcel()],
            "EXPRESS",
        )
        .with_reference("ORDER-1001");

        assert_eq!(request.label_format(), LabelFormat::Pdf);
        assert_eq!(request.reference(), Some("ORDER-1001"));
        assert_eq!(request.service(), "EXPRESS");
    }
}
