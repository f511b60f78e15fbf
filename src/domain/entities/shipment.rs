//! # Shipment Entity
//!
//! A registered shipment with its label, as returned by a carrier.

use crate::domain::value_objects::{LabelFormat, Vendor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipment created with a carrier.
///
/// One shipment request may produce several shipments when a carrier
/// registers each parcel separately; the carrier call therefore returns a
/// sequence of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Carrier-assigned shipment identifier, used for cancellation.
    id: String,
    /// The registering carrier.
    vendor: Vendor,
    /// Carrier-specific service name the shipment was booked with.
    service: String,
    /// Tracking numbers assigned to the shipment's parcels.
    tracking_numbers: Vec<String>,
    /// Raw label bytes in `label_format`.
    label_data: Vec<u8>,
    /// Format of `label_data`.
    label_format: LabelFormat,
}

impl Shipment {
    /// Creates a shipment.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        vendor: Vendor,
        service: impl Into<String>,
        tracking_numbers: Vec<String>,
        label_data: Vec<u8>,
        label_format: LabelFormat,
    ) -> Self {
        Self {
            id: id.into(),
            vendor,
            service: service.into(),
            tracking_numbers,
            label_data,
            label_format,
        }
    }

    /// Returns the carrier-assigned identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the registering carrier.
    #[inline]
    #[must_use]
    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Returns the booked service name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the assigned tracking numbers.
    #[inline]
    #[must_use]
    pub fn tracking_numbers(&self) -> &[String] {
        &self.tracking_numbers
    }

    /// Returns the raw label bytes.
    #[inline]
    #[must_use]
    pub fn label_data(&self) -> &[u8] {
        &self.label_data
    }

    /// Returns the label format.
    #[inline]
    #[must_use]
    pub fn label_format(&self) -> LabelFormat {
        self.label_format
    }
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shipment({} via {} {}, {} parcel(s))",
            self.id,
            self.vendor,
            self.service,
            self.tracking_numbers.len()
        )
    }
}
