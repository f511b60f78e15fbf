//! # Pickup Entities
//!
//! Courier pickup scheduling: the request to book one, the confirmation a
//! carrier returns, and the request to cancel one.

use crate::domain::value_objects::{Address, Parcel, Vendor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to schedule a courier pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    /// Where the courier should collect.
    address: Address,
    /// Parcels to be collected.
    parcels: Vec<Parcel>,
    /// Earliest time the parcels are ready.
    ready_at: DateTime<Utc>,
    /// Latest time the location is open.
    close_at: DateTime<Utc>,
    /// Free-text instructions for the courier.
    instructions: Option<String>,
}

impl PickupRequest {
    /// Creates a pickup request.
    #[must_use]
    pub fn new(
        address: Address,
        parcels: Vec<Parcel>,
        ready_at: DateTime<Utc>,
        close_at: DateTime<Utc>,
    ) -> Self {
        Self {
            address,
            parcels,
            ready_at,
            close_at,
            instructions: None,
        }
    }

    /// Sets courier instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Returns the pickup address.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the parcels to collect.
    #[inline]
    #[must_use]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Returns the ready time.
    #[inline]
    #[must_use]
    pub fn ready_at(&self) -> DateTime<Utc> {
        self.ready_at
    }

    /// Returns the closing time.
    #[inline]
    #[must_use]
    pub fn close_at(&self) -> DateTime<Utc> {
        self.close_at
    }

    /// Returns the courier instructions.
    #[inline]
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

/// A scheduled pickup, as confirmed by a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pickup {
    /// Carrier confirmation number, used for cancellation.
    confirmation_number: String,
    /// The confirming carrier.
    vendor: Vendor,
    /// Confirmed earliest collection time.
    ready_at: DateTime<Utc>,
    /// Confirmed latest collection time.
    close_at: DateTime<Utc>,
}

impl Pickup {
    /// Creates a pickup confirmation.
    #[must_use]
    pub fn new(
        confirmation_number: impl Into<String>,
        vendor: Vendor,
        ready_at: DateTime<Utc>,
        close_at: DateTime<Utc>,
    ) -> Self {
        Self {
            confirmation_number: confirmation_number.into(),
            vendor,
            ready_at,
            close_at,
        }
    }

    /// Returns the confirmation number.
    #[inline]
    #[must_use]
    pub fn confirmation_number(&self) -> &str {
        &self.confirmation_number
    }

    /// Returns the confirming carrier.
    #[inline]
    #[must_use]
    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Returns the confirmed ready time.
    #[inline]
    #[must_use]
    pub fn ready_at(&self) -> DateTime<Utc> {
        self.ready_at
    }

    /// Returns the confirmed closing time.
    #[inline]
    #[must_use]
    pub fn close_at(&self) -> DateTime<Utc> {
        self.close_at
    }
}

/// Request to cancel a scheduled pickup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelPickupRequest {
    /// The confirmation number from the original booking.
    confirmation_number: String,
    /// Optional cancellation reason, forwarded to carriers that take one.
    reason: Option<String>,
}

impl CancelPickupRequest {
    /// Creates a cancellation request.
    #[must_use]
    pub fn new(confirmation_number: impl Into<String>) -> Self {
        Self {
            confirmation_number: confirmation_number.into(),
            reason: None,
        }
    }

    /// Sets the cancellation reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns the confirmation number.
    #[inline]
    #[must_use]
    pub fn confirmation_number(&self) -> &str {
        &self.confirmation_number
    }

    /// Returns the cancellation reason.
    #[inline]
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
