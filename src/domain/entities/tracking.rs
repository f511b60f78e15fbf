//! # Tracking Entities
//!
//! Shipment tracking state as reported by carrier web services.
//!
//! A carrier answers a tracking query with a sequence of [`TrackingResult`]
//! values, one per tracking number (or per leg for multi-leg shipments).
//! Each successful result carries a [`Tracking`] with the activity history
//! the carrier reported. Activity order is whatever the carrier sent; it is
//! NOT guaranteed chronological, which is why [`Tracking::latest_activity`]
//! compares timestamps instead of taking the first element.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::entities::{TrackingBuilder, TrackingResult};
//! use multiship::domain::value_objects::Vendor;
//!
//! let tracking = TrackingBuilder::new(Vendor::Ups, "Ground").build();
//! let result = TrackingResult::success("1Z999AA10123456784", "<xml/>", tracking);
//!
//! assert!(result.is_success());
//! ```

use crate::domain::value_objects::{Address, Parcel, Vendor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single tracking activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    /// Shipment has been delivered.
    Delivered,
    /// Shipment is moving through the network.
    InTransit,
    /// Something went wrong (customs hold, failed delivery attempt).
    Exception,
    /// Informational event with no movement (label created, data received).
    Notification,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Delivered => "DELIVERED",
            Self::InTransit => "IN_TRANSIT",
            Self::Exception => "EXCEPTION",
            Self::Notification => "NOTIFICATION",
        };
        write!(f, "{s}")
    }
}

/// One event in a shipment's tracking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingActivity {
    /// Classified status of the event.
    status: ActivityStatus,
    /// Carrier's human-readable description.
    description: String,
    /// When the event occurred.
    timestamp: DateTime<Utc>,
    /// Where the event occurred. Often only city and country.
    address: Address,
    /// The carrier's original, unparsed date text. Kept because carrier
    /// date formats are lossy and consumers sometimes need the raw value.
    original_date_text: String,
}

impl TrackingActivity {
    /// Creates a tracking activity.
    #[must_use]
    pub fn new(
        status: ActivityStatus,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
        address: Address,
        original_date_text: impl Into<String>,
    ) -> Self {
        Self {
            status,
            description: description.into(),
            timestamp,
            address,
            original_date_text: original_date_text.into(),
        }
    }

    /// Returns the classified status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> ActivityStatus {
        self.status
    }

    /// Returns the carrier's description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the event occurred.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns where the event occurred.
    #[inline]
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the carrier's original date text.
    #[inline]
    #[must_use]
    pub fn original_date_text(&self) -> &str {
        &self.original_date_text
    }
}

/// Tracking state for one shipment, as reported by one carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracking {
    /// The reporting carrier.
    vendor: Vendor,
    /// Carrier-specific service name.
    service: String,
    /// Activity history in carrier order, not guaranteed chronological.
    activities: Vec<TrackingActivity>,
    /// Parcels in the shipment, when the carrier reports them.
    parcels: Vec<Parcel>,
    /// Estimated delivery date, when the carrier provides one.
    estimated_delivery_date: Option<DateTime<Utc>>,
}

impl Tracking {
    /// Returns the reporting carrier.
    #[inline]
    #[must_use]
    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// Returns the service name.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the activity history in carrier order.
    #[inline]
    #[must_use]
    pub fn activities(&self) -> &[TrackingActivity] {
        &self.activities
    }

    /// Returns the parcels.
    #[inline]
    #[must_use]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Returns the estimated delivery date.
    #[inline]
    #[must_use]
    pub fn estimated_delivery_date(&self) -> Option<DateTime<Utc>> {
        self.estimated_delivery_date
    }

    /// Returns the most recent activity by timestamp.
    ///
    /// Compares timestamps because carrier feeds do not guarantee
    /// chronological order.
    #[must_use]
    pub fn latest_activity(&self) -> Option<&TrackingActivity> {
        self.activities.iter().max_by_key(|a| a.timestamp())
    }

    /// Returns true if any activity reports delivery.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.activities
            .iter()
            .any(|a| a.status() == ActivityStatus::Delivered)
    }
}

/// Builder for [`Tracking`].
#[derive(Debug, Clone)]
pub struct TrackingBuilder {
    vendor: Vendor,
    service: String,
    activities: Vec<TrackingActivity>,
    parcels: Vec<Parcel>,
    estimated_delivery_date: Option<DateTime<Utc>>,
}

impl TrackingBuilder {
    /// Creates a builder for the given carrier and service.
    #[must_use]
    pub fn new(vendor: Vendor, service: impl Into<String>) -> Self {
        Self {
            vendor,
            service: service.into(),
            activities: Vec::new(),
            parcels: Vec::new(),
            estimated_delivery_date: None,
        }
    }

    /// Appends an activity.
    #[must_use]
    pub fn activity(mut self, activity: TrackingActivity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Replaces the activity list.
    #[must_use]
    pub fn activities(mut self, activities: Vec<TrackingActivity>) -> Self {
        self.activities = activities;
        self
    }

    /// Appends a parcel.
    #[must_use]
    pub fn parcel(mut self, parcel: Parcel) -> Self {
        self.parcels.push(parcel);
        self
    }

    /// Sets the estimated delivery date.
    #[must_use]
    pub fn estimated_delivery(mut self, date: DateTime<Utc>) -> Self {
        self.estimated_delivery_date = Some(date);
        self
    }

    /// Builds the tracking entity.
    #[must_use]
    pub fn build(self) -> Tracking {
        Tracking {
            vendor: self.vendor,
            service: self.service,
            activities: self.activities,
            parcels: self.parcels,
            estimated_delivery_date: self.estimated_delivery_date,
        }
    }
}

/// Outcome status of one per-carrier tracking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingResultStatus {
    /// The carrier recognized the number and returned tracking data.
    Success,
    /// The carrier answered but could not track the number.
    Error,
}

/// Result of tracking one number with one carrier.
///
/// Immutable once constructed. `raw_body` holds the carrier's unmodified
/// response body for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingResult {
    /// Outcome of the call.
    status: TrackingResultStatus,
    /// The queried tracking number.
    tracking_number: String,
    /// Raw carrier response body.
    raw_body: String,
    /// Parsed tracking data, present on success.
    tracking: Option<Tracking>,
}

impl TrackingResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(
        tracking_number: impl Into<String>,
        raw_body: impl Into<String>,
        tracking: Tracking,
    ) -> Self {
        Self {
            status: TrackingResultStatus::Success,
            tracking_number: tracking_number.into(),
            raw_body: raw_body.into(),
            tracking: Some(tracking),
        }
    }

    /// Creates an error result carrying the carrier's response body.
    #[must_use]
    pub fn error(tracking_number: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self {
            status: TrackingResultStatus::Error,
            tracking_number: tracking_number.into(),
            raw_body: raw_body.into(),
            tracking: None,
        }
    }

    /// Creates the designated empty outcome: an error result with no body.
    ///
    /// Returned by the aggregation layer when no carrier produced any
    /// result at all for a number.
    #[must_use]
    pub fn not_found(tracking_number: impl Into<String>) -> Self {
        Self::error(tracking_number, "")
    }

    /// Returns the outcome status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> TrackingResultStatus {
        self.status
    }

    /// Returns true if the carrier returned tracking data.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == TrackingResultStatus::Success
    }

    /// Returns the queried tracking number.
    #[inline]
    #[must_use]
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    /// Returns the raw carrier response body.
    #[inline]
    #[must_use]
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// Returns the parsed tracking data.
    #[inline]
    #[must_use]
    pub fn tracking(&self) -> Option<&Tracking> {
        self.tracking.as_ref()
    }
}

/// Proof of delivery for one shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofOfDelivery {
    /// The tracking number the proof belongs to.
    tracking_number: String,
    /// Name of the person who signed, when reported.
    signed_by: Option<String>,
    /// When the signature was captured, when reported.
    signed_at: Option<DateTime<Utc>>,
    /// Raw carrier response body.
    raw_body: String,
}

impl ProofOfDelivery {
    /// Creates a proof of delivery.
    #[must_use]
    pub fn new(tracking_number: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            signed_by: None,
            signed_at: None,
            raw_body: raw_body.into(),
        }
    }

    /// Sets the signatory name.
    #[must_use]
    pub fn with_signed_by(mut self, name: impl Into<String>) -> Self {
        self.signed_by = Some(name.into());
        self
    }

    /// Sets the signature timestamp.
    #[must_use]
    pub fn with_signed_at(mut self, at: DateTime<Utc>) -> Self {
        self.signed_at = Some(at);
        self
    }

    /// Returns the tracking number.
    #[inline]
    #[must_use]
    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    /// Returns the signatory name.
    #[inline]
    #[must_use]
    pub fn signed_by(&self) -> Option<&str> {
        self.signed_by.as_deref()
    }

    /// Returns the signature timestamp.
    #[inline]
    #[must_use]
    pub fn signed_at(&self) -> Option<DateTime<Utc>> {
        self.signed_at
    }

    /// Returns the raw carrier response body.
    #[inline]
    #[must_use]
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn activity(status: ActivityStatus, secs: i64) -> TrackingActivity {
        TrackingActivity::new(
            status,
            "event",
            Utc.timestamp_opt(secs, 0).single().unwrap(),
            Address::location("Köln", "DE").unwrap(),
            "2024-03-01 10:00",
        )
    }

    #[test]
    fn latest_activity_ignores_feed_order() {
        let tracking = TrackingBuilder::new(Vendor::Dhl, "EXPRESS")
            .activity(activity(ActivityStatus::Delivered, 3000))
            .activity(activity(ActivityStatus::InTransit, 1000))
            .activity(activity(ActivityStatus::Notification, 2000))
            .build();

        let latest = tracking.latest_activity().unwrap();
        assert_eq!(latest.status(), ActivityStatus::Delivered);
        assert!(tracking.is_delivered());
    }

    #[test]
    fn empty_tracking_has_no_latest() {
        let tracking = TrackingBuilder::new(Vendor::Dpd, "CLASSIC").build();
        assert!(tracking.latest_activity().is_none());
        assert!(!tracking.is_delivered());
    }

    #[test]
    fn result_constructors() {
        let ok = TrackingResult::success(
            "123",
            "{}",
            TrackingBuilder::new(Vendor::Ups, "Ground").build(),
        );
        assert!(ok.is_success());
        assert!(ok.tracking().is_some());

        let err = TrackingResult::error("123", "<fault/>");
        assert!(!err.is_success());
        assert_eq!(err.raw_body(), "<fault/>");
        assert!(err.tracking().is_none());

        let missing = TrackingResult::not_found("123");
        assert_eq!(missing.status(), TrackingResultStatus::Error);
        assert_eq!(missing.raw_body(), "");
    }

    #[test]
    fn proof_of_delivery_builders() {
        let signed = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
        let pod = ProofOfDelivery::new("123", "<pod/>")
            .with_signed_by("J. Smith")
            .with_signed_at(signed);
        assert_eq!(pod.signed_by(), Some("J. Smith"));
        assert_eq!(pod.signed_at(), Some(signed));
    }
}
