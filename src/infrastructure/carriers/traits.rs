//! # Carrier Service Trait
//!
//! Port definition for carrier integrations.
//!
//! This module defines the [`CarrierService`] trait that every carrier
//! integration implements. It is the uniform capability set the aggregation
//! layer depends on: quoting, tracking, shipment creation and cancellation,
//! pickup scheduling, and proof-of-delivery retrieval.
//!
//! # Examples
//!
//! ```ignore
//! use multiship::infrastructure::carriers::traits::CarrierService;
//!
//! // Implement CarrierService for your carrier
//! struct MyCarrier { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl CarrierService for MyCarrier {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{
    CancelOptions, CancelPickupRequest, Pickup, PickupRequest, ProofOfDelivery, Quote,
    QuoteRequest, Shipment, ShipmentRequest, TrackingOptions, TrackingResult,
};
use crate::domain::value_objects::{Capability, CapabilitySet, Vendor};
use crate::infrastructure::carriers::error::CarrierResult;
use async_trait::async_trait;
use std::fmt;

/// Trait defining the interface for carrier integrations.
///
/// All carrier integrations implement this trait so the aggregation layer
/// can treat DHL, FedEx, UPS, TNT, DPD, and mock carriers uniformly.
///
/// # Async Methods
///
/// All operations are async network round trips against the carrier's web
/// service. Implementations must be safe for concurrent invocation; the
/// aggregation layer calls them from spawned tasks without additional
/// synchronization.
///
/// # Error Handling
///
/// Methods return `CarrierResult<T>`. Implementations map vendor fault
/// documents to [`CarrierError::Vendor`] so the original messages and the
/// raw response body survive for diagnostics.
///
/// [`CarrierError::Vendor`]: crate::infrastructure::carriers::error::CarrierError::Vendor
#[async_trait]
pub trait CarrierService: Send + Sync + fmt::Debug {
    /// Returns the carrier's identity.
    fn vendor(&self) -> Vendor;

    /// Returns the capability tags fixed at adapter construction.
    fn capabilities(&self) -> &CapabilitySet;

    /// Returns true if the adapter carries the given capability tag.
    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// Requests rate quotes for a shipment.
    ///
    /// Returns one quote per available service level.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails or the carrier rejects it.
    async fn get_quotes(&self, request: &QuoteRequest) -> CarrierResult<Vec<Quote>>;

    /// Queries tracking status for a batch of tracking numbers.
    ///
    /// Returns one result per number, or several for multi-leg shipments.
    /// A number the carrier does not recognize yields an `Error`-status
    /// [`TrackingResult`], not an `Err`: only transport and protocol
    /// failures reject the whole call.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// on transport or protocol failure.
    async fn get_tracking_status(
        &self,
        tracking_numbers: &[String],
        options: &TrackingOptions,
    ) -> CarrierResult<Vec<TrackingResult>>;

    /// Lists the carrier's service names available for a shipment.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails or the carrier rejects it.
    async fn get_available_services(&self, request: &QuoteRequest) -> CarrierResult<Vec<String>>;

    /// Retrieves proof of delivery for a delivered shipment.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails, the carrier rejects it, or the adapter does
    /// not support the operation.
    async fn get_proof_of_delivery(&self, tracking_number: &str)
    -> CarrierResult<ProofOfDelivery>;

    /// Schedules a courier pickup.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails, the carrier rejects it, or the adapter does
    /// not support the operation.
    async fn create_pickup(&self, request: &PickupRequest) -> CarrierResult<Pickup>;

    /// Cancels a scheduled pickup.
    ///
    /// Returns true if the carrier confirmed the cancellation.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails, the carrier rejects it, or the adapter does
    /// not support the operation.
    async fn cancel_pickup(&self, request: &CancelPickupRequest) -> CarrierResult<bool>;

    /// Creates a shipment and produces labels.
    ///
    /// Carriers that register each parcel separately return one shipment
    /// per parcel.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails or the carrier rejects it.
    async fn create_shipments(&self, request: &ShipmentRequest) -> CarrierResult<Vec<Shipment>>;

    /// Cancels a shipment by its carrier-assigned identifier.
    ///
    /// Returns true if the carrier confirmed the cancellation.
    ///
    /// # Errors
    ///
    /// Returns a [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
    /// if the request fails or the carrier rejects it.
    async fn cancel_shipment(&self, shipment_id: &str, data: &CancelOptions)
    -> CarrierResult<bool>;
}
