//! # Mock Carrier
//!
//! A scriptable in-memory carrier for tests and local development.
//!
//! Every operation answers with a preconfigured result. Defaults are
//! benign: list operations return empty lists, cancellations return
//! `false`, and pickup/proof-of-delivery operations report themselves as
//! unsupported until scripted. An optional artificial delay makes the
//! adapter useful for exercising concurrent fan-out.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::entities::Quote;
//! use multiship::domain::value_objects::{Currency, Money, Vendor};
//! use multiship::infrastructure::carriers::MockCarrier;
//!
//! let carrier = MockCarrier::new(Vendor::Dhl).with_quotes(vec![Quote::new(
//!     Vendor::Dhl,
//!     "EXPRESS",
//!     Money::new(10_000, Currency::new("EUR").unwrap()),
//! )]);
//! ```

use crate::domain::entities::{
    CancelOptions, CancelPickupRequest, Pickup, PickupRequest, ProofOfDelivery, Quote,
    QuoteRequest, Shipment, ShipmentRequest, TrackingOptions, TrackingResult,
};
use crate::domain::value_objects::{Capability, CapabilitySet, Vendor};
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::traits::CarrierService;
use async_trait::async_trait;
use std::time::Duration;

/// A carrier whose responses are scripted at construction.
#[derive(Debug, Clone)]
pub struct MockCarrier {
    vendor: Vendor,
    capabilities: CapabilitySet,
    delay: Option<Duration>,
    quotes: CarrierResult<Vec<Quote>>,
    tracking: CarrierResult<Vec<TrackingResult>>,
    services: CarrierResult<Vec<String>>,
    proof_of_delivery: CarrierResult<ProofOfDelivery>,
    pickup: CarrierResult<Pickup>,
    cancel_pickup: CarrierResult<bool>,
    shipments: CarrierResult<Vec<Shipment>>,
    cancel_shipment: CarrierResult<bool>,
}

impl MockCarrier {
    /// Creates a mock with benign defaults for the given vendor identity.
    #[must_use]
    pub fn new(vendor: Vendor) -> Self {
        Self {
            vendor,
            capabilities: CapabilitySet::base(vendor),
            delay: None,
            quotes: Ok(Vec::new()),
            tracking: Ok(Vec::new()),
            services: Ok(Vec::new()),
            proof_of_delivery: Err(CarrierError::not_supported(vendor, "proof of delivery")),
            pickup: Err(CarrierError::not_supported(vendor, "pickup")),
            cancel_pickup: Err(CarrierError::not_supported(vendor, "pickup")),
            shipments: Ok(Vec::new()),
            cancel_shipment: Ok(false),
        }
    }

    /// Adds a capability tag.
    #[must_use]
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities = self.capabilities.with(capability);
        self
    }

    /// Adds an artificial delay before every answer.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Scripts the quote response.
    #[must_use]
    pub fn with_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.quotes = Ok(quotes);
        self
    }

    /// Scripts a quote failure.
    #[must_use]
    pub fn with_quote_error(mut self, error: CarrierError) -> Self {
        self.quotes = Err(error);
        self
    }

    /// Scripts the tracking response.
    #[must_use]
    pub fn with_tracking_results(mut self, results: Vec<TrackingResult>) -> Self {
        self.tracking = Ok(results);
        self
    }

    /// Scripts a tracking failure.
    #[must_use]
    pub fn with_tracking_error(mut self, error: CarrierError) -> Self {
        self.tracking = Err(error);
        self
    }

    /// Scripts the available-services response.
    #[must_use]
    pub fn with_services(mut self, services: Vec<String>) -> Self {
        self.services = Ok(services);
        self
    }

    /// Scripts the proof-of-delivery response and tags the capability.
    #[must_use]
    pub fn with_proof_of_delivery(mut self, proof: ProofOfDelivery) -> Self {
        self.proof_of_delivery = Ok(proof);
        self.capabilities = self.capabilities.with(Capability::ProofOfDelivery);
        self
    }

    /// Scripts the pickup response and tags the capability.
    #[must_use]
    pub fn with_pickup(mut self, pickup: Pickup) -> Self {
        self.pickup = Ok(pickup);
        self.cancel_pickup = Ok(true);
        self.capabilities = self.capabilities.with(Capability::Pickup);
        self
    }

    /// Scripts the shipment-creation response.
    #[must_use]
    pub fn with_shipments(mut self, shipments: Vec<Shipment>) -> Self {
        self.shipments = Ok(shipments);
        self
    }

    /// Scripts a shipment-creation failure.
    #[must_use]
    pub fn with_shipment_error(mut self, error: CarrierError) -> Self {
        self.shipments = Err(error);
        self
    }

    /// Scripts the shipment-cancellation response.
    #[must_use]
    pub fn with_cancel_shipment(mut self, confirmed: bool) -> Self {
        self.cancel_shipment = Ok(confirmed);
        self
    }

    /// Scripts a shipment-cancellation failure.
    #[must_use]
    pub fn with_cancel_shipment_error(mut self, error: CarrierError) -> Self {
        self.cancel_shipment = Err(error);
        self
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CarrierService for MockCarrier {
    fn vendor(&self) -> Vendor {
        self.vendor
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    async fn get_quotes(&self, _request: &QuoteRequest) -> CarrierResult<Vec<Quote>> {
        self.pause().await;
        self.quotes.clone()
    }

    async fn get_tracking_status(
        &self,
        _tracking_numbers: &[String],
        _options: &TrackingOptions,
    ) -> CarrierResult<Vec<TrackingResult>> {
        self.pause().await;
        self.tracking.clone()
    }

    async fn get_available_services(&self, _request: &QuoteRequest) -> CarrierResult<Vec<String>> {
        self.pause().await;
        self.services.clone()
    }

    async fn get_proof_of_delivery(
        &self,
        _tracking_number: &str,
    ) -> CarrierResult<ProofOfDelivery> {
        self.pause().await;
        self.proof_of_delivery.clone()
    }

    async fn create_pickup(&self, _request: &PickupRequest) -> CarrierResult<Pickup> {
        self.pause().await;
        self.pickup.clone()
    }

    async fn cancel_pickup(&self, _request: &CancelPickupRequest) -> CarrierResult<bool> {
        self.pause().await;
        self.cancel_pickup.clone()
    }

    async fn create_shipments(&self, _request: &ShipmentRequest) -> CarrierResult<Vec<Shipment>> {
        self.pause().await;
        self.shipments.clone()
    }

    async fn cancel_shipment(
        &self,
        _shipment_id: &str,
        _data: &CancelOptions,
    ) -> CarrierResult<bool> {
        self.pause().await;
        self.cancel_shipment.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Address;

    fn empty_quote_request() -> QuoteRequest {
        crate::domain::entities::QuoteRequestBuilder::new(
            Address::location("Stockholm", "SE").unwrap(),
            Address::location("Oslo", "NO").unwrap(),
        )
        .build()
    }

    #[tokio::test]
    async fn defaults_are_benign() {
        let carrier = MockCarrier::new(Vendor::Other);
        let request = empty_quote_request();

        assert!(carrier.get_quotes(&request).await.unwrap().is_empty());
        assert!(
            !carrier
                .cancel_shipment("S-1", &CancelOptions::new())
                .await
                .unwrap()
        );
        assert!(carrier.get_proof_of_delivery("123").await.is_err());
        assert!(!carrier.supports(Capability::Pickup));
    }

    #[tokio::test]
    async fn scripted_pickup_tags_capability() {
        let pickup = Pickup::new(
            "PU-1",
            Vendor::Dhl,
            chrono::Utc::now(),
            chrono::Utc::now() + chrono::Duration::hours(8),
        );
        let carrier = MockCarrier::new(Vendor::Dhl).with_pickup(pickup);

        assert!(carrier.supports(Capability::Pickup));
        let request = PickupRequest::new(
            Address::location("Stockholm", "SE").unwrap(),
            Vec::new(),
            chrono::Utc::now(),
            chrono::Utc::now() + chrono::Duration::hours(8),
        );
        let confirmed = carrier.create_pickup(&request).await.unwrap();
        assert_eq!(confirmed.confirmation_number(), "PU-1");
    }
}
