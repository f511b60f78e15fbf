//! # Composite Service
//!
//! Aggregates quoting, shipment, and service-discovery calls over a set of
//! carriers.
//!
//! Every aggregate operation fans out one concurrent call per delegate and
//! settles all of them before combining results — a slow or failing
//! carrier never blocks or poisons the rest. Fulfilled results are
//! flattened in carrier-configuration order, never arrival order; rejected
//! delegates are dropped silently from the combination and surface only as
//! warn-level log events.
//!
//! [`CompositeService::with_only`] derives a narrowed composite from the
//! receiver by intersecting each delegate's capability tags with a
//! requested set, preserving relative order.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use multiship::application::services::CompositeService;
//! use multiship::domain::value_objects::{Capability, Vendor};
//! use multiship::infrastructure::carriers::{CarrierService, MockCarrier};
//!
//! let carriers: Vec<Arc<dyn CarrierService>> = vec![
//!     Arc::new(MockCarrier::new(Vendor::Dhl)),
//!     Arc::new(MockCarrier::new(Vendor::Ups)),
//! ];
//! let composite = CompositeService::new(carriers);
//!
//! let dhl_only = composite.with_only(&[Capability::Vendor(Vendor::Dhl)]);
//! assert_eq!(dhl_only.carriers().len(), 1);
//! ```

use crate::domain::entities::{CancelOptions, Quote, QuoteRequest, Shipment, ShipmentRequest};
use crate::domain::value_objects::{Capability, Vendor};
use crate::infrastructure::carriers::{CarrierResult, CarrierService};
use futures::future::join_all;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Fans aggregate operations out to a fixed, ordered set of carriers.
///
/// Holds only carrier references, fixed at construction; no
/// carrier-specific state.
#[derive(Debug, Clone)]
pub struct CompositeService {
    carriers: Vec<Arc<dyn CarrierService>>,
}

impl CompositeService {
    /// Creates a composite over the given carriers.
    ///
    /// The order given here is the result-flattening order.
    #[must_use]
    pub fn new(carriers: Vec<Arc<dyn CarrierService>>) -> Self {
        Self { carriers }
    }

    /// Returns the configured carriers in order.
    #[inline]
    #[must_use]
    pub fn carriers(&self) -> &[Arc<dyn CarrierService>] {
        &self.carriers
    }

    /// Returns the number of configured carriers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    /// Returns true if no carriers are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    /// Returns a new composite keeping only delegates that carry at least
    /// one of the given capability tags.
    ///
    /// Relative order of surviving delegates is preserved; the receiver is
    /// not mutated. Narrowing to `[Capability::Carrier]` keeps everything;
    /// narrowing to a vendor tag keeps that vendor's implementations.
    #[must_use]
    pub fn with_only(&self, capabilities: &[Capability]) -> Self {
        Self {
            carriers: self
                .carriers
                .iter()
                .filter(|carrier| carrier.capabilities().intersects(capabilities))
                .cloned()
                .collect(),
        }
    }

    /// Collects rate quotes from every delegate.
    ///
    /// Fans out concurrently, settles all calls, and flattens the
    /// fulfilled quote lists in configuration order. Rejected delegates
    /// contribute nothing; a total failure yields an empty list.
    pub async fn get_quotes(&self, request: &QuoteRequest) -> Vec<Quote> {
        debug!(carriers = self.carriers.len(), "fanning out quote request");
        let handles = self
            .carriers
            .iter()
            .map(|carrier| {
                let carrier = Arc::clone(carrier);
                let request = request.clone();
                tokio::spawn(async move { carrier.get_quotes(&request).await })
            })
            .collect();
        self.settle_flatten(handles, "quote").await
    }

    /// Collects available service names from every delegate.
    ///
    /// Same settle-and-flatten policy as [`CompositeService::get_quotes`].
    pub async fn get_available_services(&self, request: &QuoteRequest) -> Vec<String> {
        let handles = self
            .carriers
            .iter()
            .map(|carrier| {
                let carrier = Arc::clone(carrier);
                let request = request.clone();
                tokio::spawn(async move { carrier.get_available_services(&request).await })
            })
            .collect();
        self.settle_flatten(handles, "service discovery").await
    }

    /// Creates shipments with every delegate.
    ///
    /// Same settle-and-flatten policy as [`CompositeService::get_quotes`].
    /// Narrow the composite with [`CompositeService::with_only`] first to
    /// book with a single carrier.
    pub async fn create_shipments(&self, request: &ShipmentRequest) -> Vec<Shipment> {
        let handles = self
            .carriers
            .iter()
            .map(|carrier| {
                let carrier = Arc::clone(carrier);
                let request = request.clone();
                tokio::spawn(async move { carrier.create_shipments(&request).await })
            })
            .collect();
        self.settle_flatten(handles, "shipment creation").await
    }

    /// Cancels a shipment with every delegate.
    ///
    /// Returns true if at least one delegate confirmed the cancellation.
    /// Rejected delegates count as unconfirmed.
    pub async fn cancel_shipment(&self, shipment_id: &str, data: &CancelOptions) -> bool {
        let handles: Vec<JoinHandle<CarrierResult<bool>>> = self
            .carriers
            .iter()
            .map(|carrier| {
                let carrier = Arc::clone(carrier);
                let id = shipment_id.to_owned();
                let data = data.clone();
                tokio::spawn(async move { carrier.cancel_shipment(&id, &data).await })
            })
            .collect();

        let mut confirmed = false;
        for (outcome, vendor) in join_all(handles).await.into_iter().zip(self.vendors()) {
            match outcome {
                Ok(Ok(ok)) => confirmed = confirmed || ok,
                Ok(Err(error)) => {
                    warn!(%vendor, %error, "carrier cancellation call failed, treated as unconfirmed");
                }
                Err(error) => {
                    warn!(%vendor, %error, "carrier cancellation task failed, treated as unconfirmed");
                }
            }
        }
        confirmed
    }

    /// Settles every handle and flattens the fulfilled lists in
    /// configuration order, dropping rejections.
    async fn settle_flatten<T: Send + 'static>(
        &self,
        handles: Vec<JoinHandle<CarrierResult<Vec<T>>>>,
        operation: &str,
    ) -> Vec<T> {
        let mut combined = Vec::new();
        for (outcome, vendor) in join_all(handles).await.into_iter().zip(self.vendors()) {
            match outcome {
                Ok(Ok(items)) => combined.extend(items),
                Ok(Err(error)) => {
                    warn!(%vendor, %error, "carrier {operation} call failed, dropped from aggregate");
                }
                Err(error) => {
                    warn!(%vendor, %error, "carrier {operation} task failed, dropped from aggregate");
                }
            }
        }
        combined
    }

    fn vendors(&self) -> impl Iterator<Item = Vendor> + '_ {
        self.carriers.iter().map(|carrier| carrier.vendor())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::QuoteRequestBuilder;
    use crate::domain::value_objects::{Address, Currency, LabelFormat, Money};
    use crate::infrastructure::carriers::{CarrierError, MockCarrier};

    fn quote(vendor: Vendor, service: &str, minor: i64) -> Quote {
        Quote::new(
            vendor,
            service,
            Money::new(minor, Currency::new("EUR").unwrap()),
        )
    }

    fn test_request() -> QuoteRequest {
        QuoteRequestBuilder::new(
            Address::location("Stockholm", "SE").unwrap(),
            Address::location("Oslo", "NO").unwrap(),
        )
        .build()
    }

    #[tokio::test]
    async fn quotes_flatten_in_configuration_order_and_drop_rejections() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(
                MockCarrier::new(Vendor::Dhl).with_quotes(vec![quote(Vendor::Dhl, "EXPRESS", 100)]),
            ),
            Arc::new(
                MockCarrier::new(Vendor::Ups)
                    .with_quote_error(CarrierError::connection("refused")),
            ),
            Arc::new(
                MockCarrier::new(Vendor::Tnt).with_quotes(vec![quote(Vendor::Tnt, "ECONOMY", 90)]),
            ),
        ];

        let composite = CompositeService::new(carriers);
        let quotes = composite.get_quotes(&test_request()).await;

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.first().unwrap().vendor(), Vendor::Dhl);
        assert_eq!(quotes.get(1).unwrap().vendor(), Vendor::Tnt);
    }

    #[tokio::test]
    async fn total_quote_failure_yields_empty_list() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(
                MockCarrier::new(Vendor::Dhl).with_quote_error(CarrierError::timeout("slow")),
            ),
            Arc::new(
                MockCarrier::new(Vendor::Ups)
                    .with_quote_error(CarrierError::authentication("bad key")),
            ),
        ];

        let composite = CompositeService::new(carriers);
        assert!(composite.get_quotes(&test_request()).await.is_empty());
    }

    #[tokio::test]
    async fn multi_quote_carriers_keep_within_list_order() {
        let carriers: Vec<Arc<dyn CarrierService>> =
            vec![Arc::new(MockCarrier::new(Vendor::Dhl).with_quotes(vec![
                quote(Vendor::Dhl, "EXPRESS", 100),
                quote(Vendor::Dhl, "ECONOMY", 60),
            ]))];

        let composite = CompositeService::new(carriers);
        let quotes = composite.get_quotes(&test_request()).await;

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes.first().unwrap().service(), "EXPRESS");
        assert_eq!(quotes.get(1).unwrap().service(), "ECONOMY");
    }

    #[tokio::test]
    async fn with_only_filters_by_vendor_tag() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(MockCarrier::new(Vendor::Dhl)),
            Arc::new(MockCarrier::new(Vendor::Ups)),
        ];
        let composite = CompositeService::new(carriers);

        let dhl_only = composite.with_only(&[Capability::Vendor(Vendor::Dhl)]);
        assert_eq!(dhl_only.len(), 1);
        assert_eq!(dhl_only.carriers().first().unwrap().vendor(), Vendor::Dhl);

        // The receiver is untouched.
        assert_eq!(composite.len(), 2);
    }

    #[tokio::test]
    async fn with_only_base_tag_keeps_everything_in_order() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(MockCarrier::new(Vendor::Dhl)),
            Arc::new(MockCarrier::new(Vendor::Ups)),
        ];
        let composite = CompositeService::new(carriers);

        let all = composite.with_only(&[Capability::Carrier]);
        assert_eq!(all.len(), 2);
        assert_eq!(all.carriers().first().unwrap().vendor(), Vendor::Dhl);
        assert_eq!(all.carriers().get(1).unwrap().vendor(), Vendor::Ups);
    }

    #[tokio::test]
    async fn with_only_pickup_capability() {
        let pickup = crate::domain::entities::Pickup::new(
            "PU-1",
            Vendor::Dhl,
            chrono::Utc::now(),
            chrono::Utc::now() + chrono::Duration::hours(4),
        );
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(MockCarrier::new(Vendor::Dhl).with_pickup(pickup)),
            Arc::new(MockCarrier::new(Vendor::Dpd)),
        ];
        let composite = CompositeService::new(carriers);

        let pickup_capable = composite.with_only(&[Capability::Pickup]);
        assert_eq!(pickup_capable.len(), 1);
        assert_eq!(
            pickup_capable.carriers().first().unwrap().vendor(),
            Vendor::Dhl
        );
    }

    #[tokio::test]
    async fn available_services_flatten() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(
                MockCarrier::new(Vendor::Dhl)
                    .with_services(vec!["EXPRESS".to_string(), "ECONOMY".to_string()]),
            ),
            Arc::new(MockCarrier::new(Vendor::Ups).with_services(vec!["GROUND".to_string()])),
        ];

        let composite = CompositeService::new(carriers);
        let services = composite.get_available_services(&test_request()).await;
        assert_eq!(services, vec!["EXPRESS", "ECONOMY", "GROUND"]);
    }

    #[tokio::test]
    async fn create_shipments_flattens_and_drops_rejections() {
        let shipment = Shipment::new(
            "S-1",
            Vendor::Dhl,
            "EXPRESS",
            vec!["123".to_string()],
            Vec::new(),
            LabelFormat::Pdf,
        );
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(MockCarrier::new(Vendor::Dhl).with_shipments(vec![shipment])),
            Arc::new(
                MockCarrier::new(Vendor::Ups)
                    .with_shipment_error(CarrierError::invalid_request("missing account")),
            ),
        ];

        let composite = CompositeService::new(carriers);
        let request = ShipmentRequest::new(
            Address::location("Stockholm", "SE").unwrap(),
            Address::location("Oslo", "NO").unwrap(),
            Vec::new(),
            "EXPRESS",
        );
        let shipments = composite.create_shipments(&request).await;

        assert_eq!(shipments.len(), 1);
        assert_eq!(shipments.first().unwrap().id(), "S-1");
    }

    #[tokio::test]
    async fn cancel_shipment_is_true_when_any_delegate_confirms() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(
                MockCarrier::new(Vendor::Dhl)
                    .with_cancel_shipment_error(CarrierError::timeout("slow")),
            ),
            Arc::new(MockCarrier::new(Vendor::Ups).with_cancel_shipment(true)),
        ];

        let composite = CompositeService::new(carriers);
        assert!(
            composite
                .cancel_shipment("S-1", &CancelOptions::new())
                .await
        );
    }

    #[tokio::test]
    async fn cancel_shipment_is_false_when_no_delegate_confirms() {
        let carriers: Vec<Arc<dyn CarrierService>> = vec![
            Arc::new(MockCarrier::new(Vendor::Dhl)),
            Arc::new(
                MockCarrier::new(Vendor::Ups)
                    .with_cancel_shipment_error(CarrierError::connection("refused")),
            ),
        ];

        let composite = CompositeService::new(carriers);
        assert!(
            !composite
                .cancel_shipment("S-1", &CancelOptions::new())
                .await
        );
    }

    #[tokio::test]
    async fn empty_composite_aggregates_to_empty() {
        let composite = CompositeService::new(Vec::new());
        assert!(composite.is_empty());
        assert!(composite.get_quotes(&test_request()).await.is_empty());
        assert!(
            !composite
                .cancel_shipment("S-1", &CancelOptions::new())
                .await
        );
    }
}
