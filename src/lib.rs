//! # Multiship
//!
//! Unified async client library for shipping-carrier web services.
//!
//! Carrier APIs (DHL, FedEx, UPS, TNT, DPD) expose the same ideas — rate
//! quotes, labels, tracking, pickups, proof of delivery — behind mutually
//! incompatible SOAP/XML and REST/JSON surfaces. Multiship defines one
//! capability interface for all of them and layers a multi-carrier
//! aggregation facade on top, so an application can ask "what does shipping
//! this cost, everywhere?" or "who knows this tracking number?" as a single
//! call.
//!
//! ## Architecture
//!
//! - [`domain`]: carrier-agnostic value objects, entities, and the
//!   location/timezone matching services
//! - [`application`]: the composite aggregation services — concurrent
//!   fan-out over N carriers with settle-all partial-failure tolerance
//! - [`infrastructure`]: the [`CarrierService`] port, shared HTTP
//!   transport, the mock carrier, configuration, and logging
//!
//! Concrete vendor adapters live outside this crate and plug in through
//! the [`CarrierService`] trait.
//!
//! ## Aggregation Contract
//!
//! Every aggregate operation fans out one concurrent call per configured
//! carrier and settles all of them — it never fails fast and never cancels
//! a sibling because another carrier errored. Results combine in
//! carrier-configuration order. Individual carrier failures are swallowed
//! (warn-level logs only): aggregate calls resolve to an empty list or a
//! designated not-found outcome rather than rejecting, trading
//! completeness for availability.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use multiship::application::services::CompositeService;
//! use multiship::domain::entities::{Quote, QuoteRequestBuilder};
//! use multiship::domain::value_objects::{Address, Currency, Money, Vendor};
//! use multiship::infrastructure::carriers::{CarrierService, MockCarrier};
//!
//! let carriers: Vec<Arc<dyn CarrierService>> = vec![
//!     Arc::new(MockCarrier::new(Vendor::Dhl).with_quotes(vec![Quote::new(
//!         Vendor::Dhl,
//!         "EXPRESS",
//!         Money::new(45_900, Currency::new("EUR").unwrap()),
//!     )])),
//!     Arc::new(MockCarrier::new(Vendor::Ups)),
//! ];
//! let composite = CompositeService::new(carriers);
//!
//! let request = QuoteRequestBuilder::new(
//!     Address::location("Stockholm", "SE").unwrap(),
//!     Address::location("Oslo", "NO").unwrap(),
//! )
//! .build();
//!
//! let quotes = tokio_test::block_on(composite.get_quotes(&request));
//! assert_eq!(quotes.len(), 1);
//! ```
//!
//! ## Timezone Resolution
//!
//! Tracking feeds timestamp events in local time and name locations as
//! free text. [`domain::services::timezone::TimezoneResolver`] maps that
//! text to an IANA timezone identifier over a precomputed table, with an
//! exact-match fast path and length-adaptive fuzzy fallback:
//!
//! ```
//! use multiship::domain::services::timezone::{TimezoneMap, TimezoneResolver};
//!
//! let mut map = TimezoneMap::new();
//! map.insert("SE", "Stockholm", "Europe/Stockholm");
//!
//! let resolver = TimezoneResolver::new(map);
//! let hit = resolver.find("STOCKHOLM TERMINAL", "SE").unwrap();
//! assert_eq!(hit.timezone(), "Europe/Stockholm");
//! ```
//!
//! [`CarrierService`]: infrastructure::carriers::CarrierService

pub mod application;
pub mod domain;
pub mod infrastructure;
