//! # Domain Entities
//!
//! The nouns of the shipping domain: what you ask a carrier for and what it
//! answers with.
//!
//! - Requests: [`QuoteRequest`], [`ShipmentRequest`], [`PickupRequest`],
//!   [`CancelPickupRequest`]
//! - Responses: [`Quote`], [`Shipment`], [`Pickup`], [`Tracking`],
//!   [`TrackingResult`], [`ProofOfDelivery`]

pub mod pickup;
pub mod quote;
pub mod requests;
pub mod shipment;
pub mod tracking;

pub use pickup::{CancelPickupRequest, Pickup, PickupRequest};
pub use quote::Quote;
pub use requests::{
    CancelOptions, QuoteRequest, QuoteRequestBuilder, ShipmentRequest, TrackingOptions,
};
pub use shipment::Shipment;
pub use tracking::{
    ActivityStatus, ProofOfDelivery, Tracking, TrackingActivity, TrackingBuilder, TrackingResult,
    TrackingResultStatus,
};
