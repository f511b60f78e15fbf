//! # Carrier Infrastructure
//!
//! The port the aggregation layer depends on and the shared plumbing for
//! implementing it.
//!
//! - [`traits::CarrierService`]: the capability set every carrier
//!   integration implements
//! - [`error::CarrierError`]: failures while talking to a carrier
//! - [`http_client::HttpClient`]: shared HTTP transport for adapters
//! - [`mock::MockCarrier`]: scriptable in-memory carrier
//!
//! Concrete vendor adapters (DHL, FedEx, UPS, TNT, DPD) live in their own
//! crates and plug in through [`traits::CarrierService`]; this crate ships
//! only the port, the transport, and the mock.

pub mod error;
pub mod http_client;
pub mod mock;
pub mod traits;

pub use error::{CarrierError, CarrierResult};
pub use http_client::HttpClient;
pub use mock::MockCarrier;
pub use traits::CarrierService;
