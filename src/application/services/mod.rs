//! # Application Services
//!
//! The multi-carrier aggregation layer.
//!
//! Both composites share the same concurrency contract: fan out one call
//! per delegate, settle every call (never fail fast, never cancel
//! siblings), and combine outcomes in carrier-configuration order.
//! Individual delegate failures are swallowed by design — availability
//! over completeness — and surface only in the logs.
//!
//! - [`CompositeTracker`]: track one number across all carriers, pick the
//!   best answer
//! - [`CompositeService`]: aggregate quotes, services, and shipment calls;
//!   narrow by capability with `with_only`

pub mod composite_service;
pub mod composite_tracker;

pub use composite_service::CompositeService;
pub use composite_tracker::CompositeTracker;
