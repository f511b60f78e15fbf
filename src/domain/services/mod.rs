//! # Domain Services
//!
//! Stateless domain logic that does not belong to a single entity.
//!
//! - [`location`]: place-name normalization and string similarity
//! - [`timezone`]: free-text location to IANA timezone resolution

pub mod location;
pub mod timezone;

pub use timezone::{TimezoneMap, TimezoneResolver, TimezoneResult};
