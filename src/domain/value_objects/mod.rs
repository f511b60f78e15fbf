//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity & Classification
//!
//! - [`Vendor`]: carrier identity
//! - [`Capability`], [`CapabilitySet`]: adapter capability tags
//!
//! ## Measurements
//!
//! - [`Money`], [`Currency`]: minor-unit amounts with currency tagging
//! - [`Length`], [`Mass`]: dimensions and weights with unit conversion
//!
//! ## Composite Values
//!
//! - [`Address`]: postal address with optional contact details
//! - [`Parcel`]: package dimensions and weight

pub mod address;
pub mod enums;
pub mod money;
pub mod parcel;
pub mod units;

pub use address::Address;
pub use enums::{Capability, CapabilitySet, LabelFormat, Vendor};
pub use money::{Currency, Money};
pub use parcel::Parcel;
pub use units::{Length, LengthUnit, Mass, MassUnit};
