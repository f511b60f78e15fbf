//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the core enumerations of the shipping domain:
//!
//! - [`Vendor`] - Carrier identity (DHL, FedEx, UPS, TNT, DPD)
//! - [`Capability`] - Tags describing what an adapter can do
//! - [`CapabilitySet`] - The tag set attached to an adapter at construction
//! - [`LabelFormat`] - Shipping label file formats
//!
//! Capability tags replace runtime type inspection: a composite filters its
//! delegates by intersecting a requested tag list with each adapter's set,
//! so "every DHL implementation" and "everything that supports pickup" are
//! both expressible as tag queries.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Identity of a shipping carrier.
///
/// # Examples
///
/// ```
/// use multiship::domain::value_objects::Vendor;
///
/// assert_eq!(Vendor::Dhl.to_string(), "DHL");
/// assert_eq!("fedex".parse::<Vendor>().unwrap(), Vendor::Fedex);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vendor {
    /// DHL Express.
    Dhl,
    /// FedEx.
    Fedex,
    /// United Parcel Service.
    Ups,
    /// TNT Express.
    Tnt,
    /// DPD.
    Dpd,
    /// A carrier outside the built-in set, including mock adapters.
    Other,
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dhl => "DHL",
            Self::Fedex => "FEDEX",
            Self::Ups => "UPS",
            Self::Tnt => "TNT",
            Self::Dpd => "DPD",
            Self::Other => "OTHER",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Vendor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DHL" => Ok(Self::Dhl),
            "FEDEX" => Ok(Self::Fedex),
            "UPS" => Ok(Self::Ups),
            "TNT" => Ok(Self::Tnt),
            "DPD" => Ok(Self::Dpd),
            "OTHER" => Ok(Self::Other),
            other => Err(DomainError::validation(format!("unknown vendor: {other}"))),
        }
    }
}

/// A capability tag attached to a carrier adapter.
///
/// Tags come in two kinds: interface-level tags (`Carrier`, `Pickup`,
/// `ProofOfDelivery`) describing what the adapter can do, and concrete
/// identity tags (`Vendor(...)`) naming which carrier implementation it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Implements the base carrier interface. Every adapter carries this.
    Carrier,
    /// Supports pickup scheduling and cancellation.
    Pickup,
    /// Supports proof-of-delivery retrieval.
    ProofOfDelivery,
    /// Is a concrete implementation for the given vendor.
    Vendor(Vendor),
}

/// The capability tags of one adapter, fixed at construction.
///
/// # Examples
///
/// ```
/// use multiship::domain::value_objects::{Capability, CapabilitySet, Vendor};
///
/// let caps = CapabilitySet::base(Vendor::Dhl).with(Capability::Pickup);
///
/// assert!(caps.contains(Capability::Carrier));
/// assert!(caps.intersects(&[Capability::Pickup, Capability::ProofOfDelivery]));
/// assert!(!caps.contains(Capability::Vendor(Vendor::Ups)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    tags: HashSet<Capability>,
}

impl CapabilitySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the baseline set every adapter starts from: the base carrier
    /// tag plus the adapter's vendor identity tag.
    #[must_use]
    pub fn base(vendor: Vendor) -> Self {
        let mut tags = HashSet::new();
        tags.insert(Capability::Carrier);
        tags.insert(Capability::Vendor(vendor));
        Self { tags }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with(mut self, capability: Capability) -> Self {
        self.tags.insert(capability);
        self
    }

    /// Returns true if the set contains the tag.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.tags.contains(&capability)
    }

    /// Returns true if the set contains at least one of the given tags.
    #[must_use]
    pub fn intersects(&self, capabilities: &[Capability]) -> bool {
        capabilities.iter().any(|c| self.tags.contains(c))
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns an iterator over the tags.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.tags.iter()
    }
}

/// File format of a shipping label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LabelFormat {
    /// PDF document.
    Pdf,
    /// PNG image.
    Png,
    /// Zebra Programming Language, for thermal printers.
    Zpl,
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pdf => "PDF",
            Self::Png => "PNG",
            Self::Zpl => "ZPL",
        };
        write!(f, "{s}")
    }
}
