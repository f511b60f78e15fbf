//! # Parcel Value Object
//!
//! Physical package dimensions and weight.

use crate::domain::value_objects::{Length, LengthUnit, Mass, MassUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical parcel: three dimensions and a weight.
///
/// # Examples
///
/// ```
/// use multiship::domain::value_objects::{Length, LengthUnit, Mass, MassUnit, Parcel};
///
/// let parcel = Parcel::new(
///     Length::new(30.0, LengthUnit::Centimeter).unwrap(),
///     Length::new(20.0, LengthUnit::Centimeter).unwrap(),
///     Length::new(10.0, LengthUnit::Centimeter).unwrap(),
///     Mass::new(1.5, MassUnit::Kilogram).unwrap(),
/// );
///
/// assert!((parcel.weight().value_in(MassUnit::Gram) - 1500.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// Longest dimension.
    length: Length,
    /// Second dimension.
    width: Length,
    /// Third dimension.
    height: Length,
    /// Gross weight.
    weight: Mass,
}

impl Parcel {
    /// Creates a parcel.
    #[must_use]
    pub fn new(length: Length, width: Length, height: Length, weight: Mass) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }

    /// Returns the length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    /// Returns the height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    /// Returns the gross weight.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> Mass {
        self.weight
    }

    /// Returns the volume in cubic centimeters.
    ///
    /// Carriers price oversized parcels by dimensional weight, which is
    /// derived from this volume.
    #[must_use]
    pub fn volume_cm3(&self) -> f64 {
        self.length.value_in(LengthUnit::Centimeter)
            * self.width.value_in(LengthUnit::Centimeter)
            * self.height.value_in(LengthUnit::Centimeter)
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}x{:.0}x{:.0} cm, {:.2} kg",
            self.length.value_in(LengthUnit::Centimeter),
            self.width.value_in(LengthUnit::Centimeter),
            self.height.value_in(LengthUnit::Centimeter),
            self.weight.value_in(MassUnit::Kilogram),
        )
    }
}
