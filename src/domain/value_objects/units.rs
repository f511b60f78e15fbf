//! # Measurement Value Objects
//!
//! Length and mass with unit conversion.
//!
//! Carrier APIs disagree on units: DHL takes centimeters and kilograms, the
//! US carriers take inches and pounds. [`Length`] and [`Mass`] store a
//! canonical value (millimeters, grams) and convert on read so adapters can
//! request whichever unit their wire format needs.
//!
//! # Examples
//!
//! ```
//! use multiship::domain::value_objects::{Length, LengthUnit, Mass, MassUnit};
//!
//! let height = Length::new(30.0, LengthUnit::Centimeter).unwrap();
//! assert!((height.value_in(LengthUnit::Millimeter) - 300.0).abs() < 1e-9);
//!
//! let weight = Mass::new(2.0, MassUnit::Kilogram).unwrap();
//! assert!((weight.value_in(MassUnit::Gram) - 2000.0).abs() < 1e-9);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Units of length accepted by carrier APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeter.
    Millimeter,
    /// Centimeter.
    Centimeter,
    /// Meter.
    Meter,
    /// Inch.
    Inch,
    /// Foot.
    Foot,
}

impl LengthUnit {
    /// Millimeters in one unit.
    #[must_use]
    pub const fn millimeters(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
            Self::Inch => 25.4,
            Self::Foot => 304.8,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
        };
        write!(f, "{s}")
    }
}

impl FromStr for LengthUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" => Ok(Self::Millimeter),
            "cm" => Ok(Self::Centimeter),
            "m" => Ok(Self::Meter),
            "in" => Ok(Self::Inch),
            "ft" => Ok(Self::Foot),
            other => Err(DomainError::validation(format!(
                "unknown length unit: {other}"
            ))),
        }
    }
}

/// Units of mass accepted by carrier APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    /// Gram.
    Gram,
    /// Kilogram.
    Kilogram,
    /// Ounce.
    Ounce,
    /// Pound.
    Pound,
}

impl MassUnit {
    /// Grams in one unit.
    #[must_use]
    pub const fn grams(self) -> f64 {
        match self {
            Self::Gram => 1.0,
            Self::Kilogram => 1000.0,
            Self::Ounce => 28.349_523_125,
            Self::Pound => 453.592_37,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Ounce => "oz",
            Self::Pound => "lb",
        };
        write!(f, "{s}")
    }
}

impl FromStr for MassUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(Self::Gram),
            "kg" => Ok(Self::Kilogram),
            "oz" => Ok(Self::Ounce),
            "lb" => Ok(Self::Pound),
            other => Err(DomainError::validation(format!(
                "unknown mass unit: {other}"
            ))),
        }
    }
}

/// A non-negative length, stored canonically in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Length {
    millimeters: f64,
}

impl Length {
    /// Creates a length from a value in the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the value is negative or not
    /// finite.
    pub fn new(value: f64, unit: LengthUnit) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(format!(
                "length must be a non-negative finite number, got {value}"
            )));
        }
        Ok(Self {
            millimeters: value * unit.millimeters(),
        })
    }

    /// Returns the length converted to the given unit.
    #[must_use]
    pub fn value_in(&self, unit: LengthUnit) -> f64 {
        self.millimeters / unit.millimeters()
    }

    /// Returns the length in millimeters.
    #[inline]
    #[must_use]
    pub fn millimeters(&self) -> f64 {
        self.millimeters
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mm", self.millimeters)
    }
}

/// A non-negative mass, stored canonically in grams.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Mass {
    grams: f64,
}

impl Mass {
    /// Creates a mass from a value in the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] if the value is negative or not
    /// finite.
    pub fn new(value: f64, unit: MassUnit) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(format!(
                "mass must be a non-negative finite number, got {value}"
            )));
        }
        Ok(Self {
            grams: value * unit.grams(),
        })
    }

    /// Returns the mass converted to the given unit.
    #[must_use]
    pub fn value_in(&self, unit: MassUnit) -> f64 {
        self.grams / unit.grams()
    }

    /// Returns the mass in grams.
    #[inline]
    #[must_use]
    pub fn grams(&self) -> f64 {
        self.grams
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} g", self.grams)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn length_round_trips_units() {
        let l = Length::new(12.0, LengthUnit::Inch).unwrap();
        assert!(close(l.millimeters(), 304.8));
        assert!(close(l.value_in(LengthUnit::Foot), 1.0));
        assert!(close(l.value_in(LengthUnit::Centimeter), 30.48));
    }

    #[test]
    fn mass_round_trips_units() {
        let m = Mass::new(1.0, MassUnit::Pound).unwrap();
        assert!(close(m.grams(), 453.592_37));
        assert!(close(m.value_in(MassUnit::Ounce), 16.0));
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(Length::new(-1.0, LengthUnit::Meter).is_err());
        assert!(Length::new(f64::NAN, LengthUnit::Meter).is_err());
        assert!(Mass::new(-0.1, MassUnit::Gram).is_err());
        assert!(Mass::new(f64::INFINITY, MassUnit::Kilogram).is_err());
    }

    #[test]
    fn unit_parsing() {
        assert_eq!("cm".parse::<LengthUnit>().unwrap(), LengthUnit::Centimeter);
        assert_eq!("LB".parse::<MassUnit>().unwrap(), MassUnit::Pound);
        assert!("furlong".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn display() {
        let l = Length::new(1.0, LengthUnit::Centimeter).unwrap();
        assert_eq!(l.to_string(), "10.0 mm");
        assert_eq!(LengthUnit::Inch.to_string(), "in");
        assert_eq!(MassUnit::Kilogram.to_string(), "kg");
    }
}
