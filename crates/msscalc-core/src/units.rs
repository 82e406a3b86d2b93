//! Unit converter.
//!
//! Canonical units are meters and centimeters for length and kilograms for
//! mass. The inch factors differ on purpose: inches to meters divides by
//! 39.37 while inches to centimeters multiplies by the exact 2.54. Unifying
//! them changes computed BMI values, so both are kept as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::numeric::parse_numeric;

const INCHES_PER_METER: f64 = 39.37;
const CENTIMETERS_PER_INCH: f64 = 2.54;
const CENTIMETERS_PER_METER: f64 = 100.0;
/// NIST pound–kilogram factor (Federal Register doc. 59-5442).
const KILOGRAMS_PER_POUND: f64 = 0.45359237;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "m")]
    Meters,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MassUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lbs")]
    Pounds,
}

impl LengthUnit {
    pub fn tag(self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "cm",
            LengthUnit::Inches => "in",
            LengthUnit::Meters => "m",
        }
    }
}

impl MassUnit {
    pub fn tag(self) -> &'static str {
        match self {
            MassUnit::Kilograms => "kg",
            MassUnit::Pounds => "lbs",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(LengthUnit::Centimeters),
            "in" => Ok(LengthUnit::Inches),
            "m" => Ok(LengthUnit::Meters),
            other => Err(CoreError::UnsupportedUnit {
                quantity: "length",
                tag: other.to_string(),
            }),
        }
    }
}

impl FromStr for MassUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(MassUnit::Kilograms),
            "lbs" => Ok(MassUnit::Pounds),
            other => Err(CoreError::UnsupportedUnit {
                quantity: "mass",
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Convert a length into meters. Returns `None` for non-finite input.
pub fn to_meters(value: f64, unit: LengthUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        LengthUnit::Meters => value,
        LengthUnit::Centimeters => value / CENTIMETERS_PER_METER,
        LengthUnit::Inches => value / INCHES_PER_METER,
    })
}

/// Convert a length into centimeters. Returns `None` for non-finite input.
pub fn to_centimeters(value: f64, unit: LengthUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        LengthUnit::Centimeters => value,
        LengthUnit::Meters => value * CENTIMETERS_PER_METER,
        LengthUnit::Inches => value * CENTIMETERS_PER_INCH,
    })
}

/// Convert a mass into kilograms. Returns `None` for non-finite input.
pub fn to_kilograms(value: f64, unit: MassUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        MassUnit::Kilograms => value,
        MassUnit::Pounds => value * KILOGRAMS_PER_POUND,
    })
}

/// A measurement as typed by the user: free-form text plus its unit selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthText<'a> {
    pub value: &'a str,
    pub unit: LengthUnit,
}

impl LengthText<'_> {
    pub fn meters(&self) -> Option<f64> {
        parse_numeric(self.value).and_then(|v| to_meters(v, self.unit))
    }

    pub fn centimeters(&self) -> Option<f64> {
        parse_numeric(self.value).and_then(|v| to_centimeters(v, self.unit))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassText<'a> {
    pub value: &'a str,
    pub unit: MassUnit,
}

impl MassText<'_> {
    pub fn kilograms(&self) -> Option<f64> {
        parse_numeric(self.value).and_then(|v| to_kilograms(v, self.unit))
    }
}
