// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle values crossing the node boundary.
//!
//! Operator math works in degrees. [`Angle`] stores degrees so that a value
//! written in degrees reads back bit-for-bit; radians are produced on demand
//! for hosts whose internal unit is radians.

use core::fmt;
use core::str::FromStr;

/// Unit used when parsing or printing angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    /// Degrees (the operator unit).
    #[default]
    Degrees,
    /// Radians.
    Radians,
}

impl AngleUnit {
    /// Builds an [`Angle`] from a number in this unit.
    pub fn angle(self, value: f64) -> Angle {
        match self {
            Self::Degrees => Angle::from_degrees(value),
            Self::Radians => Angle::from_radians(value),
        }
    }

    /// Expresses `angle` in this unit.
    pub fn value_of(self, angle: Angle) -> f64 {
        match self {
            Self::Degrees => angle.degrees(),
            Self::Radians => angle.radians(),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
        })
    }
}

/// Error returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown angle unit: {0} (expected `degrees` or `radians`)")]
pub struct ParseAngleUnitError(pub String);

impl FromStr for AngleUnit {
    type Err = ParseAngleUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            _ => Err(ParseAngleUnitError(s.to_owned())),
        }
    }
}

/// An angle, stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// Angle from degrees.
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Angle from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// Value in degrees.
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// Value in radians.
    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}°", precision, self.degrees)
        } else {
            write!(f, "{}°", self.degrees)
        }
    }
}
