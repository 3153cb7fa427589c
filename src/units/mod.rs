// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

pub mod converter;

pub use converter::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical dimension of a [`Unit`]. Conversion is only defined within one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Resistivity,
    Length,
    Resistance,
}

/// Units used by the material table, trace geometry and derived quantities.
///
/// "Per square" units are plain resistances dimensionally; the square is the
/// dimensionless length/width ratio of the film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    MicroOhmCentimeter,
    OhmMeter,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Mil,
    MilliOhmPerSquare,
    OhmPerSquare,
    MilliOhm,
    Ohm,
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::MicroOhmCentimeter | Unit::OhmMeter => Dimension::Resistivity,
            Unit::Micrometer
            | Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter
            | Unit::Inch
            | Unit::Mil => Dimension::Length,
            Unit::MilliOhmPerSquare | Unit::OhmPerSquare | Unit::MilliOhm | Unit::Ohm => {
                Dimension::Resistance
            }
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::MicroOhmCentimeter => "μΩ·cm",
            Unit::OhmMeter => "Ω·m",
            Unit::Micrometer => "μm",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Inch => "in",
            Unit::Mil => "mil",
            Unit::MilliOhmPerSquare => "mΩ/sq",
            Unit::OhmPerSquare => "Ω/sq",
            Unit::MilliOhm => "mΩ",
            Unit::Ohm => "Ω",
        }
    }

    pub fn is_compatible_with(&self, other: Unit) -> bool {
        self.dimension() == other.dimension()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
