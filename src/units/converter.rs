// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Narrow seam over the `uom` unit system.
//!
//! Everything outside this module speaks plain `f64` magnitudes tagged with a
//! [`Unit`]; this is the only place that builds typed `uom` quantities.

use super::{Dimension, Unit};
use crate::error::{Error, Result};
use uom::si::electrical_resistance::{milliohm, ohm};
use uom::si::electrical_resistivity::ohm_meter;
use uom::si::f64::{ElectricalResistance, ElectricalResistivity, Length};
use uom::si::length::{centimeter, inch, meter, micrometer, mil, millimeter};

mod extra {
    unit! {
        system: uom::si;
        quantity: uom::si::electrical_resistivity;

        @microohm_centimeter: 1.0E-8; "μΩ·cm", "microohm centimeter", "microohm centimeters";
    }
}

pub use extra::microohm_centimeter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitConverter;

impl UnitConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert `magnitude` expressed in `from` into `to`.
    pub fn convert(&self, magnitude: f64, from: Unit, to: Unit) -> Result<f64> {
        if !from.is_compatible_with(to) {
            return Err(Error::IncompatibleUnits { from, to });
        }

        match from.dimension() {
            Dimension::Resistivity => self.resistivity_in(self.resistivity(magnitude, from)?, to),
            Dimension::Length => self.length_in(self.length(magnitude, from)?, to),
            Dimension::Resistance => self.resistance_in(self.resistance(magnitude, from)?, to),
        }
    }

    pub fn resistivity(&self, magnitude: f64, unit: Unit) -> Result<ElectricalResistivity> {
        match unit {
            Unit::MicroOhmCentimeter => Ok(ElectricalResistivity::new::<microohm_centimeter>(
                magnitude,
            )),
            Unit::OhmMeter => Ok(ElectricalResistivity::new::<ohm_meter>(magnitude)),
            other => Err(Error::IncompatibleUnits {
                from: other,
                to: Unit::OhmMeter,
            }),
        }
    }

    pub fn resistivity_in(&self, quantity: ElectricalResistivity, unit: Unit) -> Result<f64> {
        match unit {
            Unit::MicroOhmCentimeter => Ok(quantity.get::<microohm_centimeter>()),
            Unit::OhmMeter => Ok(quantity.get::<ohm_meter>()),
            other => Err(Error::IncompatibleUnits {
                from: Unit::OhmMeter,
                to: other,
            }),
        }
    }

    pub fn length(&self, magnitude: f64, unit: Unit) -> Result<Length> {
        match unit {
            Unit::Micrometer => Ok(Length::new::<micrometer>(magnitude)),
            Unit::Millimeter => Ok(Length::new::<millimeter>(magnitude)),
            Unit::Centimeter => Ok(Length::new::<centimeter>(magnitude)),
            Unit::Meter => Ok(Length::new::<meter>(magnitude)),
            Unit::Inch => Ok(Length::new::<inch>(magnitude)),
            Unit::Mil => Ok(Length::new::<mil>(magnitude)),
            other => Err(Error::IncompatibleUnits {
                from: other,
                to: Unit::Meter,
            }),
        }
    }

    pub fn length_in(&self, quantity: Length, unit: Unit) -> Result<f64> {
        match unit {
            Unit::Micrometer => Ok(quantity.get::<micrometer>()),
            Unit::Millimeter => Ok(quantity.get::<millimeter>()),
            Unit::Centimeter => Ok(quantity.get::<centimeter>()),
            Unit::Meter => Ok(quantity.get::<meter>()),
            Unit::Inch => Ok(quantity.get::<inch>()),
            Unit::Mil => Ok(quantity.get::<mil>()),
            other => Err(Error::IncompatibleUnits {
                from: Unit::Meter,
                to: other,
            }),
        }
    }

    pub fn resistance(&self, magnitude: f64, unit: Unit) -> Result<ElectricalResistance> {
        match unit {
            Unit::MilliOhmPerSquare | Unit::MilliOhm => {
                Ok(ElectricalResistance::new::<milliohm>(magnitude))
            }
            Unit::OhmPerSquare | Unit::Ohm => Ok(ElectricalResistance::new::<ohm>(magnitude)),
            other => Err(Error::IncompatibleUnits {
                from: other,
                to: Unit::Ohm,
            }),
        }
    }

    pub fn resistance_in(&self, quantity: ElectricalResistance, unit: Unit) -> Result<f64> {
        match unit {
            Unit::MilliOhmPerSquare | Unit::MilliOhm => Ok(quantity.get::<milliohm>()),
            Unit::OhmPerSquare | Unit::Ohm => Ok(quantity.get::<ohm>()),
            other => Err(Error::IncompatibleUnits {
                from: Unit::Ohm,
                to: other,
            }),
        }
    }
}
