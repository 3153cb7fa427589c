// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::quantity::Quantity;
use crate::error::Result;
use crate::units::{Unit, UnitConverter};
use serde::{Deserialize, Serialize};
use uom::si::area::square_millimeter;
use uom::si::f64::{Area, Ratio};
use uom::si::ratio::ratio;

/// Trace widths swept by the heater comparison, in millimeters.
pub const HEATER_SWEEP_WIDTHS_MM: [f64; 7] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

/// A rectangular conductive trace.
///
/// Only the estimates of length and width take part in `squares` and `area`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceGeometry {
    length: Quantity,
    width: Quantity,
    thickness: Quantity,
    area_mm2: f64,
    squares: f64,
}

impl TraceGeometry {
    pub fn new(
        length: Quantity,
        width: Quantity,
        thickness: Quantity,
        units: &UnitConverter,
    ) -> Result<Self> {
        let l = units.length(length.estimate(), length.unit())?;
        let w = units.length(width.estimate(), width.unit())?;
        // Thickness must be a length too, even though nothing derives from it
        units.length(thickness.estimate(), thickness.unit())?;

        let squares: Ratio = l / w;
        let area: Area = l * w;

        Ok(Self {
            length,
            width,
            thickness,
            area_mm2: area.get::<square_millimeter>(),
            squares: squares.get::<ratio>(),
        })
    }

    pub fn from_magnitudes(
        length: f64,
        width: f64,
        thickness: f64,
        unit: Unit,
        units: &UnitConverter,
    ) -> Result<Self> {
        Self::new(
            Quantity::from_point(length, unit),
            Quantity::from_point(width, unit),
            Quantity::from_point(thickness, unit),
            units,
        )
    }

    /// 3 in × 8 mil signal trace in 1 oz copper.
    pub fn signal(units: &UnitConverter) -> Result<Self> {
        Self::new(
            Quantity::from_point(3.0, Unit::Inch),
            Quantity::from_point(8.0, Unit::Mil),
            Quantity::from_point(1.4, Unit::Mil),
            units,
        )
    }

    /// 2 in × 100 mil power trace in 1 oz copper.
    pub fn power(units: &UnitConverter) -> Result<Self> {
        Self::new(
            Quantity::from_point(2.0, Unit::Inch),
            Quantity::from_point(100.0, Unit::Mil),
            Quantity::from_point(1.4, Unit::Mil),
            units,
        )
    }

    /// 2 in × 1 cm heater trace in 1 oz copper.
    pub fn heater(units: &UnitConverter) -> Result<Self> {
        Self::new(
            Quantity::from_point(2.0, Unit::Inch),
            Quantity::from_point(1.0, Unit::Centimeter),
            Quantity::from_point(1.4, Unit::Mil),
            units,
        )
    }

    /// 2 in heater traces over [`HEATER_SWEEP_WIDTHS_MM`].
    pub fn width_sweep(units: &UnitConverter) -> Result<Vec<Self>> {
        HEATER_SWEEP_WIDTHS_MM
            .iter()
            .map(|&w| {
                Self::new(
                    Quantity::from_point(2.0, Unit::Inch),
                    Quantity::from_point(w, Unit::Millimeter),
                    Quantity::from_point(1.4, Unit::Mil),
                    units,
                )
            })
            .collect()
    }

    pub fn length(&self) -> Quantity {
        self.length
    }

    pub fn width(&self) -> Quantity {
        self.width
    }

    pub fn thickness(&self) -> Quantity {
        self.thickness
    }

    /// Plan area in square millimeters.
    pub fn area(&self) -> f64 {
        self.area_mm2
    }

    /// Length over width: the number of film squares end to end.
    pub fn squares(&self) -> f64 {
        self.squares
    }

    pub fn width_in(&self, unit: Unit, units: &UnitConverter) -> Result<f64> {
        units.convert(self.width.estimate(), self.width.unit(), unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_squares_same_unit() {
        let units = UnitConverter::new();
        let trace = TraceGeometry::from_magnitudes(10.0, 2.0, 0.01, Unit::Millimeter, &units).unwrap();

        assert_relative_eq!(trace.squares(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(trace.area(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_squares_mixed_units() {
        let units = UnitConverter::new();

        let heater = TraceGeometry::heater(&units).unwrap();
        assert_relative_eq!(heater.squares(), 5.08, epsilon = 1e-9);

        let signal = TraceGeometry::signal(&units).unwrap();
        assert_relative_eq!(signal.squares(), 375.0, epsilon = 1e-9);

        let power = TraceGeometry::power(&units).unwrap();
        assert_relative_eq!(power.squares(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_width_sweep() {
        let units = UnitConverter::new();
        let traces = TraceGeometry::width_sweep(&units).unwrap();

        assert_eq!(traces.len(), HEATER_SWEEP_WIDTHS_MM.len());
        assert_relative_eq!(traces[0].squares(), 50.8, epsilon = 1e-9);
        assert_relative_eq!(
            traces[6].width_in(Unit::Millimeter, &units).unwrap(),
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rejects_non_length_units() {
        let units = UnitConverter::new();
        let result = TraceGeometry::new(
            Quantity::from_point(1.0, Unit::Inch),
            Quantity::from_point(1.0, Unit::Ohm),
            Quantity::from_point(1.0, Unit::Mil),
            &units,
        );

        assert!(matches!(result, Err(Error::IncompatibleUnits { .. })));
    }
}
