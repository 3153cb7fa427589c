// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::{pcb_weight_thicknesses, Material, TraceGeometry};
use crate::engine::sampling::sample_quantity;
use crate::error::{Error, Result};
use crate::units::{Dimension, Unit, UnitConverter};
use uom::si::f64::{ElectricalResistance, Length};

/// How many points of each interval a population sweep takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPlan {
    pub bulk_samples: usize,
    pub thickness_samples: usize,
}

impl SweepPlan {
    pub fn new(bulk_samples: usize, thickness_samples: usize) -> Self {
        Self {
            bulk_samples,
            thickness_samples,
        }
    }
}

impl Default for SweepPlan {
    /// Bulk resistivity endpoints against ten thicknesses.
    fn default() -> Self {
        Self::new(2, 10)
    }
}

/// One point of a population sweep, with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    pub bulk_resistivity: f64,
    pub thickness: f64,
    pub value: f64,
}

pub fn sample_values(samples: &[SweepSample]) -> Vec<f64> {
    samples.iter().map(|s| s.value).collect()
}

/// Sheet and trace resistance calculations over the material table.
#[derive(Debug, Clone, Default)]
pub struct DerivedQuantityEngine {
    units: UnitConverter,
}

impl DerivedQuantityEngine {
    pub fn new(units: UnitConverter) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &UnitConverter {
        &self.units
    }

    /// Sheet resistance of a film with bulk resistivity in μΩ·cm and thickness in μm.
    pub fn sheet_resistance(&self, bulk: f64, thickness: f64, target: Unit) -> Result<f64> {
        self.sheet_resistance_with_units(
            bulk,
            Unit::MicroOhmCentimeter,
            thickness,
            Unit::Micrometer,
            target,
        )
    }

    pub fn sheet_resistance_with_units(
        &self,
        bulk: f64,
        bulk_unit: Unit,
        thickness: f64,
        thickness_unit: Unit,
        target: Unit,
    ) -> Result<f64> {
        let rho = self.units.resistivity(bulk, bulk_unit)?;
        let t = self.units.length(thickness, thickness_unit)?;
        let sheet: ElectricalResistance = rho / t;
        self.units.resistance_in(sheet, target)
    }

    /// End-to-end resistance in ohms of `squares` squares of film.
    pub fn trace_resistance(&self, sheet: f64, sheet_unit: Unit, squares: f64) -> Result<f64> {
        let r = self.units.resistance(sheet * squares, sheet_unit)?;
        self.units.resistance_in(r, Unit::Ohm)
    }

    /// Film thickness in μm implied by a bulk resistivity and a sheet resistance.
    pub fn thickness_from_sheet_resistance(
        &self,
        bulk: f64,
        bulk_unit: Unit,
        sheet: f64,
        sheet_unit: Unit,
    ) -> Result<f64> {
        let rho = self.units.resistivity(bulk, bulk_unit)?;
        let r = self.units.resistance(sheet, sheet_unit)?;
        let t: Length = rho / r;
        self.units.length_in(t, Unit::Micrometer)
    }

    /// Metals are rolled foil, so they use the standard copper weights
    /// instead of their thickness interval.
    pub fn thickness_samples(&self, material: &Material, count: usize) -> Vec<f64> {
        if material.is_metal() {
            pcb_weight_thicknesses()
        } else {
            sample_quantity(&material.thickness, count)
        }
    }

    pub fn sheet_resistance_population(
        &self,
        material: &Material,
        plan: SweepPlan,
        target: Unit,
    ) -> Result<Vec<SweepSample>> {
        let bulk_samples = sample_quantity(&material.bulk_resistivity, plan.bulk_samples);
        let thickness_samples = self.thickness_samples(material, plan.thickness_samples);
        let thickness_unit = if material.is_metal() {
            Unit::Micrometer
        } else {
            material.thickness.unit()
        };

        self.sweep(material, &bulk_samples, &thickness_samples, thickness_unit, target)
    }

    /// Trace resistance in ohms for every point of the sheet resistance sweep.
    pub fn trace_resistance_population(
        &self,
        material: &Material,
        plan: SweepPlan,
        trace: &TraceGeometry,
    ) -> Result<Vec<SweepSample>> {
        let sheet = self.sheet_resistance_population(material, plan, Unit::MilliOhmPerSquare)?;
        self.to_trace_resistance(sheet, trace)
    }

    /// Like [`Self::trace_resistance_population`] but always sampling the
    /// thickness interval, metals included.
    pub fn interval_trace_resistance_population(
        &self,
        material: &Material,
        plan: SweepPlan,
        trace: &TraceGeometry,
    ) -> Result<Vec<SweepSample>> {
        let bulk_samples = sample_quantity(&material.bulk_resistivity, plan.bulk_samples);
        let thickness_samples = sample_quantity(&material.thickness, plan.thickness_samples);
        let sheet = self.sweep(
            material,
            &bulk_samples,
            &thickness_samples,
            material.thickness.unit(),
            Unit::MilliOhmPerSquare,
        )?;
        self.to_trace_resistance(sheet, trace)
    }

    /// Full `count` × `count` grid over both intervals, ignoring the copper
    /// weight rule for metals.
    pub fn sheet_resistance_grid(
        &self,
        material: &Material,
        count: usize,
        target: Unit,
    ) -> Result<Vec<SweepSample>> {
        let bulk_samples = sample_quantity(&material.bulk_resistivity, count);
        let thickness_samples = sample_quantity(&material.thickness, count);

        self.sweep(
            material,
            &bulk_samples,
            &thickness_samples,
            material.thickness.unit(),
            target,
        )
    }

    fn sweep(
        &self,
        material: &Material,
        bulk_samples: &[f64],
        thickness_samples: &[f64],
        thickness_unit: Unit,
        target: Unit,
    ) -> Result<Vec<SweepSample>> {
        if target.dimension() != Dimension::Resistance {
            return Err(Error::IncompatibleUnits {
                from: Unit::OhmPerSquare,
                to: target,
            });
        }

        let mut population = Vec::with_capacity(bulk_samples.len() * thickness_samples.len());
        for &bulk in bulk_samples {
            for &thickness in thickness_samples {
                let value = self.sheet_resistance_with_units(
                    bulk,
                    material.bulk_resistivity.unit(),
                    thickness,
                    thickness_unit,
                    target,
                )?;
                population.push(SweepSample {
                    bulk_resistivity: bulk,
                    thickness,
                    value,
                });
            }
        }

        Ok(population)
    }

    fn to_trace_resistance(
        &self,
        sheet: Vec<SweepSample>,
        trace: &TraceGeometry,
    ) -> Result<Vec<SweepSample>> {
        sheet
            .into_iter()
            .map(|sample| -> Result<SweepSample> {
                let value =
                    self.trace_resistance(sample.value, Unit::MilliOhmPerSquare, trace.squares())?;
                Ok(SweepSample { value, ..sample })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use approx::assert_relative_eq;

    #[test]
    fn test_copper_sheet_resistance() {
        let engine = DerivedQuantityEngine::default();

        // 1.70 μΩ·cm over 34.8 μm (1 oz copper)
        let sheet = engine
            .sheet_resistance(1.70, 34.8, Unit::MilliOhmPerSquare)
            .unwrap();
        assert_relative_eq!(sheet, 0.4885, max_relative = 0.01);

        let sheet_ohms = engine.sheet_resistance(1.70, 34.8, Unit::OhmPerSquare).unwrap();
        assert_relative_eq!(sheet_ohms * 1000.0, sheet, max_relative = 1e-9);
    }

    #[test]
    fn test_sheet_resistance_monotonicity() {
        let engine = DerivedQuantityEngine::default();
        let at = |bulk, thickness| {
            engine
                .sheet_resistance(bulk, thickness, Unit::MilliOhmPerSquare)
                .unwrap()
        };

        assert!(at(2.0, 10.0) > at(1.0, 10.0));
        assert!(at(1.0, 20.0) < at(1.0, 10.0));
    }

    #[test]
    fn test_sheet_resistance_rejects_non_resistance_target() {
        let engine = DerivedQuantityEngine::default();
        assert!(matches!(
            engine.sheet_resistance(1.0, 1.0, Unit::Micrometer),
            Err(Error::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_trace_resistance_scales_with_squares() {
        let engine = DerivedQuantityEngine::default();

        let one = engine
            .trace_resistance(250.0, Unit::MilliOhmPerSquare, 4.0)
            .unwrap();
        let two = engine
            .trace_resistance(250.0, Unit::MilliOhmPerSquare, 8.0)
            .unwrap();

        assert_relative_eq!(one, 1.0, epsilon = 1e-12);
        assert_relative_eq!(two, 2.0 * one, epsilon = 1e-12);
    }

    #[test]
    fn test_thickness_back_out() {
        let engine = DerivedQuantityEngine::default();
        let sheet = engine
            .sheet_resistance(8.0, 0.5, Unit::MilliOhmPerSquare)
            .unwrap();

        let thickness = engine
            .thickness_from_sheet_resistance(
                8.0,
                Unit::MicroOhmCentimeter,
                sheet,
                Unit::MilliOhmPerSquare,
            )
            .unwrap();
        assert_relative_eq!(thickness, 0.5, max_relative = 1e-9);
    }

    #[test]
    fn test_metal_population_uses_copper_weights() {
        let catalog = Catalog::standard().unwrap();
        let engine = DerivedQuantityEngine::default();
        let copper = catalog.by_name("copper").unwrap();

        let population = engine
            .sheet_resistance_population(copper, SweepPlan::default(), Unit::MilliOhmPerSquare)
            .unwrap();

        assert_eq!(population.len(), 2 * 4);
        let thicknesses: Vec<f64> = population.iter().take(4).map(|s| s.thickness).collect();
        assert_eq!(thicknesses, pcb_weight_thicknesses());
    }

    #[test]
    fn test_ink_population_size() {
        let catalog = Catalog::standard().unwrap();
        let engine = DerivedQuantityEngine::default();
        let ink = catalog.by_name("pfi-500").unwrap();

        let population = engine
            .sheet_resistance_population(ink, SweepPlan::new(10, 10), Unit::OhmPerSquare)
            .unwrap();
        assert_eq!(population.len(), 100);
        assert!(population.iter().all(|s| s.value > 0.0));
    }

    #[test]
    fn test_trace_population_matches_sheet_population() {
        let catalog = Catalog::standard().unwrap();
        let engine = DerivedQuantityEngine::default();
        let trace = TraceGeometry::heater(engine.units()).unwrap();
        let paste = catalog.by_name("cp-007").unwrap();

        let sheet = engine
            .sheet_resistance_population(paste, SweepPlan::default(), Unit::OhmPerSquare)
            .unwrap();
        let traces = engine
            .trace_resistance_population(paste, SweepPlan::default(), &trace)
            .unwrap();

        assert_eq!(sheet.len(), traces.len());
        for (s, t) in sheet.iter().zip(&traces) {
            assert_relative_eq!(t.value, s.value * trace.squares(), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_interval_population_ignores_copper_weights() {
        let catalog = Catalog::standard().unwrap();
        let engine = DerivedQuantityEngine::default();
        let trace = TraceGeometry::heater(engine.units()).unwrap();
        let copper = catalog.by_name("copper").unwrap();

        let population = engine
            .interval_trace_resistance_population(copper, SweepPlan::default(), &trace)
            .unwrap();
        assert_eq!(population.len(), 20);
        assert_eq!(population[0].thickness, 17.4);
        assert_eq!(population[9].thickness, 69.6);
    }

    #[test]
    fn test_grid_covers_both_intervals() {
        let catalog = Catalog::standard().unwrap();
        let engine = DerivedQuantityEngine::default();
        let silver = catalog.by_name("silver").unwrap();

        let grid = engine
            .sheet_resistance_grid(silver, 10, Unit::MilliOhmPerSquare)
            .unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0].thickness, 17.4);
        assert_eq!(grid[99].thickness, 69.6);
    }
}
