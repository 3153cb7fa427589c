// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::{Material, TraceGeometry};
use crate::engine::{
    log10_population, sample_values, DerivedQuantityEngine, SummaryStatistics, SweepPlan,
};
use crate::error::Result;
use crate::renderer::axes::{AxisConfig, PlotKind, SheetUnitSelection};
use crate::renderer::colors::PlotColor;
use crate::units::Unit;

/// Thickness samples per material on the thickness chart.
const THICKNESS_CHART_SAMPLES: usize = 25;

/// Samples along each axis of a material's bulk resistivity by thickness grid.
const SURFACE_GRID_SAMPLES: usize = 10;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub color: PlotColor,
    pub points: Vec<[f64; 2]>,
    /// Height of each point on three-dimensional charts, parallel to `points`.
    pub z: Option<Vec<f64>>,
}

/// Statistics of one material group's trace resistance population, in ohms.
#[derive(Clone, Debug)]
pub struct GroupSummary {
    pub label: String,
    pub statistics: SummaryStatistics,
}

/// A scatter chart built up by successive calls, one material group at a time.
///
/// The first call decides the chart's axes; later calls only add series, so
/// callers must make the calls for one chart in a fixed order.
pub struct ComparativePlot {
    engine: DerivedQuantityEngine,
    kind: Option<PlotKind>,
    axes: Option<AxisConfig>,
    series: Vec<Series>,
    summaries: Vec<GroupSummary>,
}

impl ComparativePlot {
    pub fn new(engine: DerivedQuantityEngine) -> Self {
        Self {
            engine,
            kind: None,
            axes: None,
            series: Vec::new(),
            summaries: Vec::new(),
        }
    }

    pub fn kind(&self) -> Option<PlotKind> {
        self.kind
    }

    pub fn axes(&self) -> Option<&AxisConfig> {
        self.axes.as_ref()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn summaries(&self) -> &[GroupSummary] {
        &self.summaries
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    fn begin(&mut self, kind: PlotKind, axes: impl FnOnce() -> AxisConfig) {
        match self.kind {
            None => {
                self.kind = Some(kind);
                self.axes = Some(axes());
            }
            Some(current) if current != kind => {
                log::warn!("Adding {kind:?} data to a {current:?} chart; keeping its axes");
            }
            Some(_) => {}
        }
    }

    fn push_series(&mut self, materials: &[&Material], color: PlotColor, points: Vec<[f64; 2]>) {
        self.series.push(Series {
            label: group_label(materials),
            color,
            points,
            z: None,
        });
    }

    /// Bulk resistivity interval endpoints on a linear axis.
    pub fn bulk_resistivity(&mut self, materials: &[&Material], color: PlotColor) {
        self.begin(PlotKind::BulkResistivity, AxisConfig::bulk_resistivity);

        let points = materials
            .iter()
            .flat_map(|m| {
                m.bulk_resistivity
                    .bounds()
                    .map(|bulk| [m.plot_index as f64, bulk])
            })
            .collect();
        self.push_series(materials, color, points);
    }

    pub fn sheet_resistance(
        &mut self,
        materials: &[&Material],
        color: PlotColor,
        units: &str,
    ) -> Result<()> {
        let selection: SheetUnitSelection = units.parse()?;
        self.begin(PlotKind::SheetResistance, || {
            AxisConfig::sheet_resistance(selection)
        });

        let mut points = Vec::new();
        for material in materials {
            let population = self.engine.sheet_resistance_population(
                material,
                SweepPlan::default(),
                selection.unit(),
            )?;

            if material.is_metal() {
                for sample in &population {
                    log::debug!(
                        "{:.2}\t{:.2}\t{:.2}",
                        sample.bulk_resistivity,
                        sample.thickness,
                        sample.value
                    );
                }
            }

            let x = material.plot_index as f64;
            points.extend(
                log10_population(&sample_values(&population))?
                    .into_iter()
                    .map(|y| [x, y]),
            );
        }

        self.push_series(materials, color, points);
        Ok(())
    }

    pub fn thickness(&mut self, materials: &[&Material], color: PlotColor) -> Result<()> {
        self.begin(PlotKind::Thickness, AxisConfig::thickness);

        let mut points = Vec::new();
        for material in materials {
            let samples = self
                .engine
                .thickness_samples(material, THICKNESS_CHART_SAMPLES);

            let x = material.plot_index as f64;
            points.extend(log10_population(&samples)?.into_iter().map(|y| [x, y]));
        }

        self.push_series(materials, color, points);
        Ok(())
    }

    pub fn trace_resistance(
        &mut self,
        trace: &TraceGeometry,
        materials: &[&Material],
        color: PlotColor,
        title: &str,
    ) -> Result<()> {
        self.begin(PlotKind::TraceResistance, || {
            AxisConfig::trace_resistance(title)
        });

        let mut points = Vec::new();
        let mut ohms = Vec::new();
        for material in materials {
            let population =
                self.engine
                    .trace_resistance_population(material, SweepPlan::default(), trace)?;

            if material.is_metal() {
                for sample in &population {
                    log::debug!(
                        "{}\t{}\t{:.3}",
                        material.name,
                        sample.thickness,
                        sample.value
                    );
                }
            }

            let values = sample_values(&population);
            let x = material.plot_index as f64;
            points.extend(log10_population(&values)?.into_iter().map(|y| [x, y]));
            ohms.extend(values);
        }

        if !materials.is_empty() && !materials.iter().any(|m| m.is_metal()) {
            let statistics = SummaryStatistics::from_population(&ohms)?;
            let label = group_label(materials);
            log::info!("{label}\t{statistics}");
            self.summaries.push(GroupSummary { label, statistics });
        }

        self.push_series(materials, color, points);
        Ok(())
    }

    /// One trace width per call; x is log10 of the width in millimeters.
    pub fn trace_resistance_vs_width(
        &mut self,
        trace: &TraceGeometry,
        materials: &[&Material],
        color: PlotColor,
        title: &str,
    ) -> Result<()> {
        self.begin(PlotKind::TraceResistanceVsWidth, || {
            AxisConfig::trace_resistance_vs_width(title)
        });

        let width_mm = trace.width_in(Unit::Millimeter, self.engine.units())?;
        let x = log10_population(&[width_mm])?[0];

        let mut points = Vec::new();
        for material in materials {
            let population = self.engine.interval_trace_resistance_population(
                material,
                SweepPlan::default(),
                trace,
            )?;
            points.extend(
                log10_population(&sample_values(&population))?
                    .into_iter()
                    .map(|y| [x, y]),
            );
        }

        self.push_series(materials, color, points);
        Ok(())
    }

    /// Every (bulk, thickness) pair of each material's sampling grid, with
    /// log10 of the sheet resistance in mΩ/sq as height.
    pub fn sheet_resistance_3d(&mut self, materials: &[&Material], color: PlotColor) -> Result<()> {
        self.begin(PlotKind::SheetResistance3D, AxisConfig::sheet_resistance_3d);

        let mut points = Vec::new();
        let mut heights = Vec::new();
        for material in materials {
            let grid = self.engine.sheet_resistance_grid(
                material,
                SURFACE_GRID_SAMPLES,
                Unit::MilliOhmPerSquare,
            )?;
            points.extend(grid.iter().map(|s| [s.bulk_resistivity, s.thickness]));
            heights.extend(log10_population(&sample_values(&grid))?);
        }

        self.series.push(Series {
            label: group_label(materials),
            color,
            points,
            z: Some(heights),
        });
        Ok(())
    }

    /// Height range over all series, padded like [`Self::bounds`].
    pub fn z_bounds(&self) -> [f64; 2] {
        let (min, max) = self
            .series
            .iter()
            .filter_map(|s| s.z.as_deref())
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &z| {
                (lo.min(z), hi.max(z))
            });

        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }
        let pad = ((max - min) * 0.05).max(0.1);
        [min - pad, max + pad]
    }

    /// Data bounds merged with the configured limits and ticks, padded by 5%.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let (mut x_min, mut x_max) = self
            .axes
            .as_ref()
            .map(|a| a.x_range)
            .unwrap_or((f64::INFINITY, f64::NEG_INFINITY));
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for point in self.series.iter().flat_map(|s| &s.points) {
            if self.axes.is_none() {
                x_min = x_min.min(point[0]);
                x_max = x_max.max(point[0]);
            }
            y_min = y_min.min(point[1]);
            y_max = y_max.max(point[1]);
        }
        if let Some(axes) = &self.axes {
            for tick in &axes.y_ticks {
                y_min = y_min.min(tick.value);
                y_max = y_max.max(tick.value);
            }
        }

        if !x_min.is_finite() || !x_max.is_finite() {
            (x_min, x_max) = (0.0, 1.0);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            (y_min, y_max) = (0.0, 1.0);
        }
        let pad = ((y_max - y_min) * 0.05).max(0.1);

        ([x_min, x_max], [y_min - pad, y_max + pad])
    }
}

/// A single material is labelled by name, a group by its category.
fn group_label(materials: &[&Material]) -> String {
    match materials {
        [] => String::new(),
        [single] => single.name.clone(),
        [first, ..] => first.category.display_name().to_string(),
    }
}
