// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::Category;
use crate::error::{Error, Result};
use crate::units::Unit;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    BulkResistivity,
    SheetResistance,
    Thickness,
    TraceResistance,
    TraceResistanceVsWidth,
    SheetResistance3D,
}

/// Unit choice for sheet resistance charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetUnitSelection {
    MilliOhmsPerSquare,
    OhmsPerSquare,
}

impl SheetUnitSelection {
    pub fn unit(&self) -> Unit {
        match self {
            SheetUnitSelection::MilliOhmsPerSquare => Unit::MilliOhmPerSquare,
            SheetUnitSelection::OhmsPerSquare => Unit::OhmPerSquare,
        }
    }
}

impl FromStr for SheetUnitSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mOhms/Sq" => Ok(SheetUnitSelection::MilliOhmsPerSquare),
            "Ohms/Sq" => Ok(SheetUnitSelection::OhmsPerSquare),
            other => Err(Error::InvalidUnitSelection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Title, labels, limits and ticks of a chart. Y values on every chart except
/// bulk resistivity are log10 magnitudes and the tick labels show the linear value.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Only set on three-dimensional charts.
    pub z_label: Option<String>,
    pub x_range: (f64, f64),
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub marker_radius: f64,
}

/// X positions of the category labels, just left of each category's first index.
const CATEGORY_TICKS: [f64; 6] = [18.0, 38.0, 58.0, 78.0, 98.0, 118.0];

fn category_ticks(first_label: &str, count: usize) -> Vec<Tick> {
    Category::ALL
        .iter()
        .zip(CATEGORY_TICKS)
        .take(count)
        .map(|(category, x)| {
            let label = if *category == Category::Metal {
                first_label
            } else {
                category.display_name()
            };
            Tick::new(x, label)
        })
        .collect()
}

fn log_ticks(exponents: &[f64], labels: &[&str]) -> Vec<Tick> {
    exponents
        .iter()
        .zip(labels)
        .map(|(&value, &label)| Tick::new(value, label))
        .collect()
}

impl AxisConfig {
    pub fn bulk_resistivity() -> Self {
        Self {
            title: "Bulk Resistivity of Various Materials".to_string(),
            x_label: "Material".to_string(),
            y_label: format!("Bulk resistivity in {}", Unit::MicroOhmCentimeter),
            z_label: None,
            x_range: (10.0, 115.0),
            x_ticks: category_ticks("metal", 5),
            y_ticks: Vec::new(),
            marker_radius: 5.0,
        }
    }

    pub fn sheet_resistance(units: SheetUnitSelection) -> Self {
        let (unit_label, y_ticks) = match units {
            SheetUnitSelection::MilliOhmsPerSquare => (
                "mΩ/sq",
                log_ticks(
                    &[-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
                    &["0.1", "1", "10", "100", "1K", "10K", "100K", "1M", "10M", "100M"],
                ),
            ),
            SheetUnitSelection::OhmsPerSquare => (
                "Ω/sq",
                log_ticks(
                    &[-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
                    &["0.001", "0.01", "0.1", "1", "10", "100", "1K", "10K", "100K"],
                ),
            ),
        };

        Self {
            title: "Sheet Resistances at Typical Thicknesses".to_string(),
            x_label: "Material".to_string(),
            y_label: format!("Sheet Resistance in {unit_label}"),
            z_label: None,
            x_range: (10.0, 130.0),
            x_ticks: category_ticks("copper", 6),
            y_ticks,
            marker_radius: 4.0,
        }
    }

    pub fn thickness() -> Self {
        Self {
            title: "Typical Thicknesses by Material Type".to_string(),
            x_label: "Material".to_string(),
            y_label: format!("Sheet Thickness in {}", Unit::Micrometer),
            z_label: None,
            x_range: (10.0, 115.0),
            x_ticks: category_ticks("copper", 5),
            y_ticks: log_ticks(
                &[-2.0, -1.0, 0.0, 1.0, 2.0, 2.3],
                &["0.01", "0.1", "1", "10", "100", "200"],
            ),
            marker_radius: 4.0,
        }
    }

    pub fn trace_resistance(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "Material".to_string(),
            y_label: format!("Trace Resistance in {}", Unit::Ohm),
            z_label: None,
            x_range: (10.0, 130.0),
            x_ticks: category_ticks("copper", 6),
            y_ticks: log_ticks(
                &[-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
                &["0.1", "1", "10", "100", "1K", "10K", "100K", "1M"],
            ),
            marker_radius: 4.0,
        }
    }

    /// X values are log10 of the width in millimeters.
    pub fn trace_resistance_vs_width(title: &str) -> Self {
        let widths = [1.0_f64, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];
        Self {
            title: title.to_string(),
            x_label: "Width in mm".to_string(),
            y_label: format!("Trace Resistance in {}", Unit::Ohm),
            z_label: None,
            x_range: (0.9_f64.log10(), 110.0_f64.log10()),
            x_ticks: widths
                .iter()
                .map(|w| Tick::new(w.log10(), format!("{w}")))
                .collect(),
            y_ticks: log_ticks(
                &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
                &["10", "100", "1K", "10K", "100K", "1M"],
            ),
            marker_radius: 4.0,
        }
    }

    /// Bulk resistivity and thickness on the ground plane, log10 of the sheet
    /// resistance in mΩ/sq going up.
    pub fn sheet_resistance_3d() -> Self {
        Self {
            title: "Sheet Resistance by Bulk Resistivity and Thickness".to_string(),
            x_label: format!("Bulk resistivity in {}", Unit::MicroOhmCentimeter),
            y_label: format!("Thickness in {}", Unit::Micrometer),
            z_label: Some(format!(
                "log10 Sheet Resistance in {}",
                Unit::MilliOhmPerSquare
            )),
            x_range: (0.0, 55.0),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            marker_radius: 3.0,
        }
    }

    /// Label of the tick closest to `value`, if one lies within `tolerance`.
    pub fn y_tick_label(&self, value: f64, tolerance: f64) -> Option<&str> {
        nearest_tick(&self.y_ticks, value, tolerance)
    }

    pub fn x_tick_label(&self, value: f64, tolerance: f64) -> Option<&str> {
        nearest_tick(&self.x_ticks, value, tolerance)
    }
}

fn nearest_tick(ticks: &[Tick], value: f64, tolerance: f64) -> Option<&str> {
    ticks
        .iter()
        .filter(|t| (t.value - value).abs() <= tolerance)
        .min_by(|a, b| {
            (a.value - value)
                .abs()
                .total_cmp(&(b.value - value).abs())
        })
        .map(|t| t.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_selection_parsing() {
        assert_eq!(
            "mOhms/Sq".parse::<SheetUnitSelection>().unwrap(),
            SheetUnitSelection::MilliOhmsPerSquare
        );
        assert_eq!(
            "Ohms/Sq".parse::<SheetUnitSelection>().unwrap().unit(),
            Unit::OhmPerSquare
        );

        let err = "kOhms/Sq".parse::<SheetUnitSelection>().unwrap_err();
        assert!(matches!(err, Error::InvalidUnitSelection(ref s) if s == "kOhms/Sq"));
    }

    #[test]
    fn test_category_ticks() {
        let axes = AxisConfig::sheet_resistance(SheetUnitSelection::MilliOhmsPerSquare);
        let labels: Vec<&str> = axes.x_ticks.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(
            labels,
            vec!["copper", "flexo", "inkjet", "screen", "aerosol", "carbon"]
        );
        assert_eq!(axes.x_ticks[5].value, 118.0);
        assert_eq!(axes.x_range, (10.0, 130.0));

        let bulk = AxisConfig::bulk_resistivity();
        assert_eq!(bulk.x_ticks.len(), 5);
        assert_eq!(bulk.x_ticks[0].label, "metal");
    }

    #[test]
    fn test_log_tick_labels() {
        let ohms = AxisConfig::sheet_resistance(SheetUnitSelection::OhmsPerSquare);
        assert_eq!(ohms.y_tick_label(-3.0, 0.01), Some("0.001"));
        assert_eq!(ohms.y_tick_label(3.0, 0.01), Some("1K"));
        assert_eq!(ohms.y_tick_label(2.5, 0.01), None);
        assert!(ohms.y_label.ends_with("Ω/sq"));

        let thickness = AxisConfig::thickness();
        assert_eq!(thickness.y_tick_label(2.3, 0.01), Some("200"));
    }

    #[test]
    fn test_width_axis_is_logarithmic() {
        let axes = AxisConfig::trace_resistance_vs_width("Heater");
        assert_eq!(axes.x_tick_label(1.0, 1e-9), Some("10"));
        assert_eq!(axes.x_tick_label(2.0, 1e-9), Some("100"));
        assert_eq!(axes.x_label, "Width in mm");
        assert!(axes.z_label.is_none());
    }

    #[test]
    fn test_surface_axes() {
        let axes = AxisConfig::sheet_resistance_3d();
        assert_eq!(axes.z_label.as_deref(), Some("log10 Sheet Resistance in mΩ/sq"));
        assert!(axes.x_label.starts_with("Bulk resistivity"));
        assert!(axes.x_ticks.is_empty());
        assert!(axes.y_ticks.is_empty());
    }
}
