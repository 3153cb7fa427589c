// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! The fixed set of comparisons the tool knows how to produce.

use crate::data::{Catalog, Category, Material, TraceGeometry};
use crate::engine::{sample_values, DerivedQuantityEngine, SummaryStatistics};
use crate::error::Result;
use crate::renderer::{ColorScheme, ComparativePlot};
use crate::units::Unit;

pub const HEATER_TRACE_TITLE: &str = "Heater Trace Resistance for 1 cm x 2 inch x 1 oz Cu";
pub const WIDTH_SWEEP_TITLE: &str = "Heater 2-inch Trace Resistances vs Width";

/// Categories shown after the copper reference on most charts.
const INK_CATEGORIES: [Category; 5] = [
    Category::Flexo,
    Category::Inkjet,
    Category::Screen,
    Category::Aerosol,
    Category::Carbon,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    BulkResistivity,
    SheetResistance,
    SheetResistanceOhms,
    SheetResistance3D,
    Thickness,
    TraceResistance,
    #[default]
    CarbonResistance,
    ThicknessCheck,
    SheetResistanceTable,
}

impl Scenario {
    pub const ALL: [Scenario; 9] = [
        Scenario::BulkResistivity,
        Scenario::SheetResistance,
        Scenario::SheetResistanceOhms,
        Scenario::SheetResistance3D,
        Scenario::Thickness,
        Scenario::TraceResistance,
        Scenario::CarbonResistance,
        Scenario::ThicknessCheck,
        Scenario::SheetResistanceTable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::BulkResistivity => "bulk-resistivity",
            Scenario::SheetResistance => "sheet-resistance",
            Scenario::SheetResistanceOhms => "sheet-resistance-ohms",
            Scenario::SheetResistance3D => "sheet-resistance-3d",
            Scenario::Thickness => "thickness",
            Scenario::TraceResistance => "trace-resistance",
            Scenario::CarbonResistance => "carbon-resistance",
            Scenario::ThicknessCheck => "thickness-check",
            Scenario::SheetResistanceTable => "sheet-resistance-table",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::BulkResistivity => "Bulk resistivity ranges of metals and inks",
            Scenario::SheetResistance => "Sheet resistance at typical thicknesses (mΩ/sq)",
            Scenario::SheetResistanceOhms => "Sheet resistance at typical thicknesses (Ω/sq)",
            Scenario::SheetResistance3D => "Sheet resistance over bulk resistivity and thickness",
            Scenario::Thickness => "Typical film thickness by material type",
            Scenario::TraceResistance => "Resistance of a 1 cm x 2 inch heater trace",
            Scenario::CarbonResistance => "Carbon heater trace resistance against width",
            Scenario::ThicknessCheck => "Thickness implied by published sheet resistance",
            Scenario::SheetResistanceTable => "Sheet resistance range of every material",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

pub enum ScenarioOutput {
    Chart(ComparativePlot),
    Report(Vec<String>),
}

pub fn run_scenario(
    scenario: Scenario,
    catalog: &Catalog,
    engine: &DerivedQuantityEngine,
) -> Result<ScenarioOutput> {
    log::info!("Running scenario '{}'", scenario.name());

    let output = match scenario {
        Scenario::BulkResistivity => ScenarioOutput::Chart(bulk_resistivity(catalog, engine)?),
        Scenario::SheetResistance => {
            ScenarioOutput::Chart(sheet_resistance(catalog, engine, "mOhms/Sq")?)
        }
        Scenario::SheetResistanceOhms => {
            ScenarioOutput::Chart(sheet_resistance(catalog, engine, "Ohms/Sq")?)
        }
        Scenario::SheetResistance3D => {
            ScenarioOutput::Chart(sheet_resistance_3d(catalog, engine)?)
        }
        Scenario::Thickness => ScenarioOutput::Chart(thickness(catalog, engine)?),
        Scenario::TraceResistance => ScenarioOutput::Chart(trace_resistance(catalog, engine)?),
        Scenario::CarbonResistance => ScenarioOutput::Chart(carbon_resistance(catalog, engine)?),
        Scenario::ThicknessCheck => ScenarioOutput::Report(thickness_check(catalog, engine)?),
        Scenario::SheetResistanceTable => {
            ScenarioOutput::Report(sheet_resistance_table(catalog, engine)?)
        }
    };

    Ok(output)
}

fn copper(catalog: &Catalog) -> Result<Vec<&Material>> {
    catalog.select(&["copper"])
}

fn bulk_resistivity(catalog: &Catalog, engine: &DerivedQuantityEngine) -> Result<ComparativePlot> {
    let colors = ColorScheme::new();
    let mut plot = ComparativePlot::new(engine.clone());

    plot.bulk_resistivity(
        &catalog.select(&["silver", "copper", "gold"])?,
        colors.metal,
    );
    for category in &INK_CATEGORIES[..4] {
        plot.bulk_resistivity(
            &catalog.by_category(*category),
            colors.category_color(*category),
        );
    }

    Ok(plot)
}

fn sheet_resistance(
    catalog: &Catalog,
    engine: &DerivedQuantityEngine,
    units: &str,
) -> Result<ComparativePlot> {
    let colors = ColorScheme::new();
    let mut plot = ComparativePlot::new(engine.clone());

    plot.sheet_resistance(&copper(catalog)?, colors.metal, units)?;
    for category in INK_CATEGORIES {
        plot.sheet_resistance(
            &catalog.by_category(category),
            colors.category_color(category),
            units,
        )?;
    }

    Ok(plot)
}

fn sheet_resistance_3d(
    catalog: &Catalog,
    engine: &DerivedQuantityEngine,
) -> Result<ComparativePlot> {
    let colors = ColorScheme::new();
    let mut plot = ComparativePlot::new(engine.clone());

    plot.sheet_resistance_3d(&catalog.select(&["silver", "copper", "gold"])?, colors.metal)?;
    for category in [
        Category::Screen,
        Category::Flexo,
        Category::Inkjet,
        Category::Aerosol,
    ] {
        plot.sheet_resistance_3d(
            &catalog.by_category(category),
            colors.category_color(category),
        )?;
    }

    Ok(plot)
}

fn thickness(catalog: &Catalog, engine: &DerivedQuantityEngine) -> Result<ComparativePlot> {
    let colors = ColorScheme::new();
    let mut plot = ComparativePlot::new(engine.clone());

    plot.thickness(&copper(catalog)?, colors.metal)?;
    for category in &INK_CATEGORIES[..4] {
        plot.thickness(
            &catalog.by_category(*category),
            colors.category_color(*category),
        )?;
    }

    Ok(plot)
}

fn trace_resistance(catalog: &Catalog, engine: &DerivedQuantityEngine) -> Result<ComparativePlot> {
    let colors = ColorScheme::new();
    let trace = TraceGeometry::heater(engine.units())?;
    let mut plot = ComparativePlot::new(engine.clone());

    plot.trace_resistance(&trace, &copper(catalog)?, colors.metal, HEATER_TRACE_TITLE)?;
    for category in INK_CATEGORIES {
        plot.trace_resistance(
            &trace,
            &catalog.by_category(category),
            colors.category_color(category),
            HEATER_TRACE_TITLE,
        )?;
    }

    Ok(plot)
}

fn carbon_resistance(
    catalog: &Catalog,
    engine: &DerivedQuantityEngine,
) -> Result<ComparativePlot> {
    let colors = ColorScheme::new();
    let carbon = catalog.by_category(Category::Carbon);
    let mut plot = ComparativePlot::new(engine.clone());

    for trace in TraceGeometry::width_sweep(engine.units())? {
        plot.trace_resistance_vs_width(&trace, &carbon, colors.carbon, WIDTH_SWEEP_TITLE)?;
    }

    Ok(plot)
}

/// Back out film thickness from the corners of the bulk and sheet resistance ranges.
fn thickness_check(catalog: &Catalog, engine: &DerivedQuantityEngine) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for material in catalog.with_sheet_resistance() {
        let Some(sheet) = material.sheet_resistance else {
            continue;
        };
        lines.push(format!("{} ({})", material.name, material.thickness));

        for bulk in material.bulk_resistivity.bounds() {
            for sr in sheet.bounds() {
                let th = engine.thickness_from_sheet_resistance(
                    bulk,
                    material.bulk_resistivity.unit(),
                    sr,
                    sheet.unit(),
                )?;
                lines.push(format!(
                    "  {bulk} {}\t{sr} {}\t{th:.3} {}",
                    material.bulk_resistivity.unit(),
                    sheet.unit(),
                    Unit::Micrometer
                ));
            }
        }
    }

    Ok(lines)
}

fn sheet_resistance_table(
    catalog: &Catalog,
    engine: &DerivedQuantityEngine,
) -> Result<Vec<String>> {
    let mut lines = vec![format!(
        "material\tmean\tstdev\tmin\tmax ({})",
        Unit::MilliOhmPerSquare
    )];

    for material in catalog.iter() {
        let grid = engine.sheet_resistance_grid(material, 10, Unit::MilliOhmPerSquare)?;
        let stats = SummaryStatistics::from_population(&sample_values(&grid))?;
        lines.push(format!("{}\t{stats}", material.name));
    }

    Ok(lines)
}
