// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Ink Resistivity Library
//!
//! A Rust library for comparing the electrical performance of printed
//! conductive inks against copper foil.
//!
//! # Features
//!
//! - Built-in catalog of metals and flexo, inkjet, screen, aerosol and carbon inks
//! - Quantities carrying an estimate, a range and a unit
//! - Sheet resistance and trace resistance sweeps over the value ranges
//! - Summary statistics of the resulting populations
//! - Scatter charts written to PNG and shown in an interactive window
//!
//! # Usage
//!
//! ```rust,no_run
//! use ink_resistivity::{Catalog, DerivedQuantityEngine, Unit};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::standard()?;
//! let engine = DerivedQuantityEngine::default();
//!
//! let copper = catalog.by_name("copper")?;
//! let sheet = engine.sheet_resistance(
//!     copper.bulk_resistivity.estimate(),
//!     copper.thickness.estimate(),
//!     Unit::MilliOhmPerSquare,
//! )?;
//! println!("copper: {sheet:.4} mΩ/sq");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `units`: Unit identifiers and conversions backed by `uom`
//! - `data`: Quantities, materials, the catalog and trace geometry
//! - `engine`: Derived quantities, sampling and statistics
//! - `renderer`: Chart assembly, axes, colors and PNG output
//! - `gui`: Interactive chart window using egui
//! - `scenarios`: The fixed comparisons offered by the command line

#[macro_use]
extern crate uom;

pub mod data;
pub mod engine;
pub mod error;
pub mod gui;
pub mod renderer;
pub mod scenarios;
pub mod units;

// Re-export commonly used types
pub use data::{Catalog, CatalogBuilder, Category, Material, MaterialSpec, Quantity, TraceGeometry};

pub use engine::{divide_interval, DerivedQuantityEngine, SummaryStatistics};

pub use error::{Error, Result};

pub use renderer::{write_png, ColorScheme, ComparativePlot, PlotColor, PlotKind};

pub use gui::ChartWindow;

pub use scenarios::{run_scenario, Scenario, ScenarioOutput};

pub use units::{Unit, UnitConverter};

use std::path::PathBuf;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get library information as a formatted string
pub fn get_library_info() -> String {
    format!("{NAME} v{VERSION} - {DESCRIPTION}")
}

/// Get default application configuration
pub fn get_default_config() -> AppConfig {
    AppConfig::default()
}

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title
    pub window_title: String,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
    /// Where the chart image is written
    pub output_path: PathBuf,
    /// Chart image width in pixels
    pub image_width: u32,
    /// Chart image height in pixels
    pub image_height: u32,
    /// Whether to open the interactive window after writing the image
    pub show_window: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: format!("{NAME} v{VERSION}"),
            window_width: 1200.0,
            window_height: 800.0,
            output_path: PathBuf::from("out.png"),
            image_width: 1200,
            image_height: 800,
            show_window: true,
        }
    }
}

impl AppConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_window(mut self, show: bool) -> Self {
        self.show_window = show;
        self
    }
}

/// Write the chart image, then open the interactive window if configured.
///
/// The image is always written first, so a failed window still leaves the PNG behind.
///
/// # Example
///
/// ```rust,no_run
/// use ink_resistivity::{display, get_default_config, run_scenario};
/// use ink_resistivity::{Catalog, DerivedQuantityEngine, Scenario, ScenarioOutput};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::standard()?;
/// let engine = DerivedQuantityEngine::default();
/// if let ScenarioOutput::Chart(plot) = run_scenario(Scenario::default(), &catalog, &engine)? {
///     display(&plot, &get_default_config())?;
/// }
/// # Ok(())
/// # }
/// ```
pub fn display(plot: &ComparativePlot, config: &AppConfig) -> Result<()> {
    write_png(
        plot,
        &config.output_path,
        (config.image_width, config.image_height),
    )?;

    if config.show_window {
        run_chart_window(plot, config)?;
    }
    Ok(())
}

/// Open the interactive chart window and block until it is closed.
pub fn run_chart_window(plot: &ComparativePlot, config: &AppConfig) -> Result<()> {
    let app = ChartWindow::from_plot(plot)
        .ok_or_else(|| Error::Render("chart has no axes, nothing was plotted".to_string()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(app.title()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| Error::Render(e.to_string()))
}
