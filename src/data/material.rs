// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spacing of plot indices between categories on the comparison charts.
pub const CATEGORY_INDEX_STEP: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Metal,
    Flexo,
    Inkjet,
    Screen,
    Aerosol,
    Carbon,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Metal,
        Category::Flexo,
        Category::Inkjet,
        Category::Screen,
        Category::Aerosol,
        Category::Carbon,
    ];

    /// One-based position of the category, metal first.
    pub fn ordinal(&self) -> u32 {
        match self {
            Category::Metal => 1,
            Category::Flexo => 2,
            Category::Inkjet => 3,
            Category::Screen => 4,
            Category::Aerosol => 5,
            Category::Carbon => 6,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Metal => "metal",
            Category::Flexo => "flexo",
            Category::Inkjet => "inkjet",
            Category::Screen => "screen",
            Category::Aerosol => "aerosol",
            Category::Carbon => "carbon",
        }
    }

    pub fn base_plot_index(&self) -> u32 {
        CATEGORY_INDEX_STEP * self.ordinal()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub category: Category,
    pub name: String,
    pub bulk_resistivity: Quantity,
    pub thickness: Quantity,
    pub sheet_resistance: Option<Quantity>,
    pub plot_index: u32,
}

impl Material {
    pub fn is_metal(&self) -> bool {
        self.category == Category::Metal
    }
}

/// Standard copper foil weight for rigid boards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PcbWeight {
    pub ounces: f64,
    pub microns: f64,
    pub mils: f64,
}

pub const PCB_WEIGHTS: [PcbWeight; 4] = [
    PcbWeight {
        ounces: 0.5,
        microns: 17.4,
        mils: 0.7,
    },
    PcbWeight {
        ounces: 1.0,
        microns: 34.8,
        mils: 1.4,
    },
    PcbWeight {
        ounces: 2.0,
        microns: 69.6,
        mils: 2.8,
    },
    PcbWeight {
        ounces: 4.0,
        microns: 139.2,
        mils: 5.6,
    },
];

/// Thicknesses of the standard copper weights in micrometers.
pub fn pcb_weight_thicknesses() -> Vec<f64> {
    PCB_WEIGHTS.iter().map(|w| w.microns).collect()
}
