// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::data::Category;
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Named marker colors used by the comparison charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotColor {
    Gold,
    Purple,
    Black,
    Cyan,
    Orange,
    Gray,
}

impl PlotColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PlotColor::Gold => (255, 215, 0),
            PlotColor::Purple => (128, 0, 128),
            PlotColor::Black => (0, 0, 0),
            PlotColor::Cyan => (0, 255, 255),
            PlotColor::Orange => (255, 165, 0),
            PlotColor::Gray => (128, 128, 128),
        }
    }

    pub fn to_color32(&self) -> Color32 {
        let (r, g, b) = self.rgb();
        Color32::from_rgb(r, g, b)
    }

    pub fn to_rgb_color(&self) -> plotters::style::RGBColor {
        let (r, g, b) = self.rgb();
        plotters::style::RGBColor(r, g, b)
    }
}

pub struct ColorScheme {
    pub metal: PlotColor,
    pub flexo: PlotColor,
    pub inkjet: PlotColor,
    pub screen: PlotColor,
    pub aerosol: PlotColor,
    pub carbon: PlotColor,
}

impl ColorScheme {
    pub fn new() -> Self {
        Self {
            metal: PlotColor::Gold,
            flexo: PlotColor::Purple,
            inkjet: PlotColor::Black,
            screen: PlotColor::Cyan,
            aerosol: PlotColor::Orange,
            carbon: PlotColor::Gray,
        }
    }

    pub fn category_color(&self, category: Category) -> PlotColor {
        match category {
            Category::Metal => self.metal,
            Category::Flexo => self.flexo,
            Category::Inkjet => self.inkjet,
            Category::Screen => self.screen,
            Category::Aerosol => self.aerosol,
            Category::Carbon => self.carbon,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new()
    }
}
