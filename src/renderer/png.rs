// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::error::{Error, Result};
use crate::renderer::axes::{AxisConfig, PlotKind};
use crate::renderer::chart::ComparativePlot;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashSet;
use std::path::Path;

/// Render the chart to a PNG file at `path`.
pub fn write_png(plot: &ComparativePlot, path: &Path, size: (u32, u32)) -> Result<()> {
    let axes = plot
        .axes()
        .ok_or_else(|| Error::Render("chart has no axes, nothing was plotted".to_string()))?;

    let drawn = match plot.kind() {
        Some(PlotKind::SheetResistance3D) => draw_chart_3d(plot, axes, path, size),
        _ => draw_chart(plot, axes, path, size),
    };
    drawn.map_err(|e| Error::Render(e.to_string()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn draw_chart(
    plot: &ComparativePlot,
    axes: &AxisConfig,
    path: &Path,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let ([x0, x1], [y0, y1]) = plot.bounds();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&axes.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let blank = |_: &f64| String::new();
    let custom_y = !axes.y_ticks.is_empty();
    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_desc(axes.x_label.as_str())
            .y_desc(axes.y_label.as_str())
            .x_label_formatter(&blank);
        if custom_y {
            mesh.disable_y_mesh().y_label_formatter(&blank);
        }
        mesh.draw()?;
    }

    let label_font = ("sans-serif", 16).into_font();
    for tick in &axes.y_ticks {
        chart.draw_series(LineSeries::new(
            vec![(x0, tick.value), (x1, tick.value)],
            BLACK.mix(0.15),
        ))?;
        let (px, py) = chart.backend_coord(&(x0, tick.value));
        let style = TextStyle::from(label_font.clone()).pos(Pos::new(HPos::Right, VPos::Center));
        root.draw(&Text::new(tick.label.clone(), (px - 8, py), style))?;
    }
    for tick in &axes.x_ticks {
        let (px, py) = chart.backend_coord(&(tick.value, y0));
        let style = TextStyle::from(label_font.clone()).pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(tick.label.clone(), (px, py + 8), style))?;
    }

    let radius = axes.marker_radius.round() as i32;
    let mut labelled = HashSet::new();
    for series in plot.series() {
        let color = series.color.to_rgb_color();
        let drawn = chart.draw_series(
            series
                .points
                .iter()
                .map(|p| Circle::new((p[0], p[1]), radius, color.filled())),
        )?;
        if labelled.insert(series.label.clone()) {
            drawn
                .label(series.label.as_str())
                .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_chart_3d(
    plot: &ComparativePlot,
    axes: &AxisConfig,
    path: &Path,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let ([x0, x1], [y0, y1]) = plot.bounds();
    let [z0, z1] = plot.z_bounds();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let (chart_area, footer) = root.split_vertically((size.1 as i32 - 40).max(1));

    let mut chart = ChartBuilder::on(&chart_area)
        .caption(&axes.title, ("sans-serif", 28))
        .margin(20)
        .build_cartesian_3d(x0..x1, y0..y1, z0..z1)?;
    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });
    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    let radius = axes.marker_radius.round() as i32;
    for series in plot.series() {
        let Some(heights) = series.z.as_deref() else {
            continue;
        };
        let color = series.color.to_rgb_color();
        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .zip(heights)
                    .map(|(p, &z)| Circle::new((p[0], p[1], z), radius, color.filled())),
            )?
            .label(series.label.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    // The 3D axes carry no names of their own
    let names = format!(
        "x: {}    y: {}    z: {}",
        axes.x_label,
        axes.y_label,
        axes.z_label.as_deref().unwrap_or_default()
    );
    let style = TextStyle::from(("sans-serif", 16).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
    footer.draw(&Text::new(names, (size.0 as i32 / 2, 20), style))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DerivedQuantityEngine;

    #[test]
    fn test_empty_chart_is_rejected() {
        let plot = ComparativePlot::new(DerivedQuantityEngine::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let result = write_png(&plot, &path, (800, 600));
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_surface_chart_output() {
        let catalog = crate::data::Catalog::standard().unwrap();
        let mut plot = ComparativePlot::new(DerivedQuantityEngine::default());
        plot.sheet_resistance_3d(
            &catalog.by_category(crate::data::Category::Screen),
            crate::renderer::PlotColor::Cyan,
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surface.png");

        // Text needs a system font; without one the failure surfaces as a render error
        match write_png(&plot, &path, (800, 600)) {
            Ok(()) => assert!(std::fs::metadata(&path).unwrap().len() > 0),
            Err(e) => assert!(matches!(e, Error::Render(_)), "unexpected error: {e}"),
        }
    }
}
