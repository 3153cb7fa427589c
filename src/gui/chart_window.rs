// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use crate::renderer::{AxisConfig, ComparativePlot, GroupSummary, Series};
use egui::{CollapsingHeader, Context, Grid};
use egui_plot::{Legend, Plot, PlotPoints, Points};

/// Interactive view of a finished [`ComparativePlot`].
///
/// Three-dimensional charts are shown from above, as bulk resistivity against thickness.
pub struct ChartWindow {
    axes: AxisConfig,
    series: Vec<Series>,
    summaries: Vec<GroupSummary>,
    bounds: ([f64; 2], [f64; 2]),
}

impl ChartWindow {
    /// `None` when nothing was plotted.
    pub fn from_plot(plot: &ComparativePlot) -> Option<Self> {
        let axes = plot.axes()?.clone();
        Some(Self {
            axes,
            series: plot.series().to_vec(),
            summaries: plot.summaries().to_vec(),
            bounds: plot.bounds(),
        })
    }

    pub fn title(&self) -> &str {
        &self.axes.title
    }

    fn show_plot(&self, ui: &mut egui::Ui) {
        let ([x0, x1], [y0, y1]) = self.bounds;
        let x_axes = self.axes.clone();
        let y_axes = self.axes.clone();
        // Category ticks sit a couple of units left of the auto grid marks
        let x_tolerance = if x_axes.x_ticks.len() > 1 {
            (x_axes.x_ticks[1].value - x_axes.x_ticks[0].value).abs() / 4.0
        } else {
            0.5
        };
        let linear_x = x_axes.x_ticks.is_empty();
        let linear_y = y_axes.y_ticks.is_empty();

        Plot::new("comparison_plot")
            .legend(Legend::default())
            .x_axis_label(self.axes.x_label.clone())
            .y_axis_label(self.axes.y_label.clone())
            .include_x(x0)
            .include_x(x1)
            .include_y(y0)
            .include_y(y1)
            .x_axis_formatter(move |mark, _range| {
                if linear_x {
                    format!("{}", mark.value)
                } else {
                    x_axes
                        .x_tick_label(mark.value, x_tolerance)
                        .unwrap_or_default()
                        .to_string()
                }
            })
            .y_axis_formatter(move |mark, _range| {
                if linear_y {
                    format!("{}", mark.value)
                } else {
                    y_axes
                        .y_tick_label(mark.value, 1e-6)
                        .unwrap_or_default()
                        .to_string()
                }
            })
            .show(ui, |plot_ui| {
                for series in &self.series {
                    if series.points.is_empty() {
                        continue;
                    }
                    let points = PlotPoints::from(series.points.clone());
                    plot_ui.points(
                        Points::new(&series.label, points)
                            .color(series.color.to_color32())
                            .radius(self.axes.marker_radius as f32),
                    );
                }
            });
    }

    fn show_summaries(&self, ui: &mut egui::Ui) {
        if self.summaries.is_empty() {
            return;
        }

        CollapsingHeader::new("Trace Resistance Statistics (Ω)")
            .default_open(true)
            .show(ui, |ui| {
                Grid::new("trace_statistics")
                    .num_columns(5)
                    .spacing([40.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for header in ["Group", "Mean", "Std Dev", "Min", "Max"] {
                            ui.strong(header);
                        }
                        ui.end_row();

                        for summary in &self.summaries {
                            let stats = &summary.statistics;
                            ui.label(&summary.label);
                            ui.label(format!("{:.3}", stats.mean));
                            ui.label(format!("{:.3}", stats.stdev));
                            ui.label(format!("{:.3}", stats.min));
                            ui.label(format!("{:.3}", stats.max));
                            ui.end_row();
                        }
                    });
            });
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("summary_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.show_summaries(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.axes.title);
            ui.separator();
            self.show_plot(ui);
        });
    }
}
