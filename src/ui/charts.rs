use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use eframe::egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::generate_palette;
use crate::explore::aggregate::FrequencyTable;
use crate::explore::chart::{ChartData, ChartKind, ChartSpec, HistogramBin};

// ---------------------------------------------------------------------------
// ChartSpec rendering (central panel)
// ---------------------------------------------------------------------------

/// Render one chart spec into the given vertical space. `id` salts the plot
/// widget so the two chart slots never collide.
pub fn chart_view(ui: &mut Ui, id: &str, spec: &ChartSpec, height: f32) {
    if spec.kind != ChartKind::Empty {
        ui.strong(&spec.title);
    }

    match (&spec.kind, &spec.data) {
        (ChartKind::Bar, ChartData::Frequencies(table)) => bar_chart(ui, id, table, height),
        (ChartKind::Histogram, ChartData::Bins(bins)) => histogram(ui, id, bins, height),
        (ChartKind::Pie, ChartData::Frequencies(table)) => pie_chart(ui, table, height),
        _ => {
            // The deliberate empty slot of a continuous selection.
            ui.allocate_ui(Vec2::new(ui.available_width(), height), |ui| {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.weak("Pie chart not applicable to a continuous column");
                });
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Bar chart – one bar per category
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, id: &str, table: &FrequencyTable, height: f32) {
    let labels: Vec<String> = table.entries.iter().map(|e| e.value.to_string()).collect();
    let colors = generate_palette(labels.len());

    let bars: Vec<Bar> = table
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            Bar::new(i as f64, e.count as f64)
                .width(0.6)
                .name(&labels[i])
                .fill(colors[i])
        })
        .collect();

    let axis_labels = labels.clone();
    Plot::new(id)
        .height(height)
        .y_axis_label("count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 0.01 && i >= 0.0 && (i as usize) < axis_labels.len() {
                axis_labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Histogram – one bar per bin
// ---------------------------------------------------------------------------

fn histogram(ui: &mut Ui, id: &str, bins: &[HistogramBin], height: f32) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            let center = (b.lower + b.upper) / 2.0;
            // Degenerate single-value bin still gets a visible bar.
            let width = if b.upper > b.lower {
                b.upper - b.lower
            } else {
                1.0
            };
            Bar::new(center, b.count as f64)
                .width(width * 0.95)
                .name(format!("{:.1}..{:.1}", b.lower, b.upper))
                .fill(Color32::LIGHT_BLUE)
        })
        .collect();

    Plot::new(id)
        .height(height)
        .y_axis_label("count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Pie chart – painter-drawn triangle fan + swatch legend
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, table: &FrequencyTable, height: f32) {
    let total = table.total();
    if total == 0 {
        ui.allocate_ui(Vec2::new(ui.available_width(), height), |ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.weak("No data");
            });
        });
        return;
    }

    let colors = generate_palette(table.len());

    ui.horizontal(|ui: &mut Ui| {
        let size = height.min(ui.available_width() * 0.6).max(40.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
        let center = response.rect.center();
        let radius = size / 2.0 - 4.0;

        // Slices start at 12 o'clock and run clockwise.
        let mut angle = -FRAC_PI_2;
        for (entry, color) in table.entries.iter().zip(&colors) {
            let sweep = (entry.count as f32 / total as f32) * TAU;
            let steps = ((sweep / 0.05).ceil() as usize).max(1);
            for step in 0..steps {
                let a0 = angle + sweep * step as f32 / steps as f32;
                let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![center, arc_point(center, radius, a0), arc_point(center, radius, a1)],
                    *color,
                    Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        // Legend: swatch + label + share.
        ui.vertical(|ui: &mut Ui| {
            for (entry, color) in table.entries.iter().zip(&colors) {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, *color);
                    let pct = 100.0 * entry.count as f64 / total as f64;
                    ui.label(format!("{} ({pct:.1}%)", entry.value));
                });
            }
        });
    });
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * Vec2::new(angle.cos(), angle.sin())
}
