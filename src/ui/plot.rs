use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::data::aggregate::SuccessSummary;
use crate::state::DashboardState;

/// Arc segments for a full circle; slices get a proportional share.
const CIRCLE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Central panel: pie chart above scatter chart
// ---------------------------------------------------------------------------

/// Render both charts, splitting the available height between them.
pub fn charts(ui: &mut Ui, state: &DashboardState) {
    let chart_height = ((ui.available_height() - 80.0) / 2.0).max(150.0);

    ui.heading(&state.pie.title);
    success_pie(ui, state, chart_height);

    ui.separator();

    ui.heading(&state.scatter.title);
    payload_scatter(ui, state, chart_height);
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// One wedge of the pie, in unit-circle plot coordinates.
#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    /// Centre followed by the arc points, clockwise from 12 o'clock.
    pub outline: Vec<[f64; 2]>,
    /// Where the percentage label goes.
    pub label_pos: [f64; 2],
}

/// Lay out the wedges for a summary. Empty summaries yield no wedges.
pub fn pie_slices(summary: &SuccessSummary) -> Vec<PieSlice> {
    let total = summary.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = FRAC_PI_2;
    summary
        .slices
        .iter()
        .map(|(label, count)| {
            let fraction = *count as f64 / total as f64;
            let sweep = fraction * TAU;
            let segments = ((fraction * CIRCLE_SEGMENTS as f64).ceil() as usize).max(2);

            let mut outline = Vec::with_capacity(segments + 2);
            outline.push([0.0, 0.0]);
            for i in 0..=segments {
                let angle = start - sweep * i as f64 / segments as f64;
                outline.push([angle.cos(), angle.sin()]);
            }

            let mid = start - sweep / 2.0;
            let label_pos = [0.6 * mid.cos(), 0.6 * mid.sin()];
            start -= sweep;

            PieSlice {
                label: label.clone(),
                count: *count,
                fraction,
                outline,
                label_pos,
            }
        })
        .collect()
}

fn success_pie(ui: &mut Ui, state: &DashboardState, height: f32) {
    let slices = pie_slices(&state.pie);
    if slices.is_empty() {
        ui.label("No launches match this selection.");
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for slice in &slices {
                let color = state.slice_color(&slice.label);
                let points: PlotPoints = slice.outline.iter().copied().collect();
                plot_ui.polygon(
                    Polygon::new(points)
                        .name(format!("{} ({})", slice.label, slice.count))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
            }
            for slice in &slices {
                let [x, y] = slice.label_pos;
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(format!("{:.1}%", slice.fraction * 100.0))
                        .color(Color32::BLACK)
                        .strong(),
                ));
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn payload_scatter(ui: &mut Ui, state: &DashboardState, height: f32) {
    if state.scatter.is_empty() {
        ui.label("No launches in the selected payload range.");
        return;
    }

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.slider.min)
        .include_x(state.slider.max)
        .include_y(-0.25)
        .include_y(1.25)
        .show(ui, |plot_ui| {
            for (category, coords) in state.scatter.by_category() {
                let points: PlotPoints = coords.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.booster_color(category))
                        .shape(MarkerShape::Circle)
                        .radius(5.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(slices: &[(&str, usize)]) -> SuccessSummary {
        SuccessSummary {
            title: "t".into(),
            slices: slices.iter().map(|(l, n)| (l.to_string(), *n)).collect(),
        }
    }

    #[test]
    fn test_pie_fractions_sum_to_one() {
        let slices = pie_slices(&summary(&[("A", 3), ("B", 1), ("C", 4)]));
        assert_eq!(slices.len(), 3);
        let sum: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(slices[0].fraction, 3.0 / 8.0);
    }

    #[test]
    fn test_pie_slices_are_contiguous() {
        let slices = pie_slices(&summary(&[("Success", 2), ("Failure", 1)]));
        // Every wedge starts at the centre.
        assert!(slices.iter().all(|s| s.outline[0] == [0.0, 0.0]));
        // First wedge starts at 12 o'clock.
        let top = slices[0].outline[1];
        assert!(top[0].abs() < 1e-12 && (top[1] - 1.0).abs() < 1e-12);
        // Each wedge ends where the next begins.
        let end = *slices[0].outline.last().unwrap();
        let next = slices[1].outline[1];
        assert!((end[0] - next[0]).abs() < 1e-12 && (end[1] - next[1]).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary_has_no_slices() {
        assert!(pie_slices(&summary(&[])).is_empty());
    }
}
