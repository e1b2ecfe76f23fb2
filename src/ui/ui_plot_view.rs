use eframe::egui::{RichText, Stroke, Ui, Vec2b};
use egui_plot::{AxisHints, BoxElem, BoxPlot, BoxSpread, GridInput, GridMark, Legend, Plot, VPlacement};

use crate::config::plot::PLOT_CONFIG;

use crate::models::{BoxGrouping, BoxSummary, Chart, Trace};

use crate::ui::styles::apply_opacity;
use crate::ui::ui_text::{ICON_CHART, UI_TEXT};
use crate::ui::utils::{format_plot_time, format_price};

use crate::utils::{TimeUtils, naive_to_epoch_ms};

/// Calendar-friendly tick steps for the time axis, in ms.
const TIME_STEPS_MS: [i64; 15] = [
    TimeUtils::MS_IN_MIN,
    5 * TimeUtils::MS_IN_MIN,
    15 * TimeUtils::MS_IN_MIN,
    30 * TimeUtils::MS_IN_MIN,
    TimeUtils::MS_IN_H,
    2 * TimeUtils::MS_IN_H,
    6 * TimeUtils::MS_IN_H,
    12 * TimeUtils::MS_IN_H,
    TimeUtils::MS_IN_D,
    2 * TimeUtils::MS_IN_D,
    7 * TimeUtils::MS_IN_D,
    14 * TimeUtils::MS_IN_D,
    30 * TimeUtils::MS_IN_D,
    90 * TimeUtils::MS_IN_D,
    365 * TimeUtils::MS_IN_D,
];

const TARGET_TICKS: f64 = 8.0;

// Helper: Smallest calendar step giving at most ~TARGET_TICKS marks over the range
fn calculate_time_step(range_ms: f64) -> f64 {
    let raw_step = range_ms / TARGET_TICKS;
    if let Some(step) = TIME_STEPS_MS.iter().map(|s| *s as f64).find(|s| *s >= raw_step) {
        return step;
    }

    // Past the calendar table: whole years on a 1, 2, 5, 10... ladder
    let year = TIME_STEPS_MS[TIME_STEPS_MS.len() - 1] as f64;
    let years = raw_step / year;
    let mag = 10.0_f64.powi(years.log10().floor() as i32);
    let normalized = years / mag;
    let nice_step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice_step * mag * year
}

fn time_grid_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }
    let step = calculate_time_step(range);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

// Helper to build the Time Axis using the chart's tick pattern
fn create_time_axis(chart: &Chart) -> AxisHints<'static> {
    let pattern = chart.x_axis.tick_format.unwrap_or(TimeUtils::STANDARD_DATE_FORMAT);
    AxisHints::new_x()
        .label(chart.x_axis.title)
        .formatter(move |mark, _range| format_plot_time(mark.value, pattern))
        .placement(VPlacement::Bottom)
}

fn create_y_axis(chart: &Chart) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(chart.y_axis.title)
        .formatter(|mark, _range| format_price(mark.value))
}

/// Box width in plot units (ms): a fraction of the tightest spacing between boxes.
fn box_width_ms(boxes: &[&BoxSummary]) -> f64 {
    let mut xs: Vec<i64> = boxes.iter().map(|b| naive_to_epoch_ms(b.x)).collect();
    xs.sort_unstable();
    xs.dedup();
    let min_gap = xs.windows(2).map(|w| w[1] - w[0]).min();
    match min_gap {
        Some(gap) => gap as f64 * PLOT_CONFIG.box_width_pct,
        None => PLOT_CONFIG.single_box_width_ms,
    }
}

fn build_box_plot(trace: &Trace, boxes: &[BoxSummary], width: f64) -> BoxPlot {
    let fill = apply_opacity(trace.color, PLOT_CONFIG.box_fill_opacity);
    let stroke = Stroke::new(PLOT_CONFIG.box_stroke_width, trace.color);

    let elems: Vec<BoxElem> = boxes
        .iter()
        .map(|b| {
            BoxElem::new(
                naive_to_epoch_ms(b.x) as f64,
                BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
            )
            .name(format!(
                "{} (n={})",
                b.x.format(PLOT_CONFIG.x_tick_format),
                b.count
            ))
            .box_width(width)
            .whisker_width(width * 0.5)
            .fill(fill)
            .stroke(stroke)
        })
        .collect();

    BoxPlot::new(trace.name, elems).color(trace.color)
}

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    // Value bounds plus configured padding
    fn calculate_y_bounds(chart: &Chart) -> Option<(f64, f64)> {
        let (lo, hi) = chart.value_bounds()?;
        let range = hi - lo;
        let pad = if range > 0.0 {
            range * PLOT_CONFIG.plot_y_padding_pct
        } else {
            lo.abs().max(1.0) * PLOT_CONFIG.plot_y_padding_pct
        };
        Some((lo - pad, hi + pad))
    }

    pub fn show_chart(&self, ui: &mut Ui, chart: &Chart, grouping: BoxGrouping) {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} {}", ICON_CHART, chart.title));
        });
        ui.add_space(4.0);

        if chart.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new(UI_TEXT.msg_empty_chart).color(PLOT_CONFIG.color_text_subdued));
            });
            return;
        }

        let actual_boxes = chart.actual.boxes(grouping);
        let predicted_boxes = chart.predicted.boxes(grouping);
        let all_boxes: Vec<&BoxSummary> = actual_boxes.iter().chain(&predicted_boxes).collect();
        let width = box_width_ms(&all_boxes);

        let mut plot = Plot::new("comparison_plot")
            .custom_x_axes(vec![create_time_axis(chart)])
            .custom_y_axes(vec![create_y_axis(chart)])
            .x_grid_spacer(time_grid_marks)
            .show_grid(Vec2b::new(chart.x_axis.show_grid, chart.y_axis.show_grid))
            .legend(Legend::default())
            .width(chart.width.min(ui.available_width()))
            .height(chart.height.min(ui.available_height()))
            .allow_scroll(false);

        if let Some((t_min, t_max)) = chart.time_bounds() {
            plot = plot
                .include_x(naive_to_epoch_ms(t_min) as f64 - width)
                .include_x(naive_to_epoch_ms(t_max) as f64 + width);
        }
        if let Some((y_min, y_max)) = Self::calculate_y_bounds(chart) {
            plot = plot.include_y(y_min).include_y(y_max);
        }

        let actual_plot = build_box_plot(&chart.actual, &actual_boxes, width);
        let predicted_plot = build_box_plot(&chart.predicted, &predicted_boxes, width);

        ui.vertical_centered(|ui| {
            plot.show(ui, |plot_ui| {
                plot_ui.box_plot(actual_plot);
                plot_ui.box_plot(predicted_plot);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_step_snaps_to_calendar_units() {
        assert_eq!(calculate_time_step(8.0 * TimeUtils::MS_IN_MIN as f64), TimeUtils::MS_IN_MIN as f64);
        assert_eq!(calculate_time_step(6.0 * TimeUtils::MS_IN_H as f64), TimeUtils::MS_IN_H as f64);
        assert_eq!(calculate_time_step(30.0 * TimeUtils::MS_IN_D as f64), 7.0 * TimeUtils::MS_IN_D as f64);
    }

    #[test]
    fn time_step_beyond_a_year_stays_on_year_ladder() {
        let year = (365 * TimeUtils::MS_IN_D) as f64;
        assert_eq!(calculate_time_step(8.0 * year), year);
        assert_eq!(calculate_time_step(12.0 * year), 2.0 * year);
        assert_eq!(calculate_time_step(300.0 * year), 50.0 * year);
    }

    #[test]
    fn mark_count_is_bounded_when_zoomed_far_out() {
        for span in [1e13, 1e15, 1e17, 1e300] {
            let marks = time_grid_marks(GridInput {
                bounds: (0.0, span),
                base_step_size: 1.0,
            });
            assert!(!marks.is_empty(), "span {span}");
            assert!(marks.len() <= 2 * TARGET_TICKS as usize, "span {span}: {} marks", marks.len());
        }
    }

    #[test]
    fn y_bounds_pad_flat_series() {
        use crate::{domain::{DatasetId, Observation}, models::render};
        use chrono::NaiveDate;

        let ts = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(10, 0, 0).unwrap();
        let chart = render(&[Observation::new(ts, 100.0)], &[Observation::new(ts, 100.0)], &DatasetId::new("ABC"));
        let (lo, hi) = PlotView::calculate_y_bounds(&chart).unwrap();
        assert!(lo < 100.0 && hi > 100.0);
    }
}
