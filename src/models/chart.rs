//! Comparative Renderer: a plain chart description, drawn later by `ui::ChartView`.

use {
    crate::{
        config::PLOT_CONFIG,
        domain::{DatasetId, Observation, SeriesKind},
    },
    chrono::{NaiveDateTime, NaiveTime},
    eframe::egui::Color32,
    itertools::Itertools,
    serde::{Deserialize, Serialize},
    statrs::statistics::{Data, Max, Min, OrderStatistics},
    strum_macros::{Display, EnumIter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Date,
    Linear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub title: &'static str,
    pub kind: AxisKind,
    /// strftime pattern; only meaningful for `AxisKind::Date`
    pub tick_format: Option<&'static str>,
    pub show_grid: bool,
}

/// How points of one trace are bucketed into boxes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum BoxGrouping {
    /// One box per distinct timestamp
    #[default]
    #[strum(to_string = "Per timestamp")]
    Timestamp,
    /// One box per calendar day, centred at noon
    #[strum(to_string = "Per day")]
    Day,
}

/// Five-number summary for one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub x: NaiveDateTime,
    pub count: usize,
    pub min: f64,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub max: f64,
}

impl BoxSummary {
    fn from_values(x: NaiveDateTime, values: Vec<f64>) -> Self {
        let count = values.len();
        let mut data = Data::new(values);
        let (min, max) = (data.min(), data.max());
        let q1 = data.lower_quartile();
        let median = data.median();
        let q3 = data.upper_quartile();

        // Whiskers reach the furthest point still inside the IQR fences.
        let reach = (q3 - q1) * PLOT_CONFIG.whisker_iqr_factor;
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);
        let inside = data.iter().copied().filter(|v| *v >= lo_fence && *v <= hi_fence);
        let (lower_whisker, upper_whisker) = inside
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or((min, max));

        Self {
            x,
            count,
            min,
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            max,
        }
    }
}

/// One labelled series on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub kind: SeriesKind,
    pub name: &'static str,
    pub color: Color32,
    pub points: Vec<Observation>,
}

impl Trace {
    fn new(kind: SeriesKind, color: Color32, points: &[Observation]) -> Self {
        Self {
            kind,
            name: kind.label(),
            color,
            points: points.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.points.iter().map(|o| o.timestamp)
    }

    pub fn y(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|o| o.value)
    }

    /// Boxes sorted by x.
    pub fn boxes(&self, grouping: BoxGrouping) -> Vec<BoxSummary> {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
        self.points
            .iter()
            .map(|o| {
                let key = match grouping {
                    BoxGrouping::Timestamp => o.timestamp,
                    BoxGrouping::Day => o.date().and_time(noon),
                };
                (key, o.value)
            })
            .into_group_map()
            .into_iter()
            .sorted_by_key(|(key, _)| *key)
            .map(|(key, values)| BoxSummary::from_values(key, values))
            .collect()
    }
}

/// Everything needed to draw the comparison. No UI state, no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub dataset: DatasetId,
    pub actual: Trace,
    pub predicted: Trace,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub range_slider_visible: bool,
    pub width: f32,
    pub height: f32,
}

impl Chart {
    pub fn traces(&self) -> [&Trace; 2] {
        [&self.actual, &self.predicted]
    }

    /// Placeholder chart: nothing left after range filtering.
    pub fn is_empty(&self) -> bool {
        self.actual.is_empty() && self.predicted.is_empty()
    }

    /// Min/max of all plotted values, across both traces.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.traces()
            .into_iter()
            .flat_map(|t| t.y())
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
    }

    pub fn time_bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.traces()
            .into_iter()
            .flat_map(|t| t.x())
            .minmax()
            .into_option()
    }
}

/// Build the chart for one dataset from the already range-filtered series.
pub fn render(
    filtered_actual: &[Observation],
    filtered_predicted: &[Observation],
    dataset: &DatasetId,
) -> Chart {
    Chart {
        title: format!("{} {}", PLOT_CONFIG.title_prefix, dataset),
        dataset: dataset.clone(),
        actual: Trace::new(SeriesKind::Actual, PLOT_CONFIG.actual_color, filtered_actual),
        predicted: Trace::new(
            SeriesKind::Predicted,
            PLOT_CONFIG.predicted_color,
            filtered_predicted,
        ),
        x_axis: AxisSpec {
            title: PLOT_CONFIG.x_axis_title,
            kind: AxisKind::Date,
            tick_format: Some(PLOT_CONFIG.x_tick_format),
            show_grid: PLOT_CONFIG.show_grid,
        },
        y_axis: AxisSpec {
            title: PLOT_CONFIG.y_axis_title,
            kind: AxisKind::Linear,
            tick_format: None,
            show_grid: PLOT_CONFIG.show_grid,
        },
        range_slider_visible: PLOT_CONFIG.show_range_slider,
        width: PLOT_CONFIG.width,
        height: PLOT_CONFIG.height,
    }
}

#[cfg(test)]
mod tests {
    use {super::*, chrono::NaiveDate};

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn render_labels_and_colours_both_traces() {
        let actual = vec![Observation::new(at(2, 10, 0), 100.0)];
        let predicted = vec![Observation::new(at(2, 10, 0), 98.0)];
        let chart = render(&actual, &predicted, &DatasetId::new("ABC"));

        assert_eq!(chart.title, "Box Plot for ABC");
        assert_eq!(chart.actual.name, "Actual Data");
        assert_eq!(chart.predicted.name, "Predicted Data");
        assert_ne!(chart.actual.color, chart.predicted.color);
        assert_eq!(chart.x_axis.kind, AxisKind::Date);
        assert_eq!(chart.x_axis.tick_format, Some("%Y-%m-%d %H:%M"));
        assert_eq!(chart.y_axis.kind, AxisKind::Linear);
        assert_eq!(chart.y_axis.title, "Price");
        assert!(!chart.range_slider_visible);
        assert_eq!(chart.value_bounds(), Some((98.0, 100.0)));
    }

    #[test]
    fn empty_inputs_give_placeholder_chart() {
        let chart = render(&[], &[], &DatasetId::new("ABC"));
        assert!(chart.is_empty());
        assert_eq!(chart.value_bounds(), None);
        assert_eq!(chart.time_bounds(), None);
    }

    #[test]
    fn one_box_per_timestamp_by_default() {
        let trace = Trace::new(
            SeriesKind::Actual,
            Color32::GREEN,
            &[
                Observation::new(at(2, 11, 0), 7.0),
                Observation::new(at(2, 10, 0), 5.0),
            ],
        );
        let boxes = trace.boxes(BoxGrouping::Timestamp);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].x, at(2, 10, 0));
        assert_eq!(boxes[0].count, 1);
        assert_eq!(boxes[0].median, 5.0);
        assert_eq!(boxes[0].q1, 5.0);
        assert_eq!(boxes[0].q3, 5.0);
        assert_eq!(boxes[1].median, 7.0);
    }

    #[test]
    fn day_grouping_collects_a_session_into_one_box() {
        let points: Vec<Observation> = (0..5)
            .map(|i| Observation::new(at(2, 10 + i, 0), 10.0 + i as f64))
            .chain(std::iter::once(Observation::new(at(3, 10, 0), 50.0)))
            .collect();
        let trace = Trace::new(SeriesKind::Predicted, Color32::BLUE, &points);
        let boxes = trace.boxes(BoxGrouping::Day);

        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].x, at(2, 12, 0));
        assert_eq!(boxes[0].count, 5);
        assert_eq!(boxes[0].min, 10.0);
        assert_eq!(boxes[0].max, 14.0);
        assert!(boxes[0].q1 <= boxes[0].median && boxes[0].median <= boxes[0].q3);
        assert!(boxes[0].lower_whisker >= boxes[0].min);
        assert!(boxes[0].upper_whisker <= boxes[0].max);
        assert_eq!(boxes[1].count, 1);
    }

    #[test]
    fn whiskers_stop_short_of_outliers() {
        let mut points: Vec<Observation> = (0..8)
            .map(|i| Observation::new(at(2, 9, 15 + i), 100.0 + (i % 2) as f64))
            .collect();
        points.push(Observation::new(at(2, 9, 30), 1_000.0));
        let trace = Trace::new(SeriesKind::Actual, Color32::GREEN, &points);
        let day_box = trace.boxes(BoxGrouping::Day)[0];

        assert_eq!(day_box.max, 1_000.0);
        assert!(day_box.upper_whisker < 1_000.0);
    }
}
