//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub actual_color: Color32,
    pub predicted_color: Color32,

    pub actual_label: &'static str,
    pub predicted_label: &'static str,

    pub title_prefix: &'static str,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    /// strftime pattern for X axis tick labels
    pub x_tick_format: &'static str,
    pub show_grid: bool,
    /// Range slider under the chart. Date range is controlled from the toolbar instead.
    pub show_range_slider: bool,

    /// Preferred chart size in points
    pub width: f32,
    pub height: f32,

    /// Box width as a fraction of the smallest gap between neighbouring boxes (0.0 to 1.0)
    pub box_width_pct: f64,
    /// Box width used when a trace only has a single box (ms on the X axis)
    pub single_box_width_ms: f64,
    /// Whisker reach in multiples of the IQR
    pub whisker_iqr_factor: f64,
    pub box_fill_opacity: f32,
    pub box_stroke_width: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    // --- SEMANTIC COLORS ---
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_error: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    actual_color: Color32::GREEN,
    predicted_color: Color32::BLUE,

    actual_label: "Actual Data",
    predicted_label: "Predicted Data",

    title_prefix: "Box Plot for",
    x_axis_title: "Datetime",
    y_axis_title: "Price",
    x_tick_format: "%Y-%m-%d %H:%M",
    show_grid: true,
    show_range_slider: false,

    width: 1200.0,
    height: 600.0,

    box_width_pct: 0.6,
    single_box_width_ms: 60_000.0, // one minute
    whisker_iqr_factor: 1.5,
    box_fill_opacity: 0.35,
    box_stroke_width: 1.5,

    plot_y_padding_pct: 0.05,

    color_info: Color32::LIGHT_BLUE,
    color_warning: Color32::from_rgb(255, 165, 0),
    color_error: Color32::from_rgb(220, 60, 60),
    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::from_rgb(140, 140, 140),
};
