mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use styles::setup_custom_visuals;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{DatasetPanel, GroupingPanel, Panel, RangePanel};
pub(crate) use ui_plot_view::PlotView;
pub(crate) use utils::render_fullscreen_message;
