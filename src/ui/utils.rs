use {
    crate::utils::epoch_ms_to_naive,
    eframe::egui::{RichText, Ui},
};

pub fn format_price(price: f64) -> String {
    if price.abs() >= 1000.0 {
        format!("{:.1}", price)
    } else {
        format!("{:.2}", price)
    }
}

/// Plot X value (epoch ms) to a label using a strftime pattern.
pub fn format_plot_time(x: f64, pattern: &str) -> String {
    if !x.is_finite() {
        return String::new();
    }
    epoch_ms_to_naive(x.round() as i64)
        .map(|ts| ts.format(pattern).to_string())
        .unwrap_or_default()
}

pub fn render_fullscreen_message(ui: &mut Ui, title: &str, subtitle: &str, is_error: bool) {
    use crate::{config::PLOT_CONFIG, ui::ui_text::ICON_WARNING};

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        if is_error {
            ui.heading(format!("{} {}", ICON_WARNING, title));
        } else {
            ui.spinner();
            ui.add_space(12.0);
            ui.heading(title);
        }

        ui.add_space(6.0);

        let color = if is_error {
            PLOT_CONFIG.color_error
        } else {
            PLOT_CONFIG.color_text_neutral
        };

        ui.label(RichText::new(subtitle).color(color));
    });
}
