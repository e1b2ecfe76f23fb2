use eframe::egui::{CentralPanel, Context, RichText, TopBottomPanel, Ui};

use crate::app::{App, RenderOutcome};

use crate::config::plot::PLOT_CONFIG;

use crate::engine::SeriesStats;

use crate::ui::{
    DatasetPanel, GroupingPanel, Panel, RangePanel, UI_CONFIG, UI_TEXT, render_fullscreen_message,
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        let mut dataset_events = Vec::new();
        let mut range_events = Vec::new();
        let mut grouping_events = Vec::new();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    // 1. DATASET
                    if let Some(pipeline) = &self.pipeline {
                        dataset_events = DatasetPanel::new(
                            pipeline.catalog(),
                            self.selection.dataset.clone(),
                        )
                        .render(ui);
                    }

                    ui.separator();

                    // 2. DATE RANGE (only once the predicted bounds are known)
                    if let RenderOutcome::Ready(output) = &self.outcome {
                        let draft = self.selection.draft_range.get_or_insert(output.range);
                        range_events = RangePanel::new(output.bounds, draft).render(ui);
                        ui.separator();
                    }

                    // 3. BOX GROUPING
                    grouping_events = GroupingPanel::new(self.grouping).render(ui);
                });
            });

        for dataset in dataset_events {
            self.handle_dataset_selection(dataset);
        }
        if let Some(range) = range_events.pop() {
            self.handle_range_change(range);
        }
        if let Some(grouping) = grouping_events.pop() {
            self.grouping = grouping;
        }
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                // 1. Safety Check: Pipeline existence
                let Some(pipeline) = &self.pipeline else {
                    render_fullscreen_message(
                        ui,
                        UI_TEXT.msg_starting_title,
                        UI_TEXT.msg_starting_body,
                        false,
                    );
                    return;
                };

                // 2. Nothing to choose from
                if pipeline.catalog().is_empty() {
                    render_fullscreen_message(
                        ui,
                        UI_TEXT.msg_no_datasets_title,
                        UI_TEXT.msg_no_datasets_body,
                        true,
                    );
                    return;
                }

                // 3. Last render result
                match &self.outcome {
                    RenderOutcome::Idle => {
                        render_fullscreen_message(
                            ui,
                            UI_TEXT.msg_no_selection_title,
                            UI_TEXT.msg_no_selection_body,
                            true,
                        );
                    }
                    RenderOutcome::Failed { title, message } => {
                        render_fullscreen_message(ui, title, message, true);
                    }
                    RenderOutcome::Ready(output) => {
                        self.plot_view.show_chart(ui, &output.chart, self.grouping);
                    }
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Catalog
                    self.render_status_catalog(ui);

                    ui.separator();

                    // 2. Render result
                    self.render_status_output(ui);
                });
            });
    }

    fn render_status_catalog(&self, ui: &mut Ui) {
        let count = self.pipeline.as_ref().map_or(0, |p| p.catalog().len());
        ui.label(
            RichText::new(format!("{} {}", count, UI_TEXT.status_datasets))
                .small()
                .color(PLOT_CONFIG.color_info),
        );
        if let Some(dataset) = &self.selection.dataset {
            ui.label(RichText::new(dataset.as_str()).small().strong());
        }
    }

    fn render_status_output(&self, ui: &mut Ui) {
        let RenderOutcome::Ready(output) = &self.outcome else {
            return;
        };

        ui.label(
            RichText::new(format!("{} {}", UI_TEXT.status_bounds, output.bounds))
                .small()
                .color(PLOT_CONFIG.color_text_neutral),
        );
        ui.separator();
        render_series_stats(ui, UI_TEXT.status_actual, &output.actual_stats);
        ui.separator();
        render_series_stats(ui, UI_TEXT.status_predicted, &output.predicted_stats);
        ui.separator();
        ui.label(
            RichText::new(format!("{} ms", output.duration_ms))
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    }
}

fn render_series_stats(ui: &mut Ui, label: &str, stats: &SeriesStats) {
    ui.label(
        RichText::new(format!(
            "{}: {}/{} rows",
            label, stats.in_range, stats.normalized
        ))
        .small(),
    );
    if stats.unparseable > 0 {
        ui.label(
            RichText::new(format!("({} {})", stats.unparseable, UI_TEXT.status_dropped))
                .small()
                .color(PLOT_CONFIG.color_warning),
        );
    }
}
