use {
    anyhow::Context as _,
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context},
    },
    serde::{Deserialize, Serialize},
    std::mem,
};

use crate::{
    Cli,
    app::{
        AppState, OpeningState, PersistedSelection, PhaseView, RenderOutcome, RunningState,
        Selection, UnavailableState,
    },
    config::{DF, StoreConfig},
    domain::{DatasetId, DateRange},
    engine::Pipeline,
    models::BoxGrouping,
    ui::{PlotView, UI_TEXT, render_fullscreen_message, setup_custom_visuals},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) persisted_selection: PersistedSelection, // persists across sessions.
    pub(crate) grouping: BoxGrouping,
    #[serde(skip)]
    pub(crate) args: Cli,
    #[serde(skip)]
    pub(crate) selection: Selection,
    #[serde(skip)]
    pub(crate) pipeline: Option<Pipeline>,
    #[serde(skip)]
    pub(crate) outcome: RenderOutcome,
    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            persisted_selection: PersistedSelection::None,
            grouping: BoxGrouping::default(),
            args: Cli::default(),
            selection: Selection::default(),
            pipeline: None,
            outcome: RenderOutcome::default(),
            plot_view: PlotView::new(),
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "📂 LOAD [App]: PersistedSelection = {:?}",
                app.persisted_selection
            );
        }

        app.args = args;
        app.plot_view = PlotView::new();
        app.state = AppState::Opening(OpeningState::default());
        app
    }

    fn open_pipeline(&self) -> anyhow::Result<Pipeline> {
        let config = StoreConfig::resolve(
            self.args.config.as_deref(),
            self.args.actual_db.clone(),
            self.args.prediction_db.clone(),
        )?;
        let pipeline = Pipeline::open(&config).context("Failed to read the table catalog")?;
        Ok(pipeline)
    }

    pub(crate) fn tick_opening_state(&mut self, ctx: &Context, state: &mut OpeningState) -> AppState {
        if !state.message_shown {
            CentralPanel::default().show(ctx, |ui| {
                render_fullscreen_message(
                    ui,
                    UI_TEXT.msg_starting_title,
                    UI_TEXT.msg_starting_body,
                    false,
                );
            });
            state.message_shown = true;
            ctx.request_repaint();
            return AppState::Opening(state.clone());
        }

        match self.open_pipeline() {
            Ok(pipeline) => {
                log::info!("Catalog: {} common tables", pipeline.catalog().len());
                self.pipeline = Some(pipeline);
                self.restore_initial_selection();
                AppState::Running(RunningState)
            }
            Err(e) => {
                log::error!("{:#}", e);
                AppState::Unavailable(UnavailableState {
                    title: UI_TEXT.msg_store_fatal_title,
                    message: format!("{:#}", e),
                })
            }
        }
    }

    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        // Order matters: bottom panel must be claimed before the central panel
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }

    pub(crate) fn tick_unavailable_state(&mut self, ctx: &Context, state: &UnavailableState) {
        CentralPanel::default().show(ctx, |ui| {
            render_fullscreen_message(ui, state.title, &state.message, true);
        });
    }

    /// Persisted dataset if it still exists, otherwise the first in the catalog.
    fn restore_initial_selection(&mut self) {
        let Some(pipeline) = &self.pipeline else {
            return;
        };
        let restored = match &self.persisted_selection {
            PersistedSelection::Dataset(name) => pipeline.catalog().validate(name).ok(),
            PersistedSelection::None => None,
        };
        if let Some(dataset) = restored.or_else(|| pipeline.catalog().first().cloned()) {
            self.handle_dataset_selection(dataset);
        }
    }

    pub(crate) fn handle_dataset_selection(&mut self, dataset: DatasetId) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("🎯 SELECT dataset {}", dataset);
        }
        self.selection.select_dataset(dataset);
        self.refresh();
    }

    pub(crate) fn handle_range_change(&mut self, range: DateRange) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("📅 RANGE {}", range);
        }
        self.selection.range = Some(range);
        self.refresh();
    }

    /// Re-run the whole pipeline for the current selection.
    fn refresh(&mut self) {
        let (Some(pipeline), Some(dataset)) = (&self.pipeline, &self.selection.dataset) else {
            self.outcome = RenderOutcome::Idle;
            return;
        };

        self.outcome = match pipeline.render_pipeline(dataset.as_str(), self.selection.range) {
            Ok(output) => {
                self.selection.range = Some(output.range);
                self.selection.draft_range = Some(output.range);
                RenderOutcome::Ready(Box::new(output))
            }
            Err(err) => {
                if err.is_fatal() {
                    log::error!("{}", err);
                } else {
                    log::warn!("{}", err);
                }
                self.selection.draft_range = None;
                RenderOutcome::Failed {
                    title: err.title(),
                    message: err.to_string(),
                }
            }
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Opening(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Unavailable(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.persisted_selection = match &self.selection.dataset {
            Some(dataset) => PersistedSelection::Dataset(dataset.to_string()),
            None => PersistedSelection::None,
        };
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "💾 SAVE [App]: PersistedSelection = {:?}",
                self.persisted_selection
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
