use eframe::egui::{ComboBox, RichText, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::plot::PLOT_CONFIG;

use crate::data::Catalog;
use crate::domain::{DatasetId, DateRange};
use crate::models::BoxGrouping;

use crate::ui::ui_text::UI_TEXT;

use crate::utils::TimeUtils;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Dropdown over the tables present in both stores
pub struct DatasetPanel<'a> {
    catalog: &'a Catalog,
    selected: Option<DatasetId>,
}

impl<'a> DatasetPanel<'a> {
    pub fn new(catalog: &'a Catalog, selected: Option<DatasetId>) -> Self {
        Self { catalog, selected }
    }
}

impl<'a> Panel for DatasetPanel<'a> {
    type Event = DatasetId;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label(UI_TEXT.label_dataset);

        let selected_text = self
            .selected
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| UI_TEXT.label_dataset_none.to_string());

        ComboBox::from_id_salt("dataset_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for dataset in self.catalog.iter() {
                    let is_selected = self.selected.as_ref() == Some(dataset);
                    if ui
                        .selectable_label(is_selected, dataset.as_str())
                        .clicked()
                        && !is_selected
                    {
                        self.selected = Some(dataset.clone());
                        events.push(dataset.clone());
                    }
                }
            });
        events
    }
}

/// Two day-offset sliders over the available bounds.
/// `draft` follows the handles every frame; a range is emitted only on release.
pub struct RangePanel<'a> {
    bounds: DateRange,
    draft: &'a mut DateRange,
}

impl<'a> RangePanel<'a> {
    pub fn new(bounds: DateRange, draft: &'a mut DateRange) -> Self {
        *draft = draft.clamp_to(&bounds);
        Self { bounds, draft }
    }

    fn date_slider(ui: &mut Ui, value: &mut i64, bounds: DateRange, label: &str) -> bool {
        let max_offset = bounds.days() - 1;
        let response = ui.add(
            Slider::new(value, 0..=max_offset)
                .text(label)
                .custom_formatter(move |v, _| {
                    TimeUtils::format_date(bounds.date_at_offset(v.round() as i64))
                })
                .custom_parser(move |text| {
                    TimeUtils::parse_naive(text).map(|ts| bounds.offset_of(ts.date()) as f64)
                }),
        );
        response.drag_stopped() || (response.changed() && !response.dragged())
    }
}

impl<'a> Panel for RangePanel<'a> {
    type Event = DateRange;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label(UI_TEXT.label_range);

        let mut start_offset = self.bounds.offset_of(self.draft.start);
        let mut end_offset = self.bounds.offset_of(self.draft.end);

        let start_done =
            Self::date_slider(ui, &mut start_offset, self.bounds, UI_TEXT.label_range_start);
        // The ends may not cross
        if start_offset > end_offset {
            end_offset = start_offset;
        }
        let end_done =
            Self::date_slider(ui, &mut end_offset, self.bounds, UI_TEXT.label_range_end);
        if end_offset < start_offset {
            start_offset = end_offset;
        }

        *self.draft = DateRange::new(
            self.bounds.date_at_offset(start_offset),
            self.bounds.date_at_offset(end_offset),
        );

        if start_done || end_done {
            events.push(*self.draft);
        }

        if ui.button(UI_TEXT.button_full_range).clicked() {
            *self.draft = self.bounds;
            events.push(self.bounds);
        }

        ui.label(
            RichText::new(format!("{} days", self.draft.days()))
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
        events
    }
}

/// Display-only toggle, never re-runs the pipeline.
pub struct GroupingPanel {
    selected: BoxGrouping,
}

impl GroupingPanel {
    pub fn new(grouping: BoxGrouping) -> Self {
        Self { selected: grouping }
    }
}

impl Panel for GroupingPanel {
    type Event = BoxGrouping;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label(UI_TEXT.label_grouping);
        for variant in BoxGrouping::iter() {
            if ui
                .selectable_value(&mut self.selected, variant, variant.to_string())
                .clicked()
            {
                events.push(self.selected);
            }
        }
        events
    }
}
