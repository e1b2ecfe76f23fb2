pub const ICON_WARNING: &str = "\u{26a0}";
pub const ICON_CHART: &str = "\u{1f4ca}";

pub struct UiText {
    // --- Top panel ---
    pub label_dataset: &'static str,
    pub label_dataset_none: &'static str,
    pub label_range: &'static str,
    pub label_range_start: &'static str,
    pub label_range_end: &'static str,
    pub label_grouping: &'static str,
    pub button_full_range: &'static str,

    // --- Central panel messages ---
    pub msg_starting_title: &'static str,
    pub msg_starting_body: &'static str,
    pub msg_no_datasets_title: &'static str,
    pub msg_no_datasets_body: &'static str,
    pub msg_no_selection_title: &'static str,
    pub msg_no_selection_body: &'static str,
    pub msg_empty_chart: &'static str,
    pub msg_store_fatal_title: &'static str,

    // --- Status bar ---
    pub status_datasets: &'static str,
    pub status_bounds: &'static str,
    pub status_actual: &'static str,
    pub status_predicted: &'static str,
    pub status_dropped: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    label_dataset: "Select Table",
    label_dataset_none: "(none)",
    label_range: "Select Date Range",
    label_range_start: "From",
    label_range_end: "To",
    label_grouping: "Boxes:",
    button_full_range: "Full range",

    msg_starting_title: "Opening stores...",
    msg_starting_body: "Reading table catalog",
    msg_no_datasets_title: "No Common Datasets",
    msg_no_datasets_body: "No table exists in both the actual store and the predictions store.",
    msg_no_selection_title: "No Table Selected",
    msg_no_selection_body: "Pick a table from the toolbar.",
    msg_empty_chart: "No observations in the selected date range.",
    msg_store_fatal_title: "Stores Unavailable",

    status_datasets: "tables",
    status_bounds: "available",
    status_actual: "actual",
    status_predicted: "predicted",
    status_dropped: "unparseable",
};
