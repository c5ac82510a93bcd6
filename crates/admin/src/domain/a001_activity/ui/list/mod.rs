use contracts::domain::a001_activity::{Activity, ActivityField, ActivityStatus};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{self, BulkAction, Choice, Column, ListFilter, ListView, SortState};

pub const STATUS_TONES: &[(&str, BadgeTone)] = &[
    ("active", BadgeTone::Success),
    ("inactive", BadgeTone::Error),
    ("draft", BadgeTone::Warning),
];

pub const BULK_STATUSES: &[ActivityStatus] = &[
    ActivityStatus::Active,
    ActivityStatus::Inactive,
    ActivityStatus::Draft,
];

pub fn bulk_actions() -> Vec<BulkAction<ActivityStatus>> {
    list::bulk_actions(BULK_STATUSES)
}

pub fn columns() -> Vec<Column<ActivityField>> {
    vec![
        Column::new(ActivityField::Title, "Activity")
            .sortable()
            .formatter(CellFormatter::Composite(vec![ActivityField::Location])),
        Column::new(ActivityField::Category, "Category").sortable(),
        Column::new(ActivityField::Price, "Price").sortable(),
        Column::new(ActivityField::MaxParticipants, "Capacity").sortable(),
        Column::new(ActivityField::Status, "Status")
            .sortable()
            .formatter(CellFormatter::Badge { tones: STATUS_TONES }),
        Column::new(ActivityField::DisplayOrder, "Order").sortable().width("w-16"),
        Column::new(ActivityField::UpdatedAt, "Updated").sortable(),
    ]
}

pub fn searchable_fields() -> Vec<ActivityField> {
    vec![
        ActivityField::Title,
        ActivityField::Description,
        ActivityField::Location,
    ]
}

pub fn new_list(config: &AdminConfig) -> ListView<Activity> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Ascending(ActivityField::DisplayOrder))
}

pub fn set_status_filter(view: &mut ListView<Activity>, value: &str) {
    view.filter_mut()
        .set_choice(ActivityField::Status, Choice::from_select(value));
}

pub fn set_category_filter(view: &mut ListView<Activity>, value: &str) {
    view.filter_mut()
        .set_choice(ActivityField::Category, Choice::from_select(value));
}
