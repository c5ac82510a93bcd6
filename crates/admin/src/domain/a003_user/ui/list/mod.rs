use contracts::domain::a003_user::{User, UserField, UserStatus};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{self, BulkAction, Choice, Column, ListFilter, ListView, SortState};

pub const STATUS_TONES: &[(&str, BadgeTone)] = &[
    ("active", BadgeTone::Success),
    ("inactive", BadgeTone::Neutral),
    ("suspended", BadgeTone::Error),
    ("pending", BadgeTone::Warning),
];

pub const ROLE_TONES: &[(&str, BadgeTone)] = &[
    ("admin", BadgeTone::Error),
    ("operator", BadgeTone::Primary),
    ("salesperson", BadgeTone::Success),
];

pub const BULK_STATUSES: &[UserStatus] = &[UserStatus::Active, UserStatus::Suspended];

pub fn bulk_actions() -> Vec<BulkAction<UserStatus>> {
    list::bulk_actions(BULK_STATUSES)
}

pub fn columns() -> Vec<Column<UserField>> {
    vec![
        Column::new(UserField::FullName, "User")
            .sortable()
            .formatter(CellFormatter::Composite(vec![UserField::Email, UserField::Phone])),
        Column::new(UserField::Role, "Role")
            .sortable()
            .formatter(CellFormatter::Badge { tones: ROLE_TONES }),
        Column::new(UserField::Status, "Status")
            .sortable()
            .formatter(CellFormatter::Badge { tones: STATUS_TONES }),
        Column::new(UserField::TotalBookings, "Bookings").sortable(),
        Column::new(UserField::TotalSpent, "Total Spent").sortable(),
        Column::new(UserField::LastLogin, "Last Login").sortable(),
        Column::new(UserField::CreatedAt, "Join Date").sortable(),
    ]
}

pub fn searchable_fields() -> Vec<UserField> {
    vec![UserField::FullName, UserField::Email, UserField::Id]
}

pub fn new_list(config: &AdminConfig) -> ListView<User> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Descending(UserField::LastLogin))
}

pub fn set_status_filter(view: &mut ListView<User>, value: &str) {
    view.filter_mut()
        .set_choice(UserField::Status, Choice::from_select(value));
}

pub fn set_role_filter(view: &mut ListView<User>, value: &str) {
    view.filter_mut()
        .set_choice(UserField::Role, Choice::from_select(value));
}
