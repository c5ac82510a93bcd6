use contracts::domain::a007_media_file::{MediaFile, MediaFileField};

use crate::shared::cell_format::CellFormatter;
use crate::shared::config::AdminConfig;
use crate::shared::list::{Choice, Column, ListFilter, ListView, SortState};

pub fn columns() -> Vec<Column<MediaFileField>> {
    vec![
        Column::new(MediaFileField::Id, "File")
            .formatter(CellFormatter::Composite(vec![MediaFileField::PublicUrl])),
        Column::new(MediaFileField::Type, "Type").sortable(),
        Column::new(MediaFileField::Format, "Format").sortable(),
        Column::new(MediaFileField::Width, "Width").sortable(),
        Column::new(MediaFileField::Height, "Height").sortable(),
        Column::new(MediaFileField::ActivityId, "Activity"),
        Column::new(MediaFileField::CreatedAt, "Uploaded").sortable(),
    ]
}

pub fn searchable_fields() -> Vec<MediaFileField> {
    vec![
        MediaFileField::Id,
        MediaFileField::Format,
        MediaFileField::PublicUrl,
    ]
}

pub fn new_list(config: &AdminConfig) -> ListView<MediaFile> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Descending(MediaFileField::CreatedAt))
}

pub fn set_type_filter(view: &mut ListView<MediaFile>, value: &str) {
    view.filter_mut()
        .set_choice(MediaFileField::Type, Choice::from_select(value));
}
