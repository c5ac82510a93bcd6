use contracts::domain::a005_setting::{Setting, SettingField};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{Choice, Column, ListFilter, ListView, SortState};

const VISIBILITY_TONES: &[(&str, BadgeTone)] = &[("true", BadgeTone::Primary), ("false", BadgeTone::Neutral)];

pub fn columns() -> Vec<Column<SettingField>> {
    vec![
        Column::new(SettingField::Label, "Setting")
            .sortable()
            .formatter(CellFormatter::Composite(vec![SettingField::Key])),
        Column::new(SettingField::Value, "Value"),
        Column::new(SettingField::Type, "Type").sortable(),
        Column::new(SettingField::Category, "Category").sortable(),
        Column::new(SettingField::IsPublic, "Public")
            .formatter(CellFormatter::Badge { tones: VISIBILITY_TONES }),
        Column::new(SettingField::SortOrder, "Order").sortable().width("w-16"),
        Column::new(SettingField::UpdatedAt, "Updated").sortable(),
    ]
}

pub fn searchable_fields() -> Vec<SettingField> {
    vec![SettingField::Key, SettingField::Label]
}

pub fn new_list(config: &AdminConfig) -> ListView<Setting> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Ascending(SettingField::SortOrder))
}

pub fn set_category_filter(view: &mut ListView<Setting>, value: &str) {
    view.filter_mut()
        .set_choice(SettingField::Category, Choice::from_select(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_setting::{SettingCategory, SettingType};
    use contracts::shared::api_response::ApiResponse;

    fn setting(key: &str, category: SettingCategory, order: i32) -> Setting {
        Setting {
            key: key.into(),
            value: serde_json::json!(true),
            setting_type: SettingType::Boolean,
            category,
            label: key.replace('_', " "),
            description: None,
            is_public: false,
            is_editable: true,
            sort_order: order,
            updated_at: None,
        }
    }

    #[test]
    fn test_category_filter_and_order() {
        let mut view = new_list(&AdminConfig::default());
        view.apply_response(ApiResponse::success(
            vec![
                setting("maintenance_mode", SettingCategory::General, 2),
                setting("smtp_enabled", SettingCategory::Email, 1),
                setting("site_open", SettingCategory::General, 1),
            ],
            "",
        ));
        set_category_filter(&mut view, "general");
        assert_eq!(view.visible_ids(), vec!["site_open", "maintenance_mode"]);

        let row = view.rows()[0];
        assert_eq!(view.columns()[1].render(row).as_text(), "true");
        assert_eq!(view.columns()[6].render(row).as_text(), "-");
    }
}
