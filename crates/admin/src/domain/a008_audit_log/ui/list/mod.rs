//! Журнал аудита: только чтение, по умолчанию новые записи сверху

use contracts::domain::a008_audit_log::{AuditLog, AuditLogField};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{Choice, Column, ListFilter, ListView, SortState};

pub const SEVERITY_TONES: &[(&str, BadgeTone)] = &[
    ("info", BadgeTone::Primary),
    ("warning", BadgeTone::Warning),
    ("error", BadgeTone::Error),
    ("critical", BadgeTone::Error),
];

pub fn columns() -> Vec<Column<AuditLogField>> {
    vec![
        Column::new(AuditLogField::CreatedAt, "Time").sortable(),
        Column::new(AuditLogField::UserName, "User")
            .sortable()
            .formatter(CellFormatter::Composite(vec![AuditLogField::UserEmail])),
        Column::new(AuditLogField::Action, "Action").sortable(),
        Column::new(AuditLogField::Resource, "Resource")
            .sortable()
            .formatter(CellFormatter::Composite(vec![AuditLogField::ResourceId])),
        Column::new(AuditLogField::Severity, "Severity")
            .sortable()
            .formatter(CellFormatter::Badge { tones: SEVERITY_TONES }),
        Column::new(AuditLogField::Category, "Category").sortable(),
        Column::new(AuditLogField::IpAddress, "IP"),
    ]
}

pub fn searchable_fields() -> Vec<AuditLogField> {
    vec![
        AuditLogField::UserEmail,
        AuditLogField::UserName,
        AuditLogField::Action,
        AuditLogField::Resource,
    ]
}

pub fn new_list(config: &AdminConfig) -> ListView<AuditLog> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Descending(AuditLogField::CreatedAt))
}

pub fn set_severity_filter(view: &mut ListView<AuditLog>, value: &str) {
    view.filter_mut()
        .set_choice(AuditLogField::Severity, Choice::from_select(value));
}

pub fn set_category_filter(view: &mut ListView<AuditLog>, value: &str) {
    view.filter_mut()
        .set_choice(AuditLogField::Category, Choice::from_select(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cell_format::CellContent;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a008_audit_log::{AuditCategory, AuditSeverity};
    use contracts::shared::api_response::ApiResponse;

    fn entry(id: &str, user_name: Option<&str>, severity: AuditSeverity) -> AuditLog {
        AuditLog {
            id: id.into(),
            user_id: "user_1".into(),
            user_email: None,
            user_name: user_name.map(str::to_string),
            action: "booking.cancel".into(),
            resource: "booking".into(),
            resource_id: Some("BK1".into()),
            severity,
            category: AuditCategory::Booking,
            ip_address: None,
            created_at: Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_user_renders_placeholder() {
        let row = entry("l1", None, AuditSeverity::Info);
        let cols = columns();
        assert_eq!(cols[1].render(&row), CellContent::Placeholder);
        assert_eq!(cols[3].render(&row).as_text(), "booking / BK1");
        assert_eq!(cols[6].render(&row).as_text(), "-");
    }

    #[test]
    fn test_severity_filter_and_search_on_optional_fields() {
        let mut view = new_list(&AdminConfig::default());
        view.apply_response(ApiResponse::success(
            vec![
                entry("l1", Some("Admin Ana"), AuditSeverity::Critical),
                entry("l2", None, AuditSeverity::Info),
            ],
            "",
        ));
        set_severity_filter(&mut view, "critical");
        assert_eq!(view.visible_ids(), vec!["l1"]);

        set_severity_filter(&mut view, "all");
        view.filter_mut().set_query("ana");
        assert_eq!(view.visible_ids(), vec!["l1"]);
    }
}
