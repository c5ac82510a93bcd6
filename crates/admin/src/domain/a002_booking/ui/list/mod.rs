//! Список бронирований: поиск по клиенту и активности, фильтры по статусу
//! и дате активности, массовое подтверждение и отмена.

use chrono::{DateTime, Utc};
use contracts::domain::a002_booking::{Booking, BookingField, BookingStatus};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{self, BulkAction, Choice, Column, DateWindow, ListFilter, ListView, SortState};

pub const STATUS_TONES: &[(&str, BadgeTone)] = &[
    ("confirmed", BadgeTone::Success),
    ("pending", BadgeTone::Warning),
    ("cancelled", BadgeTone::Error),
    ("completed", BadgeTone::Primary),
];

/// Статусы, доступные в панели массовых действий
pub const BULK_STATUSES: &[BookingStatus] = &[BookingStatus::Confirmed, BookingStatus::Cancelled];

/// Значения select "Activity Date"
pub const DATE_OPTIONS: &[(&str, &str)] = &[
    ("all", "All Dates"),
    ("today", "Today"),
    ("week", "This Week"),
    ("month", "This Month"),
];

pub fn bulk_actions() -> Vec<BulkAction<BookingStatus>> {
    list::bulk_actions(BULK_STATUSES)
}

pub fn columns() -> Vec<Column<BookingField>> {
    vec![
        Column::new(BookingField::Id, "Booking ID")
            .sortable()
            .width("w-32")
            .formatter(CellFormatter::Link {
                route: "/booking/{id}",
                param: None,
            }),
        Column::new(BookingField::CustomerName, "Customer")
            .sortable()
            .formatter(CellFormatter::Composite(vec![BookingField::CustomerEmail])),
        Column::new(BookingField::ActivityTitle, "Activity")
            .sortable()
            .formatter(CellFormatter::Link {
                route: "/activities/{id}",
                param: Some(BookingField::ActivityId),
            }),
        Column::new(BookingField::TotalParticipants, "Participants").sortable(),
        Column::new(BookingField::TotalAmount, "Amount").sortable(),
        Column::new(BookingField::Status, "Status")
            .sortable()
            .formatter(CellFormatter::Badge { tones: STATUS_TONES }),
        Column::new(BookingField::ActivityDate, "Activity Date").sortable(),
    ]
}

pub fn searchable_fields() -> Vec<BookingField> {
    vec![
        BookingField::CustomerName,
        BookingField::CustomerEmail,
        BookingField::ActivityTitle,
        BookingField::Id,
    ]
}

pub fn new_list(config: &AdminConfig) -> ListView<Booking> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Descending(BookingField::ActivityDate))
}

pub fn set_status_filter(view: &mut ListView<Booking>, value: &str) {
    view.filter_mut()
        .set_choice(BookingField::Status, Choice::from_select(value));
}

pub fn set_date_filter(view: &mut ListView<Booking>, value: &str, now: DateTime<Utc>) {
    view.filter_mut().set_date_window(
        BookingField::ActivityDate,
        DateWindow::from_select(value),
        now,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cell_format::CellContent;
    use crate::shared::list::ListStatus;
    use chrono::TimeZone;
    use crate::shared::data::MemoryBackend;
    use crate::shared::list::run_bulk;
    use contracts::shared::api_response::ApiResponse;
    use contracts::shared::bulk::BulkMode;
    use contracts::shared::record::TextEnum;

    fn booking(id: &str, customer: &str, status: BookingStatus, day: u32) -> Booking {
        let activity_date = Utc.with_ymd_and_hms(2024, 5, day, 10, 0, 0).unwrap();
        Booking {
            id: id.into(),
            activity_id: "ACT-7".into(),
            activity_title: "Zip Line Tour".into(),
            customer_name: customer.into(),
            customer_email: format!("{}@mail.com", customer.to_lowercase()),
            total_participants: 2,
            total_amount: 98.0,
            status,
            booking_date: activity_date,
            activity_date,
            created_at: activity_date,
        }
    }

    fn loaded() -> ListView<Booking> {
        let mut view = new_list(&AdminConfig::default());
        view.apply_response(ApiResponse::success(
            vec![
                booking("BK1", "Ana", BookingStatus::Confirmed, 3),
                booking("BK2", "Bob", BookingStatus::Pending, 12),
                booking("BK3", "Carla", BookingStatus::Cancelled, 20),
            ],
            "",
        ));
        view
    }

    #[test]
    fn test_default_sort_is_latest_activity_first() {
        let view = loaded();
        assert_eq!(view.visible_ids(), vec!["BK3", "BK2", "BK1"]);
    }

    #[test]
    fn test_filters() {
        let mut view = loaded();
        set_status_filter(&mut view, "pending");
        assert_eq!(view.visible_ids(), vec!["BK2"]);

        set_status_filter(&mut view, "all");
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        set_date_filter(&mut view, "week", now);
        assert_eq!(view.visible_ids(), vec!["BK2"]);

        view.filter_mut().set_query("carla");
        assert_eq!(view.status(), ListStatus::NoMatches);
    }

    #[test]
    fn test_cells() {
        let view = loaded();
        let row = view.rows()[0];
        let cells: Vec<CellContent> = view.columns().iter().map(|c| c.render(row)).collect();
        assert_eq!(
            cells[0],
            CellContent::Link {
                text: "BK3".into(),
                href: "/booking/BK3".into()
            }
        );
        assert_eq!(cells[1].as_text(), "Carla / carla@mail.com");
        assert_eq!(cells[4].as_text(), "€98.00");
        assert_eq!(
            cells[5],
            CellContent::Badge {
                text: "cancelled".into(),
                tone: BadgeTone::Error
            }
        );
        assert_eq!(cells[6].as_text(), "2024-05-20");
    }

    #[test]
    fn test_date_options_map_to_windows() {
        let windows: Vec<DateWindow> = DATE_OPTIONS
            .iter()
            .map(|(value, _)| DateWindow::from_select(value))
            .collect();
        assert_eq!(
            windows,
            vec![DateWindow::All, DateWindow::Today, DateWindow::Week, DateWindow::Month]
        );

        let mut view = loaded();
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap();
        let counts: Vec<usize> = DATE_OPTIONS
            .iter()
            .map(|(value, _)| {
                set_date_filter(&mut view, value, now);
                view.rows().len()
            })
            .collect();
        assert_eq!(counts, vec![3, 1, 1, 3]);
    }

    #[tokio::test]
    async fn test_confirm_then_cancel_selected() {
        let backend = MemoryBackend::new(vec![
            booking("BK1", "Ana", BookingStatus::Pending, 3),
            booking("BK2", "Bob", BookingStatus::Pending, 12),
        ])
        .with_locked_id("BK2");
        let mut view = new_list(&AdminConfig::default());
        view.apply_response(ApiResponse::success(backend.snapshot().await, ""));

        let status_actions: Vec<BulkAction<BookingStatus>> = bulk_actions()
            .into_iter()
            .filter(|a| *a != BulkAction::Delete)
            .collect();
        assert_eq!(status_actions.len(), BULK_STATUSES.len());

        for (action, status) in status_actions.into_iter().zip(BULK_STATUSES) {
            view.toggle_row("BK1");
            run_bulk(&mut view, &backend, action, BulkMode::BestEffort)
                .await
                .unwrap();
            set_status_filter(&mut view, status.as_str());
            assert_eq!(view.visible_ids(), vec!["BK1"]);
        }

        set_status_filter(&mut view, "all");
        view.toggle_all_visible();
        let report = run_bulk(
            &mut view,
            &backend,
            BulkAction::UpdateStatus(BookingStatus::Confirmed),
            BulkMode::BestEffort,
        )
        .await
        .unwrap();
        assert_eq!(report.failed_count(), 1);
        assert_eq!(view.selection().ids(), vec!["BK2"]);
    }
}
