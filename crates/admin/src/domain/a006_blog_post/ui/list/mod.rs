use contracts::domain::a006_blog_post::{BlogPost, BlogPostField, BlogStatus};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{self, BulkAction, Choice, Column, ListFilter, ListView, SortState};

pub const STATUS_TONES: &[(&str, BadgeTone)] = &[
    ("published", BadgeTone::Success),
    ("draft", BadgeTone::Warning),
    ("scheduled", BadgeTone::Primary),
    ("archived", BadgeTone::Neutral),
];

pub const BULK_STATUSES: &[BlogStatus] = &[BlogStatus::Published, BlogStatus::Archived];

pub fn bulk_actions() -> Vec<BulkAction<BlogStatus>> {
    list::bulk_actions(BULK_STATUSES)
}

pub fn columns() -> Vec<Column<BlogPostField>> {
    vec![
        Column::new(BlogPostField::Title, "Title")
            .sortable()
            .formatter(CellFormatter::Link {
                route: "/admin/blog/{id}",
                param: None,
            }),
        Column::new(BlogPostField::Status, "Status")
            .sortable()
            .formatter(CellFormatter::Badge { tones: STATUS_TONES }),
        Column::new(BlogPostField::Category, "Category").sortable(),
        Column::new(BlogPostField::PublishedAt, "Published").sortable(),
        Column::new(BlogPostField::Views, "Views").sortable(),
        Column::new(BlogPostField::ReadingTime, "Reading Time"),
    ]
}

pub fn searchable_fields() -> Vec<BlogPostField> {
    vec![
        BlogPostField::Title,
        BlogPostField::Slug,
        BlogPostField::Category,
    ]
}

pub fn new_list(config: &AdminConfig) -> ListView<BlogPost> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Descending(BlogPostField::CreatedAt))
}

pub fn set_status_filter(view: &mut ListView<BlogPost>, value: &str) {
    view.filter_mut()
        .set_choice(BlogPostField::Status, Choice::from_select(value));
}

pub fn set_category_filter(view: &mut ListView<BlogPost>, value: &str) {
    view.filter_mut()
        .set_choice(BlogPostField::Category, Choice::from_select(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::load_view;
    use crate::shared::api_utils::ViewScope;
    use crate::shared::data::MemoryBackend;
    use crate::shared::list::{run_bulk, ListStatus};
    use chrono::{TimeZone, Utc};
    use contracts::shared::bulk::BulkMode;

    fn post(id: &str, category: Option<&str>, day: u32) -> BlogPost {
        BlogPost {
            id: id.into(),
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            excerpt: None,
            category: category.map(str::to_string),
            status: BlogStatus::Draft,
            views: 0,
            reading_time: Some(4),
            published_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 4, day, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_filter_and_publish() {
        let backend = MemoryBackend::new(vec![
            post("1", Some("guides"), 1),
            post("2", None, 2),
            post("3", Some("guides"), 3),
        ]);
        let scope = ViewScope::new();
        let mut view = new_list(&AdminConfig::default());
        load_view(&mut view, &backend, &scope).await.unwrap();
        assert_eq!(view.status(), ListStatus::Ready);
        assert_eq!(view.visible_ids(), vec!["3", "2", "1"]);

        set_category_filter(&mut view, "guides");
        view.toggle_all_visible();
        let publish = bulk_actions()[0];
        assert_eq!(publish, BulkAction::UpdateStatus(BlogStatus::Published));
        run_bulk(&mut view, &backend, publish, BulkMode::BestEffort)
            .await
            .unwrap();

        set_category_filter(&mut view, "all");
        set_status_filter(&mut view, "published");
        assert_eq!(view.visible_ids(), vec!["3", "1"]);
        assert!(view.selection().is_empty());
    }

    #[tokio::test]
    async fn test_archive_keeps_locked_post_selected() {
        let backend = MemoryBackend::new(vec![post("1", None, 1), post("2", None, 2)]).with_locked_id("1");
        let mut view = new_list(&AdminConfig::default());
        view.apply_response(contracts::shared::api_response::ApiResponse::success(
            backend.snapshot().await,
            "",
        ));

        let archive = BulkAction::UpdateStatus(BULK_STATUSES[1]);
        assert!(bulk_actions().contains(&archive));
        view.toggle_all_visible();
        let report = run_bulk(&mut view, &backend, archive, BulkMode::BestEffort)
            .await
            .unwrap();

        assert_eq!(report.succeeded_count(), 1);
        set_status_filter(&mut view, "archived");
        assert_eq!(view.visible_ids(), vec!["2"]);
        assert_eq!(view.selection().ids(), vec!["1"]);
    }
}
