use crate::shared::record::{FieldValue, Record, Statused, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum BlogStatus {
        Draft => "draft",
        Published => "published",
        Scheduled => "scheduled",
        Archived => "archived",
    }
}

crate::record_fields! {
    pub enum BlogPostField {
        Id => "id",
        Title => "title",
        Slug => "slug",
        Category => "category",
        Status => "status",
        Views => "views",
        ReadingTime => "readingTime",
        PublishedAt => "publishedAt",
        CreatedAt => "createdAt",
    }
}

/// Статья блога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub status: BlogStatus,
    #[serde(default)]
    pub views: u32,
    /// Время чтения, минуты
    pub reading_time: Option<u32>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Record for BlogPost {
    type Field = BlogPostField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: BlogPostField) -> FieldValue<'_> {
        match field {
            BlogPostField::Id => self.id.as_str().into(),
            BlogPostField::Title => self.title.as_str().into(),
            BlogPostField::Slug => self.slug.as_str().into(),
            BlogPostField::Category => self.category.as_deref().into(),
            BlogPostField::Status => self.status.as_str().into(),
            BlogPostField::Views => self.views.into(),
            BlogPostField::ReadingTime => self.reading_time.into(),
            BlogPostField::PublishedAt => self.published_at.into(),
            BlogPostField::CreatedAt => self.created_at.into(),
        }
    }
}

impl Statused for BlogPost {
    type Status = BlogStatus;

    fn status(&self) -> BlogStatus {
        self.status
    }

    fn set_status(&mut self, status: BlogStatus) {
        self.status = status;
    }
}
