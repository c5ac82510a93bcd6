use crate::shared::record::{FieldValue, Record, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum MediaType {
        Image => "image",
        Video => "video",
    }
}

crate::record_fields! {
    pub enum MediaFileField {
        Id => "id",
        PublicUrl => "publicUrl",
        Type => "type",
        Format => "format",
        Width => "width",
        Height => "height",
        ActivityId => "activityId",
        CreatedAt => "createdAt",
    }
}

/// Файл медиатеки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub public_url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub activity_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for MediaFile {
    type Field = MediaFileField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: MediaFileField) -> FieldValue<'_> {
        match field {
            MediaFileField::Id => self.id.as_str().into(),
            MediaFileField::PublicUrl => self.public_url.as_str().into(),
            MediaFileField::Type => self.media_type.as_str().into(),
            MediaFileField::Format => self.format.as_str().into(),
            MediaFileField::Width => self.width.into(),
            MediaFileField::Height => self.height.into(),
            MediaFileField::ActivityId => self.activity_id.as_deref().into(),
            MediaFileField::CreatedAt => self.created_at.into(),
        }
    }
}
