use crate::shared::record::{FieldValue, Record, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum SettingCategory {
        General => "general",
        Seo => "seo",
        Email => "email",
        Payment => "payment",
        Booking => "booking",
        Appearance => "appearance",
        Integration => "integration",
        Security => "security",
        Performance => "performance",
    }
}

crate::text_enum! {
    pub enum SettingType {
        Text => "text",
        Number => "number",
        Boolean => "boolean",
        Json => "json",
        Select => "select",
        Multiselect => "multiselect",
        Color => "color",
        Date => "date",
        Time => "time",
    }
}

crate::record_fields! {
    pub enum SettingField {
        Key => "key",
        Label => "label",
        Value => "value",
        Type => "type",
        Category => "category",
        IsPublic => "isPublic",
        IsEditable => "isEditable",
        SortOrder => "sortOrder",
        UpdatedAt => "updatedAt",
    }
}

/// Системная настройка; ключ служит идентификатором
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    pub category: SettingCategory,
    pub label: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default = "default_true")]
    pub is_editable: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Record for Setting {
    type Field = SettingField;

    fn id(&self) -> &str {
        &self.key
    }

    fn field(&self, field: SettingField) -> FieldValue<'_> {
        match field {
            SettingField::Key => self.key.as_str().into(),
            SettingField::Label => self.label.as_str().into(),
            SettingField::Value => (&self.value).into(),
            SettingField::Type => self.setting_type.as_str().into(),
            SettingField::Category => self.category.as_str().into(),
            SettingField::IsPublic => self.is_public.into(),
            SettingField::IsEditable => self.is_editable.into(),
            SettingField::SortOrder => self.sort_order.into(),
            SettingField::UpdatedAt => self.updated_at.into(),
        }
    }
}
