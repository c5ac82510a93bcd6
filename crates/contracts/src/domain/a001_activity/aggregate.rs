use crate::shared::record::{FieldValue, Record, Statused, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    /// Статус активности в каталоге
    pub enum ActivityStatus {
        Active => "active",
        Inactive => "inactive",
        Draft => "draft",
        Suspended => "suspended",
    }
}

crate::text_enum! {
    pub enum ActivityCategory {
        WaterSports => "water_sports",
        LandAdventures => "land_adventures",
        Cultural => "cultural",
        Nightlife => "nightlife",
        FamilyFun => "family_fun",
    }
}

crate::text_enum! {
    /// Тип цены (за взрослого, за ребёнка и т.д.)
    pub enum PriceType {
        Adult => "adult",
        Child => "child",
        Senior => "senior",
        Group => "group",
        Family => "family",
    }
}

/// Строка прайса активности
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPricing {
    pub price_type: PriceType,
    pub base_price: f64,
}

crate::record_fields! {
    pub enum ActivityField {
        Id => "id",
        Title => "title",
        Description => "description",
        Category => "category",
        Price => "price",
        Location => "location",
        Status => "status",
        MaxParticipants => "maxParticipants",
        DisplayOrder => "displayOrder",
        CreatedAt => "createdAt",
        UpdatedAt => "updatedAt",
    }
}

/// Активность (экскурсия, прокат, тур)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<ActivityCategory>,
    /// Базовая цена за взрослого, EUR
    pub price: f64,
    #[serde(default)]
    pub location: String,
    pub status: ActivityStatus,
    pub max_participants: u32,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub pricing: Vec<ActivityPricing>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Цена для указанного типа, если она есть в прайсе
    pub fn price_for(&self, price_type: PriceType) -> Option<f64> {
        self.pricing
            .iter()
            .find(|p| p.price_type == price_type)
            .map(|p| p.base_price)
    }
}

impl Record for Activity {
    type Field = ActivityField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: ActivityField) -> FieldValue<'_> {
        match field {
            ActivityField::Id => self.id.as_str().into(),
            ActivityField::Title => self.title.as_str().into(),
            ActivityField::Description => self.description.as_str().into(),
            ActivityField::Category => self.category.map(TextEnum::as_str).into(),
            ActivityField::Price => self.price.into(),
            ActivityField::Location => self.location.as_str().into(),
            ActivityField::Status => self.status.as_str().into(),
            ActivityField::MaxParticipants => self.max_participants.into(),
            ActivityField::DisplayOrder => self.display_order.into(),
            ActivityField::CreatedAt => self.created_at.into(),
            ActivityField::UpdatedAt => self.updated_at.into(),
        }
    }
}

impl Statused for Activity {
    type Status = ActivityStatus;

    fn status(&self) -> ActivityStatus {
        self.status
    }

    fn set_status(&mut self, status: ActivityStatus) {
        self.status = status;
    }
}
