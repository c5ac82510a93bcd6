use serde::{Deserialize, Serialize};

crate::text_enum! {
    /// Статус временного слота
    pub enum SlotStatus {
        Available => "available",
        Limited => "limited",
        Full => "full",
        Cancelled => "cancelled",
    }
}

/// Временной слот внутри дня
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimeSlot {
    /// Время начала, "HH:MM"
    pub time: String,
    pub available_spots: u32,
    pub max_capacity: u32,
    pub status: SlotStatus,
    #[serde(default)]
    pub is_popular: bool,
}

/// День с доступными слотами, как его отдаёт бэкенд
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDate {
    /// Дата, "YYYY-MM-DD"
    pub date: String,
    #[serde(default)]
    pub display: String,
    pub available: bool,
    #[serde(default)]
    pub time_slots: Vec<AvailableTimeSlot>,
    #[serde(default)]
    pub popular: bool,
}
