use crate::shared::record::{FieldValue, Record, Statused, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum BookingStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
        Completed => "completed",
        NoShow => "no_show",
    }
}

crate::record_fields! {
    pub enum BookingField {
        Id => "id",
        ActivityId => "activityId",
        ActivityTitle => "activityTitle",
        CustomerName => "customerName",
        CustomerEmail => "customerEmail",
        TotalParticipants => "totalParticipants",
        TotalAmount => "totalAmount",
        Status => "status",
        BookingDate => "bookingDate",
        ActivityDate => "activityDate",
        CreatedAt => "createdAt",
    }
}

/// Бронирование активности
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub activity_id: String,
    #[serde(default)]
    pub activity_title: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub total_participants: u32,
    /// Сумма, EUR
    pub total_amount: f64,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub activity_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Record for Booking {
    type Field = BookingField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: BookingField) -> FieldValue<'_> {
        match field {
            BookingField::Id => self.id.as_str().into(),
            BookingField::ActivityId => self.activity_id.as_str().into(),
            BookingField::ActivityTitle => self.activity_title.as_str().into(),
            BookingField::CustomerName => self.customer_name.as_str().into(),
            BookingField::CustomerEmail => self.customer_email.as_str().into(),
            BookingField::TotalParticipants => self.total_participants.into(),
            BookingField::TotalAmount => self.total_amount.into(),
            BookingField::Status => self.status.as_str().into(),
            BookingField::BookingDate => self.booking_date.into(),
            BookingField::ActivityDate => self.activity_date.into(),
            BookingField::CreatedAt => self.created_at.into(),
        }
    }
}

impl Statused for Booking {
    type Status = BookingStatus;

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}
