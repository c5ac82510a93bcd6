use crate::shared::record::{FieldValue, Record, Statused, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum UserStatus {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
        Pending => "pending",
    }
}

crate::text_enum! {
    pub enum UserRole {
        Customer => "customer",
        Salesperson => "salesperson",
        Operator => "operator",
        Admin => "admin",
    }
}

crate::record_fields! {
    pub enum UserField {
        Id => "id",
        Email => "email",
        FullName => "fullName",
        Phone => "phone",
        Status => "status",
        Role => "role",
        TotalBookings => "totalBookings",
        TotalSpent => "totalSpent",
        LastLogin => "lastLogin",
        LastBooking => "lastBooking",
        CreatedAt => "createdAt",
    }
}

/// Пользователь (клиент или сотрудник)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub status: UserStatus,
    pub role: UserRole,
    #[serde(default)]
    pub total_bookings: u32,
    #[serde(default)]
    pub total_spent: f64,
    pub last_login: Option<DateTime<Utc>>,
    pub last_booking: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// "Имя Фамилия" либо "Unknown User", если оба пустые
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            "Unknown User".to_string()
        } else {
            name.to_string()
        }
    }
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Id => self.id.as_str().into(),
            UserField::Email => self.email.as_str().into(),
            UserField::FullName => FieldValue::Text(self.full_name().into()),
            UserField::Phone => self.phone.as_deref().into(),
            UserField::Status => self.status.as_str().into(),
            UserField::Role => self.role.as_str().into(),
            UserField::TotalBookings => self.total_bookings.into(),
            UserField::TotalSpent => self.total_spent.into(),
            UserField::LastLogin => self.last_login.into(),
            UserField::LastBooking => self.last_booking.into(),
            UserField::CreatedAt => self.created_at.into(),
        }
    }
}

impl Statused for User {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }

    fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }
}
