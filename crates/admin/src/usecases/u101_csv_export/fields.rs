//! Наборы полей по умолчанию для каждого вида выгрузки

use contracts::domain::a001_activity::ActivityField;
use contracts::domain::a002_booking::BookingField;
use contracts::domain::a003_user::UserField;

use crate::shared::export::{ExportField, ExportFieldSet};

pub fn activity_fields() -> ExportFieldSet<ActivityField> {
    ExportFieldSet::new(vec![
        ExportField::new(ActivityField::Id, "ID", true),
        ExportField::new(ActivityField::Title, "Title", true),
        ExportField::new(ActivityField::Description, "Description", false),
        ExportField::new(ActivityField::Price, "Price", true),
        ExportField::new(ActivityField::Location, "Location", true),
        ExportField::new(ActivityField::Status, "Status", true),
        ExportField::new(ActivityField::CreatedAt, "Created Date", true),
    ])
}

pub fn booking_fields() -> ExportFieldSet<BookingField> {
    ExportFieldSet::new(vec![
        ExportField::new(BookingField::Id, "Booking ID", true),
        ExportField::new(BookingField::ActivityTitle, "Activity", true),
        ExportField::new(BookingField::CustomerName, "Customer Name", true),
        ExportField::new(BookingField::CustomerEmail, "Email", false),
        ExportField::new(BookingField::TotalParticipants, "Participants", true),
        ExportField::new(BookingField::TotalAmount, "Amount", true),
        ExportField::new(BookingField::Status, "Status", true),
        ExportField::new(BookingField::BookingDate, "Booking Date", true),
        ExportField::new(BookingField::ActivityDate, "Activity Date", true),
    ])
}

/// Клиенты выгружаются из пользователей
pub fn customer_fields() -> ExportFieldSet<UserField> {
    ExportFieldSet::new(vec![
        ExportField::new(UserField::Id, "Customer ID", true),
        ExportField::new(UserField::FullName, "Name", true),
        ExportField::new(UserField::Email, "Email", true),
        ExportField::new(UserField::Phone, "Phone", false),
        ExportField::new(UserField::TotalBookings, "Total Bookings", true),
        ExportField::new(UserField::TotalSpent, "Total Spent", true),
        ExportField::new(UserField::LastBooking, "Last Booking", true),
        ExportField::new(UserField::CreatedAt, "Registered Date", true),
    ])
}
