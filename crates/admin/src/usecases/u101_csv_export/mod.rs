//! u101: выгрузка активностей, бронирований и клиентов в CSV

pub mod fields;
pub mod run;

pub use fields::{activity_fields, booking_fields, customer_fields};
pub use run::{run_export, ExportReceipt};

/// Что выгружаем
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Activities,
    Bookings,
    Customers,
}

impl ExportKind {
    pub fn all() -> &'static [ExportKind] {
        &[ExportKind::Activities, ExportKind::Bookings, ExportKind::Customers]
    }

    /// Идентификатор, он же префикс имени файла
    pub fn id(&self) -> &'static str {
        match self {
            ExportKind::Activities => "activities",
            ExportKind::Bookings => "bookings",
            ExportKind::Customers => "customers",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportKind::Activities => "Activities",
            ExportKind::Bookings => "Bookings",
            ExportKind::Customers => "Customers",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportKind::Activities => "Export all activity data",
            ExportKind::Bookings => "Export booking information",
            ExportKind::Customers => "Export customer data",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids() {
        for kind in ExportKind::all() {
            assert_eq!(ExportKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(ExportKind::from_id("payments"), None);
    }
}
