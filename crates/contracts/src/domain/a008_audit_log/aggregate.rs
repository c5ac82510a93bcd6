use crate::shared::record::{FieldValue, Record, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum AuditSeverity {
        Info => "info",
        Warning => "warning",
        Error => "error",
        Critical => "critical",
    }
}

crate::text_enum! {
    pub enum AuditCategory {
        Auth => "auth",
        Admin => "admin",
        Booking => "booking",
        Activity => "activity",
        Review => "review",
        Payment => "payment",
        Settings => "settings",
        User => "user",
    }
}

crate::record_fields! {
    pub enum AuditLogField {
        Id => "id",
        UserId => "userId",
        UserEmail => "userEmail",
        UserName => "userName",
        Action => "action",
        Resource => "resource",
        ResourceId => "resourceId",
        Severity => "severity",
        Category => "category",
        IpAddress => "ipAddress",
        CreatedAt => "createdAt",
    }
}

/// Запись журнала аудита
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub user_id: String,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    /// Действие, например "UPDATE_ACTIVITY"
    pub action: String,
    /// Тип ресурса, например "booking"
    pub resource: String,
    pub resource_id: Option<String>,
    pub severity: AuditSeverity,
    pub category: AuditCategory,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for AuditLog {
    type Field = AuditLogField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: AuditLogField) -> FieldValue<'_> {
        match field {
            AuditLogField::Id => self.id.as_str().into(),
            AuditLogField::UserId => self.user_id.as_str().into(),
            AuditLogField::UserEmail => self.user_email.as_deref().into(),
            AuditLogField::UserName => self.user_name.as_deref().into(),
            AuditLogField::Action => self.action.as_str().into(),
            AuditLogField::Resource => self.resource.as_str().into(),
            AuditLogField::ResourceId => self.resource_id.as_deref().into(),
            AuditLogField::Severity => self.severity.as_str().into(),
            AuditLogField::Category => self.category.as_str().into(),
            AuditLogField::IpAddress => self.ip_address.as_deref().into(),
            AuditLogField::CreatedAt => self.created_at.into(),
        }
    }
}
