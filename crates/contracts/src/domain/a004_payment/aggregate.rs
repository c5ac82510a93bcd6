use crate::shared::record::{FieldValue, Record, TextEnum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::text_enum! {
    pub enum PaymentStatus {
        Succeeded => "succeeded",
        Pending => "pending",
        Failed => "failed",
        Refunded => "refunded",
    }
}

crate::record_fields! {
    pub enum PaymentField {
        Id => "id",
        Amount => "amount",
        Currency => "currency",
        Status => "status",
        CustomerEmail => "customerEmail",
        CustomerName => "customerName",
        ActivityName => "activityName",
        PaymentMethod => "paymentMethod",
        CreatedAt => "createdAt",
        StripeChargeId => "stripeChargeId",
    }
}

/// Платёж по бронированию
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    /// Код валюты, ISO 4217
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub activity_name: String,
    #[serde(default)]
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub stripe_charge_id: Option<String>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Record for Payment {
    type Field = PaymentField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: PaymentField) -> FieldValue<'_> {
        match field {
            PaymentField::Id => self.id.as_str().into(),
            PaymentField::Amount => self.amount.into(),
            PaymentField::Currency => self.currency.as_str().into(),
            PaymentField::Status => self.status.as_str().into(),
            PaymentField::CustomerEmail => self.customer_email.as_str().into(),
            PaymentField::CustomerName => self.customer_name.as_str().into(),
            PaymentField::ActivityName => self.activity_name.as_str().into(),
            PaymentField::PaymentMethod => self.payment_method.as_str().into(),
            PaymentField::CreatedAt => self.created_at.into(),
            PaymentField::StripeChargeId => self.stripe_charge_id.as_deref().into(),
        }
    }
}
