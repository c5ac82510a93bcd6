use serde::{Deserialize, Serialize};

/// Режим массовой операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkMode {
    /// Каждая запись обрабатывается отдельно, отчёт по каждой
    #[default]
    BestEffort,
    /// Бэкенд применяет всё или ничего
    AllOrNothing,
}

/// Результат массовой операции для одной записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemOutcome {
    pub id: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkItemOutcome {
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ok: true,
            error: None,
        }
    }

    pub fn failed(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Отчёт о массовой операции
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    pub outcomes: Vec<BulkItemOutcome>,
}

impl BulkReport {
    pub fn new(outcomes: Vec<BulkItemOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn succeeded_ids(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter(|o| o.ok).map(|o| o.id.as_str())
    }

    pub fn failures(&self) -> impl Iterator<Item = &BulkItemOutcome> {
        self.outcomes.iter().filter(|o| !o.ok)
    }

    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.ok).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.ok)
    }
}
