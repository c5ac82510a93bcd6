use thiserror::Error;

/// Ошибки ядра списков админки
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdminError {
    /// Сеть или бэкенд вернули ошибку; показывается пользователю как есть
    #[error("{0}")]
    FetchFailure(String),

    /// Действие не может быть выполнено с текущим выбором
    #[error("Validation failed: {0}")]
    ValidationFailure(String),

    /// Ответ пришёл после закрытия списка или был вытеснен более новым запросом
    #[error("View is no longer mounted")]
    Unmounted,

    #[error("Output error: {0}")]
    Output(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl AdminError {
    pub fn fetch(message: impl Into<String>) -> Self {
        AdminError::FetchFailure(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AdminError::ValidationFailure(message.into())
    }
}

impl From<toml::de::Error> for AdminError {
    fn from(err: toml::de::Error) -> Self {
        AdminError::Config(err.to_string())
    }
}
