use serde::{Deserialize, Serialize};

/// Конверт ответа бэкенда: `{isSuccess, message, data}`.
///
/// При `is_success == false` поле `data` не читается, даже если оно пришло.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Разворачивает конверт; ошибка содержит сообщение для пользователя
    pub fn into_result(self) -> Result<T, String> {
        if !self.is_success {
            return Err(if self.message.is_empty() {
                "Request failed".to_string()
            } else {
                self.message
            });
        }
        self.data
            .ok_or_else(|| "Response reported success but carried no data".to_string())
    }
}
