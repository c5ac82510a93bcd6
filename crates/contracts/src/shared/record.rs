use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Значение поля записи в том виде, в каком его видят сортировка, поиск и экспорт
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
    Date(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Строковая форма без форматирования: пустая строка для Null,
    /// числа без разделителей тысяч, даты в RFC 3339 (UTC)
    pub fn to_plain_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Date(d) => d.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::text(value)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map(FieldValue::text).unwrap_or(FieldValue::Null)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Null)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<Option<u32>> for FieldValue<'_> {
    fn from(value: Option<u32>) -> Self {
        value.map(FieldValue::from).unwrap_or(FieldValue::Null)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Option<DateTime<Utc>>> for FieldValue<'_> {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map(FieldValue::Date).unwrap_or(FieldValue::Null)
    }
}

impl From<&serde_json::Value> for FieldValue<'_> {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            serde_json::Value::String(s) => FieldValue::Text(Cow::Owned(s.clone())),
            other => FieldValue::Text(Cow::Owned(other.to_string())),
        }
    }
}

/// Трейт для перечислений полей сущности.
///
/// Колонки, фильтры и экспорт ссылаются на поля через этот тип,
/// поэтому опечатка в имени поля ловится компилятором.
pub trait FieldKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Имя поля в JSON бэкенда (camelCase)
    fn key(self) -> &'static str;

    /// Все поля в порядке объявления
    fn all() -> &'static [Self];

    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }
}

/// Трейт для строковых перечислений (статусы, роли, категории)
pub trait TextEnum: Copy + Eq + Debug + Send + Sync + 'static {
    fn as_str(self) -> &'static str;

    fn all() -> &'static [Self];

    fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == value)
    }
}

/// Строка таблицы админки
pub trait Record: Clone + Send + Sync + 'static {
    type Field: FieldKey;

    /// Идентификатор записи, используется для выбора строк
    fn id(&self) -> &str;

    /// Значение поля; отсутствующие значения возвращаются как `FieldValue::Null`
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

/// Запись со статусом, который можно менять массово
pub trait Statused: Record {
    type Status: TextEnum;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);
}

/// Объявляет перечисление полей сущности вместе с реализацией `FieldKey`
#[macro_export]
macro_rules! record_fields {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::shared::record::FieldKey for $name {
            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }
    };
}

/// Объявляет строковое перечисление с serde-представлением и `TextEnum`
#[macro_export]
macro_rules! text_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(#[serde(rename = $value)] $variant),+
        }

        impl $crate::shared::record::TextEnum for $name {
            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::shared::record::TextEnum::as_str(*self))
            }
        }
    };
}
