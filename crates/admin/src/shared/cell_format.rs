//! Форматирование ячеек таблиц без привязки к UI-фреймворку.
//!
//! Слой отрисовки получает `CellContent` и сам решает, как показать
//! бейдж, ссылку или составную ячейку.

use contracts::shared::record::{FieldKey, FieldValue, Record};

/// Текст ячейки без значения
pub const PLACEHOLDER: &str = "-";

/// Части имени поля, по которым число считается суммой в евро
const MONEY_KEYS: &[&str] = &["amount", "price", "spent"];

/// Вариант бейджа: "primary", "success", "warning", "error", "neutral"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
            BadgeTone::Neutral => "badge--neutral",
        }
    }
}

/// Способ отображения значения колонки
#[derive(Debug, Clone, PartialEq)]
pub enum CellFormatter<F> {
    /// Значение по умолчанию: даты, суммы, "-" для пустых
    Plain,
    /// Бейдж с тоном по значению; для неизвестных значений `Neutral`
    Badge { tones: &'static [(&'static str, BadgeTone)] },
    /// Ссылка; `{id}` в маршруте заменяется на значение `param`
    /// (или на id записи, если `param` не задан)
    Link { route: &'static str, param: Option<F> },
    /// Основное значение и дополнительные строки под ним
    Composite(Vec<F>),
}

/// Готовое содержимое ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Placeholder,
    Text(String),
    Badge { text: String, tone: BadgeTone },
    Link { text: String, href: String },
    Stack(Vec<String>),
}

impl CellContent {
    /// Текстовое представление (для подсказок и тестов)
    pub fn as_text(&self) -> String {
        match self {
            CellContent::Placeholder => PLACEHOLDER.to_string(),
            CellContent::Text(text) => text.clone(),
            CellContent::Badge { text, .. } => text.clone(),
            CellContent::Link { text, .. } => text.clone(),
            CellContent::Stack(lines) => lines.join(" / "),
        }
    }
}

impl<F: FieldKey> CellFormatter<F> {
    pub fn render<R: Record<Field = F>>(&self, field: F, row: &R) -> CellContent {
        let value = row.field(field);
        match self {
            CellFormatter::Plain => format_plain(field, &value),
            CellFormatter::Badge { tones } => {
                if value.is_null() {
                    return CellContent::Placeholder;
                }
                let text = value.to_plain_string();
                let tone = tones
                    .iter()
                    .find(|(v, _)| *v == text)
                    .map(|(_, tone)| *tone)
                    .unwrap_or(BadgeTone::Neutral);
                CellContent::Badge { text, tone }
            }
            CellFormatter::Link { route, param } => match format_plain(field, &value) {
                CellContent::Text(text) => {
                    let target = match param {
                        Some(param) => row.field(*param).to_plain_string(),
                        None => row.id().to_string(),
                    };
                    CellContent::Link {
                        text,
                        href: route.replace("{id}", &urlencoding::encode(&target)),
                    }
                }
                other => other,
            },
            CellFormatter::Composite(extra) => {
                let lines: Vec<String> = std::iter::once(field)
                    .chain(extra.iter().copied())
                    .filter_map(|f| match format_plain(f, &row.field(f)) {
                        CellContent::Text(text) => Some(text),
                        _ => None,
                    })
                    .collect();
                if lines.is_empty() {
                    CellContent::Placeholder
                } else {
                    CellContent::Stack(lines)
                }
            }
        }
    }
}

/// Форматирование по умолчанию
pub fn format_plain<F: FieldKey>(field: F, value: &FieldValue<'_>) -> CellContent {
    match value {
        FieldValue::Null => CellContent::Placeholder,
        FieldValue::Date(d) => CellContent::Text(d.format("%Y-%m-%d").to_string()),
        FieldValue::Number(n) if is_money_field(field) => CellContent::Text(format_euro(*n)),
        other => CellContent::Text(other.to_plain_string()),
    }
}

fn is_money_field<F: FieldKey>(field: F) -> bool {
    let key = field.key().to_lowercase();
    MONEY_KEYS.iter().any(|m| key.contains(m))
}

/// Форматирует сумму в евро: "€1,234.50"
pub fn format_euro(value: f64) -> String {
    format!("€{}", format_number_with_decimals(value, 2))
}

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}
