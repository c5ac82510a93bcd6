//! Сравнение значений полей разных типов для сортировки списков

use contracts::shared::record::FieldValue;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::sort::SortDirection;

/// Сравнивает два значения в порядке возрастания.
///
/// - Null == Null, Null всегда после непустого значения
/// - строки без учёта регистра; диакритика учитывается только при
///   равенстве базовых букв ("Ávila" < "Bob", "eclair" < "éclair")
/// - числа численно (NaN считается равным всему)
/// - даты по моменту времени
/// - разные типы сравниваются по строковой форме без учёта регистра
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
        (FieldValue::Null, _) => Ordering::Greater,
        (_, FieldValue::Null) => Ordering::Less,
        (FieldValue::Text(a), FieldValue::Text(b)) => compare_text(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        _ => compare_text(&a.to_plain_string(), &b.to_plain_string()),
    }
}

/// Сравнение с учётом направления; при убывании порядок полностью
/// инвертируется, поэтому Null оказывается в начале
pub fn compare_directed(a: &FieldValue<'_>, b: &FieldValue<'_>, direction: SortDirection) -> Ordering {
    let cmp = compare_values(a, b);
    match direction {
        SortDirection::Ascending => cmp,
        SortDirection::Descending => cmp.reverse(),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    collation_key(&a)
        .cmp(&collation_key(&b))
        .then_with(|| a.cmp(&b))
}

/// Базовые буквы: NFD без комбинируемых знаков
fn collation_key(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_nulls() {
        assert_eq!(compare_values(&FieldValue::Null, &FieldValue::Null), Ordering::Equal);
        assert_eq!(compare_values(&FieldValue::Null, &FieldValue::text("a")), Ordering::Greater);
        assert_eq!(compare_values(&FieldValue::Number(1.0), &FieldValue::Null), Ordering::Less);
        assert_eq!(
            compare_directed(&FieldValue::Null, &FieldValue::text("a"), SortDirection::Descending),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_is_case_insensitive() {
        assert_eq!(compare_values(&"ana".into(), &"Bob".into()), Ordering::Less);
        assert_eq!(compare_values(&"BOB".into(), &"bob".into()), Ordering::Equal);
    }

    #[test]
    fn test_accented_text_sorts_with_base_letters() {
        assert_eq!(compare_values(&"Ávila".into(), &"Bob".into()), Ordering::Less);
        assert_eq!(compare_values(&"éclair".into(), &"fig".into()), Ordering::Less);
        assert_eq!(compare_values(&"Sóller".into(), &"Palma".into()), Ordering::Greater);
        assert_eq!(compare_values(&"Alcúdia".into(), &"Andratx".into()), Ordering::Less);
        // accents only break ties
        assert_eq!(compare_values(&"eclair".into(), &"Éclair".into()), Ordering::Less);
        assert_eq!(compare_values(&"Sóller".into(), &"sóller".into()), Ordering::Equal);
    }

    #[test]
    fn test_numbers_and_dates() {
        assert_eq!(compare_values(&5.0.into(), &50.0.into()), Ordering::Less);
        assert_eq!(compare_values(&f64::NAN.into(), &1.0.into()), Ordering::Equal);

        let early = Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(compare_values(&late.into(), &early.into()), Ordering::Greater);
    }

    #[test]
    fn test_mixed_types_fall_back_to_strings() {
        // "10" vs "9" as strings
        assert_eq!(compare_values(&"10".into(), &9.0.into()), Ordering::Less);
        assert_eq!(compare_values(&true.into(), &false.into()), Ordering::Greater);
    }
}
