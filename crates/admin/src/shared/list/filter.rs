//! Предикат фильтрации списка: текстовый поиск И набор ограничений

use chrono::{DateTime, Duration, Months, Utc};
use contracts::shared::record::{FieldKey, FieldValue, Record, TextEnum};

/// Значение выпадающего фильтра ("all" или конкретное значение)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Разбор значения из select: "all" и пустая строка означают `All`
    pub fn from_select(value: &str) -> Self {
        match value {
            "" | "all" => Choice::All,
            other => Choice::Only(other.to_string()),
        }
    }

    pub fn as_select(&self) -> &str {
        match self {
            Choice::All => "all",
            Choice::Only(v) => v,
        }
    }
}

/// Значения для select фильтра по перечислению: "all", затем все варианты
pub fn enum_options<E: TextEnum>() -> Vec<&'static str> {
    std::iter::once("all")
        .chain(E::all().iter().map(|v| v.as_str()))
        .collect()
}

/// Окно по дате относительно текущего момента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateWindow {
    pub fn from_select(value: &str) -> Self {
        match value {
            "today" => DateWindow::Today,
            "week" => DateWindow::Week,
            "month" => DateWindow::Month,
            _ => DateWindow::All,
        }
    }

    /// Границы окна `[from, to)` для `Today` и `[from, to]` для остальных
    fn contains(self, value: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let start_of_today = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|d| d.and_utc())
            .unwrap_or(now);
        match self {
            DateWindow::All => true,
            DateWindow::Today => {
                value >= start_of_today && value < start_of_today + Duration::days(1)
            }
            DateWindow::Week => value >= start_of_today && value <= now + Duration::days(7),
            DateWindow::Month => {
                let month_ahead = start_of_today
                    .checked_add_months(Months::new(1))
                    .unwrap_or(start_of_today);
                value >= start_of_today && value <= month_ahead
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constraint<F> {
    Equals { field: F, choice: Choice },
    Within {
        field: F,
        window: DateWindow,
        now: DateTime<Utc>,
    },
}

impl<F: FieldKey> Constraint<F> {
    fn field(&self) -> F {
        match self {
            Constraint::Equals { field, .. } | Constraint::Within { field, .. } => *field,
        }
    }

    fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        match self {
            Constraint::Equals { field, choice } => match choice {
                Choice::All => true,
                Choice::Only(expected) => {
                    let value = record.field(*field);
                    !value.is_null() && value.to_plain_string() == *expected
                }
            },
            Constraint::Within { field, window, now } => match window {
                DateWindow::All => true,
                _ => match record.field(*field) {
                    FieldValue::Date(value) => window.contains(value, *now),
                    _ => false,
                },
            },
        }
    }
}

/// Состояние фильтров одного списка.
///
/// Не изменяет записи; `matches` можно вызывать сколько угодно раз.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFilter<F> {
    query: String,
    searchable: Vec<F>,
    min_search_len: usize,
    constraints: Vec<Constraint<F>>,
}

impl<F: FieldKey> ListFilter<F> {
    pub fn new(searchable: Vec<F>) -> Self {
        Self {
            query: String::new(),
            searchable,
            min_search_len: 0,
            constraints: Vec::new(),
        }
    }

    pub fn with_min_search_len(mut self, min_search_len: usize) -> Self {
        self.min_search_len = min_search_len;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn searchable(&self) -> &[F] {
        &self.searchable
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Нормализованный запрос или `None`, если поиск не активен
    pub fn effective_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.min_search_len {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn set_choice(&mut self, field: F, choice: Choice) {
        self.replace(Constraint::Equals { field, choice });
    }

    pub fn set_date_window(&mut self, field: F, window: DateWindow, now: DateTime<Utc>) {
        self.replace(Constraint::Within { field, window, now });
    }

    pub fn choice(&self, field: F) -> Choice {
        self.constraints
            .iter()
            .find_map(|c| match c {
                Constraint::Equals { field: f, choice } if *f == field => Some(choice.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn date_window(&self, field: F) -> DateWindow {
        self.constraints
            .iter()
            .find_map(|c| match c {
                Constraint::Within { field: f, window, .. } if *f == field => Some(*window),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Сброс запроса и всех ограничений
    pub fn reset(&mut self) {
        self.query.clear();
        self.constraints.clear();
    }

    /// Активен ли хотя бы один фильтр
    pub fn is_active(&self) -> bool {
        self.effective_query().is_some()
            || self.constraints.iter().any(|c| match c {
                Constraint::Equals { choice, .. } => *choice != Choice::All,
                Constraint::Within { window, .. } => *window != DateWindow::All,
            })
    }

    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.text_matches(record) && self.constraints.iter().all(|c| c.matches(record))
    }

    fn text_matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        let Some(query) = self.effective_query() else {
            return true;
        };
        self.searchable.iter().any(|field| {
            record
                .field(*field)
                .to_plain_string()
                .to_lowercase()
                .contains(&query)
        })
    }

    fn replace(&mut self, constraint: Constraint<F>) {
        let field = constraint.field();
        let same_kind = |c: &Constraint<F>| {
            c.field() == field
                && std::mem::discriminant(c) == std::mem::discriminant(&constraint)
        };
        match self.constraints.iter().position(same_kind) {
            Some(index) => self.constraints[index] = constraint,
            None => self.constraints.push(constraint),
        }
    }
}

/// Часть текста с отметкой совпадения с поисковым запросом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Разбивает текст на совпавшие и несовпавшие части (без учёта регистра).
/// Пустой запрос даёт один несовпавший сегмент.
pub fn highlight_segments<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let needle: Vec<char> = query.trim().chars().collect();
    if needle.is_empty() {
        return vec![Segment { text, matched: false }];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], &needle) {
            if plain_start < pos {
                segments.push(Segment {
                    text: &text[plain_start..pos],
                    matched: false,
                });
            }
            segments.push(Segment {
                text: &text[pos..pos + len],
                matched: true,
            });
            pos += len;
            plain_start = pos;
        } else {
            pos += text[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
        }
    }
    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }
    segments
}

fn match_len_at(text: &str, needle: &[char]) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in needle {
        let (_, c) = chars.next()?;
        if !c.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map(|(i, _)| i).unwrap_or(text.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a002_booking::{Booking, BookingField, BookingStatus};

    fn booking(id: &str, name: &str, email: &str, status: BookingStatus, day: u32) -> Booking {
        let date = Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap();
        Booking {
            id: id.into(),
            activity_id: "ACT001".into(),
            activity_title: "Boat Trip".into(),
            customer_name: name.into(),
            customer_email: email.into(),
            total_participants: 2,
            total_amount: 100.0,
            status,
            booking_date: date,
            activity_date: date,
            created_at: date,
        }
    }

    fn search_filter() -> ListFilter<BookingField> {
        ListFilter::new(vec![
            BookingField::CustomerName,
            BookingField::CustomerEmail,
            BookingField::Id,
        ])
    }

    #[test]
    fn test_search_matches_any_searchable_field() {
        let zip = booking("BK1", "Zip Line Co", "a@x", BookingStatus::Pending, 1);
        let other = booking("BK2", "Harbour", "zipper@x", BookingStatus::Pending, 1);
        let none = booking("BK3", "Harbour", "b@x", BookingStatus::Pending, 1);

        let mut filter = search_filter();
        filter.set_query("zip");
        assert!(filter.matches(&zip));
        assert!(filter.matches(&other));
        assert!(!filter.matches(&none));
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let row = booking("BK1", "Maria Lopez", "m@x", BookingStatus::Pending, 1);
        let mut filter = search_filter();
        filter.set_query("  LOPEZ ");
        assert!(filter.matches(&row));
        filter.set_query("   ");
        assert!(filter.matches(&row));
        assert!(!filter.is_active());
    }

    #[test]
    fn test_min_search_len() {
        let row = booking("BK1", "Maria", "m@x", BookingStatus::Pending, 1);
        let mut filter = search_filter().with_min_search_len(3);
        filter.set_query("zz");
        assert!(filter.matches(&row));
        filter.set_query("zzz");
        assert!(!filter.matches(&row));
    }

    #[test]
    fn test_choice_constraint_combines_with_search() {
        let confirmed = booking("BK1", "Maria", "m@x", BookingStatus::Confirmed, 1);
        let pending = booking("BK2", "Maria", "m@x", BookingStatus::Pending, 1);

        let mut filter = search_filter();
        filter.set_query("maria");
        filter.set_choice(BookingField::Status, Choice::from_select("confirmed"));
        assert!(filter.matches(&confirmed));
        assert!(!filter.matches(&pending));

        filter.set_choice(BookingField::Status, Choice::All);
        assert!(filter.matches(&pending));
        assert_eq!(filter.choice(BookingField::Status), Choice::All);
    }

    #[test]
    fn test_date_windows() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap();
        let mut filter = search_filter();

        let today = booking("BK1", "A", "a", BookingStatus::Pending, 10);
        let in_week = booking("BK2", "A", "a", BookingStatus::Pending, 16);
        let in_month = booking("BK3", "A", "a", BookingStatus::Pending, 28);
        let past = booking("BK4", "A", "a", BookingStatus::Pending, 9);

        filter.set_date_window(BookingField::ActivityDate, DateWindow::Today, now);
        assert!(filter.matches(&today));
        assert!(!filter.matches(&in_week));

        filter.set_date_window(BookingField::ActivityDate, DateWindow::Week, now);
        assert!(filter.matches(&today));
        assert!(filter.matches(&in_week));
        assert!(!filter.matches(&in_month));
        assert!(!filter.matches(&past));

        filter.set_date_window(BookingField::ActivityDate, DateWindow::Month, now);
        assert!(filter.matches(&in_month));
        assert!(!filter.matches(&past));
        assert_eq!(filter.date_window(BookingField::ActivityDate), DateWindow::Month);
    }

    #[test]
    fn test_enum_options() {
        assert_eq!(
            enum_options::<BookingStatus>(),
            vec!["all", "pending", "confirmed", "cancelled", "completed", "no_show"]
        );
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight_segments("Zip line, ZIP!", "zip");
        assert_eq!(
            segments,
            vec![
                Segment { text: "Zip", matched: true },
                Segment { text: " line, ", matched: false },
                Segment { text: "ZIP", matched: true },
                Segment { text: "!", matched: false },
            ]
        );
        assert_eq!(highlight_segments("abc", "").len(), 1);
        assert_eq!(
            highlight_segments("Ñandú", "DÚ"),
            vec![
                Segment { text: "Ñan", matched: false },
                Segment { text: "dú", matched: true },
            ]
        );
    }
}
