use contracts::shared::record::FieldKey;

use super::columns::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Активная сортировка списка: не больше одного поля одновременно
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState<F> {
    Unsorted,
    Ascending(F),
    Descending(F),
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        SortState::Unsorted
    }
}

impl<F: FieldKey> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortState::Ascending(field),
            SortDirection::Descending => SortState::Descending(field),
        }
    }

    pub fn field(&self) -> Option<F> {
        match *self {
            SortState::Unsorted => None,
            SortState::Ascending(f) | SortState::Descending(f) => Some(f),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(_) => Some(SortDirection::Ascending),
            SortState::Descending(_) => Some(SortDirection::Descending),
        }
    }

    /// Клик по заголовку колонки: asc → desc → без сортировки → asc.
    /// Другая колонка всегда начинает с asc. Колонки без флага `sortable`
    /// (и не объявленные в списке) игнорируются.
    pub fn activate(&mut self, field: F, columns: &[Column<F>]) {
        let sortable = columns.iter().any(|c| c.field == field && c.sortable);
        if !sortable {
            return;
        }
        *self = self.next_for(field);
    }

    fn next_for(&self, field: F) -> Self {
        match *self {
            SortState::Ascending(current) if current == field => SortState::Descending(field),
            SortState::Descending(current) if current == field => SortState::Unsorted,
            _ => SortState::Ascending(field),
        }
    }
}

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator<F: FieldKey>(state: &SortState<F>, field: F) -> &'static str {
    match *state {
        SortState::Ascending(f) if f == field => " ▲",
        SortState::Descending(f) if f == field => " ▼",
        _ => " ⇅",
    }
}
