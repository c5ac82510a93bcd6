use contracts::shared::api_response::ApiResponse;
use contracts::shared::record::Record;

use super::columns::{find_column, Column};
use super::filter::ListFilter;
use super::projection::project;
use super::selection::{HeaderCheck, Selection};
use super::sort::{SortDirection, SortState};
use crate::shared::error::AdminError;

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Что показывать вместо (или вместе с) таблицей
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    /// Бэкенд вернул пустой список
    Empty,
    /// Записи есть, но фильтр скрыл все
    NoMatches,
    Ready,
}

/// Строка под таблицей: "Showing 3 of 10"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    pub total: usize,
    pub selected: usize,
    pub sorted_by: Option<&'static str>,
    pub direction: Option<SortDirection>,
}

impl ListSummary {
    pub fn text(&self) -> String {
        let mut text = format!("Showing {} of {}", self.shown, self.total);
        if let (Some(label), Some(direction)) = (self.sorted_by, self.direction) {
            text.push_str(&format!(", sorted by {} ({})", label, direction.label()));
        }
        text
    }
}

/// Состояние одного списка админки: загруженные записи, колонки,
/// фильтр, сортировка и выбор.
///
/// Видимые строки не хранятся, `rows()` каждый раз пересчитывает проекцию.
#[derive(Debug, Clone)]
pub struct ListView<R: Record> {
    records: Vec<R>,
    load: LoadState,
    columns: Vec<Column<R::Field>>,
    filter: ListFilter<R::Field>,
    sort: SortState<R::Field>,
    selection: Selection,
}

impl<R: Record> ListView<R> {
    pub fn new(columns: Vec<Column<R::Field>>, filter: ListFilter<R::Field>) -> Self {
        Self {
            records: Vec::new(),
            load: LoadState::Loading,
            columns,
            filter,
            sort: SortState::Unsorted,
            selection: Selection::new(),
        }
    }

    pub fn with_sort(mut self, sort: SortState<R::Field>) -> Self {
        self.sort = sort;
        self
    }

    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Применяет ответ бэкенда. При ошибке старые записи сохраняются,
    /// но статус списка становится `Failed`.
    pub fn apply_response(&mut self, response: ApiResponse<Vec<R>>) {
        match response.into_result() {
            Ok(records) => {
                tracing::debug!("List loaded: {} records", records.len());
                self.records = records;
                self.load = LoadState::Loaded;
            }
            Err(message) => {
                tracing::warn!("List load failed: {}", message);
                self.load = LoadState::Failed(message);
            }
        }
    }

    /// То же, что `apply_response`, но принимает и транспортную ошибку
    pub fn apply_load(&mut self, result: Result<ApiResponse<Vec<R>>, AdminError>) {
        match result {
            Ok(response) => self.apply_response(response),
            Err(err) => {
                tracing::warn!("List load failed: {}", err);
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<R::Field>] {
        &self.columns
    }

    pub fn filter(&self) -> &ListFilter<R::Field> {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut ListFilter<R::Field> {
        &mut self.filter
    }

    pub fn sort(&self) -> &SortState<R::Field> {
        &self.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn rows(&self) -> Vec<&R> {
        project(&self.records, &self.filter, &self.sort)
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.rows().into_iter().map(|r| r.id()).collect()
    }

    pub fn activate_column(&mut self, field: R::Field) {
        self.sort.activate(field, &self.columns);
        tracing::debug!("Sort changed: {:?}", self.sort);
    }

    pub fn toggle_row(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn toggle_all_visible(&mut self) {
        let visible: Vec<String> = self.visible_ids().into_iter().map(str::to_string).collect();
        self.selection.toggle_all(visible.iter().map(String::as_str));
    }

    pub fn header_check(&self) -> HeaderCheck {
        self.selection.header_check(self.visible_ids())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn status(&self) -> ListStatus {
        match &self.load {
            LoadState::Loading => ListStatus::Loading,
            LoadState::Failed(message) => ListStatus::Failed(message.clone()),
            LoadState::Loaded if self.records.is_empty() => ListStatus::Empty,
            LoadState::Loaded if self.rows().is_empty() => ListStatus::NoMatches,
            LoadState::Loaded => ListStatus::Ready,
        }
    }

    pub fn summary(&self) -> ListSummary {
        let field = self.sort.field();
        ListSummary {
            shown: self.rows().len(),
            total: self.records.len(),
            selected: self.selection.count(),
            sorted_by: field
                .and_then(|f| find_column(&self.columns, f))
                .map(|c| c.label),
            direction: self.sort.direction(),
        }
    }

    /// Id для массового действия: выбор без записей, которых уже нет.
    /// Пустой выбор даёт ошибку валидации до обращения к бэкенду.
    pub fn selection_for_submit(&mut self) -> Result<Vec<String>, AdminError> {
        let pruned = self
            .selection
            .prune(self.records.iter().map(|r| r.id()));
        if pruned > 0 {
            tracing::debug!("Pruned {} stale ids from selection", pruned);
        }
        if self.selection.is_empty() {
            return Err(AdminError::validation("No rows selected"));
        }
        Ok(self.selection.ids())
    }

    /// Изменяет записи с указанными id и снимает с них выбор
    pub fn update_records<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a str> + Clone,
        mut update: impl FnMut(&mut R),
    ) {
        let targets: Vec<&str> = ids.clone().into_iter().collect();
        for record in self.records.iter_mut() {
            if targets.iter().any(|t| *t == record.id()) {
                update(record);
            }
        }
        self.selection.remove_all(ids);
    }

    /// Удаляет записи с указанными id и снимает с них выбор
    pub fn remove_records<'a>(&mut self, ids: impl IntoIterator<Item = &'a str> + Clone) {
        let targets: Vec<&str> = ids.clone().into_iter().collect();
        self.records.retain(|r| !targets.iter().any(|t| *t == r.id()));
        self.selection.remove_all(ids);
    }
}
