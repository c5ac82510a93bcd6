use contracts::shared::record::{FieldKey, Record};

use crate::shared::cell_format::{CellContent, CellFormatter};

/// Описание колонки таблицы; объявляется один раз на список
#[derive(Debug, Clone, PartialEq)]
pub struct Column<F> {
    pub field: F,
    pub label: &'static str,
    pub sortable: bool,
    pub formatter: CellFormatter<F>,
    /// Подсказка ширины для слоя отрисовки, например "w-32"
    pub width: Option<&'static str>,
}

impl<F: FieldKey> Column<F> {
    pub fn new(field: F, label: &'static str) -> Self {
        Self {
            field,
            label,
            sortable: false,
            formatter: CellFormatter::Plain,
            width: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn formatter(mut self, formatter: CellFormatter<F>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render<R: Record<Field = F>>(&self, row: &R) -> CellContent {
        self.formatter.render(self.field, row)
    }
}

pub fn find_column<F: FieldKey>(columns: &[Column<F>], field: F) -> Option<&Column<F>> {
    columns.iter().find(|c| c.field == field)
}
