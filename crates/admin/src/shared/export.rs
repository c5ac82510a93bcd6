//! Экспорт записей списка в CSV
//!
//! Сериализация не зависит от браузера; запись результата идёт через
//! `OutputSink` (в браузере это скачивание файла).

use chrono::NaiveDate;
use contracts::shared::record::{FieldKey, FieldValue, Record};

use super::error::AdminError;

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

const BOM: char = '\u{FEFF}';

/// Поле экспорта: подпись колонки и флаг включения
#[derive(Debug, Clone, PartialEq)]
pub struct ExportField<F> {
    pub field: F,
    pub label: &'static str,
    pub include: bool,
}

impl<F: FieldKey> ExportField<F> {
    pub fn new(field: F, label: &'static str, include: bool) -> Self {
        Self {
            field,
            label,
            include,
        }
    }
}

/// Набор полей экспорта в порядке колонок файла
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFieldSet<F> {
    fields: Vec<ExportField<F>>,
}

impl<F: FieldKey> ExportFieldSet<F> {
    pub fn new(fields: Vec<ExportField<F>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[ExportField<F>] {
        &self.fields
    }

    pub fn toggle(&mut self, field: F) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.field == field) {
            f.include = !f.include;
        }
    }

    pub fn set_included(&mut self, field: F, include: bool) {
        if let Some(f) = self.fields.iter_mut().find(|f| f.field == field) {
            f.include = include;
        }
    }

    pub fn included(&self) -> impl Iterator<Item = &ExportField<F>> {
        self.fields.iter().filter(|f| f.include)
    }

    pub fn included_count(&self) -> usize {
        self.included().count()
    }

    /// Экспорт возможен, если выбрано хотя бы одно поле
    pub fn can_export(&self) -> bool {
        self.included_count() > 0
    }
}

/// Строит CSV: строка заголовков, затем по строке на запись, разделитель `\n`,
/// без завершающего перевода строки. `None` даёт только заголовки.
pub fn serialize_csv<R: Record>(records: Option<&[R]>, fields: &ExportFieldSet<R::Field>) -> String {
    let included: Vec<&ExportField<R::Field>> = fields.included().collect();

    let header = included
        .iter()
        .map(|f| escape_csv_cell(f.label))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = vec![header];
    for record in records.unwrap_or_default() {
        let row = included
            .iter()
            .map(|f| escape_csv_cell(&csv_value(&record.field(f.field))))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

/// Строковая форма значения в CSV: пусто для Null, числа без разделителей
pub fn csv_value(value: &FieldValue<'_>) -> String {
    value.to_plain_string()
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        // Удваиваем кавычки внутри значения
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Добавляет UTF-8 BOM для Excel, если он включён в конфигурации
pub fn with_bom(content: String, include_bom: bool) -> String {
    if include_bom {
        let mut out = String::with_capacity(content.len() + BOM.len_utf8());
        out.push(BOM);
        out.push_str(&content);
        out
    } else {
        content
    }
}

/// "{kind}-export-{YYYY-MM-DD}.csv"
pub fn export_filename(kind: &str, date: NaiveDate) -> String {
    format!("{}-export-{}.csv", kind, date.format("%Y-%m-%d"))
}

/// Куда записывается готовый файл
pub trait OutputSink {
    fn write_output(&mut self, content: &str, filename: &str, mime: &str) -> Result<(), AdminError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub content: String,
    pub filename: String,
    pub mime: String,
}

/// Сохраняет файлы в памяти
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub outputs: Vec<WrittenOutput>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&WrittenOutput> {
        self.outputs.last()
    }
}

impl OutputSink for MemorySink {
    fn write_output(&mut self, content: &str, filename: &str, mime: &str) -> Result<(), AdminError> {
        self.outputs.push(WrittenOutput {
            content: content.to_string(),
            filename: filename.to_string(),
            mime: mime.to_string(),
        });
        Ok(())
    }
}

/// Скачивание файла в браузере через Blob и временную ссылку `<a download>`
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

#[cfg(feature = "browser")]
impl OutputSink for BrowserDownload {
    fn write_output(&mut self, content: &str, filename: &str, mime: &str) -> Result<(), AdminError> {
        let blob = browser::create_blob(content, mime)?;
        browser::download_blob(&blob, filename)
    }
}

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    use crate::shared::error::AdminError;

    fn output_error(context: &str, err: impl std::fmt::Debug) -> AdminError {
        AdminError::Output(format!("{}: {:?}", context, err))
    }

    pub(super) fn create_blob(content: &str, mime: &str) -> Result<Blob, AdminError> {
        let array = js_sys::Array::new();
        array.push(&wasm_bindgen::JsValue::from_str(content));

        let properties = BlobPropertyBag::new();
        properties.set_type(mime);

        Blob::new_with_str_sequence_and_options(&array, &properties)
            .map_err(|e| output_error("Failed to create blob", e))
    }

    pub(super) fn download_blob(blob: &Blob, filename: &str) -> Result<(), AdminError> {
        let window = web_sys::window().ok_or_else(|| AdminError::Output("No window object".into()))?;
        let document = window
            .document()
            .ok_or_else(|| AdminError::Output("No document object".into()))?;
        let body = document
            .body()
            .ok_or_else(|| AdminError::Output("No body element".into()))?;

        let url = Url::create_object_url_with_blob(blob)
            .map_err(|e| output_error("Failed to create object URL", e))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| output_error("Failed to create anchor", e))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|e| output_error("Failed to cast to anchor", e))?;

        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor
            .style()
            .set_property("display", "none")
            .map_err(|e| output_error("Failed to set style", e))?;

        body.append_child(&anchor)
            .map_err(|e| output_error("Failed to append anchor", e))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|e| output_error("Failed to remove anchor", e))?;

        Url::revoke_object_url(&url).map_err(|e| output_error("Failed to revoke URL", e))?;
        tracing::debug!("Download started: {}", filename);
        Ok(())
    }
}
