use chrono::NaiveDate;
use contracts::shared::record::Record;

use super::ExportKind;
use crate::shared::api_utils::{fetch_records, RecordSource};
use crate::shared::config::ExportConfig;
use crate::shared::error::AdminError;
use crate::shared::export::{
    export_filename, serialize_csv, with_bom, ExportFieldSet, OutputSink, CSV_MIME,
};

/// Итог выгрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub filename: String,
    pub rows: usize,
}

/// Выгрузка: проверка полей, загрузка записей, сериализация и запись в sink.
/// При пустом наборе полей источник не вызывается.
pub async fn run_export<R, S, O>(
    kind: ExportKind,
    fields: &ExportFieldSet<R::Field>,
    source: &S,
    sink: &mut O,
    today: NaiveDate,
    config: &ExportConfig,
) -> Result<ExportReceipt, AdminError>
where
    R: Record,
    S: RecordSource<R> + ?Sized,
    O: OutputSink + ?Sized,
{
    if !fields.can_export() {
        return Err(AdminError::validation("Select at least one field to export"));
    }

    let records = fetch_records(source).await.map_err(|e| {
        tracing::warn!("Export of {} failed to load data: {}", kind.id(), e);
        e
    })?;

    let content = with_bom(serialize_csv(Some(records.as_slice()), fields), config.include_bom);
    let filename = export_filename(kind.id(), today);
    sink.write_output(&content, &filename, CSV_MIME)?;

    tracing::info!(
        "Exported {} {} rows ({} columns) to {}",
        records.len(),
        kind.id(),
        fields.included_count(),
        filename
    );

    Ok(ExportReceipt {
        filename,
        rows: records.len(),
    })
}
