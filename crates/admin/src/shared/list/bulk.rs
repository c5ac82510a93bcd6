use contracts::shared::bulk::{BulkMode, BulkReport};
use contracts::shared::record::{Statused, TextEnum};

use super::view::ListView;
use crate::shared::api_utils::BulkMutation;
use crate::shared::error::AdminError;

/// Массовое действие над выбранными строками
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction<S> {
    UpdateStatus(S),
    Delete,
}

impl<S: TextEnum> BulkAction<S> {
    pub fn describe(&self) -> String {
        match self {
            BulkAction::UpdateStatus(status) => format!("set status '{}'", status.as_str()),
            BulkAction::Delete => "delete".to_string(),
        }
    }
}

/// Действия панели массовых операций: смена статуса на каждый
/// из `statuses`, затем удаление
pub fn bulk_actions<S: Copy>(statuses: &[S]) -> Vec<BulkAction<S>> {
    statuses
        .iter()
        .map(|s| BulkAction::UpdateStatus(*s))
        .chain(std::iter::once(BulkAction::Delete))
        .collect()
}

/// Выполняет массовое действие для выбранных строк списка.
///
/// - пустой выбор: `ValidationFailure`, бэкенд не вызывается
/// - ответ-ошибка: `FetchFailure`, локальное состояние не меняется
/// - `BestEffort`: успешные записи обновляются и снимаются с выбора,
///   неудачные остаются выбранными
/// - `AllOrNothing`: локальные изменения только если успешны все записи
pub async fn run_bulk<R, B>(
    view: &mut ListView<R>,
    backend: &B,
    action: BulkAction<R::Status>,
    mode: BulkMode,
) -> Result<BulkReport, AdminError>
where
    R: Statused,
    B: BulkMutation<R> + ?Sized,
{
    let ids = view.selection_for_submit()?;
    tracing::info!("Bulk {} for {} records ({:?})", action.describe(), ids.len(), mode);

    let response = match action {
        BulkAction::UpdateStatus(status) => backend.update_status(&ids, status, mode).await?,
        BulkAction::Delete => backend.delete(&ids, mode).await?,
    };
    let report = response.into_result().map_err(|message| {
        tracing::warn!("Bulk {} failed: {}", action.describe(), message);
        AdminError::FetchFailure(message)
    })?;

    if mode == BulkMode::AllOrNothing && !report.all_succeeded() {
        tracing::warn!(
            "Bulk {} rejected: {} of {} failed, nothing applied",
            action.describe(),
            report.failed_count(),
            report.outcomes.len()
        );
        return Ok(report);
    }

    let succeeded: Vec<&str> = report.succeeded_ids().collect();
    match action {
        BulkAction::UpdateStatus(status) => {
            view.update_records(succeeded.iter().copied(), |r| r.set_status(status))
        }
        BulkAction::Delete => view.remove_records(succeeded.iter().copied()),
    }
    for failure in report.failures() {
        tracing::warn!(
            "Bulk {} failed for {}: {}",
            action.describe(),
            failure.id,
            failure.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(report)
}
