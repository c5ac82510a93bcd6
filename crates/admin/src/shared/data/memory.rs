use async_trait::async_trait;
use contracts::shared::api_response::ApiResponse;
use contracts::shared::bulk::{BulkItemOutcome, BulkMode, BulkReport};
use contracts::shared::record::{Record, Statused};
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::shared::api_utils::{BulkMutation, RecordSource};
use crate::shared::error::AdminError;

/// In-memory backend for hosts without a server and for tests.
///
/// Ids registered with `with_locked_id` fail every bulk operation;
/// `with_list_failure` makes `list` answer with a failure envelope.
#[derive(Debug)]
pub struct MemoryBackend<R> {
    records: RwLock<Vec<R>>,
    locked_ids: HashSet<String>,
    list_failure: Option<String>,
}

impl<R: Record> MemoryBackend<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
            locked_ids: HashSet::new(),
            list_failure: None,
        }
    }

    pub fn with_locked_id(mut self, id: impl Into<String>) -> Self {
        self.locked_ids.insert(id.into());
        self
    }

    pub fn with_list_failure(mut self, message: impl Into<String>) -> Self {
        self.list_failure = Some(message.into());
        self
    }

    pub async fn snapshot(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    fn plan(&self, records: &[R], ids: &[String], mode: BulkMode) -> (Vec<BulkItemOutcome>, bool) {
        let mut outcomes: Vec<BulkItemOutcome> = ids
            .iter()
            .map(|id| {
                if self.locked_ids.contains(id) {
                    BulkItemOutcome::failed(id, "Record is locked")
                } else if !records.iter().any(|r| r.id() == id) {
                    BulkItemOutcome::failed(id, "Record not found")
                } else {
                    BulkItemOutcome::ok(id)
                }
            })
            .collect();

        let any_failed = outcomes.iter().any(|o| !o.ok);
        if mode == BulkMode::AllOrNothing && any_failed {
            for outcome in outcomes.iter_mut().filter(|o| o.ok) {
                *outcome = BulkItemOutcome::failed(&outcome.id, "Rolled back");
            }
        }
        (outcomes, !(mode == BulkMode::AllOrNothing && any_failed))
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for MemoryBackend<R> {
    async fn list(&self) -> Result<ApiResponse<Vec<R>>, AdminError> {
        if let Some(message) = &self.list_failure {
            return Ok(ApiResponse::failure(message.clone()));
        }
        let records = self.records.read().await.clone();
        Ok(ApiResponse::success(records, ""))
    }
}

#[async_trait]
impl<R: Statused> BulkMutation<R> for MemoryBackend<R> {
    async fn update_status(
        &self,
        ids: &[String],
        status: R::Status,
        mode: BulkMode,
    ) -> Result<ApiResponse<BulkReport>, AdminError> {
        let mut records = self.records.write().await;
        let (outcomes, apply) = self.plan(&records, ids, mode);
        if apply {
            let succeeded: HashSet<&str> =
                outcomes.iter().filter(|o| o.ok).map(|o| o.id.as_str()).collect();
            for record in records.iter_mut() {
                if succeeded.contains(record.id()) {
                    record.set_status(status);
                }
            }
        }
        Ok(ApiResponse::success(BulkReport::new(outcomes), ""))
    }

    async fn delete(
        &self,
        ids: &[String],
        mode: BulkMode,
    ) -> Result<ApiResponse<BulkReport>, AdminError> {
        let mut records = self.records.write().await;
        let (outcomes, apply) = self.plan(&records, ids, mode);
        if apply {
            let succeeded: HashSet<&str> =
                outcomes.iter().filter(|o| o.ok).map(|o| o.id.as_str()).collect();
            records.retain(|r| !succeeded.contains(r.id()));
        }
        Ok(ApiResponse::success(BulkReport::new(outcomes), ""))
    }
}
