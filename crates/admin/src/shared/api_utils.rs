//! Ports to the admin backend and request-scope bookkeeping
//!
//! The backend itself lives elsewhere; the list core talks to it only through
//! [`RecordSource`] and [`BulkMutation`], both answering with the
//! `{isSuccess, message, data}` envelope.

use async_trait::async_trait;
use contracts::shared::api_response::ApiResponse;
use contracts::shared::bulk::{BulkMode, BulkReport};
use contracts::shared::record::{Record, Statused};
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::{AbortHandle, JoinHandle};

use super::error::AdminError;
use super::list::view::ListView;

/// Source of the full record set for one list
#[async_trait]
pub trait RecordSource<R: Record>: Send + Sync {
    /// `Err` is a transport failure; a backend-side failure comes back as
    /// an envelope with `is_success == false`
    async fn list(&self) -> Result<ApiResponse<Vec<R>>, AdminError>;
}

/// Bulk mutations on a list's records
#[async_trait]
pub trait BulkMutation<R: Statused>: Send + Sync {
    async fn update_status(
        &self,
        ids: &[String],
        status: R::Status,
        mode: BulkMode,
    ) -> Result<ApiResponse<BulkReport>, AdminError>;

    async fn delete(
        &self,
        ids: &[String],
        mode: BulkMode,
    ) -> Result<ApiResponse<BulkReport>, AdminError>;
}

/// Fetch and unwrap the envelope
///
/// # Example
/// ```rust,ignore
/// let bookings = fetch_records(&backend).await?;
/// ```
pub async fn fetch_records<R, S>(source: &S) -> Result<Vec<R>, AdminError>
where
    R: Record,
    S: RecordSource<R> + ?Sized,
{
    source
        .list()
        .await?
        .into_result()
        .map_err(AdminError::FetchFailure)
}

/// Issued by [`ViewScope::begin`]; identifies one request of one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

#[derive(Debug, Default)]
struct ScopeInner {
    generation: AtomicU64,
    unmounted: AtomicBool,
    /// Generation changes and guarded applies happen under this lock
    in_flight: Mutex<Option<AbortHandle>>,
}

/// Lifetime of a mounted view.
///
/// Only the latest request may touch the view (last request wins), and
/// nothing may touch it after `unmount`.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    inner: Arc<ScopeInner>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, invalidating all earlier tickets.
    /// Waits for an apply of an older ticket that is already running.
    pub fn begin(&self) -> RequestTicket {
        let _slot = self.lock_slot();
        self.next_ticket()
    }

    fn next_ticket(&self) -> RequestTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation }
    }

    pub fn is_mounted(&self) -> bool {
        !self.inner.unmounted.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.is_mounted() && self.inner.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Passes `value` through if the ticket is still current
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Result<T, AdminError> {
        if self.is_current(ticket) {
            Ok(value)
        } else {
            tracing::debug!(
                "Dropping stale response (generation {}, mounted: {})",
                ticket.generation,
                self.is_mounted()
            );
            Err(AdminError::Unmounted)
        }
    }

    /// Runs `apply` only if the ticket is still current. The check and the
    /// apply are atomic with respect to `begin` and `unmount`, so `apply`
    /// must not start requests on the same scope.
    pub fn apply_if_current<T, U>(
        &self,
        ticket: RequestTicket,
        value: T,
        apply: impl FnOnce(T) -> U,
    ) -> Result<U, AdminError> {
        let _slot = self.lock_slot();
        self.accept(ticket, value).map(apply)
    }

    pub fn unmount(&self) {
        let mut slot = self.lock_slot();
        self.inner.unmounted.store(true, Ordering::SeqCst);
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        tracing::debug!("View unmounted");
    }

    /// Runs `request` on the tokio runtime and hands its output to `apply`
    /// only if no newer request started and the view is still mounted.
    /// The previous in-flight task of this scope is aborted.
    pub fn spawn_guarded<T, Fut, A>(&self, request: Fut, apply: A) -> JoinHandle<()>
    where
        T: Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        A: FnOnce(T) + Send + 'static,
    {
        let mut slot = self.lock_slot();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        let ticket = self.next_ticket();
        let scope = self.clone();
        let handle = tokio::spawn(async move {
            let value = request.await;
            let _ = scope.apply_if_current(ticket, value, apply);
        });
        *slot = Some(handle.abort_handle());
        handle
    }

    /// A panic inside `apply` poisons the lock; the slot is still usable
    fn lock_slot(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.inner.in_flight.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("View scope lock was poisoned by a panicking apply, recovering");
            self.inner.in_flight.clear_poison();
            poisoned.into_inner()
        })
    }
}

/// Loads a list in place. A response that arrives after the scope moved on
/// is dropped and the view is left as is.
pub async fn load_view<R, S>(
    view: &mut ListView<R>,
    source: &S,
    scope: &ViewScope,
) -> Result<(), AdminError>
where
    R: Record,
    S: RecordSource<R> + ?Sized,
{
    let ticket = scope.begin();
    view.begin_loading();
    let result = source.list().await;
    scope.apply_if_current(ticket, result, |result| view.apply_load(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let scope = ViewScope::new();
        let first = scope.begin();
        let second = scope.begin();
        assert!(!scope.is_current(first));
        assert_eq!(scope.accept(first, 1), Err(AdminError::Unmounted));
        assert_eq!(scope.accept(second, 2), Ok(2));
    }

    #[test]
    fn test_unmount_invalidates_everything() {
        let scope = ViewScope::new();
        let ticket = scope.begin();
        scope.unmount();
        assert!(!scope.is_mounted());
        assert!(scope.accept(ticket, ()).is_err());
    }

    #[tokio::test]
    async fn test_spawn_guarded_last_request_wins() {
        let scope = ViewScope::new();
        let applied = Arc::new(Mutex::new(Vec::new()));

        let (slow_tx, slow_rx) = oneshot::channel::<&'static str>();
        let sink = applied.clone();
        let slow = scope.spawn_guarded(async move { slow_rx.await.unwrap_or("closed") }, move |v| {
            sink.lock().unwrap().push(v)
        });

        let sink = applied.clone();
        let fast = scope.spawn_guarded(async { "fast" }, move |v| sink.lock().unwrap().push(v));
        fast.await.unwrap();

        // the first task was aborted; sending fails or is ignored
        let _ = slow_tx.send("slow");
        assert!(slow.await.unwrap_err().is_cancelled());
        assert_eq!(*applied.lock().unwrap(), vec!["fast"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_begin_waits_for_running_apply() {
        let scope = ViewScope::new();
        let (entered_tx, entered_rx) = std::sync::mpsc::channel();
        let done = Arc::new(AtomicBool::new(false));
        let flag = done.clone();
        let handle = scope.spawn_guarded(async { 1 }, move |_| {
            entered_tx.send(()).unwrap();
            std::thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
        });

        let waiter = scope.clone();
        let applied_before_begin = tokio::task::spawn_blocking(move || {
            entered_rx.recv().unwrap();
            let ticket = waiter.begin();
            (done.load(Ordering::SeqCst), ticket)
        })
        .await
        .unwrap();

        assert!(applied_before_begin.0);
        assert!(scope.is_current(applied_before_begin.1));
        handle.await.unwrap();
    }

    #[test]
    fn test_stale_ticket_is_not_applied() {
        let scope = ViewScope::new();
        let old = scope.begin();
        let _new = scope.begin();
        let mut applied = false;
        let result = scope.apply_if_current(old, 5, |_| applied = true);
        assert_eq!(result, Err(AdminError::Unmounted));
        assert!(!applied);
    }

    #[tokio::test]
    async fn test_poisoned_scope_still_aborts_superseded_task() {
        let scope = ViewScope::new();
        let failed = scope.spawn_guarded(async {}, |_| panic!("apply failed"));
        assert!(failed.await.unwrap_err().is_panic());
        assert!(scope.inner.in_flight.is_poisoned());

        let slow = scope.spawn_guarded(std::future::pending::<()>(), |_| {});
        let fast = scope.spawn_guarded(async {}, |_| {});
        fast.await.unwrap();
        assert!(slow.await.unwrap_err().is_cancelled());
        assert!(!scope.inner.in_flight.is_poisoned());
    }

    #[tokio::test]
    async fn test_spawn_guarded_after_unmount_is_dropped() {
        let scope = ViewScope::new();
        let applied = Arc::new(Mutex::new(false));
        let flag = applied.clone();
        let handle = scope.spawn_guarded(
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
            },
            move |_| *flag.lock().unwrap() = true,
        );
        scope.unmount();
        let _ = handle.await;
        assert!(!*applied.lock().unwrap());
    }
}
