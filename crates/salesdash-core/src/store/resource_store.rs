// ── Generic resource store ──
//
// Async load state machine for one domain. State transitions run inside
// the watch channel's lock, so a settlement can check its generation and
// apply its result atomically with respect to `load`, `reset` and
// `shutdown`.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::state::{ResourceState, ViewStatus};
use crate::adapter::HttpAdapter;
use crate::error::CoreError;
use crate::port::ResourcePort;
use crate::resource::Resource;
use crate::stream::ResourceStream;
use crate::usecase::UseCase;

/// Holds the loading/error/data state of one resource domain.
///
/// Every `load()` bumps a generation counter; only the settlement of the
/// most recently started load is applied. `reset()` and `shutdown()`
/// also bump it, so anything in flight at that point is discarded.
pub struct ResourceStore<R: Resource, P: ResourcePort<R> = HttpAdapter> {
    use_case: UseCase<R, P>,
    state: watch::Sender<ResourceState<R::Data>>,
    generation: AtomicU64,
    cancel: CancellationToken,
}

impl<R: Resource, P: ResourcePort<R>> ResourceStore<R, P> {
    pub fn new(use_case: UseCase<R, P>) -> Self {
        let (state, _) = watch::channel(ResourceState::default());
        Self {
            use_case,
            state,
            generation: AtomicU64::new(0),
            cancel: CancellationToken::new(),
        }
    }

    pub fn use_case(&self) -> &UseCase<R, P> {
        &self.use_case
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> ResourceState<R::Data> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> ResourceStream<R::Data> {
        ResourceStream::new(self.state.subscribe())
    }

    pub fn data(&self) -> R::Data {
        self.state.borrow().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn has_data(&self) -> bool {
        self.state.borrow().has_data()
    }

    pub fn has_error(&self) -> bool {
        self.state.borrow().has_error()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    pub fn status(&self) -> ViewStatus {
        self.state.borrow().status()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Start a load and return the future that settles it.
    ///
    /// `loading` is set and `error` cleared before this returns, and the
    /// port is already invoked; the returned future only awaits the result.
    /// Never fails: errors land in the `error` field.
    ///
    /// Dropping the future before it completes abandons the result, and
    /// `loading` then stays `true` until the next `load`, `reset` or
    /// `shutdown`. Use [`spawn_load`](Self::spawn_load) when the caller
    /// may go away.
    pub fn load(&self) -> impl Future<Output = ()> + Send + '_ {
        let started = self
            .begin_load()
            .map(|generation| (generation, self.use_case.execute()));
        async move {
            if let Some((generation, fetch)) = started {
                self.finish(generation, fetch).await;
            }
        }
    }

    /// Like [`load`](Self::load), but settles on a spawned task.
    ///
    /// The state transition to `loading` still happens before this returns.
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<()> {
        let generation = self.begin_load();
        let store = Arc::clone(self);
        tokio::spawn(async move {
            if let Some(generation) = generation {
                store.finish(generation, store.use_case.execute()).await;
            }
        })
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    /// Back to the initial state. Any in-flight load is invalidated.
    pub fn reset(&self) {
        self.state.send_modify(|s| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *s = ResourceState::default();
        });
    }

    /// Cancel in-flight loads and stop accepting new ones.
    ///
    /// Data already loaded stays readable.
    pub fn shutdown(&self) {
        self.cancel.cancel();
        self.state.send_modify(|s| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            s.loading = false;
        });
        debug!(resource = R::NAME, "store shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn begin_load(&self) -> Option<u64> {
        if self.cancel.is_cancelled() {
            debug!(resource = R::NAME, "load ignored after shutdown");
            return None;
        }
        let mut generation = 0;
        self.state.send_modify(|s| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            s.loading = true;
            s.error = None;
        });
        debug!(resource = R::NAME, generation, "load started");
        Some(generation)
    }

    async fn finish<F>(&self, generation: u64, fetch: F)
    where
        F: Future<Output = Result<R::Payload, CoreError>> + Send,
    {
        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                debug!(resource = R::NAME, generation, "load cancelled");
                return;
            }
            result = fetch => result,
        };
        self.settle(generation, result);
    }

    fn settle(&self, generation: u64, result: Result<R::Payload, CoreError>) {
        let mut failure = None;
        let applied = self.state.send_if_modified(|s| {
            if self.cancel.is_cancelled() || self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match result {
                Ok(payload) => {
                    s.data = R::transform(payload);
                    s.loaded_at = Some(Utc::now());
                }
                Err(err) => {
                    let message = err.message().unwrap_or_else(|| R::DEFAULT_ERROR.to_owned());
                    failure = Some(message.clone());
                    s.error = Some(message);
                }
            }
            s.loading = false;
            true
        });

        match (applied, failure) {
            (false, _) => debug!(resource = R::NAME, generation, "stale load result discarded"),
            (true, Some(error)) => warn!(resource = R::NAME, generation, %error, "load failed"),
            (true, None) => debug!(resource = R::NAME, generation, "load succeeded"),
        }
    }
}
