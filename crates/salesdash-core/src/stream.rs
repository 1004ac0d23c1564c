// ── Reactive resource streams ──
//
// Subscription types for consuming state changes from a ResourceStore.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::ResourceState;

/// A subscription to one store's state.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed) or by converting to a `Stream`.
pub struct ResourceStream<T: Clone + Send + Sync + 'static> {
    current: ResourceState<T>,
    receiver: watch::Receiver<ResourceState<T>>,
}

impl<T: Clone + Send + Sync + 'static> ResourceStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<ResourceState<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation time or by the last `changed()`.
    pub fn current(&self) -> &ResourceState<T> {
        &self.current
    }

    /// The latest state (may have moved on since `current`).
    pub fn latest(&self) -> ResourceState<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next transition, returning the new state.
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<ResourceState<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> ResourceWatchStream<T> {
        ResourceWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields the current state first, then one item per transition that
/// was observed (intermediate states may be coalesced).
pub struct ResourceWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<ResourceState<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for ResourceWatchStream<T> {
    type Item = ResourceState<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
