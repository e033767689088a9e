use crate::core::mono::Mono;
use crate::utils::error::Result;
use futures::future::{self, FutureExt};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::task::Poll;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Ordered, asynchronous sequence of values emitted one at a time.
///
/// Operators consume the flux and return a new one; nothing runs until the
/// flux is subscribed to or collected.
pub struct Flux<T> {
    inner: BoxStream<'static, T>,
}

impl<T: Send + 'static> Flux<T> {
    pub fn just<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        Self::from_stream(stream::iter(items))
    }

    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    pub fn from_stream<S>(source: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self {
            inner: source.boxed(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Flux<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        Flux::from_stream(self.inner.map(f))
    }

    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        Self::from_stream(self.inner.filter(move |item| future::ready(predicate(item))))
    }

    pub fn take(self, n: usize) -> Self {
        Self::from_stream(self.inner.take(n))
    }

    /// Delays every element by `period`, keeping their relative order.
    pub fn delay_elements(self, period: Duration) -> Self {
        Self::from_stream(self.inner.then(move |item| async move {
            tokio::time::sleep(period).await;
            item
        }))
    }

    pub fn do_on_next<F>(self, f: F) -> Self
    where
        F: FnMut(&T) + Send + 'static,
    {
        Self::from_stream(self.inner.inspect(f))
    }

    /// Runs `callback` once, when the upstream is exhausted.
    pub fn do_on_complete<F>(self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let mut callback = Some(callback);
        let tail = stream::poll_fn(move |_cx| -> Poll<Option<T>> {
            if let Some(callback) = callback.take() {
                callback();
            }
            Poll::Ready(None)
        });
        Self::from_stream(self.inner.chain(tail))
    }

    /// Feeds every element to `on_next`.
    ///
    /// Elements that are already available are delivered on the calling
    /// thread before this returns; the rest are delivered from a spawned task.
    /// Requires a Tokio runtime.
    pub fn subscribe<F>(self, mut on_next: F) -> Disposable
    where
        F: FnMut(T) + Send + 'static,
    {
        let mut source = self.inner;
        let mut delivered = 0usize;

        loop {
            match source.next().now_or_never() {
                Some(Some(item)) => {
                    on_next(item);
                    delivered += 1;
                }
                Some(None) => {
                    tracing::debug!("Subscription completed synchronously after {} elements", delivered);
                    return Disposable::completed();
                }
                None => break,
            }
        }

        tracing::debug!(
            "Subscription delivered {} elements synchronously, continuing in background",
            delivered
        );
        let handle = tokio::spawn(async move {
            while let Some(item) = source.next().await {
                on_next(item);
            }
        });
        Disposable::spawned(handle)
    }

    pub fn collect_list(self) -> Mono<Vec<T>> {
        let inner = self.inner;
        Mono::from_future(async move { Some(inner.collect::<Vec<T>>().await) })
    }

    pub fn count(self) -> Mono<usize> {
        let inner = self.inner;
        Mono::from_future(inner.fold(0usize, |acc, _| future::ready(acc + 1)).map(Some))
    }

    /// First element, or empty if the flux completes without one.
    pub fn next(self) -> Mono<T> {
        let mut inner = self.inner;
        Mono::from_future(async move { inner.next().await })
    }
}

impl<T: Send + 'static> FromIterator<T> for Flux<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Flux::just(iter)
    }
}

/// Handle to a running subscription. Dropping it does not cancel delivery.
#[derive(Debug)]
pub struct Disposable {
    handle: Option<JoinHandle<()>>,
}

impl Disposable {
    fn completed() -> Self {
        Self { handle: None }
    }

    fn spawned(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_done(&self) -> bool {
        self.handle.as_ref().map_or(true, |handle| handle.is_finished())
    }

    /// Waits until every element has been delivered.
    pub async fn join(self) -> Result<()> {
        if let Some(handle) = self.handle {
            handle.await?;
        }
        Ok(())
    }
}
