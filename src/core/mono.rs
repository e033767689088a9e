use crate::core::flux::Flux;
use futures::future::{self, BoxFuture, FutureExt};
use futures::StreamExt;
use std::future::{Future, IntoFuture};

/// Asynchronous holder for at most one value.
///
/// Resolving a `Mono` either blocks the calling thread ([`Mono::block`]) or
/// awaits it (`mono.await`). An empty or filtered-out `Mono` resolves to
/// `None`; use [`RequireValue`](crate::utils::error::RequireValue) to turn that
/// into an error when the caller insists on a value.
pub struct Mono<T> {
    inner: BoxFuture<'static, Option<T>>,
}

impl<T: Send + 'static> Mono<T> {
    pub fn just(value: T) -> Self {
        Self::from_future(future::ready(Some(value)))
    }

    pub fn empty() -> Self {
        Self::from_future(future::ready(None))
    }

    pub fn just_or_empty(value: Option<T>) -> Self {
        Self::from_future(future::ready(value))
    }

    pub(crate) fn from_future<F>(fut: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Self { inner: fut.boxed() }
    }

    pub fn map<U, F>(self, f: F) -> Mono<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let inner = self.inner;
        Mono::from_future(async move { inner.await.map(f) })
    }

    pub fn filter<P>(self, predicate: P) -> Mono<T>
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        let inner = self.inner;
        Mono::from_future(async move { inner.await.filter(predicate) })
    }

    /// Drives the value to completion on the calling thread.
    ///
    /// Must not be used on a `Mono` that waits on Tokio timers from inside a
    /// current-thread runtime; `.await` it there instead.
    pub fn block(self) -> Option<T> {
        tracing::trace!("Blocking on single-value container");
        futures::executor::block_on(self.inner)
    }

    pub fn into_flux(self) -> Flux<T> {
        Flux::from_stream(self.inner.into_stream().filter_map(future::ready))
    }
}

impl<T: Send + 'static> IntoFuture for Mono<T> {
    type Output = Option<T>;
    type IntoFuture = BoxFuture<'static, Option<T>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Person, PersonCommand, SayMyName};

    #[test]
    fn test_block_resolves_value() {
        let harry = Person::new("Harry", "Kane");
        let person = Mono::just(harry.clone()).block();
        assert_eq!(person, Some(harry));
    }

    #[test]
    fn test_map_recasts_type() {
        let command = Mono::just(Person::new("Harry", "Kane"))
            .map(PersonCommand::from)
            .block()
            .unwrap();
        assert_eq!(command.say_my_name(), "My name is Harry Kane");
    }

    #[test]
    fn test_filter_miss_is_empty() {
        let person = Mono::just(Person::new("Harry", "Kane"))
            .filter(|p| p.first_name() == "foo")
            .block();
        assert!(person.is_none());
    }

    #[test]
    fn test_filter_hit_keeps_value() {
        let person = Mono::just(Person::new("Harry", "Kane"))
            .filter(|p| p.last_name() == "Kane")
            .block();
        assert!(person.is_some());
    }

    #[test]
    fn test_empty_and_just_or_empty() {
        assert!(Mono::<u8>::empty().block().is_none());
        assert_eq!(Mono::just_or_empty(Some(3)).block(), Some(3));
        assert_eq!(Mono::<u8>::just_or_empty(None).map(|v| v * 2).block(), None);
    }

    #[tokio::test]
    async fn test_await_and_into_flux() {
        assert_eq!(Mono::just(7).await, Some(7));

        let items = Mono::just(1).into_flux().collect_list().await.unwrap();
        assert_eq!(items, vec![1]);

        let none = Mono::<i32>::empty().into_flux().collect_list().await.unwrap();
        assert!(none.is_empty());
    }
}
