//! Ways of waiting on a group of independent requests.
//!
//! All of these drive their futures concurrently on the calling task. Nothing
//! is spawned, so a single-threaded runtime is enough.

use std::future::Future;

use futures::future::{join_all, select_all, try_join_all};

/// Terminal state of one future in a [`settle_all`] group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> Settled<T, E> {
    pub fn status(&self) -> &'static str {
        match self {
            Settled::Fulfilled(_) => "fulfilled",
            Settled::Rejected(_) => "rejected",
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Settled::Fulfilled(_))
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Settled::Fulfilled(value) => Ok(value),
            Settled::Rejected(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Settled::Fulfilled(value),
            Err(err) => Settled::Rejected(err),
        }
    }
}

/// Waits for every future and reports each outcome in input order.
/// A failure never cuts the wait short.
pub async fn settle_all<I, F, T, E>(futures: I) -> Vec<Settled<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(futures)
        .await
        .into_iter()
        .map(Settled::from)
        .collect()
}

/// All values in input order, or the first error to arrive.
pub async fn all<I, F, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    try_join_all(futures).await
}

/// Outcome of whichever future finishes first, success or not.
/// `None` for an empty group.
pub async fn race<I, F, T, E>(futures: I) -> Option<Result<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    let pinned: Vec<_> = futures.into_iter().map(Box::pin).collect();
    if pinned.is_empty() {
        return None;
    }
    let (first, _index, _rest) = select_all(pinned).await;
    Some(first)
}
