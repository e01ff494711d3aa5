//! Deferred map and filter over asynchronous sequences.
//!
//! [`PipedStream`] marks a [`Stream`] as a pipe source. The same deferred values that work on
//! iterators apply to it, lazily: nothing is polled until the resulting stream is.
//!
//! ```rust
//! use epipes::{efilter, emap, PipedStream};
//! use futures::StreamExt;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let odd_squares = PipedStream::new(futures::stream::iter(vec![1, 2, 3, 4]))
//!     | emap(|x: i32| x * x)
//!     | efilter(|x: &i32| x % 2 == 1);
//!
//! assert_eq!(odd_squares.collect::<Vec<_>>().await, vec![1, 9]);
//! # });
//! ```

use std::{
    ops::BitOr,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    future,
    stream::{self, BoxStream},
    Stream, StreamExt,
};
use pin_project_lite::pin_project;

use crate::{pipe::pipe_into, DeferredFilter, DeferredMap, Transform};

pin_project! {
    /// A stream that deferred transforms can be piped into
    #[derive(Debug, Clone)]
    pub struct PipedStream<S> {
        #[pin]
        inner: S,
    }
}

impl<S: Stream> PipedStream<S> {
    pub fn new(stream: S) -> Self {
        Self { inner: stream }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stream> Stream for PipedStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        self.project().inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S, R> BitOr<R> for PipedStream<S>
where
    R: Transform<PipedStream<S>>,
{
    type Output = R::Output;

    fn bitor(self, transform: R) -> R::Output {
        pipe_into(self, transform)
    }
}

impl<S, F, Out> Transform<PipedStream<S>> for DeferredMap<F>
where
    S: Stream,
    F: Fn(S::Item) -> Out + Clone,
{
    type Output = PipedStream<stream::Map<S, F>>;

    fn apply(&self, input: PipedStream<S>) -> Self::Output {
        log::trace!("applying deferred map to stream");
        PipedStream::new(input.inner.map(self.map_fn.clone()))
    }
}

/// The predicate is synchronous, so it is lifted into a ready future for `StreamExt::filter`.
/// That closure has no name, hence the box.
impl<S, P> Transform<PipedStream<S>> for DeferredFilter<P>
where
    S: Stream + Send + 'static,
    S::Item: Send,
    P: Fn(&S::Item) -> bool + Clone + Send + 'static,
{
    type Output = PipedStream<BoxStream<'static, S::Item>>;

    fn apply(&self, input: PipedStream<S>) -> Self::Output {
        log::trace!("applying deferred filter to stream");
        let predicate = self.predicate.clone();

        PipedStream::new(
            input
                .inner
                .filter(move |item: &S::Item| future::ready(predicate(item)))
                .boxed(),
        )
    }
}
