use std::fmt;

use crate::Transform;

/// Lazy result of a map operation. Items are produced on demand, one pass only.
///
/// A crate type rather than `std::iter::Map`, so that `|` and [`Reversible`](crate::Reversible)
/// can be implemented for it.
#[derive(Clone)]
pub struct Mapped<I, F> {
    pub(crate) inner: I,
    pub(crate) map_fn: F,
}

impl<I, F, Out> Iterator for Mapped<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Out,
{
    type Item = Out;

    fn next(&mut self) -> Option<Out> {
        self.inner.next().map(&mut self.map_fn)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Mapped<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// A map operation with its function bound, waiting for a sequence.
///
/// Created with [`emap`]. Applying it is equivalent to calling [`map`] with the bound function.
#[derive(Clone)]
pub struct DeferredMap<F> {
    pub(crate) map_fn: F,
}

impl<F> fmt::Debug for DeferredMap<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredMap").finish_non_exhaustive()
    }
}

impl<I, F, Out> Transform<I> for DeferredMap<F>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Out + Clone,
{
    type Output = Mapped<I::IntoIter, F>;

    fn apply(&self, input: I) -> Self::Output {
        log::trace!("applying deferred map");
        map(self.map_fn.clone(), input)
    }
}

/// Apply `map_fn` to every item of `sequence`, lazily.
///
/// An empty sequence is a sequence like any other and yields an empty result.
///
/// # Example
/// ```rust
/// let squares = epipes::map(|x: i32| x * x, vec![1, 2, 3]);
///
/// assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9]);
/// ```
pub fn map<I, F, Out>(map_fn: F, sequence: I) -> Mapped<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Out,
{
    Mapped {
        inner: sequence.into_iter(),
        map_fn,
    }
}

/// Bind `map_fn` into a reusable map operation that can be applied or piped later.
///
/// # Example
/// ```rust
/// use epipes::{emap, Pipe, Transform};
///
/// let square = emap(|x: i32| x * x);
///
/// assert_eq!(square.apply(vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!(vec![1, 2, 3].pipe(&square).collect::<Vec<_>>(), vec![1, 4, 9]);
/// assert_eq!((vec![1, 2, 3] | square).collect::<Vec<_>>(), vec![1, 4, 9]);
/// ```
pub fn emap<F>(map_fn: F) -> DeferredMap<F> {
    DeferredMap { map_fn }
}

#[cfg(test)]
mod tests {
    use crate::{
        test_utils::{square, CallCounter},
        Pipe, Transform,
    };

    use super::*;

    #[test]
    fn map_works() {
        let mut squares = map(square, vec![1, 2, 3]);

        assert_eq!(squares.next(), Some(1));
        assert_eq!(squares.next(), Some(4));
        assert_eq!(squares.next(), Some(9));
        assert_eq!(squares.next(), None);
    }

    #[test]
    fn deferred_map_is_reusable() {
        let square = emap(square);

        assert_eq!(square.apply(vec![1, 2]).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(square.apply(vec![3]).collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn pipe_call_and_immediate_agree() {
        let numbers = vec![1, 2, 3];
        let square_all = emap(square);

        let called: Vec<_> = square_all.apply(numbers.clone()).collect();
        let piped: Vec<_> = (numbers.clone() | &square_all).collect();
        let method: Vec<_> = numbers.clone().pipe(&square_all).collect();
        let immediate: Vec<_> = map(square, numbers).collect();

        assert_eq!(called, vec![1, 4, 9]);
        assert_eq!(piped, called);
        assert_eq!(method, called);
        assert_eq!(immediate, called);
    }

    #[test]
    fn empty_sequence_applies_immediately() {
        let mut squares = map(square, Vec::<i32>::new());

        assert_eq!(squares.next(), None);
    }

    #[test]
    fn map_is_lazy() {
        let counter = CallCounter::new();
        let mut squares = vec![1, 2, 3] | emap(counter.track(square));

        assert_eq!(counter.count(), 0);
        assert_eq!(squares.next(), Some(1));
        assert_eq!(counter.count(), 1);

        squares.for_each(drop);
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn map_over_borrowed_slice() {
        let words = ["a", "bb", "ccc"];
        let lengths: Vec<_> = (&words[..] | emap(|w: &&str| w.len())).collect();

        assert_eq!(lengths, vec![1, 2, 3]);
        assert_eq!(words.len(), 3);
    }
}
