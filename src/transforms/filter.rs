use std::fmt;

use crate::Transform;

/// Lazy result of a filter operation. Only items accepted by the predicate are yielded.
///
/// A crate type rather than `std::iter::Filter`, so that `|` and [`Reversible`](crate::Reversible)
/// can be implemented for it.
#[derive(Clone)]
pub struct Filtered<I, P> {
    pub(crate) inner: I,
    pub(crate) predicate: P,
}

impl<I, P> Iterator for Filtered<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|item| predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filtered<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// A filter operation with its predicate bound, waiting for a sequence. Created with [`efilter`].
#[derive(Clone)]
pub struct DeferredFilter<P> {
    pub(crate) predicate: P,
}

impl<P> fmt::Debug for DeferredFilter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredFilter").finish_non_exhaustive()
    }
}

impl<I, P> Transform<I> for DeferredFilter<P>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool + Clone,
{
    type Output = Filtered<I::IntoIter, P>;

    fn apply(&self, input: I) -> Self::Output {
        log::trace!("applying deferred filter");
        filter(self.predicate.clone(), input)
    }
}

/// Keep the items of `sequence` accepted by `predicate`, lazily.
///
/// # Example
/// ```rust
/// let odds = epipes::filter(|x: &i32| x % 2 == 1, vec![1, 2, 3, 4, 5]);
///
/// assert_eq!(odds.collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub fn filter<I, P>(predicate: P, sequence: I) -> Filtered<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filtered {
        inner: sequence.into_iter(),
        predicate,
    }
}

/// Bind `predicate` into a reusable filter operation.
///
/// # Example
/// ```rust
/// use epipes::{efilter, emap};
///
/// let odd_squares = vec![1, 2, 3] | emap(|x: i32| x * x) | efilter(|x: &i32| x % 2 == 1);
///
/// assert_eq!(odd_squares.collect::<Vec<_>>(), vec![1, 9]);
/// ```
pub fn efilter<P>(predicate: P) -> DeferredFilter<P> {
    DeferredFilter { predicate }
}
