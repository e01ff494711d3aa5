use std::{iter::Sum, ops::Add};

use crate::Transform;

/// A deferred sum of all items, starting from the items' zero. Created with [`esum`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredSum;

impl DeferredSum {
    /// Start the sum from `start` instead of zero
    ///
    /// # Example
    /// ```rust
    /// use epipes::{esum, Transform};
    ///
    /// let add = esum().start(13);
    ///
    /// assert_eq!(add.apply(vec![1, 2, 3, 4]), 23);
    /// ```
    pub fn start<A>(self, start: A) -> DeferredSumFrom<A> {
        DeferredSumFrom { start }
    }
}

impl<I> Transform<I> for DeferredSum
where
    I: IntoIterator,
    I::Item: Sum,
{
    type Output = I::Item;

    fn apply(&self, input: I) -> Self::Output {
        log::trace!("applying deferred sum");
        sum(input)
    }
}

/// A deferred sum with an explicit start value
#[derive(Debug, Clone, Copy)]
pub struct DeferredSumFrom<A> {
    pub(crate) start: A,
}

impl<A> DeferredSumFrom<A> {
    /// Replace the start value
    pub fn start<B>(self, start: B) -> DeferredSumFrom<B> {
        DeferredSumFrom { start }
    }
}

impl<I, A> Transform<I> for DeferredSumFrom<A>
where
    I: IntoIterator,
    A: Add<I::Item, Output = A> + Clone,
{
    type Output = A;

    fn apply(&self, input: I) -> A {
        log::trace!("applying deferred sum with start value");
        sum_from(input, self.start.clone())
    }
}

/// Sum the items of `sequence`. An empty sequence sums to zero.
///
/// # Example
/// ```rust
/// assert_eq!(epipes::sum(vec![1, 2, 3, 4]), 10);
/// assert_eq!(epipes::sum(Vec::<i32>::new()), 0);
/// ```
pub fn sum<I>(sequence: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Sum,
{
    sequence.into_iter().sum()
}

/// Sum the items of `sequence` onto `start`.
///
/// # Example
/// ```rust
/// assert_eq!(epipes::sum_from(vec![1, 2, 3, 4], 13), 23);
/// assert_eq!(epipes::sum_from(&[1.5, 2.5][..], 1.0), 5.0);
/// ```
pub fn sum_from<I, A>(sequence: I, start: A) -> A
where
    I: IntoIterator,
    A: Add<I::Item, Output = A>,
{
    sequence.into_iter().fold(start, |total, item| total + item)
}

/// A reusable sum. Extend it with [`DeferredSum::start`].
///
/// # Example
/// ```rust
/// use epipes::esum;
///
/// assert_eq!(vec![1, 2, 3, 4] | esum(), 10);
/// assert_eq!(vec![1, 2, 3, 4] | esum().start(13), 23);
/// ```
pub fn esum() -> DeferredSum {
    DeferredSum
}
