use std::fmt;

use crate::{Error, Result, Transform};

/// A reduction with its combining function bound and no initial value. Created with [`ereduce`].
///
/// Use [`DeferredReduce::initial`] to seed the reduction, which also makes it infallible.
#[derive(Clone)]
pub struct DeferredReduce<F> {
    pub(crate) reduce_fn: F,
}

impl<F> DeferredReduce<F> {
    /// Seed the reduction with `initial`. The combining function is kept.
    pub fn initial<A>(self, initial: A) -> DeferredFold<F, A> {
        DeferredFold {
            reduce_fn: self.reduce_fn,
            initial,
        }
    }
}

impl<F> fmt::Debug for DeferredReduce<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredReduce").finish_non_exhaustive()
    }
}

impl<I, F> Transform<I> for DeferredReduce<F>
where
    I: IntoIterator,
    F: Fn(I::Item, I::Item) -> I::Item,
{
    type Output = Result<I::Item>;

    fn apply(&self, input: I) -> Self::Output {
        log::trace!("applying deferred reduce");
        reduce(&self.reduce_fn, input)
    }
}

/// A reduction with both its combining function and initial value bound.
#[derive(Clone)]
pub struct DeferredFold<F, A> {
    pub(crate) reduce_fn: F,
    pub(crate) initial: A,
}

impl<F, A> DeferredFold<F, A> {
    /// Replace the initial value, keeping the combining function
    pub fn initial<B>(self, initial: B) -> DeferredFold<F, B> {
        DeferredFold {
            reduce_fn: self.reduce_fn,
            initial,
        }
    }
}

impl<F, A: fmt::Debug> fmt::Debug for DeferredFold<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredFold")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl<I, F, A> Transform<I> for DeferredFold<F, A>
where
    I: IntoIterator,
    F: Fn(A, I::Item) -> A,
    A: Clone,
{
    type Output = A;

    fn apply(&self, input: I) -> A {
        log::trace!("applying deferred reduce with initial value");
        fold(&self.reduce_fn, input, self.initial.clone())
    }
}

/// Combine the items of `sequence` left to right with `reduce_fn`.
///
/// Fails with [`Error::EmptyReduction`] when the sequence is empty.
///
/// # Example
/// ```rust
/// assert_eq!(epipes::reduce(|a: i32, b: i32| a + b, vec![1, 2, 3, 4]), Ok(10));
/// assert!(epipes::reduce(|a: i32, b: i32| a + b, Vec::<i32>::new()).is_err());
/// ```
pub fn reduce<I, F>(reduce_fn: F, sequence: I) -> Result<I::Item>
where
    I: IntoIterator,
    F: Fn(I::Item, I::Item) -> I::Item,
{
    let mut items = sequence.into_iter();
    let first = items.next().ok_or(Error::EmptyReduction)?;

    Ok(items.fold(first, reduce_fn))
}

/// Combine the items of `sequence` left to right with `reduce_fn`, starting from `initial`.
///
/// # Example
/// ```rust
/// assert_eq!(epipes::fold(|a: i32, b: i32| a + b, vec![1, 2, 3, 4], 13), 23);
/// assert_eq!(epipes::fold(|a: i32, b: i32| a + b, Vec::<i32>::new(), 13), 13);
/// ```
pub fn fold<I, F, A>(reduce_fn: F, sequence: I, initial: A) -> A
where
    I: IntoIterator,
    F: Fn(A, I::Item) -> A,
{
    sequence.into_iter().fold(initial, reduce_fn)
}

/// Bind `reduce_fn` into a reusable reduction.
///
/// # Example
/// ```rust
/// use epipes::{ereduce, Transform};
///
/// let accumulate = ereduce(|a: i32, b: i32| a + b).initial(13);
///
/// assert_eq!(accumulate.apply(vec![1, 2, 3, 4]), 23);
/// assert_eq!(vec![1, 2, 3, 4] | accumulate, 23);
/// ```
pub fn ereduce<F>(reduce_fn: F) -> DeferredReduce<F> {
    DeferredReduce { reduce_fn }
}
