use std::{
    collections::{vec_deque, VecDeque},
    iter::Rev,
    ops::{Range, RangeInclusive},
};

use crate::{
    piped::{PipedIter, PipedVec},
    Error, Filtered, Mapped, Result, Transform,
};

/// A sequence that may be walked from back to front.
///
/// Random access containers and ranges succeed. Single-pass sequences, such as the lazy results
/// of [`map`](crate::map) or [`filter`](crate::filter), fail with [`Error::NotReversible`].
/// Types that do not implement this trait at all are rejected at compile time:
///
/// ```compile_fail
/// use epipes::{ereversed, Pipe};
///
/// let _ = "abc".chars().pipe(ereversed());
/// ```
pub trait Reversible {
    /// The backwards iterator produced on success
    type Reversed: Iterator;

    fn try_reversed(self) -> Result<Self::Reversed>;
}

impl<T> Reversible for Vec<T> {
    type Reversed = Rev<std::vec::IntoIter<T>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.into_iter().rev())
    }
}

impl<T> Reversible for VecDeque<T> {
    type Reversed = Rev<vec_deque::IntoIter<T>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.into_iter().rev())
    }
}

impl<T, const N: usize> Reversible for [T; N] {
    type Reversed = Rev<std::array::IntoIter<T, N>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.into_iter().rev())
    }
}

impl<'a, T> Reversible for &'a [T] {
    type Reversed = Rev<std::slice::Iter<'a, T>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.iter().rev())
    }
}

impl<'a, T> Reversible for &'a Vec<T> {
    type Reversed = Rev<std::slice::Iter<'a, T>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.iter().rev())
    }
}

impl<Idx> Reversible for Range<Idx>
where
    Range<Idx>: DoubleEndedIterator,
{
    type Reversed = Rev<Range<Idx>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.rev())
    }
}

impl<Idx> Reversible for RangeInclusive<Idx>
where
    RangeInclusive<Idx>: DoubleEndedIterator,
{
    type Reversed = Rev<RangeInclusive<Idx>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        Ok(self.rev())
    }
}

impl<T> Reversible for PipedVec<T> {
    type Reversed = Rev<std::vec::IntoIter<T>>;

    fn try_reversed(self) -> Result<Self::Reversed> {
        self.into_inner().try_reversed()
    }
}

// single-pass sequences: never reversible
macro_rules! not_reversible {
    ($kind:literal, <$($g:ident),*> $seq:ty) => {
        impl<$($g),*> Reversible for $seq
        where
            $seq: Iterator,
        {
            type Reversed = Self;

            fn try_reversed(self) -> Result<Self::Reversed> {
                Err(Error::not_reversible($kind))
            }
        }
    };
}

not_reversible!("map", <I, F> Mapped<I, F>);
not_reversible!("filter", <I, P> Filtered<I, P>);
not_reversible!("reversed", <I> Reversed<I>);
not_reversible!("iterator", <I> PipedIter<I>);

/// Lazy result of a reverse operation
#[derive(Debug, Clone)]
pub struct Reversed<I>(pub(crate) I);

impl<I: Iterator> Iterator for Reversed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// A deferred reverse operation. Created with [`ereversed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredReversed;

impl<S: Reversible> Transform<S> for DeferredReversed {
    type Output = Result<Reversed<S::Reversed>>;

    fn apply(&self, input: S) -> Self::Output {
        log::trace!("applying deferred reverse");
        reversed(input)
    }
}

/// Walk `sequence` from back to front, lazily.
///
/// # Example
/// ```rust
/// let mut backwards = epipes::reversed(vec![1, 2, 3])?;
///
/// assert_eq!(backwards.next(), Some(3));
/// assert_eq!(backwards.next(), Some(2));
/// assert_eq!(backwards.next(), Some(1));
/// assert_eq!(backwards.next(), None);
/// # Ok::<(), epipes::Error>(())
/// ```
pub fn reversed<S: Reversible>(sequence: S) -> Result<Reversed<S::Reversed>> {
    Ok(Reversed(sequence.try_reversed()?))
}

/// A reusable reverse operation.
///
/// # Example
/// ```rust
/// use epipes::{emap, ereversed, Error};
///
/// let backwards: Vec<_> = (vec![1, 2, 3] | ereversed())?.collect();
/// assert_eq!(backwards, vec![3, 2, 1]);
///
/// let squares = vec![1, 2, 3] | emap(|x: i32| x * x);
/// assert_eq!((squares | ereversed()).unwrap_err(), Error::NotReversible { kind: "map" });
/// # Ok::<(), epipes::Error>(())
/// ```
pub fn ereversed() -> DeferredReversed {
    DeferredReversed
}
