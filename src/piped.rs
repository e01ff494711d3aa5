//! Sequence wrappers that carry the pipe operator themselves.
//!
//! Where a deferred transform knows how to be piped into, these wrappers know how to pipe out:
//! they accept any transform on the right of `|`, including bare `(operation, function)` pairs
//! from [`meta`](crate::meta), and wrap the result in a new wrapper of the same kind.
//!
//! ```rust
//! use epipes::{meta::{Filter, Map}, PipedIter, PipedVec};
//!
//! let eager = PipedVec::from(vec![1, 2, 3, 4, 5, 6]) | (Map, |x: i32| x * x) | (Filter, |x: &i32| x % 2 == 1);
//! assert_eq!(eager, vec![1, 9, 25]);
//!
//! let mut lazy = PipedIter::new(vec![1, 2, 3, 4, 5, 6]) | (Map, |x: i32| x * x) | (Filter, |x: &i32| x % 2 == 1);
//! assert_eq!(lazy.next(), Some(1));
//! assert_eq!(lazy.collect::<Vec<_>>(), vec![9, 25]);
//! ```
//!
//! A fallible transform hands its error back instead of an empty wrapper:
//!
//! ```rust
//! use epipes::{emap, ereversed, Error, PipedIter, PipedVec};
//!
//! let backwards = PipedVec::from(vec![1, 2, 3]) | ereversed();
//! assert_eq!(backwards, Ok(PipedVec::from(vec![3, 2, 1])));
//!
//! let lazy = PipedIter::new(vec![1, 2, 3]) | emap(|x: i32| x * x);
//! assert!(matches!(lazy | ereversed(), Err(Error::NotReversible { kind: "iterator" })));
//! ```
//!
//! Scalar results are not sequences, so reducing or summing ends a wrapper chain. Use
//! [`Pipe::pipe`](crate::Pipe::pipe) or the immediate functions for those:
//!
//! ```rust,compile_fail
//! use epipes::{ereduce, PipedVec};
//!
//! let total = PipedVec::from(vec![1, 2, 3]) | ereduce(|a: i32, b: i32| a + b);
//! ```
//!
//! ```rust,compile_fail
//! use epipes::{meta::Reduce, PipedVec};
//!
//! let total = PipedVec::<i32>::new() | (Reduce, |a: i32, b: i32| a + b);
//! ```

use std::ops::{BitOr, Deref, DerefMut};

use crate::{pipe::pipe_into, Filtered, Mapped, Result, Reversed, Transform};

/// What a transform must produce to be piped out of a wrapper.
///
/// Sequences are re-wrapped as they are. A `Result` of a sequence re-wraps the `Ok` side and
/// returns the error to the caller unchanged.
pub trait PipedOutput {
    type Sequence: IntoIterator;
    type Lifted<W>;

    fn lift<W, G>(self, wrap: G) -> Self::Lifted<W>
    where
        G: FnOnce(Self::Sequence) -> W;
}

macro_rules! piped_output {
    ($([$($gens:ident),*] $seq:ty),* $(,)?) => {
        $(
            impl<$($gens),*> PipedOutput for $seq
            where
                $seq: IntoIterator,
            {
                type Sequence = $seq;
                type Lifted<W> = W;

                fn lift<W, G>(self, wrap: G) -> Self::Lifted<W>
                where
                    G: FnOnce(Self::Sequence) -> W,
                {
                    wrap(self)
                }
            }

            impl<$($gens),*> PipedOutput for Result<$seq>
            where
                $seq: IntoIterator,
            {
                type Sequence = $seq;
                type Lifted<W> = Result<W>;

                fn lift<W, G>(self, wrap: G) -> Self::Lifted<W>
                where
                    G: FnOnce(Self::Sequence) -> W,
                {
                    self.map(wrap)
                }
            }
        )*
    };
}

piped_output!(
    [T] Vec<T>,
    [I, F] Mapped<I, F>,
    [I, P] Filtered<I, P>,
    [I] Reversed<I>,
);

type PipedItem<O> = <<O as PipedOutput>::Sequence as IntoIterator>::Item;
type PipedIntoIter<O> = <<O as PipedOutput>::Sequence as IntoIterator>::IntoIter;

/// An eager sequence: every pipe materializes its result into a new `PipedVec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PipedVec<T>(Vec<T>);

impl<T> PipedVec<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> From<Vec<T>> for PipedVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<PipedVec<T>> for Vec<T> {
    fn from(piped: PipedVec<T>) -> Self {
        piped.0
    }
}

impl<T> FromIterator<T> for PipedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for PipedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T> Deref for PipedVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> DerefMut for PipedVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for PipedVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.0 == other
    }
}

impl<T, R> BitOr<R> for PipedVec<T>
where
    R: Transform<Vec<T>>,
    R::Output: PipedOutput,
{
    type Output = <R::Output as PipedOutput>::Lifted<PipedVec<PipedItem<R::Output>>>;

    fn bitor(self, transform: R) -> Self::Output {
        pipe_into(self.0, transform).lift(|sequence| sequence.into_iter().collect::<PipedVec<_>>())
    }
}

/// A lazy, single-pass sequence: every pipe wraps the lazy result into a new `PipedIter`.
///
/// It is an iterator itself, so it can be consumed at any point of a chain. Once exhausted it
/// stays exhausted. Transforms receive the wrapper, not what it wraps, so reversing one is an
/// error even when the source could have been reversed.
#[derive(Debug, Clone)]
pub struct PipedIter<I>(I);

impl<I: Iterator> PipedIter<I> {
    /// Wrap anything iterable, iterators included
    pub fn new<S>(sequence: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self(sequence.into_iter())
    }

    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I: Iterator> Iterator for PipedIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I, R> BitOr<R> for PipedIter<I>
where
    I: Iterator,
    R: Transform<PipedIter<I>>,
    R::Output: PipedOutput,
{
    type Output = <R::Output as PipedOutput>::Lifted<PipedIter<PipedIntoIter<R::Output>>>;

    fn bitor(self, transform: R) -> Self::Output {
        pipe_into(self, transform).lift(|sequence| PipedIter(sequence.into_iter()))
    }
}
