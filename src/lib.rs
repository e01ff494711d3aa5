//! Curried and pipeable sequence operations for Rust.
//!
//! This crate offers extended forms of `map`, `filter`, `reduce`, `sum`, `sorted` and `reversed`
//! that can be
//!
//! - called right away with their sequence: [`map`], [`filter`], [`reduce`], [`sum`], [`sorted`], [`reversed`]
//! - partially applied, by binding everything except the sequence: [`emap`], [`efilter`], [`ereduce`], [`esum`], [`esorted`], [`ereversed`]
//! - chained left to right with `|` or [`Pipe::pipe`], so `data | transform1 | transform2` reads as a pipeline
//!
//! Example:
//!
//! ```rust
//! use epipes::{efilter, emap, esum};
//!
//! let odd_squares: Vec<_> = (vec![1, 2, 3] | emap(|x: i32| x * x) | efilter(|x: &i32| x % 2 == 1)).collect();
//! assert_eq!(odd_squares, vec![1, 9]);
//!
//! let add = esum().start(13);
//! assert_eq!(vec![1, 2, 3, 4] | add, 23);
//! ```
//!
//! ## Deferred transforms
//!
//! The `e`-prefixed constructors return a deferred transform: the operation with its function and
//! extra parameters bound, waiting for the sequence. Every deferred transform implements
//! [`Transform`], so it can be applied directly, or placed on the right of a pipe. All three forms
//! agree:
//!
//! ```rust
//! use epipes::{emap, map, Pipe, Transform};
//!
//! let square = emap(|x: i32| x * x);
//!
//! let called: Vec<_> = square.apply(vec![1, 2, 3]).collect();
//! let piped: Vec<_> = (vec![1, 2, 3] | &square).collect();
//! let chained: Vec<_> = vec![1, 2, 3].pipe(&square).collect();
//! let immediate: Vec<_> = map(|x: i32| x * x, vec![1, 2, 3]).collect();
//!
//! assert_eq!(called, piped);
//! assert_eq!(piped, chained);
//! assert_eq!(chained, immediate);
//! ```
//!
//! Extra parameters are added with builder methods, each returning an updated copy:
//! `esorted().key(f).reverse(true)`, `ereduce(f).initial(a)`, `esum().start(a)`.
//!
//! Applying never mutates the deferred value, so it can be reused as many times as needed.
//! `map`, `filter` and `reversed` produce lazy single-pass iterators, `sorted` produces a `Vec`,
//! `reduce` and `sum` produce a single value.
//!
//! ### Errors
//! Failures are returned, never swallowed. Walking a single-pass sequence backwards fails with
//! [`Error::NotReversible`], reducing an empty sequence without an initial value fails with
//! [`Error::EmptyReduction`]:
//!
//! ```rust
//! use epipes::{efilter, ereduce, ereversed, Error};
//!
//! let odds = vec![1, 2, 3] | efilter(|x: &i32| x % 2 == 1);
//! assert_eq!((odds | ereversed()).unwrap_err(), Error::NotReversible { kind: "filter" });
//!
//! assert_eq!(Vec::<i32>::new() | ereduce(|a: i32, b: i32| a + b), Err(Error::EmptyReduction));
//! ```
//!
//! ## Pipe sources
//!
//! `|` works with `Vec`, `VecDeque`, slices, ranges and the lazy results of this crate. For any
//! other sequence use [`Pipe::pipe`], or wrap it:
//!
//! - [`PipedVec`] - eager, each pipe materializes into a new `PipedVec`
//! - [`PipedIter`] - lazy, each pipe wraps the lazy result into a new `PipedIter`
//! - [`PipedStream`] - an async [`futures::Stream`], mapped and filtered lazily
//!
//! The wrappers also accept bare `(operation, function)` pairs from [`meta`]:
//!
//! ```rust
//! use epipes::{meta::{Filter, Map}, PipedVec};
//!
//! let odd_squares = PipedVec::from(vec![1, 2, 3, 4, 5, 6]) | (Map, |x: i32| x * x) | (Filter, |x: &i32| x % 2 == 1);
//!
//! assert_eq!(odd_squares, vec![1, 9, 25]);
//! ```
//!
//! ### Custom transforms
//! Custom operations can be created by implementing the `Transform` trait. For example:
//!
//! ```rust
//! use epipes::{emap, Pipe, Transform};
//!
//! pub struct Pairwise;
//!
//! impl<I> Transform<I> for Pairwise
//! where
//!     I: IntoIterator,
//!     I::Item: Clone,
//! {
//!     type Output = Vec<(I::Item, I::Item)>;
//!
//!     fn apply(&self, input: I) -> Self::Output {
//!         let items: Vec<_> = input.into_iter().collect();
//!         items.windows(2).map(|w| (w[0].clone(), w[1].clone())).collect()
//!     }
//! }
//!
//! let steps = vec![1, 4, 9] | emap(|x: i32| x + 1);
//! assert_eq!(steps.pipe(Pairwise), vec![(2, 5), (5, 10)]);
//! ```
mod error;
pub mod meta;
mod pipe;
pub mod piped;
mod stream;
mod transform;
mod transforms;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests_proptest;

pub use error::{Error, Result};
pub use pipe::Pipe;
pub use piped::{PipedIter, PipedVec};
pub use stream::PipedStream;
pub use transform::Transform;
pub use transforms::filter::{efilter, filter, DeferredFilter, Filtered};
pub use transforms::map::{emap, map, DeferredMap, Mapped};
pub use transforms::reduce::{ereduce, fold, reduce, DeferredFold, DeferredReduce};
pub use transforms::reversed::{ereversed, reversed, DeferredReversed, Reversed, Reversible};
pub use transforms::sorted::{
    esorted, sorted, sorted_by_key, sorted_with, ByKey, DeferredSorted, NaturalOrder, SortOrder,
};
pub use transforms::sum::{esum, sum, sum_from, DeferredSum, DeferredSumFrom};
