//! Base operations that take their function first, usable as `(operation, function)` pairs.
//!
//! A pair is a [`Transform`]: piping a sequence into `(Map, f)` is `map(f, sequence)`.
//! Pairs are what the wrappers in [`piped`](crate::piped) expect on the right of `|`, and
//! [`PipedPair`] lets a plain container pipe into one:
//!
//! ```rust
//! use epipes::meta::{Filter, Map, PipedPair};
//!
//! let odd_squares = vec![1, 2, 3, 4, 5, 6]
//!     | PipedPair(Map, |x: i32| x * x)
//!     | PipedPair(Filter, |x: &i32| x % 2 == 1);
//!
//! assert_eq!(odd_squares.collect::<Vec<_>>(), vec![1, 9, 25]);
//! ```
//!
//! A pair whose first element is not a base operation does not compile:
//!
//! ```compile_fail
//! use epipes::meta::PipedPair;
//!
//! let _ = vec![1, 2, 3] | PipedPair(|x: i32| x, |x: i32| x);
//! ```

use crate::{Filtered, Mapped, Result, Transform};

/// A sequence operation parameterized by a function, applied to the function and a sequence
pub trait MetaOperation<F, In> {
    type Output;

    fn run(&self, function: &F, input: In) -> Self::Output;
}

/// The map operation, see [`map`](crate::map)
#[derive(Debug, Clone, Copy, Default)]
pub struct Map;

/// The filter operation, see [`filter`](crate::filter)
#[derive(Debug, Clone, Copy, Default)]
pub struct Filter;

/// The reduce operation, see [`reduce`](crate::reduce)
#[derive(Debug, Clone, Copy, Default)]
pub struct Reduce;

impl<F, In, Out> MetaOperation<F, In> for Map
where
    In: IntoIterator,
    F: Fn(In::Item) -> Out + Clone,
{
    type Output = Mapped<In::IntoIter, F>;

    fn run(&self, function: &F, input: In) -> Self::Output {
        crate::map(function.clone(), input)
    }
}

impl<F, In> MetaOperation<F, In> for Filter
where
    In: IntoIterator,
    F: Fn(&In::Item) -> bool + Clone,
{
    type Output = Filtered<In::IntoIter, F>;

    fn run(&self, function: &F, input: In) -> Self::Output {
        crate::filter(function.clone(), input)
    }
}

impl<F, In> MetaOperation<F, In> for Reduce
where
    In: IntoIterator,
    F: Fn(In::Item, In::Item) -> In::Item,
{
    type Output = Result<In::Item>;

    fn run(&self, function: &F, input: In) -> Self::Output {
        crate::reduce(function, input)
    }
}

impl<M, F, In> Transform<In> for (M, F)
where
    M: MetaOperation<F, In>,
{
    type Output = M::Output;

    fn apply(&self, input: In) -> Self::Output {
        log::trace!("applying meta operation pair");
        self.0.run(&self.1, input)
    }
}

/// An `(operation, function)` pair that can stand on the right of `|` after a plain container
#[derive(Debug, Clone, Copy)]
pub struct PipedPair<M, F>(pub M, pub F);

impl<M, F, In> Transform<In> for PipedPair<M, F>
where
    M: MetaOperation<F, In>,
{
    type Output = M::Output;

    fn apply(&self, input: In) -> Self::Output {
        log::trace!("applying piped meta operation pair");
        self.0.run(&self.1, input)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        test_utils::{add, is_odd, square},
        Error, Pipe,
    };

    use super::*;

    #[test]
    fn pipes_into_piped_pairs() {
        let odd_squares = vec![1, 2, 3, 4, 5, 6] | PipedPair(Map, square) | PipedPair(Filter, is_odd);

        assert_eq!(odd_squares.collect::<Vec<_>>(), vec![1, 9, 25]);
    }

    #[test]
    fn tuple_pairs_through_pipe_method() {
        let mut odd_squares = vec![1, 2, 3, 4, 5, 6].pipe((Map, square)).pipe((Filter, is_odd));

        assert_eq!(odd_squares.next(), Some(1));
        assert_eq!(odd_squares.next(), Some(9));
        assert_eq!(odd_squares.next(), Some(25));
        assert_eq!(odd_squares.next(), None);
    }

    #[test]
    fn pair_is_base_operation() {
        let pair = (Map, square);

        assert_eq!(
            pair.apply(vec![1, 2, 3]).collect::<Vec<_>>(),
            crate::map(square, vec![1, 2, 3]).collect::<Vec<_>>()
        );
    }

    #[test]
    fn reduce_pair() {
        assert_eq!(vec![1, 2, 3, 4] | PipedPair(Reduce, add), Ok(10));
        assert_eq!(Vec::<i32>::new() | PipedPair(Reduce, add), Err(Error::EmptyReduction));
    }
}
