use std::{
    any::type_name,
    collections::VecDeque,
    ops::{BitOr, Range, RangeInclusive},
};

use crate::{
    meta::PipedPair, DeferredFilter, DeferredFold, DeferredMap, DeferredReduce,
    DeferredReversed, DeferredSorted, DeferredSum, DeferredSumFrom, Filtered, Mapped, Reversed,
    Transform,
};

/// Left to right application: `value.pipe(transform)` is `transform.apply(value)`.
///
/// Implemented for every sized type, so it works on any sequence, including the ones the `|`
/// operator is not implemented for.
///
/// # Example
/// ```rust
/// use epipes::{efilter, emap, esum, Pipe};
///
/// let total = "1 2 3 4"
///     .split(' ')
///     .pipe(emap(|s: &str| s.len()))
///     .pipe(efilter(|n: &usize| *n > 0))
///     .pipe(esum());
///
/// assert_eq!(total, 4);
/// ```
pub trait Pipe: Sized {
    fn pipe<T>(self, transform: T) -> T::Output
    where
        T: Transform<Self>,
    {
        pipe_into(self, transform)
    }
}

impl<S> Pipe for S {}

pub(crate) fn pipe_into<In, T>(input: In, transform: T) -> T::Output
where
    T: Transform<In>,
{
    log::trace!("piping {} into {}", type_name::<In>(), type_name::<T>());
    transform.apply(input)
}

// `|` on containers from std. The right hand side has to be named one type at a time.
macro_rules! pipe_into_deferred {
    (@each $gens:tt $seq:ty; $($rhs_gens:tt $rhs:ty),*) => {
        $(pipe_into_deferred!(@one $gens $seq; $rhs_gens $rhs);)*
    };
    (@one [$($g:tt)*] $seq:ty; [$($r:ident),*] $rhs:ty) => {
        impl<$($g)* $($r),*> BitOr<$rhs> for $seq
        where
            $rhs: Transform<$seq>,
        {
            type Output = <$rhs as Transform<$seq>>::Output;

            fn bitor(self, transform: $rhs) -> Self::Output {
                pipe_into(self, transform)
            }
        }

        impl<'r, $($g)* $($r),*> BitOr<&'r $rhs> for $seq
        where
            $rhs: Transform<$seq>,
        {
            type Output = <$rhs as Transform<$seq>>::Output;

            fn bitor(self, transform: &'r $rhs) -> Self::Output {
                pipe_into(self, transform)
            }
        }
    };
    ($gens:tt $seq:ty) => {
        pipe_into_deferred!(@each $gens $seq;
            [F] DeferredMap<F>,
            [P] DeferredFilter<P>,
            [F] DeferredReduce<F>,
            [F, A] DeferredFold<F, A>,
            [] DeferredSum,
            [A] DeferredSumFrom<A>,
            [O] DeferredSorted<O>,
            [] DeferredReversed,
            [M, F] PipedPair<M, F>
        );
    };
}

pipe_into_deferred!([T,] Vec<T>);
pipe_into_deferred!([T,] VecDeque<T>);
pipe_into_deferred!(['a, T,] &'a [T]);
pipe_into_deferred!(['a, T,] &'a Vec<T>);
pipe_into_deferred!([Idx,] Range<Idx>);
pipe_into_deferred!([Idx,] RangeInclusive<Idx>);

// `|` on this crate's lazy results accepts any transform
macro_rules! pipe_into_any {
    ($([$($g:ident),*] $seq:ty),* $(,)?) => {
        $(
            impl<$($g,)* R> BitOr<R> for $seq
            where
                R: Transform<$seq>,
            {
                type Output = R::Output;

                fn bitor(self, transform: R) -> R::Output {
                    pipe_into(self, transform)
                }
            }
        )*
    };
}

pipe_into_any!(
    [I, F] Mapped<I, F>,
    [I, P] Filtered<I, P>,
    [I] Reversed<I>,
);

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{
        efilter, emap, ereduce, ereversed, esorted, esum,
        test_utils::{add, is_odd, square},
        Result, Transform,
    };

    use super::*;

    #[test]
    fn pipe_is_call() {
        let square_all = emap(square);

        assert_eq!(
            vec![1, 2, 3].pipe(&square_all).collect::<Vec<_>>(),
            square_all.apply(vec![1, 2, 3]).collect::<Vec<_>>()
        );
    }

    #[test]
    fn odd_squares() {
        let odd_squares: Vec<_> = (vec![1, 2, 3] | emap(square) | efilter(is_odd)).collect();

        assert_eq!(odd_squares, vec![1, 9]);
    }

    #[test]
    fn pipe_from_std_containers() -> Result<()> {
        let numbers = vec![3, 1, 2];

        assert_eq!(&numbers | emap(|x: &i32| x * 2) | esum(), 12);
        assert_eq!(&numbers[..2] | ereduce(|a: i32, b: &i32| a.max(*b)).initial(0), 3);
        assert_eq!(VecDeque::from(numbers.clone()) | esorted(), vec![1, 2, 3]);
        assert_eq!((1..=4) | esum(), 10);
        assert_eq!(((0..3) | ereversed())?.collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(numbers, vec![3, 1, 2]);

        Ok(())
    }

    #[test]
    fn full_chain() -> Result<()> {
        let words = vec!["pipe", "a", "curry", "to", "map"];

        let longest_first: Vec<_> = (words
            | efilter(|w: &&str| w.len() > 1)
            | esorted().key(|w: &&str| w.len()).reverse(true)
            | ereversed())?
        .collect();

        assert_eq!(longest_first, vec!["to", "map", "pipe", "curry"]);

        Ok(())
    }

    #[test]
    fn reduce_after_lazy_chain() {
        let total = vec![1, 2, 3, 4] | emap(square) | efilter(is_odd) | ereduce(add);

        assert_eq!(total, Ok(10));
    }
}
