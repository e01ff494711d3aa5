/// A `Transform` is a sequence operation that has all of its parameters bound and is waiting
/// for the sequence itself.
///
/// Applying a transform only reads its captured state, so the same value can be applied any
/// number of times. References to transforms are transforms as well, which lets a deferred value
/// be piped by reference:
///
/// ```rust
/// use epipes::{emap, Transform};
///
/// let square = emap(|x: i32| x * x);
///
/// assert_eq!(square.apply(vec![1, 2]).collect::<Vec<_>>(), vec![1, 4]);
/// assert_eq!((vec![3] | &square).collect::<Vec<_>>(), vec![9]);
/// ```
pub trait Transform<In> {
    /// Result of applying the transform, lazy or eager depending on the operation
    type Output;

    /// Runs the operation on `input` and returns its natural result
    fn apply(&self, input: In) -> Self::Output;
}

impl<In, T> Transform<In> for &T
where
    T: Transform<In> + ?Sized,
{
    type Output = T::Output;

    fn apply(&self, input: In) -> Self::Output {
        (**self).apply(input)
    }
}
