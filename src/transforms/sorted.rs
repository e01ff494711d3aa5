use std::{cmp::Ordering, fmt};

use crate::Transform;

/// Decides the relative order of two items during a sort
pub trait SortOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Order items by their own `Ord` implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> SortOrder<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Order items by the value a key function extracts from them
#[derive(Clone)]
pub struct ByKey<F>(pub(crate) F);

impl<F> ByKey<F> {
    pub fn new(key_fn: F) -> Self {
        Self(key_fn)
    }
}

impl<T, K, F> SortOrder<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// A deferred stable sort. Created with [`esorted`], configured with [`DeferredSorted::key`] and
/// [`DeferredSorted::reverse`].
///
/// Applying it always materializes the sequence into a `Vec`.
#[derive(Clone, Default)]
pub struct DeferredSorted<O = NaturalOrder> {
    pub(crate) order: O,
    pub(crate) reverse: bool,
}

impl<O> DeferredSorted<O> {
    /// Sort by the value `key_fn` extracts from each item. The `reverse` flag is kept.
    pub fn key<F>(self, key_fn: F) -> DeferredSorted<ByKey<F>> {
        DeferredSorted {
            order: ByKey(key_fn),
            reverse: self.reverse,
        }
    }

    /// Sort in descending order. Equal items keep their original relative order either way.
    pub fn reverse(self, reverse: bool) -> Self {
        Self { reverse, ..self }
    }
}

impl<O> fmt::Debug for DeferredSorted<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSorted")
            .field("reverse", &self.reverse)
            .finish_non_exhaustive()
    }
}

impl<I, O> Transform<I> for DeferredSorted<O>
where
    I: IntoIterator,
    O: SortOrder<I::Item>,
{
    type Output = Vec<I::Item>;

    fn apply(&self, input: I) -> Self::Output {
        log::trace!("applying deferred sort (reverse: {})", self.reverse);
        let mut items: Vec<_> = input.into_iter().collect();

        match self.reverse {
            true => items.sort_by(|a, b| self.order.compare(b, a)),
            false => items.sort_by(|a, b| self.order.compare(a, b)),
        }

        items
    }
}

/// Collect `sequence` into a `Vec` in ascending order.
///
/// For descending order use [`sorted_with`], or `esorted().reverse(true)` to keep the sort around.
///
/// # Example
/// ```rust
/// assert_eq!(epipes::sorted(vec![4, 1, 3, 2]), vec![1, 2, 3, 4]);
/// ```
pub fn sorted<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    esorted().apply(sequence)
}

/// Collect `sequence` into a `Vec` ordered by the value `key_fn` extracts from each item.
///
/// # Example
/// ```rust
/// assert_eq!(epipes::sorted_by_key(vec![4, 1, 3, 2], |x: &i32| -x), vec![4, 3, 2, 1]);
/// ```
pub fn sorted_by_key<I, F, K>(sequence: I, key_fn: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> K,
    K: Ord,
{
    esorted().key(key_fn).apply(sequence)
}

/// Collect `sequence` into a `Vec` under `order`, descending when `reverse` is set.
///
/// Equal items keep their input order either way.
///
/// # Example
/// ```rust
/// use epipes::{sorted_with, ByKey, NaturalOrder};
///
/// assert_eq!(sorted_with(vec![4, 1, 3, 2], NaturalOrder, true), vec![4, 3, 2, 1]);
/// assert_eq!(
///     sorted_with(vec!["bb", "a", "ccc"], ByKey::new(|word: &&str| word.len()), true),
///     vec!["ccc", "bb", "a"]
/// );
/// ```
pub fn sorted_with<I, O>(sequence: I, order: O, reverse: bool) -> Vec<I::Item>
where
    I: IntoIterator,
    O: SortOrder<I::Item>,
{
    DeferredSorted { order, reverse }.apply(sequence)
}

/// A reusable sort in natural ascending order.
///
/// # Example
/// ```rust
/// use epipes::{esorted, Transform};
///
/// let reverse_sort = esorted().key(|x: &i32| -x);
///
/// assert_eq!(vec![4, 1, 3, 2] | esorted(), vec![1, 2, 3, 4]);
/// assert_eq!(reverse_sort.apply(vec![4, 1, 3, 2]), vec![4, 3, 2, 1]);
/// assert_eq!(vec![4, 1, 3, 2] | esorted().reverse(true), vec![4, 3, 2, 1]);
/// ```
pub fn esorted() -> DeferredSorted {
    DeferredSorted::default()
}
