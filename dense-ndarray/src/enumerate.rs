use super::*;
use std::iter::FusedIterator;

/// Pairs every element of a [`CoordIterator`] with its coordinate.
///
/// The coordinate is recomputed on each step and the element is the reference yielded by the wrapped
/// iterator, so writing through it always reaches the array itself.
#[derive(Clone, Debug)]
pub struct Enumerate<I> {
    inner: I,
}

impl<I> Enumerate<I> {
    /// Wraps `inner`, which starts enumerating from its current position.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: CoordIterator> Iterator for Enumerate<I> {
    type Item = (I::Coord, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let coord = self.inner.index();
        self.inner.next().map(|item| (coord, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: CoordIterator + ExactSizeIterator> ExactSizeIterator for Enumerate<I> {}

impl<I: CoordIterator + FusedIterator> FusedIterator for Enumerate<I> {}

impl<I: CoordIterator + PartialEq> PartialEq for Enumerate<I> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

/// A borrowed array which iterates as `(coordinate, element)` pairs, created by [`nd_enumerate`].
///
/// Wraps either `&NdArray` (yielding `&T`) or `&mut NdArray` (yielding `&mut T`).
#[derive(Debug)]
pub struct Enumerator<A> {
    array: A,
}

/// Enumerates `array` as `(coordinate, element)` pairs in row-major order.
///
/// ```
/// use dense_ndarray::{NdArray, nd_enumerate};
///
/// let mut grid = NdArray::<usize, 2>::new([2, 3]).unwrap();
/// for ([i, j], value) in nd_enumerate(&mut grid) {
///     *value = i + j;
/// }
/// assert_eq!(grid[[1, 2]], 3);
/// ```
pub fn nd_enumerate<A>(array: A) -> Enumerator<A> {
    Enumerator { array }
}

impl<'a, T, const N: usize> Enumerator<&'a NdArray<T, N>> {
    /// Returns a fresh `(coordinate, &T)` iterator over the array.
    pub fn iter(&self) -> Enumerate<NdIter<'a, T, N>> {
        Enumerate::new(self.array.nd_iter())
    }
}

impl<'a, T, const N: usize> Enumerator<&'a mut NdArray<T, N>> {
    /// Returns a fresh `(coordinate, &mut T)` iterator over the array.
    pub fn iter_mut(&mut self) -> Enumerate<NdIterMut<'_, T, N>> {
        Enumerate::new(self.array.nd_iter_mut())
    }
}

impl<'a, T, const N: usize> IntoIterator for Enumerator<&'a NdArray<T, N>> {
    type Item = (Coord<N>, &'a T);
    type IntoIter = Enumerate<NdIter<'a, T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        Enumerate::new(self.array.nd_iter())
    }
}

impl<'a, T, const N: usize> IntoIterator for Enumerator<&'a mut NdArray<T, N>> {
    type Item = (Coord<N>, &'a mut T);
    type IntoIter = Enumerate<NdIterMut<'a, T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        Enumerate::new(self.array.nd_iter_mut())
    }
}

impl<T, const N: usize> NdArray<T, N> {
    /// Shorthand for `nd_enumerate(self).into_iter()`.
    pub fn indexed_iter(&self) -> Enumerate<NdIter<'_, T, N>> {
        Enumerate::new(self.nd_iter())
    }

    /// Shorthand for `nd_enumerate(self).into_iter()` over a mutable array.
    pub fn indexed_iter_mut(&mut self) -> Enumerate<NdIterMut<'_, T, N>> {
        Enumerate::new(self.nd_iter_mut())
    }
}
