use super::*;
use crate::layout::unravel_in;
use std::iter::FusedIterator;
use std::slice;

impl<T, const N: usize> NdArray<T, N> {
    /// Returns an iterator over the elements in storage (row-major) order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a mutable iterator over the elements in storage (row-major) order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns an iterator in the same order as [`NdArray::iter`] which can also report the coordinate
    /// of the element it is about to yield, see [`CoordIterator::index`].
    pub fn nd_iter(&self) -> NdIter<'_, T, N> {
        NdIter {
            array: self,
            inner: self.data.iter(),
            shape: self.shape,
            position: 0,
        }
    }

    /// Mutable counterpart of [`NdArray::nd_iter`].
    pub fn nd_iter_mut(&mut self) -> NdIterMut<'_, T, N> {
        NdIterMut {
            inner: self.data.iter_mut(),
            shape: self.shape,
            position: 0,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a NdArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut NdArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over array elements which knows the coordinate of its current position.
pub trait CoordIterator: Iterator {
    type Coord;

    /// Returns the coordinate of the element the next call to `next()` yields.
    ///
    /// The coordinate is recomputed from the flat position on every call. Once the iterator is exhausted
    /// the result describes the position one past the last element and does not address any element.
    fn index(&self) -> Self::Coord;
}

/// Row-major iterator over `&T` which also tracks the flat position, see [`NdArray::nd_iter`].
#[derive(Debug)]
pub struct NdIter<'a, T, const N: usize> {
    array: &'a NdArray<T, N>,
    inner: slice::Iter<'a, T>,
    shape: Coord<N>,
    position: usize,
}

/// Row-major iterator over `&mut T` which also tracks the flat position, see [`NdArray::nd_iter_mut`].
#[derive(Debug)]
pub struct NdIterMut<'a, T, const N: usize> {
    inner: slice::IterMut<'a, T>,
    shape: Coord<N>,
    position: usize,
}

// Both iterators share everything except the inner slice iterator.
macro_rules! impl_nd_iter {
    ($name:ident, $item:ty) => {
        impl<'a, T, const N: usize> $name<'a, T, N> {
            /// Returns the flat position of the element the next call to `next()` yields.
            pub fn position(&self) -> usize {
                self.position
            }
        }

        impl<'a, T, const N: usize> CoordIterator for $name<'a, T, N> {
            type Coord = Coord<N>;

            #[inline]
            fn index(&self) -> Coord<N> {
                unravel_in(&self.shape, self.position)
            }
        }

        impl<'a, T, const N: usize> Iterator for $name<'a, T, N> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let item = self.inner.next()?;
                self.position += 1;
                Some(item)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<'a, T, const N: usize> DoubleEndedIterator for $name<'a, T, N> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<'a, T, const N: usize> ExactSizeIterator for $name<'a, T, N> {}

        impl<'a, T, const N: usize> FusedIterator for $name<'a, T, N> {}
    };
}

impl_nd_iter!(NdIter, &'a T);
impl_nd_iter!(NdIterMut, &'a mut T);

impl<'a, T, const N: usize> Clone for NdIter<'a, T, N> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            inner: self.inner.clone(),
            shape: self.shape,
            position: self.position,
        }
    }
}

impl<'a, T, const N: usize> PartialEq for NdIter<'a, T, N> {
    /// Iterators are equal when they borrow the same array and sit at the same positions.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.array, other.array)
            && self.position == other.position
            && self.inner.len() == other.inner.len()
    }
}

impl<'a, T, const N: usize> Eq for NdIter<'a, T, N> {}
