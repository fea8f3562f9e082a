//! Library crate for dense_ndarray
//!

mod access;
mod constructive;
mod enumerate;
mod error;
mod iterator;
mod layout;
mod misc;

pub use crate::enumerate::{Enumerate, Enumerator, nd_enumerate};
pub use crate::error::ArrayError;
pub use crate::iterator::{CoordIterator, NdIter, NdIterMut};

pub type Result<T> = std::result::Result<T, error::ArrayError>;

/// A coordinate (or a shape) of an `N`-dimensional array: one `usize` per axis.
pub type Coord<const N: usize> = [usize; N];

/// A dense `N`-dimensional array of `T` which exclusively owns its data.
///
/// Elements are stored in a single contiguous buffer in row-major (C) order: the last axis varies fastest.
/// The shape is fixed at construction, there is no way to resize or reshape an existing array.
///
/// Strides are not stored, they are derived from the shape every time they are needed, which lets the
/// compiler fold the address arithmetic away when the shape is known.
///
/// Elements are addressed by a coordinate of `N` integers:
/// ```
/// use dense_ndarray::NdArray;
///
/// let mut grid = NdArray::<i32, 2>::full([2, 3], 0).unwrap();
/// grid[[1, 2]] = 5;
/// assert_eq!(grid[(1, 2)], 5);
/// assert_eq!(grid.strides(), [3, 1]);
/// ```
pub struct NdArray<T, const N: usize> {
    data: Vec<T>,
    shape: Coord<N>,
}

impl<T, const N: usize> Default for NdArray<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}
