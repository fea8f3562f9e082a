use super::*;
use std::ops::{Index, IndexMut};

impl<T, const N: usize> NdArray<T, N> {
    /// Returns the element at `coord`, or an error naming the first axis which is out of bounds.
    pub fn get(&self, coord: &Coord<N>) -> Result<&T> {
        let flat = self.checked_offset(coord)?;
        Ok(&self.data[flat])
    }

    /// Mutable counterpart of [`NdArray::get`].
    pub fn get_mut(&mut self, coord: &Coord<N>) -> Result<&mut T> {
        let flat = self.checked_offset(coord)?;
        Ok(&mut self.data[flat])
    }

    fn checked_offset(&self, coord: &Coord<N>) -> Result<usize> {
        for (axis, (&index, &extent)) in coord.iter().zip(self.shape.iter()).enumerate() {
            if index >= extent {
                return Err(ArrayError::IndexOutOfBounds {
                    axis,
                    index,
                    extent,
                });
            }
        }
        Ok(self.ravel(coord))
    }

    // Unchecked path used by the `Index` impls: per-axis checks only in debug or `strict-bounds` builds,
    // slice indexing still catches any offset past the end of the buffer.
    #[inline(always)]
    fn offset(&self, coord: &Coord<N>) -> usize {
        if cfg!(any(debug_assertions, feature = "strict-bounds")) {
            for (axis, (&index, &extent)) in coord.iter().zip(self.shape.iter()).enumerate() {
                assert!(
                    index < extent,
                    "Index {index} out of bounds for axis {axis} with extent {extent}"
                );
            }
        }
        self.ravel(coord)
    }
}

impl<T, const N: usize> Index<Coord<N>> for NdArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, coord: Coord<N>) -> &T {
        &self.data[self.offset(&coord)]
    }
}

impl<T, const N: usize> IndexMut<Coord<N>> for NdArray<T, N> {
    #[inline]
    fn index_mut(&mut self, coord: Coord<N>) -> &mut T {
        let flat = self.offset(&coord);
        &mut self.data[flat]
    }
}

impl<T, const N: usize> Index<&Coord<N>> for NdArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, coord: &Coord<N>) -> &T {
        &self.data[self.offset(coord)]
    }
}

impl<T, const N: usize> IndexMut<&Coord<N>> for NdArray<T, N> {
    #[inline]
    fn index_mut(&mut self, coord: &Coord<N>) -> &mut T {
        let flat = self.offset(coord);
        &mut self.data[flat]
    }
}

impl<T> Index<usize> for NdArray<T, 1> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[[i]]
    }
}

impl<T> IndexMut<usize> for NdArray<T, 1> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[[i]]
    }
}

// Lets `array[(i, j, k)]` stand in for `array[[i, j, k]]`.
macro_rules! impl_tuple_index {
    (@usize $name:ident) => { usize };
    ($n:literal; $($name:ident),+) => {
        impl<T> Index<($(impl_tuple_index!(@usize $name),)+)> for NdArray<T, $n> {
            type Output = T;

            #[inline]
            fn index(&self, ($($name,)+): ($(impl_tuple_index!(@usize $name),)+)) -> &T {
                &self[[$($name),+]]
            }
        }

        impl<T> IndexMut<($(impl_tuple_index!(@usize $name),)+)> for NdArray<T, $n> {
            #[inline]
            fn index_mut(&mut self, ($($name,)+): ($(impl_tuple_index!(@usize $name),)+)) -> &mut T {
                &mut self[[$($name),+]]
            }
        }
    };
}

impl_tuple_index!(2; i, j);
impl_tuple_index!(3; i, j, k);
impl_tuple_index!(4; i, j, k, l);
impl_tuple_index!(5; i, j, k, l, m);
impl_tuple_index!(6; i, j, k, l, m, n);
