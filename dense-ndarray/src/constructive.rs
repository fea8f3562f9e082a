use super::*;
use crate::layout::{checked_size, unravel_in};
use tracing::{debug, trace};

impl<T, const N: usize> NdArray<T, N> {
    /// Creates an array with all extents zero and no storage.
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            shape: [0; N],
        }
    }

    /// Creates an array of the given shape with every element set to `T::default()`.
    ///
    /// Returns an error if the number of elements overflows `usize` or the buffer cannot be allocated.
    pub fn new(shape: Coord<N>) -> Result<Self>
    where
        T: Clone + Default,
    {
        Self::full(shape, T::default())
    }

    /// Creates an array of the given shape with every element set to `value`.
    pub fn full(shape: Coord<N>, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let (mut data, size) = allocate(&shape)?;
        data.resize(size, value);

        Ok(Self { data, shape })
    }

    /// Creates an array by calling `f` with the coordinate of every element, in row-major order.
    pub fn from_fn(shape: Coord<N>, mut f: impl FnMut(Coord<N>) -> T) -> Result<Self> {
        let (mut data, size) = allocate(&shape)?;
        data.extend((0..size).map(|flat| f(unravel_in(&shape, flat))));

        Ok(Self { data, shape })
    }

    /// Creates an array which takes ownership of `data`, interpreted in row-major order.
    ///
    /// Returns an error if the length of `data` is not the product of `shape`.
    pub fn from_vec(data: Vec<T>, shape: Coord<N>) -> Result<Self> {
        let size = checked_size(&shape).ok_or_else(|| overflow(&shape))?;
        if data.len() != size {
            debug!(?shape, len = data.len(), "rejecting buffer of wrong length");
            return Err(ArrayError::ShapeMismatch(format!(
                "Buffer of length {} does not match shape {shape:?} of size {size}",
                data.len()
            )));
        }

        Ok(Self { data, shape })
    }

    /// Moves the contents out of `self`, leaving it empty (see [`NdArray::empty`]).
    pub fn take(&mut self) -> Self {
        trace!(shape = ?self.shape, size = self.size(), "moving array out");
        std::mem::take(self)
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Returns the elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements in row-major order for modification.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the array and returns its buffer in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone, const N: usize> NdArray<T, N> {
    /// Returns a deep copy of the array, or an error if the new buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self> {
        trace!(shape = ?self.shape, size = self.size(), "copying array");
        let (mut data, _) = allocate::<T, N>(&self.shape)?;
        data.extend_from_slice(&self.data);

        Ok(Self {
            data,
            shape: self.shape,
        })
    }
}

impl<T: Clone, const N: usize> Clone for NdArray<T, N> {
    /// Same as [`NdArray::try_clone`].
    ///
    /// # Panics
    /// Panics if the new buffer cannot be allocated.
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| panic!("Failed to copy array: {err}"))
    }
}

/// Reserves an empty buffer with room for the product of `shape`, returned alongside it.
fn allocate<T, const N: usize>(shape: &Coord<N>) -> Result<(Vec<T>, usize)> {
    let size = checked_size(shape).ok_or_else(|| overflow(shape))?;

    let mut data = Vec::new();
    data.try_reserve_exact(size).map_err(|err| {
        debug!(?shape, size, error = %err, "failed to allocate array");
        ArrayError::from(err)
    })?;
    trace!(?shape, size, "allocated array");

    Ok((data, size))
}

fn overflow<const N: usize>(shape: &Coord<N>) -> ArrayError {
    debug!(?shape, "array size overflows usize");
    ArrayError::SizeOverflow {
        shape: shape.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_logging;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new() -> Result<()> {
        init_test_logging();

        let vector = NdArray::<f64, 1>::new([10])?;
        assert_eq!(vector.size(), 10);
        assert_eq!(vector.shape(), &[10]);
        assert_eq!(vector.strides(), [1]);

        let matrix = NdArray::<f64, 2>::new([5, 10])?;
        assert_eq!(matrix.size(), 50);
        assert_eq!(matrix.shape(), &[5, 10]);

        Ok(())
    }

    #[test]
    fn test_full() -> Result<()> {
        let vector = NdArray::<f64, 1>::full([3], 2.0)?;
        assert_eq!(vector.size(), 3);
        for i in 0..3 {
            assert_eq!(vector[[i]], 2.0);
        }

        let matrix = NdArray::<f64, 2>::full([2, 3], 2.0)?;
        assert_eq!(matrix.size(), 6);
        assert_eq!(matrix.strides(), [3, 1]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(matrix[[i, j]], 2.0);
            }
        }

        Ok(())
    }

    #[test]
    fn test_zero_extent_has_no_elements() -> Result<()> {
        let array = NdArray::<i32, 3>::new([4, 0, 2])?;
        assert_eq!(array.size(), 0);
        assert_eq!(array.shape(), &[4, 0, 2]);
        assert!(array.iter().next().is_none());

        Ok(())
    }

    #[test]
    fn test_size_overflow() {
        init_test_logging();

        let result = NdArray::<u8, 2>::new([usize::MAX, 3]);
        assert_eq!(
            result.err(),
            Some(ArrayError::SizeOverflow {
                shape: vec![usize::MAX, 3]
            })
        );
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        let result = NdArray::<u64, 1>::new([usize::MAX / 4]);
        assert!(matches!(result, Err(ArrayError::Allocation(_))));
    }

    #[test]
    fn test_from_fn() -> Result<()> {
        let matrix = NdArray::<usize, 2>::from_fn([2, 3], |[i, j]| 10 * i + j)?;
        assert_eq!(matrix.as_slice(), &[0, 1, 2, 10, 11, 12]);

        Ok(())
    }

    #[test]
    fn test_from_vec() -> Result<()> {
        let matrix = NdArray::<i32, 2>::from_vec(vec![1, 2, 3, 4, 5, 6], [3, 2])?;
        assert_eq!(matrix[[2, 0]], 5);
        assert_eq!(matrix.into_vec(), vec![1, 2, 3, 4, 5, 6]);

        let result = NdArray::<i32, 2>::from_vec(vec![1, 2, 3], [2, 2]);
        assert!(matches!(result, Err(ArrayError::ShapeMismatch(_))));

        Ok(())
    }

    #[test]
    fn test_take_leaves_source_empty() -> Result<()> {
        init_test_logging();

        let mut x = NdArray::<f64, 1>::new([5])?;
        assert_eq!(x.size(), 5);
        x = NdArray::new([10])?;
        x[[3]] = 7.0;
        assert_eq!(x.size(), 10);

        let y = x.take();
        assert_eq!(y.size(), 10);
        assert_eq!(y.shape(), &[10]);
        assert_eq!(y[[3]], 7.0);

        assert_eq!(x.size(), 0);
        assert_eq!(x.shape(), &[0]);
        assert!(x.as_slice().is_empty());

        // the emptied source stays usable
        x = y.clone();
        assert_eq!(x.size(), 10);

        Ok(())
    }

    #[test]
    fn test_clone_is_independent() -> Result<()> {
        let mut x = NdArray::<i32, 2>::full([2, 2], 1)?;
        let mut y = x.clone();

        y[[0, 1]] = 5;
        assert_eq!(x[[0, 1]], 1);

        x[[1, 0]] = 9;
        assert_eq!(y[[1, 0]], 1);
        assert_eq!(y[[0, 1]], 5);

        Ok(())
    }

    #[test]
    fn test_try_clone_is_independent() -> Result<()> {
        let mut x = NdArray::<i32, 2>::from_fn([2, 3], |[i, j]| (3 * i + j) as i32)?;
        let mut y = x.try_clone()?;
        assert_eq!(x, y);

        y[[1, 2]] = -1;
        assert_eq!(x[[1, 2]], 5);

        x[[0, 0]] = 8;
        assert_eq!(y[[0, 0]], 0);

        let empty = NdArray::<i32, 2>::default().try_clone()?;
        assert_eq!(empty.shape(), &[0, 0]);

        Ok(())
    }

    #[test]
    fn test_fill() -> Result<()> {
        let mut matrix = NdArray::<u8, 2>::new([2, 2])?;
        matrix.fill(3);
        assert!(matrix.iter().all(|&el| el == 3));

        Ok(())
    }
}
