use super::*;

impl<T, const N: usize> NdArray<T, N> {
    /// Returns the extent of every axis.
    pub fn shape(&self) -> &Coord<N> {
        &self.shape
    }

    /// Returns the total number of elements, i.e. the product of the shape.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of axes.
    pub fn ndim(&self) -> usize {
        N
    }

    /// Returns true if some axis has extent zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the distance in the flat buffer between neighbours along `axis`.
    ///
    /// The last axis has stride 1, every other axis has the stride of the next one multiplied by the
    /// next one's extent.
    ///
    /// # Panics
    /// Panics if `axis >= N`.
    #[inline]
    pub fn stride(&self, axis: usize) -> usize {
        assert!(axis < N, "Axis {axis} out of range for array with {N} axes");
        self.shape[axis + 1..].iter().product()
    }

    /// Returns the strides of all axes, see [`NdArray::stride`].
    #[inline]
    pub fn strides(&self) -> Coord<N> {
        std::array::from_fn(|axis| self.stride(axis))
    }

    /// Converts a coordinate into an offset in the flat buffer.
    ///
    /// Does no bounds checking: the result is meaningful only for a coordinate inside the shape.
    #[inline]
    pub fn ravel(&self, coord: &Coord<N>) -> usize {
        coord
            .iter()
            .enumerate()
            .map(|(axis, &idx)| idx * self.stride(axis))
            .sum()
    }

    /// Converts an offset in the flat buffer back into a coordinate, the inverse of [`NdArray::ravel`].
    ///
    /// Axes are visited from the first (largest stride) to the last: each component is the remaining
    /// offset divided by the axis stride, and the remainder carries on to the next axis.
    #[inline]
    pub fn unravel(&self, flat: usize) -> Coord<N> {
        unravel_in(&self.shape, flat)
    }
}

/// Same as [`NdArray::unravel`], but only needs the shape, so cursors can keep a copy of it instead of the array.
#[inline]
pub(crate) fn unravel_in<const N: usize>(shape: &Coord<N>, flat: usize) -> Coord<N> {
    let mut rest = flat;
    let mut coord = [0; N];
    for axis in 0..N {
        let stride: usize = shape[axis + 1..].iter().product();
        // zero stride only happens for an empty array whose later axis has extent 0
        if stride == 0 {
            continue;
        }
        coord[axis] = rest / stride;
        rest %= stride;
    }
    coord
}

/// Product of the shape, or `None` if it does not fit in `usize`.
pub(crate) fn checked_size<const N: usize>(shape: &Coord<N>) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
}
