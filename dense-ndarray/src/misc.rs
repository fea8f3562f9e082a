use super::*;
use std::fmt;

impl<T: PartialEq, const N: usize> PartialEq for NdArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Eq, const N: usize> Eq for NdArray<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for NdArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdArray")
            .field("shape", &self.shape)
            .field("elements", &self.data)
            .finish()
    }
}
