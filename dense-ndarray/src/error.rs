use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArrayError {
    #[error("Allocation Error: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("Size Overflow: shape {shape:?} has more elements than fit in usize")]
    SizeOverflow { shape: Vec<usize> },
    #[error("Shape Mismatch: {0}")]
    ShapeMismatch(String),
    #[error("Index Out of Bounds: index {index} out of bounds for axis {axis} with extent {extent}")]
    IndexOutOfBounds {
        axis: usize,
        index: usize,
        extent: usize,
    },
}
