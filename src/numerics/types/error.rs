// src/numerics/types/error.rs

/// Errors that can occur during matrix construction and arithmetic
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Invalid dimension: {rows}x{cols} is not a valid matrix shape")]
    InvalidDimension { rows: isize, cols: isize },

    #[error("Index out of range: ({row}, {col}) is outside a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch in {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix is singular: determinant {determinant} is below tolerance")]
    SingularMatrix { determinant: f64 },
}

/// Result alias used throughout the numerics types.
pub type Result<T> = std::result::Result<T, MatrixError>;
