//! # densemat - dense matrices with value semantics
//!
//! A row-major `Matrix<T>` (default `f64`) that owns its buffer outright:
//! cloning deep-copies, [`Matrix::take_from`] hands the buffer over in O(1) and
//! leaves the source empty, and dropping frees it once.
//!
//! ## Operations
//!
//! - **Arithmetic**: element-wise add/subtract, scalar scaling, matrix product
//! - **Structure**: transpose, resize with element preservation
//! - **Linear algebra**: minor, Laplace-expansion determinant, cofactor matrix,
//!   adjugate, inverse
//!
//! Equality is approximate: two matrices are equal when their shapes match and
//! every element pair differs by at most [`EQUALITY_TOLERANCE`].
//!
//! ## Quick Start
//!
//! ```rust
//! use densemat::{Matrix, MatrixError};
//!
//! # fn main() -> Result<(), MatrixError> {
//! let a = Matrix::<f64>::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]])?;
//!
//! let det = a.determinant()?;
//! assert!((det + 1.0).abs() < 1e-9);
//!
//! let inv = a.inverse()?;
//! assert_eq!((&a * &inv)?, Matrix::identity(3)?);
//!
//! // Shape errors are values, not panics
//! let wide = Matrix::<f64>::new(1, 2)?;
//! assert!(matches!(wide.determinant(), Err(MatrixError::NotSquare { .. })));
//! # Ok(())
//! # }
//! ```

pub mod numerics;

// Re-export commonly used types for convenience
pub use numerics::types::error::{MatrixError, Result};
pub use numerics::types::matrix::{Matrix, EQUALITY_TOLERANCE, SINGULARITY_TOLERANCE};
pub use numerics::types::traits::FloatingPoint;

/// Version information for the densemat crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
