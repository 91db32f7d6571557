// src/numerics/types/linalg.rs
// Transpose and the Laplace-expansion family: minor, determinant,
// cofactor (complement) matrix, adjugate and inverse.
//
// Expansion is O(n!) with recursion depth n; intended for small matrices.

use tracing::{debug, trace};

use super::error::{MatrixError, Result};
use super::matrix::{Matrix, SINGULARITY_TOLERANCE};
use super::traits::{alternating_sign, FloatingPoint};

impl<T: FloatingPoint> Matrix<T> {
    /// New `cols x rows` matrix with `result[j][i] == self[i][j]`.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let mut result = Matrix::zeroed(cols, rows);
        let src = self.as_slice();
        let dst = result.as_mut_slice();
        for i in 0..rows {
            for j in 0..cols {
                dst[j * rows + i] = src[i * cols + j];
            }
        }
        result
    }

    /// The matrix left after deleting `exclude_row` and `exclude_col`.
    ///
    /// # Returns
    /// * `Err(MatrixError::NotSquare)` - receiver is not square (or is empty)
    /// * `Err(MatrixError::IndexOutOfRange)` - an excluded index is outside the shape
    pub fn minor(&self, exclude_row: usize, exclude_col: usize) -> Result<Self> {
        self.ensure_square()?;
        let n = self.rows();
        if exclude_row >= n || exclude_col >= n {
            return Err(MatrixError::IndexOutOfRange {
                row: exclude_row,
                col: exclude_col,
                rows: n,
                cols: n,
            });
        }

        let mut result = Matrix::zeroed(n - 1, n - 1);
        let dst = result.as_mut_slice();
        let mut k = 0;
        for (idx, &value) in self.as_slice().iter().enumerate() {
            if idx / n != exclude_row && idx % n != exclude_col {
                dst[k] = value;
                k += 1;
            }
        }
        Ok(result)
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// # Examples
    /// ```
    /// # use densemat::Matrix;
    /// let m = Matrix::<f64>::from_rows(&[[2.0, 3.0, 1.0], [7.0, 4.0, 1.0], [9.0, -2.0, 1.0]]).unwrap();
    /// assert!((m.determinant().unwrap() + 32.0).abs() < 1e-9);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        self.ensure_square()?;
        let n = self.rows();
        if n == 1 {
            return Ok(self.as_slice()[0]);
        }
        trace!(size = n, "determinant expansion");

        let first_row = &self.as_slice()[..n];
        let mut det = T::zero();
        for (j, &value) in first_row.iter().enumerate() {
            det += alternating_sign::<T>(j) * value * self.minor(0, j)?.determinant()?;
        }
        Ok(det)
    }

    /// Cofactor matrix: `result[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// The cofactor of the single entry of a 1x1 matrix is 1.
    pub fn calc_complements(&self) -> Result<Self> {
        if self.is_empty() {
            return Err(MatrixError::InvalidDimension { rows: 0, cols: 0 });
        }
        self.ensure_square()?;
        let n = self.rows();
        if n == 1 {
            return Matrix::identity(1);
        }

        let mut result = Matrix::zeroed(n, n);
        for i in 0..n {
            for j in 0..n {
                let cofactor = alternating_sign::<T>(i + j) * self.minor(i, j)?.determinant()?;
                result.as_mut_slice()[i * n + j] = cofactor;
            }
        }
        Ok(result)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Self> {
        Ok(self.calc_complements()?.transpose())
    }

    /// Inverse via the adjugate: `adj(A) / det(A)`.
    ///
    /// # Returns
    /// * `Err(MatrixError::NotSquare)` - receiver is not square (or is empty)
    /// * `Err(MatrixError::SingularMatrix)` - `|det| < SINGULARITY_TOLERANCE`
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.abs().to_f64() < SINGULARITY_TOLERANCE {
            debug!(determinant = det.to_f64(), size = self.rows(), "refusing to invert singular matrix");
            return Err(MatrixError::SingularMatrix { determinant: det.to_f64() });
        }
        let mut adjugate = self.adjugate()?;
        adjugate.scale_by(T::one() / det);
        Ok(adjugate)
    }

    fn ensure_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}
