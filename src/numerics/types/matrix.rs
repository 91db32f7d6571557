// src/numerics/types/matrix.rs
// Dense row-major matrix: storage, lifecycle, element access and equality.
// Arithmetic lives in arithmetic.rs, determinant and friends in linalg.rs.

use core::ops::{Index, IndexMut};

use tracing::debug;

use super::error::{MatrixError, Result};
use super::traits::FloatingPoint;

/// Largest absolute per-element difference at which two matrices still compare equal.
pub const EQUALITY_TOLERANCE: f64 = 1e-7;

/// Determinants with a smaller magnitude are treated as zero by `inverse`.
pub const SINGULARITY_TOLERANCE: f64 = 1e-7;

/// Dense matrix backed by a single row-major buffer.
///
/// A matrix is either the canonical empty matrix (0x0, no allocation) or has
/// both dimensions positive. Element `(row, col)` lives at `row * cols + col`.
#[derive(Clone, Debug)]
pub struct Matrix<T: FloatingPoint = f64> {
    rows: usize,
    cols: usize,
    elements: Vec<T>,
}

impl<T: FloatingPoint> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: FloatingPoint> Matrix<T> {
    /// The canonical empty 0x0 matrix. Does not allocate.
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            elements: Vec::new(),
        }
    }

    /// Create a zero-filled `rows` x `cols` matrix.
    ///
    /// # Returns
    /// * `Ok(Matrix)` - zero-filled matrix, or the empty matrix for `(0, 0)`
    /// * `Err(MatrixError::InvalidDimension)` - a dimension is negative, or
    ///   exactly one of them is zero
    ///
    /// # Examples
    /// ```
    /// # use densemat::Matrix;
    /// let m: Matrix = Matrix::new(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    /// assert!(Matrix::<f64>::new(-1, -2).is_err());
    /// ```
    pub fn new(rows: isize, cols: isize) -> Result<Self> {
        let (rows, cols) = validate_shape::<T>(rows, cols)?;
        Ok(Self::zeroed(rows, cols))
    }

    /// Build a matrix from a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, elements: Vec<T>) -> Result<Self> {
        let len = checked_len::<T>(rows, cols)?;
        if (rows == 0) != (cols == 0) || elements.len() != len {
            return Err(invalid_dimension(rows, cols));
        }
        Ok(Self { rows, cols, elements })
    }

    /// Construct a matrix from a list of equally long rows.
    ///
    /// An empty list (or a list of empty rows) yields the empty matrix.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut elements = Vec::with_capacity(checked_len::<T>(rows.len(), cols)?);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(invalid_dimension(rows.len(), row.len()));
            }
            elements.extend_from_slice(row);
        }
        if cols == 0 {
            return Ok(Self::empty());
        }
        Self::from_vec(rows.len(), cols, elements)
    }

    /// Identity matrix of size `n`.
    ///
    /// Fails with `InvalidDimension` when an `n` x `n` buffer cannot be addressed.
    pub fn identity(n: usize) -> Result<Self> {
        checked_len::<T>(n, n)?;
        let mut m = Self::zeroed(n, n);
        for i in 0..n {
            m.elements[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Zero-filled matrix for a shape already passed through `checked_len`.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            rows,
            cols,
            elements: vec![T::zero(); rows * cols],
        }
    }

    /// Take ownership of `other`'s buffer, leaving `other` empty. O(1), no copying.
    pub fn take_from(other: &mut Self) -> Self {
        core::mem::take(other)
    }

    /// Move this matrix's buffer out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self::take_from(self)
    }

    /// Replace this matrix with an independent deep copy of `other`.
    ///
    /// Reuses the existing allocation when it is large enough.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        self.clone_from(other);
        self
    }

    /// Free the backing buffer and reset to the empty matrix.
    pub fn release(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.elements = Vec::new();
    }

    /// Reshape to the requested dimensions, keeping overlapping elements.
    ///
    /// A `None` keeps the current value of that dimension. Cells exposed by a
    /// grown dimension are zero; cells beyond a shrunk dimension are dropped.
    /// On error the matrix is left untouched.
    pub fn resize(&mut self, rows: Option<isize>, cols: Option<isize>) -> Result<&mut Self> {
        let rows = rows.unwrap_or(self.rows as isize);
        let cols = cols.unwrap_or(self.cols as isize);
        let (rows, cols) = validate_shape::<T>(rows, cols)?;
        if (rows, cols) == (self.rows, self.cols) {
            return Ok(self);
        }

        debug!(from_rows = self.rows, from_cols = self.cols, rows, cols, "resizing matrix");

        let mut resized = Self::zeroed(rows, cols);
        let keep_cols = cols.min(self.cols);
        for i in 0..rows.min(self.rows) {
            let src = &self.elements[i * self.cols..i * self.cols + keep_cols];
            resized.elements[i * cols..i * cols + keep_cols].copy_from_slice(src);
        }
        *self = resized;
        Ok(self)
    }

    /// Change the number of rows, keeping the column count.
    pub fn set_rows(&mut self, rows: isize) -> Result<&mut Self> {
        self.resize(Some(rows), None)
    }

    /// Change the number of columns, keeping the row count.
    pub fn set_cols(&mut self, cols: isize) -> Result<&mut Self> {
        self.resize(None, Some(cols))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True for non-empty matrices with equal dimensions.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols && !self.is_empty()
    }

    /// Row-major view of all elements.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Checked element access.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        let idx = self.offset(row, col)?;
        Ok(&self.elements[idx])
    }

    /// Checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.elements[idx])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.at(row, col).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Result<&[T]> {
        if idx >= self.rows {
            return Err(self.out_of_range(idx, 0));
        }
        Ok(&self.elements[idx * self.cols..(idx + 1) * self.cols])
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> Result<Vec<T>> {
        if idx >= self.cols {
            return Err(self.out_of_range(0, idx));
        }
        Ok(self.elements.iter().skip(idx).step_by(self.cols).copied().collect())
    }

    /// Tolerance equality: same shape and every element pair within
    /// [`EQUALITY_TOLERANCE`]. Never fails.
    pub fn equals(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(&a, &b)| (a - b).abs().to_f64() <= EQUALITY_TOLERANCE)
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(row * self.cols + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Shapes are either (0, 0) or strictly positive in both dimensions,
/// and their buffer must be addressable.
fn validate_shape<T>(rows: isize, cols: isize) -> Result<(usize, usize)> {
    if rows < 0 || cols < 0 || (rows == 0) != (cols == 0) {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    let (rows, cols) = (rows as usize, cols as usize);
    checked_len::<T>(rows, cols)?;
    Ok((rows, cols))
}

/// Element count of a `rows` x `cols` buffer of `T`.
///
/// Fails when the count overflows `usize` or the buffer would exceed
/// `isize::MAX` bytes, the largest allocation `Vec` accepts.
pub(crate) fn checked_len<T>(rows: usize, cols: usize) -> Result<usize> {
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| invalid_dimension(rows, cols))?;
    match len.checked_mul(core::mem::size_of::<T>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(len),
        _ => Err(invalid_dimension(rows, cols)),
    }
}

/// Dimensions above `isize::MAX` are reported saturated.
fn invalid_dimension(rows: usize, cols: usize) -> MatrixError {
    MatrixError::InvalidDimension {
        rows: isize::try_from(rows).unwrap_or(isize::MAX),
        cols: isize::try_from(cols).unwrap_or(isize::MAX),
    }
}

impl<T: FloatingPoint> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: FloatingPoint> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: FloatingPoint> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let idx = match self.offset(row, col) {
            Ok(idx) => idx,
            Err(e) => panic!("{}", e),
        };
        &mut self.elements[idx]
    }
}
