// src/numerics/types/arithmetic.rs
// Elementwise, scalar and matrix products. The named methods do the work;
// the operator impls below only forward to them.

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use tracing::trace;

use super::error::{MatrixError, Result};
use super::matrix::{checked_len, Matrix};
use super::traits::FloatingPoint;

impl<T: FloatingPoint> Matrix<T> {
    /// Add `other` element-wise in place.
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - for chaining
    /// * `Err(MatrixError::DimensionMismatch)` - shapes differ; `self` is unchanged
    pub fn add_matrix(&mut self, other: &Self) -> Result<&mut Self> {
        self.ensure_same_shape(other, "addition")?;
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(self)
    }

    /// Subtract `other` element-wise in place. Same precondition as [`Matrix::add_matrix`].
    pub fn sub_matrix(&mut self, other: &Self) -> Result<&mut Self> {
        self.ensure_same_shape(other, "subtraction")?;
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a -= b;
        }
        Ok(self)
    }

    /// Multiply every element by `scalar`.
    pub fn scale_by(&mut self, scalar: T) -> &mut Self {
        for a in self.as_mut_slice() {
            *a *= scalar;
        }
        self
    }

    /// Replace `self` with the product `self * other`.
    ///
    /// Requires `self.cols() == other.rows()`. The result has shape
    /// `(self.rows(), other.cols())`. On error `self` is unchanged.
    pub fn mul_matrix(&mut self, other: &Self) -> Result<&mut Self> {
        let product = self.product(other)?;
        *self = product;
        Ok(self)
    }

    fn product(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (n, inner, m) = (self.rows(), self.cols(), other.cols());
        trace!(rows = n, inner, cols = m, "matrix product");

        checked_len::<T>(n, m)?;
        let mut result = Matrix::zeroed(n, m);
        let (lhs, rhs) = (self.as_slice(), other.as_slice());
        let out = result.as_mut_slice();
        for i in 0..n {
            for k in 0..inner {
                let a = lhs[i * inner + k];
                for j in 0..m {
                    out[i * m + j] += a * rhs[k * m + j];
                }
            }
        }
        Ok(result)
    }

    fn ensure_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

// Binary operators copy the left operand and apply the in-place method.
// Shape errors surface through the Result output.

impl<T: FloatingPoint> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, other: &Matrix<T>) -> Self::Output {
        let mut result = self.clone();
        result.add_matrix(other)?;
        Ok(result)
    }
}

impl<T: FloatingPoint> Add<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(mut self, other: &Matrix<T>) -> Self::Output {
        self.add_matrix(other)?;
        Ok(self)
    }
}

impl<T: FloatingPoint> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, other: &Matrix<T>) -> Self::Output {
        let mut result = self.clone();
        result.sub_matrix(other)?;
        Ok(result)
    }
}

impl<T: FloatingPoint> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(mut self, other: &Matrix<T>) -> Self::Output {
        self.sub_matrix(other)?;
        Ok(self)
    }
}

impl<T: FloatingPoint> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        self.product(other)
    }
}

impl<T: FloatingPoint> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        self.product(other)
    }
}

impl<T: FloatingPoint> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        let mut result = self.clone();
        result.scale_by(scalar);
        result
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self.scale_by(scalar);
        self
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, matrix: &Matrix<$t>) -> Matrix<$t> {
                matrix * self
            }
        }

        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, matrix: Matrix<$t>) -> Matrix<$t> {
                matrix * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

/// # Panics
/// Panics if the shapes differ. Use [`Matrix::add_matrix`] to handle the error.
impl<T: FloatingPoint> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, other: &Matrix<T>) {
        if let Err(e) = self.add_matrix(other) {
            panic!("{}", e);
        }
    }
}

/// # Panics
/// Panics if the shapes differ. Use [`Matrix::sub_matrix`] to handle the error.
impl<T: FloatingPoint> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, other: &Matrix<T>) {
        if let Err(e) = self.sub_matrix(other) {
            panic!("{}", e);
        }
    }
}

/// # Panics
/// Panics if `self.cols() != other.rows()`. Use [`Matrix::mul_matrix`] to handle the error.
impl<T: FloatingPoint> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, other: &Matrix<T>) {
        if let Err(e) = self.mul_matrix(other) {
            panic!("{}", e);
        }
    }
}

impl<T: FloatingPoint> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale_by(scalar);
    }
}
