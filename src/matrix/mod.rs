pub mod ops;
pub(crate) mod swap;

pub use swap::SwapAxis;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_traits::Float;

use crate::MatError;

/// Who is responsible for releasing the backing storage of a [`Matrix`].
///
/// ```
/// use matf32::{Matrix, Ownership};
///
/// let owned = Matrix::zeros(2, 2);
/// assert_eq!(owned.ownership(), Ownership::SelfOwned);
///
/// let mut buf = [0.0_f32; 4];
/// let wrapped = Matrix::from_buffer(2, 2, &mut buf);
/// assert_eq!(wrapped.ownership(), Ownership::ExternallyOwned);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The matrix allocated its buffer and releases it on drop.
    SelfOwned,
    /// The buffer was supplied by the caller; the matrix never releases it.
    ExternallyOwned,
}

/// Backing storage: either an allocation the matrix owns, or a mutable
/// borrow of caller memory. A borrowed buffer may be longer than
/// `nrows * ncols`; the tail is never read or written.
#[derive(Debug)]
enum Storage<'a> {
    Owned(Vec<f32>),
    Borrowed(&'a mut [f32]),
}

/// Dense row-major single-precision matrix.
///
/// Element `(r, c)` lives at flat offset `r * ncols + c`. Storage is either
/// self-owned (heap-allocated, freed on drop) or externally owned (a mutable
/// borrow of a caller buffer, left untouched on drop) — the latter lets
/// solver routines operate in place on a sub-block of a larger caller
/// structure without copying. Owned constructors return `Matrix<'static>`.
///
/// Both dimensions are always positive; constructors panic otherwise.
///
/// # Examples
///
/// ```
/// use matf32::Matrix;
///
/// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(m[(0, 2)], 3.0);
/// assert_eq!(m[(1, 0)], 4.0);
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m.ncols(), 3);
/// ```
#[derive(Debug)]
pub struct Matrix<'a> {
    nrows: usize,
    ncols: usize,
    data: Storage<'a>,
}

// ── Owned constructors ──────────────────────────────────────────────

impl Matrix<'static> {
    /// Create an `nrows x ncols` matrix of zeros with self-owned storage.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use matf32::Matrix;
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be positive, got {}x{}",
            nrows,
            ncols,
        );
        Self {
            nrows,
            ncols,
            data: Storage::Owned(vec![0.0; nrows * ncols]),
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols` or a dimension is zero.
    ///
    /// ```
    /// use matf32::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[f32]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let mut m = Self::zeros(nrows, ncols);
        m.buf_mut().copy_from_slice(row_major);
        m
    }

    /// Create a matrix from an owned `Vec<f32>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols` or a dimension is zero.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be positive, got {}x{}",
            nrows,
            ncols,
        );
        Self {
            nrows,
            ncols,
            data: Storage::Owned(data),
        }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use matf32::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f32);
    /// assert_eq!(m[(1, 2)], 5.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> f32) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                m[(i, j)] = f(i, j);
            }
        }
        m
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use matf32::Matrix;
    /// let id = Matrix::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }
}

// ── Borrowed constructor ────────────────────────────────────────────

impl<'a> Matrix<'a> {
    /// Wrap a caller-supplied buffer as an externally-owned matrix.
    ///
    /// The buffer is used in row-major order and must hold at least
    /// `nrows * ncols` elements; any excess tail is never touched. The
    /// caller keeps sole responsibility for the buffer's lifetime — dropping
    /// the matrix leaves its contents intact.
    ///
    /// Panics if the buffer is too small or a dimension is zero.
    ///
    /// ```
    /// use matf32::Matrix;
    ///
    /// let mut buf = [0.0_f32; 6];
    /// {
    ///     let mut m = Matrix::from_buffer(2, 3, &mut buf);
    ///     m.set(0, 1, 5.0).unwrap();
    /// }
    /// // the caller buffer survives the matrix
    /// assert_eq!(buf[1], 5.0);
    /// ```
    pub fn from_buffer(nrows: usize, ncols: usize, buf: &'a mut [f32]) -> Matrix<'a> {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix dimensions must be positive, got {}x{}",
            nrows,
            ncols,
        );
        assert!(
            buf.len() >= nrows * ncols,
            "buffer of length {} cannot back a {}x{} matrix",
            buf.len(),
            nrows,
            ncols,
        );
        Matrix {
            nrows,
            ncols,
            data: Storage::Borrowed(buf),
        }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix<'_> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Who releases the backing storage.
    #[inline]
    pub fn ownership(&self) -> Ownership {
        match self.data {
            Storage::Owned(_) => Ownership::SelfOwned,
            Storage::Borrowed(_) => Ownership::ExternallyOwned,
        }
    }

    #[inline]
    fn buf(&self) -> &[f32] {
        match &self.data {
            Storage::Owned(v) => v,
            Storage::Borrowed(b) => b,
        }
    }

    #[inline]
    fn buf_mut(&mut self) -> &mut [f32] {
        match &mut self.data {
            Storage::Owned(v) => v,
            Storage::Borrowed(b) => b,
        }
    }

    /// The elements in row-major order (exactly `nrows * ncols` of them,
    /// excluding any unused tail of a borrowed buffer).
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.buf()[..self.nrows * self.ncols]
    }

    /// Mutable view of the elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        let len = self.nrows * self.ncols;
        &mut self.buf_mut()[..len]
    }

    /// Checked element read.
    ///
    /// Returns [`MatError::OutOfBound`] when the index is out of range,
    /// where indexing with `m[(row, col)]` would panic.
    ///
    /// ```
    /// use matf32::{MatError, Matrix};
    /// let m = Matrix::eye(2);
    /// assert_eq!(m.try_get(1, 1), Ok(1.0));
    /// assert_eq!(m.try_get(2, 0), Err(MatError::OutOfBound));
    /// ```
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32, MatError> {
        if row < self.nrows && col < self.ncols {
            Ok(self.buf()[row * self.ncols + col])
        } else {
            Err(MatError::OutOfBound)
        }
    }

    /// Checked element write.
    ///
    /// Returns [`MatError::DimensionMismatch`] when the index is out of
    /// range. Note the asymmetry with reads: an out-of-range read through
    /// `Index` or [`try_get`](Self::try_get) is an out-of-bound condition,
    /// while an out-of-range write reports a dimension mismatch.
    ///
    /// ```
    /// use matf32::{MatError, Matrix};
    /// let mut m = Matrix::zeros(2, 2);
    /// assert_eq!(m.set(0, 1, 3.0), Ok(()));
    /// assert_eq!(m.set(2, 0, 3.0), Err(MatError::DimensionMismatch));
    /// assert_eq!(m[(0, 1)], 3.0);
    /// ```
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MatError> {
        if row < self.nrows && col < self.ncols {
            let idx = row * self.ncols + col;
            self.buf_mut()[idx] = value;
            Ok(())
        } else {
            Err(MatError::DimensionMismatch)
        }
    }

    /// Set every element to `value`.
    ///
    /// ```
    /// use matf32::Matrix;
    /// let mut m = Matrix::zeros(2, 2);
    /// m.fill(7.0);
    /// assert_eq!(m[(1, 0)], 7.0);
    /// ```
    pub fn fill(&mut self, value: f32) {
        self.as_mut_slice().fill(value);
    }

    /// Copy the elements into a self-owned matrix of the same shape.
    pub fn to_owned(&self) -> Matrix<'static> {
        Matrix::from_rows(self.nrows, self.ncols, self.as_slice())
    }

    /// Whether every element of `self` is within `tol` of the corresponding
    /// element of `other`. Matrices of different shapes compare unequal.
    ///
    /// ```
    /// use matf32::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[1.0, 2.00001, 3.0, 4.0]);
    /// assert!(a.approx_eq(&b, 1e-4));
    /// assert!(!a.approx_eq(&b, 1e-7));
    /// ```
    pub fn approx_eq(&self, other: &Matrix<'_>, tol: f32) -> bool {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(&a, &b)| Float::abs(a - b) <= tol)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix<'_> {
    type Output = f32;

    /// Panics when the index is out of range; reading past the bounds is a
    /// caller bug, not a runtime condition. Use
    /// [`try_get`](Matrix::try_get) for a checked read.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.buf()[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix<'_> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        let idx = row * self.ncols + col;
        &mut self.buf_mut()[idx]
    }
}

// ── Comparison ──────────────────────────────────────────────────────

impl PartialEq for Matrix<'_> {
    /// Exact logical equality: same shape and bitwise-equal elements,
    /// regardless of who owns the storage.
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows
            && self.ncols == other.ncols
            && self.as_slice() == other.as_slice()
    }
}
