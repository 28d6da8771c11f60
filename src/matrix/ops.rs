//! Element-wise matrix operations.
//!
//! These are the simple dimension-checked loops the solver pipeline builds
//! on: addition, subtraction, scaling, multiplication, and value-wise copy.
//! Each writes into a caller-supplied destination so that externally-owned
//! buffers work without extra allocation.

use crate::{MatError, Matrix};

#[inline]
fn same_shape(a: &Matrix<'_>, b: &Matrix<'_>) -> bool {
    a.nrows() == b.nrows() && a.ncols() == b.ncols()
}

/// Element-wise sum: `dest = lhs + rhs`.
///
/// All three matrices must have the same shape.
///
/// ```
/// use matf32::{ops, Matrix};
/// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let b = Matrix::from_rows(2, 2, &[10.0, 20.0, 30.0, 40.0]);
/// let mut sum = Matrix::zeros(2, 2);
/// ops::add(&mut sum, &a, &b).unwrap();
/// assert_eq!(sum[(1, 1)], 44.0);
/// ```
pub fn add(dest: &mut Matrix<'_>, lhs: &Matrix<'_>, rhs: &Matrix<'_>) -> Result<(), MatError> {
    if !same_shape(dest, lhs) || !same_shape(dest, rhs) {
        return Err(MatError::DimensionMismatch);
    }
    for ((d, &a), &b) in dest
        .as_mut_slice()
        .iter_mut()
        .zip(lhs.as_slice())
        .zip(rhs.as_slice())
    {
        *d = a + b;
    }
    Ok(())
}

/// Element-wise difference: `dest = lhs - rhs`.
///
/// All three matrices must have the same shape.
pub fn subtract(dest: &mut Matrix<'_>, lhs: &Matrix<'_>, rhs: &Matrix<'_>) -> Result<(), MatError> {
    if !same_shape(dest, lhs) || !same_shape(dest, rhs) {
        return Err(MatError::DimensionMismatch);
    }
    for ((d, &a), &b) in dest
        .as_mut_slice()
        .iter_mut()
        .zip(lhs.as_slice())
        .zip(rhs.as_slice())
    {
        *d = a - b;
    }
    Ok(())
}

/// Scalar scaling: `dest = k * src`.
///
/// ```
/// use matf32::{ops, Matrix};
/// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let mut doubled = Matrix::zeros(2, 2);
/// ops::scale(&mut doubled, 2.0, &a).unwrap();
/// assert_eq!(doubled[(1, 0)], 6.0);
/// ```
pub fn scale(dest: &mut Matrix<'_>, k: f32, src: &Matrix<'_>) -> Result<(), MatError> {
    if !same_shape(dest, src) {
        return Err(MatError::DimensionMismatch);
    }
    for (d, &s) in dest.as_mut_slice().iter_mut().zip(src.as_slice()) {
        *d = k * s;
    }
    Ok(())
}

/// Value-wise copy: `dest = src`.
///
/// Shapes must match exactly; ownership of either side is irrelevant.
pub fn copy(dest: &mut Matrix<'_>, src: &Matrix<'_>) -> Result<(), MatError> {
    if !same_shape(dest, src) {
        return Err(MatError::DimensionMismatch);
    }
    dest.as_mut_slice().copy_from_slice(src.as_slice());
    Ok(())
}

/// Matrix product: `dest = lhs * rhs`.
///
/// Requires `lhs.ncols() == rhs.nrows()` and `dest` shaped
/// `lhs.nrows() x rhs.ncols()`. The destination must be a distinct matrix
/// (the borrow checker enforces this), since every output element reads a
/// full row and column of the inputs.
///
/// ```
/// use matf32::{ops, Matrix};
/// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
/// let mut prod = Matrix::zeros(2, 2);
/// ops::multiply(&mut prod, &a, &b).unwrap();
/// assert_eq!(prod[(0, 0)], 58.0);
/// assert_eq!(prod[(1, 1)], 154.0);
/// ```
pub fn multiply(dest: &mut Matrix<'_>, lhs: &Matrix<'_>, rhs: &Matrix<'_>) -> Result<(), MatError> {
    if lhs.ncols() != rhs.nrows() || dest.nrows() != lhs.nrows() || dest.ncols() != rhs.ncols() {
        return Err(MatError::DimensionMismatch);
    }
    for i in 0..lhs.nrows() {
        for k in 0..rhs.ncols() {
            let mut acc = 0.0;
            for j in 0..lhs.ncols() {
                acc += lhs[(i, j)] * rhs[(j, k)];
            }
            dest[(i, k)] = acc;
        }
    }
    Ok(())
}

// ── In-place (aliasing) forms ───────────────────────────────────────

impl Matrix<'_> {
    /// `self += rhs`, element-wise. The in-place form of [`add`]: each
    /// element is updated from its own already-final value, so operating on
    /// the destination directly is always safe.
    pub fn add_assign(&mut self, rhs: &Matrix<'_>) -> Result<(), MatError> {
        if self.nrows() != rhs.nrows() || self.ncols() != rhs.ncols() {
            return Err(MatError::DimensionMismatch);
        }
        for (d, &r) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *d += r;
        }
        Ok(())
    }

    /// `self *= k`, element-wise. The in-place form of [`scale`].
    ///
    /// ```
    /// use matf32::Matrix;
    /// let mut m = Matrix::from_rows(1, 3, &[1.0, 2.0, 3.0]);
    /// m.scale_in_place(0.5);
    /// assert_eq!(m[(0, 2)], 1.5);
    /// ```
    pub fn scale_in_place(&mut self, k: f32) {
        for x in self.as_mut_slice() {
            *x *= k;
        }
    }
}
