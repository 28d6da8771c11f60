use num_traits::Float;

use crate::linalg::PIVOT_EPS;
use crate::matrix::ops;
use crate::{swap, MatError, Matrix, SwapAxis};

/// LU decomposition with partial pivoting, in place.
///
/// On success `a` holds both factors packed together:
/// - upper triangle (including the diagonal): U
/// - strictly lower triangle: the multipliers of L (L's unit diagonal is
///   implicit and never stored)
///
/// `perm` must have as many rows as `a`; its first column is overwritten
/// with the row permutation — entry `j` is the original row index (as a
/// float-encoded integer) that ended up in position `j`. A `perm` wider
/// than one column is tolerated: only column 0 is meaningful, but whole
/// rows are exchanged during pivoting.
///
/// Pivoting selects the largest-magnitude candidate in the current column.
/// If that maximum is exactly zero the matrix is singular with respect to
/// this strategy and [`MatError::Singular`] is returned immediately, with
/// `a` left partially factored — callers must not reuse it as if untouched.
///
/// Each multiplier divides by the pivot plus a small constant (`1e-6`): a
/// near-zero pivot that passed the singularity check then yields large but
/// finite multipliers instead of Inf/NaN. The constant costs a little
/// accuracy on well-conditioned input and is kept for compatibility.
///
/// ```
/// use matf32::{decompose_in_place, Matrix};
///
/// let mut a = Matrix::from_rows(2, 2, &[4.0, 3.0, 6.0, 3.0]);
/// let mut perm = Matrix::zeros(2, 1);
/// decompose_in_place(&mut a, &mut perm).unwrap();
///
/// // row 1 had the larger magnitude in column 0, so it was pivoted up
/// assert_eq!(perm[(0, 0)], 1.0);
/// assert_eq!(perm[(1, 0)], 0.0);
/// assert_eq!(a[(0, 0)], 6.0);
/// assert!((a[(1, 1)] - 1.0).abs() < 1e-4);
/// ```
pub fn decompose_in_place(a: &mut Matrix<'_>, perm: &mut Matrix<'_>) -> Result<(), MatError> {
    if !a.is_square() || perm.nrows() != a.nrows() {
        return Err(MatError::DimensionMismatch);
    }

    let n = a.nrows();

    // identity permutation, regardless of prior content
    for i in 0..n {
        perm[(i, 0)] = i as f32;
    }

    for i in 0..n {
        // partial pivoting: largest magnitude in column i, rows i..n
        let mut biggest = 0.0_f32;
        let mut biggest_index = i;
        for k in i..n {
            let candidate = Float::abs(a[(k, i)]);
            if candidate > biggest {
                biggest = candidate;
                biggest_index = k;
            }
        }

        // every remaining candidate in this column is exactly zero
        if biggest == 0.0 {
            return Err(MatError::Singular);
        }

        swap(a, biggest_index, i, SwapAxis::Row)?;
        swap(perm, biggest_index, i, SwapAxis::Row)?;

        // eliminate below the diagonal; the multiplier overwrites a[j][i]
        // and becomes the L entry for that cell
        for j in (i + 1)..n {
            let multiplier = a[(j, i)] / (a[(i, i)] + PIVOT_EPS);
            a[(j, i)] = multiplier;

            for k in (i + 1)..n {
                a[(j, k)] -= multiplier * a[(i, k)];
            }
        }
    }

    Ok(())
}

/// LU decomposition with partial pivoting, out of place.
///
/// Copies `source` into `dest` (shapes must match exactly) and then factors
/// `dest` with [`decompose_in_place`]; `source` is left untouched. Any
/// failure from the copy or the factorization propagates unchanged.
///
/// ```
/// use matf32::{decompose, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[2.0, 1.0, 5.0, 3.0]);
/// let mut factors = Matrix::zeros(2, 2);
/// let mut perm = Matrix::zeros(2, 1);
/// decompose(&mut factors, &a, &mut perm).unwrap();
///
/// // the source is untouched
/// assert_eq!(a[(0, 0)], 2.0);
/// assert_eq!(factors[(0, 0)], 5.0);
/// ```
pub fn decompose(
    dest: &mut Matrix<'_>,
    source: &Matrix<'_>,
    perm: &mut Matrix<'_>,
) -> Result<(), MatError> {
    ops::copy(dest, source)?;
    decompose_in_place(dest, perm)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reconstruct P*A from packed factors and compare against L*U.
    fn assert_pa_equals_lu(a: &Matrix<'_>, factors: &Matrix<'_>, perm: &Matrix<'_>, tol: f32) {
        let n = a.nrows();

        // unpack L (implicit unit diagonal) and U
        let l = Matrix::from_fn(n, n, |i, j| {
            if i == j {
                1.0
            } else if i > j {
                factors[(i, j)]
            } else {
                0.0
            }
        });
        let u = Matrix::from_fn(n, n, |i, j| if i <= j { factors[(i, j)] } else { 0.0 });

        let mut lu = Matrix::zeros(n, n);
        ops::multiply(&mut lu, &l, &u).unwrap();

        // row j of P*A is row perm[j] of A
        let pa = Matrix::from_fn(n, n, |i, j| a[(perm[(i, 0)] as usize, j)]);

        assert!(
            pa.approx_eq(&lu, tol),
            "P*A != L*U\nPA = {:?}\nLU = {:?}",
            pa.as_slice(),
            lu.as_slice(),
        );
    }

    #[test]
    fn factors_reconstruct_permuted_source() {
        let a = Matrix::from_rows(
            3,
            3,
            &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        );
        let mut factors = Matrix::zeros(3, 3);
        let mut perm = Matrix::zeros(3, 1);
        decompose(&mut factors, &a, &mut perm).unwrap();
        assert_pa_equals_lu(&a, &factors, &perm, 1e-4);
    }

    #[test]
    fn factors_reconstruct_4x4() {
        let a = Matrix::from_rows(
            4,
            4,
            &[
                1.0, 2.6, -8.1, 9.2, //
                -1.5, 5.7, 7.7, -9.9, //
                12.0, -5.1, 4.2, -4.6, //
                6.1, 2.8, 2.9, 8.4,
            ],
        );
        let mut factors = Matrix::zeros(4, 4);
        let mut perm = Matrix::zeros(4, 1);
        decompose(&mut factors, &a, &mut perm).unwrap();
        assert_pa_equals_lu(&a, &factors, &perm, 1e-4);
    }

    #[test]
    fn in_place_overwrites_and_records_pivots() {
        // column 0: |12| at row 2 wins the first pivot
        let mut a = Matrix::from_rows(
            3,
            3,
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 12.0, 8.0, 9.0],
        );
        let mut perm = Matrix::zeros(3, 1);
        decompose_in_place(&mut a, &mut perm).unwrap();
        assert_eq!(perm[(0, 0)], 2.0);
        assert_eq!(a[(0, 0)], 12.0);
    }

    #[test]
    fn permutation_is_reinitialized() {
        let mut a = Matrix::from_rows(2, 2, &[3.0, 1.0, 1.0, 2.0]);
        let mut perm = Matrix::from_rows(2, 1, &[7.0, 7.0]);
        decompose_in_place(&mut a, &mut perm).unwrap();
        // no pivoting needed, so the identity ordering survives
        assert_eq!(perm[(0, 0)], 0.0);
        assert_eq!(perm[(1, 0)], 1.0);
    }

    #[test]
    fn wide_permutation_matrix_is_tolerated() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut factors = Matrix::zeros(2, 2);
        let mut perm = Matrix::zeros(2, 3);
        decompose(&mut factors, &a, &mut perm).unwrap();
        // column 0 carries the record: |3| > |1| so rows swapped
        assert_eq!(perm[(0, 0)], 1.0);
        assert_eq!(perm[(1, 0)], 0.0);
    }

    #[test]
    fn non_square_is_rejected() {
        let mut a = Matrix::zeros(2, 3);
        let mut perm = Matrix::zeros(2, 1);
        assert_eq!(
            decompose_in_place(&mut a, &mut perm),
            Err(MatError::DimensionMismatch)
        );
    }

    #[test]
    fn permutation_row_count_mismatch_is_rejected() {
        let mut a = Matrix::zeros(3, 3);
        let mut perm = Matrix::zeros(2, 1);
        assert_eq!(
            decompose_in_place(&mut a, &mut perm),
            Err(MatError::DimensionMismatch)
        );
    }

    #[test]
    fn zero_column_is_singular() {
        let mut a = Matrix::from_rows(3, 3, &[0.0, 1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0]);
        let mut perm = Matrix::zeros(3, 1);
        assert_eq!(
            decompose_in_place(&mut a, &mut perm),
            Err(MatError::Singular)
        );
    }

    #[test]
    fn zero_pivot_column_found_during_elimination() {
        // the second pivot column is exactly zero once column 0 is eliminated
        let mut a = Matrix::from_rows(2, 2, &[1.0, 0.0, 2.0, 0.0]);
        let mut perm = Matrix::zeros(2, 1);
        assert_eq!(
            decompose_in_place(&mut a, &mut perm),
            Err(MatError::Singular)
        );
    }

    #[test]
    fn near_singular_input_survives_via_pivot_regularization() {
        // row 1 = 2 * row 0. After elimination the trailing pivot is a tiny
        // residual of the additive regularization, not an exact zero, so the
        // factorization completes with finite multipliers.
        let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let mut perm = Matrix::zeros(2, 1);
        assert_eq!(decompose_in_place(&mut a, &mut perm), Ok(()));
        assert!(a.as_slice().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn out_of_place_copy_shape_mismatch_propagates() {
        let a = Matrix::zeros(3, 3);
        let mut dest = Matrix::zeros(2, 2);
        let mut perm = Matrix::zeros(3, 1);
        assert_eq!(
            decompose(&mut dest, &a, &mut perm),
            Err(MatError::DimensionMismatch)
        );
    }
}
