//! Forward and backward substitution over a single column vector.
//!
//! Each solver comes in two forms. The separate-buffer form copies the
//! right-hand side into `result` and solves there; the `_in_place` form
//! reads the right-hand side from `x` and overwrites it. Both share the
//! same element ordering: `x[i]` is written only after every earlier (for
//! forward) or later (for backward) entry it depends on is final, which is
//! what makes the aliasing form safe.

use num_traits::Float;

use crate::linalg::SINGULAR_EPS;
use crate::matrix::ops;
use crate::{MatError, Matrix};

fn check_shapes(
    result: &Matrix<'_>,
    triangular: &Matrix<'_>,
    rhs: &Matrix<'_>,
) -> Result<(), MatError> {
    let ok = triangular.is_square()
        && triangular.nrows() == rhs.nrows()
        && triangular.nrows() == result.nrows()
        && result.ncols() == 1
        && rhs.ncols() == 1;
    if ok {
        Ok(())
    } else {
        Err(MatError::DimensionMismatch)
    }
}

/// Solve `L x = c` by forward substitution.
///
/// `lower` must be square and `result` and `c` single-column vectors with
/// matching row counts; otherwise [`MatError::DimensionMismatch`]. A
/// diagonal entry with magnitude at or below `1e-6` reports
/// [`MatError::Singular`] — the diagonal is the effective pivot here, so
/// the operand must carry explicit diagonal values (a packed LU matrix has
/// U's diagonal in that position, not L's implicit ones).
///
/// ```
/// use matf32::{solve_lower, Matrix};
///
/// let l = Matrix::from_rows(2, 2, &[2.0, 0.0, 1.0, 3.0]);
/// let c = Matrix::from_rows(2, 1, &[4.0, 7.0]);
/// let mut x = Matrix::zeros(2, 1);
/// solve_lower(&mut x, &l, &c).unwrap();
/// assert!((x[(0, 0)] - 2.0).abs() < 1e-6);
/// assert!((x[(1, 0)] - 5.0 / 3.0).abs() < 1e-6);
/// ```
pub fn solve_lower(
    result: &mut Matrix<'_>,
    lower: &Matrix<'_>,
    c: &Matrix<'_>,
) -> Result<(), MatError> {
    check_shapes(result, lower, c)?;
    ops::copy(result, c)?;
    forward_sub(lower, result.as_mut_slice())
}

/// Solve `L x = c` with `x` doubling as the right-hand side (`c` on entry,
/// the solution on return). The aliasing form of [`solve_lower`].
pub fn solve_lower_in_place(lower: &Matrix<'_>, x: &mut Matrix<'_>) -> Result<(), MatError> {
    if !lower.is_square() || lower.nrows() != x.nrows() || x.ncols() != 1 {
        return Err(MatError::DimensionMismatch);
    }
    forward_sub(lower, x.as_mut_slice())
}

/// Solve `U x = c` by backward substitution.
///
/// Mirror of [`solve_lower`]: same shape checks, same singularity
/// threshold, iterating from the last row up.
///
/// ```
/// use matf32::{solve_upper, Matrix};
///
/// let u = Matrix::from_rows(2, 2, &[2.0, 1.0, 0.0, 3.0]);
/// let c = Matrix::from_rows(2, 1, &[5.0, 6.0]);
/// let mut x = Matrix::zeros(2, 1);
/// solve_upper(&mut x, &u, &c).unwrap();
/// assert!((x[(0, 0)] - 1.5).abs() < 1e-6);
/// assert!((x[(1, 0)] - 2.0).abs() < 1e-6);
/// ```
pub fn solve_upper(
    result: &mut Matrix<'_>,
    upper: &Matrix<'_>,
    c: &Matrix<'_>,
) -> Result<(), MatError> {
    check_shapes(result, upper, c)?;
    ops::copy(result, c)?;
    backward_sub(upper, result.as_mut_slice())
}

/// Solve `U x = c` with `x` doubling as the right-hand side. The aliasing
/// form of [`solve_upper`].
pub fn solve_upper_in_place(upper: &Matrix<'_>, x: &mut Matrix<'_>) -> Result<(), MatError> {
    if !upper.is_square() || upper.nrows() != x.nrows() || x.ncols() != 1 {
        return Err(MatError::DimensionMismatch);
    }
    backward_sub(upper, x.as_mut_slice())
}

/// Shared forward kernel: `x` is the right-hand side on entry and the
/// solution on return. `x[i]` only reads already-finalized `x[j]`, `j < i`,
/// plus its own pre-overwrite value.
fn forward_sub(lower: &Matrix<'_>, x: &mut [f32]) -> Result<(), MatError> {
    let n = lower.nrows();

    for i in 0..n {
        let mut temp = x[i];
        for j in 0..i {
            temp -= lower[(i, j)] * x[j];
        }

        let diagonal = lower[(i, i)];
        if Float::abs(diagonal) <= SINGULAR_EPS {
            return Err(MatError::Singular);
        }

        x[i] = temp / diagonal;
    }

    Ok(())
}

/// Shared backward kernel, bottom row first.
fn backward_sub(upper: &Matrix<'_>, x: &mut [f32]) -> Result<(), MatError> {
    let n = upper.nrows();

    for i in (0..n).rev() {
        let mut temp = x[i];
        for j in (i + 1)..n {
            temp -= upper[(i, j)] * x[j];
        }

        let diagonal = upper[(i, i)];
        if Float::abs(diagonal) <= SINGULAR_EPS {
            return Err(MatError::Singular);
        }

        x[i] = temp / diagonal;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_round_trip() {
        // verify L * solve_lower(L, c) == c
        let l = Matrix::from_rows(
            3,
            3,
            &[2.0, 0.0, 0.0, -1.0, 3.0, 0.0, 4.0, 0.5, 1.5],
        );
        let c = Matrix::from_rows(3, 1, &[4.0, 5.0, -2.0]);
        let mut x = Matrix::zeros(3, 1);
        solve_lower(&mut x, &l, &c).unwrap();

        let mut back = Matrix::zeros(3, 1);
        ops::multiply(&mut back, &l, &x).unwrap();
        assert!(back.approx_eq(&c, 1e-4));
    }

    #[test]
    fn backward_round_trip() {
        let u = Matrix::from_rows(
            3,
            3,
            &[1.5, -2.0, 0.25, 0.0, 3.0, 1.0, 0.0, 0.0, -2.0],
        );
        let c = Matrix::from_rows(3, 1, &[1.0, -4.0, 6.0]);
        let mut x = Matrix::zeros(3, 1);
        solve_upper(&mut x, &u, &c).unwrap();

        let mut back = Matrix::zeros(3, 1);
        ops::multiply(&mut back, &u, &x).unwrap();
        assert!(back.approx_eq(&c, 1e-4));
    }

    #[test]
    fn in_place_matches_separate_buffer() {
        let l = Matrix::from_rows(2, 2, &[2.0, 0.0, 1.0, 3.0]);
        let c = Matrix::from_rows(2, 1, &[4.0, 7.0]);

        let mut separate = Matrix::zeros(2, 1);
        solve_lower(&mut separate, &l, &c).unwrap();

        let mut aliased = c.to_owned();
        solve_lower_in_place(&l, &mut aliased).unwrap();

        assert_eq!(separate, aliased);

        let u = Matrix::from_rows(2, 2, &[2.0, 1.0, 0.0, 3.0]);
        let mut sep_u = Matrix::zeros(2, 1);
        solve_upper(&mut sep_u, &u, &c).unwrap();
        let mut ali_u = c.to_owned();
        solve_upper_in_place(&u, &mut ali_u).unwrap();
        assert_eq!(sep_u, ali_u);
    }

    #[test]
    fn tiny_diagonal_is_singular() {
        let l = Matrix::from_rows(2, 2, &[2.0, 0.0, 1.0, 1e-7]);
        let c = Matrix::from_rows(2, 1, &[1.0, 1.0]);
        let mut x = Matrix::zeros(2, 1);
        assert_eq!(solve_lower(&mut x, &l, &c), Err(MatError::Singular));

        let u = Matrix::from_rows(2, 2, &[0.0, 1.0, 0.0, 2.0]);
        assert_eq!(solve_upper(&mut x, &u, &c), Err(MatError::Singular));
    }

    #[test]
    fn shape_violations() {
        let c = Matrix::from_rows(2, 1, &[1.0, 1.0]);
        let mut x = Matrix::zeros(2, 1);

        // non-square triangular operand
        let rect = Matrix::zeros(2, 3);
        assert_eq!(
            solve_lower(&mut x, &rect, &c),
            Err(MatError::DimensionMismatch)
        );
        assert_eq!(
            solve_upper(&mut x, &rect, &c),
            Err(MatError::DimensionMismatch)
        );

        // row-count mismatch
        let l3 = Matrix::eye(3);
        assert_eq!(
            solve_lower(&mut x, &l3, &c),
            Err(MatError::DimensionMismatch)
        );

        // right-hand side that is not a column vector
        let l2 = Matrix::eye(2);
        let wide = Matrix::zeros(2, 2);
        assert_eq!(
            solve_lower(&mut x, &l2, &wide),
            Err(MatError::DimensionMismatch)
        );

        // result that is not a column vector
        let mut wide_result = Matrix::zeros(2, 2);
        assert_eq!(
            solve_lower(&mut wide_result, &l2, &c),
            Err(MatError::DimensionMismatch)
        );

        // in-place forms run the same checks on x
        let mut x3 = Matrix::zeros(3, 1);
        assert_eq!(
            solve_lower_in_place(&l2, &mut x3),
            Err(MatError::DimensionMismatch)
        );
        assert_eq!(
            solve_upper_in_place(&l2, &mut wide_result),
            Err(MatError::DimensionMismatch)
        );
    }

    #[test]
    fn backward_on_upper_factor_of_lu() {
        // a packed LU matrix carries U on and above the diagonal; backward
        // substitution over it must only touch that part
        let packed = Matrix::from_rows(2, 2, &[4.0, 2.0, 0.5, 3.0]);
        let c = Matrix::from_rows(2, 1, &[8.0, 6.0]);
        let mut x = Matrix::zeros(2, 1);
        solve_upper(&mut x, &packed, &c).unwrap();
        // x1 = 6/3 = 2, x0 = (8 - 2*2)/4 = 1
        assert!((x[(1, 0)] - 2.0).abs() < 1e-6);
        assert!((x[(0, 0)] - 1.0).abs() < 1e-6);
    }
}
