use crate::linalg::lu::decompose;
use crate::linalg::substitution::solve_upper_in_place;
use crate::{MatError, Matrix};

/// Invert `source` into `dest` via partial-pivot LU decomposition.
///
/// Both matrices must be square with the same dimensions. The inverse is
/// built column by column: for target column `i`, the right-hand side is
/// the `i`-th identity column permuted by the decomposition's row ordering,
/// forward-eliminated against the packed L factor with its implicit unit
/// diagonal (no diagonal divide), then backward-substituted against U.
///
/// Scratch storage (permutation, factor matrix, working column) is local to
/// the call and released on every exit path. On [`MatError::Singular`] or
/// any other failure the error propagates unchanged and `dest` may be
/// partially written.
///
/// ```
/// use matf32::{invert, ops, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
/// let mut inv = Matrix::zeros(2, 2);
/// invert(&mut inv, &a).unwrap();
///
/// let mut product = Matrix::zeros(2, 2);
/// ops::multiply(&mut product, &a, &inv).unwrap();
/// assert!(product.approx_eq(&Matrix::eye(2), 1e-4));
/// ```
pub fn invert(dest: &mut Matrix<'_>, source: &Matrix<'_>) -> Result<(), MatError> {
    if !dest.is_square() || !source.is_square() || dest.nrows() != source.nrows() {
        return Err(MatError::DimensionMismatch);
    }

    let n = source.nrows();
    let mut perm = Matrix::zeros(n, 1);
    let mut factors = Matrix::zeros(n, n);

    decompose(&mut factors, source, &mut perm)?;

    let mut column = Matrix::zeros(n, 1);

    for i in 0..n {
        // i-th identity column, permuted by the factored row ordering:
        // solving L U x = P e_i yields column i of the inverse
        for j in 0..n {
            column[(j, 0)] = if perm[(j, 0)] == i as f32 { 1.0 } else { 0.0 };
        }

        // forward elimination against L's implicit unit diagonal. The
        // packed diagonal belongs to U, so there is no divide here.
        for j in 0..n {
            let mut temp = column[(j, 0)];
            for k in 0..j {
                temp -= factors[(j, k)] * column[(k, 0)];
            }
            column[(j, 0)] = temp;
        }

        solve_upper_in_place(&factors, &mut column)?;

        for k in 0..n {
            dest[(k, i)] = column[(k, 0)];
        }
    }

    Ok(())
}
