//! In-place row and column exchange.
//!
//! This is the one primitive that mutates storage by strided traversal, and
//! partial pivoting in the LU decomposition reuses it unmodified, so its
//! bounds contract is load-bearing for the whole solver.

use crate::{MatError, Matrix};

/// Which axis [`swap`] exchanges.
///
/// The enum is closed; callers holding a raw integer option code (e.g. from
/// a wire format or C-side configuration) can convert it with `try_from`,
/// which reports [`MatError::UnknownOption`] for codes outside the set.
///
/// ```
/// use matf32::{MatError, SwapAxis};
///
/// assert_eq!(SwapAxis::try_from(1), Ok(SwapAxis::Row));
/// assert_eq!(SwapAxis::try_from(2), Ok(SwapAxis::Col));
/// assert_eq!(SwapAxis::try_from(0), Err(MatError::UnknownOption));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAxis {
    /// Exchange two rows.
    Row,
    /// Exchange two columns.
    Col,
}

impl TryFrom<u32> for SwapAxis {
    type Error = MatError;

    fn try_from(code: u32) -> Result<Self, MatError> {
        match code {
            1 => Ok(SwapAxis::Row),
            2 => Ok(SwapAxis::Col),
            _ => Err(MatError::UnknownOption),
        }
    }
}

/// Exchange rows (or columns) `from` and `to` of `m` in place.
///
/// Both indices must be strictly less than the relevant dimension, else
/// [`MatError::DimensionMismatch`]. `from == to` is a no-op returning `Ok`.
///
/// ```
/// use matf32::{swap, Matrix, SwapAxis};
///
/// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// swap(&mut m, 0, 1, SwapAxis::Row).unwrap();
/// assert_eq!(m, Matrix::from_rows(2, 2, &[3.0, 4.0, 1.0, 2.0]));
///
/// swap(&mut m, 0, 1, SwapAxis::Col).unwrap();
/// assert_eq!(m, Matrix::from_rows(2, 2, &[4.0, 3.0, 2.0, 1.0]));
/// ```
pub fn swap(m: &mut Matrix<'_>, from: usize, to: usize, axis: SwapAxis) -> Result<(), MatError> {
    let nrows = m.nrows();
    let ncols = m.ncols();

    match axis {
        SwapAxis::Row => {
            if from >= nrows || to >= nrows {
                return Err(MatError::DimensionMismatch);
            }
            if from == to {
                return Ok(());
            }
            let buf = m.as_mut_slice();
            for j in 0..ncols {
                buf.swap(from * ncols + j, to * ncols + j);
            }
        }
        SwapAxis::Col => {
            if from >= ncols || to >= ncols {
                return Err(MatError::DimensionMismatch);
            }
            if from == to {
                return Ok(());
            }
            let buf = m.as_mut_slice();
            for i in 0..nrows {
                buf.swap(i * ncols + from, i * ncols + to);
            }
        }
    }

    Ok(())
}
