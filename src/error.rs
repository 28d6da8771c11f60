/// Errors from matrix and solver operations.
///
/// Every fallible operation returns `Result<_, MatError>`; exactly one error
/// is produced per call and the first failure in a composed operation
/// (e.g. inversion calling decomposition calling swap) propagates unchanged.
///
/// Caller bugs — indexing past the matrix bounds through `Index`, or
/// constructing a matrix with a zero dimension or an undersized buffer —
/// are panics, not `MatError` values. See the crate-level docs.
///
/// ```
/// use matf32::{decompose_in_place, MatError, Matrix};
///
/// let mut rect = Matrix::zeros(2, 3);
/// let mut perm = Matrix::zeros(2, 1);
/// assert_eq!(
///     decompose_in_place(&mut rect, &mut perm).unwrap_err(),
///     MatError::DimensionMismatch,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    /// Operand shapes are incompatible with the operation, or a checked
    /// write ([`Matrix::set`](crate::Matrix::set)) targeted an out-of-range
    /// index.
    DimensionMismatch,
    /// A checked read ([`Matrix::try_get`](crate::Matrix::try_get)) targeted
    /// an out-of-range index.
    OutOfBound,
    /// The matrix is numerically singular with respect to partial pivoting,
    /// or a triangular diagonal entry is below the singularity threshold.
    Singular,
    /// An integer option code falls outside the supported closed set
    /// (see [`SwapAxis`](crate::SwapAxis)).
    UnknownOption,
}

impl core::fmt::Display for MatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatError::DimensionMismatch => write!(f, "dimension mismatch"),
            MatError::OutOfBound => write!(f, "index out of bound"),
            MatError::Singular => write!(f, "matrix is singular"),
            MatError::UnknownOption => write!(f, "unknown option code"),
        }
    }
}

impl core::error::Error for MatError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(MatError::DimensionMismatch.to_string(), "dimension mismatch");
        assert_eq!(MatError::OutOfBound.to_string(), "index out of bound");
        assert_eq!(MatError::Singular.to_string(), "matrix is singular");
        assert_eq!(MatError::UnknownOption.to_string(), "unknown option code");
    }

    #[test]
    fn copy_and_compare() {
        let e = MatError::Singular;
        let copy = e;
        assert_eq!(e, copy);
        assert_ne!(e, MatError::OutOfBound);
    }
}
