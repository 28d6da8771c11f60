pub(crate) mod inverse;
pub(crate) mod lu;
pub(crate) mod substitution;

pub use inverse::invert;
pub use lu::{decompose, decompose_in_place};
pub use substitution::{solve_lower, solve_lower_in_place, solve_upper, solve_upper_in_place};

/// Additive pivot regularization used during elimination.
///
/// Added to the pivot before each multiplier division so that a pivot that
/// survived the exact-zero singularity check but is very small cannot
/// produce Inf/NaN multipliers. The value is a fixed compatibility constant,
/// not scaled to the column norm; see DESIGN.md before changing it.
pub(crate) const PIVOT_EPS: f32 = 1e-6;

/// Diagonal magnitude at or below which a triangular solve reports
/// [`Singular`](crate::MatError::Singular).
pub(crate) const SINGULAR_EPS: f32 = 1e-6;
