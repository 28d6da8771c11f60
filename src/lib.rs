//! # matf32
//!
//! Dense row-major single-precision matrices with a direct linear-equation
//! solver built on LU decomposition with partial pivoting. No-std
//! compatible (requires `alloc`), suitable for embedded targets.
//!
//! Matrix storage is either self-owned or borrowed from a caller buffer, so
//! the solver routines can work in place on memory embedded in a larger
//! structure without copying — see [`Matrix::from_buffer`].
//!
//! ## Quick start
//!
//! ```
//! use matf32::{invert, ops, Matrix};
//!
//! let a = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
//! let mut inv = Matrix::zeros(2, 2);
//! invert(&mut inv, &a).unwrap();
//!
//! let mut product = Matrix::zeros(2, 2);
//! ops::multiply(&mut product, &a, &inv).unwrap();
//! assert!(product.approx_eq(&Matrix::eye(2), 1e-4));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — the [`Matrix`] type: row-major f32 storage with an
//!   ownership tag ([`Ownership`]), checked accessors, the row/column
//!   [`swap`] primitive, and the element-wise operations in [`ops`].
//! - [`linalg`] — the solver pipeline: [`decompose_in_place`] /
//!   [`decompose`] (packed L/U with a permutation record), [`solve_lower`]
//!   / [`solve_upper`] triangular substitution (each with an `_in_place`
//!   aliasing form), and [`invert`].
//!
//! ## Error model
//!
//! Recoverable conditions (shape mismatches, singular matrices, unknown
//! option codes, checked-access misses) are returned as [`MatError`]
//! values; the first failure in a composed operation propagates unchanged,
//! and a matrix mutated in place before the failure keeps its partial
//! state. Caller bugs — indexing past the bounds through `Index`,
//! constructing with a zero dimension or an undersized buffer — panic
//! instead, and are never converted into `MatError` values.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description                                      |
//! |---------|---------|--------------------------------------------------|
//! | `std`   | yes     | Hardware FPU via the system libm                 |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std     |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
pub mod linalg;
pub mod matrix;

pub use error::MatError;
pub use linalg::{
    decompose, decompose_in_place, invert, solve_lower, solve_lower_in_place, solve_upper,
    solve_upper_in_place,
};
pub use matrix::swap::swap;
pub use matrix::{ops, Matrix, Ownership, SwapAxis};
