//! matcalc - Immutable vector and matrix value types
//!
//! Provides two `f64` value types meant to be embedded in larger numeric code:
//! - `Vector`: add, subtract, scale, dot, cross, outer, magnitude, angle
//! - `Matrix`: row/column access, add, subtract, multiply, scale, transpose
//!
//! Both are immutable. Every operation returns a new value, and shape-checked
//! operations return `matcalc_core::Result`. Both render to text through
//! `Display`: vectors as `(a, b, c)`, matrices as a column-aligned grid.
//!
//! ```
//! use matcalc::{Matrix, Vector};
//!
//! let a = Vector::new(vec![1.0, 2.0]).unwrap();
//! let b = Vector::new(vec![3.0, 4.0]).unwrap();
//! assert_eq!(a.dot(&b).unwrap(), 11.0);
//!
//! let m = a.outer(&b);
//! assert_eq!(m.to_string(), "[ 3.0 4.0 ]\n[ 6.0 8.0 ]");
//! assert_eq!(m.transpose().transpose(), m);
//! ```

mod matrix;
mod ops;
mod vector;

pub use matcalc_core::{codes, scalar, LinalgError, Operation, Result, Shape};
pub use matrix::Matrix;
pub use vector::Vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{LinalgError, Matrix, Result, Vector};
}
