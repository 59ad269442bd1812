//! matcalc Core - Fundamental types
//!
//! This crate provides the core types shared by the matcalc value types:
//! - `LinalgError`: the three failure kinds, with machine-readable codes
//! - `Operation` / `Shape`: what was attempted and on which operands
//! - `scalar`: the default text form of an `f64`

mod error;
pub mod scalar;

pub use error::{codes, LinalgError, Operation, Result, Shape};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{LinalgError, Operation, Result, Shape};
}
