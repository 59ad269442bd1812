//! Structured errors for vector and matrix operations
//!
//! Every failure is one of three kinds. All of them are contract violations
//! detected before a result is built, so a failed call never leaves a
//! partially computed value behind.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
    pub const INCOMPATIBLE_OPERANDS: &str = "INCOMPATIBLE_OPERANDS";
}

/// Binary operation that can reject its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Dot,
    Cross,
    Multiply,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Dot => "dot",
            Operation::Cross => "cross",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of an operand, as reported in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Vector { len: usize },
    Matrix { rows: usize, cols: usize },
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector { len } => write!(f, "length {}", len),
            Shape::Matrix { rows, cols } => write!(f, "{}×{}", rows, cols),
        }
    }
}

/// Error type for vector and matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum LinalgError {
    /// A structural invariant was violated at construction time
    #[serde(rename = "INVALID_ARGUMENT")]
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Single index access outside `[0, len)`
    #[serde(rename = "INDEX_OUT_OF_RANGE")]
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operand shapes do not satisfy the operation's rule
    #[serde(rename = "INCOMPATIBLE_OPERANDS")]
    #[error("Incompatible operands for {operation}: {left} vs {right}")]
    IncompatibleOperands {
        operation: Operation,
        left: Shape,
        right: Shape,
    },
}

impl LinalgError {
    // ========== Common Error Constructors ==========

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LinalgError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        LinalgError::IndexOutOfRange { index, len }
    }

    pub fn incompatible(operation: Operation, left: Shape, right: Shape) -> Self {
        LinalgError::IncompatibleOperands {
            operation,
            left,
            right,
        }
    }

    /// Machine-readable code, one of [`codes`]
    pub fn code(&self) -> &'static str {
        match self {
            LinalgError::InvalidArgument { .. } => codes::INVALID_ARGUMENT,
            LinalgError::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            LinalgError::IncompatibleOperands { .. } => codes::INCOMPATIBLE_OPERANDS,
        }
    }
}

/// Result alias used by every fallible operation
pub type Result<T> = std::result::Result<T, LinalgError>;
