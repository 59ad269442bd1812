//! Immutable vector of `f64` scalars

use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice::Iter;

use matcalc_core::{scalar, LinalgError, Operation, Result, Shape};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matrix::Matrix;

/// A non-empty, fixed-length sequence of scalars.
///
/// Every operation returns a new `Vector`; there is no way to change one in
/// place, so a vector can be shared freely once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    elements: Vec<f64>,
}

impl Vector {
    /// Create a vector, rejecting an empty element list
    pub fn new(elements: Vec<f64>) -> Result<Self> {
        if elements.is_empty() {
            debug!("vector: rejected empty element list");
            return Err(LinalgError::invalid_argument("vector: empty element list"));
        }
        Ok(Self { elements })
    }

    /// Create a vector by copying a slice
    pub fn from_slice(elements: &[f64]) -> Result<Self> {
        Self::new(elements.to_vec())
    }

    /// Wrap elements the caller has already proven non-empty
    pub(crate) fn from_nonempty(elements: Vec<f64>) -> Self {
        debug_assert!(!elements.is_empty());
        Self { elements }
    }

    /// Number of elements (at least one)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: construction rejects empty vectors
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn shape(&self) -> Shape {
        Shape::Vector { len: self.len() }
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<f64> {
        self.elements
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_range(index, self.len()))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.elements.clone()
    }

    /// Fresh iterator over the elements in index order
    pub fn iter(&self) -> Iter<'_, f64> {
        self.elements.iter()
    }

    // ============ arithmetic ============

    /// Elementwise sum
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, Operation::Add, |a, b| a + b)
    }

    /// Elementwise difference
    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, Operation::Subtract, |a, b| a - b)
    }

    /// Multiply every element by `scalar`. Non-finite scalars propagate.
    pub fn scale(&self, scalar: f64) -> Vector {
        Self::from_nonempty(self.elements.iter().map(|x| x * scalar).collect())
    }

    /// Sum of elementwise products
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_len(other, Operation::Dot)?;
        Ok(self.dot_unchecked(other))
    }

    /// 3-dimensional cross product. Both operands must have length 3.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.len() != 3 || other.len() != 3 {
            debug!(left = self.len(), right = other.len(), "vector: cross requires length 3");
            return Err(LinalgError::incompatible(
                Operation::Cross,
                self.shape(),
                other.shape(),
            ));
        }
        let a = &self.elements;
        let b = &other.elements;
        Ok(Self::from_nonempty(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Outer product: entry (i, j) is `self[i] * other[j]`
    pub fn outer(&self, other: &Vector) -> Matrix {
        Matrix::from_rows_unchecked(self.elements.iter().map(|&a| other.scale(a)).collect())
    }

    /// True iff the dot product is exactly `0.0` (no tolerance)
    pub fn is_perpendicular(&self, other: &Vector) -> Result<bool> {
        Ok(self.dot(other)? == 0.0)
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        self.dot_unchecked(self).sqrt()
    }

    /// Angle to `other` in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding on parallel operands
    /// cannot leave the domain of `acos`. A zero-magnitude operand still
    /// yields NaN rather than an error.
    pub fn angle_with(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        let cos_theta = (dot / (self.magnitude() * other.magnitude())).clamp(-1.0, 1.0);
        Ok(cos_theta.acos())
    }

    // ============ conversion ============

    /// 1×n matrix holding this vector as its only row
    pub fn to_row_matrix(&self) -> Matrix {
        Matrix::from_rows_unchecked(vec![self.clone()])
    }

    /// n×1 matrix holding this vector as its only column
    pub fn to_column_matrix(&self) -> Matrix {
        Matrix::from_rows_unchecked(
            self.elements
                .iter()
                .map(|&x| Self::from_nonempty(vec![x]))
                .collect(),
        )
    }

    // ============ helpers ============

    fn check_same_len(&self, other: &Vector, operation: Operation) -> Result<()> {
        if self.len() != other.len() {
            debug!(%operation, left = self.len(), right = other.len(), "vector: length mismatch");
            return Err(LinalgError::incompatible(
                operation,
                self.shape(),
                other.shape(),
            ));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, operation: Operation, f: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_len(other, operation)?;
        Ok(Self::from_nonempty(
            self.elements
                .iter()
                .zip(&other.elements)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    pub(crate) fn dot_unchecked(&self, other: &Vector) -> f64 {
        self.elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a * b)
            .sum()
    }
}

// -0.0 == 0.0, so both must hash alike
fn normalized_bits(x: f64) -> u64 {
    if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.len().hash(state);
        for &x in &self.elements {
            normalized_bits(x).hash(state);
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, &x) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", scalar::to_text(x))?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinalgError;

    fn try_from(elements: Vec<f64>) -> Result<Self> {
        Vector::new(elements)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = LinalgError;

    fn try_from(elements: &[f64]) -> Result<Self> {
        Vector::from_slice(elements)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Vec<f64> {
        v.elements
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
