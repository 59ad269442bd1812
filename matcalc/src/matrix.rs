//! Immutable matrix built from equal-length row vectors

use std::fmt;
use std::slice::Iter;

use matcalc_core::{scalar, LinalgError, Operation, Result, Shape};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::vector::Vector;

/// A rectangular grid of scalars stored as a non-empty list of rows.
///
/// All rows share the first row's length. Columns are not stored; they are
/// materialized as new vectors on demand.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vector>", into = "Vec<Vector>")]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Create a matrix from rows, rejecting an empty or ragged row list
    pub fn new(rows: Vec<Vector>) -> Result<Self> {
        let Some(first) = rows.first() else {
            debug!("matrix: rejected empty row list");
            return Err(LinalgError::invalid_argument("matrix: empty row list"));
        };

        let cols = first.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            debug!(row = i, len = row.len(), expected = cols, "matrix: rejected ragged rows");
            return Err(LinalgError::invalid_argument(format!(
                "matrix: row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Self { rows })
    }

    /// Create a matrix from nested lists of scalars
    pub fn from_nested(data: Vec<Vec<f64>>) -> Result<Self> {
        let rows = data
            .into_iter()
            .map(Vector::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// Wrap rows the caller has already proven non-empty and rectangular
    pub(crate) fn from_rows_unchecked(rows: Vec<Vector>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    /// Get number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn num_columns(&self) -> usize {
        self.rows[0].len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_columns())
    }

    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_columns()
    }

    fn operand_shape(&self) -> Shape {
        Shape::Matrix {
            rows: self.num_rows(),
            cols: self.num_columns(),
        }
    }

    // ============ access ============

    /// Row `row` as a vector
    pub fn get_row(&self, row: usize) -> Result<&Vector> {
        self.rows
            .get(row)
            .ok_or_else(|| LinalgError::index_out_of_range(row, self.num_rows()))
    }

    /// Column `column` as a freshly built vector
    pub fn get_column(&self, column: usize) -> Result<Vector> {
        if column >= self.num_columns() {
            return Err(LinalgError::index_out_of_range(column, self.num_columns()));
        }
        Ok(self.column_unchecked(column))
    }

    /// Entry at (row, column)
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.get_row(row)?.get(column)
    }

    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Fresh iterator over the rows in order
    pub fn iter(&self) -> Iter<'_, Vector> {
        self.rows.iter()
    }

    /// Convert to nested lists of scalars
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(Vector::to_vec).collect()
    }

    // ============ arithmetic ============

    /// Elementwise sum
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, Operation::Add)?;
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Elementwise difference
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, Operation::Subtract)?;
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.subtract(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Matrix product.
    ///
    /// Entry (i, j) is row i of `self` dotted with column j of `other`. Output
    /// rows are produced in row-major order.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.num_columns() != other.num_rows() {
            debug!(
                left = ?self.shape(),
                right = ?other.shape(),
                "matrix: multiply shape mismatch"
            );
            return Err(LinalgError::incompatible(
                Operation::Multiply,
                self.operand_shape(),
                other.operand_shape(),
            ));
        }
        trace!(left = ?self.shape(), right = ?other.shape(), "matrix: multiply");

        let columns: Vec<Vector> = (0..other.num_columns())
            .map(|j| other.column_unchecked(j))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|row| {
                Vector::from_nonempty(
                    columns
                        .iter()
                        .map(|column| row.dot_unchecked(column))
                        .collect(),
                )
            })
            .collect();

        Ok(Self::from_rows_unchecked(rows))
    }

    /// Multiply every entry by `scalar`
    pub fn scale(&self, scalar: f64) -> Matrix {
        Self::from_rows_unchecked(self.rows.iter().map(|row| row.scale(scalar)).collect())
    }

    /// Rows become columns
    pub fn transpose(&self) -> Matrix {
        Self::from_rows_unchecked(
            (0..self.num_columns())
                .map(|j| self.column_unchecked(j))
                .collect(),
        )
    }

    // ============ helpers ============

    fn column_unchecked(&self, column: usize) -> Vector {
        Vector::from_nonempty(self.rows.iter().map(|row| row.as_slice()[column]).collect())
    }

    fn check_same_shape(&self, other: &Matrix, operation: Operation) -> Result<()> {
        if self.shape() != other.shape() {
            debug!(
                %operation,
                left = ?self.shape(),
                right = ?other.shape(),
                "matrix: shape mismatch"
            );
            return Err(LinalgError::incompatible(
                operation,
                self.operand_shape(),
                other.operand_shape(),
            ));
        }
        Ok(())
    }
}

/// Column-aligned grid, one bracketed row per line, entries right-aligned
/// to the widest entry of their column.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = (0..self.num_columns())
            .map(|j| {
                self.rows
                    .iter()
                    .map(|row| scalar::text_width(row.as_slice()[j]))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (&x, &width) in row.iter().zip(&widths) {
                write!(f, " {:>width$}", scalar::to_text(x), width = width)?;
            }
            write!(f, " ]")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vector>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vector>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vector> {
    fn from(m: Matrix) -> Vec<Vector> {
        m.rows
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Vector;
    type IntoIter = Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
