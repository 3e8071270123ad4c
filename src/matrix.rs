//! Dense row-major matrices with cofactor-expansion determinants and
//! inversion. The tracer only ever builds 2x2 through 4x4 matrices, but the
//! type is dimension-generic so submatrices fall out of the same code.

use crate::fp::approx_eq;
use crate::tuple::Tuple;
use std::ops::Mul;
use thiserror::Error;

/// Returned by [`Matrix::inverse`] when the determinant is zero. This is a
/// scene-configuration error, not a runtime condition: callers either check
/// invertibility up front or propagate the failure and abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix is not invertible (determinant is zero)")]
pub struct NotInvertible;

#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// A zero-filled `rows` x `cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row-major values. Supplying fewer values than
    /// cells leaves the remaining cells at zero; supplying more is a
    /// precondition violation.
    pub fn from_values(rows: usize, cols: usize, values: &[f64]) -> Matrix {
        assert!(
            values.len() <= rows * cols,
            "{} values do not fit a {}x{} matrix",
            values.len(),
            rows,
            cols
        );
        let mut m = Matrix::new(rows, cols);
        m.values[..values.len()].copy_from_slice(values);
        m
    }

    pub fn identity(size: usize) -> Matrix {
        let mut m = Matrix::new(size, size);
        for i in 0..size {
            m.set(i, i, 1.0);
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.check_bounds(r, c);
        self.values[r * self.cols + c]
    }

    pub fn set(&mut self, r: usize, c: usize, value: f64) {
        self.check_bounds(r, c);
        self.values[r * self.cols + c] = value;
    }

    fn check_bounds(&self, r: usize, c: usize) {
        if r >= self.rows || c >= self.cols {
            panic!(
                "row {}, col {} not contained in a {}x{} matrix",
                r, c, self.rows, self.cols
            );
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::new(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                t.set(c, r, self.get(r, c));
            }
        }
        t
    }

    /// The matrix with row `row` and column `col` removed.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix {
        let mut s = Matrix::new(self.rows - 1, self.cols - 1);
        for r in 0..self.rows {
            if r == row {
                continue;
            }
            for c in 0..self.cols {
                if c == col {
                    continue;
                }
                let sr = if r < row { r } else { r - 1 };
                let sc = if c < col { c } else { c - 1 };
                s.set(sr, sc, self.get(r, c));
            }
        }
        s
    }

    pub fn minor(&self, row: usize, col: usize) -> f64 {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let minor = self.minor(row, col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Determinant by cofactor expansion along row 0, recursing on
    /// submatrices down to the 2x2 base case.
    pub fn determinant(&self) -> f64 {
        assert_eq!(self.rows, self.cols, "determinant requires a square matrix");
        if self.rows == 2 {
            return self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0);
        }
        (0..self.cols)
            .map(|c| self.get(0, c) * self.cofactor(0, c))
            .sum()
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Inverts the matrix. Entry `(r, c)` of the inverse is
    /// `cofactor(c, r) / determinant` - the index transpose is what folds
    /// the adjugate transpose into a single pass.
    pub fn inverse(&self) -> Result<Matrix, NotInvertible> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(NotInvertible);
        }
        let mut inv = Matrix::new(self.rows, self.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                inv.set(r, c, self.cofactor(c, r) / det);
            }
        }
        Ok(inv)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &Matrix) -> Matrix {
        assert_eq!(
            self.cols, other.rows,
            "cannot multiply a {}x{} matrix by a {}x{} matrix",
            self.rows, self.cols, other.rows, other.cols
        );
        let mut product = Matrix::new(self.rows, other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.get(r, k) * other.get(k, c);
                }
                product.set(r, c, acc);
            }
        }
        product
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, other: Matrix) -> Matrix {
        &self * &other
    }
}

impl Mul<Tuple> for &Matrix {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        assert_eq!(self.rows, 4, "tuple multiplication requires a 4x4 matrix");
        assert_eq!(self.cols, 4, "tuple multiplication requires a 4x4 matrix");
        let row = |r: usize| {
            self.get(r, 0) * t.x + self.get(r, 1) * t.y + self.get(r, 2) * t.z + self.get(r, 3) * t.w
        };
        Tuple::new(row(0), row(1), row(2), row(3))
    }
}

impl Mul<Tuple> for Matrix {
    type Output = Tuple;

    fn mul(self, t: Tuple) -> Tuple {
        &self * t
    }
}
