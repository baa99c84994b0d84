//! Fixed-shape grids of ring elements.
//!
//! The scheme only ever builds k×k, k×1, 1×k and 1×1 grids; the shape is
//! fixed at construction and every binary operation validates conformance
//! before touching any coefficient. Vectors are k×1 grids and the scalar
//! ciphertext component is a 1×1 grid, so all module-level algebra goes
//! through one container.

use crate::error::Error;
use crate::params::RingParameters;
use crate::ring::RingElement;
use zeroize::Zeroize;

/// A rows×cols grid of ring elements, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct RingMatrix {
    rows: usize,
    cols: usize,
    data: Vec<RingElement>,
}

impl RingMatrix {
    /// Grid of zero polynomials.
    pub fn zero(rows: usize, cols: usize) -> Self {
        RingMatrix {
            rows,
            cols,
            data: vec![RingElement::zero(); rows * cols],
        }
    }

    /// Build a grid by sampling or computing each entry.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> RingElement) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        RingMatrix { rows, cols, data }
    }

    /// Wrap a single ring element as a 1×1 grid.
    pub fn from_element(e: RingElement) -> Self {
        RingMatrix {
            rows: 1,
            cols: 1,
            data: vec![e],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at row i, column j. Panics on out-of-bounds indices.
    pub fn entry(&self, i: usize, j: usize) -> &RingElement {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        &self.data[i * self.cols + j]
    }

    fn mismatch(&self, other: &RingMatrix) -> Error {
        Error::DimensionMismatch {
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: other.rows,
            rhs_cols: other.cols,
        }
    }

    /// Matrix multiplication with ring addition and multiplication as the
    /// scalar operations. Fails if `self.cols != other.rows`.
    pub fn mul(&self, other: &RingMatrix, params: &RingParameters) -> Result<RingMatrix, Error> {
        if self.cols != other.rows {
            return Err(self.mismatch(other));
        }
        let mut out = RingMatrix::zero(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = RingElement::zero();
                for l in 0..self.cols {
                    let prod = self.entry(i, l).mul(other.entry(l, j), params);
                    acc = acc.add(&prod, params);
                }
                out.data[i * out.cols + j] = acc;
            }
        }
        Ok(out)
    }

    /// Elementwise addition. Fails on unequal shapes.
    pub fn add(&self, other: &RingMatrix, params: &RingParameters) -> Result<RingMatrix, Error> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.add(b, params))
            .collect();
        Ok(RingMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Elementwise subtraction. Fails on unequal shapes.
    pub fn sub(&self, other: &RingMatrix, params: &RingParameters) -> Result<RingMatrix, Error> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.sub(b, params))
            .collect();
        Ok(RingMatrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Transpose by index swap. Always succeeds.
    pub fn transpose(&self) -> RingMatrix {
        RingMatrix::from_fn(self.cols, self.rows, |i, j| self.entry(j, i).clone())
    }
}
