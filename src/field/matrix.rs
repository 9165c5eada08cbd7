// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small square matrices over a [`Field`].
//!
//! A matrix is a fixed 4x4 array plus its logical dimension; cells outside
//! the logical square are always zero, so derived equality, ordering and
//! hashing agree with the mathematical ones.

use std::fmt;
use std::ops::{Index, IndexMut};

use super::{Elem, Field};
use crate::geometry::MAX_DIM;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Matrix {
    dim: u8,
    cells: [[Elem; MAX_DIM]; MAX_DIM],
}

impl Matrix {
    /// The all-zero matrix.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is 0 or exceeds [`MAX_DIM`].
    pub fn zero(dim: usize) -> Self {
        assert!((1..=MAX_DIM).contains(&dim), "Matrix dimension out of range: {}", dim);
        Matrix {
            dim: dim as u8,
            cells: [[0; MAX_DIM]; MAX_DIM],
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut m = Matrix::zero(dim);
        for i in 0..dim {
            m.cells[i][i] = 1;
        }
        m
    }

    /// Build from rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not square.
    pub fn from_rows<R: AsRef<[Elem]>>(rows: &[R]) -> Self {
        let mut m = Matrix::zero(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), rows.len(), "Matrix rows must be square");
            m.cells[i][..row.len()].copy_from_slice(row);
        }
        m
    }

    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    /// Iterate over the logical rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Elem]> + '_ {
        self.cells[..self.dim()].iter().map(move |row| &row[..self.dim()])
    }

    /// Iterate over every logical cell, row by row.
    pub fn entries(&self) -> impl Iterator<Item = Elem> + '_ {
        self.rows().flat_map(|row| row.iter().copied())
    }

    pub fn is_identity(&self) -> bool {
        *self == Matrix::identity(self.dim())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Elem;

    fn index(&self, (row, col): (usize, usize)) -> &Elem {
        debug_assert!(row < self.dim() && col < self.dim());
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Elem {
        debug_assert!(row < self.dim() && col < self.dim());
        &mut self.cells[row][col]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl Field {
    /// Matrix product `a·b`.
    pub fn mmul(&self, a: &Matrix, b: &Matrix) -> Matrix {
        let n = a.dim();
        debug_assert_eq!(n, b.dim(), "Matrix dimensions differ");
        let mut res = Matrix::zero(n);
        for i in 0..n {
            for k in 0..n {
                res.cells[i][k] = self.dot((0..n).map(|j| (a.cells[i][j], b.cells[j][k])));
            }
        }
        res
    }

    /// `m` raised to the power `exp`, by repeated squaring.
    pub fn mpow(&self, m: &Matrix, mut exp: usize) -> Matrix {
        let mut result = Matrix::identity(m.dim());
        let mut base = *m;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mmul(&result, &base);
            }
            base = self.mmul(&base, &base);
            exp >>= 1;
        }
        result
    }

    /// True iff `m` has order exactly `required`: no smaller positive power
    /// is the identity, and the `required`-th power is.
    pub fn check_order(&self, m: &Matrix, required: usize) -> bool {
        let id = Matrix::identity(m.dim());
        let mut power = *m;
        for _ in 1..required {
            if power == id {
                return false;
            }
            power = self.mmul(&power, m);
        }
        power == id
    }

    /// Multiplicative order of `m`, or `None` if no power returns to the
    /// identity within the size of the general linear group's exponent bound.
    pub fn order_of(&self, m: &Matrix) -> Option<usize> {
        let bound = (self.order() as usize).saturating_pow(m.dim() as u32);
        let mut power = *m;
        for order in 1..=bound {
            if power.is_identity() {
                return Some(order);
            }
            power = self.mmul(&power, m);
        }
        None
    }
}
