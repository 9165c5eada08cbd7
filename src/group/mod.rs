// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The finite group generated by a solution.
//!
//! Closure assigns every reachable matrix an integer code. Codes come in
//! contiguous blocks of `rotations` elements, one block per cell, with
//!
//! ```text
//! matrix[spin(i, 1)] == R · matrix[i]
//! matrix[connection(i)] == P · matrix[i]
//! ```
//!
//! so code 0 is the identity, codes `1..rotations` are the powers of `R`, and
//! `connection` is the cell adjacency of the quotient tiling.
//!
//! Optional seed coordinates alias extra matrices to an existing code: when
//! `M` receives code `i`, so do `M·q` for every seed `q`, recursively. This
//! identifies cells that differ by a seed and yields smaller quotients.

pub mod cayley;
pub mod census;
pub mod words;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{QuotientError, Result};
use crate::field::{Arithmetic, Field, Matrix};
use crate::geometry::TilingShape;
use crate::solver::{GeneratorSet, Solution};

pub use cayley::CayleyGraph;
pub use census::OrderClass;

#[derive(Debug, Clone)]
pub struct MatrixGroup {
    field: Field,
    shape: TilingShape,
    generators: GeneratorSet,
    matrices: Vec<Matrix>,
    codes: HashMap<Matrix, usize>,
    connections: Vec<usize>,
    seeds: Vec<Matrix>,
}

impl MatrixGroup {
    /// Close the group generated by a solution, aliasing by the given seed
    /// words (see [`words`]).
    pub fn close<S: AsRef<str>>(solution: &Solution, seed_paths: &[S]) -> Result<Self> {
        let seeds = seed_paths
            .iter()
            .map(|path| {
                let m = words::word_to_matrix(&solution.field, &solution.generators, path.as_ref());
                debug!(path = path.as_ref(), order = ?solution.field.order_of(&m), "seed coordinate");
                m
            })
            .collect();
        MatrixGroup::from_generators(solution.field, solution.shape, solution.generators, seeds)
    }

    /// Close the group generated by `generators`.
    ///
    /// Fails with [`QuotientError::ClosureSizeMismatch`] when the group size
    /// is not a multiple of the shape's local group.
    pub fn from_generators(
        field: Field,
        shape: TilingShape,
        generators: GeneratorSet,
        seeds: Vec<Matrix>,
    ) -> Result<Self> {
        let mut group = MatrixGroup {
            field,
            shape,
            generators,
            matrices: Vec::new(),
            codes: HashMap::new(),
            connections: Vec::new(),
            seeds,
        };
        group.add_cell(generators.identity);
        let mut i = 0;
        while i < group.matrices.len() {
            let neighbour = field.mmul(&generators.p, &group.matrices[i]);
            group.add_cell(neighbour);
            let code = group.lookup(&neighbour)?;
            group.connections.push(code);
            i += 1;
        }

        let size = group.len();
        let local_group = shape.local_group();
        if size % local_group != 0 {
            warn!(size, local_group, "closure size is not a multiple of the local group");
            return Err(QuotientError::ClosureSizeMismatch { size, local_group });
        }
        debug!(size, %shape, "group closed");
        Ok(group)
    }

    /// Give `m` and everything it reaches under `R` (and `X` for spatial
    /// patterns) fresh codes.
    fn add_cell(&mut self, m: Matrix) {
        match self.generators.x {
            None => {
                let mut cur = m;
                while !self.codes.contains_key(&cur) {
                    self.assign(cur);
                    cur = self.field.mmul(&self.generators.r, &cur);
                }
            }
            Some(x) => {
                let mut stack = vec![m];
                while let Some(cur) = stack.pop() {
                    if self.codes.contains_key(&cur) {
                        continue;
                    }
                    self.assign(cur);
                    stack.push(self.field.mmul(&self.generators.r, &cur));
                    stack.push(self.field.mmul(&x, &cur));
                }
            }
        }
    }

    fn assign(&mut self, m: Matrix) {
        let code = self.matrices.len();
        self.codes.insert(m, code);
        self.matrices.push(m);
        let mut pending: Vec<Matrix> = self.seeds.iter().map(|q| self.field.mmul(&m, q)).collect();
        while let Some(alias) = pending.pop() {
            if self.codes.contains_key(&alias) {
                continue;
            }
            self.codes.insert(alias, code);
            pending.extend(self.seeds.iter().map(|q| self.field.mmul(&alias, q)));
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn shape(&self) -> TilingShape {
        self.shape
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    /// Size of each contiguous block of codes.
    pub fn rotations(&self) -> usize {
        self.shape.rotations()
    }

    /// Representative matrix of an element.
    ///
    /// # Panics
    ///
    /// Panics if `code` is out of range.
    pub fn matrix(&self, code: usize) -> &Matrix {
        &self.matrices[code]
    }

    pub fn code_of(&self, m: &Matrix) -> Option<usize> {
        self.codes.get(m).copied()
    }

    /// Like [`code_of`](Self::code_of), failing with
    /// [`QuotientError::UnknownElement`].
    pub fn lookup(&self, m: &Matrix) -> Result<usize> {
        self.code_of(m).ok_or(QuotientError::UnknownElement)
    }

    /// Code of the product of two elements.
    pub fn try_multiply(&self, a: usize, b: usize) -> Result<usize> {
        self.lookup(&self.field.mmul(&self.matrices[a], &self.matrices[b]))
    }

    /// Code of the product of two elements.
    ///
    /// # Panics
    ///
    /// Panics if either code is out of range, or the product is not in the
    /// group (which would mean the closure is broken).
    pub fn multiply(&self, a: usize, b: usize) -> usize {
        match self.try_multiply(a, b) {
            Ok(code) => code,
            Err(_) => panic!("Product of {} and {} is not in the group", a, b),
        }
    }

    /// Code of `a` raised to `exp`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`multiply`](Self::multiply).
    pub fn power(&self, a: usize, exp: usize) -> usize {
        let m = self.field.mpow(&self.matrices[a], exp);
        match self.code_of(&m) {
            Some(code) => code,
            None => panic!("Power {} of {} is not in the group", exp, a),
        }
    }

    /// Order of an element, `None` only for a broken closure.
    pub fn order_of(&self, code: usize) -> Option<usize> {
        self.field.order_of(&self.matrices[code])
    }

    /// Code of `P · matrix[i]`.
    pub fn connection(&self, i: usize) -> usize {
        self.connections[i]
    }

    pub fn connections(&self) -> &[usize] {
        &self.connections
    }

    /// Rotate `i` by `d` steps within its block.
    pub fn spin(&self, i: usize, d: usize) -> usize {
        let n = self.rotations();
        n * (i / n) + (i + d) % n
    }

    /// Evaluate a generator word against this group's generators.
    pub fn word_matrix(&self, word: &str) -> Matrix {
        words::word_to_matrix(&self.field, &self.generators, word)
    }

    /// A word over `R` and `P` whose matrix is element `i`.
    pub fn decode_path(&self, mut i: usize) -> Result<String> {
        if !self.shape.is_planar() {
            return Err(QuotientError::RequiresPlanar);
        }
        let target = i;
        let n = self.rotations();
        let limit = self.len() * n;
        let mut path = String::new();
        while i != 0 {
            if path.len() > limit {
                return Err(QuotientError::UndecodablePath(target));
            }
            if i % n != 0 {
                i -= 1;
                path.push('R');
            } else {
                i = self.connections[i];
                path.push('P');
            }
        }
        Ok(path)
    }

    /// Entries mixing a residue with a `w` part, across every element. Always
    /// zero in the pure encoding, which cannot express them.
    pub fn mixed_entry_count(&self) -> usize {
        if self.field.arithmetic() == Arithmetic::Pure {
            return 0;
        }
        self.matrices
            .iter()
            .flat_map(|m| m.entries())
            .filter(|&e| !self.field.is_pure(e))
            .count()
    }
}
