// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Square-root lookup for a [`Field`].

use super::{Arithmetic, Elem, Field};

/// Maps each square to one chosen root.
///
/// The table is filled by squaring every representable element in enumeration
/// order; when several roots share a square the last one written wins. In the
/// pure encoding squares are always residues, so only residues have roots.
#[derive(Debug, Clone)]
pub struct SquareRoots {
    table: Vec<Option<Elem>>,
}

impl SquareRoots {
    pub fn new(field: &Field) -> Self {
        let size = match field.arithmetic() {
            Arithmetic::Pure => field.prime() as usize,
            Arithmetic::General => field.order() as usize,
        };
        let mut table = vec![None; size];
        for k in field.elements() {
            table[field.sqr(k) as usize] = Some(k);
        }
        SquareRoots { table }
    }

    /// A root of `x`, or `None` when `x` is not a square.
    pub fn get(&self, x: Elem) -> Option<Elem> {
        usize::try_from(x).ok().and_then(|i| self.table.get(i).copied().flatten())
    }
}
