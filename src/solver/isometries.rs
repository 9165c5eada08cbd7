// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force enumeration of orthogonal matrices over small fields.
//!
//! Used when the rotation formulas fail: the 2-D fallback for tiny fields and
//! every 3-D pattern.

use super::Budget;
use crate::error::Result;
use crate::field::{Elem, Field, Matrix};
use crate::stats::{Counters, Statistics};

type Vector = [Elem; 3];

fn dot(field: &Field, a: &Vector, b: &Vector) -> Elem {
    field.add(field.add(field.mul(a[0], b[0]), field.mul(a[1], b[1])), field.mul(a[2], b[2]))
}

/// Unit vectors, lexicographic with the first coordinate outermost.
fn unit_vectors(field: &Field) -> Vec<Vector> {
    let mut units = Vec::new();
    for a in field.elements() {
        for b in field.elements() {
            for c in field.elements() {
                let v = [a, b, c];
                if dot(field, &v, &v) == 1 {
                    units.push(v);
                }
            }
        }
    }
    units
}

/// Every 3x3 matrix with orthonormal columns, embedded in the top-left corner
/// of a `dim`-sized identity.
///
/// Each candidate column triple spends one unit of `budget`.
pub fn enumerate_isometries(
    field: &Field,
    dim: usize,
    budget: &mut Budget,
    stats: &mut Statistics,
) -> Result<Vec<Matrix>> {
    let units = unit_vectors(field);
    let mut found = Vec::new();
    for c0 in &units {
        for c1 in units.iter().filter(|c1| dot(field, c1, c0) == 0) {
            for c2 in &units {
                budget.spend()?;
                if dot(field, c2, c0) != 0 || dot(field, c2, c1) != 0 {
                    continue;
                }
                let mut m = Matrix::identity(dim);
                for (col, v) in [c0, c1, c2].into_iter().enumerate() {
                    for (row, &x) in v.iter().enumerate() {
                        m[(row, col)] = x;
                    }
                }
                found.push(m);
            }
        }
    }
    stats.add(Counters::IsometriesEnumerated, found.len() as u64);
    Ok(found)
}

/// First `(x, y)` among the isometries with `x` of order `rotations`, `y` an
/// involution and `x·y` of order `valence`.
pub fn find_generator_pair(
    field: &Field,
    isometries: &[Matrix],
    rotations: usize,
    valence: usize,
    stats: &mut Statistics,
) -> Option<(Matrix, Matrix)> {
    let mut has_order = |m: &Matrix, order: usize| {
        stats.increment(Counters::OrderChecks);
        field.check_order(m, order)
    };
    for x in isometries {
        if !has_order(x, rotations) {
            continue;
        }
        for y in isometries {
            if has_order(y, 2) && has_order(&field.mmul(x, y), valence) {
                return Some((*x, *y));
            }
        }
    }
    None
}
