// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! Building the {7,3} pattern over Z_43 takes a noticeable fraction of a
//! second, so each test binary builds it once per variation.

#![allow(dead_code)]

use std::sync::OnceLock;

use field_quotient::field::{Arithmetic, Field, Matrix};
use field_quotient::group::MatrixGroup;
use field_quotient::solver::GeneratorSet;
use field_quotient::{PatternConfig, QuotientPattern, TilingShape, Variation};

pub const HEPTAGONAL_PRIME: u32 = 43;

pub fn heptagonal() -> TilingShape {
    TilingShape::planar(7, 3)
}

fn build(variation: Variation) -> QuotientPattern {
    let config = PatternConfig::default().with_variation(variation);
    QuotientPattern::build(HEPTAGONAL_PRIME, heptagonal(), &config).expect("{7,3} builds over Z_43")
}

/// The bitruncated {7,3} pattern over Z_43.
pub fn heptagonal_43() -> &'static QuotientPattern {
    static PATTERN: OnceLock<QuotientPattern> = OnceLock::new();
    PATTERN.get_or_init(|| build(Variation::Bitruncated))
}

/// The pure {7,3} pattern over Z_43.
pub fn heptagonal_43_pure() -> &'static QuotientPattern {
    static PATTERN: OnceLock<QuotientPattern> = OnceLock::new();
    PATTERN.get_or_init(|| build(Variation::Pure))
}

/// S3 acting on three coordinates by permutation, over Z_7.
///
/// Codes: `[Id, R, R², P, R·P, R²·P]`.
pub fn symmetric_group() -> MatrixGroup {
    let field = Field::plain(7, Arithmetic::Pure).unwrap();
    let r = Matrix::from_rows(&[[0, 0, 1], [1, 0, 0], [0, 1, 0]]);
    let p = Matrix::from_rows(&[[0, 1, 0], [1, 0, 0], [0, 0, 1]]);
    MatrixGroup::from_generators(field, TilingShape::planar(3, 3), GeneratorSet::planar(r, p), vec![]).unwrap()
}

/// A deterministic spread of element codes across a group of `size`.
pub fn sample_codes(size: usize, count: usize) -> Vec<usize> {
    let step = (size / count).max(1);
    (0..size).step_by(step).take(count).collect()
}
