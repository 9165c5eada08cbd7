// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator words.
//!
//! A word is a string over the letters
//!
//! - `R`, `P`: the solved generators
//! - `x`, `y`, `z`: reflections negating coordinate 0, 1 or 2
//!
//! Letters are applied right to left, so `"RP"` is the matrix `R·P`. Any
//! other character is ignored.

use crate::field::{Field, Matrix};
use crate::solver::GeneratorSet;

/// Matrix for a single letter, if it is one.
fn letter_matrix(field: &Field, generators: &GeneratorSet, letter: char) -> Option<Matrix> {
    let reflection = |axis: usize| {
        let mut m = generators.identity;
        m[(axis, axis)] = field.minus_one();
        m
    };
    match letter {
        'R' => Some(generators.r),
        'P' => Some(generators.p),
        'x' => Some(reflection(0)),
        'y' => Some(reflection(1)),
        'z' => Some(reflection(2)),
        _ => None,
    }
}

/// Evaluate `word` to a matrix.
pub fn word_to_matrix(field: &Field, generators: &GeneratorSet, word: &str) -> Matrix {
    word.chars()
        .rev()
        .filter_map(|letter| letter_matrix(field, generators, letter))
        .fold(generators.identity, |acc, m| field.mmul(&m, &acc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Arithmetic;

    fn setup() -> (Field, GeneratorSet) {
        let field = Field::plain(7, Arithmetic::Pure).unwrap();
        let r = Matrix::from_rows(&[[0, 0, 1], [1, 0, 0], [0, 1, 0]]);
        let p = Matrix::from_rows(&[[0, 1, 0], [1, 0, 0], [0, 0, 1]]);
        (field, GeneratorSet::planar(r, p))
    }

    #[test]
    fn test_empty_word_is_identity() {
        let (field, g) = setup();
        assert!(word_to_matrix(&field, &g, "").is_identity());
        assert!(word_to_matrix(&field, &g, "RRR").is_identity());
    }

    #[test]
    fn test_word_order() {
        let (field, g) = setup();
        assert_eq!(word_to_matrix(&field, &g, "RP"), field.mmul(&g.r, &g.p));
        assert_ne!(word_to_matrix(&field, &g, "RP"), word_to_matrix(&field, &g, "PR"));
    }

    #[test]
    fn test_reflections_and_unknown_letters() {
        let (field, g) = setup();
        let y = word_to_matrix(&field, &g, "y");
        assert_eq!(y[(1, 1)], 6);
        assert_eq!(y[(0, 0)], 1);
        assert_eq!(word_to_matrix(&field, &g, "R-P?"), word_to_matrix(&field, &g, "RP"));
    }
}
