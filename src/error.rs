// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building field quotient patterns.
//!
//! Two kinds of failure are recoverable: an unsolvable prime (the caller moves
//! on to the next candidate) and an exhausted search budget. Everything else
//! aborts pattern construction, so a broken pattern is never published.

use thiserror::Error;

use crate::geometry::TilingShape;

/// Errors raised while solving, closing, or analysing a quotient pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotientError {
    /// The modulus handed to the solver is not prime (caller contract violation).
    #[error("{0} is not a prime")]
    NotPrime(u32),

    /// No generator pair with the required orders exists over this prime.
    #[error("no generator solution exists over Z_{prime}")]
    NoSolutionForPrime { prime: u32 },

    /// The configured candidate budget ran out before the search finished.
    #[error("search over Z_{prime} gave up after {budget} candidates")]
    SearchBudgetExhausted { prime: u32, budget: u64 },

    /// Group closure produced a size that is not a multiple of the local group.
    #[error("closure produced {size} elements, not a multiple of the local group order {local_group}")]
    ClosureSizeMismatch { size: usize, local_group: usize },

    /// The derived inverse table failed `multiply(i, inverse[i]) == identity`.
    #[error("inverse table is wrong for {failures} of {size} elements")]
    InverseSelfCheckFailure { failures: usize, size: usize },

    /// A matrix that must belong to the closed group has no code.
    #[error("matrix is not an element of the closed group")]
    UnknownElement,

    /// The generator word leading to this element could not be reconstructed.
    #[error("no generator word reaches element {0}")]
    UndecodablePath(usize),

    /// The operation only exists for two-dimensional patterns.
    #[error("operation requires a two-dimensional pattern")]
    RequiresPlanar,

    /// No quotient pattern is known for this tiling shape.
    #[error("no quotient pattern is known for {0}")]
    UnsupportedShape(TilingShape),

    /// The field-change catalog has no entry at this index.
    #[error("no catalog entry at index {0}")]
    UnknownCatalogEntry(usize),

    /// A query was made before any pattern was selected.
    #[error("no quotient pattern is active")]
    NoActivePattern,
}

impl QuotientError {
    /// True for failures that only mean "try the next prime".
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuotientError::NoSolutionForPrime { .. } | QuotientError::SearchBudgetExhausted { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuotientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuotientError::ClosureSizeMismatch {
            size: 15,
            local_group: 14,
        };
        assert!(err.to_string().contains("15"));
        assert!(err.to_string().contains("14"));

        let err = QuotientError::UnsupportedShape(TilingShape::planar(3, 3));
        assert!(err.to_string().contains("{3,3}"));
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(QuotientError::NoSolutionForPrime { prime: 2 }.is_recoverable());
        assert!(QuotientError::SearchBudgetExhausted { prime: 5, budget: 1 }.is_recoverable());
        assert!(!QuotientError::NotPrime(4).is_recoverable());
        assert!(!QuotientError::InverseSelfCheckFailure { failures: 1, size: 14 }.is_recoverable());
    }
}
