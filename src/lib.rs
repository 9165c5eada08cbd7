// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finite quotients of regular hyperbolic tilings.
//!
//! The symmetry group of a regular tiling such as `{7,3}` is infinite, but its
//! generators can be written as matrices over a finite field. Reducing modulo
//! a prime folds the tiling onto a finite set of cells: a field quotient. This
//! crate finds those matrices, closes the finite group they generate, and
//! precomputes the tables needed to navigate and measure the quotient.
//!
//! # Architecture
//!
//! The implementation is a strict pipeline; each stage consumes the previous
//! stage's output and is immutable afterwards.
//!
//! ## Construction
//!
//! 1. [`field`]: arithmetic over Z_p and Z_p[w], matrices, square roots
//! 2. [`solver`]: search for generator matrices `R` and `P`
//! 3. [`group`]: closure to a coded element list, cell adjacency, inverses
//! 4. [`distance`]: bucket-queue distance fields over cells
//! 5. [`pattern`]: the assembled pattern with its landmark analysis
//!
//! ## Use
//!
//! - [`manager`]: picks the prime per shape, caches patterns, answers queries
//! - [`survey`]: tabulates solutions across a prime range
//!
//! # Example
//!
//! ```no_run
//! use field_quotient::{QuotientManager, TilingShape};
//!
//! let mut manager = QuotientManager::default();
//! let pattern = manager.select(TilingShape::planar(7, 3)).unwrap();
//! assert_eq!(pattern.prime(), 43);
//! let r = manager.code_of_r().unwrap().unwrap();
//! let inverse = manager.inverse_of(r).unwrap();
//! assert_eq!(manager.multiply(r, inverse).unwrap(), 0);
//! ```

pub mod distance;
pub mod error;
pub mod field;
pub mod geometry;
pub mod group;
pub mod manager;
pub mod pattern;
pub mod solver;
pub mod stats;
pub mod survey;

// Re-export commonly used types
pub use error::{QuotientError, Result};
pub use field::{Arithmetic, Field, Matrix};
pub use geometry::{TilingShape, Variation};
pub use manager::{ManagerConfig, QuotientManager};
pub use pattern::{PatternConfig, QuotientPattern};
pub use solver::{solve, Solution, SolverConfig};
