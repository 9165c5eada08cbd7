// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for field quotient patterns.

/// Ceiling of every distance field.
///
/// Distances are stored as `u8`; a node that is never reached keeps the value
/// `MAX_DIST - 1`, and bucket pushes at or beyond `MAX_DIST` are discarded.
pub const MAX_DIST: usize = 120;

/// Largest matrix dimension used by any pattern.
///
/// Planar patterns use 3x3 matrices (two spatial coordinates plus the
/// homogeneous one); spatial patterns use 4x4.
pub const MAX_DIM: usize = 4;

/// Fields with at most this many elements also try the brute-force isometry
/// search when the rotation formulas fail.
pub const DEFAULT_ISOMETRY_FIELD_LIMIT: u32 = 10;

/// Number of solvable primes the catalog keeps ready for each base geometry.
pub const CATALOG_MIN_PRIMES: usize = 6;

/// Starting value of the circumradius scan.
pub const CIRCUMRADIUS_SENTINEL: u8 = 99;

/// Rotations around a face of the cubic honeycomb.
pub const SPATIAL_ROTATIONS: usize = 4;

/// Faces meeting at each edge of the cubic honeycomb cell seen by the solver.
pub const SPATIAL_VALENCE: usize = 3;

/// Order of the symmetry group of a cube, the stabiliser of a spatial cell.
pub const SPATIAL_LOCAL_GROUP: usize = 24;
