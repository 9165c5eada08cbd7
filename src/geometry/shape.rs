// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tiling shapes and the rendering variation of a pattern.

use std::fmt;

use super::constants::{SPATIAL_LOCAL_GROUP, SPATIAL_ROTATIONS, SPATIAL_VALENCE};

/// A regular tiling whose symmetry group is reduced modulo a prime.
///
/// Planar tilings are written `{rotations,valence}`: faces with `rotations`
/// sides, `valence` of them around every vertex. The only spatial tiling is
/// the order-5 cubic honeycomb `{4,3,5}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TilingShape {
    Planar { rotations: u8, valence: u8 },
    Spatial,
}

impl TilingShape {
    /// Create a planar shape.
    ///
    /// # Panics
    ///
    /// Panics if either parameter is below 3.
    pub const fn planar(rotations: u8, valence: u8) -> Self {
        assert!(rotations >= 3 && valence >= 3, "Degenerate tiling shape");
        TilingShape::Planar { rotations, valence }
    }

    pub fn is_planar(&self) -> bool {
        matches!(self, TilingShape::Planar { .. })
    }

    /// Geometric dimension: 2 or 3.
    pub fn dimension(&self) -> usize {
        match self {
            TilingShape::Planar { .. } => 2,
            TilingShape::Spatial => 3,
        }
    }

    /// Side length of the matrices representing the symmetry group.
    pub fn matrix_dim(&self) -> usize {
        self.dimension() + 1
    }

    /// Order of the rotation generator `R`.
    pub fn rotations(&self) -> usize {
        match self {
            TilingShape::Planar { rotations, .. } => *rotations as usize,
            TilingShape::Spatial => SPATIAL_ROTATIONS,
        }
    }

    /// Order of the product `P·R`.
    pub fn valence(&self) -> usize {
        match self {
            TilingShape::Planar { valence, .. } => *valence as usize,
            TilingShape::Spatial => SPATIAL_VALENCE,
        }
    }

    /// Order of the stabiliser of a cell: the closed group size is always a
    /// multiple of it.
    pub fn local_group(&self) -> usize {
        match self {
            TilingShape::Planar { rotations, .. } => 2 * *rotations as usize,
            TilingShape::Spatial => SPATIAL_LOCAL_GROUP,
        }
    }
}

impl fmt::Display for TilingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TilingShape::Planar { rotations, valence } => write!(f, "{{{},{}}}", rotations, valence),
            TilingShape::Spatial => write!(f, "{{4,3,5}}"),
        }
    }
}

/// How the cells of a planar pattern are laid out.
///
/// In the pure variation neighbouring faces are one step apart. The
/// bitruncated variation places a hexagon on every vertex, so crossing to the
/// neighbouring face costs two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variation {
    Pure,
    #[default]
    Bitruncated,
}

impl Variation {
    pub fn is_pure(self) -> bool {
        self == Variation::Pure
    }
}
