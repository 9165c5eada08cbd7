// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric vocabulary shared by every layer.
//!
//! - TilingShape: which regular tiling a pattern quotients
//! - Variation: pure or bitruncated cell layout
//! - constants: distance ceilings and search limits

pub mod constants;
pub mod shape;

// Re-export for convenience
pub use constants::*;
pub use shape::{TilingShape, Variation};
