// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Inverse table of a planar group, derived without inverting a matrix.
//!
//! The block layout makes inverses a recurrence over the generators. Two
//! auxiliary tables carry it:
//!
//! - `rrf[i]`: the code of `matrix[i] · R⁻¹`
//! - `rpf[i]`: the code of `matrix[i] · P`
//!
//! Both are filled from their value at the identity by following `spin` and
//! `connection`. Then `inverse(R·M) = inverse(M)·R⁻¹` and
//! `inverse(P·M) = inverse(M)·P` fill the inverse table the same way.

use tracing::{debug, warn};

use super::MatrixGroup;
use crate::error::{QuotientError, Result};

#[derive(Debug, Clone)]
pub struct CayleyGraph {
    inverses: Vec<usize>,
    rrf: Vec<usize>,
    rpf: Vec<usize>,
}

/// Fill `table` from `table[0]` via the `R` and `P` recurrences.
fn propagate(group: &MatrixGroup, table: &mut [usize]) {
    for i in 0..group.len() {
        table[group.spin(i, 1)] = group.spin(table[i], 1);
        table[group.connection(i)] = group.connection(table[i]);
    }
}

impl CayleyGraph {
    /// Derive and verify the inverse table.
    ///
    /// Fails with [`QuotientError::RequiresPlanar`] for spatial groups and
    /// [`QuotientError::InverseSelfCheckFailure`] if any derived inverse is
    /// wrong.
    pub fn derive(group: &MatrixGroup) -> Result<Self> {
        if !group.shape().is_planar() {
            return Err(QuotientError::RequiresPlanar);
        }
        let size = group.len();
        let n = group.rotations();

        let mut rrf = vec![0; size];
        rrf[0] = n - 1;
        propagate(group, &mut rrf);

        let mut rpf = vec![0; size];
        rpf[0] = n;
        propagate(group, &mut rpf);

        let mut inverses = vec![0; size];
        for i in 0..size {
            inverses[group.spin(i, 1)] = rrf[inverses[i]];
            inverses[group.connection(i)] = rpf[inverses[i]];
        }

        let failures = (0..size)
            .filter(|&i| group.try_multiply(i, inverses[i]).map_or(true, |code| code != 0))
            .count();
        if failures > 0 {
            warn!(failures, size, "inverse self-check failed");
            return Err(QuotientError::InverseSelfCheckFailure { failures, size });
        }
        debug!(size, "inverse table verified");
        Ok(CayleyGraph { inverses, rrf, rpf })
    }

    /// Code of the inverse of element `i`.
    pub fn inverse(&self, i: usize) -> usize {
        self.inverses[i]
    }

    pub fn inverses(&self) -> &[usize] {
        &self.inverses
    }

    /// Code of `matrix[i] · R⁻¹`.
    pub fn rotate_back(&self, i: usize) -> usize {
        self.rrf[i]
    }

    /// Code of `matrix[i] · P`.
    pub fn reflect_right(&self, i: usize) -> usize {
        self.rpf[i]
    }
}
