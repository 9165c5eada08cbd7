// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalog of solvable primes per base geometry.
//!
//! Each entry lists, in increasing order, the primes over which its shape
//! solves and closes, together with the number of cells of the resulting
//! quotient. The list grows on demand.

use tracing::{debug, warn};

use crate::error::{QuotientError, Result};
use crate::field::is_prime;
use crate::geometry::TilingShape;
use crate::group::{CayleyGraph, MatrixGroup};
use crate::pattern::PatternConfig;
use crate::solver;

/// How far past the last known prime [`FieldGeometry::next_prime`] looks.
const PRIME_SEARCH_SPAN: u32 = 10_000;

/// One solvable prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeInfo {
    pub prime: u32,
    /// Group size divided by the rotation count.
    pub cells: usize,
    /// True when the solution needed the quadratic extension.
    pub squared: bool,
}

/// The primes known for one base geometry, and the one currently chosen.
#[derive(Debug, Clone)]
pub struct FieldGeometry {
    base: TilingShape,
    primes: Vec<PrimeInfo>,
    dual_values: Vec<u8>,
    current_prime_id: usize,
}

impl FieldGeometry {
    pub fn new(base: TilingShape, current_prime_id: usize) -> Self {
        FieldGeometry {
            base,
            primes: Vec::new(),
            dual_values: Vec::new(),
            current_prime_id,
        }
    }

    pub fn base(&self) -> TilingShape {
        self.base
    }

    pub fn primes(&self) -> &[PrimeInfo] {
        &self.primes
    }

    /// The solver's `dual` mode for each prime, in the same order.
    pub fn dual_values(&self) -> &[u8] {
        &self.dual_values
    }

    pub fn current_prime_id(&self) -> usize {
        self.current_prime_id
    }

    /// The chosen prime, once enough primes are known.
    pub fn current_prime(&self) -> Option<&PrimeInfo> {
        self.primes.get(self.current_prime_id)
    }

    /// Choose a known prime by index. Returns false if out of range.
    pub fn select_prime(&mut self, id: usize) -> bool {
        if id < self.primes.len() {
            self.current_prime_id = id;
            true
        } else {
            false
        }
    }

    /// Find and record the next solvable prime after the last known one.
    ///
    /// Primes that fail to solve or close are skipped. Fails with
    /// [`QuotientError::NoSolutionForPrime`] if nothing solves within
    /// a wide span, naming the last prime tried.
    pub fn next_prime(&mut self, config: &PatternConfig) -> Result<PrimeInfo> {
        let start = self.primes.last().map_or(2, |info| info.prime + 1);
        let mut last_tried = start;
        for candidate in (start..start + PRIME_SEARCH_SPAN).filter(|&n| is_prime(n)) {
            last_tried = candidate;
            let solution = match solver::solve(candidate, self.base, &config.solver) {
                Ok(solution) => solution,
                Err(err) if err.is_recoverable() => continue,
                Err(err) => return Err(err),
            };
            let built = MatrixGroup::close(&solution, &config.seed_paths).and_then(|group| {
                if group.shape().is_planar() {
                    CayleyGraph::derive(&group)?;
                }
                Ok(group)
            });
            let group = match built {
                Ok(group) => group,
                Err(err) => {
                    warn!(prime = candidate, %err, "solved prime does not build");
                    continue;
                }
            };
            let info = PrimeInfo {
                prime: candidate,
                cells: group.len() / group.rotations(),
                squared: solution.field.is_extended(),
            };
            debug!(base = %self.base, ?info, "catalog prime");
            self.record(info, solution.params.dual);
            return Ok(info);
        }
        Err(QuotientError::NoSolutionForPrime { prime: last_tried })
    }

    pub(super) fn record(&mut self, info: PrimeInfo, dual: u8) {
        self.primes.push(info);
        self.dual_values.push(dual);
    }

    /// Grow the list to at least `count` primes.
    pub fn ensure_primes(&mut self, count: usize, config: &PatternConfig) -> Result<()> {
        while self.primes.len() < count {
            self.next_prime(config)?;
        }
        Ok(())
    }
}

/// All base geometries that support a field change.
#[derive(Debug, Clone)]
pub struct Catalog {
    geometries: Vec<FieldGeometry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            geometries: vec![
                FieldGeometry::new(TilingShape::planar(7, 3), 4),
                FieldGeometry::new(TilingShape::planar(8, 3), 1),
                FieldGeometry::new(TilingShape::planar(5, 4), 1),
                FieldGeometry::new(TilingShape::planar(6, 4), 5),
                FieldGeometry::new(TilingShape::planar(7, 4), 1),
            ],
        }
    }
}

impl Catalog {
    pub fn geometries(&self) -> &[FieldGeometry] {
        &self.geometries
    }

    pub fn get(&self, index: usize) -> Option<&FieldGeometry> {
        self.geometries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FieldGeometry> {
        self.geometries.get_mut(index)
    }

    /// Index of the entry for `shape`.
    pub fn position(&self, shape: TilingShape) -> Option<usize> {
        self.geometries.iter().position(|g| g.base == shape)
    }
}
