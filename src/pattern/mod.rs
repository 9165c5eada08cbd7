// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A complete field quotient pattern.
//!
//! [`QuotientPattern::build`] runs the whole pipeline for one prime and shape:
//!
//! 1. solve for generators
//! 2. close the group, aliasing by any seed words
//! 3. derive the inverse table (planar only)
//! 4. measure distance fields and landmarks (planar only)
//!
//! The result is immutable; every query after construction is pure integer
//! arithmetic on precomputed tables.

pub mod analysis;
pub mod markers;

use tracing::{info, instrument};

use crate::distance::{pairwise_distance, DistanceMap, Position};
use crate::error::Result;
use crate::field::Field;
use crate::geometry::{TilingShape, Variation};
use crate::group::{CayleyGraph, MatrixGroup};
use crate::solver::{self, Solution, SolverConfig};

pub use analysis::{analyze, Analysis, DistanceField, Landmarks, SeedPlanter};
pub use markers::{Marker, MarkerConflict, MarkerTable};

/// Everything that shapes a pattern besides the prime and the tiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    pub solver: SolverConfig,
    pub variation: Variation,
    /// Generator words whose matrices are identified with the identity
    /// coset, giving a smaller quotient.
    ///
    /// For a planar pattern the seeds must generate a normal subgroup;
    /// otherwise the quotient has no consistent inverses and the build fails
    /// with [`InverseSelfCheckFailure`](crate::QuotientError::InverseSelfCheckFailure).
    pub seed_paths: Vec<String>,
}

impl PatternConfig {
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variation = variation;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}

#[derive(Debug, Clone)]
pub struct QuotientPattern {
    solution: Solution,
    variation: Variation,
    group: MatrixGroup,
    graph: Option<CayleyGraph>,
    analysis: Option<Analysis>,
}

impl QuotientPattern {
    /// Build the pattern for `shape` over Z_`prime`.
    #[instrument(skip(config), fields(variation = ?config.variation))]
    pub fn build(prime: u32, shape: TilingShape, config: &PatternConfig) -> Result<Self> {
        let solution = solver::solve(prime, shape, &config.solver)?;
        QuotientPattern::from_solution(solution, config)
    }

    /// Finish the pipeline from an existing solution.
    pub fn from_solution(solution: Solution, config: &PatternConfig) -> Result<Self> {
        let group = MatrixGroup::close(&solution, &config.seed_paths)?;
        let (graph, analysis) = if group.shape().is_planar() {
            let graph = CayleyGraph::derive(&group)?;
            let analysis = analyze(&group, &graph, config.variation)?;
            (Some(graph), Some(analysis))
        } else {
            (None, None)
        };
        info!(
            prime = solution.field.prime(),
            shape = %solution.shape,
            size = group.len(),
            "pattern built"
        );
        Ok(QuotientPattern {
            solution,
            variation: config.variation,
            group,
            graph,
            analysis,
        })
    }

    pub fn prime(&self) -> u32 {
        self.solution.field.prime()
    }

    pub fn shape(&self) -> TilingShape {
        self.solution.shape
    }

    pub fn field(&self) -> &Field {
        &self.solution.field
    }

    pub fn variation(&self) -> Variation {
        self.variation
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn group(&self) -> &MatrixGroup {
        &self.group
    }

    /// Inverse table; planar patterns only.
    pub fn cayley(&self) -> Option<&CayleyGraph> {
        self.graph.as_ref()
    }

    /// Distance fields and landmarks; planar patterns only.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    pub fn group_size(&self) -> usize {
        self.group.len()
    }

    /// Number of cells: one per block of rotations.
    pub fn cells(&self) -> usize {
        self.group.len() / self.group.rotations()
    }

    /// See [`MatrixGroup::multiply`].
    pub fn multiply(&self, a: usize, b: usize) -> usize {
        self.group.multiply(a, b)
    }

    pub fn inverse_of(&self, i: usize) -> Option<usize> {
        self.graph.as_ref().map(|graph| graph.inverse(i))
    }

    pub fn code_of_r(&self) -> Option<usize> {
        self.group.code_of(&self.solution.generators.r)
    }

    pub fn code_of_p(&self) -> Option<usize> {
        self.group.code_of(&self.solution.generators.p)
    }

    /// Code of the spatial generator `X`, if it has one.
    pub fn code_of_x(&self) -> Option<usize> {
        self.solution.generators.x.and_then(|x| self.group.code_of(&x))
    }

    pub fn distance_map(&self, which: DistanceField) -> Option<&DistanceMap> {
        self.analysis.as_ref().map(|analysis| analysis.field(which))
    }

    pub fn distance(&self, which: DistanceField, i: usize) -> Option<u8> {
        self.distance_map(which).map(|map| map.get(i))
    }

    pub fn wall_distance_of(&self, i: usize) -> Option<u8> {
        self.distance(DistanceField::Wall, i)
    }

    pub fn marker(&self, i: usize) -> Option<Marker> {
        self.analysis.as_ref().and_then(|analysis| analysis.markers().get(i))
    }

    pub fn landmarks(&self) -> Option<&Landmarks> {
        self.analysis.as_ref().map(Analysis::landmarks)
    }

    /// Distance between two cells of a planar pattern.
    pub fn distance_between(&self, a: Position, b: Position) -> Option<u32> {
        let graph = self.graph.as_ref()?;
        let analysis = self.analysis.as_ref()?;
        Some(pairwise_distance(
            &self.group,
            graph,
            a,
            b,
            analysis.field(DistanceField::Heptagon),
            analysis.field(DistanceField::Hexagon),
        ))
    }

    /// First non-identity element whose order divides the prime, with that
    /// prime.
    pub fn subpath(&self) -> Option<(usize, usize)> {
        let n = self.prime() as usize;
        self.group.find_subpath(n).map(|id| (id, n))
    }
}
