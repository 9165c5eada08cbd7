// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distance fields over the cells of a planar quotient.
//!
//! A distance field assigns every group element the distance of its cell
//! from a set of seeds. All elements of a block (one cell, `rotations`
//! orientations) always share a distance. Distances are capped at
//! [`MAX_DIST`]; unreached nodes keep `MAX_DIST - 1`.

pub mod bucket;
pub mod virtual_dist;

use tracing::warn;

use crate::error::{QuotientError, Result};
use crate::geometry::{Variation, MAX_DIST};
use crate::group::MatrixGroup;

pub use bucket::BucketQueue;
pub use virtual_dist::{pairwise_distance, virtual_distance, CellKind, Position};

/// A starting node and its initial distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub node: usize,
    pub distance: u8,
}

impl Seed {
    pub fn new(node: usize, distance: u8) -> Self {
        Seed { node, distance }
    }
}

/// Result of one run of [`DistanceEngine::dijkstra`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    dists: Vec<u8>,
    radius: u8,
}

impl DistanceMap {
    /// Distance of element `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn get(&self, node: usize) -> u8 {
        self.dists[node]
    }

    /// Largest distance actually assigned.
    pub fn radius(&self) -> u8 {
        self.radius
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.dists
    }

    pub fn len(&self) -> usize {
        self.dists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dists.is_empty()
    }
}

/// Runs bucket-queue Dijkstra over the connection graph of a planar group.
#[derive(Debug, Clone, Copy)]
pub struct DistanceEngine<'g> {
    group: &'g MatrixGroup,
    variation: Variation,
}

impl<'g> DistanceEngine<'g> {
    /// Fails with [`QuotientError::RequiresPlanar`] for spatial groups, whose
    /// codes are not laid out in cell blocks.
    pub fn new(group: &'g MatrixGroup, variation: Variation) -> Result<Self> {
        if !group.shape().is_planar() {
            return Err(QuotientError::RequiresPlanar);
        }
        Ok(DistanceEngine { group, variation })
    }

    pub fn group(&self) -> &'g MatrixGroup {
        self.group
    }

    pub fn variation(&self) -> Variation {
        self.variation
    }

    /// Distances from `seeds`.
    ///
    /// Buckets are drained in increasing distance; a popped node already at
    /// that distance or closer is skipped, otherwise its whole block is
    /// assigned and its neighbours pushed. In the pure variation the
    /// neighbour across each edge is one step away; in the bitruncated
    /// variation it is two, and the face sharing the next vertex three.
    pub fn dijkstra(&self, seeds: impl IntoIterator<Item = Seed>) -> DistanceMap {
        let group = self.group;
        let n = group.rotations();
        let mut dists = vec![(MAX_DIST - 1) as u8; group.len()];
        let mut queue = BucketQueue::new(MAX_DIST);
        for seed in seeds {
            queue.push(seed.distance as usize, seed.node);
        }

        let mut radius = 0;
        for d in 0..MAX_DIST {
            while let Some(start) = queue.pop(d) {
                if dists[start] as usize <= d {
                    continue;
                }
                radius = d;
                let mut at = start;
                for _ in 0..n {
                    dists[at] = d as u8;
                    let across = group.connection(at);
                    match self.variation {
                        Variation::Pure => queue.push(d + 1, across),
                        Variation::Bitruncated => {
                            queue.push(d + 2, across);
                            queue.push(d + 3, group.connection(group.spin(across, 2)));
                        }
                    }
                    at = group.spin(at, 1);
                }
            }
        }
        if queue.overflow() > 0 {
            warn!(overflow = queue.overflow(), "distance pushes beyond the ceiling were dropped");
        }
        DistanceMap {
            dists,
            radius: radius as u8,
        }
    }
}
