// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Landmark markers on group elements.
//!
//! Each element carries at most one marker. Tagging an element that already
//! carries a different marker turns it into [`Marker::Conflict`] and records
//! the disagreement; a conflict never reverts.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, IntoStaticStr)]
pub enum Marker {
    Amethyst,
    Emerald,
    Coast,
    Whirlpool,
    Statue,
    Sapphire,
    Shard,
    Gold,
    Conflict,
}

/// A tag that disagreed with the marker already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerConflict {
    pub node: usize,
    pub kept: Marker,
    pub rejected: Marker,
}

#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    markers: Vec<Option<Marker>>,
    conflicts: Vec<MarkerConflict>,
}

impl MarkerTable {
    pub fn new(size: usize) -> Self {
        MarkerTable {
            markers: vec![None; size],
            conflicts: Vec::new(),
        }
    }

    pub fn get(&self, node: usize) -> Option<Marker> {
        self.markers[node]
    }

    /// Tag `node`. Returns false if the tag conflicted.
    pub fn tag(&mut self, node: usize, marker: Marker) -> bool {
        match self.markers[node] {
            None => {
                self.markers[node] = Some(marker);
                true
            }
            Some(existing) if existing == marker => true,
            Some(existing) => {
                trace!(node, ?existing, ?marker, "marker conflict");
                self.markers[node] = Some(Marker::Conflict);
                self.conflicts.push(MarkerConflict {
                    node,
                    kept: existing,
                    rejected: marker,
                });
                false
            }
        }
    }

    /// Every disagreeing tag, in the order it happened.
    pub fn conflicts(&self) -> &[MarkerConflict] {
        &self.conflicts
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.markers.iter().filter(|&&m| m == Some(marker)).count()
    }

    pub fn nodes_with(&self, marker: Marker) -> impl Iterator<Item = usize> + '_ {
        self.markers
            .iter()
            .enumerate()
            .filter(move |(_, m)| **m == Some(marker))
            .map(|(node, _)| node)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
