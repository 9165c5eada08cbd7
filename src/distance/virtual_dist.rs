// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distances to positions that are not cell centres.
//!
//! A bitruncated pattern has two kinds of cell: the heptagons (one per block)
//! and the hexagons sitting on the vertices between three of them. Hexagons
//! have no code of their own; a hexagon is named by the block element whose
//! vertex it covers, and its distance is reconstructed from its three
//! neighbouring heptagons.

use super::DistanceMap;
use crate::geometry::MAX_DIST;
use crate::group::{CayleyGraph, MatrixGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Heptagon,
    Hexagon,
}

/// A cell of a bitruncated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub node: usize,
    pub kind: CellKind,
}

impl Position {
    pub fn heptagon(node: usize) -> Self {
        Position {
            node,
            kind: CellKind::Heptagon,
        }
    }

    pub fn hexagon(node: usize) -> Self {
        Position {
            node,
            kind: CellKind::Hexagon,
        }
    }
}

/// Distance of `position` according to `table`.
///
/// A heptagon reads its own entry. A hexagon takes one more than its nearest
/// adjacent heptagon, with a one-step shortcut when it sits in a corner
/// between nearby heptagons, and also considers three heptagons two steps
/// away.
pub fn virtual_distance(group: &MatrixGroup, position: Position, table: &DistanceMap) -> u32 {
    let node = position.node;
    let d = |i: usize| table.get(i) as u32;
    let conn = |i: usize| group.connection(i);
    let spin = |i: usize, k: usize| group.spin(i, k);

    if position.kind == CellKind::Heptagon {
        return d(node);
    }
    let ma = d(node);
    let mb = d(conn(spin(node, 3)));
    let mc = d(conn(spin(node, 4)));
    let m = (MAX_DIST as u32).min(1 + ma).min(1 + mb).min(1 + mc);
    if m <= 2 && ma + mb + mc <= m * 3 - 2 {
        return m - 1;
    }
    m.min(2 + d(conn(spin(node, 2))))
        .min(2 + d(conn(spin(node, 5))))
        .min(2 + d(conn(spin(conn(spin(node, 3)), 5))))
}

/// Distance between two positions.
///
/// Same node: 0 for the same kind, 1 otherwise. Otherwise `a` is moved by
/// `b`'s inverse, which takes `b` to the origin, and looked up in the table
/// measured from the origin cell of `b`'s kind.
pub fn pairwise_distance(
    group: &MatrixGroup,
    graph: &CayleyGraph,
    a: Position,
    b: Position,
    heptagon_table: &DistanceMap,
    hexagon_table: &DistanceMap,
) -> u32 {
    if a.node == b.node {
        return if a.kind == b.kind { 0 } else { 1 };
    }
    let mut a = a;
    if b.node != 0 {
        a.node = group.multiply(a.node, graph.inverse(b.node));
    }
    let table = match b.kind {
        CellKind::Heptagon => heptagon_table,
        CellKind::Hexagon => hexagon_table,
    };
    virtual_distance(group, a, table)
}
