// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Landmark analysis of a planar quotient.
//!
//! Starting from the origin cell, the analysis measures distance fields for
//! the heptagon and hexagon origins, walks the closed "wall" word to plant
//! walls and rivers, and records scalar landmarks such as the cell farthest
//! from the origin. Every walk tags the elements it visits with a
//! [`Marker`].

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use tracing::{debug, instrument, warn};

use super::markers::{Marker, MarkerTable};
use crate::distance::{DistanceEngine, DistanceMap, Seed};
use crate::error::{QuotientError, Result};
use crate::field::Matrix;
use crate::geometry::{Variation, CIRCUMRADIUS_SENTINEL};
use crate::group::{CayleyGraph, MatrixGroup};

/// Closed path of edges along which the wall runs.
pub const WALL_WORD: &str = "RRRPRRRRRPRRRP";
const WALL_START: &str = "RRRRPR";
const RIVER_PUSH: &str = "PRRPRRRRR";
const SIDE_STEP: &str = "PRRR";
const WHIRLPOOL_STEP: &str = "PRRRP";
const COAST_PHASE: usize = 7;
const WHIRLPOOL_PHASE: usize = 3;

/// The distance fields an analysis produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, IntoStaticStr)]
pub enum DistanceField {
    /// From the origin heptagon.
    Heptagon,
    /// From the hexagon at the origin's vertex.
    Hexagon,
    Wall,
    SecondaryWall,
    River,
    Flower,
    RiverLeft,
    RiverRight,
}

/// Scalar results of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmarks {
    /// Largest heptagon or hexagon distance.
    pub max_dist: u8,
    /// First block start of maximal distance whose neighbours are all one
    /// step closer.
    pub other_pole: usize,
    pub circumradius: u8,
    pub wall_id: usize,
    pub wall_order: usize,
    pub river_id: usize,
    /// One more than the inverse of the first element on the flower field's
    /// zero set, so 0 means "not found".
    pub flower_origin: usize,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    fields: Vec<DistanceMap>,
    markers: MarkerTable,
    landmarks: Landmarks,
}

impl Analysis {
    pub fn field(&self, which: DistanceField) -> &DistanceMap {
        &self.fields[which as usize]
    }

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }
}

/// Collects seeds for the next distance field and tags their elements.
///
/// Seeds accumulate until [`take_seeds`](Self::take_seeds); markers
/// accumulate for the planter's lifetime.
#[derive(Debug)]
pub struct SeedPlanter<'g> {
    group: &'g MatrixGroup,
    markers: MarkerTable,
    seeds: Vec<Seed>,
}

impl<'g> SeedPlanter<'g> {
    pub fn new(group: &'g MatrixGroup) -> Self {
        SeedPlanter {
            group,
            markers: MarkerTable::new(group.len()),
            seeds: Vec::new(),
        }
    }

    /// Seed the element of `m` at `distance`, tagging it if a marker is given.
    pub fn plant(&mut self, m: &Matrix, distance: u8, marker: Option<Marker>) -> Result<usize> {
        let node = self.group.lookup(m)?;
        self.seeds.push(Seed::new(node, distance));
        if let Some(marker) = marker {
            self.markers.tag(node, marker);
        }
        Ok(node)
    }

    /// Plant `start·stepᵏ` for `k` in `0..count` and return `start·step^count`.
    pub fn walk(
        &mut self,
        start: Matrix,
        step: &Matrix,
        count: usize,
        distance: u8,
        marker: Option<Marker>,
    ) -> Result<Matrix> {
        let field = *self.group.field();
        let mut w = start;
        for _ in 0..count {
            self.plant(&w, distance, marker)?;
            w = field.mmul(&w, step);
        }
        Ok(w)
    }

    pub fn take_seeds(&mut self) -> Vec<Seed> {
        std::mem::take(&mut self.seeds)
    }

    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    pub fn into_markers(self) -> MarkerTable {
        self.markers
    }
}

/// Walks the wall translates used for coasts and whirlpools.
fn plant_shoreline(
    planter: &mut SeedPlanter<'_>,
    group: &MatrixGroup,
    wall: &Matrix,
    wall_order: usize,
    coast: bool,
    whirlpool: bool,
) -> Result<()> {
    let field = group.field();
    let whirl_step = group.word_matrix(WHIRLPOOL_STEP);
    let mut w = group.word_matrix(WALL_START);
    for _ in 0..wall_order {
        w = field.mmul(&w, wall);
        for i in 0..wall_order {
            if coast && i == COAST_PHASE {
                planter.plant(&w, 0, Some(Marker::Coast))?;
            }
            if whirlpool && i == WHIRLPOOL_PHASE {
                planter.plant(&field.mmul(&whirl_step, &w), 0, Some(Marker::Whirlpool))?;
            }
            w = field.mmul(wall, &w);
        }
    }
    Ok(())
}

fn other_pole(group: &MatrixGroup, heptagon: &DistanceMap) -> usize {
    let n = group.rotations();
    let d = |i: usize| heptagon.get(i);
    let mut pole = 0;
    for start in (0..group.len()).step_by(n) {
        let first = d(group.connection(start));
        let all_closer = (0..n).all(|q| {
            let neighbour = d(group.connection(start + q));
            neighbour < d(start) && neighbour == first
        });
        if all_closer && d(start) > d(pole) {
            pole = start;
        }
    }
    pole
}

fn circumradius(group: &MatrixGroup, heptagon: &DistanceMap) -> u8 {
    let d = |i: usize| heptagon.get(i);
    let mut radius = CIRCUMRADIUS_SENTINEL;
    for i in 0..group.len() {
        for u in 2..4 {
            let here = d(i);
            if here < radius && d(group.connection(i)) < here && d(group.connection(group.spin(i, u))) < here {
                radius = here;
            }
        }
    }
    radius
}

/// First element `i` with `RIVER_PUSH·i == i·wallᵏ` for some `k` below the
/// wall order, or 0 if there is none.
fn find_river(group: &MatrixGroup, wall_id: usize, wall_order: usize) -> Result<usize> {
    let push = group.lookup(&group.word_matrix(RIVER_PUSH))?;
    for i in 0..group.len() {
        let target = group.try_multiply(push, i)?;
        let mut j = i;
        for _ in 0..wall_order {
            if target == j {
                return Ok(i);
            }
            j = group.try_multiply(j, wall_id)?;
        }
    }
    Ok(0)
}

/// Measure every distance field and landmark of a planar group.
///
/// Fails with [`QuotientError::RequiresPlanar`] for spatial groups and
/// [`QuotientError::UnknownElement`] if a landmark word leaves the group.
#[instrument(level = "debug", skip_all, fields(size = group.len()))]
pub fn analyze(group: &MatrixGroup, graph: &CayleyGraph, variation: Variation) -> Result<Analysis> {
    let engine = DistanceEngine::new(group, variation)?;
    let field = *group.field();
    let generators = *group.generators();
    let conn = |i: usize| group.connection(i);

    let heptagon = engine.dijkstra([Seed::new(0, 0)]);
    let hexagon = engine.dijkstra([
        Seed::new(0, 1),
        Seed::new(conn(3), 1),
        Seed::new(conn(4), 1),
        Seed::new(conn(group.spin(conn(3), 5)), 2),
        Seed::new(conn(2), 2),
        Seed::new(conn(5), 2),
    ]);
    let max_dist = heptagon.radius().max(hexagon.radius());
    let other_pole = other_pole(group, &heptagon);
    let circumradius = circumradius(group, &heptagon);

    let wall = group.word_matrix(WALL_WORD);
    let wall_order = field.order_of(&wall).ok_or(QuotientError::UnknownElement)?;
    let wall_id = group.lookup(&wall)?;
    debug!(wall_order, wall_id, "wall");

    let mut planter = SeedPlanter::new(group);
    planter.walk(generators.identity, &wall, wall_order, 0, Some(Marker::Amethyst))?;
    planter.walk(generators.p, &wall, wall_order, 0, Some(Marker::Emerald))?;
    let wall_field = engine.dijkstra(planter.take_seeds());

    let side_step = group.word_matrix(SIDE_STEP);
    let mut w = group.word_matrix(WALL_START);
    for _ in 0..wall_order {
        w = field.mmul(&w, &wall);
        for _ in 0..wall_order {
            planter.plant(&w, 0, None)?;
            planter.plant(&field.mmul(&side_step, &w), 1, None)?;
            w = field.mmul(&wall, &w);
        }
    }
    let secondary_wall = engine.dijkstra(planter.take_seeds());

    let river_id = find_river(group, wall_id, wall_order)?;
    let base = *group.matrix(river_id);
    let pr = group.word_matrix("PR");
    let prp = group.word_matrix("PRP");
    let pure = variation.is_pure();

    plant_shoreline(&mut planter, group, &wall, wall_order, true, true)?;
    let shoreline = engine.dijkstra(planter.take_seeds());

    let returned = planter.walk(base, &wall, wall_order, 0, Some(Marker::Statue))?;
    planter.walk(field.mmul(&generators.p, &returned), &wall, wall_order, 0, Some(Marker::Sapphire))?;
    planter.walk(field.mmul(&prp, &base), &wall, wall_order, 1, Some(Marker::Shard))?;
    planter.walk(field.mmul(&pr, &base), &wall, wall_order, 1, Some(Marker::Gold))?;
    let banks = engine.dijkstra(planter.take_seeds());

    let (river, flower) = if pure { (shoreline, banks) } else { (banks, shoreline) };
    let flower_origin = (0..group.len())
        .find(|&i| flower.get(i) == 0)
        .map_or(0, |i| graph.inverse(i) + 1);

    let (river_left, river_right) = if pure {
        plant_shoreline(&mut planter, group, &wall, wall_order, true, false)?;
        let left = engine.dijkstra(planter.take_seeds());
        plant_shoreline(&mut planter, group, &wall, wall_order, false, true)?;
        (left, engine.dijkstra(planter.take_seeds()))
    } else {
        let p_base = field.mmul(&generators.p, &base);
        planter.walk(base, &wall, wall_order, 0, Some(Marker::Statue))?;
        planter.walk(field.mmul(&pr, &base), &wall, wall_order, 0, Some(Marker::Gold))?;
        planter.walk(p_base, &wall, wall_order, 1, Some(Marker::Sapphire))?;
        let left = engine.dijkstra(planter.take_seeds());
        planter.walk(field.mmul(&prp, &base), &wall, wall_order, 0, Some(Marker::Shard))?;
        planter.walk(p_base, &wall, wall_order, 0, Some(Marker::Sapphire))?;
        planter.walk(base, &wall, wall_order, 1, Some(Marker::Statue))?;
        (left, engine.dijkstra(planter.take_seeds()))
    };

    let markers = planter.into_markers();
    if !markers.conflicts().is_empty() {
        let rejected: Vec<String> = Marker::iter()
            .filter_map(|marker| {
                let count = markers.conflicts().iter().filter(|c| c.rejected == marker).count();
                (count > 0).then(|| format!("{}={}", <&'static str>::from(marker), count))
            })
            .collect();
        warn!(
            conflicts = markers.conflicts().len(),
            rejected = %rejected.join(" "),
            "landmark walks disagreed"
        );
    }
    let landmarks = Landmarks {
        max_dist,
        other_pole,
        circumradius,
        wall_id,
        wall_order,
        river_id,
        flower_origin,
    };
    debug!(?landmarks, "analysis complete");

    let fields = vec![
        heptagon,
        hexagon,
        wall_field,
        secondary_wall,
        river,
        flower,
        river_left,
        river_right,
    ];
    debug_assert_eq!(fields.len(), DistanceField::COUNT);
    for (which, map) in DistanceField::iter().zip(&fields) {
        debug!(field = <&'static str>::from(which), radius = map.radius(), "distance field");
    }
    Ok(Analysis {
        fields,
        markers,
        landmarks,
    })
}
