// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Marker tagging, including walks that disagree about an element.

mod common;

use common::{heptagonal_43, symmetric_group};
use field_quotient::pattern::{Marker, MarkerConflict, SeedPlanter};

#[test]
fn test_overlapping_walks_conflict() {
    let group = symmetric_group();
    let generators = *group.generators();
    let mut planter = SeedPlanter::new(&group);

    // Id, R, R² -> codes 0, 1, 2
    planter
        .walk(generators.identity, &generators.r, 3, 0, Some(Marker::Amethyst))
        .unwrap();
    // R, R·P -> codes 1, 4
    planter.walk(generators.r, &generators.p, 2, 0, Some(Marker::Emerald)).unwrap();

    let markers = planter.markers();
    assert_eq!(markers.get(0), Some(Marker::Amethyst));
    assert_eq!(markers.get(1), Some(Marker::Conflict));
    assert_eq!(markers.get(2), Some(Marker::Amethyst));
    assert_eq!(markers.get(4), Some(Marker::Emerald));
    assert_eq!(markers.get(3), None);
    assert_eq!(
        markers.conflicts(),
        &[MarkerConflict {
            node: 1,
            kept: Marker::Amethyst,
            rejected: Marker::Emerald,
        }]
    );
    assert_eq!(planter.take_seeds().len(), 5);
}

#[test]
fn test_repeated_walk_does_not_conflict() {
    let group = symmetric_group();
    let generators = *group.generators();
    let mut planter = SeedPlanter::new(&group);
    for _ in 0..2 {
        planter
            .walk(generators.identity, &generators.r, 6, 1, Some(Marker::Gold))
            .unwrap();
    }
    let markers = planter.into_markers();
    assert!(markers.conflicts().is_empty());
    assert_eq!(markers.count(Marker::Gold), 3);
}

#[test]
fn test_untagged_seeds_leave_no_marker() {
    let group = symmetric_group();
    let mut planter = SeedPlanter::new(&group);
    planter.plant(&group.generators().p, 0, None).unwrap();
    assert!(planter.markers().get(3).is_none());
}

#[test]
fn test_heptagonal_markers_are_consistent() {
    let pattern = heptagonal_43();
    let markers = pattern.analysis().unwrap().markers();
    assert_eq!(markers.len(), pattern.group_size());
    // The identity starts the first wall and P the second; a later walk may
    // still claim either.
    assert!(matches!(pattern.marker(0), Some(Marker::Amethyst | Marker::Conflict)));
    let p = pattern.code_of_p().unwrap();
    assert!(matches!(pattern.marker(p), Some(Marker::Emerald | Marker::Conflict)));
    for conflict in markers.conflicts() {
        assert_eq!(markers.get(conflict.node), Some(Marker::Conflict));
        assert_ne!(conflict.kept, conflict.rejected);
    }
    assert_eq!(markers.count(Marker::Conflict), {
        let mut nodes: Vec<usize> = markers.conflicts().iter().map(|c| c.node).collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes.len()
    });
}
