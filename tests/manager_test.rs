// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern selection, caching and the field-change catalog.

use std::sync::Arc;

use field_quotient::distance::Position;
use field_quotient::geometry::CATALOG_MIN_PRIMES;
use field_quotient::{ManagerConfig, QuotientError, QuotientManager, TilingShape, Variation};

#[test]
fn test_select_uses_prime_table() {
    let mut manager = QuotientManager::default();
    let pattern = manager.select(TilingShape::planar(5, 4)).unwrap();
    assert_eq!(pattern.prime(), 11);
    assert_eq!(manager.group_size().unwrap(), pattern.group_size());
    assert!(Arc::ptr_eq(manager.active().unwrap(), &pattern));
}

#[test]
fn test_reselect_reuses_cache() {
    let mut manager = QuotientManager::default();
    let first = manager.select(TilingShape::planar(7, 4)).unwrap();
    let other = manager.select(TilingShape::planar(6, 4)).unwrap();
    assert_eq!(other.prime(), 13);
    assert!(Arc::ptr_eq(manager.active().unwrap(), &other));

    let again = manager.select(TilingShape::planar(7, 4)).unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert!(manager.cached(TilingShape::planar(6, 4)).is_some());
}

#[test]
fn test_failed_select_keeps_active_pattern() {
    let mut manager = QuotientManager::default();
    let pattern = manager.select(TilingShape::planar(5, 4)).unwrap();
    let unsupported = TilingShape::planar(9, 9);
    assert_eq!(manager.select(unsupported).unwrap_err(), QuotientError::UnsupportedShape(unsupported));
    assert!(Arc::ptr_eq(manager.active().unwrap(), &pattern));
}

#[test]
fn test_queries_against_active_pattern() {
    let mut manager = QuotientManager::default();
    manager.select(TilingShape::planar(5, 4)).unwrap();
    let size = manager.group_size().unwrap();

    let r = manager.code_of_r().unwrap().unwrap();
    let p = manager.code_of_p().unwrap().unwrap();
    assert_eq!((r, p), (1, 5));
    assert_eq!(manager.code_of_x().unwrap(), None);
    assert_eq!(manager.multiply(p, p).unwrap(), 0);
    let r_inverse = manager.inverse_of(r).unwrap();
    assert_eq!(manager.multiply(r, r_inverse).unwrap(), 0);
    assert_eq!(manager.wall_distance_of(0).unwrap(), 0);
    assert_eq!(
        manager.distance_between(Position::heptagon(p), Position::heptagon(0)).unwrap(),
        2
    );
    assert_eq!(manager.multiply(size, 0), Err(QuotientError::UnknownElement));
    assert_eq!(manager.inverse_of(size), Err(QuotientError::UnknownElement));
}

#[test]
fn test_spatial_queries() {
    let mut manager = QuotientManager::default();
    let pattern = manager.select(TilingShape::Spatial).unwrap();
    assert_eq!(pattern.prime(), 5);
    assert!(manager.code_of_x().unwrap().is_some());
    assert_eq!(manager.inverse_of(0), Err(QuotientError::RequiresPlanar));
    assert_eq!(manager.wall_distance_of(0), Err(QuotientError::RequiresPlanar));
    assert_eq!(manager.multiply(0, 0).unwrap(), 0);
}

#[test]
fn test_set_variation_rebuilds_active() {
    let mut manager = QuotientManager::new(ManagerConfig::default());
    let bitruncated = manager.select(TilingShape::planar(7, 4)).unwrap();
    assert_eq!(bitruncated.variation(), Variation::Bitruncated);

    manager.set_variation(Variation::Pure).unwrap();
    let pure = Arc::clone(manager.active().unwrap());
    assert_eq!(pure.variation(), Variation::Pure);
    assert_eq!(pure.group_size(), bitruncated.group_size());
    assert!(!Arc::ptr_eq(&pure, &bitruncated));
    assert_eq!(manager.config().pattern.variation, Variation::Pure);
}

#[test]
fn test_field_change_catalog() {
    let mut manager = QuotientManager::default();
    let shape = TilingShape::planar(5, 4);
    let index = manager.catalog().position(shape).unwrap();
    let config = manager.config().pattern.clone();

    let geometry = manager.catalog_mut().get_mut(index).unwrap();
    geometry.ensure_primes(CATALOG_MIN_PRIMES, &config).unwrap();
    while geometry.primes().last().is_some_and(|info| info.prime < 11) {
        geometry.next_prime(&config).unwrap();
    }
    assert!(geometry.primes().len() >= CATALOG_MIN_PRIMES);
    assert_eq!(geometry.primes().len(), geometry.dual_values().len());
    assert!(geometry.primes().windows(2).all(|w| w[0].prime < w[1].prime));
    let eleven = geometry.primes().iter().position(|info| info.prime == 11).unwrap();

    manager.set_catalog_prime(index, eleven).unwrap();
    assert_eq!(manager.field_change_index(), None);
    let pattern = manager.enable_field_change(index).unwrap();
    assert_eq!(pattern.prime(), 11);
    assert_eq!(pattern.cells(), manager.catalog().get(index).unwrap().primes()[eleven].cells);
    assert_eq!(manager.field_change_index(), Some(index));
    assert!(Arc::ptr_eq(manager.active().unwrap(), &pattern));
    assert!(Arc::ptr_eq(&manager.select(shape).unwrap(), &pattern));
    assert!(manager.cached(shape).is_none());

    manager.disable_field_change();
    assert_eq!(manager.field_change_index(), None);
    let table = manager.select(shape).unwrap();
    assert_eq!(table.prime(), 11);
    assert!(!Arc::ptr_eq(&table, &pattern));
}

#[test]
fn test_set_variation_keeps_field_change() {
    let mut manager = QuotientManager::default();
    let shape = TilingShape::planar(5, 4);
    let index = manager.catalog().position(shape).unwrap();
    let config = manager.config().pattern.clone();
    let geometry = manager.catalog_mut().get_mut(index).unwrap();
    while !geometry.primes().iter().any(|info| info.prime == 11) {
        geometry.next_prime(&config).unwrap();
    }
    let eleven = geometry.primes().iter().position(|info| info.prime == 11).unwrap();
    manager.set_catalog_prime(index, eleven).unwrap();
    let bitruncated = manager.enable_field_change(index).unwrap();

    let other = manager.select(TilingShape::planar(7, 4)).unwrap();
    manager.set_variation(Variation::Pure).unwrap();
    assert_eq!(manager.field_change_index(), Some(index));
    let active = manager.active().unwrap();
    assert_eq!(active.shape(), TilingShape::planar(7, 4));
    assert_eq!(active.variation(), Variation::Pure);
    assert_eq!(active.prime(), other.prime());

    let pure = manager.select(shape).unwrap();
    assert_eq!(pure.prime(), 11);
    assert_eq!(pure.variation(), Variation::Pure);
    assert_eq!(pure.group_size(), bitruncated.group_size());
    assert!(!Arc::ptr_eq(&pure, &bitruncated));
    assert_eq!(manager.catalog().get(index).unwrap().current_prime_id(), eleven);
}
