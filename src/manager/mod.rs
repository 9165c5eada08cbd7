// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern selection and caching.
//!
//! The manager maps each tiling shape to the prime its quotient is built
//! over, builds patterns on demand, and answers queries against the active
//! one. Patterns are built in full before they replace anything, so a failed
//! build leaves the previous state untouched.

pub mod catalog;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::distance::Position;
use crate::error::{QuotientError, Result};
use crate::geometry::{TilingShape, Variation, CATALOG_MIN_PRIMES};
use crate::pattern::{PatternConfig, QuotientPattern};

pub use catalog::{Catalog, FieldGeometry, PrimeInfo};

/// The prime used for each supported shape.
pub fn required_prime(shape: TilingShape) -> Option<u32> {
    match shape {
        TilingShape::Spatial => Some(5),
        TilingShape::Planar { rotations: 8, valence: 3 } => Some(17),
        TilingShape::Planar { rotations: 5, valence: 4 } => Some(11),
        TilingShape::Planar {
            rotations: 6 | 7,
            valence: 4,
        } => Some(13),
        TilingShape::Planar { rotations: 7, valence: 3 } => Some(43),
        TilingShape::Planar { .. } => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerConfig {
    pub pattern: PatternConfig,
}

/// A pattern chosen through the catalog instead of the fixed prime table.
#[derive(Debug, Clone)]
struct FieldChange {
    index: usize,
    pattern: Arc<QuotientPattern>,
}

#[derive(Debug, Default)]
pub struct QuotientManager {
    config: ManagerConfig,
    cache: HashMap<TilingShape, Arc<QuotientPattern>>,
    active: Option<TilingShape>,
    catalog: Catalog,
    field_change: Option<FieldChange>,
}

impl QuotientManager {
    pub fn new(config: ManagerConfig) -> Self {
        QuotientManager {
            config,
            ..QuotientManager::default()
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Make `shape` active, building its pattern unless a matching one is
    /// cached.
    ///
    /// Fails with [`QuotientError::UnsupportedShape`] for shapes outside the
    /// prime table, or with the build error; either way the previous state
    /// is kept.
    #[instrument(skip(self))]
    pub fn select(&mut self, shape: TilingShape) -> Result<Arc<QuotientPattern>> {
        if let Some(change) = &self.field_change {
            if change.pattern.shape() == shape {
                self.active = Some(shape);
                return Ok(Arc::clone(&change.pattern));
            }
        }
        let prime = required_prime(shape).ok_or(QuotientError::UnsupportedShape(shape))?;
        if let Some(pattern) = self.cache.get(&shape) {
            if pattern.prime() == prime {
                debug!(%shape, prime, "reusing cached pattern");
                self.active = Some(shape);
                return Ok(Arc::clone(pattern));
            }
        }
        let pattern = Arc::new(QuotientPattern::build(prime, shape, &self.config.pattern)?);
        self.cache.insert(shape, Arc::clone(&pattern));
        self.active = Some(shape);
        info!(%shape, prime, size = pattern.group_size(), "pattern selected");
        Ok(pattern)
    }

    /// The pattern queries run against.
    pub fn active(&self) -> Option<&Arc<QuotientPattern>> {
        let shape = self.active?;
        match &self.field_change {
            Some(change) if change.pattern.shape() == shape => Some(&change.pattern),
            _ => self.cache.get(&shape),
        }
    }

    pub fn cached(&self, shape: TilingShape) -> Option<&Arc<QuotientPattern>> {
        self.cache.get(&shape)
    }

    /// Switch every pattern to `variation`.
    ///
    /// The active pattern and any field-change pattern are rebuilt first;
    /// only if every rebuild succeeds is the cache cleared and the new
    /// patterns installed.
    pub fn set_variation(&mut self, variation: Variation) -> Result<()> {
        if variation == self.config.pattern.variation {
            return Ok(());
        }
        let config = self.config.pattern.clone().with_variation(variation);
        let rebuild = |pattern: &QuotientPattern| {
            QuotientPattern::build(pattern.prime(), pattern.shape(), &config).map(Arc::new)
        };
        let field_change = match &self.field_change {
            Some(change) => Some(FieldChange {
                index: change.index,
                pattern: rebuild(change.pattern.as_ref())?,
            }),
            None => None,
        };
        let overridden = |shape: TilingShape| {
            self.field_change
                .as_ref()
                .is_some_and(|change| change.pattern.shape() == shape)
        };
        let cached = match self
            .active
            .filter(|&shape| !overridden(shape))
            .and_then(|shape| self.cache.get(&shape))
        {
            Some(pattern) => Some(rebuild(pattern.as_ref())?),
            None => None,
        };

        self.config.pattern = config;
        self.cache.clear();
        if let Some(pattern) = cached {
            self.cache.insert(pattern.shape(), pattern);
        }
        if let Some(change) = &field_change {
            debug!(shape = %change.pattern.shape(), ?variation, "field change rebuilt");
        }
        self.field_change = field_change;
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Make the catalog entry `index` active at its chosen prime.
    ///
    /// The entry's prime list is grown to [`CATALOG_MIN_PRIMES`] first.
    /// Fails with [`QuotientError::UnknownCatalogEntry`] if the index is out
    /// of range.
    pub fn enable_field_change(&mut self, index: usize) -> Result<Arc<QuotientPattern>> {
        let config = self.config.pattern.clone();
        let geometry = self
            .catalog
            .get_mut(index)
            .ok_or(QuotientError::UnknownCatalogEntry(index))?;
        geometry.ensure_primes(CATALOG_MIN_PRIMES, &config)?;
        let shape = geometry.base();
        let prime = match geometry.current_prime() {
            Some(info) => info.prime,
            None => return Err(QuotientError::UnsupportedShape(shape)),
        };
        let pattern = Arc::new(QuotientPattern::build(prime, shape, &config)?);
        info!(%shape, prime, "field change enabled");
        self.field_change = Some(FieldChange {
            index,
            pattern: Arc::clone(&pattern),
        });
        self.active = Some(shape);
        Ok(pattern)
    }

    /// Choose a different prime for catalog entry `index`, rebuilding if a
    /// field change for that entry is active. A failed rebuild keeps the
    /// previous prime.
    pub fn set_catalog_prime(&mut self, index: usize, prime_id: usize) -> Result<()> {
        let config = self.config.pattern.clone();
        let geometry = self
            .catalog
            .get_mut(index)
            .ok_or(QuotientError::UnknownCatalogEntry(index))?;
        geometry.ensure_primes(prime_id + 1, &config)?;
        let previous = geometry.current_prime_id();
        geometry.select_prime(prime_id);
        if self.field_change.as_ref().is_some_and(|change| change.index == index) {
            if let Err(err) = self.enable_field_change(index) {
                if let Some(geometry) = self.catalog.get_mut(index) {
                    geometry.select_prime(previous);
                }
                return Err(err);
            }
        }
        Ok(())
    }

    /// Return to the fixed prime table.
    pub fn disable_field_change(&mut self) {
        if let Some(change) = self.field_change.take() {
            debug!(shape = %change.pattern.shape(), "field change disabled");
        }
    }

    pub fn field_change_index(&self) -> Option<usize> {
        self.field_change.as_ref().map(|change| change.index)
    }

    fn current(&self) -> Result<&QuotientPattern> {
        self.active().map(|pattern| pattern.as_ref()).ok_or(QuotientError::NoActivePattern)
    }

    fn checked(&self, i: usize) -> Result<&QuotientPattern> {
        let pattern = self.current()?;
        if i < pattern.group_size() {
            Ok(pattern)
        } else {
            Err(QuotientError::UnknownElement)
        }
    }

    pub fn group_size(&self) -> Result<usize> {
        Ok(self.current()?.group_size())
    }

    pub fn multiply(&self, a: usize, b: usize) -> Result<usize> {
        self.checked(a)?;
        self.checked(b)?.group().try_multiply(a, b)
    }

    pub fn inverse_of(&self, i: usize) -> Result<usize> {
        self.checked(i)?.inverse_of(i).ok_or(QuotientError::RequiresPlanar)
    }

    pub fn wall_distance_of(&self, i: usize) -> Result<u8> {
        self.checked(i)?.wall_distance_of(i).ok_or(QuotientError::RequiresPlanar)
    }

    pub fn code_of_r(&self) -> Result<Option<usize>> {
        Ok(self.current()?.code_of_r())
    }

    pub fn code_of_p(&self) -> Result<Option<usize>> {
        Ok(self.current()?.code_of_p())
    }

    pub fn code_of_x(&self) -> Result<Option<usize>> {
        Ok(self.current()?.code_of_x())
    }

    pub fn distance_between(&self, a: Position, b: Position) -> Result<u32> {
        self.checked(a.node)?;
        self.checked(b.node)?
            .distance_between(a, b)
            .ok_or(QuotientError::RequiresPlanar)
    }
}
