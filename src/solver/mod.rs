// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator search.
//!
//! Given a prime and a tiling shape, find matrices over Z_p (or Z_p[w]) that
//! realise the tiling's symmetry generators:
//!
//! - `R`: rotation about a cell, of order `rotations`
//! - `P`: a half-turn swapping neighbouring cells, of order 2
//! - `P·R` of order `valence`
//!
//! For planar shapes the search runs three modes in turn, each first over the
//! plain field and then over its quadratic extension:
//!
//! 1. `dual = 0`: `R` is a rotation by `cs = cos`, `sn = sin`, `P` a
//!    translation by `ch = cosh`, `sh = sinh`.
//! 2. `dual = 1`: as above with the two orders swapped, then `R := P·R`.
//! 3. `dual = 2`: brute-force isometry search, for fields of at most
//!    [`SolverConfig::isometry_field_limit`] elements.
//!
//! Spatial shapes only use the isometry search.

pub mod isometries;

use tracing::{debug, info, instrument};

use crate::error::{QuotientError, Result};
use crate::field::{Arithmetic, Elem, Field, Matrix, SquareRoots};
use crate::geometry::{TilingShape, DEFAULT_ISOMETRY_FIELD_LIMIT};
use crate::stats::{Counters, Statistics};

/// Search knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub arithmetic: Arithmetic,
    /// Let `cs` and `ch` range over the whole extension instead of the
    /// residues. Only meaningful with [`Arithmetic::General`].
    pub full_field_search: bool,
    pub isometry_field_limit: u32,
    /// Give up after this many candidates.
    pub search_budget: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            arithmetic: Arithmetic::default(),
            full_field_search: false,
            isometry_field_limit: DEFAULT_ISOMETRY_FIELD_LIMIT,
            search_budget: None,
        }
    }
}

impl SolverConfig {
    pub fn with_arithmetic(mut self, arithmetic: Arithmetic) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.search_budget = Some(budget);
        self
    }
}

/// Candidate counter that fails once its limit is reached.
#[derive(Debug, Clone)]
pub struct Budget {
    prime: u32,
    limit: Option<u64>,
    spent: u64,
}

impl Budget {
    pub fn new(prime: u32, limit: Option<u64>) -> Self {
        Budget { prime, limit, spent: 0 }
    }

    pub fn spend(&mut self) -> Result<()> {
        self.spent += 1;
        match self.limit {
            Some(budget) if self.spent > budget => Err(QuotientError::SearchBudgetExhausted {
                prime: self.prime,
                budget,
            }),
            _ => Ok(()),
        }
    }

    pub fn spent(&self) -> u64 {
        self.spent
    }
}

/// The matrices a solution provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSet {
    pub identity: Matrix,
    pub r: Matrix,
    pub p: Matrix,
    /// Extra generator `X`, present only for spatial patterns.
    pub x: Option<Matrix>,
}

impl GeneratorSet {
    pub fn planar(r: Matrix, p: Matrix) -> Self {
        GeneratorSet {
            identity: Matrix::identity(r.dim()),
            r,
            p,
            x: None,
        }
    }
}

/// Scalar parameters behind a solution. All zero except `wsquare` and `dual`
/// for isometry solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveParams {
    pub cs: Elem,
    pub sn: Elem,
    pub ch: Elem,
    pub sh: Elem,
    pub wsquare: Elem,
    pub dual: u8,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub shape: TilingShape,
    pub field: Field,
    pub generators: GeneratorSet,
    pub params: SolveParams,
    pub stats: Statistics,
}

impl Solution {
    /// True when none of the parameters mixes a residue with a `w` part.
    pub fn is_easy(&self) -> bool {
        let p = &self.params;
        [p.cs, p.sn, p.ch, p.sh].into_iter().all(|e| self.field.is_pure(e))
    }
}

/// Quarter turn in the plane of coordinates 1 and 2.
fn quarter_turn(field: &Field, dim: usize) -> Matrix {
    let mut x = Matrix::identity(dim);
    x[(1, 1)] = 0;
    x[(2, 2)] = 0;
    x[(1, 2)] = 1;
    x[(2, 1)] = field.minus_one();
    x
}

/// Find generators for `shape` over Z_`prime`.
///
/// Fails with [`QuotientError::NotPrime`] for a composite modulus,
/// [`QuotientError::NoSolutionForPrime`] when every mode is exhausted, and
/// [`QuotientError::SearchBudgetExhausted`] when the configured budget runs out.
#[instrument(level = "debug", skip(config))]
pub fn solve(prime: u32, shape: TilingShape, config: &SolverConfig) -> Result<Solution> {
    let mut fields = vec![Field::plain(prime, config.arithmetic)?];
    fields.extend(Field::quadratic(prime, config.arithmetic)?);

    let mut search = Search {
        shape,
        config,
        budget: Budget::new(prime, config.search_budget),
        stats: Statistics::new(),
    };
    let found = match shape {
        TilingShape::Planar { .. } => search.planar(&fields)?,
        TilingShape::Spatial => search.spatial(&fields)?,
    };
    match found {
        Some((field, generators, params)) => {
            info!(prime, %shape, %field, dual = params.dual, "solved");
            debug!(stats = %search.stats, "search statistics");
            Ok(Solution {
                shape,
                field,
                generators,
                params,
                stats: search.stats,
            })
        }
        None => {
            debug!(prime, %shape, "no solution");
            Err(QuotientError::NoSolutionForPrime { prime })
        }
    }
}

type Found = Option<(Field, GeneratorSet, SolveParams)>;

struct Search<'a> {
    shape: TilingShape,
    config: &'a SolverConfig,
    budget: Budget,
    stats: Statistics,
}

impl Search<'_> {
    fn planar(&mut self, fields: &[Field]) -> Result<Found> {
        for dual in 0..3 {
            for field in fields {
                let found = if dual == 2 {
                    self.isometric(field)?
                } else {
                    self.rotational(field, dual)?
                };
                if found.is_some() {
                    return Ok(found);
                }
            }
        }
        Ok(None)
    }

    fn spatial(&mut self, fields: &[Field]) -> Result<Found> {
        for field in fields {
            if let Some((f, mut generators, params)) = self.isometric(field)? {
                generators.x = Some(quarter_turn(field, self.shape.matrix_dim()));
                return Ok(Some((f, generators, params)));
            }
        }
        Ok(None)
    }

    fn has_order(&mut self, field: &Field, m: &Matrix, order: usize) -> bool {
        self.stats.increment(Counters::OrderChecks);
        field.check_order(m, order)
    }

    /// Rotation/translation formulas. `dual` swaps which generator carries
    /// which order.
    fn rotational(&mut self, field: &Field, dual: u8) -> Result<Found> {
        let dim = self.shape.matrix_dim();
        let w = dim - 1;
        let (first, second) = if dual == 0 {
            (self.shape.rotations(), self.shape.valence())
        } else {
            (self.shape.valence(), self.shape.rotations())
        };
        let candidates = if self.config.full_field_search && self.config.arithmetic == Arithmetic::General {
            field.elements()
        } else {
            field.residues()
        };
        let roots = SquareRoots::new(field);
        let id = Matrix::identity(dim);

        for cs in candidates.clone() {
            self.budget.spend()?;
            self.stats.increment(Counters::RotationCandidates);
            let Some(sn) = roots.get(field.sub(1, field.sqr(cs))) else {
                continue;
            };
            let mut r = id;
            r[(0, 0)] = cs;
            r[(1, 1)] = cs;
            r[(0, 1)] = sn;
            r[(1, 0)] = field.neg(sn);
            if !self.has_order(field, &r, first) || cs == 1 {
                continue;
            }
            for ch in candidates.clone().filter(|&ch| ch >= 2) {
                self.budget.spend()?;
                self.stats.increment(Counters::TranslationCandidates);
                let Some(sh) = roots.get(field.sub(field.sqr(ch), 1)) else {
                    continue;
                };
                let mut p = id;
                p[(0, 0)] = field.neg(ch);
                p[(0, w)] = field.neg(sh);
                p[(1, 1)] = field.minus_one();
                p[(w, 0)] = sh;
                p[(w, w)] = ch;
                let pr = field.mmul(&p, &r);
                if !self.has_order(field, &pr, second) {
                    continue;
                }
                let r = if dual > 0 { pr } else { r };
                let params = SolveParams {
                    cs,
                    sn,
                    ch,
                    sh,
                    wsquare: field.wsquare(),
                    dual,
                };
                return Ok(Some((*field, GeneratorSet::planar(r, p), params)));
            }
        }
        Ok(None)
    }

    /// Brute-force search among orthogonal matrices, small fields only.
    fn isometric(&mut self, field: &Field) -> Result<Found> {
        if field.order() > self.config.isometry_field_limit {
            return Ok(None);
        }
        let dim = self.shape.matrix_dim();
        let all = isometries::enumerate_isometries(field, dim, &mut self.budget, &mut self.stats)?;
        debug!(%field, count = all.len(), "enumerated isometries");
        let pair = isometries::find_generator_pair(
            field,
            &all,
            self.shape.rotations(),
            self.shape.valence(),
            &mut self.stats,
        );
        Ok(pair.map(|(x, y)| {
            let params = SolveParams {
                wsquare: field.wsquare(),
                dual: 2,
                ..SolveParams::default()
            };
            (*field, GeneratorSet::planar(x, y), params)
        }))
    }
}
