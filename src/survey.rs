// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Survey of a shape across a range of primes.
//!
//! For each prime the shape solves over, report the solver parameters, the
//! group size and its factorisation, and the orders of a few landmark words.

use std::fmt;

use tracing::{debug, info};

use crate::error::Result;
use crate::geometry::TilingShape;
use crate::group::MatrixGroup;
use crate::pattern::analysis::WALL_WORD;
use crate::pattern::PatternConfig;
use crate::solver::{self, SolveParams};

/// Words whose orders every survey line reports.
pub const SURVEY_WORDS: [&str; 3] = ["RRP", "RRRP", WALL_WORD];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyEntry {
    pub prime: u32,
    pub params: SolveParams,
    pub easy: bool,
    pub group_size: usize,
    /// Factors of the group size: the prime itself first when it divides
    /// the size, then the prime factors of the rest, smallest first.
    pub factors: Vec<usize>,
    /// Order of each of [`SURVEY_WORDS`].
    pub word_orders: Vec<Option<usize>>,
}

impl fmt::Display for SurveyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        write!(
            f,
            "p={} cs={} sn={} ch={} sh={} wsquare={} dual={} {} N={}",
            self.prime,
            p.cs,
            p.sn,
            p.ch,
            p.sh,
            p.wsquare,
            p.dual,
            if self.easy { "easy" } else { "hard" },
            self.group_size,
        )?;
        let factors: Vec<String> = self.factors.iter().map(usize::to_string).collect();
        write!(f, " = {}", factors.join("*"))?;
        for (word, order) in SURVEY_WORDS.iter().zip(&self.word_orders) {
            match order {
                Some(order) => write!(f, " |{}|={}", word, order)?,
                None => write!(f, " |{}|=?", word)?,
            }
        }
        Ok(())
    }
}

/// Prime factors of `n`, smallest first, with repetition.
pub fn factorize(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut k = 2;
    while k * k <= n {
        while n % k == 0 {
            factors.push(k);
            n /= k;
        }
        k += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Factor a group size built over `prime`, leading with `prime`.
pub fn size_factors(prime: u32, size: usize) -> Vec<usize> {
    let p = prime as usize;
    if p > 1 && size % p == 0 {
        let mut factors = vec![p];
        factors.extend(factorize(size / p));
        factors
    } else {
        factorize(size)
    }
}

/// Survey `shape` over every prime in `primes`.
///
/// Primes that do not solve are skipped; primes that solve but do not close
/// are logged and skipped. Non-recoverable errors abort the survey.
pub fn survey(
    shape: TilingShape,
    primes: impl IntoIterator<Item = u32>,
    config: &PatternConfig,
) -> Result<Vec<SurveyEntry>> {
    let mut entries = Vec::new();
    for prime in primes {
        let solution = match solver::solve(prime, shape, &config.solver) {
            Ok(solution) => solution,
            Err(err) if err.is_recoverable() => continue,
            Err(err) => return Err(err),
        };
        let group = match MatrixGroup::close(&solution, &config.seed_paths) {
            Ok(group) => group,
            Err(err) => {
                debug!(prime, %err, "solution does not close");
                continue;
            }
        };
        let word_orders = SURVEY_WORDS
            .iter()
            .map(|word| group.field().order_of(&group.word_matrix(word)))
            .collect();
        entries.push(SurveyEntry {
            prime,
            params: solution.params,
            easy: solution.is_easy(),
            group_size: group.len(),
            factors: size_factors(prime, group.len()),
            word_orders,
        });
    }
    let hard = entries.iter().filter(|entry| !entry.easy).count();
    info!(%shape, found = entries.len(), hard, "survey complete");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::is_prime;

    #[test]
    fn test_factorize() {
        assert_eq!(factorize(1), Vec::<usize>::new());
        assert_eq!(factorize(2), vec![2]);
        assert_eq!(factorize(39732), vec![2, 2, 3, 7, 11, 43]);
        assert_eq!(factorize(97), vec![97]);
    }

    #[test]
    fn test_size_factors_lead_with_prime() {
        assert_eq!(size_factors(43, 39732), vec![43, 2, 2, 3, 7, 11]);
        assert_eq!(size_factors(5, 12), vec![2, 2, 3]);
        assert_eq!(size_factors(3, 3), vec![3]);
    }

    #[test]
    fn test_survey_heptagonal_range() {
        let primes = (40..=44).filter(|&n| is_prime(n));
        let entries = survey(TilingShape::planar(7, 3), primes, &PatternConfig::default()).unwrap();
        let found: Vec<u32> = entries.iter().map(|entry| entry.prime).collect();
        assert!(found.contains(&43));
        let entry = entries.iter().find(|entry| entry.prime == 43).unwrap();
        assert_eq!(entry.group_size % 14, 0);
        assert_eq!(entry.factors.iter().product::<usize>(), entry.group_size);
        assert_eq!(entry.factors[0], 43);
        assert!(entry.to_string().contains(" = 43*"));
        assert_eq!(entry.word_orders.len(), 3);
        assert!(entry.word_orders.iter().all(Option::is_some));
        assert!(entry.to_string().starts_with("p=43 "));
    }

    #[test]
    fn test_survey_rejects_composite() {
        assert!(survey(TilingShape::planar(7, 3), [42], &PatternConfig::default()).is_err());
    }
}
