// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered by the generator search. They are informational only and
//! travel with every [`Solution`](crate::solver::Solution).

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter, IntoStaticStr)]
#[repr(u8)]
pub enum Counters {
    /// `cs` values examined for the rotation generator.
    RotationCandidates,
    /// `ch` values examined for the translation generator.
    TranslationCandidates,
    /// Calls to the element order check.
    OrderChecks,
    /// Orthogonal matrices produced by the brute-force enumeration.
    IsometriesEnumerated,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    /// Increment the specified counter by `amount`.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_and_display() {
        let mut stats = Statistics::new();
        stats.increment(Counters::OrderChecks);
        stats.add(Counters::RotationCandidates, 4);
        assert_eq!(stats.get(Counters::OrderChecks), 1);
        assert_eq!(stats.get(Counters::RotationCandidates), 4);
        let text = stats.to_string();
        assert!(text.contains("RotationCandidates=4"));
        assert!(text.contains("OrderChecks=1"));
    }
}
