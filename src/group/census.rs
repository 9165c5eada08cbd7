// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Element orders across a closed group.

use std::collections::BTreeMap;

use super::MatrixGroup;

/// Elements sharing one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderClass {
    pub count: usize,
    /// The lowest code with this order.
    pub sample: usize,
}

impl MatrixGroup {
    /// How many elements have each order.
    pub fn order_census(&self) -> BTreeMap<usize, OrderClass> {
        let mut census: BTreeMap<usize, OrderClass> = BTreeMap::new();
        for code in 0..self.len() {
            let Some(order) = self.order_of(code) else {
                continue;
            };
            census
                .entry(order)
                .and_modify(|class| class.count += 1)
                .or_insert(OrderClass { count: 1, sample: code });
        }
        census
    }

    /// First non-identity element whose `n`-th power is the identity.
    pub fn find_subpath(&self, n: usize) -> Option<usize> {
        (1..self.len()).find(|&code| self.power(code, n) == 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::group::tests::symmetric_group;

    #[test]
    fn test_census_of_symmetric_group() {
        let census = symmetric_group().order_census();
        let summary: Vec<(usize, usize)> = census.iter().map(|(order, class)| (*order, class.count)).collect();
        assert_eq!(summary, vec![(1, 1), (2, 3), (3, 2)]);
        assert_eq!(census[&1].sample, 0);
        assert_eq!(census[&3].sample, 1);
        assert_eq!(census[&2].sample, 3);
    }

    #[test]
    fn test_find_subpath() {
        let g = symmetric_group();
        assert_eq!(g.find_subpath(3), Some(1));
        assert_eq!(g.find_subpath(2), Some(3));
        assert_eq!(g.find_subpath(5), None);
    }
}
