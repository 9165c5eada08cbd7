// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-ceiling bucket queue for small integer distances.

/// One LIFO stack of nodes per distance below the ceiling.
///
/// Pushes at or beyond the ceiling are dropped and counted.
#[derive(Debug, Clone)]
pub struct BucketQueue {
    buckets: Vec<Vec<usize>>,
    overflow: usize,
}

impl BucketQueue {
    pub fn new(ceiling: usize) -> Self {
        BucketQueue {
            buckets: vec![Vec::new(); ceiling],
            overflow: 0,
        }
    }

    pub fn ceiling(&self) -> usize {
        self.buckets.len()
    }

    pub fn push(&mut self, distance: usize, node: usize) {
        match self.buckets.get_mut(distance) {
            Some(bucket) => bucket.push(node),
            None => self.overflow += 1,
        }
    }

    /// Most recently pushed node at `distance`.
    pub fn pop(&mut self, distance: usize) -> Option<usize> {
        self.buckets.get_mut(distance).and_then(Vec::pop)
    }

    /// Pushes dropped for exceeding the ceiling.
    pub fn overflow(&self) -> usize {
        self.overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_within_bucket() {
        let mut queue = BucketQueue::new(4);
        queue.push(1, 10);
        queue.push(1, 11);
        queue.push(0, 5);
        assert_eq!(queue.pop(0), Some(5));
        assert_eq!(queue.pop(0), None);
        assert_eq!(queue.pop(1), Some(11));
        assert_eq!(queue.pop(1), Some(10));
    }

    #[test]
    fn test_overflow_is_counted() {
        let mut queue = BucketQueue::new(2);
        queue.push(2, 0);
        queue.push(7, 1);
        assert_eq!(queue.overflow(), 2);
        assert_eq!(queue.pop(2), None);
        assert_eq!(queue.ceiling(), 2);
    }
}
