//! Entries of the search frontier.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

/// A node waiting in the frontier.
///
/// `priority` orders the frontier: the tentative distance for Dijkstra,
/// the f-score for A*. `cost` is the distance from the origin at the
/// time the entry was pushed; an entry whose `cost` exceeds the best
/// recorded distance of its node is stale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub priority: OrderedFloat<f64>,
    pub cost: f64,
    pub node: NodeIndex,
}

impl FrontierEntry {
    pub fn new(priority: f64, cost: f64, node: NodeIndex) -> FrontierEntry {
        FrontierEntry {
            priority: OrderedFloat(priority),
            cost,
            node,
        }
    }

    /// Returns `true` if a shorter path to the node was recorded after
    /// this entry was pushed.
    pub fn is_stale(&self, best: &[f64]) -> bool {
        self.cost > best[self.node.index()]
    }
}

// Reversed so that `BinaryHeap` pops the lowest priority first. Ties go
// to the lowest node index, i.e. the lexicographically smallest city.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod frontier_tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn test_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::new(3.0, 3.0, NodeIndex::new(0)));
        heap.push(FrontierEntry::new(1.0, 1.0, NodeIndex::new(1)));
        heap.push(FrontierEntry::new(f64::INFINITY, 0.0, NodeIndex::new(2)));
        heap.push(FrontierEntry::new(2.0, 2.0, NodeIndex::new(3)));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop())
            .map(|entry| entry.node.index())
            .collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_ties_break_on_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::new(1.0, 1.0, NodeIndex::new(5)));
        heap.push(FrontierEntry::new(1.0, 1.0, NodeIndex::new(2)));
        assert_eq!(heap.pop().unwrap().node.index(), 2);
    }

    #[test]
    fn test_is_stale() {
        let best = [0.0, 4.0];
        assert!(FrontierEntry::new(5.0, 5.0, NodeIndex::new(1)).is_stale(&best));
        assert!(!FrontierEntry::new(4.0, 4.0, NodeIndex::new(1)).is_stale(&best));
    }
}
