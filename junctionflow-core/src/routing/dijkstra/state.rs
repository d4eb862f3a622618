use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Minutes;

#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Minutes,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_cheapest_first() {
        let mut heap = BinaryHeap::new();
        for (cost, node) in [(12.5, 0), (0.0, 1), (3.25, 2), (3.0, 3)] {
            heap.push(State {
                cost,
                node: NodeIndex::new(node),
            });
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|s| s.cost)).collect();
        assert_eq!(order, vec![0.0, 3.0, 3.25, 12.5]);
    }
}
