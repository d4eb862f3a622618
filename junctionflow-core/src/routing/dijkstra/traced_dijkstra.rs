use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::{Minutes, RoadNetwork};

/// Cheapest path between two nodes of the road graph
#[derive(Debug, Clone)]
pub(crate) struct TracedPath {
    /// Visited nodes from start to target inclusive
    pub(crate) nodes: Vec<NodeIndex>,
    /// Traversed edges, one fewer than `nodes`
    pub(crate) edges: Vec<EdgeIndex>,
    pub(crate) cost: Minutes,
}

/// Dijkstra's algorithm on current travel times, stopping once `target` is settled.
/// Returns `None` if `target` can not be reached from `start`.
pub(crate) fn dijkstra_path(
    network: &RoadNetwork,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<TracedPath> {
    let graph = &network.graph;
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, Minutes> = HashMap::with_capacity(estimated_nodes);
    // Edge through which each node was last improved
    let mut predecessors: HashMap<NodeIndex, EdgeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    let mut settled_target = None;

    while let Some(State { cost, node }) = heap.pop() {
        // Non-negative weights: the first pop of the target is final
        if node == target {
            settled_target = Some(cost).filter(|cost| cost.is_finite());
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().current_time;
            // Overflowed sums are as good as unreachable
            if !next_cost.is_finite() {
                continue;
            }

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, edge.id());
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, edge.id());
                    }
                }
            }
        }
    }

    let cost = settled_target?;

    // Follow predecessors backward from target to start
    let mut nodes = vec![target];
    let mut edges = Vec::new();
    let mut current = target;
    while current != start {
        let edge = *predecessors.get(&current)?;
        let (previous, _) = graph.edge_endpoints(edge)?;
        edges.push(edge);
        nodes.push(previous);
        current = previous;
    }
    nodes.reverse();
    edges.reverse();

    Some(TracedPath { nodes, edges, cost })
}
