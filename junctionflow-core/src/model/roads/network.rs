//! Bidirectional road graph with base and current travel times

use hashbrown::HashMap;
use log::{debug, info};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use super::components::{JunctionNode, RoadEdge, TrafficMultiplier, validate_weight};
use crate::{Error, JunctionId, Minutes, RoadId};

/// Mirrored pair of directed edges forming one road
#[derive(Debug, Clone, Copy)]
struct Road {
    forward: EdgeIndex,
    backward: EdgeIndex,
}

/// Read-only view of one road and its congestion state
#[derive(Debug, Clone, PartialEq)]
pub struct RoadState {
    pub id: RoadId,
    pub from: JunctionId,
    pub to: JunctionId,
    pub distance: f64,
    pub base_time: Minutes,
    pub current_time: Minutes,
}

/// Road graph store
///
/// Junctions become known the first time a road touching them is inserted.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub(crate) graph: DiGraph<JunctionNode, RoadEdge>,
    index: HashMap<JunctionId, NodeIndex>,
    roads: Vec<Road>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a road as two mirrored edges `from -> to` and `to -> from`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if `distance` or `base_time` is negative or not finite.
    /// Nothing is inserted in that case.
    pub fn add_edge(
        &mut self,
        from: JunctionId,
        to: JunctionId,
        distance: f64,
        base_time: Minutes,
    ) -> Result<RoadId, Error> {
        validate_weight("distance", distance)?;
        validate_weight("base time", base_time)?;

        let road = self.roads.len();
        let source = self.ensure_node(from);
        let target = self.ensure_node(to);

        let forward = self
            .graph
            .add_edge(source, target, RoadEdge::new(to, distance, base_time, road));
        let backward = self
            .graph
            .add_edge(target, source, RoadEdge::new(from, distance, base_time, road));
        self.roads.push(Road { forward, backward });

        debug!("Added road {road}: {from} <-> {to} ({distance}km, {base_time}min)");
        Ok(road)
    }

    /// Set the current travel time of the road between `from` and `to`
    /// to `base_time * multiplier` in both directions.
    ///
    /// When several roads connect the same junctions, the first inserted one is updated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoadNotFound`] if no road connects the two junctions and
    /// [`Error::InvalidMultiplier`] if the resulting travel time is not finite.
    /// Nothing is changed on error.
    pub fn update_traffic(
        &mut self,
        from: JunctionId,
        to: JunctionId,
        multiplier: TrafficMultiplier,
    ) -> Result<RoadId, Error> {
        let road = self
            .find_road(from, to)
            .ok_or(Error::RoadNotFound { from, to })?;
        let Road { forward, backward } = self.roads[road];

        let base_time = self
            .graph
            .edge_weight(forward)
            .map_or(0.0, |edge| edge.base_time);
        if !(base_time * multiplier.value()).is_finite() {
            return Err(Error::InvalidMultiplier(multiplier.value()));
        }

        for edge in [forward, backward] {
            if let Some(weight) = self.graph.edge_weight_mut(edge) {
                weight.apply_multiplier(multiplier);
            }
        }

        debug!(
            "Updated traffic on road {road}: {from} <-> {to} (x{})",
            multiplier.value()
        );
        Ok(road)
    }

    /// Restore every edge's current travel time to its base time
    pub fn reset_traffic(&mut self) {
        for edge in self.graph.edge_weights_mut() {
            edge.reset();
        }
        info!("Traffic reset on {} roads", self.roads.len());
    }

    /// Outgoing edges of a junction, empty for unknown junctions
    pub fn neighbors(&self, junction: JunctionId) -> impl Iterator<Item = &RoadEdge> + '_ {
        self.index
            .get(&junction)
            .into_iter()
            .flat_map(move |&node| self.graph.edges(node))
            .map(|edge| edge.weight())
    }

    /// Both directions of the road between `from` and `to`, `from -> to` first
    pub fn road_edges(&self, from: JunctionId, to: JunctionId) -> Option<(&RoadEdge, &RoadEdge)> {
        let road = self.roads[self.find_road(from, to)?];
        let forward = self.graph.edge_weight(road.forward)?;
        let backward = self.graph.edge_weight(road.backward)?;

        if forward.to == to {
            Some((forward, backward))
        } else {
            Some((backward, forward))
        }
    }

    pub fn contains(&self, junction: JunctionId) -> bool {
        self.index.contains_key(&junction)
    }

    /// Every road in insertion order, as seen from its `from -> to` direction
    pub fn roads(&self) -> impl Iterator<Item = RoadState> + '_ {
        self.roads.iter().enumerate().filter_map(|(id, road)| {
            let (source, _) = self.graph.edge_endpoints(road.forward)?;
            let edge = self.graph.edge_weight(road.forward)?;
            Some(RoadState {
                id,
                from: self.junction_id(source)?,
                to: edge.to,
                distance: edge.distance,
                base_time: edge.base_time,
                current_time: edge.current_time,
            })
        })
    }

    /// Current travel time of a road by index
    pub(crate) fn road_time(&self, road: RoadId) -> Option<Minutes> {
        let road = self.roads.get(road)?;
        self.graph
            .edge_weight(road.forward)
            .map(RoadEdge::travel_time)
    }

    pub fn junction_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub(crate) fn node_index(&self, junction: JunctionId) -> Option<NodeIndex> {
        self.index.get(&junction).copied()
    }

    pub(crate) fn junction_id(&self, node: NodeIndex) -> Option<JunctionId> {
        self.graph.node_weight(node).map(|node| node.id)
    }

    /// First inserted road connecting the two junctions
    fn find_road(&self, from: JunctionId, to: JunctionId) -> Option<RoadId> {
        let source = self.node_index(from)?;
        let target = self.node_index(to)?;

        self.graph
            .edges_connecting(source, target)
            .map(|edge| edge.weight().road)
            .min()
    }

    fn ensure_node(&mut self, junction: JunctionId) -> NodeIndex {
        *self
            .index
            .entry(junction)
            .or_insert_with(|| self.graph.add_node(JunctionNode { id: junction }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_network() -> RoadNetwork {
        let mut network = RoadNetwork::new();
        network.add_edge(1, 2, 3.5, 8.0).unwrap();
        network.add_edge(2, 3, 5.2, 12.0).unwrap();
        network
    }

    fn multiplier(value: f64) -> TrafficMultiplier {
        TrafficMultiplier::new(value).unwrap()
    }

    #[test]
    fn add_edge_inserts_mirrored_pair() {
        let network = scenario_network();

        assert_eq!(network.road_count(), 2);
        assert_eq!(network.junction_count(), 3);

        let (forward, backward) = network.road_edges(1, 2).unwrap();
        assert_eq!(forward.to, 2);
        assert_eq!(backward.to, 1);
        assert_eq!(forward.distance, backward.distance);
        assert_eq!(forward.base_time, backward.base_time);
        assert_eq!(forward.current_time, 8.0);
        assert_eq!(forward.road, backward.road);
    }

    #[test]
    fn add_edge_rejects_negative_weights_without_side_effects() {
        let mut network = RoadNetwork::new();

        assert!(matches!(
            network.add_edge(1, 2, -1.0, 5.0),
            Err(Error::InvalidWeight {
                field: "distance",
                ..
            })
        ));
        assert!(matches!(
            network.add_edge(1, 2, 1.0, -5.0),
            Err(Error::InvalidWeight {
                field: "base time",
                ..
            })
        ));
        assert_eq!(network.road_count(), 0);
        assert!(!network.contains(1));
    }

    #[test]
    fn repeated_traffic_update_is_idempotent() {
        let mut network = scenario_network();

        network.update_traffic(1, 2, multiplier(2.0)).unwrap();
        network.update_traffic(1, 2, multiplier(2.0)).unwrap();

        let (forward, backward) = network.road_edges(1, 2).unwrap();
        assert_eq!(forward.current_time, 16.0);
        assert_eq!(backward.current_time, 16.0);
        assert_eq!(forward.base_time, 8.0);
    }

    #[test]
    fn traffic_update_from_either_end_keeps_directions_equal() {
        let mut network = scenario_network();

        network.update_traffic(3, 2, multiplier(1.5)).unwrap();
        network.update_traffic(2, 1, multiplier(3.0)).unwrap();
        network.update_traffic(1, 2, multiplier(0.5)).unwrap();

        for (a, b) in [(1, 2), (2, 3)] {
            let (forward, backward) = network.road_edges(a, b).unwrap();
            assert_eq!(forward.current_time, backward.current_time);
        }
        assert_eq!(network.road_edges(2, 3).unwrap().0.current_time, 18.0);
        assert_eq!(network.road_edges(1, 2).unwrap().0.current_time, 4.0);
    }

    #[test]
    fn traffic_update_on_missing_road_is_reported() {
        let mut network = scenario_network();

        assert!(matches!(
            network.update_traffic(1, 3, multiplier(2.0)),
            Err(Error::RoadNotFound { from: 1, to: 3 })
        ));
        assert!(matches!(
            network.update_traffic(1, 99, multiplier(2.0)),
            Err(Error::RoadNotFound { .. })
        ));
    }

    #[test]
    fn parallel_roads_update_first_inserted() {
        let mut network = RoadNetwork::new();
        let first = network.add_edge(1, 2, 1.0, 10.0).unwrap();
        network.add_edge(2, 1, 1.0, 4.0).unwrap();

        let updated = network.update_traffic(1, 2, multiplier(2.0)).unwrap();
        assert_eq!(updated, first);

        let times: Vec<_> = network.neighbors(1).map(RoadEdge::travel_time).collect();
        assert_eq!(times.len(), 2);
        assert!(times.contains(&20.0));
        assert!(times.contains(&4.0));
    }

    #[test]
    fn self_loop_updates_both_edges() {
        let mut network = RoadNetwork::new();
        network.add_edge(7, 7, 0.5, 2.0).unwrap();
        network.update_traffic(7, 7, multiplier(3.0)).unwrap();

        let times: Vec<_> = network.neighbors(7).map(RoadEdge::travel_time).collect();
        assert_eq!(times, vec![6.0, 6.0]);
    }

    #[test]
    fn reset_restores_base_times() {
        let mut network = scenario_network();
        network.update_traffic(1, 2, multiplier(4.0)).unwrap();
        network.update_traffic(2, 3, multiplier(0.25)).unwrap();

        network.reset_traffic();

        for junction in [1, 2, 3] {
            for edge in network.neighbors(junction) {
                assert_eq!(edge.current_time, edge.base_time);
            }
        }
    }

    #[test]
    fn neighbors_of_unknown_junction_is_empty() {
        let network = scenario_network();

        assert_eq!(network.neighbors(42).count(), 0);
        assert_eq!(network.neighbors(2).count(), 2);

        let mut targets: Vec<_> = network.neighbors(2).map(|edge| edge.to).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![1, 3]);
    }

    #[test]
    fn overflowing_travel_time_is_rejected_before_writing() {
        let mut network = RoadNetwork::new();
        network.add_edge(1, 2, 1.0, 1e300).unwrap();

        assert!(matches!(
            network.update_traffic(1, 2, multiplier(1e10)),
            Err(Error::InvalidMultiplier(_))
        ));

        let (forward, backward) = network.road_edges(1, 2).unwrap();
        assert_eq!(forward.current_time, 1e300);
        assert_eq!(backward.current_time, 1e300);
    }

    #[test]
    fn roads_lists_current_state_in_insertion_order() {
        let mut network = scenario_network();
        network.update_traffic(3, 2, multiplier(2.0)).unwrap();

        let roads: Vec<_> = network.roads().collect();
        assert_eq!(
            roads,
            vec![
                RoadState {
                    id: 0,
                    from: 1,
                    to: 2,
                    distance: 3.5,
                    base_time: 8.0,
                    current_time: 8.0,
                },
                RoadState {
                    id: 1,
                    from: 2,
                    to: 3,
                    distance: 5.2,
                    base_time: 12.0,
                    current_time: 24.0,
                },
            ]
        );
        assert_eq!(network.road_time(1), Some(24.0));
        assert_eq!(network.road_time(5), None);
    }
}
