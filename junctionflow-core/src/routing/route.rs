use log::debug;

use super::dijkstra::{TracedPath, dijkstra_path};
use crate::{Error, JunctionId, Minutes, RoadNetwork};

/// Fastest route between two junctions on current travel times
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Junction ids from source to destination inclusive
    pub path: Vec<JunctionId>,
    /// Sum of current travel times along the path
    pub total_minutes: Minutes,
    /// Sum of road lengths along the path
    pub distance_km: f64,
}

impl Route {
    fn stay(junction: JunctionId) -> Self {
        Self {
            path: vec![junction],
            total_minutes: 0.0,
            distance_km: 0.0,
        }
    }

    pub fn source(&self) -> Option<JunctionId> {
        self.path.first().copied()
    }

    pub fn destination(&self) -> Option<JunctionId> {
        self.path.last().copied()
    }

    /// Number of roads travelled
    pub fn legs(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find the fastest route from `source` to `destination`.
///
/// Returns `Ok(None)` if both junctions are known but not connected.
///
/// # Errors
///
/// Returns [`Error::UnknownJunction`] if either id has never appeared in a road.
pub fn find_shortest_path(
    network: &RoadNetwork,
    source: JunctionId,
    destination: JunctionId,
) -> Result<Option<Route>, Error> {
    let start = network
        .node_index(source)
        .ok_or(Error::UnknownJunction(source))?;
    let target = network
        .node_index(destination)
        .ok_or(Error::UnknownJunction(destination))?;

    if start == target {
        return Ok(Some(Route::stay(source)));
    }

    let route = dijkstra_path(network, start, target).map(|traced| into_route(network, &traced));
    match &route {
        Some(route) => debug!(
            "Route {source} -> {destination}: {} legs, {:.1} min",
            route.legs(),
            route.total_minutes
        ),
        None => debug!("No route {source} -> {destination}"),
    }
    Ok(route)
}

fn into_route(network: &RoadNetwork, traced: &TracedPath) -> Route {
    let path = traced
        .nodes
        .iter()
        .filter_map(|&node| network.junction_id(node))
        .collect();
    let distance_km = traced
        .edges
        .iter()
        .filter_map(|&edge| network.graph.edge_weight(edge))
        .map(|edge| edge.distance)
        .sum();

    Route {
        path,
        total_minutes: traced.cost,
        distance_km,
    }
}
