use log::info;
use parking_lot::RwLock;

use super::route::{Route, find_shortest_path};
use crate::{Error, JunctionId, Minutes, RoadNetwork, RoadState, TrafficMultiplier};

/// Thread-safe entry point to the routing engine
///
/// Searches share a read lock for their whole duration, so every route is
/// computed on one consistent set of travel times. Insertions and traffic
/// changes take the write lock, so both directions of a road always change
/// together.
#[derive(Debug, Default)]
pub struct Router {
    network: RwLock<RoadNetwork>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a two-way road
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for a negative or non-finite distance or base time
    pub fn add_road(
        &self,
        from: JunctionId,
        to: JunctionId,
        distance_km: f64,
        base_minutes: Minutes,
    ) -> Result<(), Error> {
        self.network
            .write()
            .add_edge(from, to, distance_km, base_minutes)
            .map(|_| ())
    }

    /// Announce the congestion level of a road, returning its new travel time
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMultiplier`] unless `multiplier` is finite and positive
    /// and keeps the travel time finite, and [`Error::RoadNotFound`] if no road
    /// connects the junctions.
    pub fn update_traffic(
        &self,
        from: JunctionId,
        to: JunctionId,
        multiplier: f64,
    ) -> Result<Minutes, Error> {
        let multiplier = TrafficMultiplier::try_from(multiplier)?;
        let mut network = self.network.write();
        let road = network.update_traffic(from, to, multiplier)?;
        let current = network
            .road_time(road)
            .ok_or(Error::RoadNotFound { from, to })?;
        drop(network);

        info!(
            "Traffic on road {road} ({from} <-> {to}) set to x{}, now {current} min",
            multiplier.value()
        );
        Ok(current)
    }

    /// Clear all announced congestion
    pub fn reset_traffic(&self) {
        self.network.write().reset_traffic();
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownJunction`] if an id never appeared in a road and
    /// [`Error::NoRoute`] if the junctions are not connected.
    pub fn find_route(&self, source: JunctionId, destination: JunctionId) -> Result<Route, Error> {
        let network = self.network.read();
        find_shortest_path(&network, source, destination)?.ok_or(Error::NoRoute {
            from: source,
            to: destination,
        })
    }

    /// Current travel time of the road between two junctions
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoadNotFound`] if no road connects the junctions.
    pub fn road_travel_time(&self, from: JunctionId, to: JunctionId) -> Result<Minutes, Error> {
        self.network
            .read()
            .road_edges(from, to)
            .map(|(forward, _)| forward.travel_time())
            .ok_or(Error::RoadNotFound { from, to })
    }

    /// Snapshot of every road with its base and current travel time
    pub fn roads(&self) -> Vec<RoadState> {
        self.network.read().roads().collect()
    }

    pub fn contains_junction(&self, junction: JunctionId) -> bool {
        self.network.read().contains(junction)
    }

    pub fn junction_count(&self) -> usize {
        self.network.read().junction_count()
    }

    pub fn road_count(&self) -> usize {
        self.network.read().road_count()
    }
}
