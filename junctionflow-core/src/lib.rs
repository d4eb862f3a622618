//! Traffic-aware routing over a road network of junctions.
//!
//! Roads carry an immutable base travel time and a current travel time that
//! follows the latest announced congestion multiplier. Routes are always
//! computed on current travel time.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{FeedJunction, FeedRoad, NetworkConfig, build_road_model, create_road_model};
pub use model::{
    Junction, JunctionDirectory, RoadModel, RoadNetwork, RoadState, TrafficMultiplier,
};
pub use routing::{Route, Router, find_shortest_path};

/// Externally assigned junction identifier
pub type JunctionId = i64;

/// Travel time in minutes
pub type Minutes = f64;

/// Road index, assigned in insertion order
pub type RoadId = usize;
