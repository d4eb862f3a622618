//! Data model for traffic-aware routing
//!
//! Contains the road graph store, the junction directory and the model
//! that bundles them for collaborators.

pub mod junctions;
pub mod road_model;
pub mod roads;

pub use junctions::{Junction, JunctionDirectory};
pub use road_model::RoadModel;
pub use roads::{RoadEdge, RoadNetwork, RoadState, TrafficMultiplier};
