//! Road graph store

pub mod components;
pub mod network;

pub use components::{JunctionNode, RoadEdge, TrafficMultiplier};
pub use network::{RoadNetwork, RoadState};
