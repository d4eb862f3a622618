// Re-export key components
pub use crate::loading::{NetworkConfig, build_road_model, create_road_model};
pub use crate::model::{
    Junction, JunctionDirectory, RoadEdge, RoadModel, RoadNetwork, RoadState, TrafficMultiplier,
};
pub use crate::routing::{Route, Router, find_shortest_path};

pub use crate::Error;

// Core types
pub use crate::JunctionId;
pub use crate::Minutes;
pub use crate::RoadId;
