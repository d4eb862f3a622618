//! This module is responsible for loading junctions and roads from JSON
//! files and building a routing model from them.

mod builder;
mod config;
mod parser;
mod raw_types;

pub use builder::{build_road_model, create_road_model};
pub use config::NetworkConfig;
pub use parser::{load_junctions, load_roads};
pub use raw_types::{FeedJunction, FeedRoad};
