//! Shortest path search and the routing facade

mod dijkstra;
mod route;
mod router;

pub use route::{Route, find_shortest_path};
pub use router::Router;
