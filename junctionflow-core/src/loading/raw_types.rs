use serde::Deserialize;

use crate::{Junction, JunctionId, Minutes};

/// Top level of `junctions.json`
#[derive(Debug, Deserialize)]
pub(super) struct JunctionFile {
    pub(super) junctions: Vec<FeedJunction>,
}

/// Top level of `roads.json`
#[derive(Debug, Deserialize)]
pub(super) struct RoadFile {
    pub(super) roads: Vec<FeedRoad>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedJunction {
    pub id: JunctionId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedRoad {
    pub from: JunctionId,
    pub to: JunctionId,
    /// Length in km
    pub distance: f64,
    /// Travel time in minutes without congestion
    pub base_time: Minutes,
}

impl From<FeedJunction> for Junction {
    fn from(raw: FeedJunction) -> Self {
        Junction::new(raw.id, raw.name, raw.lat, raw.lng)
    }
}
