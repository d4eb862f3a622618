use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the junction and road data files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub junctions_path: PathBuf,
    pub roads_path: PathBuf,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            junctions_path: PathBuf::from("data/junctions.json"),
            roads_path: PathBuf::from("data/roads.json"),
        }
    }
}
