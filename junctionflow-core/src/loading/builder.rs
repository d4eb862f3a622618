use hashbrown::HashSet;
use log::{info, warn};

use super::config::NetworkConfig;
use super::parser::{load_junctions, load_roads, open_json_file};
use super::raw_types::FeedRoad;
use crate::{Error, Junction, JunctionDirectory, RoadModel, Router};

/// Creates a road model from the junction and road files named in the configuration
///
/// # Errors
///
/// Returns an error if a file is missing or malformed, or if a road has an invalid weight
pub fn create_road_model(config: &NetworkConfig) -> Result<RoadModel, Error> {
    validate_config(config)?;

    info!("Loading junctions: {}", config.junctions_path.display());
    let junctions = open_json_file(&config.junctions_path, load_junctions)?;

    info!("Loading roads: {}", config.roads_path.display());
    let roads = open_json_file(&config.roads_path, load_roads)?;

    build_road_model(junctions, roads)
}

/// Builds a road model from already parsed junctions and roads
///
/// # Errors
///
/// Returns [`Error::InvalidWeight`] for the first road with a negative or non-finite weight
pub fn build_road_model(
    junctions: Vec<Junction>,
    roads: Vec<FeedRoad>,
) -> Result<RoadModel, Error> {
    let directory: JunctionDirectory = junctions.into_iter().collect();
    info!("Loaded {} junctions", directory.len());

    validate_road_endpoints(&directory, &roads);

    let router = Router::new();
    for road in &roads {
        router.add_road(road.from, road.to, road.distance, road.base_time)?;
    }
    info!(
        "Loaded {} roads between {} junctions",
        router.road_count(),
        router.junction_count()
    );

    let isolated = directory
        .sorted_by_id()
        .into_iter()
        .filter(|junction| !router.contains_junction(junction.id))
        .count();
    if isolated > 0 {
        warn!("{isolated} junctions have no roads and can not be routed to");
    }

    Ok(RoadModel::new(directory, router))
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    for (kind, path) in [
        ("Junction", &config.junctions_path),
        ("Road", &config.roads_path),
    ] {
        if !path.exists() {
            return Err(Error::InvalidData(format!(
                "{kind} file not found: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

fn validate_road_endpoints(directory: &JunctionDirectory, roads: &[FeedRoad]) {
    let unnamed: HashSet<_> = roads
        .iter()
        .flat_map(|road| [road.from, road.to])
        .filter(|&id| !directory.contains(id))
        .collect();

    if !unnamed.is_empty() {
        warn!(
            "{} junction ids are used by roads but missing from the junction list; \
            routes through them will be reported by id only",
            unnamed.len()
        );
    }
}
