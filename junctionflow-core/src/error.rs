use thiserror::Error;

use crate::JunctionId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {field}: {value} (must be finite and non-negative)")]
    InvalidWeight { field: &'static str, value: f64 },
    #[error("Invalid traffic multiplier: {0} (must be finite and greater than zero)")]
    InvalidMultiplier(f64),
    #[error("No road between junctions {from} and {to}")]
    RoadNotFound { from: JunctionId, to: JunctionId },
    #[error("Unknown junction: {0}")]
    UnknownJunction(JunctionId),
    #[error("No route from junction {from} to junction {to}")]
    NoRoute { from: JunctionId, to: JunctionId },
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
