use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::raw_types::{FeedRoad, JunctionFile, RoadFile};
use crate::{Error, Junction};

/// Parse a `{"junctions": [...]}` document
///
/// # Errors
///
/// Returns [`Error::JsonError`] if the document is malformed
pub fn load_junctions<R: Read>(reader: R) -> Result<Vec<Junction>, Error> {
    let file: JunctionFile = serde_json::from_reader(reader)?;
    Ok(file.junctions.into_iter().map(Junction::from).collect())
}

/// Parse a `{"roads": [...]}` document
///
/// # Errors
///
/// Returns [`Error::JsonError`] if the document is malformed
pub fn load_roads<R: Read>(reader: R) -> Result<Vec<FeedRoad>, Error> {
    let file: RoadFile = serde_json::from_reader(reader)?;
    Ok(file.roads)
}

pub(super) fn open_json_file<T, F>(path: &Path, parse: F) -> Result<T, Error>
where
    F: FnOnce(BufReader<File>) -> Result<T, Error>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    parse(BufReader::new(file)).map_err(|e| match e {
        Error::JsonError(e) => {
            Error::InvalidData(format!("Failed to parse '{}': {e}", path.display()))
        }
        other => other,
    })
}
