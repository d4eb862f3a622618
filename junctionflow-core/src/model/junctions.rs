//! Junction records and name lookup
//!
//! The routing core only knows junction ids. Names and coordinates live
//! here: an ordered name index for exact and prefix search, and a hashed
//! record store keyed by id.

use std::collections::BTreeMap;
use std::ops::Bound;

use geo::Point;
use hashbrown::HashMap;
use log::warn;

use crate::JunctionId;

/// Named junction with its location
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub id: JunctionId,
    pub name: String,
    /// Junction coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
}

impl Junction {
    pub fn new(id: JunctionId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name: name.into(),
            geometry: Point::new(lng, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lng(&self) -> f64 {
        self.geometry.x()
    }
}

#[derive(Debug, Clone, Default)]
pub struct JunctionDirectory {
    by_name: BTreeMap<String, JunctionId>,
    records: HashMap<JunctionId, Junction>,
}

impl JunctionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record with the same id, returning the previous one.
    ///
    /// A name can only point to one id; the latest insertion wins.
    pub fn insert(&mut self, junction: Junction) -> Option<Junction> {
        if let Some(&owner) = self.by_name.get(&junction.name) {
            if owner != junction.id {
                warn!(
                    "Junction name '{}' moved from id {owner} to id {}",
                    junction.name, junction.id
                );
            }
        }

        let previous = self.records.insert(junction.id, junction.clone());
        if let Some(previous) = &previous {
            if previous.name != junction.name
                && self.by_name.get(&previous.name) == Some(&previous.id)
            {
                self.by_name.remove(&previous.name);
            }
        }
        self.by_name.insert(junction.name, junction.id);

        previous
    }

    /// Exact, case-sensitive name lookup
    pub fn id_by_name(&self, name: &str) -> Option<JunctionId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: JunctionId) -> Option<&Junction> {
        self.records.get(&id)
    }

    /// Junctions whose name starts with `prefix`, ordered by name
    pub fn search_prefix(&self, prefix: &str) -> Vec<&Junction> {
        self.by_name
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(prefix))
            .filter_map(|(_, id)| self.records.get(id))
            .collect()
    }

    /// All junctions ordered by id
    pub fn sorted_by_id(&self) -> Vec<&Junction> {
        let mut junctions: Vec<_> = self.records.values().collect();
        junctions.sort_unstable_by_key(|junction| junction.id);
        junctions
    }

    pub fn contains(&self, id: JunctionId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Junction> for JunctionDirectory {
    fn from_iter<T: IntoIterator<Item = Junction>>(iter: T) -> Self {
        let mut directory = Self::new();
        for junction in iter {
            directory.insert(junction);
        }
        directory
    }
}
