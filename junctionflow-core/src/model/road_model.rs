use crate::{JunctionDirectory, JunctionId, Router};

/// Routing engine together with the junction directory used to name its ids.
#[derive(Debug, Default)]
pub struct RoadModel {
    pub junctions: JunctionDirectory,
    pub router: Router,
}

impl RoadModel {
    pub fn new(junctions: JunctionDirectory, router: Router) -> Self {
        Self { junctions, router }
    }

    /// Resolve user input to a junction id: integers are taken as ids,
    /// anything else is looked up by exact name.
    pub fn resolve(&self, id_or_name: &str) -> Option<JunctionId> {
        let id_or_name = id_or_name.trim();
        id_or_name
            .parse::<JunctionId>()
            .ok()
            .or_else(|| self.junctions.id_by_name(id_or_name))
    }

    /// Display name of a junction, falling back to its id
    pub fn junction_label(&self, id: JunctionId) -> String {
        self.junctions
            .get(id)
            .map_or_else(|| id.to_string(), |junction| junction.name.clone())
    }
}
