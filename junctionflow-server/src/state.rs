use std::sync::Arc;

use junctionflow_core::RoadModel;

/// Shared application state passed to all route handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub model: Arc<RoadModel>,
}

impl AppState {
    pub fn new(model: RoadModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
