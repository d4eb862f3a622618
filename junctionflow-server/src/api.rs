//! HTTP API handlers

use axum::error_handling::HandleErrorLayer;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{BoxError, Json, Router};
use junctionflow_core::{Junction, JunctionId, RoadId, RoadState};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Build the Axum router
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(GlobalConcurrencyLimitLayer::new(config.max_concurrent_requests))
        .timeout(config.request_timeout());

    Router::new()
        .route("/api/health", get(health))
        .route("/api/junctions", get(list_junctions))
        .route("/api/junctions/search", get(search_junctions))
        .route("/api/junctions/{id}", get(get_junction))
        .route("/api/roads", get(list_roads))
        .route("/api/path", post(find_path))
        .route("/api/traffic", post(update_traffic))
        .route("/api/traffic/reset", post(reset_traffic))
        .layer(middleware)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_middleware_error(error: BoxError) -> (StatusCode, Json<serde_json::Value>) {
    let (status, code) = if error.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "timeout")
    } else {
        tracing::error!("Unhandled middleware error: {error}");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal")
    };
    let body = serde_json::json!({
        "error": {
            "code": code,
            "message": error.to_string(),
        }
    });
    (status, Json(body))
}

// ============ Junctions ============

#[derive(Debug, Serialize)]
pub struct JunctionView {
    pub id: JunctionId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<&Junction> for JunctionView {
    fn from(junction: &Junction) -> Self {
        Self {
            id: junction.id,
            name: junction.name.clone(),
            lat: junction.lat(),
            lng: junction.lng(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JunctionsResponse {
    pub junctions: Vec<JunctionView>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    prefix: String,
}

async fn list_junctions(State(state): State<AppState>) -> Json<JunctionsResponse> {
    let junctions = state
        .model
        .junctions
        .sorted_by_id()
        .into_iter()
        .map(JunctionView::from)
        .collect();
    Json(JunctionsResponse { junctions })
}

async fn search_junctions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<JunctionsResponse> {
    let junctions = state
        .model
        .junctions
        .search_prefix(&params.prefix)
        .into_iter()
        .map(JunctionView::from)
        .collect();
    Json(JunctionsResponse { junctions })
}

async fn get_junction(
    State(state): State<AppState>,
    Path(id): Path<JunctionId>,
) -> Result<Json<JunctionView>, AppError> {
    state
        .model
        .junctions
        .get(id)
        .map(|junction| Json(JunctionView::from(junction)))
        .ok_or(AppError::JunctionNotFound(id))
}

// ============ Roads ============

#[derive(Debug, Serialize)]
pub struct RoadView {
    pub id: RoadId,
    pub from: JunctionId,
    pub to: JunctionId,
    pub distance: f64,
    pub base_time: f64,
    pub current_time: f64,
}

impl From<RoadState> for RoadView {
    fn from(road: RoadState) -> Self {
        Self {
            id: road.id,
            from: road.from,
            to: road.to,
            distance: road.distance,
            base_time: road.base_time,
            current_time: road.current_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoadsResponse {
    pub junctions: usize,
    pub roads: Vec<RoadView>,
}

async fn list_roads(State(state): State<AppState>) -> Json<RoadsResponse> {
    let router = &state.model.router;
    Json(RoadsResponse {
        junctions: router.junction_count(),
        roads: router.roads().into_iter().map(RoadView::from).collect(),
    })
}

// ============ Routing ============

#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: JunctionId,
    pub destination: JunctionId,
}

/// Junction on a route; name and location are absent for unnamed junctions
#[derive(Debug, Serialize)]
pub struct PathStop {
    pub id: JunctionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub path: Vec<PathStop>,
    /// Minutes on current traffic
    pub total_time: f64,
    /// Kilometres
    pub distance: f64,
}

async fn find_path(
    State(state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, AppError> {
    let route = state
        .model
        .router
        .find_route(request.source, request.destination)?;

    let path = route
        .path
        .iter()
        .map(|&id| {
            let junction = state.model.junctions.get(id);
            PathStop {
                id,
                name: junction.map(|j| j.name.clone()),
                lat: junction.map(Junction::lat),
                lng: junction.map(Junction::lng),
            }
        })
        .collect();

    tracing::info!(
        source = request.source,
        destination = request.destination,
        total_time = route.total_minutes,
        "Route found"
    );

    Ok(Json(PathResponse {
        path,
        total_time: route.total_minutes,
        distance: route.distance_km,
    }))
}

// ============ Traffic ============

#[derive(Debug, Deserialize)]
pub struct TrafficRequest {
    pub from: JunctionId,
    pub to: JunctionId,
    pub multiplier: f64,
}

#[derive(Debug, Serialize)]
pub struct TrafficResponse {
    pub message: String,
    /// Minutes on the updated road
    pub current_time: f64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

async fn update_traffic(
    State(state): State<AppState>,
    Json(request): Json<TrafficRequest>,
) -> Result<Json<TrafficResponse>, AppError> {
    let current_time = state
        .model
        .router
        .update_traffic(request.from, request.to, request.multiplier)?;

    Ok(Json(TrafficResponse {
        message: format!(
            "Traffic between {} and {} set to x{}",
            request.from, request.to, request.multiplier
        ),
        current_time,
    }))
}

async fn reset_traffic(State(state): State<AppState>) -> Json<MessageResponse> {
    state.model.router.reset_traffic();
    Json(MessageResponse {
        message: "Traffic reset on all roads".to_string(),
    })
}

// ============ Health ============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub junctions: usize,
    pub roads: usize,
    pub timestamp: i64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        junctions: state.model.junctions.len(),
        roads: state.model.router.road_count(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
