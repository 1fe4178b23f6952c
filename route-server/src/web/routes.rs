//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use crate::domain::StopId;
use crate::planner::Planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(list_stops))
        .route("/routes/plan", post(plan_route))
        .route("/distances", get(distances))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the stops of the network.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    let mut stops: Vec<String> = state.network.stops().map(|s| s.to_string()).collect();
    stops.sort();

    Json(StopsResponse {
        stops,
        stop_count: state.network.stop_count(),
        edge_count: state.network.edge_count(),
    })
}

/// Plan routes between two stops.
///
/// Unknown stops and unreachable goals yield an empty route list, not
/// an error; only malformed identifiers are rejected.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let start = StopId::parse_normalized(&req.start).map_err(|e| AppError::BadRequest {
        message: format!("invalid start stop {:?}: {e}", req.start),
    })?;
    let goal = StopId::parse_normalized(&req.goal).map_err(|e| AppError::BadRequest {
        message: format!("invalid goal stop {:?}: {e}", req.goal),
    })?;

    let max_depth = req.max_depth.unwrap_or(state.config.max_depth);
    let key = (start.clone(), goal.clone(), max_depth);

    let result = match state.plans.get(&key).await {
        Some(cached) => cached,
        None => {
            let config = state.config.with_max_depth(max_depth);
            let planner = Planner::new(&state.network, &config);
            let result = Arc::new(planner.plan(&start, &goal));
            state.plans.insert(key, result.clone()).await;
            result
        }
    };

    let routes = result
        .routes
        .iter()
        .map(|candidate| RouteResult::from_candidate(candidate, &state.markers))
        .collect();

    Ok(Json(PlanRouteResponse {
        routes,
        routes_explored: result.routes_explored,
    }))
}

/// Shortest distances from a stop to everything reachable.
async fn distances(
    State(state): State<AppState>,
    Query(req): Query<DistancesRequest>,
) -> Result<Json<DistancesResponse>, AppError> {
    let from = StopId::parse_normalized(&req.from).map_err(|e| AppError::BadRequest {
        message: format!("invalid stop {:?}: {e}", req.from),
    })?;

    let planner = Planner::new(&state.network, &state.config);
    let map = planner.shortest_distances(&from);

    let distances = map
        .reachable()
        .map(|(stop, d)| (stop.to_string(), d))
        .collect();

    Ok(Json(DistancesResponse {
        from: from.to_string(),
        distances,
    }))
}

/// Application-level error for handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, PlanCache};
    use crate::loader::sample_network;
    use crate::planner::SearchConfig;
    use crate::render::default_markers;

    fn state() -> AppState {
        AppState::new(
            sample_network(),
            SearchConfig::default(),
            default_markers(),
            PlanCache::new(&CacheConfig::default()),
        )
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }

    #[tokio::test]
    async fn plan_route_handler_finds_routes() {
        let req = PlanRouteRequest {
            start: "a".to_string(), // lowercase is normalized
            goal: "F".to_string(),
            max_depth: None,
        };

        let Json(response) = plan_route(State(state()), Json(req)).await.unwrap();

        assert!(!response.routes.is_empty());
        assert_eq!(response.routes[0].stops, vec!["A", "D", "F"]);
        assert_eq!(response.routes[0].total_weight, 11);
        assert_eq!(response.routes[0].transfers, 0);
    }

    #[tokio::test]
    async fn plan_route_handler_empty_for_unknown_stop() {
        let req = PlanRouteRequest {
            start: "A".to_string(),
            goal: "Z".to_string(),
            max_depth: None,
        };

        let Json(response) = plan_route(State(state()), Json(req)).await.unwrap();
        assert!(response.routes.is_empty());
    }

    #[tokio::test]
    async fn plan_route_handler_rejects_bad_id() {
        let req = PlanRouteRequest {
            start: "not a stop".to_string(),
            goal: "F".to_string(),
            max_depth: None,
        };

        let result = plan_route(State(state()), Json(req)).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn distances_handler() {
        let req = DistancesRequest {
            from: "A".to_string(),
        };

        let Json(response) = distances(State(state()), Query(req)).await.unwrap();

        assert_eq!(response.from, "A");
        assert_eq!(response.distances.get("F"), Some(&11));
        assert_eq!(response.distances.get("A"), Some(&0));
    }

    #[tokio::test]
    async fn list_stops_handler() {
        let Json(response) = list_stops(State(state())).await;

        assert_eq!(response.stop_count, 10);
        assert_eq!(response.edge_count, 22);
        assert_eq!(response.stops.first().map(String::as_str), Some("A"));
        assert_eq!(response.stops.last().map(String::as_str), Some("J"));
    }
}
