//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};

use crate::domain::{RouteError, StationId};
use crate::planner::{CostEngine, CostModel, PathEnumerator};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/map", get(show_map))
        .route("/distance", get(shortest_distance))
        .route("/time", get(shortest_time))
        .route("/route/distance", get(route_by_distance))
        .route("/route/time", get(route_by_time))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations with serial numbers and codes.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .directory
        .entries()
        .iter()
        .map(StationResult::from_entry)
        .collect();

    Json(StationListResponse { stations })
}

/// Show every station with its direct connections.
async fn show_map(State(state): State<AppState>) -> Json<MapResponse> {
    Json(MapResponse::from_graph(&state.graph))
}

/// Resolve both ends of a query and check they are connected.
///
/// Reachability is checked up front so the route algorithms only run on
/// answerable queries.
fn validated_pair(
    state: &AppState,
    req: &RouteQuery,
) -> Result<(StationId, StationId), AppError> {
    let from = state.directory.resolve(&req.from)?.clone();
    let to = state.directory.resolve(&req.to)?.clone();

    if !state.graph.has_path(from.as_str(), to.as_str())? {
        return Err(RouteError::Unreachable { from, to }.into());
    }

    Ok((from, to))
}

/// Minimum distance between two stations.
async fn shortest_distance(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<DistanceResponse>, AppError> {
    let (from, to) = validated_pair(&state, &req)?;

    let distance_km = CostEngine::new(&state.graph, &state.cost).minimum_cost(
        from.as_str(),
        to.as_str(),
        CostModel::Distance,
    )?;

    info!(%from, %to, distance_km, "shortest distance");
    Ok(Json(DistanceResponse {
        from: from.to_string(),
        to: to.to_string(),
        distance_km,
    }))
}

/// Minimum travel time between two stations.
async fn shortest_time(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<TimeResponse>, AppError> {
    let (from, to) = validated_pair(&state, &req)?;

    let seconds = CostEngine::new(&state.graph, &state.cost).minimum_cost(
        from.as_str(),
        to.as_str(),
        CostModel::Time,
    )?;

    info!(%from, %to, seconds, "shortest time");
    Ok(Json(TimeResponse::new(&from, &to, seconds)))
}

/// Route chosen by distance.
async fn route_by_distance(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    plan_route(&state, &req, CostModel::Distance).map(Json)
}

/// Route chosen by travel time.
async fn route_by_time(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    plan_route(&state, &req, CostModel::Time).map(Json)
}

fn plan_route(
    state: &AppState,
    req: &RouteQuery,
    model: CostModel,
) -> Result<RouteResponse, AppError> {
    let (from, to) = validated_pair(state, req)?;

    let route = PathEnumerator::new(&state.graph, &state.cost).best_route(
        from.as_str(),
        to.as_str(),
        model,
    )?;

    info!(%from, %to, ?model, hops = route.hop_count(), "route planned");
    Ok(RouteResponse::from_route(&from, &to, &route)?)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::Unreachable { .. }
            | RouteError::MalformedIdentifier(_)
            | RouteError::AmbiguousCode { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::Heap(_) | RouteError::CostOverflow { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
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
    use crate::network::{GraphBuilder, delhi_metro};
    use crate::planner::CostConfig;

    fn state() -> AppState {
        AppState::new(delhi_metro(), CostConfig::default())
    }

    fn query(from: &str, to: &str) -> Query<RouteQuery> {
        Query(RouteQuery {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn stations_listed() {
        let Json(resp) = list_stations(State(state())).await;
        assert_eq!(resp.stations.len(), 20);
        assert_eq!(resp.stations[0].serial, 1);
    }

    #[tokio::test]
    async fn map_lists_neighbours() {
        let Json(resp) = show_map(State(state())).await;
        let rc = resp
            .stations
            .iter()
            .find(|s| s.station == "Rajiv Chowk~BY")
            .unwrap();
        // Yamuna Bank, Moti Nagar, AIIMS, New Delhi
        assert_eq!(rc.neighbours.len(), 4);
    }

    #[tokio::test]
    async fn distance_by_code() {
        let Json(resp) = shortest_distance(State(state()), query("NS62", "IA"))
            .await
            .unwrap();
        assert_eq!(resp.from, "Noida Sector 62~B");
        assert_eq!(resp.to, "IGI Airport~O");
        assert_eq!(resp.distance_km, 42);
    }

    #[tokio::test]
    async fn time_in_minutes() {
        let Json(resp) = shortest_time(
            State(state()),
            query("Noida Sector 62~B", "IGI Airport~O"),
        )
        .await
        .unwrap();
        assert_eq!(resp.seconds, 7 * 120 + 40 * 42);
        assert_eq!(resp.minutes, 42);
    }

    #[tokio::test]
    async fn route_by_time_across_lines() {
        let Json(resp) = route_by_time(State(state()), query("Noida Sector 62~B", "ia"))
            .await
            .unwrap();
        assert_eq!(resp.stations.len(), 8);
        // Blue, Yellow and Orange, but every hop shares a line
        assert_eq!(resp.interchanges, 0);
        assert_eq!(resp.minutes, 42);
        assert!(resp.label.ends_with("  0  42"));
    }

    #[tokio::test]
    async fn route_by_distance_reports_interchange() {
        let g = GraphBuilder::new()
            .station("Saket~Y")
            .station("Vaishali~B")
            .edge("Saket~Y", "Vaishali~B", 5)
            .build();
        let state = AppState::new(g, CostConfig::default());

        let Json(resp) = route_by_distance(State(state), query("SA", "VA"))
            .await
            .unwrap();
        assert_eq!(resp.interchanges, 1);
        assert_eq!(resp.distance_km, 5);
    }

    #[tokio::test]
    async fn cost_overflow_is_internal_error() {
        let g = GraphBuilder::new()
            .station("Saket~Y")
            .station("AIIMS~Y")
            .edge("Saket~Y", "AIIMS~Y", 6)
            .build();
        let state = AppState::new(g, CostConfig::new(120, u64::MAX));

        let err = shortest_time(State(state), query("Saket~Y", "AIIMS~Y"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn route_by_distance_same_station() {
        let Json(resp) = route_by_distance(State(state()), query("Saket~Y", "saket"))
            .await
            .unwrap();
        assert_eq!(resp.stations, vec!["Saket~Y"]);
        assert_eq!(resp.distance_km, 0);
        assert_eq!(resp.interchanges, 0);
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = shortest_distance(State(state()), query("Atlantis", "Saket~Y"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unreachable_is_bad_request() {
        let g = GraphBuilder::new()
            .station("Saket~Y")
            .station("AIIMS~Y")
            .station("Island~Z")
            .edge("Saket~Y", "AIIMS~Y", 6)
            .build();
        let state = AppState::new(g, CostConfig::default());

        let err = route_by_distance(State(state), query("Saket~Y", "Island~Z"))
            .await
            .unwrap_err();
        match &err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "no route from Saket~Y to Island~Z")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn route_errors_map_to_status() {
        let err = AppError::from(RouteError::AmbiguousCode {
            code: "RC".into(),
            count: 2,
        });
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = AppError::from(RouteError::Heap(crate::heap::HeapError::Empty));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
