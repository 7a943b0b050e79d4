use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::fleet_dto::FleetQueryResponse;
use crate::dto::ApiResponse;
use crate::models::notification::Notification;
use crate::models::vehicle::Vehicle;
use crate::services::fleet_query_service::{
    fleet_stats, query_fleet, simulate_delete, simulate_edit, FleetQuery, FleetStats,
};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/stats", get(get_stats))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
}

fn find_vehicle(state: &AppState, id: &str) -> Result<&'static Vehicle, AppError> {
    state
        .vehicles
        .find_by_id(id)
        .ok_or_else(|| not_found_error("Vehicle", id))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<FleetQuery>,
) -> Json<FleetQueryResponse> {
    let vehicles = query_fleet(state.vehicles.all(), &query);
    Json(FleetQueryResponse::new(query, vehicles))
}

async fn get_stats(State(state): State<AppState>) -> Json<FleetStats> {
    Json(fleet_stats(state.vehicles.all()))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let vehicle = find_vehicle(&state, &id)?;
    Ok(Json(vehicle.clone()))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let vehicle = find_vehicle(&state, &id)?;
    Ok(Json(ApiResponse::notify(simulate_edit(vehicle))))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let vehicle = find_vehicle(&state, &id)?;
    Ok(Json(ApiResponse::notify(simulate_delete(vehicle))))
}
