use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::dto::telemetry_dto::{FaultLogFilters, FaultLogResponse, TelemetryRefreshResponse};
use crate::dto::ApiResponse;
use crate::models::notification::Notification;
use crate::models::telemetry::{HistoryPoint, SensorReading};
use crate::services::telemetry_service::{
    filter_fault_logs, generate_fault_logs, generate_history, generate_sensor_data,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_telemetry_router() -> Router<AppState> {
    Router::new()
        .route("/:id/sensors", get(get_sensors))
        .route("/:id/faults", get(get_faults))
        .route("/:id/history", get(get_history))
        .route("/:id/refresh", post(refresh))
}

async fn get_sensors(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SensorReading>>, AppError> {
    state.require_vehicle(&id)?;
    Ok(Json(generate_sensor_data(&mut state.rng(), &id, None)))
}

async fn get_faults(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(filters): Query<FaultLogFilters>,
) -> Result<Json<FaultLogResponse>, AppError> {
    state.require_vehicle(&id)?;
    let faults = generate_fault_logs(&mut state.rng(), &id, Utc::now());
    let filtered = filter_fault_logs(&faults, &filters.search, filters.status);
    Ok(Json(FaultLogResponse::new(&id, filtered)))
}

async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HistoryPoint>>, AppError> {
    state.require_vehicle(&id)?;
    Ok(Json(generate_history(&mut state.rng(), Utc::now())))
}

async fn refresh(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TelemetryRefreshResponse>>, AppError> {
    state.require_vehicle(&id)?;
    let mut rng = state.rng();
    let now = Utc::now();
    let notification = Notification::success("Sensor data refreshed");
    tracing::info!("🔄 Telemetría regenerada para {}", id);

    let message = notification.title.clone();
    let response = TelemetryRefreshResponse {
        readings: generate_sensor_data(&mut rng, &id, Some(now)),
        faults: generate_fault_logs(&mut rng, &id, now),
        vehicle_id: id,
        notification,
    };
    Ok(Json(ApiResponse::success_with_message(response, message)))
}
