use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use tokio::sync::{RwLockReadGuard, RwLockWriteGuard};

use crate::dto::monitoring_dto::{LiveToggleRequest, LiveToggleResponse, SelectVehicleRequest};
use crate::dto::telemetry_dto::{FaultLogFilters, FaultLogResponse};
use crate::models::auth::Session;
use crate::models::notification::Notification;
use crate::services::monitoring_service::{LiveMonitor, MonitorState};
use crate::services::telemetry_service::filter_fault_logs;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};

pub fn create_monitoring_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_snapshot))
        .route("/vehicle", post(select_vehicle))
        .route("/live", post(set_live))
        .route("/faults", get(get_faults))
        .route("/notifications/ack", post(ack_notifications))
}

type Monitors<'a> = RwLockWriteGuard<'a, HashMap<String, LiveMonitor>>;

/// Bloquear el mapa de monitores garantizando que el de la sesión existe
async fn lock_monitors<'a>(state: &'a AppState, session: &Session) -> AppResult<Monitors<'a>> {
    state.ensure_monitor(&session.token).await?;
    Ok(state.monitors.write().await)
}

/// Copia del estado del monitor de la sesión, bajo lock de lectura
async fn read_snapshot(state: &AppState, session: &Session) -> AppResult<MonitorState> {
    state.ensure_monitor(&session.token).await?;
    let monitors: RwLockReadGuard<'_, HashMap<String, LiveMonitor>> = state.monitors.read().await;
    let monitor = monitors
        .get(&session.token)
        .ok_or_else(|| AppError::Internal("Monitor de sesión no disponible".to_string()))?;
    Ok(monitor.snapshot().await)
}

fn session_monitor<'m>(monitors: &'m mut Monitors<'_>, session: &Session) -> AppResult<&'m mut LiveMonitor> {
    monitors
        .get_mut(&session.token)
        .ok_or_else(|| AppError::Internal("Monitor de sesión no disponible".to_string()))
}

async fn get_snapshot(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<MonitorState>, AppError> {
    Ok(Json(read_snapshot(&state, &session).await?))
}

async fn select_vehicle(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<SelectVehicleRequest>,
) -> Result<Json<MonitorState>, AppError> {
    if request.vehicle_id.trim().is_empty() {
        return Err(bad_request_error("vehicle_id is required"));
    }
    state.require_vehicle(&request.vehicle_id)?;

    let mut monitors = lock_monitors(&state, &session).await?;
    let monitor = session_monitor(&mut monitors, &session)?;
    monitor.select_vehicle(&request.vehicle_id).await;
    Ok(Json(monitor.snapshot().await))
}

async fn set_live(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    request: Option<Json<LiveToggleRequest>>,
) -> Result<Json<LiveToggleResponse>, AppError> {
    let request = request.map(|Json(body)| body).unwrap_or_default();

    let mut monitors = lock_monitors(&state, &session).await?;
    let monitor = session_monitor(&mut monitors, &session)?;
    let notification = monitor.set_live(request.enabled).await;
    let snapshot = monitor.snapshot().await;

    Ok(Json(LiveToggleResponse {
        live: snapshot.live,
        vehicle_id: snapshot.vehicle_id,
        interval_secs: monitor.interval().as_secs(),
        notification,
    }))
}

async fn get_faults(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(filters): Query<FaultLogFilters>,
) -> Result<Json<FaultLogResponse>, AppError> {
    let snapshot = read_snapshot(&state, &session).await?;
    let filtered = filter_fault_logs(&snapshot.fault_log, &filters.search, filters.status);
    Ok(Json(FaultLogResponse::new(&snapshot.vehicle_id, filtered)))
}

async fn ack_notifications(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<Notification>>, AppError> {
    state.ensure_monitor(&session.token).await?;
    // El drenado solo necesita el lock interno del monitor
    let monitors = state.monitors.read().await;
    let monitor = monitors
        .get(&session.token)
        .ok_or_else(|| AppError::Internal("Monitor de sesión no disponible".to_string()))?;
    Ok(Json(monitor.take_notifications().await))
}
