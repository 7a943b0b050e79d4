//! Rutas HTTP
//!
//! Ensambla el router completo: `/health` y el login son públicos, el
//! resto de `/api` exige una sesión activa.

pub mod annotation_routes;
pub mod auth_routes;
pub mod monitoring_routes;
pub mod telemetry_routes;
pub mod training_routes;
pub mod vehicle_routes;

use axum::{middleware, response::Json, routing::get, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_middleware, require_session};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/telemetry", telemetry_routes::create_telemetry_router())
        .nest("/annotations", annotation_routes::create_annotation_router())
        .nest("/training", training_routes::create_training_router())
        .nest("/monitoring", monitoring_routes::create_monitoring_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let api = Router::new()
        .nest("/auth", auth_routes::auth_routes(state.clone()))
        .merge(protected);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-maintenance",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
