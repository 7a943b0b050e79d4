use axum::{
    extract::State,
    http::HeaderMap,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::dto::ApiResponse;
use crate::middleware::require_session;
use crate::models::auth::{LoginRequest, LoginResponse, Session};
use crate::models::notification::Notification;
use crate::services::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Configura las rutas de autenticación. Solo `/login` es pública.
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/session", get(current_session))
        .route_layer(middleware::from_fn_with_state(state, require_session))
        .route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    tracing::info!(
        "🔐 Intento de login desde {}",
        headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("desconocido")
    );
    let response = AuthService::new(state).login(&request).await?;
    Ok(Json(response))
}

async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let notification = AuthService::new(state).logout(&session.token).await?;
    Ok(Json(ApiResponse::notify(notification)))
}

async fn current_session(Extension(session): Extension<Session>) -> Json<ApiResponse<Session>> {
    Json(ApiResponse::success(session))
}
