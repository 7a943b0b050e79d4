use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::dto::training_dto::TrainingFilters;
use crate::dto::ApiResponse;
use crate::models::notification::Notification;
use crate::models::training::{TrainingModule, TrainingOverview};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_training_router() -> Router<AppState> {
    Router::new()
        .route("/modules", get(list_modules))
        .route("/overview", get(get_overview))
        .route("/modules/:id", get(get_module))
        .route("/modules/:id/launch", post(launch_module))
        .route("/modules/:id/download", post(download_module))
}

async fn list_modules(
    State(state): State<AppState>,
    Query(filters): Query<TrainingFilters>,
) -> Json<Vec<TrainingModule>> {
    let modules = state.training.list_modules(filters.difficulty);
    Json(modules.into_iter().cloned().collect())
}

async fn get_overview(State(state): State<AppState>) -> Json<TrainingOverview> {
    Json(state.training.overview())
}

async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrainingModule>, AppError> {
    Ok(Json(state.training.find_module(&id)?.clone()))
}

async fn launch_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let notification = state.training.launch_module(&id)?;
    Ok(Json(ApiResponse::notify(notification)))
}

async fn download_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Notification>>, AppError> {
    let notification = state.training.download_module(&id)?;
    Ok(Json(ApiResponse::notify(notification)))
}
