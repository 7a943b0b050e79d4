use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::dto::telemetry_dto::{AnnotationsResponse, PointAlert};
use crate::services::annotation_service::{generate_annotations, inspect_point};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_annotation_router() -> Router<AppState> {
    Router::new().route("/:id", get(get_annotations))
}

async fn get_annotations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnnotationsResponse>, AppError> {
    let vehicle = state
        .vehicles
        .find_by_id(&id)
        .ok_or_else(|| not_found_error("Vehicle", &id))?;

    let points = generate_annotations(&mut state.rng(), &vehicle.id);
    let alerts = points
        .iter()
        .filter_map(|point| {
            inspect_point(point).map(|notification| PointAlert {
                point_id: point.id.clone(),
                notification,
            })
        })
        .collect();

    Ok(Json(AnnotationsResponse {
        vehicle_id: vehicle.id.clone(),
        vehicle_name: vehicle.name.clone(),
        points,
        alerts,
    }))
}
