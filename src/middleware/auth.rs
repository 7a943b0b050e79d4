//! Middleware de sesión
//!
//! Este módulo extrae el token Bearer, resuelve la sesión activa y la
//! inyecta en las extensions de la request para los handlers protegidos.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{state::AppState, utils::errors::AppError};

/// Extraer el token del header Authorization
pub fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware que exige una sesión activa
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized("Token de sesión requerido".to_string()))?
        .to_string();

    let session = state
        .touch_session(&token)
        .await
        .ok_or_else(|| AppError::Unauthorized("Sesión inválida o cerrada".to_string()))?;

    // Inyectar la sesión en las extensions
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
