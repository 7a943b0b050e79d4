//! Servicio de sesiones
//!
//! Login de demostración: solo valida el formulario (campos no vacíos y un
//! '@' en el email) y emite una `Session`. No hay verificación de password.

use crate::models::auth::{LoginRequest, LoginResponse, Session};
use crate::models::notification::Notification;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::{validate_email, validate_not_empty};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGOUT_MESSAGE: &str = "Successfully logged out";

/// Validar el formulario de login
pub fn validate_login(request: &LoginRequest) -> AppResult<()> {
    if validate_not_empty(&request.email).is_err() {
        return Err(validation_error("email", "Please fill in all fields"));
    }
    if validate_not_empty(&request.password).is_err() {
        return Err(validation_error("password", "Please fill in all fields"));
    }
    if validate_email(&request.email).is_err() {
        return Err(validation_error("email", "Please enter a valid email address"));
    }
    Ok(())
}

pub struct AuthService {
    state: AppState,
}

impl AuthService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        validate_login(request)?;

        let session = Session::issue(&request.email);
        self.state.store_session(session.clone()).await;
        log::info!("✅ Login exitoso para {}", session.email);

        Ok(LoginResponse {
            success: true,
            token: session.token.clone(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            session,
        })
    }

    pub async fn logout(&self, token: &str) -> AppResult<Notification> {
        match self.state.remove_session(token).await {
            Some(session) => {
                log::info!("👋 Logout de {}", session.email);
                Ok(Notification::success(LOGOUT_MESSAGE))
            }
            None => Err(AppError::Unauthorized("Session not found".to_string())),
        }
    }
}
