use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Sesión emitida en el login
///
/// Reemplaza la bandera global "logged in": se crea en el login, se inyecta
/// en los handlers protegidos y se elimina en el logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    /// Última request autenticada con esta sesión
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn issue(email: &str) -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().to_string(),
            email: email.trim().to_string(),
            issued_at: now,
            last_seen: now,
        }
    }

    /// La sesión lleva más de `idle` sin usarse
    pub fn is_idle(&self, idle: chrono::Duration, now: DateTime<Utc>) -> bool {
        now - self.last_seen > idle
    }
}

/// Request de login
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub message: String,
    pub session: Session,
}
