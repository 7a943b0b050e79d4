use serde::Serialize;

use crate::models::notification::Notification;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<Notification> {
    /// Respuesta de una acción cuyo resultado es una notificación
    pub fn notify(notification: Notification) -> Self {
        let message = notification.title.clone();
        Self::success_with_message(notification, message)
    }
}
