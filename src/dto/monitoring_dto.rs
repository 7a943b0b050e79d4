use serde::{Deserialize, Serialize};

use crate::models::notification::Notification;

// Request para cambiar el vehículo monitoreado
#[derive(Debug, Deserialize)]
pub struct SelectVehicleRequest {
    pub vehicle_id: String,
}

// Request para activar/pausar el monitoreo; sin valor alterna
#[derive(Debug, Default, Deserialize)]
pub struct LiveToggleRequest {
    pub enabled: Option<bool>,
}

// Response de un cambio de estado del monitor
#[derive(Debug, Serialize)]
pub struct LiveToggleResponse {
    pub live: bool,
    pub vehicle_id: String,
    pub interval_secs: u64,
    pub notification: Notification,
}
