use serde::{Deserialize, Serialize};

use crate::models::annotation::AnnotationPoint;
use crate::models::notification::Notification;
use crate::models::telemetry::{FaultLogEntry, FaultTab, SensorReading};

pub const EMPTY_FAULTS_MESSAGE: &str = "No faults found. The vehicle is operating normally.";

// Filtros del log de fallas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaultLogFilters {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: FaultTab,
}

// Response del log de fallas filtrado
#[derive(Debug, Serialize)]
pub struct FaultLogResponse {
    pub vehicle_id: String,
    pub total: usize,
    pub faults: Vec<FaultLogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl FaultLogResponse {
    pub fn new(vehicle_id: &str, faults: Vec<&FaultLogEntry>) -> Self {
        let empty_message = faults.is_empty().then(|| EMPTY_FAULTS_MESSAGE.to_string());
        Self {
            vehicle_id: vehicle_id.to_string(),
            total: faults.len(),
            faults: faults.into_iter().cloned().collect(),
            empty_message,
        }
    }
}

// Response de la vista AR
#[derive(Debug, Serialize)]
pub struct AnnotationsResponse {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub points: Vec<AnnotationPoint>,
    /// Notificación que produciría inspeccionar cada punto, por id
    pub alerts: Vec<PointAlert>,
}

#[derive(Debug, Serialize)]
pub struct PointAlert {
    pub point_id: String,
    pub notification: Notification,
}

// Response del botón de refresco
#[derive(Debug, Serialize)]
pub struct TelemetryRefreshResponse {
    pub vehicle_id: String,
    pub readings: Vec<SensorReading>,
    pub faults: Vec<FaultLogEntry>,
    pub notification: Notification,
}
