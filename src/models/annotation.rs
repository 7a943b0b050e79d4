//! Puntos de anotación de la vista AR

use serde::{Deserialize, Serialize};

/// Tipo de anotación
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationType {
    Info,
    Warning,
    Critical,
}

/// Posición normalizada sobre la imagen del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotationPoint {
    pub id: String,
    pub vehicle_id: String,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: AnnotationType,
    pub label: String,
    pub description: String,
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
