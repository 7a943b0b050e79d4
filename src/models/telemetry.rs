//! Modelos de telemetría
//!
//! Lecturas de sensores simuladas, entradas del log de fallas y la serie
//! histórica usada por los gráficos del panel IoT.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Tipo de sensor - conjunto cerrado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    Temperature,
    Pressure,
    Voltage,
    Vibration,
    Fuel,
    Oil,
    Battery,
}

impl SensorType {
    /// Orden fijo en el que se generan las lecturas
    pub const ALL: [SensorType; 7] = [
        SensorType::Temperature,
        SensorType::Pressure,
        SensorType::Voltage,
        SensorType::Vibration,
        SensorType::Fuel,
        SensorType::Oil,
        SensorType::Battery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Pressure => "pressure",
            SensorType::Voltage => "voltage",
            SensorType::Vibration => "vibration",
            SensorType::Fuel => "fuel",
            SensorType::Oil => "oil",
            SensorType::Battery => "battery",
        }
    }

    /// Prefijo usado en el id de la lectura
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temp",
            other => other.as_str(),
        }
    }
}

/// Estado de una lectura
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Normal,
    Warning,
    Critical,
}

/// Lectura de sensor simulada
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub id: String,
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub status: SensorStatus,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Severidad de una falla
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FaultSeverity {
    Warning,
    Critical,
}

impl FaultSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultSeverity::Warning => "warning",
            FaultSeverity::Critical => "critical",
        }
    }
}

/// Ciclo de vida de una falla
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FaultLifecycle {
    Active,
    Resolved,
}

/// Entrada del log de fallas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaultLogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub component: String,
    pub description: String,
    pub severity: FaultSeverity,
    pub status: FaultLifecycle,
}

impl FaultLogEntry {
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.component.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.severity.as_str().contains(&term)
    }
}

/// Pestaña de filtrado del log de fallas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FaultTab {
    #[default]
    All,
    Active,
    Resolved,
}

impl FaultTab {
    pub fn accepts(&self, status: FaultLifecycle) -> bool {
        match self {
            FaultTab::All => true,
            FaultTab::Active => status == FaultLifecycle::Active,
            FaultTab::Resolved => status == FaultLifecycle::Resolved,
        }
    }
}

/// Punto horario de la serie histórica
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    /// Hora formateada HH:MM
    pub time: String,
    pub temperature: f64,
    pub pressure: f64,
    pub vibration: f64,
    pub voltage: f64,
}
