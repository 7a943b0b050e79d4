//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del registro de flota y sus
//! sub-registros (especificaciones e historial de mantenimiento).

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Estado operativo del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Inactive => "inactive",
        }
    }
}

/// Estado de fallas reportado para el vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FaultStatus {
    Normal,
    Warning,
    Alert,
}

/// Especificaciones técnicas del vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleSpecs {
    pub engine: String,
    pub power: String,
    pub weight: String,
    pub dimensions: String,
    pub fuel_type: String,
    pub transmission: String,
}

/// Entrada del historial de mantenimiento
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceRecord {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub technician: String,
    pub cost: u32,
}

/// Vehicle principal del registro de flota
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    /// Categoría (bus, fire-truck, construction...)
    #[serde(rename = "type")]
    pub category: String,
    pub status: VehicleStatus,
    pub created_at: NaiveDate,
    pub usage_hours: u32,
    pub last_maintenance: NaiveDate,
    pub fault_status: FaultStatus,
    pub image_url: String,
    pub model: String,
    pub manufacturer: String,
    pub year: u16,
    pub specs: VehicleSpecs,
    pub maintenance_history: Vec<MaintenanceRecord>,
}

impl Vehicle {
    /// Verificar si el término de búsqueda aparece en nombre, id o categoría
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.id.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }

    pub fn has_alert(&self) -> bool {
        self.fault_status != FaultStatus::Normal
    }
}
