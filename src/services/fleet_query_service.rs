//! Motor de consultas de la flota
//!
//! Filtrado por término y pestaña de estado, y ordenamiento estable por
//! nombre, fecha de creación u horas de uso.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::notification::Notification;
use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Pestaña de estado del panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusTab {
    #[default]
    All,
    Active,
    Maintenance,
    Inactive,
}

impl StatusTab {
    pub fn accepts(&self, status: VehicleStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Active => status == VehicleStatus::Active,
            StatusTab::Maintenance => status == VehicleStatus::Maintenance,
            StatusTab::Inactive => status == VehicleStatus::Inactive,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "createdAt", alias = "created_at")]
    CreatedAt,
    #[serde(rename = "usageHours", alias = "usage_hours")]
    UsageHours,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parámetros de una consulta sobre la flota
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FleetQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusTab,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

/// Contadores del panel principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub inactive: usize,
    /// Vehículos cuyo estado de fallas no es "normal"
    pub alerts: usize,
}

fn compare(a: &Vehicle, b: &Vehicle, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::UsageHours => a.usage_hours.cmp(&b.usage_hours),
    }
}

/// Ejecutar una consulta. Devuelve una vista nueva; el registro no se toca.
///
/// El orden descendente invierte el comparador y no el resultado, de modo
/// que los empates conservan siempre el orden del registro.
pub fn query_fleet<'a>(vehicles: &'a [Vehicle], query: &FleetQuery) -> Vec<&'a Vehicle> {
    let term = query.search.trim();
    let mut result: Vec<&Vehicle> = vehicles
        .iter()
        .filter(|v| query.status.accepts(v.status))
        .filter(|v| term.is_empty() || v.matches_term(term))
        .collect();

    result.sort_by(|a, b| match query.order {
        SortOrder::Asc => compare(a, b, query.sort_by),
        SortOrder::Desc => compare(b, a, query.sort_by),
    });

    tracing::debug!(
        "🔎 Fleet query '{}' ({:?}, {:?} {:?}) -> {} vehicles",
        term,
        query.status,
        query.sort_by,
        query.order,
        result.len()
    );
    result
}

pub fn fleet_stats(vehicles: &[Vehicle]) -> FleetStats {
    let count = |status: VehicleStatus| vehicles.iter().filter(|v| v.status == status).count();
    FleetStats {
        total: vehicles.len(),
        active: count(VehicleStatus::Active),
        maintenance: count(VehicleStatus::Maintenance),
        inactive: count(VehicleStatus::Inactive),
        alerts: vehicles.iter().filter(|v| v.has_alert()).count(),
    }
}

/// Edición simulada: no modifica el registro
pub fn simulate_edit(vehicle: &Vehicle) -> Notification {
    Notification::info(format!("Editing {}", vehicle.name))
        .with_description("This functionality is under development.")
}

/// Borrado simulado: no modifica el registro
pub fn simulate_delete(vehicle: &Vehicle) -> Notification {
    tracing::info!("🗑️ Borrado simulado de {}", vehicle.id);
    Notification::success("Vehicle deleted successfully!")
}
