//! Generador de telemetría sintética
//!
//! Lecturas de sensores, log de fallas y serie histórica a partir de una
//! fuente aleatoria inyectada. Todas las funciones son puras respecto al
//! `Rng` recibido: con la misma semilla producen la misma salida.
//!
//! El estado de cada lectura se sortea de forma independiente del valor
//! medido. Un valor fuera de `min..=max` puede venir marcado como "normal"
//! y viceversa.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::telemetry::{
    FaultLifecycle, FaultLogEntry, FaultSeverity, FaultTab, HistoryPoint, SensorReading,
    SensorStatus, SensorType,
};

/// Perfil de muestreo de un tipo de sensor
#[derive(Debug, Clone, Copy)]
pub struct SensorProfile {
    pub sensor_type: SensorType,
    /// Rango cerrado de muestreo del valor
    pub range: (f64, f64),
    /// Factor de redondeo (10.0 = un decimal)
    pub scale: f64,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// Probabilidad de sortear "critical" (primer sorteo)
    pub critical_chance: f64,
    /// Probabilidad de sortear "warning" (segundo sorteo)
    pub warning_chance: f64,
}

pub const SENSOR_PROFILES: [SensorProfile; 7] = [
    SensorProfile {
        sensor_type: SensorType::Temperature,
        range: (80.0, 120.0),
        scale: 10.0,
        unit: "°C",
        min: 75.0,
        max: 115.0,
        average: 92.5,
        critical_chance: 0.0,
        warning_chance: 0.2,
    },
    SensorProfile {
        sensor_type: SensorType::Pressure,
        range: (40.0, 65.0),
        scale: 10.0,
        unit: "PSI",
        min: 35.0,
        max: 65.0,
        average: 50.0,
        critical_chance: 0.1,
        warning_chance: 0.3,
    },
    SensorProfile {
        sensor_type: SensorType::Voltage,
        range: (11.5, 14.0),
        scale: 10.0,
        unit: "V",
        min: 11.2,
        max: 14.2,
        average: 12.8,
        critical_chance: 0.0,
        warning_chance: 0.15,
    },
    SensorProfile {
        sensor_type: SensorType::Vibration,
        range: (0.5, 4.0),
        scale: 10.0,
        unit: "mm/s",
        min: 0.2,
        max: 4.0,
        average: 1.5,
        critical_chance: 0.0,
        warning_chance: 0.25,
    },
    SensorProfile {
        sensor_type: SensorType::Fuel,
        range: (0.0, 100.0),
        scale: 1.0,
        unit: "%",
        min: 0.0,
        max: 100.0,
        average: 60.0,
        critical_chance: 0.0,
        warning_chance: 0.2,
    },
    SensorProfile {
        sensor_type: SensorType::Oil,
        range: (75.0, 100.0),
        scale: 10.0,
        unit: "%",
        min: 70.0,
        max: 100.0,
        average: 90.0,
        critical_chance: 0.0,
        warning_chance: 0.0,
    },
    SensorProfile {
        sensor_type: SensorType::Battery,
        range: (11.0, 14.0),
        scale: 10.0,
        unit: "V",
        min: 10.8,
        max: 14.5,
        average: 13.2,
        critical_chance: 0.0,
        warning_chance: 0.1,
    },
];

pub fn profile_for(sensor_type: SensorType) -> &'static SensorProfile {
    SENSOR_PROFILES
        .iter()
        .find(|p| p.sensor_type == sensor_type)
        .unwrap_or(&SENSOR_PROFILES[0])
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    probability > 0.0 && rng.gen::<f64>() < probability
}

fn sample_status<R: Rng + ?Sized>(rng: &mut R, profile: &SensorProfile) -> SensorStatus {
    if chance(rng, profile.critical_chance) {
        SensorStatus::Critical
    } else if chance(rng, profile.warning_chance) {
        SensorStatus::Warning
    } else {
        SensorStatus::Normal
    }
}

fn sample_reading<R: Rng + ?Sized>(
    rng: &mut R,
    vehicle_id: &str,
    profile: &SensorProfile,
    timestamp: DateTime<Utc>,
) -> SensorReading {
    let (low, high) = profile.range;
    let raw = rng.gen_range(low..=high);
    // El redondeo nunca debe sacar el valor del rango de muestreo
    let value = round_to(raw, profile.scale).clamp(low, high);

    SensorReading {
        id: format!("{}-{}-1", vehicle_id, profile.sensor_type.id_prefix()),
        vehicle_id: vehicle_id.to_string(),
        sensor_type: profile.sensor_type,
        value,
        unit: profile.unit.to_string(),
        timestamp,
        status: sample_status(rng, profile),
        min: profile.min,
        max: profile.max,
        average: profile.average,
    }
}

/// Generar las siete lecturas de un vehículo, una por tipo y en orden fijo
pub fn generate_sensor_data<R: Rng + ?Sized>(
    rng: &mut R,
    vehicle_id: &str,
    timestamp: Option<DateTime<Utc>>,
) -> Vec<SensorReading> {
    let timestamp = timestamp.unwrap_or_else(Utc::now);
    SENSOR_PROFILES
        .iter()
        .map(|profile| sample_reading(rng, vehicle_id, profile, timestamp))
        .collect()
}

/// Subconjunto aleatorio de las cuatro fallas de plantilla
pub fn generate_fault_logs<R: Rng + ?Sized>(
    rng: &mut R,
    vehicle_id: &str,
    now: DateTime<Utc>,
) -> Vec<FaultLogEntry> {
    let templates = [
        (
            2,
            "Engine Cooling System",
            "Temperature exceeds normal operating range",
            FaultSeverity::Warning,
            if rng.gen::<f64>() > 0.5 { FaultLifecycle::Active } else { FaultLifecycle::Resolved },
        ),
        (
            8,
            "Hydraulic Pressure System",
            "Pressure drop detected in primary circuit",
            if rng.gen::<f64>() > 0.7 { FaultSeverity::Critical } else { FaultSeverity::Warning },
            if rng.gen::<f64>() > 0.6 { FaultLifecycle::Active } else { FaultLifecycle::Resolved },
        ),
        (
            24,
            "Battery System",
            "Voltage fluctuation outside normal parameters",
            FaultSeverity::Warning,
            FaultLifecycle::Resolved,
        ),
        (
            72,
            "Transmission",
            "Unusual vibration pattern detected",
            if rng.gen::<f64>() > 0.8 { FaultSeverity::Critical } else { FaultSeverity::Warning },
            FaultLifecycle::Resolved,
        ),
    ];

    templates
        .into_iter()
        .enumerate()
        .map(|(index, (hours_ago, component, description, severity, status))| FaultLogEntry {
            id: format!("{}-fault-{}", vehicle_id, index + 1),
            timestamp: now - Duration::hours(hours_ago),
            component: component.to_string(),
            description: description.to_string(),
            severity,
            status,
        })
        .filter(|_| rng.gen::<f64>() > 0.3)
        .collect()
}

/// Serie de 24 puntos horarios terminando en `now`
pub fn generate_history<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<HistoryPoint> {
    (0..24)
        .map(|i| {
            let time = now - Duration::hours(23 - i);
            HistoryPoint {
                time: time.format("%H:%M").to_string(),
                temperature: 80.0 + rng.gen::<f64>() * 40.0,
                pressure: 40.0 + rng.gen::<f64>() * 25.0,
                vibration: 0.5 + rng.gen::<f64>() * 3.5,
                voltage: 11.5 + rng.gen::<f64>() * 2.5,
            }
        })
        .collect()
}

/// Filtrar el log de fallas por término (componente, descripción o
/// severidad) y por pestaña de ciclo de vida
pub fn filter_fault_logs<'a>(
    logs: &'a [FaultLogEntry],
    term: &str,
    tab: FaultTab,
) -> Vec<&'a FaultLogEntry> {
    let term = term.trim();
    logs.iter()
        .filter(|log| tab.accepts(log.status))
        .filter(|log| term.is_empty() || log.matches_term(term))
        .collect()
}
