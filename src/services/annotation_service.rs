//! Generador de anotaciones AR
//!
//! Cinco puntos fijos por vehículo, con una tabla de excepciones por id
//! (datos de demostración) y un pequeño desplazamiento aleatorio en x/y.

use std::collections::HashMap;

use lazy_static::lazy_static;
use rand::Rng;

use crate::models::annotation::{AnnotationPoint, AnnotationType, Position};
use crate::models::notification::Notification;

/// Amplitud máxima del desplazamiento aplicado a x e y
pub const JITTER: f64 = 0.025;

/// Punto base antes de aplicar excepciones y desplazamiento
#[derive(Debug, Clone, Copy)]
pub struct BasePoint {
    pub component: &'static str,
    pub label: &'static str,
    pub position: Position,
    pub kind: AnnotationType,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const BASE_POINTS: [BasePoint; 5] = [
    BasePoint {
        component: "Engine",
        label: "Engine Compartment",
        position: Position { x: 0.35, y: 0.45, z: 0.1 },
        kind: AnnotationType::Info,
        description: "Main power unit housing. Access panel requires removal of 4 bolts.",
        image_url: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=500&auto=format&fit=crop",
    },
    BasePoint {
        component: "Radiator",
        label: "Cooling System",
        position: Position { x: 0.2, y: 0.6, z: 0.2 },
        kind: AnnotationType::Warning,
        description: "Radiator and cooling system. Warning: Temperature sensor indicates values above normal range.",
        image_url: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=500&auto=format&fit=crop",
    },
    BasePoint {
        component: "Hydraulics",
        label: "Hydraulic System",
        position: Position { x: 0.5, y: 0.3, z: 0.15 },
        kind: AnnotationType::Info,
        description: "Hydraulic system controls. Regular inspection recommended.",
        image_url: "https://images.unsplash.com/photo-1519823467902-30e3510003bc?w=500&auto=format&fit=crop",
    },
    BasePoint {
        component: "Transmission",
        label: "Transmission",
        position: Position { x: 0.7, y: 0.5, z: 0.1 },
        kind: AnnotationType::Info,
        description: "Automatic transmission system. Last serviced on 2024-02-15.",
        image_url: "https://images.unsplash.com/photo-1619438600624-a71d2a22e743?w=500&auto=format&fit=crop",
    },
    BasePoint {
        component: "Electrical",
        label: "Electrical System",
        position: Position { x: 0.8, y: 0.2, z: 0.2 },
        kind: AnnotationType::Info,
        description: "Main electrical harness and control unit.",
        image_url: "https://images.unsplash.com/photo-1555436169-20e93ea9a7ff?w=500&auto=format&fit=crop",
    },
];

/// Excepción aplicada a un componente de un vehículo concreto
#[derive(Debug, Clone, Copy)]
pub struct AnnotationOverride {
    pub component: &'static str,
    pub kind: AnnotationType,
    pub description: &'static str,
}

lazy_static! {
    /// Excepciones de demostración, indexadas por id de vehículo
    pub static ref ANNOTATION_OVERRIDES: HashMap<&'static str, Vec<AnnotationOverride>> = {
        let mut overrides = HashMap::new();
        overrides.insert(
            "CONST-003",
            vec![AnnotationOverride {
                component: "Hydraulics",
                kind: AnnotationType::Critical,
                description: "Critical failure detected in primary hydraulic circuit. Immediate maintenance required.",
            }],
        );
        overrides.insert(
            "FIRE-002",
            vec![AnnotationOverride {
                component: "Electrical",
                kind: AnnotationType::Warning,
                description: "Warning: Battery voltage fluctuations detected.",
            }],
        );
        overrides
    };
}

fn find_override(vehicle_id: &str, component: &str) -> Option<&'static AnnotationOverride> {
    ANNOTATION_OVERRIDES
        .get(vehicle_id)
        .and_then(|list| list.iter().find(|o| o.component == component))
}

/// Generar los cinco puntos AR de un vehículo
pub fn generate_annotations<R: Rng + ?Sized>(rng: &mut R, vehicle_id: &str) -> Vec<AnnotationPoint> {
    BASE_POINTS
        .iter()
        .enumerate()
        .map(|(index, base)| {
            let (kind, description) = match find_override(vehicle_id, base.component) {
                Some(o) => (o.kind, o.description),
                None => (base.kind, base.description),
            };

            let position = Position {
                x: base.position.x + rng.gen_range(-JITTER..JITTER),
                y: base.position.y + rng.gen_range(-JITTER..JITTER),
                z: base.position.z,
            };

            AnnotationPoint {
                id: format!("{}-ar-{}", vehicle_id, index + 1),
                vehicle_id: vehicle_id.to_string(),
                position,
                kind,
                label: base.label.to_string(),
                description: description.to_string(),
                component: base.component.to_string(),
                image_url: Some(base.image_url.to_string()),
            }
        })
        .collect()
}

/// Notificación al inspeccionar un punto; los puntos "info" no generan ninguna
pub fn inspect_point(point: &AnnotationPoint) -> Option<Notification> {
    match point.kind {
        AnnotationType::Critical => Some(
            Notification::error(format!("Critical Issue: {}", point.label))
                .with_description(point.description.clone()),
        ),
        AnnotationType::Warning => Some(
            Notification::warning(format!("Warning: {}", point.label))
                .with_description(point.description.clone()),
        ),
        AnnotationType::Info => None,
    }
}
