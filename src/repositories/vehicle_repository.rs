//! Registro estático de la flota
//!
//! La flota es una lista fija en memoria, inmutable durante toda la vida
//! del proceso. La edición y el borrado desde la UI son simulados y nunca
//! llegan hasta aquí.

use chrono::NaiveDate;
use lazy_static::lazy_static;

use crate::models::vehicle::{FaultStatus, MaintenanceRecord, Vehicle, VehicleSpecs, VehicleStatus};

type HistoryRow = (&'static str, &'static str, &'static str, &'static str, u32);

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    name: &str,
    category: &str,
    status: VehicleStatus,
    created_at: &str,
    usage_hours: u32,
    last_maintenance: &str,
    fault_status: FaultStatus,
    image_url: &str,
    model: &str,
    manufacturer: &str,
    year: u16,
    specs: [&str; 6],
    history: &[HistoryRow],
) -> Vehicle {
    let [engine, power, weight, dimensions, fuel_type, transmission] = specs;
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        status,
        created_at: date(created_at),
        usage_hours,
        last_maintenance: date(last_maintenance),
        fault_status,
        image_url: image_url.to_string(),
        model: model.to_string(),
        manufacturer: manufacturer.to_string(),
        year,
        specs: VehicleSpecs {
            engine: engine.to_string(),
            power: power.to_string(),
            weight: weight.to_string(),
            dimensions: dimensions.to_string(),
            fuel_type: fuel_type.to_string(),
            transmission: transmission.to_string(),
        },
        maintenance_history: history
            .iter()
            .map(|(day, kind, description, technician, cost)| MaintenanceRecord {
                date: date(day),
                kind: kind.to_string(),
                description: description.to_string(),
                technician: technician.to_string(),
                cost: *cost,
            })
            .collect(),
    }
}

lazy_static! {
    static ref FLEET: Vec<Vehicle> = vec![
        vehicle(
            "BUS-001", "City Transit Bus XL-5000", "bus", VehicleStatus::Active,
            "2023-06-15", 2450, "2024-03-20", FaultStatus::Normal,
            "https://images.unsplash.com/photo-1570125909232-eb263c188f7e?q=80&w=2940&auto=format&fit=crop",
            "XL-5000", "UrbanTransit Inc.", 2023,
            ["Cummins B6.7 Diesel Hybrid", "280 HP / 660 lb-ft", "13,600 kg", "12.2m x 2.55m x 3.4m", "Diesel-Electric Hybrid", "Allison B500R"],
            &[
                ("2024-03-20", "Regular", "Scheduled 10,000 mile service", "Maria Rodriguez", 1250),
                ("2023-12-05", "Repair", "Brake system overhaul", "John Deere", 3200),
            ],
        ),
        vehicle(
            "FIRE-002", "Fire Truck Responder 9000", "fire-truck", VehicleStatus::Active,
            "2022-11-10", 1245, "2024-02-15", FaultStatus::Warning,
            "https://images.unsplash.com/photo-1600100591289-ad2087bcce22?q=80&w=1974&auto=format&fit=crop",
            "Responder 9000", "EmergencyTech", 2022,
            ["Detroit Diesel DD13", "525 HP / 1850 lb-ft", "19,500 kg", "10.5m x 2.6m x 3.8m", "Diesel", "Allison 4000 EVS"],
            &[
                ("2024-02-15", "Inspection", "Annual pump testing and certification", "Robert Chang", 1800),
                ("2023-09-22", "Repair", "Hydraulic system pressure issue", "Sarah Williams", 4500),
            ],
        ),
        vehicle(
            "CONST-003", "Heavy Excavator E-750", "construction", VehicleStatus::Maintenance,
            "2021-09-22", 3670, "2024-04-01", FaultStatus::Alert,
            "https://images.unsplash.com/photo-1603321544554-9f4a331bf8ed?q=80&w=1974&auto=format&fit=crop",
            "E-750", "BuildCraft", 2021,
            ["Caterpillar C15", "428 HP / 1750 lb-ft", "75,000 kg", "11.2m x 3.5m x 4.2m", "Diesel", "Powershift 5F/3R"],
            &[
                ("2024-04-01", "Major", "Hydraulic system overhaul", "Mike Johnson", 12500),
                ("2023-11-15", "Repair", "Track assembly replacement", "David Kim", 8700),
                ("2023-06-30", "Regular", "2000-hour service", "Lisa Chen", 3400),
            ],
        ),
        vehicle(
            "BUS-004", "Electric Transit Bus E-2000", "bus", VehicleStatus::Active,
            "2023-03-05", 1120, "2024-03-10", FaultStatus::Normal,
            "https://images.unsplash.com/photo-1594678780448-fea672d0e93d?q=80&w=2787&auto=format&fit=crop",
            "E-2000", "TransTech", 2023,
            ["Mercedes-Benz E200", "180 HP / 400 lb-ft", "10,000 kg", "10.5m x 2.5m x 3.2m", "Electric", "E-CVT"],
            &[
                ("2024-03-10", "Regular", "Scheduled 5000 mile service", "Emily Johnson", 800),
                ("2023-08-15", "Repair", "Battery pack replacement", "Alex Smith", 1500),
            ],
        ),
        vehicle(
            "EMR-005", "Ambulance Response Unit", "emergency", VehicleStatus::Active,
            "2023-01-18", 2210, "2024-02-28", FaultStatus::Normal,
            "https://images.unsplash.com/photo-1613617639768-bc066d45527f?q=80&w=1942&auto=format&fit=crop",
            "Ambulance", "HealthCareTech", 2023,
            ["Volkswagen TDI", "150 HP / 350 lb-ft", "7,500 kg", "9.5m x 2.4m x 3.0m", "Diesel", "6-speed manual"],
            &[
                ("2024-02-28", "Inspection", "Annual engine tune-up", "James Brown", 1200),
                ("2023-10-10", "Repair", "Brake system inspection", "Samantha Davis", 1000),
            ],
        ),
        vehicle(
            "HAUL-006", "Mining Haul Truck H-3500", "mining", VehicleStatus::Active,
            "2022-04-12", 4580, "2024-01-25", FaultStatus::Warning,
            "https://images.unsplash.com/photo-1562309555-a6e75287de44?q=80&w=1935&auto=format&fit=crop",
            "H-3500", "MiningTech", 2022,
            ["Komatsu K250", "600 HP / 1800 lb-ft", "120,000 kg", "12.5m x 3.8m x 4.5m", "Diesel", "ZF 1000"],
            &[
                ("2024-01-25", "Major", "Engine overhaul", "Chris Wilson", 25000),
                ("2023-07-10", "Repair", "Track assembly replacement", "Linda Johnson", 10000),
                ("2023-03-15", "Regular", "2500-hour service", "David Lee", 5000),
            ],
        ),
        vehicle(
            "FARM-007", "Agricultural Harvester A-200", "agricultural", VehicleStatus::Inactive,
            "2021-08-30", 3200, "2023-11-15", FaultStatus::Normal,
            "https://images.unsplash.com/photo-1590923559909-eb5245128679?q=80&w=1965&auto=format&fit=crop",
            "A-200", "Agritech", 2021,
            ["John Deere 3200", "200 HP / 400 lb-ft", "10,000 kg", "10.0m x 2.5m x 3.0m", "Diesel", "6-speed manual"],
            &[
                ("2023-11-15", "Regular", "2000-hour service", "Michael Brown", 3000),
                ("2023-05-10", "Repair", "Brake system inspection", "Emily Davis", 1500),
            ],
        ),
        vehicle(
            "CONST-008", "Mobile Crane MC-500", "construction", VehicleStatus::Active,
            "2022-06-25", 2840, "2024-03-05", FaultStatus::Normal,
            "https://images.unsplash.com/photo-1589756713299-be2388b3179f?q=80&w=1972&auto=format&fit=crop",
            "MC-500", "ConstructionTech", 2022,
            ["Caterpillar C15", "428 HP / 1750 lb-ft", "75,000 kg", "11.2m x 3.5m x 4.2m", "Diesel", "Powershift 5F/3R"],
            &[
                ("2024-03-05", "Regular", "2000-hour service", "David Lee", 3000),
                ("2023-10-10", "Repair", "Track assembly replacement", "Linda Johnson", 10000),
            ],
        ),
        vehicle(
            "WASTE-009", "Waste Collection Truck W-100", "utility", VehicleStatus::Maintenance,
            "2022-10-10", 2050, "2024-04-02", FaultStatus::Alert,
            "https://images.unsplash.com/photo-1563254336574-f8325043f1f0?q=80&w=1935&auto=format&fit=crop",
            "W-100", "WasteTech", 2022,
            ["Cummins B6.7 Diesel", "280 HP / 660 lb-ft", "13,600 kg", "12.2m x 2.55m x 3.4m", "Diesel-Electric Hybrid", "Allison B500R"],
            &[
                ("2024-04-02", "Major", "Engine overhaul", "John Deere", 25000),
                ("2023-08-15", "Repair", "Brake system inspection", "Samantha Davis", 1500),
            ],
        ),
    ];
}

/// Acceso de solo lectura al registro de flota
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleRepository;

impl VehicleRepository {
    pub fn new() -> Self {
        Self
    }

    /// Todos los vehículos, en el orden del registro
    pub fn all(&self) -> &'static [Vehicle] {
        FLEET.as_slice()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&'static Vehicle> {
        FLEET.iter().find(|v| v.id == id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Vehículo seleccionado por defecto en las vistas de monitoreo
    pub fn default_vehicle(&self) -> Option<&'static Vehicle> {
        FLEET.first()
    }
}
