//! Services module
//!
//! Este módulo contiene la lógica de negocio: consultas sobre la flota,
//! generadores de telemetría y anotaciones, monitoreo en vivo, catálogo de
//! entrenamiento y sesiones.

pub mod annotation_service;
pub mod auth_service;
pub mod fleet_query_service;
pub mod monitoring_service;
pub mod telemetry_service;
pub mod training_service;

pub use auth_service::AuthService;
pub use monitoring_service::LiveMonitor;
pub use training_service::TrainingService;
