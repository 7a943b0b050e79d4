//! Repositorios de datos estáticos
//!
//! No hay base de datos: la flota y el catálogo de entrenamiento viven en
//! memoria y son de solo lectura.

pub mod training_repository;
pub mod vehicle_repository;

pub use training_repository::TrainingRepository;
pub use vehicle_repository::VehicleRepository;
