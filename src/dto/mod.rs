//! DTOs de la API
//!
//! Requests y responses que no son modelos del dominio.

pub mod api_response;
pub mod fleet_dto;
pub mod monitoring_dto;
pub mod telemetry_dto;
pub mod training_dto;

pub use api_response::ApiResponse;
