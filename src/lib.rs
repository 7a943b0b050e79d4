//! Backend del panel de mantenimiento de flota
//!
//! Registro de vehículos, telemetría y anotaciones simuladas, monitoreo en
//! vivo por sesión y catálogo de entrenamiento VR, expuestos como API JSON.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
