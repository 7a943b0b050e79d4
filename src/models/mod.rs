//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del panel de
//! mantenimiento: flota, telemetría, anotaciones AR, entrenamiento VR,
//! sesiones y notificaciones.

pub mod annotation;
pub mod auth;
pub mod notification;
pub mod telemetry;
pub mod training;
pub mod vehicle;

pub use annotation::*;
pub use auth::*;
pub use notification::*;
pub use telemetry::*;
pub use training::*;
pub use vehicle::*;
