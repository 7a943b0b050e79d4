//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: configuración, sesiones activas y el
//! monitor en vivo de cada sesión.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::Session;
use crate::repositories::VehicleRepository;
use crate::services::monitoring_service::LiveMonitor;
use crate::services::training_service::TrainingService;
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: VehicleRepository,
    pub training: TrainingService,
    pub sessions: Arc<RwLock<HashMap<String, Session>>>,
    pub monitors: Arc<RwLock<HashMap<String, LiveMonitor>>>,
    /// Generador raíz de la simulación; cada consumidor recibe un hijo
    seed_rng: Arc<Mutex<StdRng>>,
}

/// Periodo máximo entre barridos de sesiones inactivas
const REAPER_PERIOD: Duration = Duration::from_secs(60);

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let seed_rng = match config.simulation_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            seed_rng: Arc::new(Mutex::new(seed_rng)),
            config,
            vehicles: VehicleRepository::new(),
            training: TrainingService::new(),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            monitors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fuente aleatoria para la simulación, derivada del generador raíz.
    /// Con `SIMULATION_SEED` la secuencia de llamadas es reproducible.
    pub fn rng(&self) -> StdRng {
        let mut root = self.seed_rng.lock().unwrap_or_else(PoisonError::into_inner);
        StdRng::seed_from_u64(root.gen())
    }

    /// Verificar que el vehículo existe en el registro
    pub fn require_vehicle(&self, vehicle_id: &str) -> AppResult<()> {
        if self.vehicles.exists(vehicle_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Vehicle with id '{}' not found", vehicle_id)))
        }
    }

    /// Buscar una sesión por token
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let result = sessions.get(token).cloned();
        if result.is_none() {
            log::warn!("❌ Sesión NO encontrada para token '{}'", token);
        }
        result
    }

    /// Resolver una sesión y marcarla como usada ahora
    pub async fn touch_session(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(session) => {
                session.last_seen = Utc::now();
                Some(session.clone())
            }
            None => {
                log::warn!("❌ Sesión NO encontrada para token '{}'", token);
                None
            }
        }
    }

    /// Almacenar una sesión recién emitida
    pub async fn store_session(&self, session: Session) {
        log::info!("💾 Almacenando sesión para '{}'", session.email);
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session);
        log::info!("💾 Sesiones activas: {}", sessions.len());
    }

    /// Eliminar una sesión y su monitor
    pub async fn remove_session(&self, token: &str) -> Option<Session> {
        let removed = self.sessions.write().await.remove(token);
        // Al soltar el monitor se cancela su tarea
        self.monitors.write().await.remove(token);
        removed
    }

    /// Cerrar las sesiones inactivas y soltar sus monitores
    pub async fn prune_idle_sessions(&self, now: DateTime<Utc>) -> usize {
        let idle = chrono::Duration::from_std(self.config.session_idle)
            .unwrap_or_else(|_| chrono::Duration::days(365));

        let expired: Vec<String> = {
            let mut sessions = self.sessions.write().await;
            let expired: Vec<String> = sessions
                .values()
                .filter(|s| s.is_idle(idle, now))
                .map(|s| s.token.clone())
                .collect();
            for token in &expired {
                sessions.remove(token);
            }
            expired
        };

        if !expired.is_empty() {
            let mut monitors = self.monitors.write().await;
            for token in &expired {
                monitors.remove(token);
            }
            log::info!("🧹 {} sesiones inactivas cerradas", expired.len());
        }
        expired.len()
    }

    /// Tarea de fondo que barre periódicamente las sesiones inactivas
    pub fn spawn_session_reaper(&self) -> JoinHandle<()> {
        let state = self.clone();
        let period = self.config.session_idle.min(REAPER_PERIOD);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                state.prune_idle_sessions(Utc::now()).await;
            }
        })
    }

    /// Crear el monitor de la sesión si todavía no existe
    pub async fn ensure_monitor(&self, token: &str) -> AppResult<()> {
        let mut monitors = self.monitors.write().await;
        if !monitors.contains_key(token) {
            let vehicle = self
                .vehicles
                .default_vehicle()
                .ok_or_else(|| AppError::Internal("Fleet registry is empty".to_string()))?;
            log::info!("📡 Creando monitor para sesión con vehículo {}", vehicle.id);
            monitors.insert(
                token.to_string(),
                LiveMonitor::new(&vehicle.id, self.config.live_interval, self.rng()),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::telemetry_service::generate_sensor_data;

    fn seeded(seed: u64) -> AppState {
        AppState::new(EnvironmentConfig {
            simulation_seed: Some(seed),
            ..EnvironmentConfig::default()
        })
    }

    #[test]
    fn test_seeded_rng_varies_between_calls_and_replays() {
        let state = seeded(7);
        let first = generate_sensor_data(&mut state.rng(), "BUS-001", None);
        let second = generate_sensor_data(&mut state.rng(), "BUS-001", None);
        assert_ne!(first, second);

        let replay = seeded(7);
        let values = |readings: &[crate::models::telemetry::SensorReading]| {
            readings.iter().map(|r| r.value).collect::<Vec<_>>()
        };
        assert_eq!(values(&first), values(&generate_sensor_data(&mut replay.rng(), "BUS-001", None)));
        assert_eq!(values(&second), values(&generate_sensor_data(&mut replay.rng(), "BUS-001", None)));
    }

    #[tokio::test]
    async fn test_prune_idle_sessions_drops_monitor() {
        let state = AppState::new(EnvironmentConfig::default());
        let mut stale = Session::issue("old@fleet.io");
        stale.last_seen = Utc::now() - chrono::Duration::hours(2);
        let fresh = Session::issue("new@fleet.io");

        state.store_session(stale.clone()).await;
        state.store_session(fresh.clone()).await;
        state.ensure_monitor(&stale.token).await.unwrap();
        state.ensure_monitor(&fresh.token).await.unwrap();

        assert_eq!(state.prune_idle_sessions(Utc::now()).await, 1);
        assert!(state.get_session(&stale.token).await.is_none());
        assert!(state.get_session(&fresh.token).await.is_some());

        let monitors = state.monitors.read().await;
        assert!(!monitors.contains_key(&stale.token));
        assert!(monitors.contains_key(&fresh.token));
    }

    #[tokio::test]
    async fn test_touch_session_refreshes_last_seen() {
        let state = AppState::new(EnvironmentConfig::default());
        let mut session = Session::issue("tech@fleet.io");
        session.last_seen = Utc::now() - chrono::Duration::hours(2);
        state.store_session(session.clone()).await;

        let touched = state.touch_session(&session.token).await.unwrap();
        assert!(touched.last_seen > session.last_seen);
        assert_eq!(state.prune_idle_sessions(Utc::now()).await, 0);
        assert!(state.touch_session("missing").await.is_none());
    }
}
