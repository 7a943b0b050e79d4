//! Monitoreo en vivo
//!
//! Máquina de dos estados (idle / live). En estado live una tarea de tokio
//! regenera las lecturas del vehículo seleccionado en cada intervalo y, con
//! cierta probabilidad, sintetiza una falla nueva que se antepone al log y
//! se publica como notificación pendiente.
//!
//! Existe como mucho una tarea por monitor. Cancelarla (stop, cambio de
//! vehículo o drop) incrementa `generation` bajo el lock de escritura, de
//! modo que un tick ya en curso de la tarea cancelada nunca vuelve a
//! escribir el estado.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::models::notification::Notification;
use crate::models::telemetry::{
    FaultLifecycle, FaultLogEntry, FaultSeverity, HistoryPoint, SensorReading,
};
use crate::services::telemetry_service::{generate_fault_logs, generate_history, generate_sensor_data};

/// Probabilidad de sintetizar una falla en cada tick
pub const LIVE_FAULT_CHANCE: f64 = 0.15;
/// Probabilidad de que la falla sintetizada sea crítica
pub const LIVE_CRITICAL_CHANCE: f64 = 0.3;

pub const LIVE_FAULT_COMPONENTS: [&str; 5] = ["Engine", "Hydraulics", "Electrical", "Transmission", "Brakes"];
pub const LIVE_FAULT_DESCRIPTIONS: [&str; 5] = [
    "High temperature detected",
    "Pressure drop",
    "Voltage fluctuation",
    "Abnormal vibration",
    "Low fluid level",
];

/// Estado observable de un monitor
#[derive(Debug, Clone, Serialize)]
pub struct MonitorState {
    pub vehicle_id: String,
    pub live: bool,
    pub readings: Vec<SensorReading>,
    pub fault_log: Vec<FaultLogEntry>,
    pub history: Vec<HistoryPoint>,
    /// Notificaciones pendientes de confirmar por el cliente
    pub notifications: Vec<Notification>,
    /// Ticks ejecutados para el vehículo actual
    pub ticks: u64,
    #[serde(skip)]
    generation: u64,
}

impl MonitorState {
    fn load<R: Rng + ?Sized>(rng: &mut R, vehicle_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            vehicle_id: vehicle_id.to_string(),
            live: false,
            readings: generate_sensor_data(rng, vehicle_id, Some(now)),
            fault_log: generate_fault_logs(rng, vehicle_id, now),
            history: generate_history(rng, now),
            notifications: Vec::new(),
            ticks: 0,
            generation: 0,
        }
    }

    /// Reemplazar todos los datos por los de otro vehículo
    fn switch_to<R: Rng + ?Sized>(&mut self, rng: &mut R, vehicle_id: &str, now: DateTime<Utc>) {
        self.vehicle_id = vehicle_id.to_string();
        self.reload(rng, now);
        self.ticks = 0;
    }

    /// Regenerar lecturas, log de fallas e historial del vehículo actual
    fn reload<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) {
        self.readings = generate_sensor_data(rng, &self.vehicle_id, Some(now));
        self.fault_log = generate_fault_logs(rng, &self.vehicle_id, now);
        self.history = generate_history(rng, now);
    }
}

/// Sintetizar una falla del monitoreo en vivo
pub fn synthesize_live_fault<R: Rng + ?Sized>(
    rng: &mut R,
    vehicle_id: &str,
    now: DateTime<Utc>,
) -> FaultLogEntry {
    let component = LIVE_FAULT_COMPONENTS[rng.gen_range(0..LIVE_FAULT_COMPONENTS.len())];
    let description = LIVE_FAULT_DESCRIPTIONS[rng.gen_range(0..LIVE_FAULT_DESCRIPTIONS.len())];
    let severity = if rng.gen::<f64>() < LIVE_CRITICAL_CHANCE {
        FaultSeverity::Critical
    } else {
        FaultSeverity::Warning
    };

    FaultLogEntry {
        id: format!("{}-fault-{}", vehicle_id, now.timestamp_millis()),
        timestamp: now,
        component: component.to_string(),
        description: description.to_string(),
        severity,
        status: FaultLifecycle::Active,
    }
}

/// Notificación asociada a una falla; la urgencia sigue a la severidad
pub fn fault_notification(fault: &FaultLogEntry) -> Notification {
    let notification = match fault.severity {
        FaultSeverity::Critical => Notification::error(format!("Critical Alert: {}", fault.component)),
        FaultSeverity::Warning => Notification::warning(format!("Warning: {}", fault.component)),
    };
    notification.with_description(fault.description.clone())
}

/// Un tick del monitoreo: reemplaza las lecturas y quizá añade una falla
pub fn run_tick<R: Rng + ?Sized>(
    state: &mut MonitorState,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Option<FaultLogEntry> {
    state.readings = generate_sensor_data(rng, &state.vehicle_id, Some(now));
    state.ticks += 1;

    if rng.gen::<f64>() >= LIVE_FAULT_CHANCE {
        return None;
    }

    let fault = synthesize_live_fault(rng, &state.vehicle_id, now);
    tracing::warn!(
        "🚨 Falla simulada en {}: {} ({})",
        state.vehicle_id,
        fault.component,
        fault.severity.as_str()
    );
    state.notifications.push(fault_notification(&fault));
    state.fault_log.insert(0, fault.clone());
    Some(fault)
}

/// Monitor en vivo de una sesión
pub struct LiveMonitor {
    state: Arc<RwLock<MonitorState>>,
    rng: StdRng,
    interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl LiveMonitor {
    /// Crear un monitor en estado idle con los datos iniciales del vehículo
    pub fn new(vehicle_id: &str, interval: Duration, mut rng: StdRng) -> Self {
        let state = MonitorState::load(&mut rng, vehicle_id, Utc::now());
        Self {
            state: Arc::new(RwLock::new(state)),
            rng,
            interval,
            task: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.task.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn snapshot(&self) -> MonitorState {
        self.state.read().await.clone()
    }

    /// Pasar a live. Si ya está en live no se crea una segunda tarea.
    /// Cada cambio de estado live regenera los datos del vehículo.
    pub async fn start(&mut self) -> Notification {
        if self.task.is_none() {
            let generation = {
                let mut state = self.state.write().await;
                state.generation += 1;
                state.live = true;
                state.reload(&mut self.rng, Utc::now());
                state.generation
            };
            self.spawn_task(generation);
            tracing::info!("📡 Monitoreo en vivo activado (cada {:?})", self.interval);
        }
        Notification::info("Live monitoring activated")
    }

    /// Pasar a idle, cancelando la tarea pendiente
    pub async fn stop(&mut self) -> Notification {
        if self.task.is_some() {
            self.cancel_task().await;
            self.state.write().await.reload(&mut self.rng, Utc::now());
            tracing::info!("⏸️ Monitoreo en vivo pausado");
        }
        Notification::info("Live monitoring paused")
    }

    pub async fn toggle(&mut self) -> Notification {
        if self.is_live() {
            self.stop().await
        } else {
            self.start().await
        }
    }

    /// Fijar el estado live; alternar si no se indica
    pub async fn set_live(&mut self, live: Option<bool>) -> Notification {
        match live {
            Some(true) => self.start().await,
            Some(false) => self.stop().await,
            None => self.toggle().await,
        }
    }

    /// Cambiar de vehículo. Descarta lecturas y log anteriores y, si el
    /// monitor estaba en live, reinicia la tarea solo para el vehículo nuevo.
    pub async fn select_vehicle(&mut self, vehicle_id: &str) {
        let was_live = self.is_live();
        self.cancel_task().await;

        {
            let mut state = self.state.write().await;
            state.switch_to(&mut self.rng, vehicle_id, Utc::now());
        }
        tracing::info!("🚛 Vehículo monitoreado: {}", vehicle_id);

        if was_live {
            self.start().await;
        }
    }

    /// Regenerar lecturas y log de fallas del vehículo actual
    pub async fn refresh(&mut self) -> Notification {
        let now = Utc::now();
        let mut state = self.state.write().await;
        let vehicle_id = state.vehicle_id.clone();
        state.readings = generate_sensor_data(&mut self.rng, &vehicle_id, Some(now));
        state.fault_log = generate_fault_logs(&mut self.rng, &vehicle_id, now);
        Notification::success("Sensor data refreshed")
    }

    /// Vaciar y devolver las notificaciones pendientes
    pub async fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().await.notifications)
    }

    async fn cancel_task(&mut self) {
        {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.live = false;
        }
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }

    fn spawn_task(&mut self, generation: u64) {
        let state = Arc::clone(&self.state);
        let period = self.interval;
        let mut rng = StdRng::seed_from_u64(self.rng.gen());

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut guard = state.write().await;
                if guard.generation != generation {
                    break;
                }
                run_tick(&mut guard, &mut rng, Utc::now());
            }
        }));
    }
}

impl Drop for LiveMonitor {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationLevel;

    fn monitor(vehicle_id: &str) -> LiveMonitor {
        LiveMonitor::new(vehicle_id, Duration::from_secs(5), StdRng::seed_from_u64(17))
    }

    async fn advance(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_monitor_never_ticks() {
        let monitor = monitor("BUS-001");
        advance(60_000).await;
        let snapshot = monitor.snapshot().await;
        assert!(!snapshot.live);
        assert_eq!(snapshot.ticks, 0);
        assert_eq!(snapshot.readings.len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_ticks_every_interval() {
        let mut monitor = monitor("BUS-001");
        monitor.start().await;
        assert!(monitor.is_live());

        advance(4_900).await;
        assert_eq!(monitor.snapshot().await.ticks, 0);
        advance(200).await;
        assert_eq!(monitor.snapshot().await.ticks, 1);
        advance(10_000).await;
        assert_eq!(monitor.snapshot().await.ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_updates_after_toggle_off() {
        let mut monitor = monitor("BUS-001");
        monitor.toggle().await;
        advance(5_100).await;
        let before = monitor.snapshot().await;
        assert_eq!(before.ticks, 1);

        let notification = monitor.toggle().await;
        assert_eq!(notification.title, "Live monitoring paused");
        assert!(!monitor.is_live());
        let paused = monitor.snapshot().await;

        advance(60_000).await;
        let after = monitor.snapshot().await;
        assert_eq!(after.ticks, 1);
        assert_eq!(after.readings, paused.readings);
        assert_eq!(after.fault_log, paused.fault_log);
        assert_eq!(after.history, paused.history);
        assert!(!after.live);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_regenerates_vehicle_data() {
        let mut monitor = monitor("CONST-003");
        let idle = monitor.snapshot().await;

        monitor.start().await;
        let live = monitor.snapshot().await;
        assert_eq!(live.vehicle_id, "CONST-003");
        assert_ne!(live.readings, idle.readings);
        assert_ne!(live.history, idle.history);
        assert_eq!(live.ticks, 0);

        monitor.stop().await;
        let paused = monitor.snapshot().await;
        assert_ne!(paused.readings, live.readings);
        assert!(paused.readings.iter().all(|r| r.vehicle_id == "CONST-003"));

        // Una segunda llamada a stop no cambia nada
        monitor.stop().await;
        assert_eq!(monitor.snapshot().await.readings, paused.readings);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_keeps_single_timer() {
        let mut monitor = monitor("BUS-001");
        monitor.start().await;
        monitor.start().await;
        advance(5_100).await;
        assert_eq!(monitor.snapshot().await.ticks, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_vehicle_restarts_for_new_id_only() {
        let mut monitor = monitor("BUS-001");
        monitor.start().await;
        advance(5_100).await;
        assert_eq!(monitor.snapshot().await.ticks, 1);

        monitor.select_vehicle("FIRE-002").await;
        assert!(monitor.is_live());
        let switched = monitor.snapshot().await;
        assert_eq!(switched.vehicle_id, "FIRE-002");
        assert_eq!(switched.ticks, 0);
        assert!(switched.readings.iter().all(|r| r.vehicle_id == "FIRE-002"));
        assert!(switched.fault_log.iter().all(|f| f.id.starts_with("FIRE-002-")));

        // El timer anterior habría disparado a los 10s
        advance(4_950).await;
        assert_eq!(monitor.snapshot().await.ticks, 0);

        advance(200).await;
        let ticked = monitor.snapshot().await;
        assert_eq!(ticked.ticks, 1);
        assert!(ticked.readings.iter().all(|r| r.vehicle_id == "FIRE-002"));
        assert!(ticked.fault_log.iter().all(|f| !f.id.starts_with("BUS-001-")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_vehicle_while_idle_stays_idle() {
        let mut monitor = monitor("BUS-001");
        monitor.select_vehicle("CONST-003").await;
        assert!(!monitor.is_live());
        advance(30_000).await;
        let snapshot = monitor.snapshot().await;
        assert_eq!(snapshot.vehicle_id, "CONST-003");
        assert_eq!(snapshot.ticks, 0);
    }

    #[test]
    fn test_run_tick_fault_rate_and_notifications() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = MonitorState::load(&mut rng, "HAUL-006", Utc::now());
        let initial_faults = state.fault_log.len();

        let mut synthesized = 0;
        for _ in 0..2000 {
            if let Some(fault) = run_tick(&mut state, &mut rng, Utc::now()) {
                synthesized += 1;
                assert_eq!(state.fault_log[0], fault);
                assert_eq!(fault.status, FaultLifecycle::Active);
                assert!(LIVE_FAULT_COMPONENTS.contains(&fault.component.as_str()));
                assert!(LIVE_FAULT_DESCRIPTIONS.contains(&fault.description.as_str()));

                let notification = state.notifications.last().unwrap();
                match fault.severity {
                    FaultSeverity::Critical => {
                        assert_eq!(notification.level, NotificationLevel::Error);
                        assert_eq!(notification.title, format!("Critical Alert: {}", fault.component));
                    }
                    FaultSeverity::Warning => {
                        assert_eq!(notification.level, NotificationLevel::Warning);
                        assert_eq!(notification.title, format!("Warning: {}", fault.component));
                    }
                }
            }
            assert_eq!(state.readings.len(), 7);
        }

        assert_eq!(state.ticks, 2000);
        assert_eq!(state.fault_log.len(), initial_faults + synthesized);
        assert_eq!(state.notifications.len(), synthesized);
        // ~15% de 2000
        assert!((200..=400).contains(&synthesized), "got {}", synthesized);
    }

    #[tokio::test]
    async fn test_take_notifications_drains() {
        let mut rng = StdRng::seed_from_u64(8);
        let monitor = monitor("BUS-001");
        {
            let mut state = monitor.state.write().await;
            while state.notifications.is_empty() {
                run_tick(&mut state, &mut rng, Utc::now());
            }
        }
        assert!(!monitor.take_notifications().await.is_empty());
        assert!(monitor.take_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_replaces_readings() {
        let mut monitor = monitor("BUS-001");
        let notification = monitor.refresh().await;
        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.title, "Sensor data refreshed");
        assert_eq!(monitor.snapshot().await.readings.len(), 7);
    }
}
