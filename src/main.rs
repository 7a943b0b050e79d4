use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_maintenance::config::EnvironmentConfig;
use fleet_maintenance::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🛠️ Fleet Maintenance - Panel de mantenimiento");
    info!("================================================");
    info!("⚙️ Entorno: {}", config.environment);
    info!("📡 Intervalo de monitoreo en vivo: {:?}", config.live_interval);
    if let Some(seed) = config.simulation_seed {
        info!("🎲 Simulación con semilla fija: {}", seed);
    }

    let addr: SocketAddr = config.server_url().parse()?;
    info!("🧹 Sesiones inactivas se cierran tras {:?}", config.session_idle);

    let state = AppState::new(config);
    let _reaper = state.spawn_session_reaper();
    let app = create_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Sesión:");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/session - Sesión actual");
    info!("🚛 Flota:");
    info!("   GET  /api/vehicles - Buscar, filtrar y ordenar vehículos");
    info!("   GET  /api/vehicles/stats - Contadores del panel");
    info!("   GET|PUT|DELETE /api/vehicles/:id - Detalle / edición / borrado");
    info!("📊 Telemetría:");
    info!("   GET  /api/telemetry/:id/sensors - Lecturas de sensores");
    info!("   GET  /api/telemetry/:id/faults - Log de fallas");
    info!("   GET  /api/telemetry/:id/history - Serie de 24 horas");
    info!("   POST /api/telemetry/:id/refresh - Regenerar datos");
    info!("🔎 AR:");
    info!("   GET  /api/annotations/:id - Puntos de inspección");
    info!("🥽 Entrenamiento VR:");
    info!("   GET  /api/training/modules - Catálogo");
    info!("   GET  /api/training/overview - Resumen");
    info!("   POST /api/training/modules/:id/launch|download");
    info!("📡 Monitoreo en vivo:");
    info!("   GET  /api/monitoring - Estado del monitor");
    info!("   POST /api/monitoring/vehicle - Cambiar vehículo");
    info!("   POST /api/monitoring/live - Activar / pausar");
    info!("   GET  /api/monitoring/faults - Log de fallas del monitor");
    info!("   POST /api/monitoring/notifications/ack - Confirmar notificaciones");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
