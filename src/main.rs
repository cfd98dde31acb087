use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use bus_maintenance::config::EnvironmentConfig;
use bus_maintenance::routes::build_router;
use bus_maintenance::state::AppState;
use bus_maintenance::storage::{FleetStore, UserStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Art Luxury Bus - API de gestión de flota");
    info!("===========================================");

    let config = EnvironmentConfig::default();

    // Inicializar almacenamiento y usuarios demo
    let store = FleetStore::new();
    let users = match UserStore::seed_demo() {
        Ok(users) => {
            info!("✅ Usuarios demo cargados");
            users
        }
        Err(e) => {
            error!("❌ Error cargando usuarios demo: {}", e);
            return Err(anyhow::anyhow!("Error de inicialización: {}", e));
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app_state = AppState::new(store, users, config);
    let app = build_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/ping - Endpoint de prueba");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/login - Login con email/password");
    info!("🔧 Endpoints - Pannes:");
    info!("   POST   /api/buses/:bus_id/breakdowns - Registrar panne");
    info!("   GET    /api/buses/:bus_id/breakdowns - Listar pannes");
    info!("   PUT    /api/buses/:bus_id/breakdowns/:id - Actualizar panne");
    info!("   DELETE /api/buses/:bus_id/breakdowns/:id - Eliminar panne");
    info!("🛠️ Endpoints - Visites techniques:");
    info!("   POST   /api/buses/:bus_id/technical-visits - Registrar visite");
    info!("   GET    /api/buses/:bus_id/technical-visits - Listar visites");
    info!("   PUT    /api/buses/:bus_id/technical-visits/:id - Actualizar visite");
    info!("   DELETE /api/buses/:bus_id/technical-visits/:id - Eliminar visite");
    info!("📋 Endpoints - Assurances:");
    info!("   POST   /api/buses/:bus_id/insurance-records - Registrar assurance");
    info!("   GET    /api/buses/:bus_id/insurance-records - Listar assurances");
    info!("   PUT    /api/buses/:bus_id/insurance-records/:id - Actualizar assurance");
    info!("   DELETE /api/buses/:bus_id/insurance-records/:id - Eliminar assurance");
    info!("🛢️ Endpoints - Vidanges:");
    info!("   POST   /api/buses/:bus_id/vidanges - Registrar vidange");
    info!("   GET    /api/buses/:bus_id/vidanges - Listar vidanges");
    info!("   PUT    /api/buses/:bus_id/vidanges/:id - Actualizar vidange");
    info!("   DELETE /api/buses/:bus_id/vidanges/:id - Eliminar vidange");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
