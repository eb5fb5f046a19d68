use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::{create_pool, run_migrations};
use vehicle_rental::routes::create_app_router;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental Backend");
    info!("=========================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("🚙 Catálogo:");
    info!("   GET  /api/vehicles - Listar vehículos (filtros: category, location, min_price, max_price)");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("📅 Reservas:");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings - Listar reservas");
    info!("   DELETE /api/bookings/cancel/:id - Cancelar reserva");
    info!("   POST /api/bookings/pay/:id - Marcar reserva como pagada");
    info!("   GET  /api/bookings/history/:vehicle_id - Historial de alquileres");
    info!("⭐ Reviews:");
    info!("   POST /api/reviews - Enviar review");
    info!("   GET  /api/reviews/:vehicle_id - Reviews aprobadas");
    info!("   POST /api/reviews/approve/:id - Aprobar review (admin)");
    info!("🛠  Admin (requiere rol admin):");
    info!("   GET  /api/admin/users - Listar usuarios");
    info!("   GET/POST /api/admin/vehicles - Listar/crear vehículos");
    info!("   PUT/DELETE /api/admin/vehicles/:id - Actualizar/eliminar vehículo");
    info!("   POST /api/admin/vehicles/:id/approve|reject - Disponibilidad");
    info!("   GET  /api/admin/bookings - Listar reservas");
    info!("   PUT  /api/admin/bookings/:id/status - Actualizar estado");
    info!("   GET  /api/admin/reviews - Listar reviews");
    info!("   POST /api/admin/reviews/:id/approve - Aprobar review");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

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
