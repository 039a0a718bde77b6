use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use proyectos_informaticos::config::AppConfig;
use proyectos_informaticos::database::run_migrations;
use proyectos_informaticos::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = AppConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.server.log_level)
        .init();

    info!("🎓 Gestión de Proyectos Informáticos");
    info!("====================================");

    // Inicializar base de datos
    info!("🐘 Conectando a {}", config.database.redacted());
    let pool = match config.database.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    } else {
        warn!("⏭️ Migraciones desactivadas (DB_RUN_MIGRATIONS)");
    }

    let app = create_router(AppState::new(pool));

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;

    info!("🌐 Servidor iniciando en http://{}", config.server.server_url());
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Página de inicio");
    info!("   GET  /health - Estado del servicio");
    info!("👩‍🏫 Docentes:");
    info!("   GET  /docentes - Listar docentes");
    info!("   POST /docente/add - Crear docente");
    info!("   POST /docente/update/:documento - Actualizar docente");
    info!("   GET  /docente/delete/:documento - Eliminar docente");
    info!("📁 Proyectos:");
    info!("   GET  /proyectos - Listar proyectos");
    info!("   POST /proyecto/add - Crear proyecto");
    info!("   POST /proyecto/update/:codigo - Actualizar proyecto");
    info!("   GET  /proyecto/delete/:codigo - Eliminar proyecto");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
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
