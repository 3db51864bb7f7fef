//! # SkillSnap Server
//!
//! Main entry point for the SkillSnap application.

use skillsnap_config::ConfigLoader;
use skillsnap_core::{SkillSnapError, SkillSnapResult};
use skillsnap_repository::create_pool;
use skillsnap_rest::create_router;
use tokio::signal;
use tracing::{error, info};

mod di;
mod startup;

use di::AppModuleBuilder;

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting SkillSnap Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> SkillSnapResult<()> {
    // Load configuration
    let config = ConfigLoader::from_default_location()?;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Wire the object graph
    let module = AppModuleBuilder::new()
        .with_database_pool(db_pool)
        .with_security_config(config.security.clone())
        .with_cache_config(config.cache.clone())
        .build()?;

    let router = create_router(
        module.app_state(),
        module.auth_middleware_state(),
        &config.server,
    );

    // Start REST server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);
    startup::print_startup_info(&config.server.host, config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SkillSnapError::Internal(format!("Failed to bind {addr}: {e}")))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SkillSnapError::Internal(format!("Server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,skillsnap=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

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
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
