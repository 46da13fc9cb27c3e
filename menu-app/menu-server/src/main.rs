use std::sync::Arc;

use anyhow::Context;
use menu_api::{build_router, middleware::apply_http_layers, AppState};
use menu_core::repositories::{MenuItemRepository, MenuRepository};
use menu_infrastructure::{create_pool, run_migrations, MemoryStore, PgMenuItemRepository, PgMenuRepository};
use menu_shared::config::{AppConfig, StoreBackend};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes the file writer on drop
    let _log_guard = menu_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({} environment)...", config.app.name, config.app.env);

    // Tree Store
    let (menu_repo, item_repo) = match open_store(&config).await {
        Ok(repos) => repos,
        Err(e) => {
            error!("Failed to open {} store: {:#}", config.store.backend.as_str(), e);
            std::process::exit(1);
        }
    };

    // Build router
    let state = AppState::new(menu_repo, item_repo, config.store.backend);
    let app = apply_http_layers(build_router(state), &config.http)
        .context("invalid http.allowed_origins entry")?;

    // Bind address
    let addr = config.app.socket_addr()?;
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

type Repositories = (Arc<dyn MenuRepository>, Arc<dyn MenuItemRepository>);

async fn open_store(config: &AppConfig) -> anyhow::Result<Repositories> {
    match config.store.backend {
        StoreBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(&config.database)
                .await
                .context("database connection failed")?;
            info!("Database connection established.");

            if config.database.run_migrations {
                run_migrations(&pool).await.context("migrations failed")?;
            }

            let menus: Arc<dyn MenuRepository> = Arc::new(PgMenuRepository::new(pool.clone()));
            let items: Arc<dyn MenuItemRepository> = Arc::new(PgMenuItemRepository::new(pool));
            Ok((menus, items))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            let store = MemoryStore::shared();
            let menus: Arc<dyn MenuRepository> = store.clone();
            let items: Arc<dyn MenuItemRepository> = store;
            Ok((menus, items))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
