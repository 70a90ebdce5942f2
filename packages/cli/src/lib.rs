use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;

use config::{Config, StorageProvider};
use taskdeck_api::AppState;
use taskdeck_tasks::{MemoryTaskStorage, SqliteTaskStorage, TaskStorage};

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let storage: Arc<dyn TaskStorage> = match config.storage_provider {
        StorageProvider::Memory => {
            info!("Using in-memory task storage");
            Arc::new(MemoryTaskStorage::new())
        }
        StorageProvider::Sqlite => {
            info!("Using SQLite task storage at {}", config.database_url);
            Arc::new(SqliteTaskStorage::connect(&config.database_url).await?)
        }
    };
    storage.initialize().await?;

    // Development posture: every origin, method and header is allowed
    let cors = CorsLayer::very_permissive();

    let app = taskdeck_api::create_router(AppState::new(storage))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    println!("✅ Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
