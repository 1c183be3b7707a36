//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, StorageBackend};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, DbStore, FileStore, Store};

/// Apply CLI overrides on top of the environment configuration
fn apply_overrides(mut config: Config, args: ServeArgs) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    if let Some(backend) = args.backend {
        config.storage_backend = backend;
    }
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    config
}

/// Open the configured backend.
pub async fn open_store(config: &Config) -> AppResult<Arc<dyn Store>> {
    match config.storage_backend {
        StorageBackend::File => {
            tracing::info!(path = %config.data_file.display(), "Using JSON file storage");
            Ok(Arc::new(FileStore::new(&config.data_file)))
        }
        StorageBackend::Database => {
            let url = config.database_url.as_deref().ok_or_else(|| {
                AppError::internal("DATABASE_URL must be set for the database backend")
            })?;
            let database = Database::connect(url).await?;
            tracing::info!("Using database storage");
            Ok(Arc::new(DbStore::new(database)))
        }
    }
}

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");
    let config = apply_overrides(config, args);

    let store = open_store(&config).await?;
    let app = create_router(AppState::from_store(store));

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Backend running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base_config() -> Config {
        Config {
            storage_backend: StorageBackend::File,
            data_file: PathBuf::from("data/db.json"),
            database_url: None,
            server_host: "0.0.0.0".into(),
            server_port: 5000,
        }
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let args = ServeArgs {
            port: Some(9000),
            data_file: Some(PathBuf::from("/tmp/blogs.json")),
            ..Default::default()
        };

        let config = apply_overrides(base_config(), args);
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.data_file, PathBuf::from("/tmp/blogs.json"));
    }

    #[tokio::test]
    async fn test_database_backend_requires_url() {
        let config = Config {
            storage_backend: StorageBackend::Database,
            ..base_config()
        };

        let result = open_store(&config).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_open_file_store() {
        let store = open_store(&base_config()).await.unwrap();
        assert_eq!(store.backend(), StorageBackend::File);
    }
}
