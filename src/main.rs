//! Task Board server
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (e.g., `debug`, `info`, `task_board=debug`)
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `TASKS_FILE`: JSON task document (default: `tasks.json`)
//! - `PUBLIC_DIR`: Static asset directory (default: `public`)

use task_board::api::{AppState, create_router};
use task_board::config::AppConfig;
use task_board::infrastructure::JsonFileTaskStore;
use task_board::server::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting Task Board");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            return Err(error.into());
        }
    };

    tracing::info!(
        tasks_file = %config.tasks_file.display(),
        public_dir = %config.public_dir.display(),
        "Configuration loaded"
    );

    let store = JsonFileTaskStore::new(&config.tasks_file);
    let router = create_router(AppState::new(store), &config.public_dir);

    Server::new(config).run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("task_board=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
