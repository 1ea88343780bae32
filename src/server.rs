use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::AppConfig;

// =============================================================================
// Server
// =============================================================================

pub struct Server {
    config: AppConfig,
}

impl Server {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(AppConfig::default())
    }

    /// Binds the configured address and serves `router` until SIGINT or
    /// SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails.
    pub async fn run(self, router: Router) -> anyhow::Result<()> {
        let address = self.config.socket_addr();
        let listener = TcpListener::bind(&address).await?;

        match listener.local_addr() {
            Ok(local) => tracing::info!(address = %local, "Server is listening on port {}", local.port()),
            Err(error) => tracing::warn!(%error, "Could not determine local address"),
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}

// =============================================================================
// Shutdown Signal
// =============================================================================

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_keeps_config() {
        let config = AppConfig::builder().host("127.0.0.1").port(8080).build();
        let server = Server::new(config.clone());

        assert_eq!(server.config(), &config);
    }

    #[rstest]
    fn with_defaults_uses_port_3000() {
        let server = Server::with_defaults();

        assert_eq!(server.config().port, 3000);
        assert_eq!(server.config().socket_addr(), "0.0.0.0:3000");
    }

    #[rstest]
    #[tokio::test]
    async fn run_fails_when_port_is_taken() {
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();
        let config = AppConfig::builder().host("127.0.0.1").port(port).build();

        let result = Server::new(config).run(Router::new()).await;

        assert!(result.is_err());
    }
}
