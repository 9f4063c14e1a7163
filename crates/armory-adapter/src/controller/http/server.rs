//! API server implementation.

use std::net::SocketAddr;
use std::time::Duration;

use armory_domain::LoadoutRepository;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::{cors_layer, request_context};
use super::routes::create_router;
use super::state::AppState;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Address to bind to.
    pub bind_address: SocketAddr,
    /// Request timeout. A request still running after this is answered
    /// with 408 and its handler (including any store call) is dropped.
    pub request_timeout: Duration,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// API server.
pub struct ApiServer<R> {
    config: ApiServerConfig,
    state: AppState<R>,
}

impl<R> ApiServer<R>
where
    R: LoadoutRepository + Clone + 'static,
{
    /// Creates a new API server.
    pub fn new(state: AppState<R>, config: ApiServerConfig) -> Self {
        Self { config, state }
    }

    /// Builds the router with the full middleware stack.
    pub fn router(&self) -> Router {
        create_router(self.state.clone())
            .layer(TimeoutLayer::new(self.config.request_timeout))
            .layer(middleware::from_fn(request_context))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<(), std::io::Error> {
        self.run_until(shutdown_signal()).await
    }

    /// Runs the server with a custom shutdown signal.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let addr = self.config.bind_address;

        let listener = TcpListener::bind(addr).await?;
        info!(address = %addr, "API server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("API server shut down gracefully");
        Ok(())
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
