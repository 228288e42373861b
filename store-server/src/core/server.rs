//! Server Implementation
//!
//! HTTP 服务器启动和优雅关闭

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Bind `0.0.0.0:{PORT}` and serve until SIGINT/SIGTERM
    pub async fn run(&self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// After the signal, in-flight requests get `shutdown_timeout` to drain.
    /// Feed sessions are closed right away.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config)?,
        };

        let local_addr = listener.local_addr()?;
        tracing::info!(
            addr = %local_addr,
            environment = %self.config.environment,
            kitchen_url = %self.config.kitchen_url,
            "🍕 Store server starting"
        );

        let hub = state.hub.clone();
        let (drain_tx, drain_rx) = oneshot::channel::<()>();
        let signal = async move {
            shutdown.await;
            let closed = hub.disconnect_all();
            tracing::info!(feed_clients = closed, "Shutting down...");
            let _ = drain_tx.send(());
        };

        let app = api::build_app(state);
        let server = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();

        let grace = self.config.shutdown_timeout();
        tokio::select! {
            res = server => res?,
            _ = async {
                let _ = drain_rx.await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(timeout_ms = self.config.shutdown_timeout_ms, "Graceful shutdown timed out, forcing exit");
            }
        }

        tracing::info!("✅ Server shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
}
