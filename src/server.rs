//! HTTP server lifecycle.
//!
//! [`Server::start`] binds the listener and serves the API on a background
//! task; the returned [`ServerHandle`] stops it gracefully.

use std::future::Future;
use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::routes::app_router;
use crate::config::{validate, Config};
use crate::state::AppState;
use crate::{Result, ScrapeError};

/// Entry point for starting the API server.
pub struct Server;

impl Server {
    /// Builds the application state from `config` and starts serving on
    /// `config.server.listen_addr`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - The HTTP client or a selector cannot be built
    /// - The listen address is invalid or cannot be bound
    pub async fn start(config: &Config) -> Result<ServerHandle> {
        validate(config)?;
        let state = AppState::from_config(config)?;
        Self::start_with_state(&config.server.listen_addr, state).await
    }

    /// Starts serving an already built state on `listen_addr`.
    pub async fn start_with_state(
        listen_addr: &str,
        state: AppState,
    ) -> Result<ServerHandle> {
        let addr: SocketAddr = listen_addr
            .parse()
            .map_err(|source| ScrapeError::ListenAddr {
                addr: listen_addr.to_string(),
                source,
            })?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = app_router(state);

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::info!("Listening on http://{}", local_addr);

        Ok(ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// A running server.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Address the server is actually bound to (useful with port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting connections, lets in-flight requests finish, and
    /// waits for the server task to exit.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        join_server(self.task.await)?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Serves until `signal` completes, then shuts down gracefully.
    ///
    /// Returns early if the server task exits on its own.
    pub async fn shutdown_on(mut self, signal: impl Future<Output = ()>) -> Result<()> {
        tokio::select! {
            joined = &mut self.task => return join_server(joined),
            _ = signal => {
                tracing::info!("Shutdown signal received");
            }
        }
        self.shutdown().await
    }
}

fn join_server(
    joined: std::result::Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    joined.map_err(std::io::Error::other)??;
    Ok(())
}
