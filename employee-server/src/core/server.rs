use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind the HTTP port and serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let app = api::build_app().with_state(self.state.clone());

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!("Server running on http://localhost:{}", self.config.http_port);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
