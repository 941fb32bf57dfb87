use employee_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, configuration, logging)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_url,
        "Employee server starting..."
    );

    // 2. State (database + repository)
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
